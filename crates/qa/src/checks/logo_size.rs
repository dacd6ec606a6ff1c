//! Declared logo size bounds check.

use creative_core::{CreativeTemplate, QaConfig};
use serde_json::json;
use uuid::Uuid;

use crate::types::{Issue, IssueType, Severity};

/// Allowed deviation from the recommended size before an info issue fires.
const RECOMMENDED_TOLERANCE_PX: f64 = 20.0;

/// Validate the declared logo size against the configured bounds.
///
/// At most one issue can fire: below the minimum is an error, above the
/// maximum is a warning, and a size inside the valid range that strays more
/// than 20px from the recommendation is informational.
pub fn check_logo_size(template: &CreativeTemplate, config: &QaConfig, issues: &mut Vec<Issue>) {
    let Some(logo_size) = template.content.logo_size else {
        return;
    };

    if logo_size < config.min_logo_size {
        issues.push(Issue {
            id: Uuid::new_v4(),
            issue_type: IssueType::LogoSize,
            severity: Severity::Error,
            message: format!(
                "Logo size {logo_size}px is below the minimum {}px",
                config.min_logo_size
            ),
            details: None,
            field: Some("logo_size".to_string()),
            suggestion: Some(format!(
                "Increase the logo to at least {}px",
                config.min_logo_size
            )),
            value: Some(json!(logo_size)),
            threshold: Some(json!(config.min_logo_size)),
        });
    } else if logo_size > config.max_logo_size {
        issues.push(Issue {
            id: Uuid::new_v4(),
            issue_type: IssueType::LogoSize,
            severity: Severity::Warning,
            message: format!(
                "Logo size {logo_size}px exceeds the maximum {}px",
                config.max_logo_size
            ),
            details: None,
            field: Some("logo_size".to_string()),
            suggestion: Some(format!(
                "Reduce the logo to at most {}px",
                config.max_logo_size
            )),
            value: Some(json!(logo_size)),
            threshold: Some(json!(config.max_logo_size)),
        });
    } else if (logo_size - config.recommended_logo_size).abs() > RECOMMENDED_TOLERANCE_PX {
        issues.push(Issue {
            id: Uuid::new_v4(),
            issue_type: IssueType::LogoSize,
            severity: Severity::Info,
            message: format!(
                "Logo size {logo_size}px differs from the recommended {}px",
                config.recommended_logo_size
            ),
            details: None,
            field: Some("logo_size".to_string()),
            suggestion: Some(format!(
                "Consider sizing the logo close to {}px",
                config.recommended_logo_size
            )),
            value: Some(json!(logo_size)),
            threshold: Some(json!(config.recommended_logo_size)),
        });
    }
}
