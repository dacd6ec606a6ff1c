//! Edge safe-zone padding check.

use creative_core::{CreativeTemplate, QaConfig};
use serde_json::json;
use uuid::Uuid;

use crate::types::{Issue, IssueType, Severity};

/// Warn when the declared padding leaves content inside the platform crop
/// margin. Missing padding counts as zero.
pub fn check_safe_zones(template: &CreativeTemplate, config: &QaConfig, issues: &mut Vec<Issue>) {
    if !config.check_safe_zones {
        return;
    }

    let padding = template.style.padding.unwrap_or(0.0);
    if padding >= config.safe_zone_margin {
        return;
    }

    issues.push(Issue {
        id: Uuid::new_v4(),
        issue_type: IssueType::SafeZone,
        severity: Severity::Warning,
        message: format!(
            "Padding {padding}px is inside the {}px safe zone",
            config.safe_zone_margin
        ),
        details: None,
        field: Some("padding".to_string()),
        suggestion: Some(format!(
            "Keep text and logos at least {}px from the edges",
            config.safe_zone_margin
        )),
        value: Some(json!(padding)),
        threshold: Some(json!(config.safe_zone_margin)),
    });
}

#[cfg(test)]
mod tests {
    use creative_core::{Dimensions, TemplateContent, TemplateStyle};

    use super::*;

    fn template_with_padding(padding: Option<f64>) -> CreativeTemplate {
        CreativeTemplate {
            id: None,
            name: None,
            dimensions: Dimensions {
                width: 1080,
                height: 1080,
            },
            content: TemplateContent::default(),
            style: TemplateStyle {
                padding,
                ..TemplateStyle::default()
            },
        }
    }

    fn run(template: &CreativeTemplate, config: &QaConfig) -> Vec<Issue> {
        let mut issues = Vec::new();
        check_safe_zones(template, config, &mut issues);
        issues
    }

    // 1. Padding of 10 against the default 40px margin
    #[test]
    fn test_thin_padding_warns() {
        let issues = run(&template_with_padding(Some(10.0)), &QaConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::SafeZone);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].value, Some(json!(10.0)));
        assert_eq!(issues[0].threshold, Some(json!(40.0)));
    }

    // 2. Missing padding counts as zero
    #[test]
    fn test_missing_padding_is_zero() {
        let issues = run(&template_with_padding(None), &QaConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].value, Some(json!(0.0)));
    }

    // 3. Padding equal to the margin passes
    #[test]
    fn test_margin_boundary() {
        assert!(run(&template_with_padding(Some(40.0)), &QaConfig::default()).is_empty());
        assert!(run(&template_with_padding(Some(64.0)), &QaConfig::default()).is_empty());
    }

    // 4. The switch disables the check
    #[test]
    fn test_check_disabled() {
        let config = QaConfig {
            check_safe_zones: false,
            ..QaConfig::default()
        };
        assert!(run(&template_with_padding(Some(0.0)), &config).is_empty());
    }
}
