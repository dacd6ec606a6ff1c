//! Hard minimum font sizes for readable copy.

use creative_core::{CreativeTemplate, QaConfig};
use serde_json::json;
use uuid::Uuid;

use crate::types::{Issue, IssueType, Severity};

/// Headlines below this size are hard to read at typical ad scales.
const MIN_HEADLINE_SIZE_PX: f64 = 24.0;

/// Body copy below this size is illegible on small placements.
const MIN_BODY_SIZE_PX: f64 = 14.0;

/// Warn about font sizes below the hard-coded minimums. Each sub-check only
/// applies when the corresponding style field is declared.
pub fn check_readability(template: &CreativeTemplate, _config: &QaConfig, issues: &mut Vec<Issue>) {
    if let Some(size) = template.style.headline_size {
        if size < MIN_HEADLINE_SIZE_PX {
            issues.push(Issue {
                id: Uuid::new_v4(),
                issue_type: IssueType::TextReadability,
                severity: Severity::Warning,
                message: format!(
                    "Headline size {size}px is below the readable minimum {MIN_HEADLINE_SIZE_PX}px"
                ),
                details: None,
                field: Some("headline_size".to_string()),
                suggestion: Some(format!(
                    "Use a headline size of at least {MIN_HEADLINE_SIZE_PX}px"
                )),
                value: Some(json!(size)),
                threshold: Some(json!(MIN_HEADLINE_SIZE_PX)),
            });
        }
    }

    if let Some(size) = template.style.body_size {
        if size < MIN_BODY_SIZE_PX {
            issues.push(Issue {
                id: Uuid::new_v4(),
                issue_type: IssueType::TextReadability,
                severity: Severity::Warning,
                message: format!(
                    "Body size {size}px is below the readable minimum {MIN_BODY_SIZE_PX}px"
                ),
                details: None,
                field: Some("body_size".to_string()),
                suggestion: Some(format!("Use a body size of at least {MIN_BODY_SIZE_PX}px")),
                value: Some(json!(size)),
                threshold: Some(json!(MIN_BODY_SIZE_PX)),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use creative_core::{Dimensions, TemplateContent, TemplateStyle};

    use super::*;

    fn template_with_sizes(headline_size: Option<f64>, body_size: Option<f64>) -> CreativeTemplate {
        CreativeTemplate {
            id: None,
            name: None,
            dimensions: Dimensions {
                width: 1080,
                height: 1080,
            },
            content: TemplateContent::default(),
            style: TemplateStyle {
                headline_size,
                body_size,
                ..TemplateStyle::default()
            },
        }
    }

    fn run(template: &CreativeTemplate) -> Vec<Issue> {
        let mut issues = Vec::new();
        check_readability(template, &QaConfig::default(), &mut issues);
        issues
    }

    // 1. A small headline warns
    #[test]
    fn test_small_headline_warns() {
        let issues = run(&template_with_sizes(Some(20.0), None));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].field.as_deref(), Some("headline_size"));
    }

    // 2. The minimum itself passes
    #[test]
    fn test_minimums_pass() {
        assert!(run(&template_with_sizes(Some(24.0), Some(14.0))).is_empty());
    }

    // 3. Small body copy warns independently
    #[test]
    fn test_small_body_warns() {
        let issues = run(&template_with_sizes(None, Some(12.0)));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field.as_deref(), Some("body_size"));
    }

    // 4. Both sub-checks can fire in one run
    #[test]
    fn test_both_fire() {
        let issues = run(&template_with_sizes(Some(18.0), Some(10.0)));
        assert_eq!(issues.len(), 2);
    }

    // 5. Absent sizes mean no check
    #[test]
    fn test_absent_sizes_skip() {
        assert!(run(&template_with_sizes(None, None)).is_empty());
    }
}
