//! Copy length checks against per-field character limits.

use creative_core::{CreativeTemplate, QaConfig};
use serde_json::json;
use uuid::Uuid;

use crate::types::{Issue, IssueType, Severity};

/// Compare each copy field against its configured character limit.
///
/// A field is only checked when the template carries it AND the config
/// defines a limit for it. Body overflow is informational; the shorter
/// fields warn.
pub fn check_text_overflow(template: &CreativeTemplate, config: &QaConfig, issues: &mut Vec<Issue>) {
    if !config.check_text_fit {
        return;
    }

    let content = &template.content;
    let limits = &config.max_text_length;

    let fields: [(&str, Option<&String>, Option<usize>, Severity); 4] = [
        (
            "headline",
            content.headline.as_ref(),
            limits.headline,
            Severity::Warning,
        ),
        (
            "subheadline",
            content.subheadline.as_ref(),
            limits.subheadline,
            Severity::Warning,
        ),
        ("body", content.body.as_ref(), limits.body, Severity::Info),
        ("cta", content.cta.as_ref(), limits.cta, Severity::Warning),
    ];

    for (field, text, limit, severity) in fields {
        let (Some(text), Some(limit)) = (text, limit) else {
            continue;
        };
        let length = text.chars().count();
        if length <= limit {
            continue;
        }

        issues.push(Issue {
            id: Uuid::new_v4(),
            issue_type: IssueType::TextOverflow,
            severity,
            message: format!(
                "Text in '{field}' is {} characters over the {limit}-character limit",
                length - limit
            ),
            details: None,
            field: Some(field.to_string()),
            suggestion: Some(format!("Shorten the {field} to {limit} characters or fewer")),
            value: Some(json!(length)),
            threshold: Some(json!(limit)),
        });
    }
}
