//! Text and CTA contrast checks against WCAG ratios.

use creative_core::{CreativeTemplate, QaConfig};
use serde_json::json;
use uuid::Uuid;

use crate::checks::round2;
use crate::color::contrast_ratio;
use crate::types::{Issue, IssueType, Severity};

/// Background assumed when a template declares no color at all.
const FALLBACK_BACKGROUND: &str = "#ffffff";

/// Below this ratio a contrast finding is an error rather than a warning.
const ERROR_RATIO: f64 = 3.0;

/// Check headline text and CTA text contrast against their backgrounds.
///
/// The effective background resolves in priority order: explicit
/// `background_color`, then the gradient's `from` stop, then
/// `primary_color`, then white. A color pair that fails to parse produces
/// no issue.
pub fn check_contrast(template: &CreativeTemplate, config: &QaConfig, issues: &mut Vec<Issue>) {
    let background = template
        .content
        .background_color
        .as_deref()
        .or_else(|| template.content.gradient.as_ref().map(|g| g.from.as_str()))
        .or(template.style.primary_color.as_deref())
        .unwrap_or(FALLBACK_BACKGROUND);

    if config.check_text_contrast && template.content.headline.is_some() {
        if let Some(text_color) = template.style.text_color.as_deref() {
            push_if_low(
                text_color,
                background,
                "headline",
                config.min_contrast_ratio,
                issues,
            );
        }
    }

    if config.check_cta_contrast && template.content.cta.is_some() {
        if let (Some(cta_text), Some(cta_background)) = (
            template.style.cta_text_color.as_deref(),
            template.style.cta_background_color.as_deref(),
        ) {
            push_if_low(
                cta_text,
                cta_background,
                "cta",
                config.min_contrast_ratio,
                issues,
            );
        }
    }
}

fn push_if_low(
    foreground: &str,
    background: &str,
    field: &str,
    min_ratio: f64,
    issues: &mut Vec<Issue>,
) {
    let Some(ratio) = contrast_ratio(foreground, background) else {
        return;
    };
    if ratio >= min_ratio {
        return;
    }

    let severity = if ratio < ERROR_RATIO {
        Severity::Error
    } else {
        Severity::Warning
    };

    issues.push(Issue {
        id: Uuid::new_v4(),
        issue_type: IssueType::Contrast,
        severity,
        message: format!(
            "Low contrast on {field}: {ratio:.2}:1 is below the required {min_ratio}:1"
        ),
        details: Some(format!("{foreground} on {background}")),
        field: Some(field.to_string()),
        suggestion: Some(
            "Pick text and background colors that are further apart in brightness".to_string(),
        ),
        value: Some(json!(round2(ratio))),
        threshold: Some(json!(min_ratio)),
    });
}
