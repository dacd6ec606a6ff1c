//! Aspect-ratio conformance check against a configured allow-list.

use creative_core::{CreativeTemplate, QaConfig};
use serde_json::json;
use uuid::Uuid;

use crate::checks::round2;
use crate::types::{Issue, IssueType, Severity};

/// Fractional tolerance applied when an allowed ratio does not declare one.
const DEFAULT_TOLERANCE: f64 = 0.05;

/// Check whether the creative's width/height ratio matches any allowed ratio
/// within that ratio's tolerance. No allow-list means the check is off.
pub fn check_aspect_ratio(template: &CreativeTemplate, config: &QaConfig, issues: &mut Vec<Issue>) {
    let Some(allowed) = config.allowed_aspect_ratios.as_deref() else {
        return;
    };
    if allowed.is_empty() {
        return;
    }

    let width = template.dimensions.width;
    let height = template.dimensions.height;
    let current = width as f64 / height as f64;

    let matched = allowed.iter().any(|ratio| {
        let target = ratio.width as f64 / ratio.height as f64;
        let tolerance = ratio.tolerance.unwrap_or(DEFAULT_TOLERANCE);
        (current - target).abs() <= target * tolerance
    });
    if matched {
        return;
    }

    let allowed_list = allowed
        .iter()
        .map(|ratio| format!("{}:{}", ratio.width, ratio.height))
        .collect::<Vec<_>>()
        .join(", ");

    issues.push(Issue {
        id: Uuid::new_v4(),
        issue_type: IssueType::AspectRatio,
        severity: Severity::Info,
        message: format!("Dimensions {width}x{height} match none of the allowed aspect ratios"),
        details: Some(format!("Allowed ratios: {allowed_list}")),
        field: None,
        suggestion: Some("Resize the creative to one of the allowed ratios".to_string()),
        value: Some(json!(round2(current))),
        threshold: Some(json!(allowed_list)),
    });
}
