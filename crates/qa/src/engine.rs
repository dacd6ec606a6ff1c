//! QA orchestrator: runs the six rule checks in a fixed order and folds the
//! findings into a composite score and verdict.

use std::time::Instant;

use chrono::Utc;
use creative_core::{CreativeTemplate, QaConfig};
use tracing::{debug, info};

use crate::checks;
use crate::types::{CheckResult, Issue, QaResult, Severity};

/// Score deducted per error issue.
const ERROR_PENALTY: u32 = 15;
/// Score deducted per warning issue.
const WARNING_PENALTY: u32 = 8;
/// Score deducted per info issue.
const INFO_PENALTY: u32 = 3;

/// Minimum score a creative must reach to pass, given zero errors.
const PASS_SCORE: u32 = 70;

const MAX_SCORE: u32 = 100;

type CheckFn = fn(&CreativeTemplate, &QaConfig, &mut Vec<Issue>);

/// The rule checks in their fixed execution order. The set is closed; output
/// issue ordering follows this array, then insertion order within a check.
const CHECKS: [(&str, CheckFn); 6] = [
    ("contrast", checks::check_contrast),
    ("text_overflow", checks::check_text_overflow),
    ("logo_size", checks::check_logo_size),
    ("safe_zone", checks::check_safe_zones),
    ("aspect_ratio", checks::check_aspect_ratio),
    ("readability", checks::check_readability),
];

/// Run every rule check against a creative and aggregate the findings into
/// a scored [`QaResult`].
///
/// Infallible by design: malformed colors and absent fields make individual
/// sub-checks skip rather than abort the run. Safe to call concurrently;
/// there is no shared state.
pub fn run_qa_checks(template: &CreativeTemplate, config: &QaConfig) -> QaResult {
    let mut issues: Vec<Issue> = Vec::new();
    let mut check_results = Vec::with_capacity(CHECKS.len());

    for (name, check) in CHECKS {
        let seen = issues.len();
        let start = Instant::now();
        check(template, config, &mut issues);
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        let passed = issues.len() == seen;

        debug!(
            check = name,
            passed,
            found = issues.len() - seen,
            "rule check complete"
        );

        check_results.push(CheckResult {
            name: name.to_string(),
            passed,
            duration_ms,
        });
    }

    let score = compute_score(&issues);
    let error_count = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Error)
        .count();
    let passed = error_count == 0 && score >= PASS_SCORE;

    info!(
        score,
        passed,
        issues = issues.len(),
        errors = error_count,
        "QA run complete"
    );

    QaResult {
        passed,
        score,
        issues,
        checks: check_results,
        timestamp: Utc::now(),
    }
}

/// Fold issue severities into a score. Saturates at zero, so the result
/// always sits within `0..=100`.
fn compute_score(issues: &[Issue]) -> u32 {
    let deductions: u32 = issues
        .iter()
        .map(|issue| match issue.severity {
            Severity::Error => ERROR_PENALTY,
            Severity::Warning => WARNING_PENALTY,
            Severity::Info => INFO_PENALTY,
        })
        .sum();
    MAX_SCORE.saturating_sub(deductions)
}
