//! Pure reducers and thin display helpers over a [`QaResult`].

use serde::{Deserialize, Serialize};

use crate::types::{Issue, QaResult, Severity};

/// Severity counts and check totals derived from a [`QaResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaSummary {
    pub score: u32,
    pub passed: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub checks_passed: usize,
    pub checks_total: usize,
}

/// Derive severity and check counts from a result. A pure reducer over the
/// result; it introduces no new computation path.
pub fn qa_summary(result: &QaResult) -> QaSummary {
    let mut summary = QaSummary {
        score: result.score,
        passed: result.passed,
        error_count: 0,
        warning_count: 0,
        info_count: 0,
        checks_passed: result.checks.iter().filter(|check| check.passed).count(),
        checks_total: result.checks.len(),
    };

    for issue in &result.issues {
        match issue.severity {
            Severity::Error => summary.error_count += 1,
            Severity::Warning => summary.warning_count += 1,
            Severity::Info => summary.info_count += 1,
        }
    }

    summary
}

/// One-line display form of an issue.
pub fn format_issue(issue: &Issue) -> String {
    let severity = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    match &issue.suggestion {
        Some(suggestion) => format!("[{severity}] {} ({suggestion})", issue.message),
        None => format!("[{severity}] {}", issue.message),
    }
}

/// Multi-line human-readable report for terminal output.
pub fn render_report(result: &QaResult) -> String {
    let summary = qa_summary(result);
    let verdict = if result.passed { "PASS" } else { "FAIL" };

    let mut out = format!(
        "QA {verdict}: score {}/100 ({} errors, {} warnings, {} info; {}/{} checks passed)\n",
        summary.score,
        summary.error_count,
        summary.warning_count,
        summary.info_count,
        summary.checks_passed,
        summary.checks_total,
    );

    if result.issues.is_empty() {
        out.push_str("No issues found\n");
    } else {
        for issue in &result.issues {
            out.push_str(&format_issue(issue));
            out.push('\n');
        }
    }

    out
}
