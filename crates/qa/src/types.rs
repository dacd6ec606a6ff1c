use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How severe a QA finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The rule family a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Contrast,
    TextOverflow,
    LogoSize,
    SafeZone,
    AspectRatio,
    TextReadability,
}

/// A single actionable finding against a creative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within a run; freshly generated per issue.
    pub id: Uuid,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: String,
    pub details: Option<String>,
    /// Template field the finding refers to, e.g. `headline` or `padding`.
    pub field: Option<String>,
    pub suggestion: Option<String>,
    /// Measured value behind the finding: a length, ratio, or pixel count.
    pub value: Option<serde_json::Value>,
    /// Limit the value was compared against.
    pub threshold: Option<serde_json::Value>,
}

/// Outcome of one rule check within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    /// True when the check produced no issues.
    pub passed: bool,
    /// Wall-clock duration in milliseconds. Diagnostic only.
    pub duration_ms: f64,
}

/// Aggregate result of one QA run. Ephemeral; created and returned per call,
/// never stored by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResult {
    pub passed: bool,
    /// Composite quality score, always within `0..=100`.
    pub score: u32,
    pub issues: Vec<Issue>,
    pub checks: Vec<CheckResult>,
    pub timestamp: DateTime<Utc>,
}
