use std::path::Path;

use serde::Deserialize;

use crate::error::{AuditError, AuditResult};

/// Per-field character limits for the copy overflow check. A `None` entry
/// disables the check for that field; it is never treated as a zero limit.
#[derive(Debug, Clone, Deserialize)]
pub struct MaxTextLength {
    #[serde(default = "default_headline_chars")]
    pub headline: Option<usize>,
    #[serde(default = "default_subheadline_chars")]
    pub subheadline: Option<usize>,
    #[serde(default = "default_body_chars")]
    pub body: Option<usize>,
    #[serde(default = "default_cta_chars")]
    pub cta: Option<usize>,
}

/// An allowed aspect ratio, e.g. `16:9` with a 5% tolerance.
#[derive(Debug, Clone, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
    /// Fractional deviation allowed from the exact ratio. Defaults to 5%.
    #[serde(default)]
    pub tolerance: Option<f64>,
}

/// Tunable thresholds and switches for a QA run. Immutable per invocation.
/// Loaded from environment variables with the prefix `CREATIVE_AUDIT__` and
/// an optional TOML config file.
#[derive(Debug, Clone, Deserialize)]
pub struct QaConfig {
    #[serde(default = "default_min_contrast_ratio")]
    pub min_contrast_ratio: f64,
    #[serde(default = "default_check_text_contrast")]
    pub check_text_contrast: bool,
    #[serde(default = "default_check_cta_contrast")]
    pub check_cta_contrast: bool,
    #[serde(default)]
    pub max_text_length: MaxTextLength,
    #[serde(default = "default_check_text_fit")]
    pub check_text_fit: bool,
    #[serde(default = "default_min_logo_size")]
    pub min_logo_size: f64,
    #[serde(default = "default_max_logo_size")]
    pub max_logo_size: f64,
    #[serde(default = "default_recommended_logo_size")]
    pub recommended_logo_size: f64,
    #[serde(default = "default_safe_zone_margin")]
    pub safe_zone_margin: f64,
    #[serde(default = "default_check_safe_zones")]
    pub check_safe_zones: bool,
    /// Absent or empty disables the aspect-ratio check.
    #[serde(default)]
    pub allowed_aspect_ratios: Option<Vec<AspectRatio>>,
}

impl QaConfig {
    /// Load configuration from environment variables and an optional config
    /// file, with environment taking precedence.
    pub fn load(file: Option<&Path>) -> AuditResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("CREATIVE_AUDIT")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder
            .build()
            .map_err(|e| AuditError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| AuditError::Config(e.to_string()))
    }
}

// Default functions
fn default_min_contrast_ratio() -> f64 {
    4.5
}
fn default_check_text_contrast() -> bool {
    true
}
fn default_check_cta_contrast() -> bool {
    true
}
fn default_headline_chars() -> Option<usize> {
    Some(80)
}
fn default_subheadline_chars() -> Option<usize> {
    Some(120)
}
fn default_body_chars() -> Option<usize> {
    Some(300)
}
fn default_cta_chars() -> Option<usize> {
    Some(25)
}
fn default_check_text_fit() -> bool {
    true
}
fn default_min_logo_size() -> f64 {
    40.0
}
fn default_max_logo_size() -> f64 {
    200.0
}
fn default_recommended_logo_size() -> f64 {
    80.0
}
fn default_safe_zone_margin() -> f64 {
    40.0
}
fn default_check_safe_zones() -> bool {
    true
}

impl Default for MaxTextLength {
    fn default() -> Self {
        Self {
            headline: default_headline_chars(),
            subheadline: default_subheadline_chars(),
            body: default_body_chars(),
            cta: default_cta_chars(),
        }
    }
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            min_contrast_ratio: default_min_contrast_ratio(),
            check_text_contrast: default_check_text_contrast(),
            check_cta_contrast: default_check_cta_contrast(),
            max_text_length: MaxTextLength::default(),
            check_text_fit: default_check_text_fit(),
            min_logo_size: default_min_logo_size(),
            max_logo_size: default_max_logo_size(),
            recommended_logo_size: default_recommended_logo_size(),
            safe_zone_margin: default_safe_zone_margin(),
            check_safe_zones: default_check_safe_zones(),
            allowed_aspect_ratios: None,
        }
    }
}
