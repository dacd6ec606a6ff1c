//! Shared data model for Creative Audit: creative templates, QA
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod types;

pub use config::{AspectRatio, MaxTextLength, QaConfig};
pub use error::{AuditError, AuditResult};
pub use types::{CreativeTemplate, Dimensions, Gradient, TemplateContent, TemplateStyle};
