//! The six rule checks. Each is a pure function of `(template, config)` that
//! appends its findings to the shared issue list and never fails.

mod aspect_ratio;
mod contrast;
mod logo_size;
mod readability;
mod safe_zone;
mod text_overflow;

pub use aspect_ratio::check_aspect_ratio;
pub use contrast::check_contrast;
pub use logo_size::check_logo_size;
pub use readability::check_readability;
pub use safe_zone::check_safe_zones;
pub use text_overflow::check_text_overflow;

/// Round to two decimals for display-friendly `value` payloads.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
