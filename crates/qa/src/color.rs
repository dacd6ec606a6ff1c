//! Hex color parsing and WCAG contrast math.

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a hex color string such as `#3b82f6` or the shorthand `#abc`.
///
/// A leading `#` is optional and 3-digit shorthand expands to 6 digits.
/// Returns `None` for anything malformed; parsing never panics.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.trim().strip_prefix('#').unwrap_or_else(|| hex.trim());

    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };

    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Relative luminance of a color per ITU-R BT.709, with the standard
/// piecewise sRGB linearization.
pub fn relative_luminance(rgb: &Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two hex colors, in `1.0..=21.0`.
///
/// Symmetric in its arguments. Returns `None` when either color fails to
/// parse, which callers treat as "sub-check does not apply".
pub fn contrast_ratio(color_a: &str, color_b: &str) -> Option<f64> {
    let lum_a = relative_luminance(&hex_to_rgb(color_a)?);
    let lum_b = relative_luminance(&hex_to_rgb(color_b)?);

    let (lighter, darker) = if lum_a >= lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };

    Some((lighter + 0.05) / (darker + 0.05))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1. Shorthand expansion
    #[test]
    fn test_shorthand_equals_full_form() {
        assert_eq!(hex_to_rgb("#fff"), hex_to_rgb("#ffffff"));
        assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
    }

    // 2. Channel extraction
    #[test]
    fn test_parses_channels() {
        assert_eq!(
            hex_to_rgb("#3b82f6"),
            Some(Rgb {
                r: 0x3b,
                g: 0x82,
                b: 0xf6
            })
        );
        // The leading '#' is optional.
        assert_eq!(hex_to_rgb("3b82f6"), hex_to_rgb("#3b82f6"));
    }

    // 3. Malformed input returns None
    #[test]
    fn test_malformed_input() {
        for bad in ["", "#", "#12", "#12345", "#1234567", "#gggggg", "not a color"] {
            assert_eq!(hex_to_rgb(bad), None, "expected None for {:?}", bad);
        }
    }

    // 4. Luminance extremes
    #[test]
    fn test_luminance_extremes() {
        let black = relative_luminance(&Rgb { r: 0, g: 0, b: 0 });
        let white = relative_luminance(&Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
        assert_eq!(black, 0.0);
        assert!((white - 1.0).abs() < 1e-9);
    }

    // 5. White on black is the maximum ratio
    #[test]
    fn test_white_on_black_is_21() {
        let ratio = contrast_ratio("#ffffff", "#000000").unwrap();
        assert!((ratio - 21.0).abs() < 0.01);
    }

    // 6. Reflexive and symmetric
    #[test]
    fn test_reflexive_and_symmetric() {
        for color in ["#ffffff", "#3b82f6", "#172b4d", "#abc"] {
            let same = contrast_ratio(color, color).unwrap();
            assert!((same - 1.0).abs() < 1e-9, "ratio({0}, {0}) != 1", color);
        }
        let ab = contrast_ratio("#3b82f6", "#ffffff").unwrap();
        let ba = contrast_ratio("#ffffff", "#3b82f6").unwrap();
        assert_eq!(ab, ba);
    }

    // 7. Unparsable operands poison the ratio
    #[test]
    fn test_unparsable_ratio_is_none() {
        assert_eq!(contrast_ratio("#ffffff", "bogus"), None);
        assert_eq!(contrast_ratio("bogus", "#ffffff"), None);
    }
}
