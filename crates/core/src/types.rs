use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pixel dimensions of a creative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Two-stop background gradient declared on a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

/// Copy and declared asset metadata of a creative. Every field is optional;
/// an absent field means the template does not use that element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateContent {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub body: Option<String>,
    pub cta: Option<String>,
    pub background_color: Option<String>,
    pub gradient: Option<Gradient>,
    /// Declared logo edge length in pixels. The engine reasons about this
    /// number only, never about pixel data.
    pub logo_size: Option<f64>,
    pub author_name: Option<String>,
    pub author_title: Option<String>,
}

/// Colors, typography, and spacing declared on a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateStyle {
    pub text_color: Option<String>,
    pub primary_color: Option<String>,
    pub cta_background_color: Option<String>,
    pub cta_text_color: Option<String>,
    pub headline_size: Option<f64>,
    pub body_size: Option<f64>,
    pub padding: Option<f64>,
    pub font_family: Option<String>,
    pub border_radius: Option<f64>,
}

/// A generated ad creative as produced by the editor or a copy-variant
/// pipeline. Consumed read-only by the QA engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeTemplate {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub content: TemplateContent,
    #[serde(default)]
    pub style: TemplateStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1. A template with only dimensions parses; content and style default
    #[test]
    fn test_minimal_template_parses() {
        let template: CreativeTemplate =
            serde_json::from_str(r#"{"dimensions":{"width":1080,"height":1080}}"#).unwrap();
        assert_eq!(template.dimensions.width, 1080);
        assert!(template.content.headline.is_none());
        assert!(template.style.padding.is_none());
    }

    // 2. Partially populated content round-trips
    #[test]
    fn test_partial_content_roundtrip() {
        let template = CreativeTemplate {
            id: None,
            name: Some("summer-sale".to_string()),
            dimensions: Dimensions {
                width: 1200,
                height: 628,
            },
            content: TemplateContent {
                headline: Some("Summer Sale".to_string()),
                gradient: Some(Gradient {
                    from: "#0052cc".to_string(),
                    to: "#00b8d9".to_string(),
                }),
                logo_size: Some(64.0),
                ..TemplateContent::default()
            },
            style: TemplateStyle {
                text_color: Some("#ffffff".to_string()),
                ..TemplateStyle::default()
            },
        };

        let json = serde_json::to_string(&template).unwrap();
        let back: CreativeTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.content.headline.as_deref(), Some("Summer Sale"));
        assert_eq!(back.content.gradient.unwrap().from, "#0052cc");
        assert_eq!(back.content.logo_size, Some(64.0));
        assert!(back.content.body.is_none());
    }
}
