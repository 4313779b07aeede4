//! Page metadata reported by the injected extraction script.

pub mod sanitize;

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub favicon: Option<String>,
    pub description: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub image: Option<String>,
}

impl PageMetadata {
    /// Read the `metadata` IPC payload. Missing, empty or unsafe fields are
    /// left unset.
    pub fn from_json(payload: &Value) -> Self {
        let text = |key: &str| {
            payload
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            title: text("title"),
            favicon: sanitize::image_url(text("favicon")),
            description: text("description"),
            background_color: sanitize::color(text("backgroundColor")),
            text_color: sanitize::color(text("textColor")),
            image: sanitize::image_url(text("image")),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields() {
        let meta = PageMetadata::from_json(&json!({
            "title": "Example",
            "favicon": "https://example.com/favicon.ico",
            "description": "An example",
            "backgroundColor": "rgb(255, 255, 255)",
            "textColor": "#111",
            "image": "https://example.com/og.png",
        }));
        assert_eq!(meta.title.as_deref(), Some("Example"));
        assert_eq!(meta.favicon.as_deref(), Some("https://example.com/favicon.ico"));
        assert_eq!(meta.description.as_deref(), Some("An example"));
        assert_eq!(meta.background_color.as_deref(), Some("rgb(255, 255, 255)"));
        assert_eq!(meta.text_color.as_deref(), Some("#111"));
        assert_eq!(meta.image.as_deref(), Some("https://example.com/og.png"));
    }

    #[test]
    fn drops_unsafe_and_blank_values() {
        let meta = PageMetadata::from_json(&json!({
            "title": "   ",
            "backgroundColor": "red; background: url(x)",
            "favicon": "javascript:alert(1)",
            "textColor": 12,
        }));
        assert!(meta.is_empty());
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(PageMetadata::from_json(&Value::Null).is_empty());
    }
}
