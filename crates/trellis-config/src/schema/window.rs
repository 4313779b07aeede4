//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window geometry. A restored session overrides the size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "Trellis".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("width = 1600").unwrap();
        assert_eq!(config.width, 1600);
        assert_eq!(config.height, 800);
        assert_eq!(config.title, "Trellis");
    }
}
