//! Pane layout configuration types.

use serde::{Deserialize, Serialize};

/// Pane geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between adjacent panes in pixels (valid range: 0-32).
    /// Never applied at the window edge.
    pub gutter: u32,
    /// Ratio change per resize keystroke (valid range: 0.01-0.5).
    pub resize_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gutter: 1,
            resize_step: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.gutter, 1);
        assert!((config.resize_step - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn layout_config_partial_toml() {
        let config: LayoutConfig = toml::from_str("resize_step = 0.1").unwrap();
        assert!((config.resize_step - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.gutter, 1);
    }
}
