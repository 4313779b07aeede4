//! Trellis configuration.
//!
//! TOML-based configuration with full validation. Every section uses
//! `serde(default)` so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trellis_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("gutter = {}", config.layout.gutter);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{TrellisConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use trellis_common::ConfigError;

/// Loads `config.toml` from the OS config directory (creating a default
/// file when none exists) and validates the result.
pub fn load_config() -> Result<TrellisConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Loads and validates a config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<TrellisConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TrellisConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TrellisConfig::default());
        for section in [
            "\"layout\"",
            "\"browser\"",
            "\"hints\"",
            "\"session\"",
            "\"window\"",
            "\"logging\"",
            "\"keybinds\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&TrellisConfig::default());
        let parsed: TrellisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.session.persist_debounce_ms, 1000);
        assert_eq!(parsed.hints.alphabet, "asdghjkl");
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nmax_workspaces = 40\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("session.max_workspaces"));
    }
}
