//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use trellis_common::ConfigError;

/// Returns all keybinds as `(name, binding)` pairs.
///
/// Overlay commit/cancel are excluded: they live in their own layer and
/// only apply while the overlay is open, so they may share keys with
/// page-level bindings.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(String, &str)> {
    let mut binds: Vec<(String, &str)> = [
        ("split_left", &config.split_left),
        ("split_right", &config.split_right),
        ("split_up", &config.split_up),
        ("split_down", &config.split_down),
        ("focus_left", &config.focus_left),
        ("focus_right", &config.focus_right),
        ("focus_up", &config.focus_up),
        ("focus_down", &config.focus_down),
        ("resize_left", &config.resize_left),
        ("resize_right", &config.resize_right),
        ("resize_up", &config.resize_up),
        ("resize_down", &config.resize_down),
        ("close_pane", &config.close_pane),
        ("focus_next", &config.focus_next),
        ("focus_prev", &config.focus_prev),
        ("toggle_overlay", &config.toggle_overlay),
        ("toggle_hints", &config.toggle_hints),
        ("reload", &config.reload),
        ("hard_reload", &config.hard_reload),
        ("back", &config.back),
        ("forward", &config.forward),
        ("scroll_down", &config.scroll_down),
        ("scroll_up", &config.scroll_up),
        ("new_workspace", &config.new_workspace),
        ("close_workspace", &config.close_workspace),
        ("quit", &config.quit),
    ]
    .into_iter()
    .map(|(name, bind)| (name.to_string(), bind.as_str()))
    .collect();

    for (i, bind) in config.switch_workspace.iter().enumerate() {
        binds.push((format!("switch_workspace[{i}]"), bind.as_str()));
    }
    binds
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_includes_every_workspace_slot() {
        let config = KeybindConfig::default();
        let binds = all_keybinds(&config);
        assert_eq!(binds.len(), 26 + 9);
        assert!(binds
            .iter()
            .any(|(n, b)| n == "switch_workspace[8]" && *b == "Cmd+9"));
    }

    #[test]
    fn overlay_layer_is_not_checked_against_page_bindings() {
        let config = KeybindConfig {
            overlay_cancel: "J".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            reload: "Cmd+W".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("Cmd+W"));
        assert!(err.contains("close_pane"));
    }

    #[test]
    fn detects_duplicate_workspace_binding() {
        let mut config = KeybindConfig::default();
        config.switch_workspace[2] = "Cmd+Q".into();
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("switch_workspace[2]"));
    }
}
