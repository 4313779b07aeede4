//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Ctrl, Alt/Option, Shift.
/// `Cmd` is Super on macOS and Ctrl elsewhere. Multiple modifiers: "Cmd+Shift+R".
/// Bindings without a modifier (e.g. `scroll_down = "J"`) are suppressed while
/// the focused page element accepts text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub split_left: String,
    pub split_right: String,
    pub split_up: String,
    pub split_down: String,
    pub focus_left: String,
    pub focus_right: String,
    pub focus_up: String,
    pub focus_down: String,
    pub resize_left: String,
    pub resize_right: String,
    pub resize_up: String,
    pub resize_down: String,
    pub close_pane: String,
    pub focus_next: String,
    pub focus_prev: String,
    pub toggle_overlay: String,
    pub overlay_commit: String,
    pub overlay_cancel: String,
    pub toggle_hints: String,
    pub reload: String,
    pub hard_reload: String,
    pub back: String,
    pub forward: String,
    pub scroll_down: String,
    pub scroll_up: String,
    pub new_workspace: String,
    pub close_workspace: String,
    /// Quick-switch bindings; entry `n` selects workspace index `n`.
    pub switch_workspace: Vec<String>,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            split_left: "Cmd+Shift+Left".into(),
            split_right: "Cmd+Shift+Right".into(),
            split_up: "Cmd+Shift+Up".into(),
            split_down: "Cmd+Shift+Down".into(),
            focus_left: "Cmd+Alt+Left".into(),
            focus_right: "Cmd+Alt+Right".into(),
            focus_up: "Cmd+Alt+Up".into(),
            focus_down: "Cmd+Alt+Down".into(),
            resize_left: "Cmd+Alt+Shift+Left".into(),
            resize_right: "Cmd+Alt+Shift+Right".into(),
            resize_up: "Cmd+Alt+Shift+Up".into(),
            resize_down: "Cmd+Alt+Shift+Down".into(),
            close_pane: "Cmd+W".into(),
            focus_next: "Ctrl+Tab".into(),
            focus_prev: "Ctrl+Shift+Tab".into(),
            toggle_overlay: "Cmd+L".into(),
            overlay_commit: "Enter".into(),
            overlay_cancel: "Escape".into(),
            toggle_hints: "F".into(),
            reload: "Cmd+R".into(),
            hard_reload: "Cmd+Shift+R".into(),
            back: "Cmd+[".into(),
            forward: "Cmd+]".into(),
            scroll_down: "J".into(),
            scroll_up: "K".into(),
            new_workspace: "Cmd+Shift+N".into(),
            close_workspace: "Cmd+Shift+W".into(),
            switch_workspace: (1..=9).map(|n| format!("Cmd+{n}")).collect(),
            quit: "Cmd+Q".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_switch_workspace_covers_nine_indices() {
        let config = KeybindConfig::default();
        assert_eq!(config.switch_workspace.len(), 9);
        assert_eq!(config.switch_workspace[0], "Cmd+1");
        assert_eq!(config.switch_workspace[8], "Cmd+9");
    }

    #[test]
    fn switch_workspace_overrides_from_toml() {
        let config: KeybindConfig =
            toml::from_str(r#"switch_workspace = ["Alt+1", "Alt+2"]"#).unwrap();
        assert_eq!(config.switch_workspace, vec!["Alt+1", "Alt+2"]);
        assert_eq!(config.close_pane, "Cmd+W");
    }
}
