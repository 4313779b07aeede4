use std::collections::HashMap;

use trellis_common::actions::{Action, Direction};
use trellis_config::schema::{HintConfig, KeybindConfig};

use crate::keymap::parse_keybind;

use super::key_combo::KeyCombo;

/// Keymap layer a binding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Pane management, history, workspaces. Honored in every mode.
    Global,
    /// Page scrolling. Suppressed while the overlay is open.
    Browse,
    /// Commit/cancel. Only active while the overlay is open.
    Overlay,
}

/// Maps key combinations to [`Action`]s, one table per [`Layer`].
///
/// Built from [`KeybindConfig`] at startup.
pub struct KeybindRegistry {
    global: HashMap<KeyCombo, Action>,
    browse: HashMap<KeyCombo, Action>,
    overlay: HashMap<KeyCombo, Action>,
    hint_toggle: Option<KeyCombo>,
    hint_alphabet: Vec<char>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind and hint sections.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig, hints: &HintConfig) -> Self {
        let mut mappings: Vec<(&str, Action, Layer)> = vec![
            (&config.split_left, Action::Split(Direction::Left), Layer::Global),
            (&config.split_right, Action::Split(Direction::Right), Layer::Global),
            (&config.split_up, Action::Split(Direction::Up), Layer::Global),
            (&config.split_down, Action::Split(Direction::Down), Layer::Global),
            (&config.focus_left, Action::Focus(Direction::Left), Layer::Global),
            (&config.focus_right, Action::Focus(Direction::Right), Layer::Global),
            (&config.focus_up, Action::Focus(Direction::Up), Layer::Global),
            (&config.focus_down, Action::Focus(Direction::Down), Layer::Global),
            (&config.resize_left, Action::Resize(Direction::Left), Layer::Global),
            (&config.resize_right, Action::Resize(Direction::Right), Layer::Global),
            (&config.resize_up, Action::Resize(Direction::Up), Layer::Global),
            (&config.resize_down, Action::Resize(Direction::Down), Layer::Global),
            (&config.close_pane, Action::ClosePane, Layer::Global),
            (&config.focus_next, Action::FocusNextPane, Layer::Global),
            (&config.focus_prev, Action::FocusPrevPane, Layer::Global),
            (&config.toggle_overlay, Action::ToggleOverlay, Layer::Global),
            (&config.reload, Action::Reload, Layer::Global),
            (&config.hard_reload, Action::HardReload, Layer::Global),
            (&config.back, Action::GoBack, Layer::Global),
            (&config.forward, Action::GoForward, Layer::Global),
            (&config.new_workspace, Action::NewWorkspace, Layer::Global),
            (&config.close_workspace, Action::CloseWorkspace, Layer::Global),
            (&config.quit, Action::Quit, Layer::Global),
            (&config.scroll_down, Action::ScrollDown, Layer::Browse),
            (&config.scroll_up, Action::ScrollUp, Layer::Browse),
            (&config.overlay_commit, Action::OverlayCommit, Layer::Overlay),
            (&config.overlay_cancel, Action::OverlayCancel, Layer::Overlay),
        ];
        for (index, binding) in config.switch_workspace.iter().enumerate().take(9) {
            mappings.push((
                binding.as_str(),
                Action::SwitchWorkspace(index as u8),
                Layer::Global,
            ));
        }

        let mut registry = Self {
            global: HashMap::new(),
            browse: HashMap::new(),
            overlay: HashMap::new(),
            hint_toggle: None,
            hint_alphabet: hints.chars(),
        };

        for (binding_str, action, layer) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    let table = match layer {
                        Layer::Global => &mut registry.global,
                        Layer::Browse => &mut registry.browse,
                        Layer::Overlay => &mut registry.overlay,
                    };
                    table.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => tracing::warn!("invalid keybind '{binding_str}': {e}"),
            }
        }

        match parse_keybind(&config.toggle_hints) {
            Ok(kb) => registry.hint_toggle = Some(KeyCombo::from_keybind(&kb)),
            Err(e) => tracing::warn!("invalid keybind '{}': {e}", config.toggle_hints),
        }

        registry
    }

    /// Look up an action in one layer.
    pub fn lookup(&self, layer: Layer, combo: &KeyCombo) -> Option<&Action> {
        match layer {
            Layer::Global => self.global.get(combo),
            Layer::Browse => self.browse.get(combo),
            Layer::Overlay => self.overlay.get(combo),
        }
    }

    pub fn is_hint_toggle(&self, combo: &KeyCombo) -> bool {
        self.hint_toggle.as_ref() == Some(combo)
    }

    pub fn hint_alphabet(&self) -> &[char] {
        &self.hint_alphabet
    }

    /// Chords a page must not act on, so a forwarded key never does double
    /// duty. Plain chords are included; the page script only lets them
    /// through while an editable element has focus.
    pub fn reserved_combos(&self) -> Vec<&KeyCombo> {
        let mut combos: Vec<&KeyCombo> = self
            .global
            .keys()
            .chain(self.browse.keys())
            .chain(self.hint_toggle.iter())
            .collect();
        combos.sort_by(|a, b| (a.mods, &a.key).cmp(&(b.mods, &b.key)));
        combos
    }

    /// Number of registered bindings across all layers.
    pub fn len(&self) -> usize {
        self.global.len()
            + self.browse.len()
            + self.overlay.len()
            + usize::from(self.hint_toggle.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
