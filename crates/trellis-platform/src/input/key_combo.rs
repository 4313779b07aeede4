use crate::key_names::normalize_key;
use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for fast HashMap lookup.
///
/// Modifiers are stored as a bitmask for O(1) comparison rather than
/// sorting a `Vec<Modifier>` on every event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "G", "Enter", "F1").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier flags and an unnormalized key name, as
    /// reported by winit or by a page's `KeyboardEvent`.
    pub fn from_flags(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: &str) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self {
            mods,
            key: normalize_key(key),
        }
    }

    /// No modifiers at all.
    pub fn is_bare(&self) -> bool {
        self.mods == 0
    }

    /// No Ctrl, Alt or Super. Shift alone still counts as text entry.
    pub fn is_plain(&self) -> bool {
        self.mods & !MOD_SHIFT == 0
    }

    pub fn ctrl(&self) -> bool {
        self.mods & MOD_CTRL != 0
    }

    pub fn alt(&self) -> bool {
        self.mods & MOD_ALT != 0
    }

    pub fn shift(&self) -> bool {
        self.mods & MOD_SHIFT != 0
    }

    pub fn super_key(&self) -> bool {
        self.mods & MOD_SUPER != 0
    }

    /// The character this key types, lowercased, if it types one.
    pub fn printable_char(&self) -> Option<char> {
        if self.key == "Space" {
            return Some(' ');
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => c.to_lowercase().next(),
            _ => None,
        }
    }
}
