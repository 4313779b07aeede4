use trellis_common::PlatformError;

use super::types::{KeyBind, Modifier};
use crate::key_names::normalize_key;

/// Parses a binding string like `"Cmd+L"`, `"Ctrl+Shift+Tab"` or `"F"`
/// into a [`KeyBind`].
///
/// - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
/// - `"Option"` / `"Opt"` / `"Alt"` -> `Alt`
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Win"` / `"Super"` / `"Meta"` -> `Super`
///
/// The final token is always the key, even if it names a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::InvalidKeybind("empty keybind string".into()));
    };
    if key_token.is_empty() {
        return Err(PlatformError::InvalidKeybind(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = parse_modifier(token).ok_or_else(|| {
            PlatformError::InvalidKeybind(format!("unrecognized modifier '{token}' in '{s}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key(key_token),
    })
}

pub(super) fn parse_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}
