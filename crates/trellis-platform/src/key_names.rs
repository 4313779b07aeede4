//! Key name normalization.
//!
//! Config strings (`"Esc"`, `"Period"`), winit logical key names
//! (`"ArrowUp"`, `" "`) and DOM `KeyboardEvent.key` values forwarded by page
//! scripts all funnel through [`normalize_key`] so they compare equal inside a
//! [`KeyCombo`](crate::input::KeyCombo).

/// Convert any supported key spelling to its canonical name.
///
/// Single characters are uppercased; named keys use a fixed spelling
/// (`"Up"`, `"Enter"`, `"Space"`); unknown names keep their spelling with
/// the first letter uppercased (`"f5"` -> `"F5"`).
pub fn normalize_key(raw: &str) -> String {
    if raw == " " {
        return "Space".into();
    }

    let canonical = match raw.to_lowercase().as_str() {
        "arrowup" | "up" => "Up",
        "arrowdown" | "down" => "Down",
        "arrowleft" | "left" => "Left",
        "arrowright" | "right" => "Right",
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "space" | "spacebar" => "Space",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "insert" => "Insert",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        "period" => ".",
        "comma" => ",",
        "slash" => "/",
        "backslash" => "\\",
        "semicolon" => ";",
        "minus" => "-",
        "equal" | "equals" => "=",
        "bracketleft" => "[",
        "bracketright" => "]",
        _ => return normalize_other(raw),
    };
    canonical.to_string()
}

fn normalize_other(raw: &str) -> String {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => String::new(),
        (Some(c), None) => c.to_uppercase().collect(),
        (Some(first), Some(_)) => {
            let rest = &raw[first.len_utf8()..];
            format!("{}{rest}", first.to_uppercase())
        }
    }
}

/// Modifier-only key names, which never resolve to an action on their own.
pub fn is_modifier_key(raw: &str) -> bool {
    matches!(
        raw,
        "Shift" | "Control" | "Alt" | "Meta" | "Super" | "Hyper" | "AltGraph" | "CapsLock" | "Fn"
    )
}
