mod parse;
mod types;

pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+G").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "G");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Ctrl+Shift+Tab").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "Tab");
    }

    #[test]
    fn parse_cmd_is_platform_primary() {
        let kb = parse_keybind("Cmd+L").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
        assert_eq!(kb.key, "L");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let kb = parse_keybind("Option+Left").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, "Left");
    }

    #[test]
    fn parse_bare_letter() {
        let kb = parse_keybind("f").unwrap();
        assert!(!kb.has_modifiers());
        assert_eq!(kb.key, "F");
    }

    #[test]
    fn parse_bracket_key() {
        let kb = parse_keybind("Cmd+[").unwrap();
        assert_eq!(kb.key, "[");
        assert!(kb.has_modifiers());
    }

    #[test]
    fn parse_key_aliases() {
        assert_eq!(parse_keybind("Return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("ArrowDown").unwrap().key, "Down");
    }

    #[test]
    fn parse_errors() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Cmd+").is_err());
        assert!(parse_keybind("Hyper+K").is_err());
    }

    #[test]
    fn duplicate_modifiers_collapse() {
        // On Linux "Cmd" and "Ctrl" are the same modifier.
        let kb = parse_keybind("Ctrl+Ctrl+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }
}
