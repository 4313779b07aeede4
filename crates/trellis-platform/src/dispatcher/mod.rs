//! Modal keybinding dispatch.
//!
//! [`resolve`] turns a key event plus the pane's [`PaneContext`] into a
//! [`Resolution`]; the session applies it. Hint sessions track label
//! progress for panes in hint mode.

mod hints;
mod resolve;
mod types;

pub use hints::{generate_labels, HintOutcome, HintSession};
pub use resolve::resolve;
pub use types::{HintInput, KeyEvent, Mode, Outcome, PaneContext, Resolution};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCombo, KeybindRegistry};
    use crate::keymap::parse_keybind;
    use trellis_common::actions::{Action, Direction};
    use trellis_config::schema::{HintConfig, KeybindConfig};

    fn registry() -> KeybindRegistry {
        KeybindRegistry::from_config(&KeybindConfig::default(), &HintConfig::default())
    }

    fn press(binding: &str) -> KeyEvent {
        KeyEvent::press(KeyCombo::from_keybind(&parse_keybind(binding).unwrap()))
    }

    fn key(raw: &str) -> KeyEvent {
        KeyEvent::press(KeyCombo::from_flags(false, false, false, false, raw))
    }

    const NORMAL: PaneContext = PaneContext {
        overlay_open: false,
        hint_active: false,
        typing: false,
    };
    const TYPING: PaneContext = PaneContext {
        overlay_open: false,
        hint_active: false,
        typing: true,
    };
    const OVERLAY: PaneContext = PaneContext {
        overlay_open: true,
        hint_active: false,
        typing: false,
    };
    const HINTS: PaneContext = PaneContext {
        overlay_open: false,
        hint_active: true,
        typing: false,
    };

    // -- Mode derivation --

    #[test]
    fn mode_precedence() {
        assert_eq!(NORMAL.mode(), Mode::Normal);
        assert_eq!(OVERLAY.mode(), Mode::OverlayOpen);
        assert_eq!(HINTS.mode(), Mode::HintMode);
        let both = PaneContext {
            overlay_open: true,
            hint_active: true,
            typing: false,
        };
        assert_eq!(both.mode(), Mode::HintMode);
    }

    // -- Normal mode --

    #[test]
    fn normal_mode_resolves_browse_and_global() {
        let r = registry();
        assert_eq!(
            resolve(NORMAL, &r, &key("j")),
            Resolution::action(Action::ScrollDown)
        );
        assert_eq!(
            resolve(NORMAL, &r, &press("Cmd+Alt+Right")),
            Resolution::action(Action::Focus(Direction::Right))
        );
        assert_eq!(
            resolve(NORMAL, &r, &key("f")),
            Resolution::action(Action::ToggleHints)
        );
    }

    #[test]
    fn unbound_keys_pass_through() {
        let r = registry();
        let res = resolve(NORMAL, &r, &key("x"));
        assert_eq!(res, Resolution::pass_through());
        assert!(!res.vetoes_delivery());
    }

    #[test]
    fn key_release_always_passes_through() {
        let r = registry();
        let mut ev = press("Cmd+W");
        ev.is_press = false;
        assert_eq!(resolve(NORMAL, &r, &ev), Resolution::pass_through());
    }

    // -- Typing suppression --

    #[test]
    fn typing_suppresses_plain_bindings() {
        let r = registry();
        assert_eq!(resolve(TYPING, &r, &key("j")), Resolution::pass_through());
        assert_eq!(resolve(TYPING, &r, &key("f")), Resolution::pass_through());
        let shifted = KeyEvent::press(KeyCombo::from_flags(false, false, true, false, "J"));
        assert_eq!(resolve(TYPING, &r, &shifted), Resolution::pass_through());
    }

    #[test]
    fn typing_never_suppresses_modified_bindings() {
        let r = registry();
        assert_eq!(
            resolve(TYPING, &r, &press("Cmd+W")),
            Resolution::action(Action::ClosePane)
        );
        assert_eq!(
            resolve(TYPING, &r, &press("Cmd+2")),
            Resolution::action(Action::SwitchWorkspace(1))
        );
    }

    // -- Overlay --

    #[test]
    fn overlay_commit_and_cancel() {
        let r = registry();
        assert_eq!(
            resolve(OVERLAY, &r, &key("Enter")),
            Resolution::action(Action::OverlayCommit)
        );
        assert_eq!(
            resolve(OVERLAY, &r, &key("Escape")),
            Resolution::action(Action::OverlayCancel)
        );
        // Outside the overlay those keys belong to the page.
        assert_eq!(resolve(NORMAL, &r, &key("Enter")), Resolution::pass_through());
    }

    #[test]
    fn overlay_suppresses_scroll_and_hint_toggle() {
        let r = registry();
        assert_eq!(resolve(OVERLAY, &r, &key("j")), Resolution::pass_through());
        assert_eq!(resolve(OVERLAY, &r, &key("f")), Resolution::pass_through());
    }

    #[test]
    fn overlay_honors_pane_management() {
        let r = registry();
        for (binding, action) in [
            ("Cmd+Shift+Down", Action::Split(Direction::Down)),
            ("Cmd+W", Action::ClosePane),
            ("Cmd+Alt+Shift+Left", Action::Resize(Direction::Left)),
            ("Cmd+9", Action::SwitchWorkspace(8)),
            ("Cmd+L", Action::ToggleOverlay),
        ] {
            assert_eq!(resolve(OVERLAY, &r, &press(binding)), Resolution::action(action));
        }
    }

    // -- Hint mode --

    #[test]
    fn hint_mode_takes_alphabet_characters() {
        let r = registry();
        assert_eq!(
            resolve(HINTS, &r, &key("s")),
            Resolution::hint(HintInput::Type('s'))
        );
        // Scroll binding letters are label characters in hint mode.
        assert_eq!(
            resolve(HINTS, &r, &key("j")),
            Resolution::hint(HintInput::Type('j'))
        );
    }

    #[test]
    fn hint_mode_escape_and_toggle_cancel() {
        let r = registry();
        assert_eq!(
            resolve(HINTS, &r, &key("Escape")),
            Resolution::hint(HintInput::Cancel)
        );
        assert_eq!(
            resolve(HINTS, &r, &key("f")),
            Resolution::hint(HintInput::Cancel)
        );
    }

    #[test]
    fn hint_mode_other_printable_aborts_and_falls_through() {
        let r = registry();
        let res = resolve(HINTS, &r, &key("x"));
        assert_eq!(res.hint, Some(HintInput::Abort));
        assert_eq!(res.outcome, Outcome::PassThrough);
    }

    #[test]
    fn hint_mode_abort_then_resolves_binding() {
        let config = KeybindConfig {
            scroll_up: "U".into(),
            ..Default::default()
        };
        let r = KeybindRegistry::from_config(&config, &HintConfig::default());
        let res = resolve(HINTS, &r, &key("u"));
        assert_eq!(res.hint, Some(HintInput::Abort));
        assert_eq!(res.outcome, Outcome::Action(Action::ScrollUp));
    }

    #[test]
    fn hint_mode_swallows_non_printable_keys() {
        let r = registry();
        assert_eq!(resolve(HINTS, &r, &key("Down")), Resolution::consumed());
    }

    #[test]
    fn hint_mode_lets_modified_chords_through() {
        let r = registry();
        assert_eq!(
            resolve(HINTS, &r, &press("Cmd+W")),
            Resolution::action(Action::ClosePane)
        );
    }

    // -- Labels --

    #[test]
    fn labels_single_char_when_they_fit() {
        let alphabet = ['a', 's', 'd', 'f'];
        assert_eq!(generate_labels(&alphabet, 3), vec!["a", "s", "d"]);
        assert!(generate_labels(&alphabet, 0).is_empty());
    }

    #[test]
    fn labels_are_prefix_free_when_longer() {
        let alphabet = ['a', 's', 'd'];
        let labels = generate_labels(&alphabet, 7);
        assert_eq!(labels.len(), 7);
        assert!(labels.iter().all(|l| l.len() == 2));
        assert_eq!(&labels[..4], &["aa", "as", "ad", "sa"]);
        for (i, a) in labels.iter().enumerate() {
            for (j, b) in labels.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} prefixes {b}");
                }
            }
        }
    }

    #[test]
    fn typing_exact_label_commits_that_target() {
        let mut session = HintSession::new();
        assert_eq!(session.set_targets(&['a', 's', 'd'], 3), HintOutcome::Partial);
        assert_eq!(session.labels(), &["a", "s", "d"]);
        assert_eq!(session.feed('s'), HintOutcome::Commit(1));
    }

    #[test]
    fn partial_then_commit_on_two_char_labels() {
        let mut session = HintSession::new();
        session.set_targets(&['a', 's'], 4);
        assert_eq!(session.feed('s'), HintOutcome::Partial);
        assert_eq!(session.matching(), vec!["sa", "ss"]);
        assert_eq!(session.feed('a'), HintOutcome::Commit(2));
        assert_eq!(session.typed(), "sa");
    }

    #[test]
    fn unmatched_character_reports_no_match() {
        let mut session = HintSession::new();
        session.set_targets(&['a', 's', 'd'], 2);
        assert_eq!(session.feed('d'), HintOutcome::NoMatch);
    }

    #[test]
    fn keys_typed_before_targets_are_replayed() {
        let mut session = HintSession::new();
        assert_eq!(session.feed('s'), HintOutcome::Waiting);
        assert!(!session.targets_known());
        assert_eq!(session.set_targets(&['a', 's'], 2), HintOutcome::Commit(1));
    }

    #[test]
    fn no_targets_is_no_match() {
        let mut session = HintSession::new();
        assert_eq!(session.set_targets(&['a', 's'], 0), HintOutcome::NoMatch);
    }
}
