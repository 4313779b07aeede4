use trellis_common::actions::Action;

use crate::input::{KeybindRegistry, Layer};

use super::types::{HintInput, KeyEvent, PaneContext, Resolution};

/// Maps one key event to what should happen, given the pane's mode.
///
/// Pure: reads the context and the registry, mutates nothing. Precedence is
/// hint mode, then overlay, then the typing-suppressed normal keymaps, then
/// global bindings.
pub fn resolve(ctx: PaneContext, registry: &KeybindRegistry, event: &KeyEvent) -> Resolution {
    if !event.is_press {
        return Resolution::pass_through();
    }

    if ctx.hint_active {
        match resolve_hint(registry, event) {
            HintStep::Done(resolution) => return resolution,
            HintStep::Abort => {
                let after = PaneContext {
                    hint_active: false,
                    ..ctx
                };
                let rest = resolve(after, registry, event);
                return Resolution {
                    hint: Some(HintInput::Abort),
                    outcome: rest.outcome,
                };
            }
            HintStep::FallThrough => {}
        }
    }

    if ctx.overlay_open {
        return resolve_overlay(registry, event);
    }

    resolve_normal(ctx, registry, event)
}

enum HintStep {
    Done(Resolution),
    Abort,
    FallThrough,
}

fn resolve_hint(registry: &KeybindRegistry, event: &KeyEvent) -> HintStep {
    let combo = &event.combo;

    if registry.is_hint_toggle(combo) || (combo.is_bare() && combo.key == "Escape") {
        return HintStep::Done(Resolution::hint(HintInput::Cancel));
    }

    // Chords with Ctrl/Alt/Super keep hint mode and reach the global keymap.
    if !combo.is_plain() {
        return HintStep::FallThrough;
    }

    match combo.printable_char() {
        Some(c) if registry.hint_alphabet().contains(&c) => {
            HintStep::Done(Resolution::hint(HintInput::Type(c)))
        }
        Some(_) => HintStep::Abort,
        None => HintStep::Done(Resolution::consumed()),
    }
}

fn resolve_overlay(registry: &KeybindRegistry, event: &KeyEvent) -> Resolution {
    let combo = &event.combo;

    if let Some(action) = registry.lookup(Layer::Overlay, combo) {
        return Resolution::action(action.clone());
    }

    // The overlay input is a text field: plain keys are text.
    if !combo.is_plain() {
        if let Some(action) = registry.lookup(Layer::Global, combo) {
            return Resolution::action(action.clone());
        }
    }

    Resolution::pass_through()
}

fn resolve_normal(ctx: PaneContext, registry: &KeybindRegistry, event: &KeyEvent) -> Resolution {
    let combo = &event.combo;
    let suppressed = ctx.typing && combo.is_plain();

    if registry.is_hint_toggle(combo) && !suppressed {
        return Resolution::action(Action::ToggleHints);
    }

    for layer in [Layer::Browse, Layer::Global] {
        if let Some(action) = registry.lookup(layer, combo) {
            if suppressed {
                tracing::trace!(key = %combo.key, "binding suppressed while typing");
                return Resolution::pass_through();
            }
            return Resolution::action(action.clone());
        }
    }

    Resolution::pass_through()
}
