use trellis_common::actions::Action;

use crate::input::KeyCombo;

/// Keyboard mode of one pane, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    OverlayOpen,
    /// Link-hint ("biscuit") mode.
    HintMode,
}

/// Per-pane state the resolver needs. Copied in; the resolver never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneContext {
    pub overlay_open: bool,
    pub hint_active: bool,
    /// The focused page element accepts text.
    pub typing: bool,
}

impl PaneContext {
    pub fn mode(&self) -> Mode {
        if self.hint_active {
            Mode::HintMode
        } else if self.overlay_open {
            Mode::OverlayOpen
        } else {
            Mode::Normal
        }
    }
}

/// A raw key event, observed before the page sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub combo: KeyCombo,
    pub is_press: bool,
}

impl KeyEvent {
    pub fn press(combo: KeyCombo) -> Self {
        Self {
            combo,
            is_press: true,
        }
    }

    pub fn release(combo: KeyCombo) -> Self {
        Self {
            combo,
            is_press: false,
        }
    }
}

/// What a keystroke does to an active hint session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintInput {
    /// Append a label character.
    Type(char),
    /// Explicit exit (Escape or the toggle binding).
    Cancel,
    /// A non-label character: exit, then keep resolving the key normally.
    Abort,
}

/// Where the key goes after mode handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Action(Action),
    /// Swallowed; the page never sees it.
    Consumed,
    /// Delivered to the focused surface untouched.
    PassThrough,
}

/// Result of [`resolve`](super::resolve). Applying it is the caller's job:
/// first the hint input, if any, then the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub hint: Option<HintInput>,
    pub outcome: Outcome,
}

impl Resolution {
    pub fn action(action: Action) -> Self {
        Self {
            hint: None,
            outcome: Outcome::Action(action),
        }
    }

    pub fn consumed() -> Self {
        Self {
            hint: None,
            outcome: Outcome::Consumed,
        }
    }

    pub fn pass_through() -> Self {
        Self {
            hint: None,
            outcome: Outcome::PassThrough,
        }
    }

    pub fn hint(input: HintInput) -> Self {
        Self {
            hint: Some(input),
            outcome: Outcome::Consumed,
        }
    }

    /// `true` when the page must not receive the key.
    pub fn vetoes_delivery(&self) -> bool {
        !matches!(self.outcome, Outcome::PassThrough)
    }
}
