use serde::{Deserialize, Serialize};

use super::Direction;

/// Every logical action a keystroke can resolve to.
///
/// The dispatcher maps key chords to an `Action`; the session applies it.
/// Directional variants always target the last active pane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Pane / Tiling --
    Split(Direction),
    Focus(Direction),
    Resize(Direction),
    ClosePane,
    FocusNextPane,
    FocusPrevPane,

    // -- Overlay --
    ToggleOverlay,
    OverlayCommit,
    OverlayCancel,

    // -- Hint mode --
    ToggleHints,

    // -- Page navigation --
    Reload,
    HardReload,
    GoBack,
    GoForward,
    ScrollDown,
    ScrollUp,

    // -- Workspaces --
    /// Zero-based quick-switch index.
    SwitchWorkspace(u8),
    NewWorkspace,
    CloseWorkspace,

    // -- Window --
    Quit,

    // -- Noop --
    None,
}

impl Action {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Action::Split(d) | Action::Focus(d) | Action::Resize(d) => Some(*d),
            _ => None,
        }
    }
}
