use super::{Action, Direction};

impl Action {
    /// Human-readable label, used in logs and keybinding listings.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Split(Direction::Left) => "Split Left",
            Action::Split(Direction::Right) => "Split Right",
            Action::Split(Direction::Up) => "Split Up",
            Action::Split(Direction::Down) => "Split Down",
            Action::Focus(Direction::Left) => "Focus Left",
            Action::Focus(Direction::Right) => "Focus Right",
            Action::Focus(Direction::Up) => "Focus Up",
            Action::Focus(Direction::Down) => "Focus Down",
            Action::Resize(Direction::Left) => "Resize Left",
            Action::Resize(Direction::Right) => "Resize Right",
            Action::Resize(Direction::Up) => "Resize Up",
            Action::Resize(Direction::Down) => "Resize Down",
            Action::ClosePane => "Close Pane",
            Action::FocusNextPane => "Focus Next Pane",
            Action::FocusPrevPane => "Focus Previous Pane",
            Action::ToggleOverlay => "Toggle Address Bar",
            Action::OverlayCommit => "Submit Address",
            Action::OverlayCancel => "Cancel Address",
            Action::ToggleHints => "Link Hints",
            Action::Reload => "Reload",
            Action::HardReload => "Hard Reload",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::ScrollDown => "Scroll Down",
            Action::ScrollUp => "Scroll Up",
            Action::SwitchWorkspace(_) => "Switch Workspace",
            Action::NewWorkspace => "New Workspace",
            Action::CloseWorkspace => "Close Workspace",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }
}
