//! Key resolution and action application.

use tracing::debug;
use trellis_common::{Action, PaneId};
use trellis_platform::{resolve, KeyEvent, Outcome, PaneContext, Resolution};
use trellis_webview::{PaneController, SurfaceError, SurfaceFactory};

use super::Session;

/// Pixels scrolled per `ScrollDown` / `ScrollUp`.
const SCROLL_STEP: f64 = 80.0;

impl<F: SurfaceFactory> Session<F> {
    /// The mode inputs the resolver needs for `pane`.
    pub fn context(&self, pane: PaneId) -> PaneContext {
        PaneContext {
            overlay_open: self.panes.get(pane).is_some_and(|c| c.overlay_open()),
            hint_active: self.hint_active(pane),
            typing: self.transient.get(&pane).is_some_and(|t| t.typing),
        }
    }

    /// Resolve a key observed on `source`'s surfaces and apply the result:
    /// hint input to `source`, actions to the active pane. A key from a
    /// pane's surface means that pane has focus, so it becomes active first.
    pub fn handle_key(&mut self, source: PaneId, event: &KeyEvent) -> Resolution {
        let resolution = resolve(self.context(source), &self.keybinds, event);
        if resolution.outcome != Outcome::PassThrough && self.last_active != Some(source) {
            self.set_active(source);
        }
        if let Some(input) = resolution.hint {
            self.apply_hint_input(source, input);
        }
        if let Outcome::Action(action) = &resolution.outcome {
            self.apply_action(action.clone());
        }
        resolution
    }

    /// Keys the window itself receives belong to the active pane.
    pub fn handle_window_key(&mut self, event: &KeyEvent) -> Option<Resolution> {
        let pane = self.last_active?;
        Some(self.handle_key(pane, event))
    }

    pub fn apply_action(&mut self, action: Action) {
        debug!(action = action.label(), "apply action");
        match action {
            Action::SwitchWorkspace(index) => {
                self.switch_to_index(index);
                return;
            }
            Action::NewWorkspace => {
                self.new_workspace();
                return;
            }
            Action::CloseWorkspace => {
                self.close_active_workspace();
                return;
            }
            Action::Quit => {
                self.shutdown();
                return;
            }
            Action::None => return,
            _ => {}
        }

        let Some(pane) = self.last_active else {
            debug!(?action, "no active pane");
            return;
        };
        match action {
            Action::Split(direction) => {
                self.split(direction);
            }
            Action::Focus(direction) => {
                self.focus_direction(direction);
            }
            Action::Resize(direction) => {
                self.resize(direction);
            }
            Action::ClosePane => {
                self.close_pane(pane);
            }
            Action::FocusNextPane => {
                self.cycle_focus(true);
            }
            Action::FocusPrevPane => {
                self.cycle_focus(false);
            }
            Action::ToggleOverlay => {
                self.reverse(pane);
            }
            Action::OverlayCommit => self.commit_overlay(pane),
            Action::OverlayCancel => self.cancel_overlay(pane),
            Action::ToggleHints => {
                self.toggle_hints(pane);
                self.broadcast_panes();
            }
            Action::Reload => self.page_action(pane, "reload", |c| c.reload()),
            Action::HardReload => self.page_action(pane, "hard reload", |c| c.reload_hard()),
            Action::GoBack => self.page_action(pane, "go back", |c| c.go_back()),
            Action::GoForward => self.page_action(pane, "go forward", |c| c.go_forward()),
            Action::ScrollDown => {
                self.page_action(pane, "scroll", |c| c.scroll_by(SCROLL_STEP));
            }
            Action::ScrollUp => {
                self.page_action(pane, "scroll", |c| c.scroll_by(-SCROLL_STEP));
            }
            Action::SwitchWorkspace(_)
            | Action::NewWorkspace
            | Action::CloseWorkspace
            | Action::Quit
            | Action::None => {}
        }
    }

    /// Run a page command on `pane` and republish the pane snapshot when it
    /// went through.
    fn page_action(
        &mut self,
        pane: PaneId,
        what: &str,
        op: impl FnOnce(&mut PaneController<F::Surface>) -> Result<(), SurfaceError>,
    ) {
        if self.with_pane(pane, what, op) {
            self.broadcast_panes();
        }
    }
}
