//! Commands sent by overlay and content pages over IPC.

use tracing::debug;
use trellis_common::{PaneId, WorkspaceId};
use trellis_platform::key_names::is_modifier_key;
use trellis_platform::{KeyCombo, KeyEvent};
use trellis_webview::{OverlayCommand, SurfaceFactory};

use super::Session;

impl<F: SurfaceFactory> Session<F> {
    pub fn handle_command(&mut self, pane: PaneId, command: OverlayCommand) {
        debug!(%pane, kind = ?command, "page command");
        match command {
            OverlayCommand::SearchInput { query } => self.search_input(pane, query),
            OverlayCommand::SearchSubmit { query } => {
                self.search_submit(pane, &query);
            }
            OverlayCommand::SearchBlur => self.search_blur(pane),
            OverlayCommand::SwitchWorkspace { id } => {
                self.switch_workspace(&WorkspaceId::from(id));
            }
            OverlayCommand::SetTyping { typing } => self.set_typing(pane, typing),
            OverlayCommand::Key {
                key,
                ctrl,
                alt,
                shift,
                meta,
            } => {
                if is_modifier_key(&key) {
                    return;
                }
                let combo = KeyCombo::from_flags(ctrl, alt, shift, meta, &key);
                self.handle_key(pane, &KeyEvent::press(combo));
            }
            OverlayCommand::Focus => {
                if self.last_active != Some(pane) && self.set_active(pane) {
                    self.broadcast_panes();
                }
            }
            OverlayCommand::CloseOverlay => self.close_overlay(pane),
        }
    }
}
