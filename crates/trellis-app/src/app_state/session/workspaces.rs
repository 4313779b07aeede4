//! Workspace switching, creation and removal.

use tracing::{info, warn};
use trellis_common::WorkspaceId;
use trellis_webview::SurfaceFactory;

use super::Session;

impl<F: SurfaceFactory> Session<F> {
    /// Show workspace `id`. Hint mode in the workspace being left ends.
    pub fn switch_workspace(&mut self, id: &WorkspaceId) -> bool {
        if self.workspaces.get(id).is_none() {
            return false;
        }
        if self.workspaces.active_id() != id {
            if let Some(pane) = self.last_active {
                self.exit_hints(pane);
            }
        }
        if !self.workspaces.switch_to(id, &mut self.panes) {
            return false;
        }
        self.after_workspace_change();
        self.broadcast_all();
        self.schedule_persist();
        true
    }

    /// Quick-switch slot `index`, creating its workspace on first use.
    pub fn switch_to_index(&mut self, index: u8) -> bool {
        let id = match self.workspaces.by_index(index) {
            Some(ws) => ws.id.clone(),
            None => match self.workspaces.create_workspace(Some(index), &mut self.panes) {
                Ok(id) => id,
                Err(e) => {
                    warn!(index, error = %e, "cannot open workspace");
                    return false;
                }
            },
        };
        self.switch_workspace(&id)
    }

    /// Create a workspace in the lowest free slot and show it.
    pub fn new_workspace(&mut self) -> Option<WorkspaceId> {
        match self.workspaces.create_workspace(None, &mut self.panes) {
            Ok(id) => {
                self.switch_workspace(&id);
                Some(id)
            }
            Err(e) => {
                warn!(error = %e, "cannot create workspace");
                None
            }
        }
    }

    /// Remove workspace `id` and everything held for its panes. The last
    /// workspace is refused.
    pub fn close_workspace(&mut self, id: &WorkspaceId) -> bool {
        // Evicted panes have no surfaces but may still hold transient state.
        let panes = self
            .workspaces
            .get(id)
            .map(|ws| ws.tree.pane_ids())
            .unwrap_or_default();
        match self.workspaces.remove_workspace(id, &mut self.panes) {
            Ok(removed) => {
                for pane in panes {
                    self.prune(pane);
                }
                if removed.was_active {
                    if let Some(next) = self.workspaces.most_recent_other(id).cloned() {
                        self.workspaces.switch_to(&next, &mut self.panes);
                    }
                    self.after_workspace_change();
                } else {
                    self.sync_transients();
                }
                info!(workspace = %id, "closed workspace");
                self.broadcast_all();
                self.schedule_persist();
                true
            }
            Err(e) => {
                warn!(workspace = %id, error = %e, "cannot close workspace");
                false
            }
        }
    }

    pub fn close_active_workspace(&mut self) -> bool {
        let id = self.workspaces.active_id().clone();
        self.close_workspace(&id)
    }

    pub fn rename_workspace(&mut self, id: &WorkspaceId, name: &str) -> bool {
        match self.workspaces.rename_workspace(id, name) {
            Ok(()) => {
                self.broadcast_workspaces();
                self.schedule_persist();
                true
            }
            Err(e) => {
                warn!(workspace = %id, error = %e, "cannot rename workspace");
                false
            }
        }
    }
}
