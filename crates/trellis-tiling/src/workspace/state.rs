//! Conversion between the live catalogue and its persisted form.

use tracing::{info, warn};
use trellis_common::WorkspaceId;

use super::{
    manager::workspace_name, SerializedWorkspace, Workspace, WorkspaceLimits, WorkspaceManager,
    WorkspaceState, WorkspaceTree,
};
use crate::host::PaneHost;

impl WorkspaceManager {
    pub fn to_state(&self) -> WorkspaceState {
        WorkspaceState {
            workspaces: self
                .workspaces
                .iter()
                .map(|w| SerializedWorkspace {
                    id: w.id.clone(),
                    name: w.name.clone(),
                    index: w.index,
                    root: w.tree.serialized(),
                    active_pane_id: w.active_pane,
                    last_accessed: w.last_accessed,
                })
                .collect(),
            active_workspace_id: Some(self.active.clone()),
        }
    }

    /// Rebuild the catalogue from a persisted state. Every workspace starts
    /// evicted; only the active one is restored, keeping its pane ids.
    /// Entries beyond the workspace limit or in a taken slot are dropped.
    pub fn from_state(
        state: WorkspaceState,
        limits: WorkspaceLimits,
        default_url: impl Into<String>,
        host: &mut dyn PaneHost,
    ) -> Self {
        let mut mgr = Self::empty(limits, default_url.into());

        for saved in state.workspaces {
            let max = mgr.limits.max_workspaces;
            let clash = mgr.by_index(saved.index).is_some() || mgr.get(&saved.id).is_some();
            if saved.index >= max || clash {
                warn!(workspace = %saved.id, index = saved.index, "skipping saved workspace");
                continue;
            }
            if let Some(root) = &saved.root {
                if let Some(max_id) = root.max_pane_id() {
                    mgr.reserve_past(max_id);
                }
            }
            mgr.clock = mgr.clock.max(saved.last_accessed);
            mgr.workspaces.push(Workspace {
                id: saved.id,
                name: if saved.name.is_empty() {
                    workspace_name(saved.index)
                } else {
                    saved.name
                },
                index: saved.index,
                tree: WorkspaceTree::Evicted(saved.root),
                active_pane: saved.active_pane_id,
                last_accessed: saved.last_accessed,
                is_active: false,
                preview: None,
            });
        }
        mgr.workspaces.sort_by_key(|w| w.index);

        let Some(first) = mgr.workspaces.first().map(|w| w.id.clone()) else {
            return Self::new(limits, mgr.default_url, host);
        };
        let active = state
            .active_workspace_id
            .filter(|id| mgr.get(id).is_some())
            .unwrap_or(first);

        mgr.activate_restored(&active, host);
        info!(workspaces = mgr.workspaces.len(), active = %active, "restored workspaces");
        mgr
    }

    fn activate_restored(&mut self, id: &WorkspaceId, host: &mut dyn PaneHost) {
        self.show(id, host);
        self.active = id.clone();
    }
}
