//! Pane-level structure changes inside the active workspace.

use tracing::{debug, warn};
use trellis_common::{Direction, PaneId};

use super::{PaneClosed, WorkspaceManager};
use crate::host::PaneHost;
use crate::tree::{Leaf, Side, SplitDirection};

impl WorkspaceManager {
    /// Split `pane` in the active workspace, opening `url` in the new pane on
    /// the `direction` side. Returns the new pane's id.
    pub fn split_pane(
        &mut self,
        pane: PaneId,
        direction: Direction,
        url: Option<String>,
        host: &mut dyn PaneHost,
    ) -> Option<PaneId> {
        if !self.active_tree()?.contains(pane) {
            return None;
        }
        let id = self.allocate_pane_id();
        let leaf = Leaf::new(id, url.unwrap_or_else(|| self.default_url.clone()));

        if let Err(e) = host.spawn(&leaf, true) {
            warn!(pane = %id, error = %e, "failed to create pane surfaces");
            return None;
        }
        let inserted = self.active_tree_mut().is_some_and(|tree| {
            tree.insert_split(
                pane,
                leaf,
                SplitDirection::for_direction(direction),
                Side::from(direction),
            )
        });
        if !inserted {
            host.destroy(id);
            return None;
        }
        debug!(from = %pane, new = %id, ?direction, "split pane");
        Some(id)
    }

    /// Close `pane` in the active workspace and destroy its surfaces.
    ///
    /// Closing a workspace's only pane removes the workspace and shows the
    /// most recently used other one. Closing the only pane of the only
    /// workspace leaves everything untouched and reports [`PaneClosed::LastPane`].
    pub fn close_pane(&mut self, pane: PaneId, host: &mut dyn PaneHost) -> PaneClosed {
        let Some(tree) = self.active_tree() else {
            return PaneClosed::NotFound;
        };
        if !tree.contains(pane) {
            return PaneClosed::NotFound;
        }

        if tree.len() == 1 {
            if self.workspaces.len() <= 1 {
                return PaneClosed::LastPane;
            }
            let active = self.active.clone();
            return match self.remove_workspace(&active, host) {
                Ok(mut removed) => {
                    let next = self.most_recent_other(&active).cloned();
                    if let Some(next) = &next {
                        self.switch_to(next, host);
                    }
                    removed.switched_to = next;
                    PaneClosed::WorkspaceRemoved(removed)
                }
                Err(e) => {
                    warn!(error = %e, "could not remove emptied workspace");
                    PaneClosed::NotFound
                }
            };
        }

        // Focus falls back to the pane before it in visual order.
        let focus = tree.prev_pane(pane);
        let Some(tree) = self.active_tree_mut() else {
            return PaneClosed::NotFound;
        };
        tree.remove(pane);
        host.destroy(pane);

        let active = self.active.clone();
        if let Some(ws) = self.get_mut(&active) {
            if ws.active_pane == Some(pane) {
                ws.active_pane = focus;
            }
        }
        debug!(%pane, "closed pane");
        PaneClosed::Removed { focus }
    }
}
