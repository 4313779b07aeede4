//! Pane structure, focus and layout within the active workspace.

use tracing::{debug, info, warn};
use trellis_common::{Direction, Event, PaneId, Rect, TimerKey};
use trellis_tiling::{neighbor, PaneClosed};
use trellis_webview::{PaneController, SurfaceError, SurfaceFactory, SurfaceRole};

use super::{PaneTransient, Session};

impl<F: SurfaceFactory> Session<F> {
    /// Make `pane` the target of directional actions and give it keyboard
    /// focus. Panes outside the active workspace are refused.
    pub fn set_active(&mut self, pane: PaneId) -> bool {
        if !self.workspaces.set_active_pane(pane) {
            return false;
        }
        self.last_active = Some(pane);
        self.with_pane(pane, "focus", |c| c.focus());
        true
    }

    pub(super) fn in_active_tree(&self, pane: PaneId) -> bool {
        self.workspaces
            .active_tree()
            .is_some_and(|tree| tree.contains(pane))
    }

    /// Run a controller operation, logging its failure. `false` when the
    /// pane is unknown or the operation failed.
    pub(super) fn with_pane(
        &mut self,
        pane: PaneId,
        what: &str,
        op: impl FnOnce(&mut PaneController<F::Surface>) -> Result<(), SurfaceError>,
    ) -> bool {
        let Some(ctrl) = self.panes.get_mut(pane) else {
            return false;
        };
        match op(ctrl) {
            Ok(()) => true,
            Err(e) => {
                warn!(%pane, error = %e, "{what} failed");
                false
            }
        }
    }

    /// Size every pane of the active tree to its computed rect.
    pub(super) fn relayout(&mut self) {
        self.panes.set_spawn_bounds(self.viewport);
        let Some(tree) = self.workspaces.active_tree() else {
            return;
        };
        for (pane, rect) in self.engine.compute(tree, self.viewport) {
            self.with_pane(pane, "set bounds", |c| c.set_bounds(rect));
        }
    }

    /// Track a new window content size.
    pub fn resize_viewport(&mut self, viewport: Rect) {
        if viewport == self.viewport {
            return;
        }
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.relayout();
        self.broadcast_panes();
    }

    /// Bring the transient map in line with the live panes: entries for
    /// destroyed panes go, active-tree panes without one get one.
    pub(super) fn sync_transients(&mut self) {
        let stale: Vec<PaneId> = self
            .transient
            .keys()
            .copied()
            .filter(|p| !self.panes.contains(*p))
            .collect();
        for pane in stale {
            self.prune(pane);
        }
        if let Some(tree) = self.workspaces.active_tree() {
            for leaf in tree.leaf_refs() {
                self.transient
                    .entry(leaf.id)
                    .or_insert_with(|| PaneTransient::new(leaf.id, &leaf.url));
            }
        }
    }

    /// Forget everything held for a pane that no longer has surfaces.
    pub(super) fn prune(&mut self, pane: PaneId) {
        self.transient.remove(&pane);
        self.scheduler.cancel(TimerKey::search(pane));
        if self.last_active == Some(pane) {
            self.last_active = None;
        }
    }

    /// Re-derive focus and layout after the active workspace changed.
    pub(super) fn after_workspace_change(&mut self) {
        self.last_active = None;
        self.sync_transients();
        self.relayout();
        if let Some(pane) = self.workspaces.active_pane() {
            self.set_active(pane);
        }
    }

    // -- Structure --

    /// Split the active pane; the new pane opens the home page and takes focus.
    pub fn split(&mut self, direction: Direction) -> Option<PaneId> {
        let from = self.last_active?;
        let new = self
            .workspaces
            .split_pane(from, direction, None, &mut self.panes)?;
        let url = self.workspaces.default_url().to_string();
        self.transient.insert(new, PaneTransient::new(new, &url));
        self.relayout();
        self.set_active(new);
        self.broadcast_panes();
        self.broadcast_workspaces();
        self.schedule_persist();
        Some(new)
    }

    /// Close `pane`, pruning its transient state in the same step.
    pub fn close_pane(&mut self, pane: PaneId) -> PaneClosed {
        let closed = self.workspaces.close_pane(pane, &mut self.panes);
        match &closed {
            PaneClosed::NotFound => return closed,
            PaneClosed::Removed { focus } => {
                self.prune(pane);
                self.relayout();
                if self.last_active.is_none() {
                    if let Some(next) = focus.or_else(|| self.workspaces.active_pane()) {
                        self.set_active(next);
                    }
                }
            }
            PaneClosed::WorkspaceRemoved(removed) => {
                self.prune(pane);
                for gone in &removed.panes {
                    self.prune(*gone);
                }
                self.after_workspace_change();
            }
            PaneClosed::LastPane => {
                info!(%pane, "closed the last pane, closing window");
                self.shutdown();
                return closed;
            }
        }
        self.broadcast_panes();
        self.broadcast_workspaces();
        self.schedule_persist();
        closed
    }

    /// Move focus to the spatial neighbor in `direction`.
    pub fn focus_direction(&mut self, direction: Direction) -> Option<PaneId> {
        let current = self.last_active?;
        let tree = self.workspaces.active_tree()?;
        let target = neighbor(tree, &self.engine, self.viewport, current, direction)?;
        self.set_active(target);
        self.broadcast_panes();
        Some(target)
    }

    /// Move focus through the panes in visual order, wrapping around.
    pub fn cycle_focus(&mut self, forward: bool) -> Option<PaneId> {
        let current = self.last_active?;
        let tree = self.workspaces.active_tree()?;
        let target = if forward {
            tree.next_pane(current)
        } else {
            tree.prev_pane(current)
        }?;
        self.set_active(target);
        self.broadcast_panes();
        Some(target)
    }

    /// Nudge the divider nearest the active pane.
    pub fn resize(&mut self, direction: Direction) -> bool {
        let Some(current) = self.last_active else {
            return false;
        };
        let step = self.config.layout.resize_step;
        let resized = self
            .workspaces
            .active_tree_mut()
            .is_some_and(|tree| tree.resize(current, direction, step));
        if resized {
            self.relayout();
            self.broadcast_panes();
            self.schedule_persist();
        }
        resized
    }

    // -- Page --

    /// Load `url` in `pane`'s content surface.
    pub fn navigate(&mut self, pane: PaneId, url: &str) -> bool {
        if !self.with_pane(pane, "navigate", |c| c.navigate(url)) {
            return false;
        }
        debug!(%pane, url, "navigate");
        self.record_url(pane, url);
        true
    }

    /// Store a pane's new location. Metadata from the previous page is
    /// dropped; an unfocused overlay input follows the URL.
    pub(super) fn record_url(&mut self, pane: PaneId, url: &str) {
        if let Some(leaf) = self.workspaces.leaf_mut(pane) {
            if leaf.url != url {
                leaf.url = url.to_string();
                leaf.clear_metadata();
            }
        }
        if let Some(t) = self.transient.get_mut(&pane) {
            if !t.search.is_focused {
                t.search.query = url.to_string();
            }
        }
        self.broadcast_panes();
        self.schedule_persist();
    }

    /// Swap the content and overlay surfaces of `pane`. Returns the surface
    /// now on top.
    pub fn reverse(&mut self, pane: PaneId) -> Option<SurfaceRole> {
        let ctrl = self.panes.get_mut(pane)?;
        let top = match ctrl.reverse() {
            Ok(top) => top,
            Err(e) => {
                warn!(%pane, error = %e, "failed to reverse pane");
                return None;
            }
        };
        let url = ctrl.url().to_string();
        if let Some(leaf) = self.workspaces.leaf_mut(pane) {
            leaf.reverse_layers();
        }

        let focused = top == SurfaceRole::Overlay;
        if focused {
            self.exit_hints(pane);
        } else {
            self.scheduler.cancel(TimerKey::search(pane));
        }
        if let Some(t) = self.transient.get_mut(&pane) {
            t.search.is_focused = focused;
            if focused {
                t.search.query = url;
            }
        }

        self.bus.publish(Event::OverlayFocusChanged {
            pane_id: pane,
            focused,
        });
        self.publish_search(pane);
        self.publish_search_focus(pane);
        self.broadcast_panes();
        Some(top)
    }

    pub fn close_overlay(&mut self, pane: PaneId) {
        if self.panes.get(pane).is_some_and(|c| c.overlay_open()) {
            self.reverse(pane);
        }
    }
}
