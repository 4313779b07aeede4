//! Snapshots pushed to overlay pages and event-bus subscribers.

use trellis_common::{Event, PaneId, PaneState, WorkspaceInfo};
use trellis_webview::{OutboundMessage, SurfaceFactory};

use super::Session;

impl<F: SurfaceFactory> Session<F> {
    /// Every pane of the active workspace with its current rect.
    pub fn list_panes(&self) -> Vec<PaneState> {
        self.workspaces
            .active_tree()
            .map(|tree| self.engine.pane_states(tree, self.viewport))
            .unwrap_or_default()
    }

    pub fn list_workspaces(&self) -> Vec<WorkspaceInfo> {
        self.workspaces.infos(&self.panes)
    }

    fn send_to_overlays(&mut self, message: &OutboundMessage) {
        let panes = self
            .workspaces
            .active_tree()
            .map(|tree| tree.leaves())
            .unwrap_or_default();
        for pane in panes {
            self.with_pane(pane, "overlay update", |c| c.send_overlay(message));
        }
    }

    pub(super) fn broadcast_panes(&mut self) {
        let states = self.list_panes();
        self.bus.publish(Event::PanesChanged(states.clone()));
        self.send_to_overlays(&OutboundMessage::Panes(states));
    }

    pub(super) fn broadcast_workspaces(&mut self) {
        let infos = self.list_workspaces();
        self.bus.publish(Event::WorkspacesChanged(infos.clone()));
        self.send_to_overlays(&OutboundMessage::Workspaces(infos));
    }

    pub(super) fn broadcast_all(&mut self) {
        self.broadcast_panes();
        self.broadcast_workspaces();
    }

    pub(super) fn publish_search(&mut self, pane: PaneId) {
        let Some(state) = self.transient.get(&pane).map(|t| t.search.clone()) else {
            return;
        };
        self.bus.publish(Event::SearchUpdate {
            pane_id: pane,
            query: state.query.clone(),
        });
        self.with_pane(pane, "search update", |c| {
            c.send_overlay(&OutboundMessage::Search(state))
        });
    }

    pub(super) fn publish_search_focus(&mut self, pane: PaneId) {
        let Some(is_focused) = self.transient.get(&pane).map(|t| t.search.is_focused) else {
            return;
        };
        self.bus.publish(Event::SearchFocus {
            pane_id: pane,
            is_focused,
        });
    }

    pub(super) fn broadcast_hints(&mut self, pane: PaneId) {
        let Some(state) = self.transient.get(&pane).map(|t| t.biscuit.clone()) else {
            return;
        };
        self.bus.publish(Event::HintsChanged(state.clone()));
        self.with_pane(pane, "hint update", |c| {
            c.send_overlay(&OutboundMessage::Hints(state))
        });
    }
}
