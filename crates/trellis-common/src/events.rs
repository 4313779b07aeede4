use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{BiscuitState, PaneId, PaneState, WorkspaceInfo};

/// Push notifications for overlay and presentation subscribers.
///
/// Every event is a snapshot taken after the mutation that caused it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PanesChanged(Vec<PaneState>),
    OverlayFocusChanged { pane_id: PaneId, focused: bool },
    SearchUpdate { pane_id: PaneId, query: String },
    SearchFocus { pane_id: PaneId, is_focused: bool },
    HintsChanged(BiscuitState),
    WorkspacesChanged(Vec<WorkspaceInfo>),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached; zero when nobody listens.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
