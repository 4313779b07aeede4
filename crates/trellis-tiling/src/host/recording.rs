//! In-memory [`PaneHost`] that records every call.
//!
//! Used by tests and by headless runs where no surfaces exist.

use std::collections::{BTreeMap, HashSet};

use trellis_common::{PaneId, TrellisError};

use super::{PaneHost, Result};
use crate::tree::Leaf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Spawn { pane: PaneId, visible: bool },
    Attach(PaneId),
    Detach(PaneId),
    Destroy(PaneId),
    Preview(PaneId),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    /// Live panes and whether they are shown.
    pub panes: BTreeMap<PaneId, bool>,
    pub audible: HashSet<PaneId>,
    pub muted: HashSet<PaneId>,
    /// When set, `spawn` fails for these panes.
    pub fail_spawn: HashSet<PaneId>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Vec<PaneId> {
        self.panes
            .iter()
            .filter_map(|(id, shown)| shown.then_some(*id))
            .collect()
    }

    pub fn is_live(&self, pane: PaneId) -> bool {
        self.panes.contains_key(&pane)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl PaneHost for RecordingHost {
    fn spawn(&mut self, leaf: &Leaf, visible: bool) -> Result<()> {
        if self.fail_spawn.contains(&leaf.id) {
            return Err(TrellisError::Surface(format!("cannot spawn {}", leaf.id)));
        }
        self.calls.push(HostCall::Spawn {
            pane: leaf.id,
            visible,
        });
        self.panes.insert(leaf.id, visible);
        Ok(())
    }

    fn attach(&mut self, pane: PaneId) {
        self.calls.push(HostCall::Attach(pane));
        if let Some(shown) = self.panes.get_mut(&pane) {
            *shown = true;
        }
    }

    fn detach(&mut self, pane: PaneId) {
        self.calls.push(HostCall::Detach(pane));
        if let Some(shown) = self.panes.get_mut(&pane) {
            *shown = false;
        }
    }

    fn destroy(&mut self, pane: PaneId) {
        self.calls.push(HostCall::Destroy(pane));
        self.panes.remove(&pane);
    }

    fn request_preview(&mut self, pane: PaneId) {
        self.calls.push(HostCall::Preview(pane));
    }

    fn is_audible(&self, pane: PaneId) -> bool {
        self.audible.contains(&pane)
    }

    fn is_muted(&self, pane: PaneId) -> bool {
        self.muted.contains(&pane)
    }
}
