//! Workspace records and the errors workspace operations report.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trellis_common::{PaneId, WorkspaceId};

use crate::serialize::{to_serialized, SerializedNode};
use crate::tree::SplitTree;

/// Quick-switch slots available to workspaces.
pub const MAX_WORKSPACES: u8 = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("workspace limit of {0} reached")]
    Capacity(u8),

    #[error("workspace slot {0} is already taken")]
    IndexTaken(u8),

    #[error("the last workspace cannot be removed")]
    LastWorkspace,

    #[error("no workspace with id {0}")]
    NotFound(WorkspaceId),
}

/// How many workspaces may exist and how many may keep live surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceLimits {
    pub max_workspaces: u8,
    pub max_live: u8,
}

impl Default for WorkspaceLimits {
    fn default() -> Self {
        Self {
            max_workspaces: MAX_WORKSPACES,
            max_live: 3,
        }
    }
}

/// A workspace's panes: live with surfaces, or evicted to its serialized form.
#[derive(Debug, Clone)]
pub enum WorkspaceTree {
    Live(SplitTree),
    Evicted(Option<SerializedNode>),
}

impl WorkspaceTree {
    pub fn is_live(&self) -> bool {
        matches!(self, WorkspaceTree::Live(_))
    }

    pub fn live(&self) -> Option<&SplitTree> {
        match self {
            WorkspaceTree::Live(tree) => Some(tree),
            WorkspaceTree::Evicted(_) => None,
        }
    }

    pub fn live_mut(&mut self) -> Option<&mut SplitTree> {
        match self {
            WorkspaceTree::Live(tree) => Some(tree),
            WorkspaceTree::Evicted(_) => None,
        }
    }

    pub fn serialized(&self) -> Option<SerializedNode> {
        match self {
            WorkspaceTree::Live(tree) => to_serialized(tree),
            WorkspaceTree::Evicted(node) => node.clone(),
        }
    }

    pub fn pane_ids(&self) -> Vec<PaneId> {
        match self {
            WorkspaceTree::Live(tree) => tree.leaves(),
            WorkspaceTree::Evicted(node) => node.as_ref().map(|n| n.pane_ids()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    /// Quick-switch slot, zero based.
    pub index: u8,
    pub tree: WorkspaceTree,
    pub active_pane: Option<PaneId>,
    /// Unix millis, strictly increasing across touches.
    pub last_accessed: i64,
    pub is_active: bool,
    pub preview: Option<String>,
}

impl Workspace {
    pub fn pane_count(&self) -> usize {
        self.tree.pane_ids().len()
    }
}

/// What `remove_workspace` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedWorkspace {
    pub id: WorkspaceId,
    pub was_active: bool,
    /// Panes whose surfaces were destroyed.
    pub panes: Vec<PaneId>,
    /// Workspace shown in its place when the removed one was active. Filled
    /// by callers that pick one; `remove_workspace` itself never switches.
    pub switched_to: Option<WorkspaceId>,
}

/// What closing a pane did to the workspace structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneClosed {
    /// Unknown pane; nothing changed.
    NotFound,
    /// Removed from the tree. `focus` is the pane that should become active.
    Removed { focus: Option<PaneId> },
    /// It was the workspace's only pane, so the workspace went with it.
    WorkspaceRemoved(RemovedWorkspace),
    /// The only pane of the only workspace. The window should close.
    LastPane,
}

/// Persisted form of one workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedWorkspace {
    pub id: WorkspaceId,
    pub name: String,
    pub index: u8,
    #[serde(default)]
    pub root: Option<SerializedNode>,
    #[serde(default)]
    pub active_pane_id: Option<PaneId>,
    #[serde(default)]
    pub last_accessed: i64,
}

/// Persisted form of the whole catalogue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    pub workspaces: Vec<SerializedWorkspace>,
    pub active_workspace_id: Option<WorkspaceId>,
}
