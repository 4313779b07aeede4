//! The workspace catalogue: creation, switching, eviction and removal.

use chrono::Utc;
use tracing::{debug, info, warn};
use trellis_common::{PaneId, WorkspaceId, WorkspaceInfo};

use super::{
    RemovedWorkspace, Workspace, WorkspaceError, WorkspaceLimits, WorkspaceTree, MAX_WORKSPACES,
};
use crate::host::PaneHost;
use crate::serialize::from_serialized;
use crate::tree::{Leaf, SplitTree};

/// Owns every workspace and the single process-wide pane id allocator.
/// Exactly one workspace is active at any time.
pub struct WorkspaceManager {
    pub(super) workspaces: Vec<Workspace>,
    pub(super) active: WorkspaceId,
    pub(super) next_pane_id: u32,
    pub(super) limits: WorkspaceLimits,
    pub(super) default_url: String,
    pub(super) clock: i64,
}

impl WorkspaceManager {
    /// Start with one active workspace holding a single pane at `default_url`.
    pub fn new(
        limits: WorkspaceLimits,
        default_url: impl Into<String>,
        host: &mut dyn PaneHost,
    ) -> Self {
        let mut mgr = Self::empty(limits, default_url.into());
        let id = WorkspaceId::new();
        let tree = mgr.fresh_tree(host, true);
        let active_pane = tree.first_leaf();
        let stamp = mgr.stamp();
        mgr.workspaces.push(Workspace {
            id: id.clone(),
            name: workspace_name(0),
            index: 0,
            tree: WorkspaceTree::Live(tree),
            active_pane,
            last_accessed: stamp,
            is_active: true,
            preview: None,
        });
        mgr.active = id;
        mgr
    }

    pub(super) fn empty(limits: WorkspaceLimits, default_url: String) -> Self {
        Self {
            workspaces: Vec::new(),
            active: WorkspaceId::from(""),
            next_pane_id: 1,
            limits: WorkspaceLimits {
                max_workspaces: limits.max_workspaces.clamp(1, MAX_WORKSPACES),
                max_live: limits.max_live.max(1),
            },
            default_url,
            clock: 0,
        }
    }

    // -- Accessors --

    pub fn active_id(&self) -> &WorkspaceId {
        &self.active
    }

    pub fn active(&self) -> Option<&Workspace> {
        self.get(&self.active)
    }

    pub fn get(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| &w.id == id)
    }

    pub(super) fn get_mut(&mut self, id: &WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|w| &w.id == id)
    }

    pub fn by_index(&self, index: u8) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.index == index)
    }

    /// Workspaces ordered by slot.
    pub fn list(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn limits(&self) -> WorkspaceLimits {
        self.limits
    }

    pub fn active_tree(&self) -> Option<&SplitTree> {
        self.active()?.tree.live()
    }

    pub fn active_tree_mut(&mut self) -> Option<&mut SplitTree> {
        let active = self.active.clone();
        self.get_mut(&active)?.tree.live_mut()
    }

    pub fn active_pane(&self) -> Option<PaneId> {
        self.active()?.active_pane
    }

    /// Record the focused pane of the active workspace. Unknown panes are ignored.
    pub fn set_active_pane(&mut self, pane: PaneId) -> bool {
        let active = self.active.clone();
        match self.get_mut(&active) {
            Some(ws) if ws.tree.live().is_some_and(|t| t.contains(pane)) => {
                ws.active_pane = Some(pane);
                true
            }
            _ => false,
        }
    }

    /// Workspace whose live tree holds `pane`.
    pub fn workspace_of(&self, pane: PaneId) -> Option<&WorkspaceId> {
        self.workspaces
            .iter()
            .find(|w| w.tree.live().is_some_and(|t| t.contains(pane)))
            .map(|w| &w.id)
    }

    /// Leaf `pane` in whichever live workspace holds it.
    pub fn leaf(&self, pane: PaneId) -> Option<&Leaf> {
        self.workspaces
            .iter()
            .find_map(|w| w.tree.live().and_then(|t| t.leaf(pane)))
    }

    pub fn leaf_mut(&mut self, pane: PaneId) -> Option<&mut Leaf> {
        self.workspaces
            .iter_mut()
            .find_map(|w| w.tree.live_mut().and_then(|t| t.leaf_mut(pane)))
    }

    pub fn allocate_pane_id(&mut self) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        id
    }

    /// Make sure future ids never collide with `seen`.
    pub(super) fn reserve_past(&mut self, seen: PaneId) {
        self.next_pane_id = self.next_pane_id.max(seen.0.saturating_add(1));
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    // -- Lifecycle --

    /// Show workspace `id`, hiding the current one. Evicted trees are rebuilt
    /// with their original pane ids. Unknown ids are a no-op.
    pub fn switch_to(&mut self, id: &WorkspaceId, host: &mut dyn PaneHost) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if *id == self.active {
            let stamp = self.stamp();
            if let Some(ws) = self.get_mut(id) {
                ws.last_accessed = stamp;
            }
            return true;
        }

        let previous = self.active.clone();
        let stamp = self.stamp();
        if let Some(ws) = self.get_mut(&previous) {
            if let Some(tree) = ws.tree.live() {
                if let Some(pane) = ws.active_pane {
                    host.request_preview(pane);
                }
                for pane in tree.leaves() {
                    host.detach(pane);
                }
            }
            ws.is_active = false;
            ws.last_accessed = stamp;
        }

        self.show(id, host);
        self.active = id.clone();
        info!(workspace = %id, from = %previous, "switched workspace");

        self.enforce_live_limit(host);
        true
    }

    /// Attach a workspace's panes, restoring them first if evicted.
    pub(super) fn show(&mut self, id: &WorkspaceId, host: &mut dyn PaneHost) {
        let stamp = self.stamp();
        let Some(pos) = self.workspaces.iter().position(|w| &w.id == id) else {
            return;
        };

        let restored = match &self.workspaces[pos].tree {
            WorkspaceTree::Live(tree) => {
                for pane in tree.leaves() {
                    host.attach(pane);
                }
                None
            }
            WorkspaceTree::Evicted(node) => Some(node.clone()),
        };

        if let Some(node) = restored {
            let tree = match node.as_ref().map(from_serialized) {
                Some(Ok(tree)) if !tree.is_empty() => {
                    for leaf in tree.leaf_refs() {
                        if let Err(e) = host.spawn(leaf, true) {
                            warn!(pane = %leaf.id, error = %e, "failed to restore pane");
                        }
                    }
                    if let Some(max) = tree.leaves().into_iter().max() {
                        self.reserve_past(max);
                    }
                    tree
                }
                Some(Err(e)) => {
                    warn!(workspace = %id, error = %e, "discarding unreadable workspace tree");
                    self.fresh_tree(host, true)
                }
                _ => self.fresh_tree(host, true),
            };
            debug!(workspace = %id, panes = tree.len(), "restored workspace");
            self.workspaces[pos].tree = WorkspaceTree::Live(tree);
        }

        let ws = &mut self.workspaces[pos];
        let first = ws.tree.live().and_then(|t| t.first_leaf());
        let still_there = ws
            .active_pane
            .is_some_and(|p| ws.tree.live().is_some_and(|t| t.contains(p)));
        if !still_there {
            ws.active_pane = first;
        }
        ws.is_active = true;
        ws.last_accessed = stamp;
    }

    /// Create a workspace in `index` or the lowest free slot. It starts with
    /// one hidden pane and does not become active.
    pub fn create_workspace(
        &mut self,
        index: Option<u8>,
        host: &mut dyn PaneHost,
    ) -> Result<WorkspaceId, WorkspaceError> {
        let max = self.limits.max_workspaces;
        if self.workspaces.len() >= usize::from(max) {
            return Err(WorkspaceError::Capacity(max));
        }
        let index = match index {
            Some(i) if i >= max => return Err(WorkspaceError::Capacity(max)),
            Some(i) if self.by_index(i).is_some() => return Err(WorkspaceError::IndexTaken(i)),
            Some(i) => i,
            None => (0..max)
                .find(|i| self.by_index(*i).is_none())
                .ok_or(WorkspaceError::Capacity(max))?,
        };

        let id = WorkspaceId::new();
        let tree = self.fresh_tree(host, false);
        let active_pane = tree.first_leaf();
        let stamp = self.stamp();
        self.workspaces.push(Workspace {
            id: id.clone(),
            name: workspace_name(index),
            index,
            tree: WorkspaceTree::Live(tree),
            active_pane,
            last_accessed: stamp,
            is_active: false,
            preview: None,
        });
        self.workspaces.sort_by_key(|w| w.index);
        info!(workspace = %id, index, "created workspace");

        self.enforce_live_limit(host);
        Ok(id)
    }

    /// Remove a workspace and destroy its panes. Removing the active workspace
    /// leaves nothing shown: the caller must `switch_to` another one, usually
    /// [`most_recent_other`](Self::most_recent_other).
    pub fn remove_workspace(
        &mut self,
        id: &WorkspaceId,
        host: &mut dyn PaneHost,
    ) -> Result<RemovedWorkspace, WorkspaceError> {
        if self.get(id).is_none() {
            return Err(WorkspaceError::NotFound(id.clone()));
        }
        if self.workspaces.len() <= 1 {
            return Err(WorkspaceError::LastWorkspace);
        }

        let was_active = *id == self.active;

        let Some(pos) = self.workspaces.iter().position(|w| &w.id == id) else {
            return Err(WorkspaceError::NotFound(id.clone()));
        };
        let ws = self.workspaces.remove(pos);
        let panes = match &ws.tree {
            WorkspaceTree::Live(tree) => {
                let panes = tree.leaves();
                for pane in &panes {
                    host.destroy(*pane);
                }
                panes
            }
            WorkspaceTree::Evicted(_) => Vec::new(),
        };
        info!(workspace = %id, panes = panes.len(), "removed workspace");

        Ok(RemovedWorkspace {
            id: id.clone(),
            was_active,
            panes,
            switched_to: None,
        })
    }

    pub fn rename_workspace(
        &mut self,
        id: &WorkspaceId,
        name: impl Into<String>,
    ) -> Result<(), WorkspaceError> {
        let ws = self
            .get_mut(id)
            .ok_or_else(|| WorkspaceError::NotFound(id.clone()))?;
        ws.name = name.into();
        Ok(())
    }

    /// Serialize a hidden workspace and destroy its surfaces. The active
    /// workspace is never evicted.
    pub fn evict(&mut self, id: &WorkspaceId, host: &mut dyn PaneHost) -> bool {
        if *id == self.active {
            return false;
        }
        let Some(ws) = self.get_mut(id) else {
            return false;
        };
        let WorkspaceTree::Live(tree) = &ws.tree else {
            return false;
        };
        for pane in tree.leaves() {
            host.destroy(pane);
        }
        ws.tree = WorkspaceTree::Evicted(ws.tree.serialized());
        debug!(workspace = %id, "evicted workspace");
        true
    }

    /// Evict hidden live workspaces, least recently used first, until no
    /// more than `max_live` workspaces keep surfaces.
    pub(super) fn enforce_live_limit(&mut self, host: &mut dyn PaneHost) {
        let mut hidden: Vec<(i64, WorkspaceId)> = self
            .workspaces
            .iter()
            .filter(|w| w.tree.is_live() && w.id != self.active)
            .map(|w| (w.last_accessed, w.id.clone()))
            .collect();
        hidden.sort_by_key(|(stamp, _)| *stamp);

        let live = hidden.len() + 1;
        let excess = live.saturating_sub(usize::from(self.limits.max_live));
        for (_, id) in hidden.into_iter().take(excess) {
            self.evict(&id, host);
        }
    }

    /// Most recently accessed workspace other than `id`.
    pub fn most_recent_other(&self, id: &WorkspaceId) -> Option<&WorkspaceId> {
        self.workspaces
            .iter()
            .filter(|w| &w.id != id)
            .max_by_key(|w| w.last_accessed)
            .map(|w| &w.id)
    }

    /// `true` when any live pane of the workspace is muted.
    pub fn is_muted(&self, id: &WorkspaceId, host: &dyn PaneHost) -> bool {
        self.live_panes(id).iter().any(|p| host.is_muted(*p))
    }

    /// `true` when any live pane of the workspace is playing sound.
    pub fn is_audible(&self, id: &WorkspaceId, host: &dyn PaneHost) -> bool {
        self.live_panes(id).iter().any(|p| host.is_audible(*p))
    }

    fn live_panes(&self, id: &WorkspaceId) -> Vec<PaneId> {
        self.get(id)
            .and_then(|w| w.tree.live())
            .map(SplitTree::leaves)
            .unwrap_or_default()
    }

    pub fn set_preview(&mut self, id: &WorkspaceId, preview: Option<String>) {
        if let Some(ws) = self.get_mut(id) {
            ws.preview = preview;
        }
    }

    /// Switcher summaries, ordered by slot.
    pub fn infos(&self, host: &dyn PaneHost) -> Vec<WorkspaceInfo> {
        self.workspaces
            .iter()
            .map(|w| WorkspaceInfo {
                id: w.id.as_str().to_string(),
                name: w.name.clone(),
                index: w.index,
                is_active: w.is_active,
                is_muted: self.is_muted(&w.id, host),
                is_audible: self.is_audible(&w.id, host),
                pane_count: w.pane_count(),
                preview: w.preview.clone(),
            })
            .collect()
    }

    // -- Internals --

    pub(super) fn fresh_tree(&mut self, host: &mut dyn PaneHost, visible: bool) -> SplitTree {
        let leaf = Leaf::new(self.allocate_pane_id(), self.default_url.clone());
        if let Err(e) = host.spawn(&leaf, visible) {
            warn!(pane = %leaf.id, error = %e, "failed to create pane surfaces");
        }
        SplitTree::single(leaf)
    }

    /// Wall-clock millis, bumped so consecutive touches always differ.
    pub(super) fn stamp(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.clock = now.max(self.clock + 1);
        self.clock
    }
}

pub(super) fn workspace_name(index: u8) -> String {
    format!("Workspace {}", u16::from(index) + 1)
}
