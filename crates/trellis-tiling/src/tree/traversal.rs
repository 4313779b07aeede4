//! In-order walks over the leaves of a split tree.

use trellis_common::PaneId;

use super::{Leaf, NodeId, NodeKind, SplitTree};

impl SplitTree {
    /// Leaves in visual order: left before right, top before bottom.
    pub fn leaves(&self) -> Vec<PaneId> {
        self.leaf_refs().into_iter().map(|leaf| leaf.id).collect()
    }

    pub fn leaf_refs(&self) -> Vec<&Leaf> {
        let mut out = Vec::with_capacity(self.index.len());
        if let Some(root) = self.root {
            self.collect(root, &mut out);
        }
        out
    }

    fn collect<'a>(&'a self, node: NodeId, out: &mut Vec<&'a Leaf>) {
        match self.nodes.get(node).map(|n| &n.kind) {
            Some(NodeKind::Leaf(leaf)) => out.push(leaf),
            Some(NodeKind::Split { a, b, .. }) => {
                self.collect(*a, out);
                self.collect(*b, out);
            }
            None => {}
        }
    }

    pub fn first_leaf(&self) -> Option<PaneId> {
        let mut node = self.root?;
        loop {
            match &self.nodes.get(node)?.kind {
                NodeKind::Leaf(leaf) => return Some(leaf.id),
                NodeKind::Split { a, .. } => node = *a,
            }
        }
    }

    /// Next pane in visual order, wrapping around.
    pub fn next_pane(&self, current: PaneId) -> Option<PaneId> {
        let ids = self.leaves();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + 1) % ids.len()])
    }

    /// Previous pane in visual order, wrapping around.
    pub fn prev_pane(&self, current: PaneId) -> Option<PaneId> {
        let ids = self.leaves();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()])
    }
}
