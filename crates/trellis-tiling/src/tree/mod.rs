//! Binary split tree stored as an arena of nodes with parent back-links.
//!
//! Leaves are panes; splits divide their rect between two children. A split
//! never has a single child: removing a leaf collapses its parent into the
//! surviving sibling.

mod operations;
mod traversal;
mod types;

use std::collections::HashMap;

use slotmap::SlotMap;
use trellis_common::PaneId;

pub use operations::{MAX_RATIO, MIN_RATIO};
pub use types::*;

#[derive(Debug, Clone, Default)]
pub struct SplitTree {
    nodes: SlotMap<NodeId, Node>,
    root: Option<NodeId>,
    index: HashMap<PaneId, NodeId>,
}

impl SplitTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree holding exactly one leaf.
    pub fn single(leaf: Leaf) -> Self {
        let mut tree = Self::new();
        let node = tree.alloc_leaf(leaf);
        tree.root = Some(node);
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_of(&self, pane: PaneId) -> Option<NodeId> {
        self.index.get(&pane).copied()
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.index.contains_key(&pane)
    }

    pub fn leaf(&self, pane: PaneId) -> Option<&Leaf> {
        let node = self.node_of(pane)?;
        self.nodes.get(node)?.as_leaf()
    }

    pub fn leaf_mut(&mut self, pane: PaneId) -> Option<&mut Leaf> {
        let node = self.node_of(pane)?;
        match &mut self.nodes.get_mut(node)?.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Split { .. } => None,
        }
    }

    pub(crate) fn alloc_leaf(&mut self, leaf: Leaf) -> NodeId {
        let pane = leaf.id;
        let node = self.nodes.insert(Node {
            parent: None,
            kind: NodeKind::Leaf(leaf),
        });
        self.index.insert(pane, node);
        node
    }

    pub(crate) fn alloc_split(
        &mut self,
        direction: SplitDirection,
        ratio: f64,
        a: NodeId,
        b: NodeId,
    ) -> NodeId {
        let split = self.nodes.insert(Node {
            parent: None,
            kind: NodeKind::Split {
                direction,
                ratio,
                a,
                b,
            },
        });
        for child in [a, b] {
            if let Some(node) = self.nodes.get_mut(child) {
                node.parent = Some(split);
            }
        }
        split
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        if let Some(node) = self.nodes.get_mut(root) {
            node.parent = None;
            self.root = Some(root);
        }
    }
}
