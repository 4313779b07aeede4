//! Structural mutations: split insertion, removal with collapse, resize.

use trellis_common::{Direction, PaneId};

use super::{Leaf, NodeId, NodeKind, Side, SplitDirection, SplitTree};

/// Ratios are kept away from the edges so neither child vanishes.
pub const MIN_RATIO: f64 = 0.05;
pub const MAX_RATIO: f64 = 0.95;

impl SplitTree {
    /// Handle of the split directly above `pane`. `None` for the root leaf
    /// or an unknown pane.
    pub fn find_parent(&self, pane: PaneId) -> Option<NodeId> {
        let node = self.node_of(pane)?;
        self.nodes.get(node)?.parent
    }

    /// Point whichever child slot of `parent` held `old` at `new`.
    /// Returns `false` when `old` is not a child of `parent`.
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> bool {
        if !self.nodes.contains_key(new) {
            return false;
        }
        let replaced = match self.nodes.get_mut(parent).map(|n| &mut n.kind) {
            Some(NodeKind::Split { a, .. }) if *a == old => {
                *a = new;
                true
            }
            Some(NodeKind::Split { b, .. }) if *b == old => {
                *b = new;
                true
            }
            _ => false,
        };
        if replaced {
            if let Some(node) = self.nodes.get_mut(new) {
                node.parent = Some(parent);
            }
        }
        replaced
    }

    /// Remove a leaf. Its parent split is replaced by the surviving sibling;
    /// removing the last leaf leaves the tree empty.
    pub fn remove(&mut self, pane: PaneId) -> bool {
        let Some(node) = self.node_of(pane) else {
            return false;
        };
        let parent = self.nodes.get(node).and_then(|n| n.parent);

        let Some(parent) = parent else {
            self.nodes.remove(node);
            self.index.remove(&pane);
            self.root = None;
            return true;
        };

        let sibling = match self.nodes.get(parent).map(|n| &n.kind) {
            Some(NodeKind::Split { a, b, .. }) => {
                if *a == node {
                    *b
                } else {
                    *a
                }
            }
            _ => return false,
        };
        let grandparent = self.nodes.get(parent).and_then(|n| n.parent);

        match grandparent {
            Some(grandparent) => {
                if !self.replace_child(grandparent, parent, sibling) {
                    return false;
                }
            }
            None => {
                if let Some(s) = self.nodes.get_mut(sibling) {
                    s.parent = None;
                }
                self.root = Some(sibling);
            }
        }

        self.nodes.remove(parent);
        self.nodes.remove(node);
        self.index.remove(&pane);
        true
    }

    /// Split `existing` in two, placing `leaf` on `side` with an even ratio.
    /// On an empty tree `leaf` becomes the root. Fails when `existing` is
    /// unknown or `leaf.id` is already present.
    pub fn insert_split(
        &mut self,
        existing: PaneId,
        leaf: Leaf,
        direction: SplitDirection,
        side: Side,
    ) -> bool {
        if self.index.contains_key(&leaf.id) {
            return false;
        }
        if self.is_empty() {
            let node = self.alloc_leaf(leaf);
            self.root = Some(node);
            return true;
        }
        let Some(target) = self.node_of(existing) else {
            return false;
        };
        let parent = self.nodes.get(target).and_then(|n| n.parent);

        let new_leaf = self.alloc_leaf(leaf);
        let (a, b) = match side {
            Side::Before => (new_leaf, target),
            Side::After => (target, new_leaf),
        };
        let split = self.alloc_split(direction, 0.5, a, b);

        match parent {
            Some(parent) => {
                self.replace_child(parent, target, split);
            }
            None => self.root = Some(split),
        }
        true
    }

    /// Move the divider of the nearest ancestor split whose axis matches
    /// `direction`. Right and Down grow child `a`; Left and Up shrink it.
    pub fn resize(&mut self, pane: PaneId, direction: Direction, step: f64) -> bool {
        let axis = SplitDirection::for_direction(direction);
        let delta = if direction.is_forward() { step } else { -step };

        let mut current = self.node_of(pane);
        while let Some(node) = current {
            let parent = self.nodes.get(node).and_then(|n| n.parent);
            if let Some(parent) = parent {
                if let Some(NodeKind::Split {
                    direction: split_dir,
                    ratio,
                    ..
                }) = self.nodes.get_mut(parent).map(|n| &mut n.kind)
                {
                    if *split_dir == axis {
                        let next = (*ratio + delta).clamp(MIN_RATIO, MAX_RATIO);
                        tracing::trace!(%pane, from = *ratio, to = next, "resize split");
                        *ratio = next;
                        return true;
                    }
                }
            }
            current = parent;
        }
        false
    }

    /// Replace the leaf data stored for `pane`, keeping its position.
    pub fn update_leaf(&mut self, pane: PaneId, f: impl FnOnce(&mut Leaf)) -> bool {
        match self.leaf_mut(pane) {
            Some(leaf) => {
                f(leaf);
                true
            }
            None => false,
        }
    }
}
