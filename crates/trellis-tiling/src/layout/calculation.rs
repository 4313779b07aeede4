//! Layout calculation: recursive tree-to-rect computation.

use trellis_common::{PaneId, PaneState, Rect};

use crate::tree::{NodeId, NodeKind, SplitDirection, SplitTree};

use super::LayoutEngine;

impl LayoutEngine {
    /// Rect of every leaf, in visual order. An empty tree yields nothing.
    pub fn compute(&self, tree: &SplitTree, viewport: Rect) -> Vec<(PaneId, Rect)> {
        let mut results = Vec::with_capacity(tree.len());
        if let Some(root) = tree.root() {
            self.layout_node(tree, root, viewport, &mut results);
        }
        results
    }

    /// Flattened pane views with rects filled in.
    pub fn pane_states(&self, tree: &SplitTree, viewport: Rect) -> Vec<PaneState> {
        self.compute(tree, viewport)
            .into_iter()
            .filter_map(|(id, rect)| {
                let leaf = tree.leaf(id)?;
                Some(PaneState {
                    id,
                    url: leaf.url.clone(),
                    title: leaf.title.clone(),
                    rect,
                    favicon: leaf.favicon_url.clone(),
                    description: leaf.description.clone(),
                    background_color: leaf.background_color.clone(),
                    text_color: leaf.text_color.clone(),
                    image: leaf.image_url.clone(),
                })
            })
            .collect()
    }

    /// Rect of a single pane, if present.
    pub fn rect_of(&self, tree: &SplitTree, viewport: Rect, pane: PaneId) -> Option<Rect> {
        self.compute(tree, viewport)
            .into_iter()
            .find_map(|(id, rect)| (id == pane).then_some(rect))
    }

    fn layout_node(
        &self,
        tree: &SplitTree,
        node: NodeId,
        bounds: Rect,
        out: &mut Vec<(PaneId, Rect)>,
    ) {
        match tree.node(node).map(|n| &n.kind) {
            Some(NodeKind::Leaf(leaf)) => out.push((leaf.id, bounds)),
            Some(NodeKind::Split {
                direction,
                ratio,
                a,
                b,
            }) => {
                let vertical = *direction == SplitDirection::Vertical;
                let (first, second) = self.partition(bounds, vertical, *ratio);
                self.layout_node(tree, *a, first, out);
                self.layout_node(tree, *b, second, out);
            }
            None => {}
        }
    }
}
