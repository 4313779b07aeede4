//! Node types stored in the split tree arena.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trellis_common::{Direction, PaneId};

slotmap::new_key_type! {
    /// Opaque handle to a node in a [`SplitTree`](super::SplitTree).
    pub struct NodeId;
}

/// Axis a split divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    /// Divides width: `a` is on the left.
    Vertical,
    /// Divides height: `a` is on top.
    Horizontal,
}

impl SplitDirection {
    /// The split axis that a movement in `direction` crosses.
    pub fn for_direction(direction: Direction) -> Self {
        if direction.is_horizontal() {
            SplitDirection::Vertical
        } else {
            SplitDirection::Horizontal
        }
    }

    pub fn matches(self, direction: Direction) -> bool {
        self == Self::for_direction(direction)
    }
}

/// Which child slot of a split a new leaf occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Child `a` (left or top).
    Before,
    /// Child `b` (right or bottom).
    After,
}

impl From<Direction> for Side {
    fn from(direction: Direction) -> Self {
        if direction.is_forward() {
            Side::After
        } else {
            Side::Before
        }
    }
}

/// The two stacked surfaces of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceLayer {
    Content,
    Overlay,
}

/// A pane: the page it shows and the metadata last extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub id: PaneId,
    pub url: String,
    pub title: Option<String>,
    pub favicon_url: Option<String>,
    pub description: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub image_url: Option<String>,
    /// Bottom to top. The last entry holds focus.
    pub layer_order: [SurfaceLayer; 2],
}

impl Leaf {
    pub fn new(id: PaneId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: None,
            favicon_url: None,
            description: None,
            background_color: None,
            text_color: None,
            image_url: None,
            layer_order: [SurfaceLayer::Overlay, SurfaceLayer::Content],
        }
    }

    pub fn top_layer(&self) -> SurfaceLayer {
        self.layer_order[1]
    }

    pub fn overlay_on_top(&self) -> bool {
        self.top_layer() == SurfaceLayer::Overlay
    }

    /// Swap which surface is on top. Returns the layer now on top.
    pub fn reverse_layers(&mut self) -> SurfaceLayer {
        self.layer_order.swap(0, 1);
        self.top_layer()
    }

    /// Drop metadata extracted from a previous page.
    pub fn clear_metadata(&mut self) {
        self.favicon_url = None;
        self.description = None;
        self.background_color = None;
        self.text_color = None;
        self.image_url = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf(Leaf),
    Split {
        direction: SplitDirection,
        /// Share of the extent given to `a`, in (0, 1).
        ratio: f64,
        a: NodeId,
        b: NodeId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match &self.kind {
            NodeKind::Leaf(leaf) => Some(leaf),
            NodeKind::Split { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}

/// Reasons a serialized tree is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    #[error("pane id {0} appears more than once")]
    DuplicatePane(PaneId),

    #[error("split ratio {0} is not a finite number")]
    InvalidRatio(f64),
}
