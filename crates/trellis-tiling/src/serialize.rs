//! Surface-free JSON form of a split tree, used for persistence and for
//! evicted workspaces.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use trellis_common::PaneId;

use crate::tree::{
    Leaf, NodeId, NodeKind, SplitDirection, SplitTree, TreeError, MAX_RATIO, MIN_RATIO,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SerializedNode {
    #[serde(rename_all = "camelCase")]
    Leaf {
        id: PaneId,
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        favicon_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Split {
        direction: SplitDirection,
        ratio: f64,
        child_a: Box<SerializedNode>,
        child_b: Box<SerializedNode>,
    },
}

impl SerializedNode {
    /// Every pane id in the serialized tree, in visual order.
    pub fn pane_ids(&self) -> Vec<PaneId> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids(&self, out: &mut Vec<PaneId>) {
        match self {
            SerializedNode::Leaf { id, .. } => out.push(*id),
            SerializedNode::Split {
                child_a, child_b, ..
            } => {
                child_a.collect_ids(out);
                child_b.collect_ids(out);
            }
        }
    }

    pub fn max_pane_id(&self) -> Option<PaneId> {
        self.pane_ids().into_iter().max()
    }

    /// Url of the first leaf, used as a cheap label for evicted workspaces.
    pub fn first_url(&self) -> &str {
        match self {
            SerializedNode::Leaf { url, .. } => url,
            SerializedNode::Split { child_a, .. } => child_a.first_url(),
        }
    }
}

impl From<&Leaf> for SerializedNode {
    fn from(leaf: &Leaf) -> Self {
        SerializedNode::Leaf {
            id: leaf.id,
            url: leaf.url.clone(),
            title: leaf.title.clone(),
            favicon_url: leaf.favicon_url.clone(),
            description: leaf.description.clone(),
            background_color: leaf.background_color.clone(),
            text_color: leaf.text_color.clone(),
            image_url: leaf.image_url.clone(),
        }
    }
}

/// Serialize a live tree. `None` for an empty tree.
pub fn to_serialized(tree: &SplitTree) -> Option<SerializedNode> {
    tree.root().and_then(|root| serialize_node(tree, root))
}

fn serialize_node(tree: &SplitTree, node: NodeId) -> Option<SerializedNode> {
    match &tree.node(node)?.kind {
        NodeKind::Leaf(leaf) => Some(SerializedNode::from(leaf)),
        NodeKind::Split {
            direction,
            ratio,
            a,
            b,
        } => Some(SerializedNode::Split {
            direction: *direction,
            ratio: *ratio,
            child_a: Box::new(serialize_node(tree, *a)?),
            child_b: Box::new(serialize_node(tree, *b)?),
        }),
    }
}

/// Rebuild a live tree, keeping every leaf's id. Out-of-range ratios are
/// clamped; non-finite ratios and repeated ids are rejected.
pub fn from_serialized(node: &SerializedNode) -> Result<SplitTree, TreeError> {
    let mut seen = HashSet::new();
    validate(node, &mut seen)?;

    let mut tree = SplitTree::new();
    let root = build(&mut tree, node);
    tree.set_root(root);
    Ok(tree)
}

fn validate(node: &SerializedNode, seen: &mut HashSet<PaneId>) -> Result<(), TreeError> {
    match node {
        SerializedNode::Leaf { id, .. } => {
            if !seen.insert(*id) {
                return Err(TreeError::DuplicatePane(*id));
            }
            Ok(())
        }
        SerializedNode::Split {
            ratio,
            child_a,
            child_b,
            ..
        } => {
            if !ratio.is_finite() {
                return Err(TreeError::InvalidRatio(*ratio));
            }
            validate(child_a, seen)?;
            validate(child_b, seen)
        }
    }
}

fn build(tree: &mut SplitTree, node: &SerializedNode) -> NodeId {
    match node {
        SerializedNode::Leaf {
            id,
            url,
            title,
            favicon_url,
            description,
            background_color,
            text_color,
            image_url,
        } => {
            let mut leaf = Leaf::new(*id, url.clone());
            leaf.title = title.clone();
            leaf.favicon_url = favicon_url.clone();
            leaf.description = description.clone();
            leaf.background_color = background_color.clone();
            leaf.text_color = text_color.clone();
            leaf.image_url = image_url.clone();
            tree.alloc_leaf(leaf)
        }
        SerializedNode::Split {
            direction,
            ratio,
            child_a,
            child_b,
        } => {
            let a = build(tree, child_a);
            let b = build(tree, child_b);
            tree.alloc_split(*direction, ratio.clamp(MIN_RATIO, MAX_RATIO), a, b)
        }
    }
}
