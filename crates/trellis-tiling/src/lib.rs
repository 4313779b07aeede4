//! Pane geometry and workspace bookkeeping: split trees, layout, neighbor
//! search, serialization and the workspace catalogue.

pub mod host;
pub mod layout;
pub mod neighbor;
pub mod serialize;
pub mod tree;
pub mod workspace;

pub use host::PaneHost;
pub use layout::LayoutEngine;
pub use neighbor::neighbor;
pub use serialize::{from_serialized, to_serialized, SerializedNode};
pub use tree::{Leaf, NodeId, Side, SplitDirection, SplitTree, SurfaceLayer, TreeError};
pub use workspace::{
    PaneClosed, RemovedWorkspace, SerializedWorkspace, Workspace, WorkspaceError,
    WorkspaceLimits, WorkspaceManager, WorkspaceState, WorkspaceTree,
};
