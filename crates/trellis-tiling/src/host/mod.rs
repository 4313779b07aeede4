//! The seam between workspace bookkeeping and live pane surfaces.
//!
//! The workspace manager decides which panes exist and which are shown; a
//! [`PaneHost`] owns the surfaces and carries those decisions out.

use trellis_common::{PaneId, TrellisError};

use crate::tree::Leaf;

pub mod recording;

pub type Result<T> = std::result::Result<T, TrellisError>;

pub trait PaneHost {
    /// Create surfaces for `leaf`, shown or hidden.
    fn spawn(&mut self, leaf: &Leaf, visible: bool) -> Result<()>;
    /// Show an existing pane's surfaces.
    fn attach(&mut self, pane: PaneId);
    /// Hide an existing pane's surfaces without destroying them.
    fn detach(&mut self, pane: PaneId);
    /// Tear down a pane's surfaces.
    fn destroy(&mut self, pane: PaneId);
    /// Best effort snapshot used as a workspace preview.
    fn request_preview(&mut self, pane: PaneId);
    fn is_audible(&self, pane: PaneId) -> bool;
    fn is_muted(&self, pane: PaneId) -> bool;
}
