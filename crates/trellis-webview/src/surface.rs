//! The rendering-engine seam: one [`Surface`] per web view, created by a
//! [`SurfaceFactory`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trellis_common::{PaneId, Rect, TrellisError};

use crate::events::SurfaceEvent;
use crate::ipc::OutboundMessage;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("rendering backend error: {0}")]
    Backend(String),

    #[error("surface for {0} is gone")]
    Closed(PaneId),
}

impl From<SurfaceError> for TrellisError {
    fn from(e: SurfaceError) -> Self {
        TrellisError::Surface(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Which of a pane's two stacked surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceRole {
    /// Shows the page.
    Content,
    /// Address entry, hints and workspace switcher.
    Overlay,
}

impl SurfaceRole {
    pub fn other(self) -> Self {
        match self {
            SurfaceRole::Content => SurfaceRole::Overlay,
            SurfaceRole::Overlay => SurfaceRole::Content,
        }
    }
}

/// How to create a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub url: String,
    pub bounds: Rect,
    pub visible: bool,
    /// Overlays are drawn over the page.
    pub transparent: bool,
}

impl SurfaceConfig {
    pub fn with_url(url: impl Into<String>, bounds: Rect) -> Self {
        Self {
            url: url.into(),
            bounds,
            visible: true,
            transparent: false,
        }
    }
}

/// One embedded web view.
pub trait Surface {
    fn load_url(&mut self, url: &str) -> Result<()>;
    /// Render `html` while reporting `base_url` as the current location.
    fn load_html(&mut self, html: &str, base_url: &str) -> Result<()>;
    fn reload(&mut self) -> Result<()>;
    /// Reload bypassing caches.
    fn reload_hard(&mut self) -> Result<()>;
    fn go_back(&mut self) -> Result<()>;
    fn go_forward(&mut self) -> Result<()>;
    fn current_url(&self) -> String;
    fn set_bounds(&mut self, bounds: Rect) -> Result<()>;
    fn set_visible(&mut self, visible: bool) -> Result<()>;
    fn focus(&mut self) -> Result<()>;
    /// Deliver a message to the page's IPC bridge.
    fn send(&mut self, message: &OutboundMessage) -> Result<()>;
    fn evaluate(&mut self, script: &str) -> Result<()>;
    /// Ask the page for its metadata; answered by `MetadataReady`.
    fn request_metadata(&mut self) -> Result<()>;
    /// Ask for a snapshot; answered by `PreviewReady` when supported.
    fn request_preview(&mut self) -> Result<()>;
    fn is_audible(&self) -> bool;
    fn is_muted(&self) -> bool;
}

/// Creates surfaces and collects the events they report.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(
        &mut self,
        pane: PaneId,
        role: SurfaceRole,
        config: &SurfaceConfig,
    ) -> Result<Self::Surface>;

    /// Take every event reported since the last call.
    fn drain_events(&mut self) -> Vec<SurfaceEvent>;
}
