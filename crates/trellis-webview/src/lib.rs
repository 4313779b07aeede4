//! Pane surfaces for Trellis.
//!
//! - [`Surface`] / [`SurfaceFactory`]: the rendering-engine seam
//! - [`PaneController`]: a pane's content and overlay surfaces
//! - IPC between Rust and hosted pages (`{kind, payload}` JSON)
//! - Backends: `wry` child webviews and an in-memory recorder for tests
//! - The `trellis://` protocol serving the overlay page

pub mod backend;
pub mod content;
pub mod error_page;
pub mod events;
pub mod headless;
pub mod ipc;
pub mod metadata;
pub mod pane;
pub mod surface;
pub mod url;

pub use backend::{WryFactory, WryOptions, WrySurface};
pub use content::{overlay_url, ContentProvider, OVERLAY_URL};
pub use events::{PageLoadState, SurfaceEvent, SurfaceEventKind};
pub use headless::{HeadlessFactory, HeadlessSurface, SurfaceCall};
pub use ipc::{reserved_token, IpcMessage, OutboundMessage, OverlayCommand};
pub use metadata::PageMetadata;
pub use pane::PaneController;
pub use surface::{Surface, SurfaceConfig, SurfaceError, SurfaceFactory, SurfaceRole};
pub use url::{looks_like_url, normalize_input};
