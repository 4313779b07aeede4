//! Events reported by surfaces.

use trellis_common::PaneId;

use crate::ipc::IpcMessage;
use crate::metadata::PageMetadata;
use crate::surface::SurfaceRole;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// The document finished loading.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEventKind {
    /// The surface committed a navigation to `url`.
    Navigated { url: String },
    TitleChanged { title: String },
    DomReady,
    LoadFailed {
        code: i32,
        description: String,
        url: String,
    },
    /// Metadata extracted from the document at `url`.
    MetadataReady { url: String, metadata: PageMetadata },
    /// Snapshot as a data URL.
    PreviewReady { data_url: String },
    /// The page found `count` hintable elements.
    HintTargets { count: usize },
    /// Any other IPC message, as raw JSON.
    Ipc(String),
}

impl SurfaceEventKind {
    /// Classify a raw IPC body. Messages the backend understands become
    /// typed events; everything else is passed on untouched.
    pub fn from_ipc(body: String) -> Self {
        let Some(message) = IpcMessage::from_json(&body) else {
            return SurfaceEventKind::Ipc(body);
        };
        match message.kind.as_str() {
            "metadata" => {
                let url = message
                    .payload
                    .get("url")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                SurfaceEventKind::MetadataReady {
                    url,
                    metadata: PageMetadata::from_json(&message.payload),
                }
            }
            "hint_targets" => SurfaceEventKind::HintTargets {
                count: message
                    .payload
                    .get("count")
                    .and_then(|v| v.as_u64())
                    .map(|n| n as usize)
                    .unwrap_or(0),
            },
            _ => SurfaceEventKind::Ipc(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceEvent {
    pub pane: PaneId,
    pub role: SurfaceRole,
    pub kind: SurfaceEventKind,
}

impl SurfaceEvent {
    pub fn new(pane: PaneId, role: SurfaceRole, kind: SurfaceEventKind) -> Self {
        Self { pane, role, kind }
    }
}
