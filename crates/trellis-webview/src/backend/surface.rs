use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::WebView;
use trellis_common::{PaneId, Rect};

use crate::ipc::OutboundMessage;
use crate::surface::{Result, Surface, SurfaceError, SurfaceRole};

/// Page state updated from the webview's handlers.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) current_url: String,
    /// The page shows generated HTML standing in for `current_url`.
    pub(crate) synthetic: bool,
}

impl Shared {
    pub(crate) fn new(url: &str) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self {
            current_url: url.to_string(),
            synthetic: false,
        }))
    }
}

pub fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(LogicalSize::new(rect.width, rect.height)),
    }
}

fn backend(e: wry::Error) -> SurfaceError {
    SurfaceError::Backend(e.to_string())
}

pub struct WrySurface {
    webview: WebView,
    pane: PaneId,
    role: SurfaceRole,
    shared: Arc<Mutex<Shared>>,
}

impl WrySurface {
    pub(crate) fn new(
        webview: WebView,
        pane: PaneId,
        role: SurfaceRole,
        shared: Arc<Mutex<Shared>>,
    ) -> Self {
        Self {
            webview,
            pane,
            role,
            shared,
        }
    }

    pub fn inner(&self) -> &WebView {
        &self.webview
    }

    fn update(&self, f: impl FnOnce(&mut Shared)) {
        if let Ok(mut shared) = self.shared.lock() {
            f(&mut shared);
        }
    }

    fn is_synthetic(&self) -> bool {
        self.shared.lock().map(|s| s.synthetic).unwrap_or(false)
    }
}

impl Surface for WrySurface {
    fn load_url(&mut self, url: &str) -> Result<()> {
        self.update(|s| {
            s.current_url = url.to_string();
            s.synthetic = false;
        });
        self.webview.load_url(url).map_err(backend)
    }

    fn load_html(&mut self, html: &str, base_url: &str) -> Result<()> {
        self.update(|s| {
            s.current_url = base_url.to_string();
            s.synthetic = true;
        });
        self.webview.load_html(html).map_err(backend)
    }

    fn reload(&mut self) -> Result<()> {
        if self.is_synthetic() {
            let url = self.current_url();
            return self.load_url(&url);
        }
        self.evaluate("location.reload();")
    }

    fn reload_hard(&mut self) -> Result<()> {
        // wry has no cache-bypassing reload; reissue the navigation instead.
        let url = self.current_url();
        self.load_url(&url)
    }

    fn go_back(&mut self) -> Result<()> {
        self.evaluate("history.back();")
    }

    fn go_forward(&mut self) -> Result<()> {
        self.evaluate("history.forward();")
    }

    fn current_url(&self) -> String {
        self.shared
            .lock()
            .map(|s| s.current_url.clone())
            .unwrap_or_default()
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<()> {
        self.webview.set_bounds(to_wry_rect(bounds)).map_err(backend)
    }

    fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.webview.set_visible(visible).map_err(backend)
    }

    fn focus(&mut self) -> Result<()> {
        self.webview.focus().map_err(backend)
    }

    fn send(&mut self, message: &OutboundMessage) -> Result<()> {
        self.evaluate(&message.to_script())
    }

    fn evaluate(&mut self, script: &str) -> Result<()> {
        self.webview.evaluate_script(script).map_err(backend)
    }

    fn request_metadata(&mut self) -> Result<()> {
        self.evaluate("window.trellis && window.trellis.extractMetadata();")
    }

    fn request_preview(&mut self) -> Result<()> {
        debug!(pane = %self.pane, role = ?self.role, "snapshots are not supported by this backend");
        Ok(())
    }

    fn is_audible(&self) -> bool {
        false
    }

    fn is_muted(&self) -> bool {
        false
    }
}
