//! `wry` rendering backend: every surface is a child webview of one window.

use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;
use trellis_common::PaneId;

use crate::content::ContentProvider;
use crate::events::SurfaceEvent;
use crate::ipc::IPC_INIT_SCRIPT;
use crate::surface::{Result, SurfaceConfig, SurfaceError, SurfaceFactory, SurfaceRole};

mod handlers;
mod protocol;
mod surface;

pub use handlers::{is_navigation_allowed, ALLOWED_NAV_PREFIXES, BLOCKED};
pub use surface::{to_wry_rect, WrySurface};

/// Settings shared by every webview the factory builds.
#[derive(Debug, Clone)]
pub struct WryOptions {
    pub user_agent: Option<String>,
    /// Always on in debug builds.
    pub devtools: bool,
    /// Extra scripts run after the IPC bridge on every page.
    pub init_scripts: Vec<String>,
}

impl Default for WryOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            init_scripts: Vec::new(),
        }
    }
}

/// Builds [`WrySurface`]s inside `window` and collects their events.
pub struct WryFactory<W: HasWindowHandle> {
    window: Arc<W>,
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
    content: Arc<ContentProvider>,
    options: WryOptions,
}

impl<W: HasWindowHandle> WryFactory<W> {
    pub fn new(window: Arc<W>, content: ContentProvider, options: WryOptions) -> Self {
        Self {
            window,
            events: Arc::new(Mutex::new(Vec::new())),
            content: Arc::new(content),
            options,
        }
    }
}

impl<W: HasWindowHandle> SurfaceFactory for WryFactory<W> {
    type Surface = WrySurface;

    fn create(
        &mut self,
        pane: PaneId,
        role: SurfaceRole,
        config: &SurfaceConfig,
    ) -> Result<WrySurface> {
        let shared = surface::Shared::new(&config.url);

        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(config.bounds))
            .with_visible(config.visible)
            .with_transparent(config.transparent)
            .with_devtools(self.options.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT);
        for script in &self.options.init_scripts {
            builder = builder.with_initialization_script(script);
        }
        if let Some(ua) = &self.options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_ipc_handler(builder, Arc::clone(&self.events), pane, role);
        builder = handlers::attach_page_load_handler(
            builder,
            Arc::clone(&self.events),
            Arc::clone(&shared),
            pane,
            role,
        );
        builder = handlers::attach_title_handler(builder, Arc::clone(&self.events), pane, role);
        builder =
            handlers::attach_navigation_handler(builder, Arc::clone(&self.events), pane, role);
        builder = protocol::attach_custom_protocol(builder, Arc::clone(&self.content));

        let webview = builder
            .with_url(&config.url)
            .build_as_child(self.window.as_ref())
            .map_err(|e| SurfaceError::Backend(e.to_string()))?;

        debug!(%pane, ?role, url = %config.url, "webview created");
        Ok(WrySurface::new(webview, pane, role, shared))
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
