//! Window creation and session startup.

use std::sync::Arc;

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use trellis_common::Rect;
use trellis_webview::{reserved_token, ContentProvider, OutboundMessage, WryFactory, WryOptions};

use super::core::TrellisApp;
use super::session::{Session, SessionDocument, Startup};

impl TrellisApp {
    /// Create the window and start the session inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let saved: Option<SessionDocument> = if pending.restore {
            pending.store.as_ref().and_then(|store| store.load())
        } else {
            None
        };

        let mut attrs = WindowAttributes::default().with_title(self.config.window.title.clone());
        attrs = match saved.as_ref().and_then(|doc| doc.window_bounds) {
            Some(bounds) if bounds.width > 0.0 && bounds.height > 0.0 => attrs
                .with_position(LogicalPosition::new(bounds.x, bounds.y))
                .with_inner_size(LogicalSize::new(bounds.width, bounds.height)),
            _ => attrs.with_inner_size(LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            )),
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        // Pages stop these chords before the document sees them.
        let reserved = pending
            .registry
            .reserved_combos()
            .iter()
            .map(|c| reserved_token(c.mods, &c.key))
            .collect();
        let options = WryOptions {
            user_agent: self.config.browser.user_agent.clone(),
            devtools: self.config.browser.devtools || cfg!(debug_assertions),
            init_scripts: vec![OutboundMessage::Keymap { reserved }.to_script()],
        };
        let factory = WryFactory::new(Arc::clone(&window), ContentProvider::builtin(), options);

        let viewport = viewport_of(&window);
        let mut session = Session::start(
            self.config.clone(),
            pending.registry,
            factory,
            viewport,
            pending.store,
            Startup {
                saved,
                url: pending.url,
            },
        );
        session.set_window_bounds(window_bounds_of(&window));

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            "Window ready"
        );
        self.window = Some(window);
        self.session = Some(session);
        true
    }
}

/// Logical size of the window's content area.
pub(super) fn viewport_of(window: &Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect::sized(size.width, size.height)
}

/// Logical position and content size, for restoring the window next launch.
/// `None` where the platform cannot report a position.
pub(super) fn window_bounds_of(window: &Window) -> Option<Rect> {
    let scale = window.scale_factor();
    let position = window.outer_position().ok()?.to_logical::<f64>(scale);
    let size = window.inner_size().to_logical::<f64>(scale);
    Some(Rect::new(position.x, position.y, size.width, size.height))
}
