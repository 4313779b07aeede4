//! TrellisApp struct definition and constructor.

use std::sync::Arc;

use winit::keyboard::ModifiersState;
use winit::window::Window;

use trellis_config::TrellisConfig;
use trellis_platform::KeybindRegistry;
use trellis_webview::WryFactory;

use super::session::{Session, SessionStore};

/// Inputs held until the window exists and the session can start.
pub(super) struct Pending {
    pub(super) registry: KeybindRegistry,
    pub(super) store: Option<SessionStore>,
    pub(super) restore: bool,
    pub(super) url: Option<String>,
}

/// Top-level application state.
pub struct TrellisApp {
    pub(super) config: TrellisConfig,
    pub(super) pending: Option<Pending>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) session: Option<Session<WryFactory<Window>>>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: ModifiersState,

    pub(super) last_title: String,
}

impl TrellisApp {
    pub fn new(
        config: TrellisConfig,
        registry: KeybindRegistry,
        store: Option<SessionStore>,
        restore: bool,
        url: Option<String>,
    ) -> Self {
        Self {
            config,
            pending: Some(Pending {
                registry,
                store,
                restore,
                url,
            }),
            window: None,
            session: None,
            modifiers: ModifiersState::empty(),
            last_title: String::new(),
        }
    }
}
