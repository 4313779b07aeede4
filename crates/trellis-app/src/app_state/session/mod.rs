//! The window's session controller.
//!
//! Owns the pane surfaces (through [`PaneRegistry`]), the per-pane transient
//! state and every timer. Keys, overlay commands and surface events all land
//! here and are applied to the workspace catalogue; each mutation is followed
//! by a synchronous broadcast of the new state.

mod broadcast;
mod commands;
mod dispatch;
mod hints;
mod panes;
mod persistence;
mod registry;
mod search;
mod surface_events;
mod workspaces;


pub use persistence::{SessionDocument, SessionStore};
pub use registry::PaneRegistry;

use std::collections::HashMap;
use std::time::Instant;

use tracing::info;
use trellis_common::{BiscuitState, Event, EventBus, PaneId, Rect, Scheduler, SearchState};
use trellis_config::TrellisConfig;
use trellis_platform::{HintSession, KeybindRegistry};
use trellis_tiling::{LayoutEngine, WorkspaceLimits, WorkspaceManager};
use trellis_webview::{normalize_input, SurfaceFactory};

/// Deferred work, run from [`Session::poll`] once its quiet period ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Persist,
    /// Interpret a pane's settled search text.
    SearchSettled(PaneId),
}

/// State that lives exactly as long as a pane's surfaces.
#[derive(Debug, Clone, Default)]
pub struct PaneTransient {
    pub search: SearchState,
    pub biscuit: BiscuitState,
    pub hints: Option<HintSession>,
    /// The focused page element accepts text.
    pub typing: bool,
}

impl PaneTransient {
    fn new(pane: PaneId, url: &str) -> Self {
        Self {
            search: SearchState {
                pane_id: pane,
                query: url.to_string(),
                is_focused: false,
            },
            biscuit: BiscuitState {
                pane_id: pane,
                active: false,
                typed: String::new(),
            },
            hints: None,
            typing: false,
        }
    }
}

/// Initial state for [`Session::start`].
#[derive(Debug, Default)]
pub struct Startup {
    /// Restored document; `None` starts with one pane.
    pub saved: Option<SessionDocument>,
    /// Page or search text opened in the active pane after restore.
    pub url: Option<String>,
}

pub struct Session<F: SurfaceFactory> {
    config: TrellisConfig,
    keybinds: KeybindRegistry,
    engine: LayoutEngine,
    workspaces: WorkspaceManager,
    panes: PaneRegistry<F>,
    transient: HashMap<PaneId, PaneTransient>,
    scheduler: Scheduler<Job>,
    /// Target of directional actions. Written only by `set_active`.
    last_active: Option<PaneId>,
    bus: EventBus,
    viewport: Rect,
    window_bounds: Option<Rect>,
    store: Option<SessionStore>,
    should_exit: bool,
}

impl<F: SurfaceFactory> Session<F> {
    pub fn start(
        config: TrellisConfig,
        keybinds: KeybindRegistry,
        factory: F,
        viewport: Rect,
        store: Option<SessionStore>,
        startup: Startup,
    ) -> Self {
        let limits = WorkspaceLimits {
            max_workspaces: config.session.max_workspaces,
            max_live: config.session.max_live_workspaces,
        };
        let home = config.browser.home_url.clone();
        let mut panes = PaneRegistry::new(factory, viewport);

        let (workspaces, saved_active, window_bounds) = match startup.saved {
            Some(doc) => {
                let last = doc.last_active_pane_id;
                let bounds = doc.window_bounds;
                let state = doc.into_workspace_state();
                let mgr = WorkspaceManager::from_state(state, limits, home, &mut panes);
                (mgr, last, bounds)
            }
            None => (WorkspaceManager::new(limits, home, &mut panes), None, None),
        };

        let mut session = Self {
            engine: LayoutEngine::new(config.layout.gutter),
            config,
            keybinds,
            workspaces,
            panes,
            transient: HashMap::new(),
            scheduler: Scheduler::new(),
            last_active: None,
            bus: EventBus::default(),
            viewport,
            window_bounds,
            store,
            should_exit: false,
        };

        session.sync_transients();
        session.relayout();
        let initial = saved_active
            .filter(|p| session.in_active_tree(*p))
            .or_else(|| session.workspaces.active_pane());
        if let Some(pane) = initial {
            session.set_active(pane);
        }
        if let Some(text) = startup.url {
            session.open_input(&text);
        }
        session.broadcast_all();

        info!(
            workspaces = session.workspaces.len(),
            panes = session.panes.len(),
            active = ?session.last_active,
            "session started"
        );
        session
    }

    /// Open typed text (URL or search) in the active pane.
    pub fn open_input(&mut self, text: &str) -> bool {
        let Some(pane) = self.last_active else {
            return false;
        };
        match normalize_input(text, &self.config.browser.search_url) {
            Some(url) => self.navigate(pane, &url),
            None => false,
        }
    }

    /// Drain surface events, then run every timer that is due at `now`.
    pub fn poll(&mut self, now: Instant) {
        self.process_surface_events();
        for (_, job) in self.scheduler.take_due(now) {
            match job {
                Job::Persist => self.persist_now(),
                Job::SearchSettled(pane) => self.settle_search(pane),
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Flush the session and ask the window to close.
    pub fn shutdown(&mut self) {
        if self.should_exit {
            return;
        }
        self.flush();
        self.bus.publish(Event::Shutdown);
        self.should_exit = true;
        info!("session shut down");
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    // -- Accessors --

    pub fn config(&self) -> &TrellisConfig {
        &self.config
    }

    pub fn keybinds(&self) -> &KeybindRegistry {
        &self.keybinds
    }

    pub fn workspaces(&self) -> &WorkspaceManager {
        &self.workspaces
    }

    pub fn panes(&self) -> &PaneRegistry<F> {
        &self.panes
    }

    pub fn factory_mut(&mut self) -> &mut F {
        self.panes.factory_mut()
    }

    pub fn last_active(&self) -> Option<PaneId> {
        self.last_active
    }

    pub fn transient(&self, pane: PaneId) -> Option<&PaneTransient> {
        self.transient.get(&pane)
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Title of the active pane's page, falling back to its URL.
    pub fn active_title(&self) -> Option<String> {
        let leaf = self.workspaces.leaf(self.last_active?)?;
        Some(leaf.title.clone().unwrap_or_else(|| leaf.url.clone()))
    }
}
