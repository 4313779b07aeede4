//! Live pane controllers, keyed by pane id.

use std::collections::HashMap;

use tracing::{debug, warn};
use trellis_common::{PaneId, Rect};
use trellis_tiling::host::Result;
use trellis_tiling::{Leaf, PaneHost};
use trellis_webview::{overlay_url, PaneController, SurfaceEvent, SurfaceFactory};

/// Owns every pane's surfaces. The workspace manager drives it through
/// [`PaneHost`]; the session reaches controllers by id.
pub struct PaneRegistry<F: SurfaceFactory> {
    factory: F,
    panes: HashMap<PaneId, PaneController<F::Surface>>,
    /// Bounds given to new surfaces until the next layout pass.
    spawn_bounds: Rect,
}

impl<F: SurfaceFactory> PaneRegistry<F> {
    pub fn new(factory: F, spawn_bounds: Rect) -> Self {
        Self {
            factory,
            panes: HashMap::new(),
            spawn_bounds,
        }
    }

    pub fn get(&self, pane: PaneId) -> Option<&PaneController<F::Surface>> {
        self.panes.get(&pane)
    }

    pub fn get_mut(&mut self, pane: PaneId) -> Option<&mut PaneController<F::Surface>> {
        self.panes.get_mut(&pane)
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.panes.contains_key(&pane)
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Live pane ids, ascending.
    pub fn ids(&self) -> Vec<PaneId> {
        let mut ids: Vec<PaneId> = self.panes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub(super) fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        self.factory.drain_events()
    }

    pub(super) fn set_spawn_bounds(&mut self, bounds: Rect) {
        self.spawn_bounds = bounds;
    }
}

impl<F: SurfaceFactory> PaneHost for PaneRegistry<F> {
    fn spawn(&mut self, leaf: &Leaf, visible: bool) -> Result<()> {
        if self.panes.contains_key(&leaf.id) {
            debug!(pane = %leaf.id, "pane already has surfaces");
            return Ok(());
        }
        let pane = PaneController::create(
            &mut self.factory,
            leaf.id,
            &leaf.url,
            &overlay_url(leaf.id),
            self.spawn_bounds,
            visible,
        )?;
        self.panes.insert(leaf.id, pane);
        debug!(pane = %leaf.id, visible, "spawned pane");
        Ok(())
    }

    fn attach(&mut self, pane: PaneId) {
        if let Some(ctrl) = self.panes.get_mut(&pane) {
            if let Err(e) = ctrl.attach() {
                warn!(%pane, error = %e, "failed to attach pane");
            }
        }
    }

    fn detach(&mut self, pane: PaneId) {
        if let Some(ctrl) = self.panes.get_mut(&pane) {
            if let Err(e) = ctrl.detach() {
                warn!(%pane, error = %e, "failed to detach pane");
            }
        }
    }

    fn destroy(&mut self, pane: PaneId) {
        let Some(mut ctrl) = self.panes.remove(&pane) else {
            return;
        };
        if let Err(e) = ctrl.close() {
            warn!(%pane, error = %e, "failed to close pane");
        }
        debug!(%pane, "destroyed pane");
    }

    fn request_preview(&mut self, pane: PaneId) {
        let Some(ctrl) = self.panes.get_mut(&pane) else {
            return;
        };
        // The overlay would end up in the snapshot.
        if ctrl.overlay_open() {
            debug!(%pane, "skipping preview while overlay is open");
            return;
        }
        if let Err(e) = ctrl.request_preview() {
            debug!(%pane, error = %e, "preview unavailable");
        }
    }

    fn is_audible(&self, pane: PaneId) -> bool {
        self.panes.get(&pane).is_some_and(|c| c.is_audible())
    }

    fn is_muted(&self, pane: PaneId) -> bool {
        self.panes.get(&pane).is_some_and(|c| c.is_muted())
    }
}
