//! A pane's two stacked surfaces and the operations on them.

use tracing::debug;
use trellis_common::{PaneId, Rect};

use crate::error_page;
use crate::ipc::OutboundMessage;
use crate::surface::{Result, Surface, SurfaceConfig, SurfaceFactory, SurfaceRole};

/// Owns the content and overlay surfaces of one pane. Both share the pane's
/// rect; `top` is the one drawn above and holding keyboard focus.
pub struct PaneController<S: Surface> {
    id: PaneId,
    content: S,
    overlay: S,
    url: String,
    top: SurfaceRole,
    bounds: Rect,
    attached: bool,
}

impl<S: Surface> PaneController<S> {
    pub fn new(id: PaneId, url: impl Into<String>, content: S, overlay: S, bounds: Rect) -> Self {
        Self {
            id,
            content,
            overlay,
            url: url.into(),
            top: SurfaceRole::Content,
            bounds,
            attached: true,
        }
    }

    /// Create both surfaces through `factory`. The overlay starts hidden.
    pub fn create<F>(
        factory: &mut F,
        id: PaneId,
        url: &str,
        overlay_url: &str,
        bounds: Rect,
        visible: bool,
    ) -> Result<Self>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let content = factory.create(
            id,
            SurfaceRole::Content,
            &SurfaceConfig {
                url: url.to_string(),
                bounds,
                visible,
                transparent: false,
            },
        )?;
        let overlay = factory.create(
            id,
            SurfaceRole::Overlay,
            &SurfaceConfig {
                url: overlay_url.to_string(),
                bounds,
                visible: false,
                transparent: true,
            },
        )?;
        let mut pane = Self::new(id, url, content, overlay, bounds);
        pane.attached = visible;
        Ok(pane)
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    /// The URL this pane is meant to show.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn top(&self) -> SurfaceRole {
        self.top
    }

    pub fn overlay_open(&self) -> bool {
        self.top == SurfaceRole::Overlay
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn content(&self) -> &S {
        &self.content
    }

    pub fn overlay(&self) -> &S {
        &self.overlay
    }

    fn surface_mut(&mut self, role: SurfaceRole) -> &mut S {
        match role {
            SurfaceRole::Content => &mut self.content,
            SurfaceRole::Overlay => &mut self.overlay,
        }
    }

    /// Swap which surface is on top and focused. The surface that gains
    /// focus learns whether the content still shows the tracked URL.
    /// Returns the new top surface.
    pub fn reverse(&mut self) -> Result<SurfaceRole> {
        let gained = self.top.other();
        if self.attached {
            self.overlay.set_visible(gained == SurfaceRole::Overlay)?;
        }
        self.top = gained;

        let url_in_sync = self.url == self.content.current_url();
        let surface = self.surface_mut(gained);
        surface.focus()?;
        surface.send(&OutboundMessage::Focus { url_in_sync })?;
        debug!(pane = %self.id, top = ?gained, url_in_sync, "reversed pane layers");
        Ok(gained)
    }

    /// Track `url` and load it in the content surface.
    pub fn navigate(&mut self, url: impl Into<String>) -> Result<()> {
        self.url = url.into();
        self.content.load_url(&self.url)
    }

    /// Track a navigation the page made on its own.
    pub fn record_navigation(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Take both surfaces off screen. Nothing is navigated; dropping the
    /// controller afterwards releases them.
    pub fn close(&mut self) -> Result<()> {
        self.detach()
    }

    pub fn attach(&mut self) -> Result<()> {
        self.content.set_visible(true)?;
        self.overlay.set_visible(self.overlay_open())?;
        self.attached = true;
        Ok(())
    }

    pub fn detach(&mut self) -> Result<()> {
        self.content.set_visible(false)?;
        self.overlay.set_visible(false)?;
        self.attached = false;
        Ok(())
    }

    pub fn set_bounds(&mut self, bounds: Rect) -> Result<()> {
        if bounds == self.bounds {
            return Ok(());
        }
        self.content.set_bounds(bounds)?;
        self.overlay.set_bounds(bounds)?;
        self.bounds = bounds;
        Ok(())
    }

    /// Give keyboard focus to whichever surface is on top.
    pub fn focus(&mut self) -> Result<()> {
        let top = self.top;
        self.surface_mut(top).focus()
    }

    pub fn go_back(&mut self) -> Result<()> {
        self.content.go_back()
    }

    pub fn go_forward(&mut self) -> Result<()> {
        self.content.go_forward()
    }

    pub fn reload(&mut self) -> Result<()> {
        self.content.reload()
    }

    pub fn reload_hard(&mut self) -> Result<()> {
        self.content.reload_hard()
    }

    pub fn scroll_by(&mut self, dy: f64) -> Result<()> {
        self.content.send(&OutboundMessage::ScrollBy { dy })
    }

    // -- Link hints --

    /// Ask the page for its hintable elements; answered by `HintTargets`.
    /// Plain keys stop reaching the page until hints are cleared.
    pub fn request_hint_targets(&mut self) -> Result<()> {
        self.content.send(&OutboundMessage::CaptureKeys { active: true })?;
        self.content.send(&OutboundMessage::CollectHints)
    }

    pub fn show_hints(&mut self, labels: Vec<String>) -> Result<()> {
        self.content.send(&OutboundMessage::ShowHints { labels })
    }

    pub fn activate_hint(&mut self, index: usize) -> Result<()> {
        self.content.send(&OutboundMessage::CaptureKeys { active: false })?;
        self.content.send(&OutboundMessage::ActivateHint { index })
    }

    pub fn clear_hints(&mut self) -> Result<()> {
        self.content.send(&OutboundMessage::CaptureKeys { active: false })?;
        self.content.send(&OutboundMessage::ClearHints)
    }

    // -- Queries --

    pub fn request_metadata(&mut self) -> Result<()> {
        self.content.request_metadata()
    }

    pub fn request_preview(&mut self) -> Result<()> {
        self.content.request_preview()
    }

    pub fn is_audible(&self) -> bool {
        self.content.is_audible()
    }

    pub fn is_muted(&self) -> bool {
        self.content.is_muted()
    }

    /// Replace the page with a diagnostic for a failed load of `url`, keeping
    /// `url` as the reported location so reload retries it.
    pub fn show_load_error(&mut self, code: i32, description: &str, url: &str) -> Result<()> {
        let html = error_page::render(code, description, url);
        self.content.load_html(&html, url)
    }

    pub fn send_overlay(&mut self, message: &OutboundMessage) -> Result<()> {
        self.overlay.send(message)
    }

    pub fn send_content(&mut self, message: &OutboundMessage) -> Result<()> {
        self.content.send(message)
    }

    /// Deliver `message` to both surfaces.
    pub fn send_all(&mut self, message: &OutboundMessage) -> Result<()> {
        self.content.send(message)?;
        self.overlay.send(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessFactory, HeadlessSurface, SurfaceCall};

    fn pane() -> PaneController<HeadlessSurface> {
        let mut factory = HeadlessFactory::new();
        PaneController::create(
            &mut factory,
            PaneId(1),
            "https://a.test/",
            "trellis://overlay/",
            Rect::sized(400.0, 300.0),
            true,
        )
        .unwrap()
    }

    #[test]
    fn create_hides_overlay() {
        let p = pane();
        assert!(p.content().is_visible());
        assert!(!p.overlay().is_visible());
        assert_eq!(p.top(), SurfaceRole::Content);
        assert_eq!(p.content().current_url(), "https://a.test/");
    }

    #[test]
    fn reverse_swaps_focus_and_reports_sync() {
        let mut p = pane();
        assert_eq!(p.reverse().unwrap(), SurfaceRole::Overlay);
        assert!(p.overlay_open());
        assert!(p.overlay().is_visible());
        assert!(p.overlay().is_focused());
        assert_eq!(
            p.overlay().sent().last(),
            Some(&OutboundMessage::Focus { url_in_sync: true })
        );

        assert_eq!(p.reverse().unwrap(), SurfaceRole::Content);
        assert!(!p.overlay().is_visible());
        assert!(p.content().is_focused());
    }

    #[test]
    fn reverse_reports_out_of_sync_after_redirect() {
        let mut p = pane();
        p.record_navigation("https://b.test/");
        p.reverse().unwrap();
        assert_eq!(
            p.overlay().sent().last(),
            Some(&OutboundMessage::Focus { url_in_sync: false })
        );
    }

    #[test]
    fn navigate_tracks_and_loads() {
        let mut p = pane();
        p.navigate("https://c.test/").unwrap();
        assert_eq!(p.url(), "https://c.test/");
        assert_eq!(
            p.content().calls().last(),
            Some(&SurfaceCall::LoadUrl("https://c.test/".into()))
        );
    }

    #[test]
    fn close_detaches_without_navigating() {
        let mut p = pane();
        p.reverse().unwrap();
        p.close().unwrap();
        assert!(!p.content().is_visible());
        assert!(!p.overlay().is_visible());
        assert!(!p
            .content()
            .calls()
            .iter()
            .any(|c| matches!(c, SurfaceCall::LoadUrl(_))));
    }

    #[test]
    fn attach_restores_overlay_state() {
        let mut p = pane();
        p.reverse().unwrap();
        p.detach().unwrap();
        p.attach().unwrap();
        assert!(p.content().is_visible());
        assert!(p.overlay().is_visible());
    }

    #[test]
    fn set_bounds_resizes_both() {
        let mut p = pane();
        let r = Rect::new(10.0, 0.0, 200.0, 300.0);
        p.set_bounds(r).unwrap();
        assert_eq!(p.content().bounds(), r);
        assert_eq!(p.overlay().bounds(), r);
        let before = p.content().calls().len();
        p.set_bounds(r).unwrap();
        assert_eq!(p.content().calls().len(), before);
    }

    #[test]
    fn load_error_keeps_url() {
        let mut p = pane();
        p.show_load_error(-105, "Name not resolved", "https://gone.test/")
            .unwrap();
        assert_eq!(p.content().current_url(), "https://gone.test/");
        assert!(matches!(
            p.content().calls().last(),
            Some(SurfaceCall::LoadHtml { base_url }) if base_url == "https://gone.test/"
        ));
    }

    #[test]
    fn hints_capture_keys_until_cleared() {
        let mut p = pane();
        p.request_hint_targets().unwrap();
        p.show_hints(vec!["a".into(), "s".into()]).unwrap();
        p.activate_hint(1).unwrap();
        let sent = p.content().sent();
        assert_eq!(sent[0], OutboundMessage::CaptureKeys { active: true });
        assert_eq!(sent[1], OutboundMessage::CollectHints);
        assert_eq!(sent[3], OutboundMessage::CaptureKeys { active: false });
        assert_eq!(sent[4], OutboundMessage::ActivateHint { index: 1 });
    }
}
