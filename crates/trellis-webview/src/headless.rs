//! In-memory rendering backend that records every call.

use trellis_common::{PaneId, Rect};

use crate::events::{SurfaceEvent, SurfaceEventKind};
use crate::ipc::OutboundMessage;
use crate::surface::{Result, Surface, SurfaceConfig, SurfaceError, SurfaceFactory, SurfaceRole};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    LoadUrl(String),
    LoadHtml { base_url: String },
    Reload,
    ReloadHard,
    GoBack,
    GoForward,
    SetBounds(Rect),
    SetVisible(bool),
    Focus,
    Send(OutboundMessage),
    Evaluate(String),
    RequestMetadata,
    RequestPreview,
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    pane: PaneId,
    role: SurfaceRole,
    calls: Vec<SurfaceCall>,
    current_url: String,
    bounds: Rect,
    visible: bool,
    focused: bool,
    audible: bool,
    muted: bool,
}

impl HeadlessSurface {
    pub fn new(pane: PaneId, role: SurfaceRole, config: &SurfaceConfig) -> Self {
        Self {
            pane,
            role,
            calls: Vec::new(),
            current_url: config.url.clone(),
            bounds: config.bounds,
            visible: config.visible,
            focused: false,
            audible: false,
            muted: false,
        }
    }

    pub fn pane(&self) -> PaneId {
        self.pane
    }

    pub fn role(&self) -> SurfaceRole {
        self.role
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Messages delivered through [`Surface::send`], oldest first.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Send(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_audio(&mut self, audible: bool, muted: bool) {
        self.audible = audible;
        self.muted = muted;
    }

    /// Pretend the page navigated on its own.
    pub fn set_current_url(&mut self, url: impl Into<String>) {
        self.current_url = url.into();
    }
}

impl Surface for HeadlessSurface {
    fn load_url(&mut self, url: &str) -> Result<()> {
        self.current_url = url.to_string();
        self.calls.push(SurfaceCall::LoadUrl(url.to_string()));
        Ok(())
    }

    fn load_html(&mut self, _html: &str, base_url: &str) -> Result<()> {
        self.current_url = base_url.to_string();
        self.calls.push(SurfaceCall::LoadHtml {
            base_url: base_url.to_string(),
        });
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::Reload);
        Ok(())
    }

    fn reload_hard(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::ReloadHard);
        Ok(())
    }

    fn go_back(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::GoBack);
        Ok(())
    }

    fn go_forward(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::GoForward);
        Ok(())
    }

    fn current_url(&self) -> String {
        self.current_url.clone()
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<()> {
        self.bounds = bounds;
        self.calls.push(SurfaceCall::SetBounds(bounds));
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.visible = visible;
        self.calls.push(SurfaceCall::SetVisible(visible));
        Ok(())
    }

    fn focus(&mut self) -> Result<()> {
        self.focused = true;
        self.calls.push(SurfaceCall::Focus);
        Ok(())
    }

    fn send(&mut self, message: &OutboundMessage) -> Result<()> {
        self.calls.push(SurfaceCall::Send(message.clone()));
        Ok(())
    }

    fn evaluate(&mut self, script: &str) -> Result<()> {
        self.calls.push(SurfaceCall::Evaluate(script.to_string()));
        Ok(())
    }

    fn request_metadata(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::RequestMetadata);
        Ok(())
    }

    fn request_preview(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::RequestPreview);
        Ok(())
    }

    fn is_audible(&self) -> bool {
        self.audible
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Creates [`HeadlessSurface`]s. Events are queued by tests with
/// [`HeadlessFactory::push_event`].
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    events: Vec<SurfaceEvent>,
    created: Vec<(PaneId, SurfaceRole)>,
    fail: bool,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `create` fail.
    pub fn set_failing(&mut self, fail: bool) {
        self.fail = fail;
    }

    pub fn created(&self) -> &[(PaneId, SurfaceRole)] {
        &self.created
    }

    pub fn push_event(&mut self, pane: PaneId, role: SurfaceRole, kind: SurfaceEventKind) {
        self.events.push(SurfaceEvent::new(pane, role, kind));
    }
}

impl SurfaceFactory for HeadlessFactory {
    type Surface = HeadlessSurface;

    fn create(
        &mut self,
        pane: PaneId,
        role: SurfaceRole,
        config: &SurfaceConfig,
    ) -> Result<HeadlessSurface> {
        if self.fail {
            return Err(SurfaceError::Backend("headless factory set to fail".into()));
        }
        self.created.push((pane, role));
        Ok(HeadlessSurface::new(pane, role, config))
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_and_state() {
        let config = SurfaceConfig::with_url("https://a.test/", Rect::sized(10.0, 10.0));
        let mut s = HeadlessSurface::new(PaneId(3), SurfaceRole::Content, &config);
        s.load_url("https://b.test/").unwrap();
        s.set_visible(false).unwrap();
        assert_eq!(s.current_url(), "https://b.test/");
        assert!(!s.is_visible());
        assert_eq!(
            s.calls(),
            &[
                SurfaceCall::LoadUrl("https://b.test/".into()),
                SurfaceCall::SetVisible(false)
            ]
        );
    }

    #[test]
    fn factory_drains_events_once() {
        let mut f = HeadlessFactory::new();
        f.push_event(PaneId(1), SurfaceRole::Content, SurfaceEventKind::DomReady);
        assert_eq!(f.drain_events().len(), 1);
        assert!(f.drain_events().is_empty());
    }

    #[test]
    fn failing_factory() {
        let mut f = HeadlessFactory::new();
        f.set_failing(true);
        let config = SurfaceConfig::with_url("about:blank", Rect::default());
        assert!(f.create(PaneId(1), SurfaceRole::Content, &config).is_err());
        assert!(f.created().is_empty());
    }
}
