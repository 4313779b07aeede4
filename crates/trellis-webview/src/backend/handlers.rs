use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;
use trellis_common::PaneId;

use crate::events::{PageLoadState, SurfaceEvent, SurfaceEventKind};
use crate::surface::SurfaceRole;

use super::surface::Shared;

type Events = Arc<Mutex<Vec<SurfaceEvent>>>;

/// Error code reported for navigations refused by the allowlist.
pub const BLOCKED: i32 = -20;

/// URL prefixes surfaces may navigate to.
/// - `trellis://` serves the overlay; WebView2 rewrites it to `http://trellis.*`
/// - `about:` and `data:` back blank and generated pages
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["https://", "http://", "trellis://", "about:", "data:"];

pub fn is_navigation_allowed(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

fn push(events: &Events, event: SurfaceEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Events,
    pane: PaneId,
    role: SurfaceRole,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();
        if serde_json::from_str::<serde_json::Value>(&body).is_err() {
            warn!(%pane, body_len = body.len(), "IPC message rejected: invalid JSON");
            return;
        }
        push(
            &events,
            SurfaceEvent::new(pane, role, SurfaceEventKind::from_ipc(body)),
        );
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Events,
    shared: Arc<Mutex<Shared>>,
    pane: PaneId,
    role: SurfaceRole,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(%pane, ?role, ?state, url = %url, "page load");

        // Generated pages load as about:blank but stand in for another URL.
        let reported = match shared.lock() {
            Ok(s) if s.synthetic && url.starts_with("about:") => s.current_url.clone(),
            Ok(mut s) => {
                s.synthetic = false;
                s.current_url = url.clone();
                url
            }
            Err(_) => url,
        };

        let kind = match state {
            PageLoadState::Started => SurfaceEventKind::Navigated { url: reported },
            PageLoadState::Finished => SurfaceEventKind::DomReady,
        };
        push(&events, SurfaceEvent::new(pane, role, kind));
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Events,
    pane: PaneId,
    role: SurfaceRole,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(%pane, title = %title, "title changed");
        push(
            &events,
            SurfaceEvent::new(pane, role, SurfaceEventKind::TitleChanged { title }),
        );
    })
}

/// Refused navigations surface as `LoadFailed`; wry reports no other load
/// errors.
pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: Events,
    pane: PaneId,
    role: SurfaceRole,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        if is_navigation_allowed(&url) {
            return true;
        }
        warn!(%pane, url = %url, "navigation blocked: URL not in allowlist");
        push(
            &events,
            SurfaceEvent::new(
                pane,
                role,
                SurfaceEventKind::LoadFailed {
                    code: BLOCKED,
                    description: "Navigation to this address is not allowed".to_string(),
                    url,
                },
            ),
        );
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_web_and_internal_pages() {
        assert!(is_navigation_allowed("https://example.com/"));
        assert!(is_navigation_allowed("http://localhost:8080"));
        assert!(is_navigation_allowed("trellis://overlay/index.html?pane=1"));
        assert!(is_navigation_allowed("http://trellis.overlay/index.html"));
        assert!(is_navigation_allowed("about:blank"));
        assert!(is_navigation_allowed("data:text/html,<p>x</p>"));
        assert!(is_navigation_allowed("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn blocks_local_files_and_scripts() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("ftp://files.example.com"));
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("not-a-url"));
    }
}
