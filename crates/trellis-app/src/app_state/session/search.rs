//! The overlay's address/search input.

use std::time::Instant;

use tracing::debug;
use trellis_common::{Event, PaneId, TimerKey};
use trellis_webview::{looks_like_url, normalize_input, SurfaceFactory};

use super::{Job, Session};

impl<F: SurfaceFactory> Session<F> {
    /// The overlay input changed. Text that still looks like a URL once the
    /// input settles is loaded as a preview.
    pub fn search_input(&mut self, pane: PaneId, query: String) {
        let Some(t) = self.transient.get_mut(&pane) else {
            return;
        };
        t.search.query = query.clone();
        self.bus.publish(Event::SearchUpdate {
            pane_id: pane,
            query,
        });
        self.scheduler.schedule(
            TimerKey::search(pane),
            self.config.session.search_debounce(),
            Job::SearchSettled(pane),
            Instant::now(),
        );
    }

    pub(super) fn settle_search(&mut self, pane: PaneId) {
        let Some(t) = self.transient.get(&pane) else {
            return;
        };
        let query = t.search.query.trim().to_string();
        if !looks_like_url(&query) {
            debug!(%pane, "settled search is not a URL");
            return;
        }
        let Some(url) = normalize_input(&query, &self.config.browser.search_url) else {
            return;
        };
        if self.panes.get(pane).is_some_and(|c| c.url() == url) {
            return;
        }
        self.navigate(pane, &url);
    }

    /// Load the submitted text and drop the overlay.
    pub fn search_submit(&mut self, pane: PaneId, query: &str) -> bool {
        self.scheduler.cancel(TimerKey::search(pane));
        let Some(url) = normalize_input(query, &self.config.browser.search_url) else {
            return false;
        };
        if let Some(t) = self.transient.get_mut(&pane) {
            t.search.query = url.clone();
        }
        let loaded = self.navigate(pane, &url);
        self.close_overlay(pane);
        loaded
    }

    pub fn search_blur(&mut self, pane: PaneId) {
        let Some(t) = self.transient.get_mut(&pane) else {
            return;
        };
        if !t.search.is_focused {
            return;
        }
        t.search.is_focused = false;
        self.publish_search_focus(pane);
    }

    pub(super) fn commit_overlay(&mut self, pane: PaneId) {
        let Some(query) = self.transient.get(&pane).map(|t| t.search.query.clone()) else {
            return;
        };
        self.search_submit(pane, &query);
    }

    /// Drop the overlay without loading anything; the input reverts to the
    /// pane's URL.
    pub(super) fn cancel_overlay(&mut self, pane: PaneId) {
        self.scheduler.cancel(TimerKey::search(pane));
        let Some(url) = self.panes.get(pane).map(|c| c.url().to_string()) else {
            return;
        };
        if let Some(t) = self.transient.get_mut(&pane) {
            t.search.query = url;
        }
        self.publish_search(pane);
        self.close_overlay(pane);
    }

    pub fn set_typing(&mut self, pane: PaneId, typing: bool) {
        if let Some(t) = self.transient.get_mut(&pane) {
            if t.typing != typing {
                debug!(%pane, typing, "typing state");
            }
            t.typing = typing;
        }
    }
}
