//! Reactions to events reported by pane surfaces.

use tracing::{debug, trace, warn};
use trellis_common::PaneId;
use trellis_webview::error_page::is_aborted;
use trellis_webview::{
    OverlayCommand, PageMetadata, SurfaceEvent, SurfaceEventKind, SurfaceFactory, SurfaceRole,
};

use super::Session;

impl<F: SurfaceFactory> Session<F> {
    pub(super) fn process_surface_events(&mut self) {
        for event in self.panes.drain_events() {
            self.on_surface_event(event);
        }
    }

    pub fn on_surface_event(&mut self, event: SurfaceEvent) {
        let SurfaceEvent { pane, role, kind } = event;
        if !self.panes.contains(pane) {
            debug!(%pane, "event for a closed pane");
            return;
        }

        match (role, kind) {
            (SurfaceRole::Content, SurfaceEventKind::Navigated { url }) => {
                self.on_navigated(pane, url)
            }
            (SurfaceRole::Content, SurfaceEventKind::TitleChanged { title }) => {
                self.on_title(pane, title)
            }
            (SurfaceRole::Content, SurfaceEventKind::DomReady) => {
                self.with_pane(pane, "request metadata", |c| c.request_metadata());
            }
            (
                SurfaceRole::Content,
                SurfaceEventKind::LoadFailed {
                    code,
                    description,
                    url,
                },
            ) => self.on_load_failed(pane, code, &description, &url),
            (_, SurfaceEventKind::MetadataReady { url, metadata }) => {
                self.on_metadata(pane, &url, metadata)
            }
            (_, SurfaceEventKind::PreviewReady { data_url }) => self.on_preview(pane, data_url),
            (_, SurfaceEventKind::HintTargets { count }) => self.on_hint_targets(pane, count),
            (_, SurfaceEventKind::Ipc(body)) => match OverlayCommand::parse(&body) {
                Some(command) => self.handle_command(pane, command),
                None => debug!(%pane, "unrecognized page message"),
            },
            (SurfaceRole::Overlay, kind) => trace!(%pane, ?kind, "overlay page event"),
        }
    }

    fn on_navigated(&mut self, pane: PaneId, url: String) {
        if let Some(ctrl) = self.panes.get_mut(pane) {
            ctrl.record_navigation(url.clone());
        }
        // Labels point into the old document.
        self.exit_hints(pane);
        self.record_url(pane, &url);
    }

    fn on_title(&mut self, pane: PaneId, title: String) {
        let title = title.trim();
        let Some(leaf) = self.workspaces.leaf_mut(pane) else {
            return;
        };
        let title = (!title.is_empty()).then(|| title.to_string());
        if leaf.title == title {
            return;
        }
        leaf.title = title;
        self.broadcast_panes();
        self.schedule_persist();
    }

    fn on_load_failed(&mut self, pane: PaneId, code: i32, description: &str, url: &str) {
        if is_aborted(code) {
            debug!(%pane, url, "load superseded by a newer navigation");
            return;
        }
        warn!(%pane, code, description, url, "page failed to load");
        self.with_pane(pane, "show load error", |c| {
            c.show_load_error(code, description, url)
        });
    }

    /// Apply metadata extracted for `url`, unless the pane has moved on.
    fn on_metadata(&mut self, pane: PaneId, url: &str, metadata: PageMetadata) {
        let Some(leaf) = self.workspaces.leaf_mut(pane) else {
            return;
        };
        if leaf.url != url {
            debug!(%pane, stale = url, current = %leaf.url, "dropping stale metadata");
            return;
        }
        if metadata.title.is_some() {
            leaf.title = metadata.title;
        }
        leaf.favicon_url = metadata.favicon;
        leaf.description = metadata.description;
        leaf.background_color = metadata.background_color;
        leaf.text_color = metadata.text_color;
        leaf.image_url = metadata.image;
        self.broadcast_panes();
        self.schedule_persist();
    }

    fn on_preview(&mut self, pane: PaneId, data_url: String) {
        let Some(id) = self.workspaces.workspace_of(pane).cloned() else {
            return;
        };
        self.workspaces.set_preview(&id, Some(data_url));
        self.broadcast_workspaces();
    }
}
