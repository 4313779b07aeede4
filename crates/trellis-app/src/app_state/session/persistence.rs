//! The on-disk session document and the debounced writer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use trellis_common::{PaneId, Rect, TimerKey, TrellisError, WorkspaceId};
use trellis_tiling::{to_serialized, SerializedNode, SerializedWorkspace, WorkspaceState};
use trellis_webview::SurfaceFactory;

use super::{Job, Session};

/// Everything needed to rebuild a window: every workspace's tree, the
/// focused pane and the window geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    /// The active workspace's tree, kept for readers of the single-tree form.
    #[serde(default)]
    pub root: Option<SerializedNode>,
    #[serde(default)]
    pub last_active_pane_id: Option<PaneId>,
    #[serde(default)]
    pub window_bounds: Option<Rect>,
    #[serde(default)]
    pub workspace_state: WorkspaceState,
}

impl SessionDocument {
    /// The workspace catalogue to restore. A document carrying only `root`
    /// becomes a single workspace holding that tree.
    pub fn into_workspace_state(self) -> WorkspaceState {
        if !self.workspace_state.workspaces.is_empty() {
            return self.workspace_state;
        }
        let Some(root) = self.root else {
            return WorkspaceState::default();
        };
        let id = WorkspaceId::new();
        WorkspaceState {
            workspaces: vec![SerializedWorkspace {
                id: id.clone(),
                name: String::new(),
                index: 0,
                root: Some(root),
                active_pane_id: self.last_active_pane_id,
                last_accessed: 0,
            }],
            active_workspace_id: Some(id),
        }
    }
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved document, or `None` for a fresh start. An unreadable
    /// document is moved aside so the next save does not overwrite it.
    pub fn load(&self) -> Option<SessionDocument> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved session");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read session");
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<SessionDocument>(&raw) {
            Ok(doc) => {
                info!(
                    path = %self.path.display(),
                    workspaces = doc.workspace_state.workspaces.len(),
                    "loaded session"
                );
                Some(doc)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "session file is corrupt");
                self.quarantine();
                None
            }
        }
    }

    fn quarantine(&self) {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.json".into());
        let target = self.path.with_file_name(format!("{name}.corrupt-{stamp}"));
        match std::fs::rename(&self.path, &target) {
            Ok(()) => warn!(to = %target.display(), "moved corrupt session aside"),
            Err(e) => warn!(error = %e, "could not move corrupt session aside"),
        }
    }

    /// Write through a temp file renamed into place.
    pub fn save(&self, doc: &SessionDocument) -> Result<(), TrellisError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved session");
        Ok(())
    }
}

impl<F: SurfaceFactory> Session<F> {
    pub fn snapshot(&self) -> SessionDocument {
        SessionDocument {
            root: self.workspaces.active_tree().and_then(to_serialized),
            last_active_pane_id: self.last_active,
            window_bounds: self.window_bounds,
            workspace_state: self.workspaces.to_state(),
        }
    }

    /// Restart the persistence quiet period.
    pub(super) fn schedule_persist(&mut self) {
        if self.store.is_none() {
            return;
        }
        self.scheduler.schedule(
            TimerKey::persist(),
            self.config.session.persist_debounce(),
            Job::Persist,
            Instant::now(),
        );
    }

    pub(super) fn persist_now(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.snapshot()) {
            warn!(path = %store.path().display(), error = %e, "failed to save session");
        }
    }

    /// Write immediately, dropping any pending debounced write.
    pub fn flush(&mut self) {
        self.scheduler.cancel(TimerKey::persist());
        self.persist_now();
    }

    pub fn set_window_bounds(&mut self, bounds: Option<Rect>) {
        if bounds.is_none() || bounds == self.window_bounds {
            return;
        }
        self.window_bounds = bounds;
        self.schedule_persist();
    }

    pub fn window_bounds(&self) -> Option<Rect> {
        self.window_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_tiling::SplitDirection;

    fn leaf(id: u32, url: &str) -> SerializedNode {
        SerializedNode::Leaf {
            id: PaneId(id),
            url: url.into(),
            title: None,
            favicon_url: None,
            description: None,
            background_color: None,
            text_color: None,
            image_url: None,
        }
    }

    #[test]
    fn missing_and_empty_files_start_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.load().is_none());

        std::fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().is_none());
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_moved_aside() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(store.load().is_none());
        assert!(!store.path().exists());
        let moved: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(moved.len(), 1);
        assert!(moved[0].starts_with("session.json.corrupt-"));
    }

    #[test]
    fn save_then_load_keeps_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        let doc = SessionDocument {
            root: Some(leaf(3, "https://a.test")),
            last_active_pane_id: Some(PaneId(3)),
            window_bounds: Some(Rect::new(10.0, 20.0, 800.0, 600.0)),
            workspace_state: WorkspaceState::default(),
        };
        store.save(&doc).unwrap();

        assert_eq!(store.load(), Some(doc));
        assert!(!dir.path().join("nested").join("session.json.tmp").exists());
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let doc = SessionDocument {
            root: Some(SerializedNode::Split {
                direction: SplitDirection::Vertical,
                ratio: 0.5,
                child_a: Box::new(leaf(1, "https://a.test")),
                child_b: Box::new(leaf(2, "https://b.test")),
            }),
            last_active_pane_id: Some(PaneId(2)),
            window_bounds: None,
            workspace_state: WorkspaceState::default(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["lastActivePaneId"], 2);
        assert_eq!(json["root"]["type"], "split");
        assert!(json["workspaceState"]["workspaces"].is_array());
        assert!(json.get("windowBounds").is_some());
    }

    #[test]
    fn root_only_document_becomes_one_workspace() {
        let doc: SessionDocument = serde_json::from_str(
            r#"{"root":{"type":"leaf","id":7,"url":"https://a.test"},"lastActivePaneId":7}"#,
        )
        .unwrap();
        let state = doc.into_workspace_state();
        assert_eq!(state.workspaces.len(), 1);
        assert_eq!(state.workspaces[0].active_pane_id, Some(PaneId(7)));
        assert_eq!(
            state.active_workspace_id.as_ref(),
            Some(&state.workspaces[0].id)
        );
    }
}
