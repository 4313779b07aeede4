//! Session persistence and workspace limits.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet period before the session is written to disk (valid range: 100-60000).
    pub persist_debounce_ms: u64,
    /// Quiet period before overlay input is treated as navigation (valid range: 50-5000).
    pub search_debounce_ms: u64,
    /// Workspace cap, keyed to quick-switch indices (valid range: 1-9).
    pub max_workspaces: u8,
    /// Workspaces whose pane surfaces stay alive while hidden (valid range: 1-9).
    /// Older hidden workspaces are evicted to their serialized form.
    pub max_live_workspaces: u8,
    /// Restore the previous session on launch.
    pub restore: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist_debounce_ms: 1000,
            search_debounce_ms: 450,
            max_workspaces: 9,
            max_live_workspaces: 3,
            restore: true,
        }
    }
}

impl SessionConfig {
    pub fn persist_debounce(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
