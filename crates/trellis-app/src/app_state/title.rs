//! Window title management: reflects the active pane's page.

use super::core::TrellisApp;

impl TrellisApp {
    /// Format: "{page title} - {configured title}", or the configured title
    /// alone before any pane is active.
    pub(super) fn window_title(&self) -> String {
        let base = &self.config.window.title;
        match self.session.as_ref().and_then(|s| s.active_title()) {
            Some(page) => format!("{page} - {base}"),
            None => base.clone(),
        }
    }

    /// Push the title to the window when it changed.
    pub(super) fn update_window_title(&mut self) {
        let title = self.window_title();
        if title == self.last_title {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&title);
        }
        self.last_title = title;
    }
}
