//! Link-hint ("biscuit") mode.

use tracing::debug;
use trellis_common::PaneId;
use trellis_platform::{HintInput, HintOutcome, HintSession};
use trellis_webview::SurfaceFactory;

use super::Session;

impl<F: SurfaceFactory> Session<F> {
    pub fn hint_active(&self, pane: PaneId) -> bool {
        self.transient
            .get(&pane)
            .is_some_and(|t| t.hints.is_some())
    }

    /// Enter hint mode on `pane`, or leave it when already active. Refused
    /// while the overlay is open.
    pub fn toggle_hints(&mut self, pane: PaneId) {
        if self.hint_active(pane) {
            self.exit_hints(pane);
        } else {
            self.start_hints(pane);
        }
    }

    fn start_hints(&mut self, pane: PaneId) {
        match self.panes.get(pane) {
            Some(ctrl) if !ctrl.overlay_open() => {}
            _ => return,
        }
        let Some(t) = self.transient.get_mut(&pane) else {
            return;
        };
        t.hints = Some(HintSession::new());
        t.biscuit.active = true;
        t.biscuit.typed.clear();
        debug!(%pane, "hint mode on");

        self.with_pane(pane, "collect hints", |c| c.request_hint_targets());
        self.broadcast_hints(pane);
    }

    pub(super) fn exit_hints(&mut self, pane: PaneId) {
        let Some(t) = self.transient.get_mut(&pane) else {
            return;
        };
        if t.hints.take().is_none() {
            return;
        }
        t.biscuit.active = false;
        t.biscuit.typed.clear();
        debug!(%pane, "hint mode off");

        self.with_pane(pane, "clear hints", |c| c.clear_hints());
        self.broadcast_hints(pane);
    }

    pub fn apply_hint_input(&mut self, pane: PaneId, input: HintInput) {
        match input {
            HintInput::Cancel | HintInput::Abort => self.exit_hints(pane),
            HintInput::Type(c) => {
                let Some(session) = self.transient.get_mut(&pane).and_then(|t| t.hints.as_mut())
                else {
                    return;
                };
                let outcome = session.feed(c);
                self.on_hint_outcome(pane, outcome);
            }
        }
    }

    /// The page reported how many elements it can hint.
    pub(super) fn on_hint_targets(&mut self, pane: PaneId, count: usize) {
        let alphabet = self.keybinds.hint_alphabet().to_vec();
        let Some(session) = self.transient.get_mut(&pane).and_then(|t| t.hints.as_mut()) else {
            debug!(%pane, "hint targets outside hint mode");
            return;
        };
        let outcome = session.set_targets(&alphabet, count);
        debug!(%pane, count, "hint targets");
        self.on_hint_outcome(pane, outcome);
    }

    fn on_hint_outcome(&mut self, pane: PaneId, outcome: HintOutcome) {
        match outcome {
            HintOutcome::Commit(index) => {
                if let Some(t) = self.transient.get_mut(&pane) {
                    t.hints = None;
                    t.biscuit.active = false;
                    t.biscuit.typed.clear();
                }
                debug!(%pane, index, "hint committed");
                self.with_pane(pane, "activate hint", |c| c.activate_hint(index));
                self.broadcast_hints(pane);
            }
            HintOutcome::NoMatch => {
                debug!(%pane, "no hint matches");
                self.exit_hints(pane);
            }
            HintOutcome::Partial => {
                // Labels that can no longer match are blanked.
                let labels = match self.transient.get_mut(&pane) {
                    Some(t) => match &t.hints {
                        Some(session) => {
                            t.biscuit.typed = session.typed().to_string();
                            session
                                .labels()
                                .iter()
                                .map(|l| {
                                    if l.starts_with(session.typed()) {
                                        l.clone()
                                    } else {
                                        String::new()
                                    }
                                })
                                .collect()
                        }
                        None => return,
                    },
                    None => return,
                };
                self.with_pane(pane, "show hints", |c| c.show_hints(labels));
                self.broadcast_hints(pane);
            }
            HintOutcome::Waiting => {
                if let Some(t) = self.transient.get_mut(&pane) {
                    if let Some(session) = &t.hints {
                        t.biscuit.typed = session.typed().to_string();
                    }
                }
                self.broadcast_hints(pane);
            }
        }
    }
}
