//! Surface event draining and timer-driven wake-ups.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::TrellisApp;
use super::types::POLL_INTERVAL;

impl TrellisApp {
    /// Run due work and schedule the next wake-up: the next timer deadline,
    /// but never later than one poll interval so page events keep flowing.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.poll(now);

        if session.should_exit() {
            event_loop.exit();
            return;
        }

        let fallback = now + POLL_INTERVAL;
        let wake = session
            .next_deadline()
            .map_or(fallback, |deadline| deadline.min(fallback));
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));

        self.update_window_title();
    }
}
