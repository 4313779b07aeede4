//! Internal constants for the app state module.

use std::time::Duration;

/// Longest the loop sleeps before draining surface events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);
