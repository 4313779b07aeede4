use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::types::PaneId;

/// What a timer is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Session,
    Pane(PaneId),
}

/// Why a timer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Persist,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub subject: Subject,
    pub purpose: Purpose,
}

impl TimerKey {
    pub fn new(subject: Subject, purpose: Purpose) -> Self {
        Self { subject, purpose }
    }

    pub fn persist() -> Self {
        Self::new(Subject::Session, Purpose::Persist)
    }

    pub fn search(pane: PaneId) -> Self {
        Self::new(Subject::Pane(pane), Purpose::Search)
    }
}

#[derive(Debug)]
struct Pending<J> {
    deadline: Instant,
    job: J,
}

/// Debounce timers keyed by `(subject, purpose)`.
///
/// At most one job is pending per key. Scheduling again replaces the pending
/// job and pushes its deadline out, so a burst of triggers fires once.
/// The scheduler never runs anything itself: the owner polls `take_due`.
#[derive(Debug)]
pub struct Scheduler<J> {
    pending: HashMap<TimerKey, Pending<J>>,
}

impl<J> Scheduler<J> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Schedules `job` to fire `after` from `now`, replacing any pending job for `key`.
    pub fn schedule(&mut self, key: TimerKey, after: Duration, job: J, now: Instant) {
        let replaced = self
            .pending
            .insert(
                key,
                Pending {
                    deadline: now + after,
                    job,
                },
            )
            .is_some();
        tracing::trace!(?key, ?after, replaced, "timer scheduled");
    }

    /// Drops the pending job for `key`, returning it if there was one.
    pub fn cancel(&mut self, key: TimerKey) -> Option<J> {
        self.pending.remove(&key).map(|p| p.job)
    }

    /// Drops every pending job belonging to `subject`.
    pub fn cancel_subject(&mut self, subject: Subject) {
        self.pending.retain(|key, _| key.subject != subject);
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The earliest deadline among pending jobs, for event-loop wakeups.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|p| p.deadline).min()
    }

    /// Removes and returns every job whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerKey, J)> {
        let due_keys: Vec<TimerKey> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, _)| *k)
            .collect();

        let mut due: Vec<(Instant, TimerKey, J)> = due_keys
            .into_iter()
            .filter_map(|k| self.pending.remove(&k).map(|p| (p.deadline, k, p.job)))
            .collect();
        due.sort_by_key(|(deadline, _, _)| *deadline);
        due.into_iter().map(|(_, k, job)| (k, job)).collect()
    }
}

impl<J> Default for Scheduler<J> {
    fn default() -> Self {
        Self::new()
    }
}
