//! Content change detection scheduling.
//!
//! The watcher does not observe anything itself; the host reports mutation
//! and resize signals, and the watcher turns them into deadlines the widget
//! pumps from `tick`. Two deadlines exist: a short debounce armed by each
//! signal (lets layout settle before measuring), and a low-frequency
//! periodic recheck that catches height changes no signal reports (font
//! loading, CSS transitions). The recheck is a safety net, not the primary
//! mechanism.

use std::time::{Duration, Instant};

/// Delay between a change signal and the recompute it triggers.
pub const DEBOUNCE: Duration = Duration::from_millis(30);

/// Interval of the fallback periodic recheck.
pub const RECHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Cancelable recompute deadlines for one widget instance.
#[derive(Debug, Clone)]
pub struct ContentWatcher {
    debounce: Duration,
    recheck_interval: Duration,
    /// Armed by mutation/resize signals; consumed by `poll`.
    pending_at: Option<Instant>,
    /// Always re-armed by `poll`; `None` only after `cancel`.
    recheck_at: Option<Instant>,
}

impl ContentWatcher {
    /// Start watching with the default intervals.
    pub fn new(now: Instant) -> Self {
        Self::with_intervals(DEBOUNCE, RECHECK_INTERVAL, now)
    }

    /// Start watching with explicit intervals.
    pub fn with_intervals(debounce: Duration, recheck_interval: Duration, now: Instant) -> Self {
        Self {
            debounce,
            recheck_interval,
            pending_at: None,
            recheck_at: Some(now + recheck_interval),
        }
    }

    /// Record a structural mutation signal. Re-arms the debounce deadline,
    /// so a burst of mutations measures once.
    pub fn note_mutation(&mut self, now: Instant) {
        self.pending_at = Some(now + self.debounce);
    }

    /// Record a viewport resize signal.
    pub fn note_resize(&mut self, now: Instant) {
        self.pending_at = Some(now + self.debounce);
    }

    /// Report whether a recompute is due, consuming the debounce deadline
    /// and advancing the periodic one. Returns `false` after `cancel`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut due = false;
        if let Some(at) = self.pending_at
            && now >= at
        {
            self.pending_at = None;
            due = true;
        }
        if let Some(at) = self.recheck_at
            && now >= at
        {
            self.recheck_at = Some(now + self.recheck_interval);
            due = true;
        }
        due
    }

    /// The earliest instant at which `poll` will report work, for host
    /// wakeup scheduling. `None` after `cancel`.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending_at, self.recheck_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Drop all deadlines. Idempotent; used on teardown.
    pub fn cancel(&mut self) {
        self.pending_at = None;
        self.recheck_at = None;
    }
}
