// src/debounce.rs
//
// Quiet-period debouncer for the search box. Each input replaces (cancels)
// the pending query and restarts the timer; `poll` hands out the text once
// the input has been quiet long enough. Time is passed in so the frontends
// drive it from their own clock and tests can step it.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Pending {
    text: String,
    due: Instant,
    token: u64,
}

#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<Pending>,
    next_token: u64,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None, next_token: 0 }
    }

    pub fn quiet(&self) -> Duration { self.quiet }

    /// Schedule `text`; any earlier pending text is dropped.
    /// Returns the token identifying this schedule.
    pub fn input(&mut self, text: &str, now: Instant) -> u64 {
        self.next_token += 1;
        self.pending = Some(Pending { text: s!(text), due: now + self.quiet, token: self.next_token });
        self.next_token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    /// Whether `token` is still the live schedule.
    pub fn is_current(&self, token: u64) -> bool {
        self.pending.as_ref().is_some_and(|p| p.token == token)
    }

    /// How long until the pending text fires (zero if overdue).
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due.saturating_duration_since(now))
    }

    /// The pending text, once its quiet period has elapsed. Fires once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.text),
            _ => None,
        }
    }
}
