// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debouncer over host-supplied timestamps.

/// Coalesces bursts of change notifications into one deferred action.
///
/// Each [`notify`](Self::notify) pushes the deadline out to `now + interval`;
/// [`fire`](Self::fire) reports `true` once the deadline has passed.
#[derive(Clone, Debug)]
pub struct Debouncer {
    interval: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Create an idle debouncer with the given quiet period in milliseconds.
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Record a change at `now`.
    pub fn notify(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.interval));
    }

    /// Returns `true`, and goes idle, if the quiet period has elapsed by `now`.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }
}
