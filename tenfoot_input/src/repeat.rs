// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeat-rate control for key-driven moves.
//!
//! Holding an arrow key on a remote makes the platform send a stream of
//! key-down repeats. A [`RepeatLimiter`] admits at most one move per interval,
//! so a held key steps through a rail instead of racing across it.
//!
//! ```rust
//! use tenfoot_input::RepeatLimiter;
//!
//! let mut limiter = RepeatLimiter::new(200);
//! assert!(limiter.admit(1_000));
//! assert!(!limiter.admit(1_030));
//! assert!(!limiter.admit(1_199));
//! assert!(limiter.admit(1_200));
//! ```

/// Leading-edge rate limiter over host-supplied millisecond timestamps.
#[derive(Clone, Debug)]
pub struct RepeatLimiter {
    interval: u64,
    last: Option<u64>,
}

impl RepeatLimiter {
    /// Create a limiter that admits one event per `interval` milliseconds.
    ///
    /// An interval of zero admits everything.
    pub const fn new(interval: u64) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Minimum spacing between admitted events.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Returns `true`, and starts a new window, if an event at `now` may pass.
    ///
    /// A timestamp earlier than the last admitted one is treated as a clock
    /// reset and admitted.
    pub fn admit(&mut self, now: u64) -> bool {
        let open = self
            .last
            .is_none_or(|last| now < last || now - last >= self.interval);
        if open {
            self.last = Some(now);
        }
        open
    }

    /// Forget the last admitted event.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
