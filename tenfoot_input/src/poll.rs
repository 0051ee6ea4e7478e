// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cancellable per-frame polling loop.
//!
//! The loop does not own a timer. The host implements [`FrameScheduler`] on
//! top of whatever frame callback it has (vsync, an animation frame request,
//! a game loop tick) and calls [`PollLoop::on_frame`] when the frame arrives.
//!
//! ```rust
//! use tenfoot_input::{FrameScheduler, PollLoop};
//!
//! #[derive(Default)]
//! struct Frames { requested: u32, cancelled: u32 }
//!
//! impl FrameScheduler for Frames {
//!     fn request_frame(&mut self) { self.requested += 1; }
//!     fn cancel_frame(&mut self) { self.cancelled += 1; }
//! }
//!
//! let mut frames = Frames::default();
//! let mut poll = PollLoop::new();
//! poll.start(&mut frames);
//! assert!(poll.on_frame(&mut frames));
//! assert!(poll.on_frame(&mut frames));
//! poll.stop(&mut frames);
//!
//! // A frame that was already in flight is ignored after stop.
//! assert!(!poll.on_frame(&mut frames));
//! assert_eq!(frames.requested, 3);
//! assert_eq!(frames.cancelled, 1);
//! ```

/// Host capability to schedule a single callback on the next frame.
pub trait FrameScheduler {
    /// Ask for one call to the loop's `on_frame` on the next frame.
    fn request_frame(&mut self);

    /// Withdraw a pending frame request, if the platform supports it.
    fn cancel_frame(&mut self) {}
}

/// Explicit start/stop state for a per-frame loop.
#[derive(Clone, Debug, Default)]
pub struct PollLoop {
    running: bool,
    pending: bool,
    frames: u64,
}

impl PollLoop {
    /// Create a stopped loop.
    pub const fn new() -> Self {
        Self {
            running: false,
            pending: false,
            frames: 0,
        }
    }

    /// Start the loop by requesting the first frame.
    ///
    /// Returns `false` if it was already running.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.request(scheduler);
        true
    }

    /// Stop the loop, cancelling any pending frame request.
    ///
    /// Returns `false` if it was not running.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        if self.pending {
            self.pending = false;
            scheduler.cancel_frame();
        }
        true
    }

    /// Handle a frame callback.
    ///
    /// Returns `true` if the frame should be processed; in that case the next
    /// frame has already been requested.
    pub fn on_frame<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.pending = false;
        if !self.running {
            return false;
        }
        self.frames += 1;
        self.request(scheduler);
        true
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames processed since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn request<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.pending = true;
        scheduler.request_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        requested: u32,
        cancelled: u32,
    }

    impl FrameScheduler for Counting {
        fn request_frame(&mut self) {
            self.requested += 1;
        }
        fn cancel_frame(&mut self) {
            self.cancelled += 1;
        }
    }

    #[test]
    fn start_is_idempotent() {
        let mut s = Counting::default();
        let mut p = PollLoop::new();
        assert!(p.start(&mut s));
        assert!(!p.start(&mut s));
        assert_eq!(s.requested, 1);
        assert!(p.is_running());
    }

    #[test]
    fn stop_before_start_does_nothing() {
        let mut s = Counting::default();
        let mut p = PollLoop::new();
        assert!(!p.stop(&mut s));
        assert_eq!(s.cancelled, 0);
    }

    #[test]
    fn no_frames_requested_after_stop() {
        let mut s = Counting::default();
        let mut p = PollLoop::new();
        p.start(&mut s);
        for _ in 0..5 {
            assert!(p.on_frame(&mut s));
        }
        assert_eq!(p.frames(), 5);
        assert!(p.stop(&mut s));
        let requested = s.requested;
        assert!(!p.on_frame(&mut s));
        assert!(!p.on_frame(&mut s));
        assert_eq!(s.requested, requested);
        assert_eq!(p.frames(), 5);
    }

    #[test]
    fn restart_after_stop() {
        let mut s = Counting::default();
        let mut p = PollLoop::new();
        p.start(&mut s);
        p.stop(&mut s);
        assert!(p.start(&mut s));
        assert!(p.on_frame(&mut s));
        assert_eq!(s.requested, 3);
        assert_eq!(s.cancelled, 1);
    }
}
