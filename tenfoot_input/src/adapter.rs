// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::gamepad::{GamepadSnapshot, GamepadState};
use crate::keyboard::{KeyEvent, map_key};
use crate::poll::{FrameScheduler, PollLoop};
use crate::repeat::RepeatLimiter;
use crate::Intent;

/// Keyboard mapping, key repeat control, gamepad edge state and the gamepad
/// poll loop under one lifecycle.
#[derive(Clone, Debug)]
pub struct InputAdapter {
    gamepad: GamepadState,
    poll: PollLoop,
    key_moves: RepeatLimiter,
    keyboard_enabled: bool,
    gamepad_enabled: bool,
}

impl InputAdapter {
    /// Create an adapter with keyboard and gamepad input enabled.
    ///
    /// Key-driven moves closer together than `navigation_delay` milliseconds
    /// are dropped.
    pub fn new(gamepad: GamepadState, navigation_delay: u64) -> Self {
        Self {
            gamepad,
            poll: PollLoop::new(),
            key_moves: RepeatLimiter::new(navigation_delay),
            keyboard_enabled: true,
            gamepad_enabled: true,
        }
    }

    /// Enable or disable keyboard input.
    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keyboard_enabled = enabled;
    }

    /// Enable or disable gamepad input. Takes effect on the next [`start`](Self::start).
    pub fn set_gamepad_enabled(&mut self, enabled: bool) {
        self.gamepad_enabled = enabled;
    }

    /// Start the gamepad poll loop if gamepad input is enabled.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.gamepad_enabled && self.poll.start(scheduler)
    }

    /// Stop polling and forget all edge and repeat state.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.poll.stop(scheduler);
        self.gamepad.reset();
        self.key_moves.reset();
    }

    /// Whether the poll loop is running.
    pub fn is_polling(&self) -> bool {
        self.poll.is_running()
    }

    /// Translate a key press.
    pub fn on_key(&self, event: &KeyEvent, text_entry_active: bool) -> Option<Intent> {
        if !self.keyboard_enabled {
            return None;
        }
        map_key(event, text_entry_active)
    }

    /// Whether a key-driven move at `now` is outside the navigation delay of
    /// the previous one. Admitting a move starts a new delay window.
    pub fn admit_key_move(&mut self, now: u64) -> bool {
        self.key_moves.admit(now)
    }

    /// Handle a frame callback with the active pad's state, if it could be read.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        snapshot: Option<&GamepadSnapshot<'_>>,
    ) -> SmallVec<[Intent; 4]> {
        if !self.poll.on_frame(scheduler) {
            return SmallVec::new();
        }
        match snapshot {
            Some(snapshot) if self.gamepad.active_pad().is_some() => self.gamepad.poll(snapshot),
            _ => SmallVec::new(),
        }
    }

    /// A pad was connected.
    pub fn gamepad_connected(&mut self, index: usize) {
        self.gamepad.connect(index);
    }

    /// A pad was disconnected.
    pub fn gamepad_disconnected(&mut self, index: usize) -> bool {
        self.gamepad.disconnect(index)
    }

    /// The gamepad edge state.
    pub fn gamepad(&self) -> &GamepadState {
        &self.gamepad
    }

    /// Mutable gamepad edge state, for example to rebind buttons.
    pub fn gamepad_mut(&mut self) -> &mut GamepadState {
        &mut self.gamepad
    }
}
