// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-triggered gamepad handling.
//!
//! The host reads the active pad once per frame and hands the raw state to
//! [`GamepadState::poll`] as a [`GamepadSnapshot`]. Intents are produced only on
//! the transition from released to pressed:
//!
//! 1. Buttons, in index order, looked up in the [`ButtonMap`].
//! 2. The left stick (axes 0 and 1), split into four directions by comparing
//!    against the deadzone: an axis counts as active only when strictly beyond
//!    it. Directions are checked left, right, up, down.
//!
//! There is no auto-repeat: holding a button or the stick for any number of
//! frames yields a single intent.

use smallvec::SmallVec;
use tenfoot_focus::Direction;

use crate::Intent;

/// Number of button slots tracked per pad.
pub const MAX_BUTTONS: usize = 32;

/// Raw state of one gamepad for one frame.
#[derive(Copy, Clone, Debug)]
pub struct GamepadSnapshot<'a> {
    /// Pressed state per button index.
    pub buttons: &'a [bool],
    /// Axis values in `-1.0..=1.0`. Missing axes read as `0.0`.
    pub axes: &'a [f64],
}

/// Button index to intent table.
///
/// The default follows the standard gamepad layout:
///
/// | Button | Intent |
/// |---|---|
/// | 0 (A) | [`Intent::Activate`] |
/// | 1 (B) | [`Intent::Back`] |
/// | 2, 3 (X, Y) | [`Intent::Home`] |
/// | 4 (LB) | [`Intent::PageUp`] |
/// | 5 (RB) | [`Intent::PageDown`] |
/// | 8, 9 (Select, Start) | [`Intent::ToggleKeyboard`] |
/// | 12 to 15 (d-pad) | [`Intent::Navigate`] up, down, left, right |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonMap {
    slots: [Option<Intent>; MAX_BUTTONS],
}

impl Default for ButtonMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(0, Intent::Activate);
        map.bind(1, Intent::Back);
        map.bind(2, Intent::Home);
        map.bind(3, Intent::Home);
        map.bind(4, Intent::PageUp);
        map.bind(5, Intent::PageDown);
        map.bind(8, Intent::ToggleKeyboard);
        map.bind(9, Intent::ToggleKeyboard);
        map.bind(12, Intent::Navigate(Direction::Up));
        map.bind(13, Intent::Navigate(Direction::Down));
        map.bind(14, Intent::Navigate(Direction::Left));
        map.bind(15, Intent::Navigate(Direction::Right));
        map
    }
}

impl ButtonMap {
    /// A map with no bindings.
    pub const fn empty() -> Self {
        Self {
            slots: [None; MAX_BUTTONS],
        }
    }

    /// Bind `button` to `intent`. Returns `false` if the index is out of range.
    pub fn bind(&mut self, button: usize, intent: Intent) -> bool {
        match self.slots.get_mut(button) {
            Some(slot) => {
                *slot = Some(intent);
                true
            }
            None => false,
        }
    }

    /// Remove the binding for `button`, returning it.
    pub fn unbind(&mut self, button: usize) -> Option<Intent> {
        self.slots.get_mut(button).and_then(Option::take)
    }

    /// The intent bound to `button`.
    pub fn get(&self, button: usize) -> Option<Intent> {
        self.slots.get(button).copied().flatten()
    }
}

bitflags::bitflags! {
    /// Stick directions currently beyond the deadzone.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AxisDirections: u8 {
        /// Stick pushed left.
        const LEFT  = 0b0001;
        /// Stick pushed right.
        const RIGHT = 0b0010;
        /// Stick pushed up.
        const UP    = 0b0100;
        /// Stick pushed down.
        const DOWN  = 0b1000;
    }
}

impl AxisDirections {
    /// Evaluation order of stick directions.
    pub const ORDER: [(Self, Direction); 4] = [
        (Self::LEFT, Direction::Left),
        (Self::RIGHT, Direction::Right),
        (Self::UP, Direction::Up),
        (Self::DOWN, Direction::Down),
    ];

    /// Classify a stick position. NaN values count as centered.
    pub fn from_stick(x: f64, y: f64, deadzone: f64) -> Self {
        let mut dirs = Self::empty();
        dirs.set(Self::LEFT, x < -deadzone);
        dirs.set(Self::RIGHT, x > deadzone);
        dirs.set(Self::UP, y < -deadzone);
        dirs.set(Self::DOWN, y > deadzone);
        dirs
    }
}

/// Per-pad edge-trigger state.
#[derive(Clone, Debug)]
pub struct GamepadState {
    map: ButtonMap,
    deadzone: f64,
    pressed: u32,
    stick: AxisDirections,
    active: Option<usize>,
}

impl GamepadState {
    /// Create a state with the default [`ButtonMap`] and the given stick deadzone.
    pub fn new(deadzone: f64) -> Self {
        Self::with_map(ButtonMap::default(), deadzone)
    }

    /// Create a state with a custom button map.
    pub fn with_map(map: ButtonMap, deadzone: f64) -> Self {
        Self {
            map,
            deadzone,
            pressed: 0,
            stick: AxisDirections::empty(),
            active: None,
        }
    }

    /// Current button map.
    pub fn button_map(&self) -> &ButtonMap {
        &self.map
    }

    /// Mutable access to the button map.
    pub fn button_map_mut(&mut self) -> &mut ButtonMap {
        &mut self.map
    }

    /// Stick deadzone.
    pub fn deadzone(&self) -> f64 {
        self.deadzone
    }

    /// Process one frame and return the intents it triggers, buttons first.
    pub fn poll(&mut self, snapshot: &GamepadSnapshot<'_>) -> SmallVec<[Intent; 4]> {
        let mut out = SmallVec::new();

        let mut now_pressed = 0_u32;
        for (index, &down) in snapshot.buttons.iter().take(MAX_BUTTONS).enumerate() {
            if !down {
                continue;
            }
            let bit = 1_u32 << index;
            now_pressed |= bit;
            if self.pressed & bit == 0
                && let Some(intent) = self.map.get(index)
            {
                out.push(intent);
            }
        }
        self.pressed = now_pressed;

        let axis = |i: usize| snapshot.axes.get(i).copied().unwrap_or(0.0);
        let stick = AxisDirections::from_stick(axis(0), axis(1), self.deadzone);
        for (flag, direction) in AxisDirections::ORDER {
            if stick.contains(flag) && !self.stick.contains(flag) {
                out.push(Intent::Navigate(direction));
            }
        }
        self.stick = stick;

        out
    }

    /// Record that pad `index` was connected and make it the active pad.
    pub fn connect(&mut self, index: usize) {
        if self.active != Some(index) {
            self.reset();
        }
        self.active = Some(index);
    }

    /// Record that pad `index` was disconnected.
    ///
    /// Returns `true` if it was the active pad; edge state is reset in that case.
    pub fn disconnect(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            self.active = None;
            self.reset();
            true
        } else {
            false
        }
    }

    /// Index of the active pad, if one is connected.
    pub fn active_pad(&self) -> Option<usize> {
        self.active
    }

    /// Forget all previous-frame state.
    pub fn reset(&mut self) {
        self.pressed = 0;
        self.stick = AxisDirections::empty();
    }
}
