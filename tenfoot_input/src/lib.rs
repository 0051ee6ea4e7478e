// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Input: turn keyboard and gamepad activity into navigation intents.
//!
//! Every device funnels into the closed [`Intent`] vocabulary, so the code that
//! reacts to input never has to know where it came from.
//!
//! - [`keyboard`]: a fixed key table from [`Key`] to [`Intent`]. [`Key::from_name`]
//!   is the only place that deals with platform key names.
//! - [`gamepad`]: edge-triggered button and left-stick handling over per-frame
//!   [`GamepadSnapshot`]s. Holding a button or stick produces exactly one intent.
//! - [`poll`]: a cancellable per-frame loop driven by a host [`FrameScheduler`].
//! - [`repeat`]: a [`RepeatLimiter`] that spaces out moves from held keys.
//! - [`InputAdapter`] bundles them behind one start/stop lifecycle.
//!
//! ## Example
//!
//! ```rust
//! use tenfoot_focus::Direction;
//! use tenfoot_input::{GamepadSnapshot, GamepadState, Intent};
//!
//! let mut pad = GamepadState::new(0.3);
//! let buttons = [false; 16];
//!
//! // Stick pushed right and held for three frames.
//! let held = GamepadSnapshot { buttons: &buttons, axes: &[0.9, 0.0] };
//! assert_eq!(pad.poll(&held).as_slice(), &[Intent::Navigate(Direction::Right)]);
//! assert!(pad.poll(&held).is_empty());
//! assert!(pad.poll(&held).is_empty());
//!
//! // Released, then pushed again.
//! let idle = GamepadSnapshot { buttons: &buttons, axes: &[0.0, 0.0] };
//! assert!(pad.poll(&idle).is_empty());
//! assert_eq!(pad.poll(&held).len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
pub mod gamepad;
pub mod keyboard;
pub mod poll;
pub mod repeat;

pub use adapter::InputAdapter;
pub use gamepad::{AxisDirections, ButtonMap, GamepadSnapshot, GamepadState};
pub use keyboard::{Key, KeyEvent, Modifiers, map_key};
pub use poll::{FrameScheduler, PollLoop};
pub use repeat::RepeatLimiter;

use tenfoot_focus::Direction;

/// A device-independent navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move focus in a direction.
    Navigate(Direction),
    /// Activate the focused element.
    Activate,
    /// Go back: close the top overlay or modal, or return to the previous focus.
    Back,
    /// Go to the designated home element.
    Home,
    /// Show or hide the on-screen keyboard.
    ToggleKeyboard,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Jump to the previous section.
    PageUp,
    /// Jump to the next section.
    PageDown,
    /// Turn audio cues on or off.
    ToggleAudio,
}

impl Intent {
    /// The direction carried by a [`Intent::Navigate`], if any.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Navigate(d) => Some(d),
            _ => None,
        }
    }
}
