// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host side of the navigator: outward notifications and collaborator requests.

use kurbo::Rect;
use tenfoot_focus::Direction;
use tenfoot_input::FrameScheduler;

/// Named audio cue. The host decides what each one sounds like.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Focus moved.
    Navigation,
    /// An element was activated or a designated element chosen.
    Select,
    /// A request could not be carried out.
    Error,
    /// An overlay or modal was closed.
    Back,
    /// Focus went to the designated home element.
    Home,
}

/// Key synthesized by the navigator and delivered to an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntheticKey {
    /// Confirm; opens pickers.
    Enter,
    /// Cancel; closes modal surfaces.
    Escape,
}

/// Notification emitted by the navigator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavEvent<K> {
    /// Focus moved to an element.
    FocusChanged(K),
    /// The focused element was activated.
    Activated(K),
    /// A directional move succeeded.
    Navigated {
        /// Direction of travel.
        direction: Direction,
        /// Element focused before the move.
        from: K,
        /// Element focused after the move.
        to: K,
    },
    /// A back request was received.
    BackRequested,
    /// A home request was received.
    HomeRequested,
    /// The on-screen keyboard was shown.
    KeyboardShown,
    /// The on-screen keyboard was hidden.
    KeyboardHidden,
    /// Audio cues were switched on (`true`) or off.
    AudioToggled(bool),
    /// The navigator finished starting.
    Ready,
}

/// Everything the navigator needs from the surrounding application.
///
/// Only [`viewport`](Self::viewport) and the frame-scheduling methods are
/// required; every other request defaults to doing nothing.
pub trait Host<K>: FrameScheduler {
    /// Visible region in the same coordinate space as element bounds.
    fn viewport(&self) -> Rect;

    /// Move platform focus and the focus highlight to `id`.
    fn focus_element(&mut self, _id: K) {}

    /// Scroll `id` into view.
    fn scroll_into_view(&mut self, _id: K) {}

    /// Play a short rejection animation on `id`.
    fn shake(&mut self, _id: K) {}

    /// Perform the platform's default action for `id`.
    fn click(&mut self, _id: K) {}

    /// Deliver a key press to `id`.
    fn dispatch_key(&mut self, _id: K, _key: SyntheticKey) {}

    /// Close the modal surface rooted at `root` through its own API.
    ///
    /// Returns `true` if the surface handled the request.
    fn dismiss(&mut self, _root: K) -> bool {
        false
    }

    /// Play an audio cue.
    fn play_cue(&mut self, _cue: Cue) {}

    /// Show or hide the on-screen keyboard, which will type into `target`.
    fn set_keyboard_visible(&mut self, _visible: bool, _target: Option<K>) {}

    /// Show or hide the help overlay.
    fn set_help_visible(&mut self, _visible: bool) {}

    /// Root element of the on-screen keyboard, if the host provides one.
    fn keyboard_root(&self) -> Option<K> {
        None
    }

    /// Root element of the help overlay, if the host provides one.
    fn help_root(&self) -> Option<K> {
        None
    }

    /// Show a transient status message.
    fn show_status(&mut self, _text: &str) {}

    /// Replace the breadcrumb text.
    fn set_breadcrumb(&mut self, _text: &str) {}

    /// Breadcrumb label for newly focused `id`.
    ///
    /// `context` is the innermost surface around `id` that a label would
    /// usually come from: the shown overlay or open modal containing it,
    /// otherwise its enclosing section. Returning `None` leaves the breadcrumb
    /// unchanged.
    fn breadcrumb_for(&self, _id: K, _context: Option<K>) -> Option<String> {
        None
    }

    /// Receive a navigator notification.
    fn notify(&mut self, _event: NavEvent<K>) {}
}
