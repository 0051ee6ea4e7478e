// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard (and remote control) key mapping.
//!
//! | Key | Intent |
//! |---|---|
//! | Arrow keys | [`Intent::Navigate`] |
//! | `Enter` | [`Intent::Activate`] |
//! | `Escape`, `Backspace` | [`Intent::Back`] |
//! | `Home` | [`Intent::Home`] |
//! | `PageUp` / `PageDown` | [`Intent::PageUp`] / [`Intent::PageDown`] |
//! | `F1` | [`Intent::ToggleHelp`] |
//! | `F10` | [`Intent::ToggleKeyboard`] |
//! | `Alt+M` | [`Intent::ToggleAudio`] |
//!
//! While a text-entry field has focus, keys that also edit text (arrows,
//! `Enter`, `Backspace`) are left to the field and produce no intent.

use tenfoot_focus::Direction;

use crate::Intent;

/// A key, decoded from a platform key name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Enter`.
    Enter,
    /// `Escape`.
    Escape,
    /// `Backspace`.
    Backspace,
    /// `Home`.
    Home,
    /// `PageUp`.
    PageUp,
    /// `PageDown`.
    PageDown,
    /// `F1`.
    F1,
    /// `F10`.
    F10,
    /// A key producing a single printable character.
    Character(char),
    /// Anything else.
    Other,
}

impl Key {
    /// Decode a key name as reported by web-style platforms (`KeyboardEvent.key`).
    ///
    /// Unknown multi-character names decode to [`Key::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            "Home" => Self::Home,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "F1" => Self::F1,
            "F10" => Self::F10,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }

    /// The direction of an arrow key.
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowDown => Some(Direction::Down),
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Control.
        const CTRL  = 0b0010;
        /// Alt / Option.
        const ALT   = 0b0100;
        /// Meta / Command / Windows.
        const META  = 0b1000;
    }
}

/// A key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held at the time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A press of `key` with no modifiers.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Decode a named key press.
    pub fn named(name: &str, modifiers: Modifiers) -> Self {
        Self {
            key: Key::from_name(name),
            modifiers,
        }
    }

    /// Returns a copy with `modifiers` added.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }
}

/// Map a key press to an intent.
///
/// `text_entry_active` should be `true` while focus sits on a text field of
/// the on-screen keyboard.
pub fn map_key(event: &KeyEvent, text_entry_active: bool) -> Option<Intent> {
    if event.modifiers.contains(Modifiers::ALT)
        && matches!(event.key, Key::Character('m' | 'M'))
    {
        return Some(Intent::ToggleAudio);
    }
    if text_entry_active && edits_text(event.key) {
        return None;
    }
    match event.key {
        Key::Enter => Some(Intent::Activate),
        Key::Escape | Key::Backspace => Some(Intent::Back),
        Key::Home => Some(Intent::Home),
        Key::PageUp => Some(Intent::PageUp),
        Key::PageDown => Some(Intent::PageDown),
        Key::F1 => Some(Intent::ToggleHelp),
        Key::F10 => Some(Intent::ToggleKeyboard),
        key => key.direction().map(Intent::Navigate),
    }
}

fn edits_text(key: Key) -> bool {
    key.direction().is_some() || matches!(key, Key::Enter | Key::Backspace)
}
