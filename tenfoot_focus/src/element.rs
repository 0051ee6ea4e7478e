// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element descriptions supplied by the host: kind, flags and tab order.

bitflags::bitflags! {
    /// Element flags controlling focus eligibility and designated roles.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u16 {
        /// Element matches the host's focusable capability filter.
        const FOCUSABLE  = 0b0000_0000_0001;
        /// Element is disabled and must never receive focus.
        const DISABLED   = 0b0000_0000_0010;
        /// Element is explicitly marked to be skipped by navigation.
        const SKIP       = 0b0000_0000_0100;
        /// Element is hidden from assistive technology (and from navigation).
        const HIDDEN     = 0b0000_0000_1000;
        /// Element accepts typed text; directional keys belong to it while focused.
        const TEXT_ENTRY = 0b0000_0001_0000;
        /// Designated "home" element.
        const HOME       = 0b0000_0010_0000;
        /// Designated "back" element.
        const BACK       = 0b0000_0100_0000;
        /// Dismiss button of a modal surface.
        const DISMISS    = 0b0000_1000_0000;
        /// Section container used by page-up/page-down navigation.
        const SECTION    = 0b0001_0000_0000;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::FOCUSABLE
    }
}

/// What an element does when it is activated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Anything without a more specific activation behavior; activation clicks it.
    #[default]
    Generic,
    /// A push button.
    Button,
    /// A hyperlink.
    Link,
    /// A checkbox or radio button.
    Toggle,
    /// A single or multi-line text field; activation opens the on-screen keyboard.
    TextField,
    /// A drop-down picker; activation sends it a confirm key.
    Select,
    /// A non-interactive container (sections, dialogs, overlays).
    Container,
}

/// Host-supplied description of a single element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElementInfo {
    /// Activation behavior.
    pub kind: ElementKind,
    /// Eligibility and role flags.
    pub flags: ElementFlags,
    /// Explicit tab index, if any. Negative values remove the element from navigation.
    pub tab_index: Option<i32>,
}

impl Default for ElementInfo {
    fn default() -> Self {
        Self {
            kind: ElementKind::Generic,
            flags: ElementFlags::default(),
            tab_index: None,
        }
    }
}

impl ElementInfo {
    /// A focusable element of the given kind.
    pub fn focusable(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// A non-focusable container carrying `flags` (for example [`ElementFlags::SECTION`]).
    pub fn container(flags: ElementFlags) -> Self {
        Self {
            kind: ElementKind::Container,
            flags: flags - ElementFlags::FOCUSABLE,
            tab_index: None,
        }
    }

    /// Returns a copy with `flags` added.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Returns a copy with the given tab index.
    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Default focusable filter: flagged focusable and not removed from tab order.
    pub fn is_default_focusable(&self) -> bool {
        self.flags.contains(ElementFlags::FOCUSABLE) && self.tab_index.is_none_or(|t| t >= 0)
    }

    /// Default skip filter: disabled, skip-marked, or hidden.
    pub fn is_default_skipped(&self) -> bool {
        self.flags
            .intersects(ElementFlags::DISABLED | ElementFlags::SKIP | ElementFlags::HIDDEN)
    }
}
