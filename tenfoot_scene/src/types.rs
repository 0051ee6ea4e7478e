// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: node identifiers and per-node data.

use kurbo::Rect;
use tenfoot_focus::{ElementFlags, ElementInfo, ElementKind};

/// Identifier for a node in the scene (generational).
///
/// Removing a node bumps the generation of its slot, so an old id never
/// aliases a node inserted later into the same slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Data carried by a scene node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneNode {
    /// Bounds in viewport coordinates. Not relative to the parent.
    pub rect: Rect,
    /// Kind, flags and tab order.
    pub info: ElementInfo,
    /// Whether the node itself is shown. A node is visible only if it and all
    /// its ancestors are shown.
    pub shown: bool,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            rect: Rect::ZERO,
            info: ElementInfo::default(),
            shown: true,
        }
    }
}

impl SceneNode {
    /// A shown node with the given bounds and description.
    pub fn new(rect: Rect, info: ElementInfo) -> Self {
        Self {
            rect,
            info,
            shown: true,
        }
    }

    /// A focusable node of `kind` at `rect`.
    pub fn focusable(rect: Rect, kind: ElementKind) -> Self {
        Self::new(rect, ElementInfo::focusable(kind))
    }

    /// A non-focusable container at `rect` carrying `flags`.
    pub fn container(rect: Rect, flags: ElementFlags) -> Self {
        Self::new(rect, ElementInfo::container(flags))
    }

    /// Returns a copy with `flags` added.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.info.flags |= flags;
        self
    }

    /// Returns a copy that starts hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.shown = false;
        self
    }
}
