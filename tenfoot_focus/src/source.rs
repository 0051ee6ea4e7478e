// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry capability a host injects into the focus engine.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::element::ElementInfo;

/// Read-only view of the host's elements.
///
/// The engine never queries the UI surface directly; everything it knows about
/// element placement, visibility, and nesting comes through this trait. This
/// makes the engine usable headless (see `tenfoot_scene::Scene`) and keeps
/// platform details on the host side.
///
/// All rectangles must share one coordinate space (the viewport).
pub trait GeometrySource<K>
where
    K: Copy + Eq,
{
    /// Every element the host knows about, in document order.
    ///
    /// The focus registry applies focusable and skip predicates on top of this
    /// list, so it may contain containers and non-interactive elements.
    fn elements(&self) -> Vec<K>;

    /// Bounds of `id` in viewport coordinates, or `None` if it no longer exists.
    fn rect_of(&self, id: K) -> Option<Rect>;

    /// Whether `id` is currently rendered and perceivable.
    fn is_visible(&self, id: K) -> bool;

    /// Kind, flags, and tab order of `id`, or `None` if it no longer exists.
    fn info_of(&self, id: K) -> Option<ElementInfo>;

    /// Parent of `id`, or `None` for roots and removed elements.
    fn parent_of(&self, id: K) -> Option<K>;

    /// Whether `id` is `scope` or nested anywhere inside it.
    fn contains(&self, scope: K, id: K) -> bool {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if node == scope {
                return true;
            }
            cursor = self.parent_of(node);
        }
        false
    }

    /// Monotonic change counter, if the source can provide one.
    ///
    /// Any structural or attribute change (insertions, removals, moves,
    /// visibility or flag flips) must advance the counter. The controller polls
    /// it and coalesces changes into one debounced refresh.
    fn revision(&self) -> Option<u64> {
        None
    }
}
