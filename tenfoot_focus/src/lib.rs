// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Focus: spatial focus primitives for pointer-less UIs.
//!
//! This crate models "10-foot" focus navigation (TV remotes, game controllers,
//! keyboards) as a combination of:
//! - A **direction vocabulary** ([`Direction`]) for up/down/left/right movement.
//! - A **geometry source** ([`GeometrySource`]) the host implements to describe
//!   where its elements are, whether they are visible, and how they nest.
//! - A **focus registry** ([`FocusRegistry`]) that derives the set of eligible
//!   [`Candidate`]s from a geometry source, honoring focusable and skip
//!   predicates and an optional containing scope.
//! - A **directional resolver** ([`resolve`], [`DirectionalPolicy`]) that picks
//!   the best candidate in a given direction from the current rectangle.
//! - A **focus-trap stack** ([`FocusTrapStack`]) that restricts the candidate
//!   set to the scope of the top-most open modal surface.
//!
//! ## Minimal example
//!
//! Three tiles: one to the right of the origin and one below it.
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_focus::{Candidate, Direction, Tuning, resolve};
//!
//! let current = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let candidates = [
//!     Candidate { id: 'b', rect: Rect::new(150.0, 0.0, 250.0, 100.0) },
//!     Candidate { id: 'c', rect: Rect::new(0.0, 150.0, 100.0, 250.0) },
//! ];
//! let tuning = Tuning::default();
//!
//! assert_eq!(resolve(current, &candidates, Direction::Right, &tuning), Some('b'));
//! assert_eq!(resolve(current, &candidates, Direction::Down, &tuning), Some('c'));
//! // Nothing lies above the origin, so there is no target.
//! assert_eq!(resolve(current, &candidates, Direction::Up, &tuning), None);
//! ```
//!
//! The core types are generic over the element identifier `K`, so callers can use any small,
//! copyable handle (for example `tenfoot_scene::NodeId` or an application-specific id).
//! Geometry is expressed in terms of [`kurbo::Rect`] in viewport coordinates.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod registry;
mod resolve;
mod source;
mod trap;

#[cfg(test)]
mod testing;

pub use element::{ElementFlags, ElementInfo, ElementKind};
pub use registry::{ElementPredicate, FocusRegistry};
pub use resolve::{
    Candidate, DirectionalPolicy, FocusPolicy, Score, Tuning, is_valid_target, resolve, score,
};
pub use source::GeometrySource;
pub use trap::{FocusTrap, FocusTrapStack};

/// Direction of spatial focus navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

/// Axis along which a [`Direction`] travels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` axis.
    Horizontal,
    /// The `y` axis.
    Vertical,
}

impl Direction {
    /// All four directions, in `up, down, left, right` order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The axis this direction travels along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lower-case name, as used in notifications and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
