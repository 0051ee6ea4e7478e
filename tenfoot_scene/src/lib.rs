// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Scene: a headless element tree for spatial navigation.
//!
//! A [`Scene`] is a hierarchy of nodes, each with viewport-space bounds, an
//! [`ElementInfo`](tenfoot_focus::ElementInfo) description, and a `shown` flag.
//! It implements [`GeometrySource`](tenfoot_focus::GeometrySource), so it can
//! stand in for a real UI surface: hosts without a retained element tree can
//! mirror their layout into it, and tests can build pages in a few lines.
//!
//! - Node ids are generational ([`NodeId`]); a removed node's id never matches
//!   a later node.
//! - Document order is depth-first pre-order over roots in insertion order.
//! - A node is visible when it and all of its ancestors are shown and its
//!   bounds have a positive width and height.
//! - Every mutation advances the scene's revision counter.
//!
//! ## Not a layout engine
//!
//! Bounds are stored exactly as given, in viewport coordinates. Upstream code
//! computes positions and sizes however it likes and writes the results here.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_focus::{ElementFlags, ElementKind, GeometrySource};
//! use tenfoot_scene::{Scene, SceneNode};
//!
//! let mut scene = Scene::new();
//! let page = scene.insert(None, SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 1080.0), ElementFlags::empty()));
//! let play = scene.insert(Some(page), SceneNode::focusable(Rect::new(100.0, 100.0, 300.0, 180.0), ElementKind::Button));
//!
//! assert_eq!(scene.elements(), vec![page, play]);
//! assert!(scene.is_visible(play));
//!
//! scene.set_shown(page, false);
//! assert!(!scene.is_visible(play));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod types;

pub use scene::Scene;
pub use types::{NodeId, SceneNode};
