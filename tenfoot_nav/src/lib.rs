// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tenfoot Nav: a navigation controller for TV and gamepad user interfaces.
//!
//! A [`Navigator`] owns the focused element of one page. It reads element
//! geometry from a [`GeometrySource`], turns keyboard and gamepad input into
//! [`Intent`]s, moves focus with a directional [`FocusPolicy`], and reports
//! everything it wants done (focusing, scrolling, clicking, audio cues) to a
//! [`Host`].
//!
//! It also keeps:
//! - a bounded history that "back" walks through,
//! - a stack of focus traps for modal surfaces,
//! - on-screen keyboard and help overlays,
//! - a debounced refresh that repairs focus when content changes underneath it.
//!
//! The navigator has no clock and no event loop. The host forwards key presses,
//! frame callbacks and gamepad snapshots, and passes timestamps in milliseconds.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Rect;
//! use tenfoot_focus::{Direction, ElementFlags, ElementKind};
//! use tenfoot_input::{FrameScheduler, KeyEvent};
//! use tenfoot_nav::{Host, NavConfig, Navigator};
//! use tenfoot_scene::{NodeId, Scene, SceneNode};
//!
//! struct Screen;
//!
//! impl FrameScheduler for Screen {
//!     fn request_frame(&mut self) {}
//! }
//!
//! impl Host<NodeId> for Screen {
//!     fn viewport(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 1920.0, 1080.0)
//!     }
//! }
//!
//! let mut scene = Scene::new();
//! let page = scene.insert(
//!     None,
//!     SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 1080.0), ElementFlags::empty()),
//! );
//! let a = scene.insert(Some(page), SceneNode::focusable(Rect::new(100.0, 100.0, 300.0, 200.0), ElementKind::Button));
//! let b = scene.insert(Some(page), SceneNode::focusable(Rect::new(400.0, 100.0, 600.0, 200.0), ElementKind::Button));
//!
//! let mut nav = Navigator::new(NavConfig::default(), scene, Screen).unwrap();
//! nav.start();
//! assert_eq!(nav.current(), Some(a));
//!
//! assert_eq!(nav.navigate(Direction::Right), Ok(b));
//! // Key presses carry the host's timestamp in milliseconds.
//! nav.on_key_down(&KeyEvent::named("ArrowLeft", Default::default()), 16);
//! assert_eq!(nav.current(), Some(a));
//! ```

mod config;
mod controller;
mod debounce;
mod error;
mod history;
mod host;

pub use config::{DismissAction, NavConfig};
pub use controller::{BackAction, Mode, Navigator, Overlay, OverlayKind};
pub use debounce::Debouncer;
pub use error::{ConfigError, NavError};
pub use history::NavigationHistory;
pub use host::{Cue, Host, NavEvent, SyntheticKey};

pub use tenfoot_focus::{
    Direction, ElementFlags, ElementInfo, ElementKind, FocusPolicy, GeometrySource, Tuning,
};
pub use tenfoot_input::{FrameScheduler, GamepadSnapshot, Intent, Key, KeyEvent, Modifiers};
