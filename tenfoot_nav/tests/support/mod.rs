// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the navigator integration tests.

#![allow(dead_code, reason = "not every test binary uses every fixture")]

use std::collections::HashMap;

use kurbo::Rect;
use tenfoot_nav::{Cue, FrameScheduler, Host, NavConfig, NavEvent, Navigator, SyntheticKey};
use tenfoot_scene::{NodeId, Scene, SceneNode};
use tenfoot_focus::{ElementFlags, ElementKind};

/// Something the navigator asked the host to do.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
    Focus(NodeId),
    Scroll(NodeId),
    Shake(NodeId),
    Click(NodeId),
    Key(NodeId, SyntheticKey),
    Dismiss(NodeId),
    Cue(Cue),
    Keyboard(bool, Option<NodeId>),
    Help(bool),
    Status(String),
    Breadcrumb(String),
}

/// Host that records every request.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) calls: Vec<Call>,
    pub(crate) events: Vec<NavEvent<NodeId>>,
    pub(crate) frames_requested: usize,
    pub(crate) frames_cancelled: usize,
    pub(crate) accept_dismiss: bool,
    pub(crate) keyboard_root: Option<NodeId>,
    pub(crate) help_root: Option<NodeId>,
    /// Labels offered for breadcrumbs, by context or element.
    pub(crate) titles: HashMap<NodeId, String>,
}

impl RecordingHost {
    pub(crate) fn cues(&self) -> Vec<Cue> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Cue(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn last_cue(&self) -> Option<Cue> {
        self.cues().last().copied()
    }

    pub(crate) fn clicks(&self) -> Vec<NodeId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Click(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn breadcrumbs(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Breadcrumb(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn has(&self, call: &Call) -> bool {
        self.calls.contains(call)
    }

    pub(crate) fn clear(&mut self) {
        self.calls.clear();
        self.events.clear();
    }
}

impl FrameScheduler for RecordingHost {
    fn request_frame(&mut self) {
        self.frames_requested += 1;
    }

    fn cancel_frame(&mut self) {
        self.frames_cancelled += 1;
    }
}

impl Host<NodeId> for RecordingHost {
    fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    fn focus_element(&mut self, id: NodeId) {
        self.calls.push(Call::Focus(id));
    }

    fn scroll_into_view(&mut self, id: NodeId) {
        self.calls.push(Call::Scroll(id));
    }

    fn shake(&mut self, id: NodeId) {
        self.calls.push(Call::Shake(id));
    }

    fn click(&mut self, id: NodeId) {
        self.calls.push(Call::Click(id));
    }

    fn dispatch_key(&mut self, id: NodeId, key: SyntheticKey) {
        self.calls.push(Call::Key(id, key));
    }

    fn dismiss(&mut self, root: NodeId) -> bool {
        self.calls.push(Call::Dismiss(root));
        self.accept_dismiss
    }

    fn play_cue(&mut self, cue: Cue) {
        self.calls.push(Call::Cue(cue));
    }

    fn set_keyboard_visible(&mut self, visible: bool, target: Option<NodeId>) {
        self.calls.push(Call::Keyboard(visible, target));
    }

    fn set_help_visible(&mut self, visible: bool) {
        self.calls.push(Call::Help(visible));
    }

    fn keyboard_root(&self) -> Option<NodeId> {
        self.keyboard_root
    }

    fn help_root(&self) -> Option<NodeId> {
        self.help_root
    }

    fn show_status(&mut self, text: &str) {
        self.calls.push(Call::Status(text.to_owned()));
    }

    fn set_breadcrumb(&mut self, text: &str) {
        self.calls.push(Call::Breadcrumb(text.to_owned()));
    }

    fn breadcrumb_for(&self, id: NodeId, context: Option<NodeId>) -> Option<String> {
        context
            .and_then(|c| self.titles.get(&c))
            .or_else(|| self.titles.get(&id))
            .cloned()
    }

    fn notify(&mut self, event: NavEvent<NodeId>) {
        self.events.push(event);
    }
}

pub(crate) type TestNavigator = Navigator<NodeId, Scene, RecordingHost>;

/// Page with three buttons laid out as
///
/// ```text
/// A  B
/// C
/// ```
pub(crate) struct Grid {
    pub(crate) page: NodeId,
    pub(crate) a: NodeId,
    pub(crate) b: NodeId,
    pub(crate) c: NodeId,
}

/// Offset that keeps the grid inside the viewport's scroll margin.
const ORIGIN: f64 = 200.0;

pub(crate) fn cell(x: f64, y: f64) -> Rect {
    Rect::from_origin_size((ORIGIN + x, ORIGIN + y), (100.0, 100.0))
}

pub(crate) fn grid(scene: &mut Scene) -> Grid {
    let page = scene.insert(
        None,
        SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 1080.0), ElementFlags::empty()),
    );
    let a = scene.insert(Some(page), SceneNode::focusable(cell(0.0, 0.0), ElementKind::Button));
    let b = scene.insert(Some(page), SceneNode::focusable(cell(150.0, 0.0), ElementKind::Button));
    let c = scene.insert(Some(page), SceneNode::focusable(cell(0.0, 150.0), ElementKind::Button));
    Grid { page, a, b, c }
}

pub(crate) fn navigator(scene: Scene) -> TestNavigator {
    navigator_with(scene, NavConfig::default(), RecordingHost::default())
}

pub(crate) fn navigator_with(scene: Scene, config: NavConfig, host: RecordingHost) -> TestNavigator {
    Navigator::new(config, scene, host).unwrap()
}
