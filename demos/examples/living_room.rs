// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted session on a media browser home screen.
//!
//! The screen has a top bar, two content rails, a search field backed by the
//! on-screen keyboard, a help overlay and a confirmation dialog. A fake
//! remote control and gamepad drive the navigator, and the host logs every
//! request it receives.
//!
//! Run:
//! - `cargo run -p tenfoot_demos --example living_room`
//! - `RUST_LOG=tenfoot_nav=debug cargo run -p tenfoot_demos --example living_room`

use std::collections::HashMap;

use kurbo::Rect;
use tenfoot_focus::{ElementFlags, ElementKind};
use tenfoot_input::{FrameScheduler, GamepadSnapshot, KeyEvent, Modifiers};
use tenfoot_nav::{Cue, Host, NavConfig, NavEvent, Navigator, SyntheticKey};
use tenfoot_scene::{NodeId, Scene, SceneNode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Host that names elements and logs what the navigator asks for.
#[derive(Debug, Default)]
struct LivingRoom {
    labels: HashMap<NodeId, &'static str>,
    keyboard: Option<NodeId>,
    help: Option<NodeId>,
    frame_pending: bool,
}

impl LivingRoom {
    fn label(&self, id: NodeId) -> &'static str {
        self.labels.get(&id).copied().unwrap_or("?")
    }
}

impl FrameScheduler for LivingRoom {
    fn request_frame(&mut self) {
        self.frame_pending = true;
    }

    fn cancel_frame(&mut self) {
        self.frame_pending = false;
    }
}

impl Host<NodeId> for LivingRoom {
    fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    fn focus_element(&mut self, id: NodeId) {
        info!(element = self.label(id), "focus");
    }

    fn scroll_into_view(&mut self, id: NodeId) {
        info!(element = self.label(id), "scroll into view");
    }

    fn shake(&mut self, id: NodeId) {
        info!(element = self.label(id), "shake");
    }

    fn click(&mut self, id: NodeId) {
        info!(element = self.label(id), "click");
    }

    fn dispatch_key(&mut self, id: NodeId, key: SyntheticKey) {
        info!(element = self.label(id), ?key, "synthetic key");
    }

    fn play_cue(&mut self, cue: Cue) {
        info!(?cue, "cue");
    }

    fn set_keyboard_visible(&mut self, visible: bool, target: Option<NodeId>) {
        info!(visible, target = target.map(|t| self.label(t)), "on-screen keyboard");
    }

    fn set_help_visible(&mut self, visible: bool) {
        info!(visible, "help overlay");
    }

    fn keyboard_root(&self) -> Option<NodeId> {
        self.keyboard
    }

    fn help_root(&self) -> Option<NodeId> {
        self.help
    }

    fn show_status(&mut self, text: &str) {
        info!(text, "status");
    }

    fn set_breadcrumb(&mut self, text: &str) {
        info!(text, "breadcrumb");
    }

    fn breadcrumb_for(&self, id: NodeId, context: Option<NodeId>) -> Option<String> {
        Some(self.label(context.unwrap_or(id)).to_owned())
    }

    fn notify(&mut self, event: NavEvent<NodeId>) {
        if let NavEvent::Navigated { direction, from, to } = event {
            info!(%direction, from = self.label(from), to = self.label(to), "navigated");
        }
    }
}

struct Screen {
    scene: Scene,
    host: LivingRoom,
    dialog: NodeId,
}

fn build_screen() -> Screen {
    let mut scene = Scene::new();
    let mut host = LivingRoom::default();
    let mut add = |scene: &mut Scene, parent: Option<NodeId>, label, node| {
        let id = scene.insert(parent, node);
        host.labels.insert(id, label);
        id
    };

    let bar = add(
        &mut scene,
        None,
        "top bar",
        SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 160.0), ElementFlags::SECTION),
    );
    let tab = |x: f64| Rect::from_origin_size((120.0 + x, 90.0), (160.0, 60.0));
    add(
        &mut scene,
        Some(bar),
        "Home",
        SceneNode::focusable(tab(0.0), ElementKind::Link).with_flags(ElementFlags::HOME),
    );
    add(&mut scene, Some(bar), "Movies", SceneNode::focusable(tab(200.0), ElementKind::Link));
    add(&mut scene, Some(bar), "Shows", SceneNode::focusable(tab(400.0), ElementKind::Link));
    add(
        &mut scene,
        Some(bar),
        "Search",
        SceneNode::focusable(tab(1300.0), ElementKind::TextField),
    );

    let posters = ["Night Train", "Harbor", "Orbit", "Lanterns", "Tides"];
    for (row, (name, titles)) in [("Continue watching", &posters[..3]), ("New releases", &posters[..])]
        .into_iter()
        .enumerate()
    {
        let y = 200.0 + row as f64 * 380.0;
        let rail = add(
            &mut scene,
            None,
            name,
            SceneNode::container(Rect::new(0.0, y, 1920.0, y + 360.0), ElementFlags::SECTION),
        );
        for (col, title) in titles.iter().enumerate() {
            let rect = Rect::from_origin_size((120.0 + col as f64 * 340.0, y + 40.0), (300.0, 280.0));
            add(&mut scene, Some(rail), *title, SceneNode::focusable(rect, ElementKind::Button));
        }
    }

    let keyboard = add(
        &mut scene,
        None,
        "keyboard",
        SceneNode::container(Rect::new(360.0, 600.0, 1560.0, 1000.0), ElementFlags::empty()),
    );
    add(
        &mut scene,
        Some(keyboard),
        "keyboard input",
        SceneNode::focusable(Rect::new(400.0, 620.0, 1520.0, 690.0), ElementKind::TextField)
            .with_flags(ElementFlags::TEXT_ENTRY),
    );
    for (i, letter) in ["Q", "W", "E", "R", "T", "Y"].into_iter().enumerate() {
        let rect = Rect::from_origin_size((400.0 + i as f64 * 110.0, 720.0), (90.0, 90.0));
        add(&mut scene, Some(keyboard), letter, SceneNode::focusable(rect, ElementKind::Button));
    }
    scene.set_shown(keyboard, false);

    let help = add(
        &mut scene,
        None,
        "help",
        SceneNode::container(Rect::new(560.0, 240.0, 1360.0, 840.0), ElementFlags::empty()),
    );
    add(
        &mut scene,
        Some(help),
        "Close help",
        SceneNode::focusable(Rect::new(1160.0, 760.0, 1320.0, 820.0), ElementKind::Button)
            .with_flags(ElementFlags::DISMISS),
    );
    scene.set_shown(help, false);

    let dialog = add(
        &mut scene,
        None,
        "sign-out dialog",
        SceneNode::container(Rect::new(660.0, 340.0, 1260.0, 740.0), ElementFlags::empty()),
    );
    add(
        &mut scene,
        Some(dialog),
        "Sign out",
        SceneNode::focusable(Rect::new(700.0, 640.0, 940.0, 710.0), ElementKind::Button),
    );
    add(
        &mut scene,
        Some(dialog),
        "Cancel",
        SceneNode::focusable(Rect::new(980.0, 640.0, 1220.0, 710.0), ElementKind::Button)
            .with_flags(ElementFlags::DISMISS),
    );
    scene.set_shown(dialog, false);

    host.keyboard = Some(keyboard);
    host.help = Some(help);
    Screen { scene, host, dialog }
}

/// Milliseconds between scripted key presses, slower than the navigation delay.
const KEY_GAP: u64 = 250;

fn press(nav: &mut Navigator<NodeId, Scene, LivingRoom>, name: &str, now: &mut u64) {
    *now += KEY_GAP;
    let intent = nav.on_key_down(&KeyEvent::named(name, Modifiers::empty()), *now);
    let focus = nav.current().map(|id| nav.host().label(id));
    info!(key = name, ?intent, focus, "key");
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match NavConfig::from_toml_str("axis_deadzone = 0.35\nhistory_capacity = 10\n") {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let Screen { scene, host, dialog } = build_screen();
    let (keyboard, help) = (host.keyboard, host.help);
    let mut nav = match Navigator::new(config, scene, host) {
        Ok(nav) => nav,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    nav.start();
    let mut now = 0;

    // Browse with the remote.
    for key in ["ArrowDown", "ArrowRight", "ArrowRight", "ArrowDown", "ArrowLeft", "Backspace"] {
        press(&mut nav, key, &mut now);
    }
    press(&mut nav, "PageDown", &mut now);
    press(&mut nav, "PageUp", &mut now);
    press(&mut nav, "Home", &mut now);

    // Type into search. The host shows the keyboard before the navigator scopes to it.
    if let Some(keyboard) = keyboard {
        nav.source_mut().set_shown(keyboard, true);
    }
    if nav.set_focus_by(|_, info| info.kind == ElementKind::TextField) {
        press(&mut nav, "Enter", &mut now);
        press(&mut nav, "ArrowDown", &mut now);
        press(&mut nav, "ArrowUp", &mut now);
        press(&mut nav, "Escape", &mut now);
    }
    if let Some(keyboard) = keyboard {
        nav.source_mut().set_shown(keyboard, false);
    }

    // Help overlay.
    if let Some(help) = help {
        nav.source_mut().set_shown(help, true);
        press(&mut nav, "F1", &mut now);
        press(&mut nav, "Escape", &mut now);
        nav.source_mut().set_shown(help, false);
    }

    // A gamepad takes over: hold the stick right for half a second, then press A.
    nav.on_gamepad_connected(0);
    let held = GamepadSnapshot {
        buttons: &[],
        axes: &[0.8, 0.0],
    };
    let moves: usize = (0..30).map(|_| nav.on_frame(Some(&held)).len()).sum();
    info!(frames = 30, moves, "stick held");
    let released = GamepadSnapshot {
        buttons: &[true],
        axes: &[0.0, 0.0],
    };
    nav.on_frame(Some(&released));

    // A modal dialog appears and "back" asks it to close.
    nav.source_mut().set_shown(dialog, true);
    nav.open_trap(dialog, now);
    press(&mut nav, "ArrowRight", &mut now);
    press(&mut nav, "ArrowRight", &mut now);
    press(&mut nav, "Escape", &mut now);
    nav.source_mut().set_shown(dialog, false);
    nav.close_trap(dialog);
    nav.tick(now + 50);
    if nav.tick(now + 150) {
        info!("refreshed after dialog closed");
    }

    let alt_m = KeyEvent::named("m", Modifiers::ALT);
    nav.on_key_down(&alt_m, now + 400);
    info!(audio = nav.is_audio_enabled(), history = nav.history().len(), "session done");
    nav.shutdown();
}
