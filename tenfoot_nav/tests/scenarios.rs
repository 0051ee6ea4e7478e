// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigator behavior over a [`Scene`].

mod support;

use kurbo::Rect;
use support::{Call, RecordingHost, cell, grid, navigator, navigator_with};
use tenfoot_nav::{
    BackAction, Cue, Direction, DismissAction, ElementFlags, ElementKind, GamepadSnapshot, Intent,
    Key, KeyEvent, Mode, Modifiers, NavConfig, NavError, NavEvent, OverlayKind, SyntheticKey,
};
use tenfoot_scene::{NodeId, Scene, SceneNode};

fn key(name: &str) -> KeyEvent {
    KeyEvent::named(name, Modifiers::empty())
}

fn button(scene: &mut Scene, parent: NodeId, rect: Rect) -> NodeId {
    scene.insert(Some(parent), SceneNode::focusable(rect, ElementKind::Button))
}

fn dialog(scene: &mut Scene, rect: Rect) -> NodeId {
    scene.insert(None, SceneNode::container(rect, ElementFlags::empty()))
}

#[test]
fn grid_moves_follow_geometry() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    assert_eq!(nav.current(), Some(g.a));

    assert_eq!(nav.navigate(Direction::Right), Ok(g.b));
    assert!(nav.host().events.contains(&NavEvent::Navigated {
        direction: Direction::Right,
        from: g.a,
        to: g.b,
    }));
    assert_eq!(nav.host().last_cue(), Some(Cue::Navigation));

    assert_eq!(nav.navigate(Direction::Left), Ok(g.a));
    assert_eq!(nav.navigate(Direction::Down), Ok(g.c));
    assert_eq!(nav.host().calls.last(), Some(&Call::Cue(Cue::Navigation)));
}

#[test]
fn blocked_move_shakes_and_keeps_focus() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();

    assert_eq!(nav.navigate(Direction::Up), Err(NavError::NoTarget));
    assert_eq!(nav.current(), Some(g.a));
    assert!(nav.host().has(&Call::Shake(g.a)));
    assert_eq!(nav.host().last_cue(), Some(Cue::Error));
}

#[test]
fn arrow_keys_drive_navigation() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();

    assert_eq!(
        nav.on_key_down(&key("ArrowRight"), 0),
        Some(Intent::Navigate(Direction::Right))
    );
    assert_eq!(nav.current(), Some(g.b));
    assert_eq!(nav.on_key_down(&key("Enter"), 10), Some(Intent::Activate));
    assert_eq!(nav.host().clicks(), [g.b]);
    assert_eq!(nav.on_key_down(&key("Tab"), 20), None);
}

#[test]
fn held_arrow_key_moves_once_per_delay_window() {
    let mut scene = Scene::new();
    let row = scene.insert(
        None,
        SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 1080.0), ElementFlags::empty()),
    );
    let tiles: Vec<NodeId> = (0..12)
        .map(|i| {
            let rect = Rect::from_origin_size((100.0 + i as f64 * 140.0, 400.0), (120.0, 120.0));
            button(&mut scene, row, rect)
        })
        .collect();
    let mut nav = navigator(scene);
    nav.start();
    assert_eq!(nav.current(), Some(tiles[0]));

    // Ten auto-repeats 15 ms apart all map to a move, but only the first lands.
    for i in 0..10 {
        assert_eq!(
            nav.on_key_down(&key("ArrowRight"), 1_000 + i * 15),
            Some(Intent::Navigate(Direction::Right))
        );
    }
    assert_eq!(nav.current(), Some(tiles[1]));

    // Keep holding: one more step for every 200 ms window.
    for i in 0..28 {
        nav.on_key_down(&key("ArrowRight"), 1_150 + i * 30);
    }
    // Admitted at 1000, 1210, 1420, 1630 and 1840.
    assert_eq!(nav.current(), Some(tiles[5]));

    // Other keys are never held back.
    assert_eq!(nav.on_key_down(&key("Enter"), 1_970), Some(Intent::Activate));
    assert_eq!(nav.host().clicks(), [tiles[5]]);

    let config = NavConfig {
        navigation_delay_ms: 0,
        ..NavConfig::default()
    };
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator_with(scene, config, RecordingHost::default());
    nav.start();
    nav.on_key_down(&key("ArrowRight"), 0);
    nav.on_key_down(&key("ArrowLeft"), 0);
    nav.on_key_down(&key("ArrowDown"), 0);
    assert_eq!(nav.current(), Some(g.c));
}

#[test]
fn trap_confines_navigation_to_its_scope() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let modal = dialog(&mut scene, Rect::new(800.0, 200.0, 1200.0, 600.0));
    let d = button(&mut scene, modal, Rect::new(850.0, 250.0, 950.0, 350.0));
    let mut nav = navigator(scene);
    nav.start();
    assert_eq!(nav.current(), Some(g.a));

    assert!(nav.open_trap(modal, 1_000));
    assert_eq!(nav.mode(), Mode::Trapped);
    assert_eq!(nav.current(), Some(d));
    assert_eq!(nav.candidates().len(), 1);

    assert_eq!(nav.navigate(Direction::Right), Err(NavError::NoTarget));
    assert_eq!(nav.navigate(Direction::Left), Err(NavError::NoTarget));
    assert_eq!(nav.current(), Some(d));
    assert!(nav.host().has(&Call::Shake(d)));
    assert_eq!(nav.host().last_cue(), Some(Cue::Error));
    assert!(!nav.set_focus(g.b));

    assert!(nav.close_trap(modal));
    assert_eq!(nav.mode(), Mode::Idle);
    assert_eq!(nav.current(), Some(g.a));
    assert!(!nav.close_trap(modal));
}

#[test]
fn opening_a_trap_twice_is_rejected() {
    let mut scene = Scene::new();
    grid(&mut scene);
    let modal = dialog(&mut scene, Rect::new(800.0, 200.0, 1200.0, 600.0));
    button(&mut scene, modal, Rect::new(850.0, 250.0, 950.0, 350.0));
    let mut nav = navigator(scene);
    nav.start();

    assert!(nav.open_trap(modal, 0));
    assert!(!nav.open_trap(modal, 5));
    assert_eq!(nav.traps().len(), 1);
}

#[test]
fn closing_a_lower_trap_keeps_focus_in_the_top_one() {
    let mut scene = Scene::new();
    grid(&mut scene);
    let first = dialog(&mut scene, Rect::new(800.0, 200.0, 1200.0, 400.0));
    let d1 = button(&mut scene, first, Rect::new(850.0, 250.0, 950.0, 350.0));
    let second = dialog(&mut scene, Rect::new(800.0, 500.0, 1200.0, 700.0));
    let d2 = button(&mut scene, second, Rect::new(850.0, 550.0, 950.0, 650.0));
    let mut nav = navigator(scene);
    nav.start();

    nav.open_trap(first, 0);
    assert_eq!(nav.current(), Some(d1));
    nav.open_trap(second, 10);
    assert_eq!(nav.current(), Some(d2));

    assert!(nav.close_trap(first));
    assert_eq!(nav.current(), Some(d2));
    assert_eq!(nav.traps().top().map(|t| t.scope_root), Some(second));

    assert!(nav.close_trap(second));
    assert_eq!(nav.current(), Some(d1));
    assert!(nav.traps().is_empty());
}

#[test]
fn back_walks_history_most_recent_first() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();

    nav.navigate(Direction::Right).unwrap();
    nav.navigate(Direction::Left).unwrap();
    assert_eq!(nav.current(), Some(g.a));

    assert_eq!(nav.back(), Ok(BackAction::Restored(g.b)));
    assert_eq!(nav.current(), Some(g.b));
    assert!(nav.host().events.contains(&NavEvent::Ready));
    assert!(nav.host().events.contains(&NavEvent::BackRequested));

    assert_eq!(nav.back(), Ok(BackAction::Restored(g.a)));
    assert_eq!(nav.back(), Err(NavError::NoTarget));
    assert_eq!(nav.current(), Some(g.a));
    assert_eq!(nav.host().last_cue(), Some(Cue::Error));
}

#[test]
fn back_skips_history_entries_that_disappeared() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();

    nav.navigate(Direction::Right).unwrap();
    nav.navigate(Direction::Down).unwrap();
    assert_eq!(nav.current(), Some(g.c));

    nav.source_mut().remove(g.b);
    assert_eq!(nav.back(), Ok(BackAction::Restored(g.a)));
    assert!(nav.history().is_empty());
}

#[test]
fn back_without_history_clicks_back_element() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let back = scene.insert(
        Some(g.page),
        SceneNode::focusable(cell(300.0, 0.0), ElementKind::Link).with_flags(ElementFlags::BACK),
    );
    let mut nav = navigator(scene);
    nav.start();

    assert_eq!(nav.back(), Ok(BackAction::ClickedBack(back)));
    assert_eq!(nav.host().clicks(), [back]);
    assert_eq!(nav.host().last_cue(), Some(Cue::Select));
}

#[test]
fn held_stick_moves_once() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    assert!(nav.is_polling());
    nav.on_gamepad_connected(0);

    let held = GamepadSnapshot {
        buttons: &[],
        axes: &[0.9, 0.0],
    };
    let moved: usize = (0..60).map(|_| nav.on_frame(Some(&held)).len()).sum();
    assert_eq!(moved, 1);
    assert_eq!(nav.current(), Some(g.b));
    assert!(nav.host().frames_requested > 60);
}

#[test]
fn gamepad_button_activates_until_disconnect() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    nav.on_gamepad_connected(0);
    assert!(nav.host().has(&Call::Status("Controller connected".into())));

    let pressed = GamepadSnapshot {
        buttons: &[true],
        axes: &[],
    };
    assert_eq!(nav.on_frame(Some(&pressed)).as_slice(), [Intent::Activate]);
    assert!(nav.on_frame(Some(&pressed)).is_empty());
    assert_eq!(nav.host().clicks(), [g.a]);

    assert!(nav.on_gamepad_disconnected(0));
    assert!(nav.on_frame(Some(&pressed)).is_empty());
}

#[test]
fn hidden_focus_is_repaired_after_debounce() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    nav.navigate(Direction::Right).unwrap();

    nav.source_mut().set_shown(g.b, false);
    assert!(!nav.tick(0));
    assert!(!nav.tick(50));
    assert_eq!(nav.current(), Some(g.b));
    assert!(nav.tick(100));
    assert_eq!(nav.current(), Some(g.a));
    assert_eq!(nav.host().events.last(), Some(&NavEvent::FocusChanged(g.a)));
    assert!(!nav.tick(200));
}

#[test]
fn navigating_from_removed_focus_reports_stale() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    nav.navigate(Direction::Down).unwrap();

    nav.source_mut().remove(g.c);
    assert_eq!(nav.navigate(Direction::Right), Err(NavError::StaleFocus));
    assert_eq!(nav.current(), Some(g.a));
    assert_eq!(nav.navigate(Direction::Right), Ok(g.b));
}

#[test]
fn unregistering_focus_moves_it() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();

    assert!(nav.unregister_focusable(g.a));
    assert_eq!(nav.current(), Some(g.b));
    assert!(nav.candidates().iter().all(|c| c.id != g.a));
    assert!(!nav.set_focus(g.a));

    assert!(nav.register_focusable(g.a));
    assert!(nav.set_focus(g.a));
}

#[test]
fn registration_makes_containers_focusable() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let tile = scene.insert(
        Some(g.page),
        SceneNode::container(cell(300.0, 0.0), ElementFlags::empty()),
    );
    let mut nav = navigator(scene);
    nav.start();
    nav.navigate(Direction::Right).unwrap();
    assert_eq!(nav.navigate(Direction::Right), Err(NavError::NoTarget));

    nav.register_focusable(tile);
    assert_eq!(nav.navigate(Direction::Right), Ok(tile));
}

#[test]
fn empty_page_reports_errors() {
    let mut scene = Scene::new();
    scene.insert(
        None,
        SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 1080.0), ElementFlags::empty()),
    );
    let mut nav = navigator(scene);
    nav.start();

    assert_eq!(nav.current(), None);
    assert_eq!(nav.navigate(Direction::Right), Err(NavError::NoTarget));
    assert_eq!(nav.host().last_cue(), Some(Cue::Error));
    nav.host_mut().clear();
    assert_eq!(nav.activate(), Err(NavError::NoTarget));
    assert_eq!(nav.host().cues(), [Cue::Error]);
    assert_eq!(nav.home(), Err(NavError::EmptyCandidateSet));
    assert_eq!(nav.navigate_section(true), Err(NavError::NoTarget));
}

#[test]
fn late_content_is_focused_on_first_move() {
    let mut nav = navigator(Scene::new());
    nav.start();
    assert_eq!(nav.current(), None);

    let g = grid(nav.source_mut());
    assert_eq!(nav.navigate(Direction::Down), Ok(g.a));
}

#[test]
fn dismissal_strategies_run_in_configured_order() {
    let mut scene = Scene::new();
    grid(&mut scene);
    let modal = dialog(&mut scene, Rect::new(800.0, 200.0, 1200.0, 600.0));
    button(&mut scene, modal, Rect::new(850.0, 250.0, 950.0, 350.0));
    let close = scene.insert(
        Some(modal),
        SceneNode::focusable(Rect::new(1000.0, 250.0, 1100.0, 350.0), ElementKind::Button)
            .with_flags(ElementFlags::DISMISS),
    );

    let mut nav = navigator(scene.clone());
    nav.start();
    nav.open_trap(modal, 0);
    assert_eq!(
        nav.back(),
        Ok(BackAction::DismissedTrap {
            root: modal,
            via: DismissAction::Button,
        })
    );
    let calls = &nav.host().calls;
    let api = calls.iter().position(|c| *c == Call::Dismiss(modal));
    let click = calls.iter().position(|c| *c == Call::Click(close));
    assert!(api.is_some() && click.is_some() && api < click);
    assert_eq!(nav.traps().len(), 1);

    let host = RecordingHost {
        accept_dismiss: true,
        ..RecordingHost::default()
    };
    let mut nav = navigator_with(scene.clone(), NavConfig::default(), host);
    nav.start();
    nav.open_trap(modal, 0);
    assert_eq!(
        nav.back(),
        Ok(BackAction::DismissedTrap {
            root: modal,
            via: DismissAction::Api,
        })
    );
    assert!(nav.host().clicks().is_empty());

    let config = NavConfig {
        dismiss_order: vec![DismissAction::CancelKey],
        ..NavConfig::default()
    };
    let mut nav = navigator_with(scene.clone(), config, RecordingHost::default());
    nav.start();
    nav.open_trap(modal, 0);
    nav.back().unwrap();
    assert!(nav.host().has(&Call::Key(modal, SyntheticKey::Escape)));

    let config = NavConfig {
        dismiss_order: vec![DismissAction::Api],
        ..NavConfig::default()
    };
    let mut nav = navigator_with(scene, config, RecordingHost::default());
    nav.start();
    nav.open_trap(modal, 0);
    assert_eq!(nav.back(), Err(NavError::NoTarget));
    assert_eq!(nav.host().last_cue(), Some(Cue::Error));
}

struct KeyboardPage {
    field: NodeId,
    keyboard: NodeId,
    input: NodeId,
    key_q: NodeId,
}

fn keyboard_page(scene: &mut Scene) -> KeyboardPage {
    let g = grid(scene);
    let field = scene.insert(
        Some(g.page),
        SceneNode::focusable(cell(300.0, 0.0), ElementKind::TextField),
    );
    let keyboard = dialog(scene, Rect::new(200.0, 600.0, 1700.0, 1000.0));
    let input = scene.insert(
        Some(keyboard),
        SceneNode::focusable(Rect::new(250.0, 620.0, 1650.0, 680.0), ElementKind::TextField)
            .with_flags(ElementFlags::TEXT_ENTRY),
    );
    let key_q = button(scene, keyboard, Rect::new(250.0, 700.0, 330.0, 780.0));
    button(scene, keyboard, Rect::new(350.0, 700.0, 430.0, 780.0));
    KeyboardPage {
        field,
        keyboard,
        input,
        key_q,
    }
}

#[test]
fn keyboard_overlay_suppresses_editing_keys() {
    let mut scene = Scene::new();
    let page = keyboard_page(&mut scene);
    let host = RecordingHost {
        keyboard_root: Some(page.keyboard),
        ..RecordingHost::default()
    };
    let mut nav = navigator_with(scene, NavConfig::default(), host);
    nav.start();

    assert!(nav.set_focus(page.field));
    assert_eq!(nav.activate(), Ok(page.field));
    assert_eq!(nav.mode(), Mode::KeyboardOverlay);
    assert_eq!(nav.current(), Some(page.input));
    assert!(nav.text_entry_active());
    assert!(nav.host().has(&Call::Keyboard(true, Some(page.field))));
    assert!(nav.host().events.contains(&NavEvent::KeyboardShown));
    assert_eq!(nav.host().cues(), [Cue::Select]);

    assert_eq!(nav.on_key_down(&key("ArrowDown"), 0), None);
    assert_eq!(nav.on_key_down(&key("Enter"), 0), None);
    assert_eq!(nav.on_key_down(&key("Backspace"), 0), None);
    assert_eq!(nav.current(), Some(page.input));

    assert!(!nav.set_focus(page.field));
    assert!(nav.set_focus(page.key_q));
    assert!(!nav.text_entry_active());
    assert_eq!(
        nav.on_key_down(&key("ArrowUp"), 0),
        Some(Intent::Navigate(Direction::Up))
    );
    assert_eq!(nav.current(), Some(page.input));

    assert_eq!(nav.on_key_down(&key("Escape"), 0), Some(Intent::Back));
    assert_eq!(nav.mode(), Mode::Idle);
    assert_eq!(nav.current(), Some(page.field));
    assert!(nav.host().has(&Call::Keyboard(false, None)));
    assert!(nav.host().events.contains(&NavEvent::KeyboardHidden));
    assert_eq!(nav.host().last_cue(), Some(Cue::Navigation));
}

#[test]
fn keyboard_toggle_needs_a_host_keyboard() {
    let mut scene = Scene::new();
    keyboard_page(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    assert!(!nav.toggle_keyboard());
    assert_eq!(nav.mode(), Mode::Idle);
    assert!(nav.host().cues().is_empty());

    let config = NavConfig {
        enable_keyboard: false,
        ..NavConfig::default()
    };
    let mut scene = Scene::new();
    let page = keyboard_page(&mut scene);
    let host = RecordingHost {
        keyboard_root: Some(page.keyboard),
        ..RecordingHost::default()
    };
    let mut nav = navigator_with(scene, config, host);
    nav.start();
    assert!(!nav.show_keyboard(None));
}

#[test]
fn help_overlay_focuses_close_and_restores() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let help = dialog(&mut scene, Rect::new(600.0, 500.0, 1200.0, 900.0));
    button(&mut scene, help, Rect::new(650.0, 550.0, 750.0, 650.0));
    let close = scene.insert(
        Some(help),
        SceneNode::focusable(Rect::new(800.0, 550.0, 900.0, 650.0), ElementKind::Button)
            .with_flags(ElementFlags::DISMISS),
    );
    let host = RecordingHost {
        help_root: Some(help),
        ..RecordingHost::default()
    };
    let mut nav = navigator_with(scene, NavConfig::default(), host);
    nav.start();
    nav.navigate(Direction::Right).unwrap();

    assert_eq!(nav.on_key_down(&key("F1"), 0), Some(Intent::ToggleHelp));
    assert_eq!(nav.mode(), Mode::HelpOverlay);
    assert_eq!(nav.current(), Some(close));
    assert!(nav.host().has(&Call::Help(true)));

    assert_eq!(
        nav.back(),
        Ok(BackAction::ClosedOverlay(OverlayKind::Help))
    );
    assert_eq!(nav.current(), Some(g.b));
    assert_eq!(nav.host().last_cue(), Some(Cue::Back));
    assert!(nav.host().has(&Call::Help(false)));
}

#[test]
fn sections_cycle_with_page_keys() {
    let mut scene = Scene::new();
    let top = scene.insert(
        None,
        SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 500.0), ElementFlags::SECTION),
    );
    let s1 = button(&mut scene, top, Rect::new(200.0, 200.0, 300.0, 300.0));
    button(&mut scene, top, Rect::new(350.0, 200.0, 450.0, 300.0));
    let bottom = scene.insert(
        None,
        SceneNode::container(Rect::new(0.0, 500.0, 1920.0, 1000.0), ElementFlags::SECTION),
    );
    let s2 = button(&mut scene, bottom, Rect::new(200.0, 600.0, 300.0, 700.0));
    let mut nav = navigator(scene);
    nav.start();
    assert_eq!(nav.current(), Some(s1));

    assert_eq!(nav.on_key_down(&key("PageDown"), 0), Some(Intent::PageDown));
    assert_eq!(nav.current(), Some(s2));
    assert!(nav.host().has(&Call::Breadcrumb("Section 2".into())));

    assert_eq!(nav.navigate_section(true), Ok(s1));
    assert!(nav.host().has(&Call::Breadcrumb("Section 1".into())));
    assert_eq!(nav.navigate_section(false), Ok(s2));
    assert_eq!(nav.back(), Ok(BackAction::Restored(s1)));
}

#[test]
fn home_prefers_designated_element() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let home = scene.insert(
        Some(g.page),
        SceneNode::focusable(cell(300.0, 150.0), ElementKind::Link).with_flags(ElementFlags::HOME),
    );
    let mut nav = navigator(scene);
    nav.start();
    nav.navigate(Direction::Right).unwrap();

    assert_eq!(nav.on_key_down(&key("Home"), 0), Some(Intent::Home));
    assert_eq!(nav.current(), Some(home));
    assert_eq!(nav.host().last_cue(), Some(Cue::Home));
    assert!(nav.host().has(&Call::Breadcrumb("Home".into())));
    assert!(nav.host().events.contains(&NavEvent::HomeRequested));
}

#[test]
fn breadcrumb_follows_the_focused_context() {
    let mut scene = Scene::new();
    let rail = scene.insert(
        None,
        SceneNode::container(Rect::new(0.0, 0.0, 1920.0, 500.0), ElementFlags::SECTION),
    );
    let poster = button(&mut scene, rail, Rect::new(200.0, 200.0, 300.0, 300.0));
    let settings = scene.insert(
        None,
        SceneNode::focusable(Rect::new(200.0, 600.0, 300.0, 700.0), ElementKind::Button),
    );
    let modal = dialog(&mut scene, Rect::new(800.0, 200.0, 1200.0, 600.0));
    let confirm = button(&mut scene, modal, Rect::new(850.0, 250.0, 950.0, 350.0));
    let mut titles = std::collections::HashMap::new();
    titles.insert(rail, "Continue watching".to_owned());
    titles.insert(settings, "Settings".to_owned());
    titles.insert(modal, "Sign out?".to_owned());
    let host = RecordingHost {
        titles: titles.clone(),
        ..RecordingHost::default()
    };
    let mut nav = navigator_with(scene.clone(), NavConfig::default(), host);
    nav.start();
    assert_eq!(nav.current(), Some(poster));
    assert_eq!(nav.host().breadcrumbs(), ["Continue watching"]);

    assert_eq!(nav.navigate(Direction::Down), Ok(settings));
    assert_eq!(nav.host().breadcrumbs().last(), Some(&"Settings"));

    nav.open_trap(modal, 0);
    assert_eq!(nav.current(), Some(confirm));
    assert_eq!(nav.host().breadcrumbs().last(), Some(&"Sign out?"));

    nav.close_trap(modal);
    assert_eq!(nav.current(), Some(settings));
    assert_eq!(nav.host().breadcrumbs().last(), Some(&"Settings"));

    let config = NavConfig {
        enable_breadcrumbs: false,
        ..NavConfig::default()
    };
    let host = RecordingHost {
        titles,
        ..RecordingHost::default()
    };
    let mut nav = navigator_with(scene, config, host);
    nav.start();
    nav.navigate(Direction::Down).unwrap();
    nav.home().unwrap();
    assert!(nav.host().breadcrumbs().is_empty());
}

#[test]
fn home_falls_back_to_first_candidate() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();
    nav.navigate(Direction::Down).unwrap();

    assert_eq!(nav.home(), Ok(g.a));
    assert_eq!(nav.host().last_cue(), Some(Cue::Navigation));
}

#[test]
fn activation_depends_on_kind() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let picker = scene.insert(
        Some(g.page),
        SceneNode::focusable(cell(300.0, 0.0), ElementKind::Select),
    );
    let mut nav = navigator(scene);
    nav.start();

    assert_eq!(nav.activate(), Ok(g.a));
    assert_eq!(nav.host().clicks(), [g.a]);
    assert!(nav.host().events.contains(&NavEvent::Activated(g.a)));

    nav.set_focus(picker);
    nav.host_mut().clear();
    assert_eq!(nav.activate(), Ok(picker));
    assert!(nav.host().clicks().is_empty());
    assert!(nav.host().has(&Call::Key(picker, SyntheticKey::Enter)));
    assert_eq!(nav.host().last_cue(), Some(Cue::Select));
}

#[test]
fn focus_requests_respect_eligibility() {
    let mut scene = Scene::new();
    let g = grid(&mut scene);
    let hidden = scene.insert(
        Some(g.page),
        SceneNode::focusable(cell(300.0, 0.0), ElementKind::Button).hidden(),
    );
    let disabled = scene.insert(
        Some(g.page),
        SceneNode::focusable(cell(300.0, 150.0), ElementKind::Button)
            .with_flags(ElementFlags::DISABLED),
    );
    let mut nav = navigator(scene);
    nav.start();

    assert_eq!(nav.try_set_focus(hidden), Err(NavError::InvisibleFocusRequest));
    assert_eq!(nav.try_set_focus(disabled), Err(NavError::InvisibleFocusRequest));
    assert_eq!(nav.current(), Some(g.a));

    assert!(!nav.set_focus_by(|_, info| info.kind == ElementKind::Toggle));
    assert!(nav.set_focus_by(|id, _| id == g.c));
    assert_eq!(nav.current(), Some(g.c));
    assert_eq!(nav.history().peek(), Some(g.a));

    assert!(nav.on_platform_focus(g.b));
    assert_eq!(nav.history().len(), 1);
    assert!(!nav.on_platform_focus(hidden));
}

#[test]
fn audio_toggle_silences_cues() {
    let mut scene = Scene::new();
    grid(&mut scene);
    let mut nav = navigator(scene);
    nav.start();

    let alt_m = KeyEvent::new(Key::Character('m')).with_modifiers(Modifiers::ALT);
    assert_eq!(nav.on_key_down(&alt_m, 0), Some(Intent::ToggleAudio));
    assert!(!nav.is_audio_enabled());
    assert!(nav.host().has(&Call::Status("Audio disabled".into())));
    assert!(nav.host().events.contains(&NavEvent::AudioToggled(false)));

    nav.host_mut().clear();
    nav.navigate(Direction::Right).unwrap();
    assert!(nav.navigate(Direction::Right).is_err());
    assert!(nav.host().cues().is_empty());

    assert!(nav.toggle_audio());
}

#[test]
fn shutdown_releases_everything() {
    let mut scene = Scene::new();
    grid(&mut scene);
    let modal = dialog(&mut scene, Rect::new(800.0, 200.0, 1200.0, 600.0));
    button(&mut scene, modal, Rect::new(850.0, 250.0, 950.0, 350.0));
    let mut nav = navigator(scene);
    nav.start();
    nav.on_gamepad_connected(0);
    nav.navigate(Direction::Right).unwrap();
    nav.open_trap(modal, 0);
    nav.notify_content_changed(0);

    nav.shutdown();
    assert!(!nav.is_started());
    assert!(!nav.is_polling());
    assert_eq!(nav.host().frames_cancelled, 1);
    assert_eq!(nav.current(), None);
    assert!(nav.traps().is_empty());
    assert!(nav.history().is_empty());
    assert!(!nav.tick(1_000));

    let pressed = GamepadSnapshot {
        buttons: &[true],
        axes: &[],
    };
    assert!(nav.on_frame(Some(&pressed)).is_empty());

    nav.shutdown();
    assert_eq!(nav.host().frames_cancelled, 1);
}

#[test]
fn invalid_configuration_is_rejected() {
    let config = NavConfig {
        axis_deadzone: 2.0,
        ..NavConfig::default()
    };
    assert!(
        tenfoot_nav::Navigator::new(config, Scene::new(), RecordingHost::default()).is_err()
    );
}
