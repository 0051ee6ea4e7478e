// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation controller.

use std::fmt::Debug;
use std::hash::Hash;

use kurbo::Rect;
use smallvec::SmallVec;
use tenfoot_focus::{
    Candidate, Direction, DirectionalPolicy, ElementFlags, ElementInfo, ElementKind, FocusPolicy,
    FocusRegistry, FocusTrapStack, GeometrySource,
};
use tenfoot_input::{GamepadSnapshot, GamepadState, InputAdapter, Intent, KeyEvent};
use tracing::{debug, trace, warn};

use crate::config::{DismissAction, NavConfig};
use crate::debounce::Debouncer;
use crate::error::{ConfigError, NavError};
use crate::history::NavigationHistory;
use crate::host::{Cue, Host, NavEvent, SyntheticKey};

/// Coarse navigator state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Navigation covers the whole document.
    Idle,
    /// At least one focus trap is open.
    Trapped,
    /// The on-screen keyboard is shown.
    KeyboardOverlay,
    /// The help overlay is shown.
    HelpOverlay,
}

/// Which overlay is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// The on-screen keyboard.
    Keyboard,
    /// The help overlay.
    Help,
}

/// A shown overlay. While present it scopes navigation, ahead of any trap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Overlay<K> {
    /// Which overlay.
    pub kind: OverlayKind,
    /// Root element supplied by the host.
    pub root: K,
    /// Focus when the overlay was shown.
    pub previous_focus: Option<K>,
    /// Text field the keyboard types into.
    pub target: Option<K>,
}

/// What a successful [`Navigator::back`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BackAction<K> {
    /// Closed an overlay.
    ClosedOverlay(OverlayKind),
    /// Asked the top modal surface to close. The host reports the actual close
    /// through [`Navigator::close_trap`].
    DismissedTrap {
        /// Root of the modal surface.
        root: K,
        /// Strategy that was accepted.
        via: DismissAction,
    },
    /// Returned focus to a remembered element.
    Restored(K),
    /// Clicked the designated back element.
    ClickedBack(K),
}

/// Owns focus for one page and turns intents into focus changes.
///
/// The navigator never reads a clock. Time enters only through the `now`
/// arguments of [`on_key_down`](Self::on_key_down), [`open_trap`](Self::open_trap),
/// [`tick`](Self::tick) and [`notify_content_changed`](Self::notify_content_changed),
/// all in milliseconds.
pub struct Navigator<K: Copy, S, H> {
    config: NavConfig,
    source: S,
    host: H,
    policy: Box<dyn FocusPolicy<K>>,
    registry: FocusRegistry<K>,
    traps: FocusTrapStack<K>,
    history: NavigationHistory<K>,
    current: Option<K>,
    overlay: Option<Overlay<K>>,
    input: InputAdapter,
    debounce: Debouncer,
    seen_revision: Option<u64>,
    synced_revision: Option<u64>,
    audio: bool,
    started: bool,
}

impl<K: Copy + Debug, S, H> Debug for Navigator<K, S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("current", &self.current)
            .field("overlay", &self.overlay)
            .field("traps", &self.traps)
            .field("history", &self.history)
            .field("registry", &self.registry)
            .field("audio", &self.audio)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl<K, S, H> Navigator<K, S, H>
where
    K: Copy + Eq + Hash + Debug + 'static,
    S: GeometrySource<K>,
    H: Host<K>,
{
    /// Create a navigator over `source`, reporting to `host`.
    pub fn new(config: NavConfig, source: S, host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut input = InputAdapter::new(
            GamepadState::new(config.axis_deadzone),
            config.navigation_delay_ms,
        );
        input.set_gamepad_enabled(config.enable_gamepad);
        Ok(Self {
            policy: Box::new(DirectionalPolicy {
                tuning: config.tuning(),
            }),
            registry: FocusRegistry::new(),
            traps: FocusTrapStack::new(),
            history: NavigationHistory::new(config.history_capacity),
            current: None,
            overlay: None,
            input,
            debounce: Debouncer::new(config.debounce_ms),
            seen_revision: None,
            synced_revision: None,
            audio: config.enable_audio,
            started: false,
            config,
            source,
            host,
        })
    }

    // --- accessors ---

    /// Active configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The geometry source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable geometry source. Changes are picked up on the next [`tick`](Self::tick)
    /// or navigation request.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Currently focused element.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Coarse state.
    pub fn mode(&self) -> Mode {
        match self.overlay.map(|o| o.kind) {
            Some(OverlayKind::Keyboard) => Mode::KeyboardOverlay,
            Some(OverlayKind::Help) => Mode::HelpOverlay,
            None if !self.traps.is_empty() => Mode::Trapped,
            None => Mode::Idle,
        }
    }

    /// The shown overlay, if any.
    pub fn overlay(&self) -> Option<&Overlay<K>> {
        self.overlay.as_ref()
    }

    /// Open focus traps.
    pub fn traps(&self) -> &FocusTrapStack<K> {
        &self.traps
    }

    /// Focus history.
    pub fn history(&self) -> &NavigationHistory<K> {
        &self.history
    }

    /// Candidates from the last refresh.
    pub fn candidates(&self) -> &[Candidate<K>] {
        self.registry.candidates()
    }

    /// Whether audio cues are requested.
    pub fn is_audio_enabled(&self) -> bool {
        self.audio
    }

    /// Whether [`start`](Self::start) has run without a later [`shutdown`](Self::shutdown).
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the gamepad poll loop is running.
    pub fn is_polling(&self) -> bool {
        self.input.is_polling()
    }

    /// Mutable gamepad state, for example to rebind buttons.
    pub fn gamepad_mut(&mut self) -> &mut GamepadState {
        self.input.gamepad_mut()
    }

    /// Replace the directional policy.
    pub fn set_policy(&mut self, policy: impl FocusPolicy<K> + 'static) {
        self.policy = Box::new(policy);
    }

    /// Override which elements count as focusable.
    pub fn set_focusable_predicate(&mut self, predicate: impl Fn(&ElementInfo) -> bool + 'static) {
        self.registry.set_focusable_predicate(predicate);
    }

    /// Override which elements are skipped.
    pub fn set_skip_predicate(&mut self, predicate: impl Fn(&ElementInfo) -> bool + 'static) {
        self.registry.set_skip_predicate(predicate);
    }

    // --- lifecycle ---

    /// Compute candidates, place initial focus and start gamepad polling.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.seen_revision = self.source.revision();
        self.recompute();
        if self.current.is_none() && self.focus_initial().is_none() {
            debug!("no eligible candidates at start");
        }
        if self.config.enable_gamepad {
            self.input.start(&mut self.host);
        }
        self.host.show_status("Navigation ready");
        self.host.notify(NavEvent::Ready);
        debug!(
            candidates = self.registry.candidates().len(),
            focus = ?self.current,
            "navigator started"
        );
    }

    /// Stop polling and release all navigation state. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.input.stop(&mut self.host);
        self.debounce.cancel();
        self.history.clear();
        self.traps.clear();
        if let Some(overlay) = self.overlay.take() {
            match overlay.kind {
                OverlayKind::Keyboard => self.host.set_keyboard_visible(false, None),
                OverlayKind::Help => self.host.set_help_visible(false),
            }
        }
        self.current = None;
        self.registry.mark_stale();
        if self.started {
            debug!("navigator shut down");
        }
        self.started = false;
    }

    // --- input ---

    /// Carry out an intent, whatever device produced it.
    pub fn handle_intent(&mut self, intent: Intent) -> Result<(), NavError> {
        trace!(?intent, "dispatching intent");
        match intent {
            Intent::Navigate(direction) => self.navigate(direction).map(|_| ()),
            Intent::Activate => self.activate().map(|_| ()),
            Intent::Back => self.back().map(|_| ()),
            Intent::Home => self.home().map(|_| ()),
            Intent::PageUp => self.navigate_section(false).map(|_| ()),
            Intent::PageDown => self.navigate_section(true).map(|_| ()),
            Intent::ToggleKeyboard => {
                self.toggle_keyboard();
                Ok(())
            }
            Intent::ToggleHelp => {
                self.toggle_help();
                Ok(())
            }
            Intent::ToggleAudio => {
                self.toggle_audio();
                Ok(())
            }
        }
    }

    /// Handle a key press at `now`. Returns the intent it mapped to, so the
    /// host can suppress the platform's default handling.
    ///
    /// Arrow keys move at most once per
    /// [`navigation_delay_ms`](NavConfig::navigation_delay_ms); auto-repeats
    /// of a held key inside that window still return their intent but do not move.
    pub fn on_key_down(&mut self, event: &KeyEvent, now: u64) -> Option<Intent> {
        let intent = self.input.on_key(event, self.text_entry_active())?;
        if matches!(intent, Intent::Navigate(_)) && !self.input.admit_key_move(now) {
            trace!(?intent, now, "key repeat inside navigation delay");
            return Some(intent);
        }
        if let Err(err) = self.handle_intent(intent) {
            trace!(?intent, %err, "intent had no effect");
        }
        Some(intent)
    }

    /// Handle a frame callback with the active pad's state.
    pub fn on_frame(&mut self, snapshot: Option<&GamepadSnapshot<'_>>) -> SmallVec<[Intent; 4]> {
        let intents = self.input.on_frame(&mut self.host, snapshot);
        for &intent in &intents {
            if let Err(err) = self.handle_intent(intent) {
                trace!(?intent, %err, "intent had no effect");
            }
        }
        intents
    }

    /// A gamepad was connected.
    pub fn on_gamepad_connected(&mut self, index: usize) {
        self.input.gamepad_connected(index);
        self.host.show_status("Controller connected");
        debug!(index, "gamepad connected");
    }

    /// A gamepad was disconnected. Returns `true` if it was the active pad.
    pub fn on_gamepad_disconnected(&mut self, index: usize) -> bool {
        let was_active = self.input.gamepad_disconnected(index);
        if was_active {
            self.host.show_status("Controller disconnected");
            debug!(index, "gamepad disconnected");
        }
        was_active
    }

    /// Whether typing keys currently belong to a text field of the on-screen keyboard.
    pub fn text_entry_active(&self) -> bool {
        self.overlay.is_some_and(|o| o.kind == OverlayKind::Keyboard)
            && self
                .current
                .and_then(|id| self.source.info_of(id))
                .is_some_and(|info| info.flags.contains(ElementFlags::TEXT_ENTRY))
    }

    // --- navigation ---

    /// Move focus in `direction`.
    ///
    /// Without a current focus this places initial focus instead.
    pub fn navigate(&mut self, direction: Direction) -> Result<K, NavError> {
        if self.sync() {
            return Err(NavError::StaleFocus);
        }
        let Some(from) = self.current else {
            return match self.focus_initial() {
                Some(id) => {
                    self.cue(Cue::Navigation);
                    Ok(id)
                }
                None => {
                    self.cue(Cue::Error);
                    Err(NavError::NoTarget)
                }
            };
        };
        let target = self.source.rect_of(from).and_then(|rect| {
            self.policy
                .next(rect, self.registry.candidates(), direction)
        });
        match target {
            Some(to) => {
                self.apply_focus(to, true);
                self.cue(Cue::Navigation);
                self.host.notify(NavEvent::Navigated { direction, from, to });
                debug!(?from, ?to, %direction, "navigated");
                Ok(to)
            }
            None => {
                self.cue(Cue::Error);
                self.host.shake(from);
                debug!(?from, %direction, "no target");
                Err(NavError::NoTarget)
            }
        }
    }

    /// Activate the focused element.
    ///
    /// Text fields open the on-screen keyboard, pickers receive a confirm key,
    /// and everything else is clicked.
    pub fn activate(&mut self) -> Result<K, NavError> {
        self.sync();
        let Some(id) = self.current else {
            self.cue(Cue::Error);
            return Err(NavError::NoTarget);
        };
        self.host.notify(NavEvent::Activated(id));
        let kind = self.source.info_of(id).map(|i| i.kind).unwrap_or_default();
        debug!(?id, ?kind, "activating");
        match kind {
            ElementKind::TextField => {
                // Showing the keyboard plays its own cue.
                if self.overlay_is(OverlayKind::Keyboard) || !self.show_keyboard(Some(id)) {
                    self.cue(Cue::Select);
                }
            }
            ElementKind::Select => {
                self.cue(Cue::Select);
                self.host.focus_element(id);
                self.host.dispatch_key(id, SyntheticKey::Enter);
            }
            ElementKind::Container => self.cue(Cue::Select),
            ElementKind::Generic | ElementKind::Button | ElementKind::Link | ElementKind::Toggle => {
                self.cue(Cue::Select);
                self.host.click(id);
            }
        }
        Ok(id)
    }

    /// Go back one step.
    ///
    /// In order: close the shown overlay; ask the top modal surface to close;
    /// return to the most recent still-eligible history entry; click the
    /// designated back element. If none applies an error cue plays.
    pub fn back(&mut self) -> Result<BackAction<K>, NavError> {
        self.host.notify(NavEvent::BackRequested);
        self.sync();

        if let Some(kind) = self.overlay.map(|o| o.kind) {
            match kind {
                OverlayKind::Keyboard => {
                    self.hide_keyboard();
                }
                OverlayKind::Help => {
                    self.hide_help();
                    self.cue(Cue::Back);
                }
            }
            return Ok(BackAction::ClosedOverlay(kind));
        }

        if let Some(root) = self.traps.top().map(|t| t.scope_root) {
            return match self.dismiss_trap(root) {
                Some(via) => {
                    self.cue(Cue::Back);
                    Ok(BackAction::DismissedTrap { root, via })
                }
                None => {
                    warn!(?root, "modal surface refused every dismissal action");
                    self.cue(Cue::Error);
                    Err(NavError::NoTarget)
                }
            };
        }

        let scope = self.scope();
        let current = self.current;
        let (registry, source) = (&self.registry, &self.source);
        let previous = self
            .history
            .pop_valid(|id| Some(id) != current && registry.is_eligible(source, id, scope));
        if let Some(previous) = previous {
            self.apply_focus(previous, false);
            self.cue(Cue::Navigation);
            debug!(?previous, "restored from history");
            return Ok(BackAction::Restored(previous));
        }

        if let Some(button) = self.flagged(ElementFlags::BACK, scope).first().copied() {
            self.host.click(button);
            self.cue(Cue::Select);
            return Ok(BackAction::ClickedBack(button));
        }

        self.cue(Cue::Error);
        Err(NavError::NoTarget)
    }

    /// Focus the designated home element, or the first eligible candidate.
    pub fn home(&mut self) -> Result<K, NavError> {
        self.host.notify(NavEvent::HomeRequested);
        self.sync();
        let designated = self.registry.candidates().iter().map(|c| c.id).find(|&id| {
            self.source
                .info_of(id)
                .is_some_and(|info| info.flags.contains(ElementFlags::HOME))
        });
        let result = if let Some(id) = designated {
            self.apply_focus(id, true);
            self.cue(Cue::Home);
            Ok(id)
        } else if let Some(id) = self.registry.first() {
            self.apply_focus(id, false);
            self.cue(Cue::Navigation);
            Ok(id)
        } else {
            self.cue(Cue::Error);
            Err(NavError::EmptyCandidateSet)
        };
        self.breadcrumb("Home");
        result
    }

    /// Jump to the first candidate of the next (`forward`) or previous section, wrapping.
    ///
    /// Sections are visible elements flagged [`ElementFlags::SECTION`] inside
    /// the active scope, in document order.
    pub fn navigate_section(&mut self, forward: bool) -> Result<K, NavError> {
        self.sync();
        let sections = self.flagged(ElementFlags::SECTION, self.scope());
        if sections.is_empty() {
            self.cue(Cue::Error);
            return Err(NavError::NoTarget);
        }
        let len = sections.len();
        let index = self
            .current
            .and_then(|id| self.enclosing_section(id))
            .and_then(|s| sections.iter().position(|&x| x == s));
        let target_index = match (index, forward) {
            (Some(i), true) => (i + 1) % len,
            (None, true) => 0,
            (Some(i), false) => (i + len - 1) % len,
            (None, false) => len - 1,
        };
        let section = sections[target_index];
        let target = self
            .registry
            .candidates()
            .iter()
            .map(|c| c.id)
            .find(|&id| self.source.contains(section, id));
        let Some(target) = target else {
            self.cue(Cue::Error);
            debug!(?section, "section has no eligible candidates");
            return Err(NavError::NoTarget);
        };
        self.apply_focus(target, true);
        self.cue(Cue::Navigation);
        self.breadcrumb(&format!("Section {}", target_index + 1));
        debug!(?section, ?target, "jumped to section");
        Ok(target)
    }

    // --- overlays ---

    /// Show the on-screen keyboard, typing into `target`.
    ///
    /// Returns `false` if the keyboard is disabled, already shown, or the host
    /// has none.
    pub fn show_keyboard(&mut self, target: Option<K>) -> bool {
        if !self.config.enable_keyboard || self.overlay_is(OverlayKind::Keyboard) {
            return false;
        }
        let Some(root) = self.host.keyboard_root() else {
            warn!("host provides no on-screen keyboard");
            return false;
        };
        self.hide_help();
        self.overlay = Some(Overlay {
            kind: OverlayKind::Keyboard,
            root,
            previous_focus: self.current,
            target,
        });
        self.host.set_keyboard_visible(true, target);
        self.recompute();
        self.refocus(None);
        self.cue(Cue::Select);
        self.host.notify(NavEvent::KeyboardShown);
        debug!(?root, ?target, "keyboard shown");
        true
    }

    /// Hide the on-screen keyboard and return focus to its target.
    pub fn hide_keyboard(&mut self) -> bool {
        let Some(overlay) = self
            .overlay
            .take_if(|o| o.kind == OverlayKind::Keyboard)
        else {
            return false;
        };
        self.host.set_keyboard_visible(false, None);
        self.recompute();
        self.refocus(overlay.target.or(overlay.previous_focus));
        self.cue(Cue::Navigation);
        self.host.notify(NavEvent::KeyboardHidden);
        debug!(root = ?overlay.root, "keyboard hidden");
        true
    }

    /// Show the keyboard if hidden, hide it if shown. Returns whether it is now shown.
    pub fn toggle_keyboard(&mut self) -> bool {
        if self.overlay_is(OverlayKind::Keyboard) {
            self.hide_keyboard();
            false
        } else {
            self.show_keyboard(None)
        }
    }

    /// Show the help overlay and focus its close button.
    pub fn show_help(&mut self) -> bool {
        if !self.config.enable_help || self.overlay_is(OverlayKind::Help) {
            return false;
        }
        let Some(root) = self.host.help_root() else {
            warn!("host provides no help overlay");
            return false;
        };
        self.hide_keyboard();
        self.overlay = Some(Overlay {
            kind: OverlayKind::Help,
            root,
            previous_focus: self.current,
            target: None,
        });
        self.host.set_help_visible(true);
        self.recompute();
        let close = self
            .flagged(ElementFlags::DISMISS, Some(root))
            .into_iter()
            .find(|&id| self.registry.contains(id));
        self.refocus(close);
        debug!(?root, "help shown");
        true
    }

    /// Hide the help overlay and restore the focus it replaced.
    pub fn hide_help(&mut self) -> bool {
        let Some(overlay) = self.overlay.take_if(|o| o.kind == OverlayKind::Help) else {
            return false;
        };
        self.host.set_help_visible(false);
        self.recompute();
        self.refocus(overlay.previous_focus);
        debug!(root = ?overlay.root, "help hidden");
        true
    }

    /// Show help if hidden, hide it if shown. Returns whether it is now shown.
    pub fn toggle_help(&mut self) -> bool {
        if self.overlay_is(OverlayKind::Help) {
            self.hide_help();
            false
        } else {
            self.show_help()
        }
    }

    /// Switch audio cues on or off. Returns the new state.
    pub fn toggle_audio(&mut self) -> bool {
        self.audio = !self.audio;
        let text = if self.audio {
            "Audio enabled"
        } else {
            "Audio disabled"
        };
        self.host.show_status(text);
        self.host.notify(NavEvent::AudioToggled(self.audio));
        debug!(enabled = self.audio, "audio toggled");
        self.audio
    }

    // --- inward commands ---

    /// Make `id` focusable regardless of the focusable predicate.
    pub fn register_focusable(&mut self, id: K) -> bool {
        self.registry.register(id)
    }

    /// Remove `id` from navigation regardless of the focusable predicate.
    ///
    /// If `id` held focus, focus moves to the first eligible candidate.
    pub fn unregister_focusable(&mut self, id: K) -> bool {
        let changed = self.registry.unregister(id);
        if changed && self.current == Some(id) {
            self.sync();
        }
        changed
    }

    /// Confine navigation to `root` until [`close_trap`](Self::close_trap).
    ///
    /// Focus moves into the trap unless it is already inside. Returns `false`
    /// if a trap with that root is already open.
    pub fn open_trap(&mut self, root: K, now: u64) -> bool {
        if !self.traps.push(root, self.current, now) {
            return false;
        }
        debug!(?root, depth = self.traps.len(), "trap opened");
        if self.overlay.is_some() {
            self.registry.mark_stale();
            return true;
        }
        self.recompute();
        self.refocus(self.current);
        true
    }

    /// Release the trap rooted at `root`, wherever it is in the stack.
    ///
    /// Closing the top trap refocuses: the first candidate of the next trap
    /// down, or the element focused before the last trap opened. Closing a
    /// trap further down only repairs focus if it became stale.
    pub fn close_trap(&mut self, root: K) -> bool {
        let was_top = self.traps.top().is_some_and(|t| t.scope_root == root);
        let Some(trap) = self.traps.pop(root) else {
            return false;
        };
        debug!(?root, remaining = self.traps.len(), "trap closed");
        if self.overlay.is_some() {
            self.registry.mark_stale();
            return true;
        }
        self.recompute();
        if !was_top {
            self.repair_focus();
        } else if self.traps.is_empty() {
            self.refocus(trap.previous_focus);
        } else {
            self.refocus(None);
        }
        true
    }

    /// Focus `id` if it is eligible in the active scope.
    pub fn set_focus(&mut self, id: K) -> bool {
        self.try_set_focus(id).is_ok()
    }

    /// Focus `id`, reporting why not on failure.
    pub fn try_set_focus(&mut self, id: K) -> Result<(), NavError> {
        self.sync();
        if !self.registry.is_eligible(&self.source, id, self.scope()) {
            debug!(?id, "focus request rejected");
            return Err(NavError::InvisibleFocusRequest);
        }
        self.apply_focus(id, true);
        Ok(())
    }

    /// Focus the first eligible candidate, in document order, matching `predicate`.
    pub fn set_focus_by(&mut self, predicate: impl Fn(K, &ElementInfo) -> bool) -> bool {
        self.sync();
        let found = self.registry.candidates().iter().map(|c| c.id).find(|&id| {
            self.source
                .info_of(id)
                .is_some_and(|info| predicate(id, &info))
        });
        found.is_some_and(|id| self.set_focus(id))
    }

    /// Adopt focus the platform moved by itself, for example after a pointer click.
    ///
    /// No history entry is recorded. Returns `false` if `id` is not eligible.
    pub fn on_platform_focus(&mut self, id: K) -> bool {
        self.sync();
        if self.current == Some(id)
            || !self.registry.is_eligible(&self.source, id, self.scope())
        {
            return false;
        }
        self.apply_focus(id, false);
        true
    }

    // --- change handling ---

    /// Report that content or layout changed at `now`.
    pub fn notify_content_changed(&mut self, now: u64) {
        trace!(now, "content change reported");
        self.debounce.notify(now);
    }

    /// Advance time. Picks up source revisions and, once the debounce interval
    /// has elapsed, refreshes candidates and repairs stale focus.
    ///
    /// Returns `true` if a refresh happened.
    pub fn tick(&mut self, now: u64) -> bool {
        if let Some(revision) = self.source.revision()
            && self.seen_revision != Some(revision)
        {
            self.seen_revision = Some(revision);
            self.debounce.notify(now);
        }
        if !self.debounce.fire(now) {
            return false;
        }
        self.recompute();
        self.repair_focus();
        debug!(
            now,
            candidates = self.registry.candidates().len(),
            "content change applied"
        );
        true
    }

    /// Refresh candidates immediately and repair stale focus.
    ///
    /// Returns `true` if focus had to move.
    pub fn refresh(&mut self) -> bool {
        self.recompute();
        self.repair_focus()
    }

    // --- internals ---

    fn scope(&self) -> Option<K> {
        match self.overlay {
            Some(overlay) => Some(overlay.root),
            None => self.traps.top().map(|t| t.scope_root),
        }
    }

    fn overlay_is(&self, kind: OverlayKind) -> bool {
        self.overlay.is_some_and(|o| o.kind == kind)
    }

    fn recompute(&mut self) {
        let scope = self.scope();
        let count = self.registry.refresh_in(&self.source, scope).len();
        self.synced_revision = self.source.revision();
        trace!(candidates = count, ?scope, "candidates recomputed");
    }

    /// Bring candidates up to date if anything changed, then repair focus.
    /// Returns `true` if focus had to move.
    fn sync(&mut self) -> bool {
        let revision = self.source.revision();
        let changed = revision.is_some() && revision != self.synced_revision;
        if changed || self.registry.is_stale() || self.registry.scope() != self.scope() {
            self.recompute();
        }
        self.repair_focus()
    }

    fn repair_focus(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        if self.registry.is_eligible(&self.source, current, self.scope()) {
            return false;
        }
        warn!(?current, "focused element is no longer eligible; moving focus");
        if self.registry.contains(current) {
            self.recompute();
        }
        self.current = None;
        if self.focus_initial().is_none() {
            debug!("no eligible candidates remain");
        }
        true
    }

    fn focus_initial(&mut self) -> Option<K> {
        let first = self.registry.first()?;
        self.apply_focus(first, false);
        Some(first)
    }

    /// Focus `preferred` if it is a current candidate, else the first candidate.
    fn refocus(&mut self, preferred: Option<K>) {
        match preferred
            .filter(|&id| self.registry.contains(id))
            .or_else(|| self.registry.first())
        {
            Some(id) => self.apply_focus(id, false),
            None => {
                debug!(scope = ?self.scope(), "nothing to focus in scope");
                self.current = None;
            }
        }
    }

    fn apply_focus(&mut self, id: K, record_history: bool) {
        if self.current == Some(id) {
            return;
        }
        if record_history && let Some(previous) = self.current {
            self.history.push(previous);
        }
        self.current = Some(id);
        self.host.focus_element(id);
        self.scroll_if_needed(id);
        self.host.notify(NavEvent::FocusChanged(id));
        if self.config.enable_breadcrumbs {
            let context = self.breadcrumb_context(id);
            if let Some(text) = self.host.breadcrumb_for(id, context) {
                self.host.set_breadcrumb(&text);
            }
        }
        debug!(?id, "focus changed");
    }

    /// The shown overlay or open trap holding `id`, else its enclosing section.
    fn breadcrumb_context(&self, id: K) -> Option<K> {
        self.scope()
            .filter(|&root| self.source.contains(root, id))
            .or_else(|| self.enclosing_section(id))
    }

    fn scroll_if_needed(&mut self, id: K) {
        let Some(rect) = self.source.rect_of(id) else {
            return;
        };
        let margin = self.config.scroll_margin;
        let viewport = self.host.viewport();
        let safe = Rect::new(
            viewport.x0 + margin,
            viewport.y0 + margin,
            viewport.x1 - margin,
            viewport.y1 - margin,
        );
        let inside = rect.x0 >= safe.x0
            && rect.y0 >= safe.y0
            && rect.x1 <= safe.x1
            && rect.y1 <= safe.y1;
        if !inside {
            self.host.scroll_into_view(id);
        }
    }

    fn cue(&mut self, cue: Cue) {
        if self.audio {
            self.host.play_cue(cue);
        }
    }

    fn breadcrumb(&mut self, text: &str) {
        if self.config.enable_breadcrumbs {
            self.host.set_breadcrumb(text);
        }
    }

    /// Visible elements carrying `flag`, inside `within` if given, in document order.
    fn flagged(&self, flag: ElementFlags, within: Option<K>) -> Vec<K> {
        self.source
            .elements()
            .into_iter()
            .filter(|&id| {
                self.source
                    .info_of(id)
                    .is_some_and(|info| info.flags.contains(flag))
                    && self.source.is_visible(id)
                    && within.is_none_or(|root| self.source.contains(root, id))
            })
            .collect()
    }

    fn enclosing_section(&self, id: K) -> Option<K> {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if self
                .source
                .info_of(node)
                .is_some_and(|info| info.flags.contains(ElementFlags::SECTION))
            {
                return Some(node);
            }
            cursor = self.source.parent_of(node);
        }
        None
    }

    fn dismiss_trap(&mut self, root: K) -> Option<DismissAction> {
        let order = self.config.dismiss_order.clone();
        for action in order {
            let accepted = match action {
                DismissAction::Api => self.host.dismiss(root),
                DismissAction::Button => {
                    match self.flagged(ElementFlags::DISMISS, Some(root)).first() {
                        Some(&button) => {
                            self.host.click(button);
                            true
                        }
                        None => false,
                    }
                }
                DismissAction::CancelKey => {
                    self.host.dispatch_key(root, SyntheticKey::Escape);
                    true
                }
            };
            if accepted {
                debug!(?root, ?action, "dismissal requested");
                return Some(action);
            }
            trace!(?root, ?action, "dismissal action declined");
        }
        None
    }
}
