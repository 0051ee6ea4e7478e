// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator configuration.
//!
//! All fields have defaults, so a configuration file only needs to mention
//! what it changes:
//!
//! ```rust
//! use tenfoot_nav::{DismissAction, NavConfig};
//!
//! let config = NavConfig::from_toml_str(r#"
//!     axis_deadzone = 0.5
//!     dismiss_order = ["cancel-key", "api"]
//! "#).unwrap();
//! assert_eq!(config.axis_deadzone, 0.5);
//! assert_eq!(config.history_capacity, 20);
//! assert_eq!(config.dismiss_order, [DismissAction::CancelKey, DismissAction::Api]);
//! ```

use serde::{Deserialize, Serialize};
use tenfoot_focus::Tuning;

use crate::error::ConfigError;

/// One way of asking a modal surface to close, tried in configured order on "back".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissAction {
    /// Ask the host to close the surface through its own API ([`Host::dismiss`](crate::Host::dismiss)).
    Api,
    /// Click a visible dismiss button inside the surface.
    Button,
    /// Send a synthetic cancel key to the surface root.
    CancelKey,
}

/// Navigator options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Request audio cues from the host.
    pub enable_audio: bool,
    /// Poll the gamepad every frame.
    pub enable_gamepad: bool,
    /// Allow the on-screen keyboard overlay.
    pub enable_keyboard: bool,
    /// Allow the help overlay.
    pub enable_help: bool,
    /// Push breadcrumb text to the host.
    pub enable_breadcrumbs: bool,
    /// Stick deflection (0.0 to 1.0) that must be exceeded to count as a direction.
    pub axis_deadzone: f64,
    /// Maximum number of remembered focus positions.
    pub history_capacity: usize,
    /// Quiet period in milliseconds before a burst of content changes triggers a refresh.
    pub debounce_ms: u64,
    /// Minimum spacing in milliseconds between moves from arrow keys. Auto-repeats
    /// of a held key that arrive sooner are dropped. Zero disables the limit.
    pub navigation_delay_ms: u64,
    /// Distance in pixels from the viewport edge inside which focus scrolls the element.
    pub scroll_margin: f64,
    /// Score band in pixels within which alignment beats distance.
    pub tie_threshold: f64,
    /// Minimum center travel in pixels for a candidate to count as "in that direction".
    pub center_tolerance: f64,
    /// How far in pixels a candidate may overlap the current element's leading edge.
    pub edge_slack: f64,
    /// Weight of cross-axis misalignment relative to distance (0.0 to 1.0).
    pub cross_axis_weight: f64,
    /// Order in which modal dismissal strategies are tried.
    pub dismiss_order: Vec<DismissAction>,
}

impl Default for NavConfig {
    fn default() -> Self {
        let tuning = Tuning::default();
        Self {
            enable_audio: true,
            enable_gamepad: true,
            enable_keyboard: true,
            enable_help: true,
            enable_breadcrumbs: true,
            axis_deadzone: 0.3,
            history_capacity: 20,
            debounce_ms: 100,
            navigation_delay_ms: 200,
            scroll_margin: 80.0,
            tie_threshold: tuning.tie_threshold,
            center_tolerance: tuning.center_tolerance,
            edge_slack: tuning.edge_slack,
            cross_axis_weight: tuning.cross_axis_weight,
            dismiss_order: vec![
                DismissAction::Api,
                DismissAction::Button,
                DismissAction::CancelKey,
            ],
        }
    }
}

impl NavConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(ok: bool, field: &'static str, message: &'static str) -> Result<(), ConfigError> {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { field, message })
            }
        }
        check(
            (0.0..=1.0).contains(&self.axis_deadzone),
            "axis_deadzone",
            "must be between 0.0 and 1.0",
        )?;
        check(self.history_capacity >= 1, "history_capacity", "must be at least 1")?;
        check(
            self.navigation_delay_ms <= 2_000,
            "navigation_delay_ms",
            "must be at most 2000",
        )?;
        check(self.scroll_margin >= 0.0, "scroll_margin", "must not be negative")?;
        check(self.tie_threshold >= 0.0, "tie_threshold", "must not be negative")?;
        check(self.center_tolerance >= 0.0, "center_tolerance", "must not be negative")?;
        check(self.edge_slack >= 0.0, "edge_slack", "must not be negative")?;
        check(
            (0.0..=1.0).contains(&self.cross_axis_weight),
            "cross_axis_weight",
            "must be between 0.0 and 1.0",
        )?;
        check(!self.dismiss_order.is_empty(), "dismiss_order", "must name at least one action")?;
        Ok(())
    }

    /// Resolver constants derived from this configuration.
    pub fn tuning(&self) -> Tuning {
        Tuning {
            center_tolerance: self.center_tolerance,
            edge_slack: self.edge_slack,
            cross_axis_weight: self.cross_axis_weight,
            tie_threshold: self.tie_threshold,
        }
    }
}
