// Copyright 2025 the Tenfoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the navigation controller.

use thiserror::Error;

/// Outcome of a navigation request that did not move focus.
///
/// None of these are fatal. The navigator stays usable after every one of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    /// No eligible candidate lies in the requested direction, section or history.
    #[error("no navigation target")]
    NoTarget,

    /// The requested element is not visible, not eligible, or outside the active scope.
    #[error("element cannot receive focus")]
    InvisibleFocusRequest,

    /// The focused element disappeared and focus had to be moved.
    #[error("focused element is no longer eligible")]
    StaleFocus,

    /// There are no eligible candidates in the active scope.
    #[error("no eligible candidates")]
    EmptyCandidateSet,
}

/// Invalid or unparsable configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML syntax or type error.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value outside its accepted range.
    #[error("invalid {field}: {message}")]
    OutOfRange {
        /// Offending field name.
        field: &'static str,
        /// What the accepted range is.
        message: &'static str,
    },
}
