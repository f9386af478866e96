// ABOUTME: Configuration error type shared by the config loading and validation paths
// ABOUTME: Distinguishes parse failures from semantic range/value violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Configuration error type.

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related settings are ordered incorrectly
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),

    /// A single setting is outside its acceptable bounds
    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// An environment override could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}
