// ABOUTME: Main library entry point for the hydralert hydration analysis crate
// ABOUTME: Exposes the deviation engine, configuration layer, and error system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

#![deny(unsafe_code)]

//! # Hydralert
//!
//! Classifies a person's reported daily water intake against a computed
//! physiological target range and produces human-readable feedback: a
//! deviation level, a textual summary, and an ordered list of actionable tips.
//!
//! ## Architecture
//!
//! - **Models**: transient input entities (`HydrationProfile`, `DailyIntake`)
//! - **Intelligence**: the deviation engine (range computation,
//!   classification, summary and tip generation)
//! - **Config**: typed configuration with defaults, validation, and
//!   environment overrides
//! - **Errors**: unified error codes and result types
//!
//! Every evaluation is an independent, idempotent, pure computation; the
//! crate holds no state beyond the lazily-loaded global configuration.
//!
//! ## Example
//!
//! ```rust
//! use hydralert::intelligence::analyzer::HydrationAnalyzer;
//! use hydralert::models::{ActivityLevel, Climate, DailyIntake, HydrationProfile, ThirstLevel};
//!
//! let analyzer = HydrationAnalyzer::new();
//! let profile = HydrationProfile {
//!     weight_kg: 70.0,
//!     activity_level: ActivityLevel::Low,
//!     climate: Climate::Mild,
//!     thirst_level: ThirstLevel::Normal,
//! };
//! let intake = DailyIntake {
//!     avg_intake_ml: 2200.0,
//! };
//!
//! let assessment = analyzer.evaluate(&profile, &intake)?;
//! println!("{}: {}", assessment.label, assessment.summary);
//! # Ok::<(), hydralert::errors::AppError>(())
//! ```

/// Configuration management with defaults and environment overrides
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Hydration deviation engine: range computation, classification, insights
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Transient domain models supplied by the caller
pub mod models;
