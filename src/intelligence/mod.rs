// ABOUTME: Hydration deviation engine module: range, classification, summary, tips
// ABOUTME: Re-exports the analyzer entry point and core engine types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Hydration Intelligence Module
//!
//! Carries the deviation classification engine:
//! - `physiological_constants` - guideline-backed defaults
//! - `deviation` - ideal range computation and the classification ladder
//! - `insights` - summary composition
//! - `recommendation_engine` - actionable tip generation
//! - `analyzer` - orchestration and the assembled assessment

/// Evaluation orchestration and the `HydrationAssessment` result type
pub mod analyzer;

/// Ideal range computation and deviation classification
pub mod deviation;

/// Human-readable summary composition
pub mod insights;

/// Physiological constants backing the default configuration
pub mod physiological_constants;

/// Actionable tip generation
pub mod recommendation_engine;

pub use analyzer::{HydrationAnalyzer, HydrationAssessment};
pub use deviation::{DeviationLevel, IdealRange};
