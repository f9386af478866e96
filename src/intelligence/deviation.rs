// ABOUTME: Core deviation computation: ideal range derivation and intake classification
// ABOUTME: Pure functions over the profile, configuration, and reported intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Ideal range computation and deviation classification.
//!
//! Both operations are pure: the range is derived from body weight with
//! additive activity and climate offsets, and classification walks a fixed
//! threshold ladder whose order is part of the contract.

use crate::config::{
    ActivityAdjustmentConfig, BaselineConfig, ClimateAdjustmentConfig, DeviationThresholds,
};
use crate::models::{ActivityLevel, Climate, HydrationProfile};
use serde::{Deserialize, Serialize};

/// Ordinal deviation categories comparing actual intake to the ideal range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DeviationLevel {
    /// Intake more than 30% below the range minimum
    VeryLow,
    /// Intake below the range minimum
    Low,
    /// Intake inside the ideal range
    Normal,
    /// Intake above the range maximum
    High,
    /// Intake more than 40% above the range maximum
    VeryHigh,
}

impl DeviationLevel {
    /// Human-readable label naming this level
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Severely Under-Hydrated",
            Self::Low => "Under-Hydrated",
            Self::Normal => "In a Healthy Range",
            Self::High => "Over-Hydrated",
            Self::VeryHigh => "Severely Over-Hydrated",
        }
    }
}

/// Computed ideal hydration window in ml/day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IdealRange {
    /// Lower bound (ml/day)
    pub low_ml: f64,
    /// Upper bound (ml/day)
    pub high_ml: f64,
}

/// Compute the ideal hydration range for a profile
///
/// Baseline is `weight * low_ml_per_kg` to `weight * high_ml_per_kg`, then
/// the activity and climate offsets are each applied once. The adjustments
/// are cumulative and independent of each other.
#[must_use]
pub fn compute_ideal_range(
    profile: &HydrationProfile,
    baseline: &BaselineConfig,
    activity: &ActivityAdjustmentConfig,
    climate: &ClimateAdjustmentConfig,
) -> IdealRange {
    let mut low_ml = profile.weight_kg * baseline.low_ml_per_kg;
    let mut high_ml = profile.weight_kg * baseline.high_ml_per_kg;

    match profile.activity_level {
        ActivityLevel::Low => {}
        ActivityLevel::Moderate => {
            low_ml += activity.moderate_low_ml;
            high_ml += activity.moderate_high_ml;
        }
        ActivityLevel::High => {
            low_ml += activity.high_low_ml;
            high_ml += activity.high_high_ml;
        }
    }

    match profile.climate {
        Climate::Mild => {}
        Climate::Hot => {
            low_ml += climate.hot_low_ml;
            high_ml += climate.hot_high_ml;
        }
        Climate::VeryHot => {
            low_ml += climate.very_hot_low_ml;
            high_ml += climate.very_hot_high_ml;
        }
    }

    IdealRange { low_ml, high_ml }
}

/// Classify reported intake against an ideal range
///
/// The ladder is evaluated in this exact order: severe-under, under,
/// severe-over, over, normal. Boundary values equal to either range bound
/// classify as `Normal`; only strict inequality leaves the healthy band.
/// With `low <= high` the under and over branches can never both match, but
/// the ordering is preserved as a safety net for configurations where the
/// bands could overlap.
#[must_use]
pub fn classify(
    range: &IdealRange,
    actual_intake_ml: f64,
    thresholds: &DeviationThresholds,
) -> DeviationLevel {
    if actual_intake_ml < range.low_ml * thresholds.severe_under_factor {
        DeviationLevel::VeryLow
    } else if actual_intake_ml < range.low_ml {
        DeviationLevel::Low
    } else if actual_intake_ml > range.high_ml * thresholds.severe_over_factor {
        DeviationLevel::VeryHigh
    } else if actual_intake_ml > range.high_ml {
        DeviationLevel::High
    } else {
        DeviationLevel::Normal
    }
}
