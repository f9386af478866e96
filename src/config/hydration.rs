// ABOUTME: Hydration engine configuration: baseline, adjustments, thresholds, messages
// ABOUTME: Defaults reproduce the published 30-35 ml/kg guideline and fixed offsets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Hydration Engine Configuration
//!
//! Sub-configurations for the deviation engine: the per-kilogram baseline,
//! additive activity and climate adjustments, the deviation classification
//! thresholds, input validation floors, and the message templates used when
//! composing summaries and tips.

use crate::intelligence::physiological_constants::{
    activity, baseline, climate, deviation, validation,
};
use serde::{Deserialize, Serialize};

/// Baseline ideal-range computation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Lower bound of the ideal range, in ml per kg of body weight
    pub low_ml_per_kg: f64,
    /// Upper bound of the ideal range, in ml per kg of body weight
    pub high_ml_per_kg: f64,
}

/// Additive range offsets per activity level, in ml/day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAdjustmentConfig {
    /// Added to the range low bound for moderate activity
    pub moderate_low_ml: f64,
    /// Added to the range high bound for moderate activity
    pub moderate_high_ml: f64,
    /// Added to the range low bound for high activity
    pub high_low_ml: f64,
    /// Added to the range high bound for high activity
    pub high_high_ml: f64,
}

/// Additive range offsets per climate, in ml/day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateAdjustmentConfig {
    /// Added to the range low bound in a hot climate
    pub hot_low_ml: f64,
    /// Added to the range high bound in a hot climate
    pub hot_high_ml: f64,
    /// Added to the range low bound in a very hot climate
    pub very_hot_low_ml: f64,
    /// Added to the range high bound in a very hot climate
    pub very_hot_high_ml: f64,
}

/// Multiplicative factors separating severe deviations from mild ones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationThresholds {
    /// Intake below `range.low * severe_under_factor` is severely under-hydrated
    pub severe_under_factor: f64,
    /// Intake above `range.high * severe_over_factor` is severely over-hydrated
    pub severe_over_factor: f64,
}

/// Input validation floors enforced before any computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Minimum supported body weight (kg)
    pub min_weight_kg: f64,
    /// Minimum plausible reported intake (ml/day)
    pub min_intake_ml: f64,
}

/// Template messages for summaries and tips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Summary fragment when thirst is frequent
    pub thirst_high: String,
    /// Summary fragment when thirst is rare
    pub thirst_low: String,
    /// Summary fragment for high activity
    pub high_activity: String,
    /// Summary fragment for a non-mild climate
    pub climate: String,
    /// Under-hydration tip: front-load intake
    pub tip_increase_intake: String,
    /// Under-hydration tip: carry a bottle
    pub tip_carry_bottle: String,
    /// Under-hydration tip: electrolytes during activity or heat
    pub tip_electrolytes_active: String,
    /// Over-hydration tip: do not force water
    pub tip_avoid_forcing: String,
    /// Over-hydration tip: spread intake across the day
    pub tip_spread_hydration: String,
    /// Over-hydration tip: watch electrolytes at high volumes
    pub tip_monitor_electrolytes: String,
    /// Generic closing tip appended to every assessment
    pub tip_generic_indicators: String,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            low_ml_per_kg: baseline::LOW_ML_PER_KG,
            high_ml_per_kg: baseline::HIGH_ML_PER_KG,
        }
    }
}

impl Default for ActivityAdjustmentConfig {
    fn default() -> Self {
        Self {
            moderate_low_ml: activity::MODERATE_LOW_OFFSET_ML,
            moderate_high_ml: activity::MODERATE_HIGH_OFFSET_ML,
            high_low_ml: activity::HIGH_LOW_OFFSET_ML,
            high_high_ml: activity::HIGH_HIGH_OFFSET_ML,
        }
    }
}

impl Default for ClimateAdjustmentConfig {
    fn default() -> Self {
        Self {
            hot_low_ml: climate::HOT_LOW_OFFSET_ML,
            hot_high_ml: climate::HOT_HIGH_OFFSET_ML,
            very_hot_low_ml: climate::VERY_HOT_LOW_OFFSET_ML,
            very_hot_high_ml: climate::VERY_HOT_HIGH_OFFSET_ML,
        }
    }
}

impl Default for DeviationThresholds {
    fn default() -> Self {
        Self {
            severe_under_factor: deviation::SEVERE_UNDER_FACTOR,
            severe_over_factor: deviation::SEVERE_OVER_FACTOR,
        }
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_weight_kg: validation::MIN_WEIGHT_KG,
            min_intake_ml: validation::MIN_INTAKE_ML,
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            thirst_high: "You frequently feel thirsty, suggesting hydration gaps.".into(),
            thirst_low: "You rarely feel thirsty — may be drinking too much or just well hydrated."
                .into(),
            high_activity: "High activity increases sweat-related losses significantly.".into(),
            climate: "Your climate increases daily water needs.".into(),
            tip_increase_intake: "Increase water intake earlier in the day.".into(),
            tip_carry_bottle: "Carry a bottle to avoid accidental under-hydration.".into(),
            tip_electrolytes_active: "Add electrolytes during high activity or hot climate.".into(),
            tip_avoid_forcing: "Avoid forcing water if you're not thirsty.".into(),
            tip_spread_hydration: "Spread hydration instead of large gulps.".into(),
            tip_monitor_electrolytes: "Monitor electrolytes if drinking very high volumes.".into(),
            tip_generic_indicators:
                "Use thirst, urine color, and energy levels as real-time indicators.".into(),
        }
    }
}
