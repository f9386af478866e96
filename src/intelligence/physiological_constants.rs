// ABOUTME: Physiological constants for daily water intake targets and deviation bands
// ABOUTME: Values follow published hydration guidelines from EFSA and the U.S. IOM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Physiological constants for hydration analysis
//!
//! These values back the default configuration of the deviation engine.
//! The per-kilogram baseline follows the commonly cited 30-35 ml/kg/day
//! adult guideline; adjustments and deviation factors are fixed offsets
//! applied on top of it.

/// Baseline daily water needs per kilogram of body weight
///
/// References:
/// - EFSA Panel on Dietetic Products (2010). Scientific Opinion on Dietary
///   Reference Values for water. <https://doi.org/10.2903/j.efsa.2010.1459>
/// - Institute of Medicine (2005). Dietary Reference Intakes for Water,
///   Potassium, Sodium, Chloride, and Sulfate.
pub mod baseline {
    /// Lower bound of the ideal range (ml per kg of body weight per day)
    pub const LOW_ML_PER_KG: f64 = 30.0;

    /// Upper bound of the ideal range (ml per kg of body weight per day)
    pub const HIGH_ML_PER_KG: f64 = 35.0;
}

/// Additive range offsets for physical activity (ml/day)
///
/// Sweat losses scale with training volume; the offsets widen as well as
/// shift the range because upper-bound needs grow faster than lower-bound
/// needs.
/// Reference: Sawka, M.N., et al. (2007). ACSM position stand: Exercise and
/// fluid replacement. <https://doi.org/10.1249/mss.0b013e31802ca597>
pub mod activity {
    /// Added to the range low bound for moderate activity
    pub const MODERATE_LOW_OFFSET_ML: f64 = 200.0;

    /// Added to the range high bound for moderate activity
    pub const MODERATE_HIGH_OFFSET_ML: f64 = 300.0;

    /// Added to the range low bound for high activity
    pub const HIGH_LOW_OFFSET_ML: f64 = 500.0;

    /// Added to the range high bound for high activity
    pub const HIGH_HIGH_OFFSET_ML: f64 = 700.0;
}

/// Additive range offsets for ambient climate (ml/day)
///
/// Reference: Kenefick, R.W. & Cheuvront, S.N. (2012). Hydration for
/// recreational sport and physical activity.
/// <https://doi.org/10.1111/j.1753-4887.2012.00523.x>
pub mod climate {
    /// Added to the range low bound in a hot climate
    pub const HOT_LOW_OFFSET_ML: f64 = 300.0;

    /// Added to the range high bound in a hot climate
    pub const HOT_HIGH_OFFSET_ML: f64 = 400.0;

    /// Added to the range low bound in a very hot climate
    pub const VERY_HOT_LOW_OFFSET_ML: f64 = 600.0;

    /// Added to the range high bound in a very hot climate
    pub const VERY_HOT_HIGH_OFFSET_ML: f64 = 700.0;
}

/// Deviation band factors separating severe from mild deviations
pub mod deviation {
    /// Intake below `range_low * SEVERE_UNDER_FACTOR` is severely
    /// under-hydrated (30% or more below the minimum target)
    pub const SEVERE_UNDER_FACTOR: f64 = 0.7;

    /// Intake above `range_high * SEVERE_OVER_FACTOR` is severely
    /// over-hydrated (40% or more above the maximum target)
    pub const SEVERE_OVER_FACTOR: f64 = 1.4;
}

/// Input validation floors
pub mod validation {
    /// Minimum supported body weight (kg); the per-kg guideline is not
    /// calibrated for lighter bodies
    pub const MIN_WEIGHT_KG: f64 = 30.0;

    /// Minimum plausible reported daily intake (ml); anything lower is
    /// treated as an input error rather than a physiological reading
    pub const MIN_INTAKE_ML: f64 = 200.0;
}
