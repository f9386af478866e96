// ABOUTME: Hydration configuration orchestration: defaults, env overrides, validation
// ABOUTME: Provides the lazily-initialized global HydrationConfig singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Configuration Module
//!
//! Type-safe configuration for the hydration deviation engine. Defaults
//! reproduce the published guideline constants; every numeric setting can be
//! overridden through a `HYDRALERT_*` environment variable, and the final
//! configuration is validated before use. Message templates are configurable
//! but have no environment override path.

pub mod error;
pub mod hydration;

pub use error::ConfigError;
pub use hydration::{
    ActivityAdjustmentConfig, BaselineConfig, ClimateAdjustmentConfig, DeviationThresholds,
    MessagesConfig, ValidationLimits,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static HYDRATION_CONFIG: OnceLock<HydrationConfig> = OnceLock::new();

/// Main configuration container for the deviation engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Per-kilogram baseline for the ideal range
    pub baseline: BaselineConfig,
    /// Additive offsets per activity level
    pub activity_adjustment: ActivityAdjustmentConfig,
    /// Additive offsets per climate
    pub climate_adjustment: ClimateAdjustmentConfig,
    /// Severe-deviation classification factors
    pub deviation: DeviationThresholds,
    /// Input validation floors
    pub validation: ValidationLimits,
    /// Summary and tip message templates
    pub messages: MessagesConfig,
}

impl HydrationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        HYDRATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load hydration config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparseable
    /// value or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.baseline.low_ml_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "baseline low_ml_per_kg must be positive",
            ));
        }
        if self.baseline.low_ml_per_kg > self.baseline.high_ml_per_kg {
            return Err(ConfigError::InvalidRange(
                "baseline low_ml_per_kg must be <= high_ml_per_kg",
            ));
        }

        // Offsets may not invert the range: each low offset must not exceed
        // its matching high offset.
        if self.activity_adjustment.moderate_low_ml > self.activity_adjustment.moderate_high_ml
            || self.activity_adjustment.high_low_ml > self.activity_adjustment.high_high_ml
        {
            return Err(ConfigError::InvalidRange(
                "activity low offsets must be <= high offsets",
            ));
        }
        if self.climate_adjustment.hot_low_ml > self.climate_adjustment.hot_high_ml
            || self.climate_adjustment.very_hot_low_ml > self.climate_adjustment.very_hot_high_ml
        {
            return Err(ConfigError::InvalidRange(
                "climate low offsets must be <= high offsets",
            ));
        }
        if self.activity_adjustment.moderate_low_ml < 0.0
            || self.activity_adjustment.high_low_ml < 0.0
            || self.climate_adjustment.hot_low_ml < 0.0
            || self.climate_adjustment.very_hot_low_ml < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "adjustment offsets must be non-negative",
            ));
        }

        if self.deviation.severe_under_factor <= 0.0 || self.deviation.severe_under_factor >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "severe_under_factor must be in (0, 1)",
            ));
        }
        if self.deviation.severe_over_factor <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "severe_over_factor must be > 1",
            ));
        }

        if self.validation.min_weight_kg <= 0.0 || self.validation.min_intake_ml <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "validation floors must be positive",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Baseline overrides
        Self::apply_env_var(
            "HYDRALERT_BASELINE_LOW_ML_PER_KG",
            &mut self.baseline.low_ml_per_kg,
        )?;
        Self::apply_env_var(
            "HYDRALERT_BASELINE_HIGH_ML_PER_KG",
            &mut self.baseline.high_ml_per_kg,
        )?;

        // Activity adjustment overrides
        Self::apply_env_var(
            "HYDRALERT_ACTIVITY_MODERATE_LOW_ML",
            &mut self.activity_adjustment.moderate_low_ml,
        )?;
        Self::apply_env_var(
            "HYDRALERT_ACTIVITY_MODERATE_HIGH_ML",
            &mut self.activity_adjustment.moderate_high_ml,
        )?;
        Self::apply_env_var(
            "HYDRALERT_ACTIVITY_HIGH_LOW_ML",
            &mut self.activity_adjustment.high_low_ml,
        )?;
        Self::apply_env_var(
            "HYDRALERT_ACTIVITY_HIGH_HIGH_ML",
            &mut self.activity_adjustment.high_high_ml,
        )?;

        // Climate adjustment overrides
        Self::apply_env_var(
            "HYDRALERT_CLIMATE_HOT_LOW_ML",
            &mut self.climate_adjustment.hot_low_ml,
        )?;
        Self::apply_env_var(
            "HYDRALERT_CLIMATE_HOT_HIGH_ML",
            &mut self.climate_adjustment.hot_high_ml,
        )?;
        Self::apply_env_var(
            "HYDRALERT_CLIMATE_VERY_HOT_LOW_ML",
            &mut self.climate_adjustment.very_hot_low_ml,
        )?;
        Self::apply_env_var(
            "HYDRALERT_CLIMATE_VERY_HOT_HIGH_ML",
            &mut self.climate_adjustment.very_hot_high_ml,
        )?;

        // Deviation threshold overrides
        Self::apply_env_var(
            "HYDRALERT_SEVERE_UNDER_FACTOR",
            &mut self.deviation.severe_under_factor,
        )?;
        Self::apply_env_var(
            "HYDRALERT_SEVERE_OVER_FACTOR",
            &mut self.deviation.severe_over_factor,
        )?;

        // Validation floor overrides
        Self::apply_env_var(
            "HYDRALERT_MIN_WEIGHT_KG",
            &mut self.validation.min_weight_kg,
        )?;
        Self::apply_env_var(
            "HYDRALERT_MIN_INTAKE_ML",
            &mut self.validation.min_intake_ml,
        )?;

        Ok(self)
    }
}
