// ABOUTME: Evaluation orchestration: validate, compute range, classify, compose output
// ABOUTME: Defines HydrationAnalyzer and the assembled HydrationAssessment result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Hydration assessment orchestration.
//!
//! `HydrationAnalyzer::evaluate` is the single logical entry point for
//! callers: it validates the inputs, derives the ideal range, classifies the
//! reported intake, and composes the summary and tips into one result.
//! Validation happens before any computation; on failure no partial result
//! is produced.

use crate::config::HydrationConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::deviation::{classify, compute_ideal_range, DeviationLevel, IdealRange};
use crate::intelligence::insights::build_summary;
use crate::intelligence::recommendation_engine::build_tips;
use crate::models::{DailyIntake, HydrationProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete hydration assessment for one evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HydrationAssessment {
    /// Deviation level of the reported intake
    pub level: DeviationLevel,
    /// Human-readable label naming the level
    pub label: String,
    /// Computed ideal hydration range
    pub range: IdealRange,
    /// The reported intake the classification was made against (ml/day)
    pub actual_intake_ml: f64,
    /// Key-patterns summary text
    pub summary: String,
    /// Ordered, non-empty list of actionable tips
    pub tips: Vec<String>,
}

/// Deviation engine front-end holding the configuration for one analyzer
pub struct HydrationAnalyzer {
    config: HydrationConfig,
}

impl Default for HydrationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HydrationAnalyzer {
    /// Create an analyzer backed by the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: HydrationConfig::global().clone(),
        }
    }

    /// Create an analyzer with a custom configuration
    #[must_use]
    pub fn with_config(config: HydrationConfig) -> Self {
        Self { config }
    }

    /// Evaluate a profile and reported intake into a full assessment
    ///
    /// Pure and idempotent: identical inputs always yield identical results.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] with `InvalidWeight` when the weight is
    /// non-finite, zero, or below the configured floor, and `InvalidIntake`
    /// when the intake is non-finite, zero, or below the configured floor.
    /// Once inputs pass validation the computation cannot fail.
    pub fn evaluate(
        &self,
        profile: &HydrationProfile,
        intake: &DailyIntake,
    ) -> AppResult<HydrationAssessment> {
        self.validate(profile, intake)?;

        let range = compute_ideal_range(
            profile,
            &self.config.baseline,
            &self.config.activity_adjustment,
            &self.config.climate_adjustment,
        );
        let level = classify(&range, intake.avg_intake_ml, &self.config.deviation);

        debug!(
            weight_kg = profile.weight_kg,
            intake_ml = intake.avg_intake_ml,
            range_low_ml = range.low_ml,
            range_high_ml = range.high_ml,
            ?level,
            "classified hydration deviation"
        );

        let summary = build_summary(profile, &range, &self.config.messages);
        let tips = build_tips(profile, level, &self.config.messages);

        Ok(HydrationAssessment {
            level,
            label: level.label().to_owned(),
            range,
            actual_intake_ml: intake.avg_intake_ml,
            summary,
            tips,
        })
    }

    /// Validate inputs before any computation; weight is checked first
    fn validate(&self, profile: &HydrationProfile, intake: &DailyIntake) -> AppResult<()> {
        let limits = &self.config.validation;

        if !profile.weight_kg.is_finite()
            || profile.weight_kg <= 0.0
            || profile.weight_kg < limits.min_weight_kg
        {
            return Err(AppError::invalid_weight(format!(
                "weight must be at least {:.0} kg, got {}",
                limits.min_weight_kg, profile.weight_kg
            )));
        }

        if !intake.avg_intake_ml.is_finite()
            || intake.avg_intake_ml <= 0.0
            || intake.avg_intake_ml < limits.min_intake_ml
        {
            return Err(AppError::invalid_intake(format!(
                "intake must be at least {:.0} ml, got {}",
                limits.min_intake_ml, intake.avg_intake_ml
            )));
        }

        Ok(())
    }
}
