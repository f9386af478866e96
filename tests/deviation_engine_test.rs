// ABOUTME: Comprehensive algorithm tests for the hydration deviation engine
// ABOUTME: Covers range computation, the classification ladder, summaries, and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project
//! Comprehensive algorithm tests for the deviation engine
//!
//! Exercises the engine through the public analyzer API:
//! - Ideal range computation across all 9 activity x climate combinations
//! - Classification ladder precedence and boundary behavior
//! - Summary fragment composition order
//! - Tip ordering and the electrolyte guard
//! - End-to-end scenarios and idempotence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hydralert::config::HydrationConfig;
use hydralert::intelligence::analyzer::HydrationAnalyzer;
use hydralert::intelligence::deviation::DeviationLevel;
use hydralert::models::{ActivityLevel, Climate, DailyIntake, HydrationProfile, ThirstLevel};

fn analyzer() -> HydrationAnalyzer {
    HydrationAnalyzer::with_config(HydrationConfig::default())
}

fn profile(
    weight_kg: f64,
    activity_level: ActivityLevel,
    climate: Climate,
    thirst_level: ThirstLevel,
) -> HydrationProfile {
    HydrationProfile {
        weight_kg,
        activity_level,
        climate,
        thirst_level,
    }
}

fn evaluate(p: &HydrationProfile, intake_ml: f64) -> hydralert::intelligence::HydrationAssessment {
    analyzer()
        .evaluate(
            p,
            &DailyIntake {
                avg_intake_ml: intake_ml,
            },
        )
        .unwrap()
}

// ============================================================================
// IDEAL RANGE TESTS - all 9 activity x climate combinations
// ============================================================================

#[test]
fn test_range_all_combinations_at_70_kg() {
    // (activity, climate, expected_low, expected_high); baseline 2100/2450
    let cases = [
        (ActivityLevel::Low, Climate::Mild, 2100.0, 2450.0),
        (ActivityLevel::Low, Climate::Hot, 2400.0, 2850.0),
        (ActivityLevel::Low, Climate::VeryHot, 2700.0, 3150.0),
        (ActivityLevel::Moderate, Climate::Mild, 2300.0, 2750.0),
        (ActivityLevel::Moderate, Climate::Hot, 2600.0, 3150.0),
        (ActivityLevel::Moderate, Climate::VeryHot, 2900.0, 3450.0),
        (ActivityLevel::High, Climate::Mild, 2600.0, 3150.0),
        (ActivityLevel::High, Climate::Hot, 2900.0, 3550.0),
        (ActivityLevel::High, Climate::VeryHot, 3200.0, 3850.0),
    ];

    for (activity, climate, expected_low, expected_high) in cases {
        let assessment = evaluate(
            &profile(70.0, activity, climate, ThirstLevel::Normal),
            2500.0,
        );
        assert!(
            (assessment.range.low_ml - expected_low).abs() < f64::EPSILON,
            "low bound for {activity}/{climate}: expected {expected_low}, got {}",
            assessment.range.low_ml
        );
        assert!(
            (assessment.range.high_ml - expected_high).abs() < f64::EPSILON,
            "high bound for {activity}/{climate}: expected {expected_high}, got {}",
            assessment.range.high_ml
        );
        assert!(assessment.range.low_ml <= assessment.range.high_ml);
    }
}

#[test]
fn test_range_scales_linearly_with_weight() {
    let at_60 = evaluate(
        &profile(60.0, ActivityLevel::Moderate, Climate::Hot, ThirstLevel::Normal),
        2500.0,
    );
    let at_90 = evaluate(
        &profile(90.0, ActivityLevel::Moderate, Climate::Hot, ThirstLevel::Normal),
        2500.0,
    );

    // Same additive offsets, baseline scales with weight
    assert!((at_60.range.low_ml - (60.0 * 30.0 + 200.0 + 300.0)).abs() < f64::EPSILON);
    assert!((at_90.range.low_ml - (90.0 * 30.0 + 200.0 + 300.0)).abs() < f64::EPSILON);
    assert!((at_90.range.low_ml - at_60.range.low_ml - 30.0 * 30.0).abs() < f64::EPSILON);
}

// ============================================================================
// CLASSIFICATION LADDER TESTS - precedence and boundaries
// ============================================================================

#[test]
fn test_boundary_at_range_low_is_normal() {
    // range for 50 kg low/mild is [1500, 1750]
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        1500.0,
    );
    assert_eq!(assessment.level, DeviationLevel::Normal);
}

#[test]
fn test_boundary_at_range_high_is_normal() {
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        1750.0,
    );
    assert_eq!(assessment.level, DeviationLevel::Normal);
}

#[test]
fn test_boundary_at_severe_under_threshold_is_low_not_very_low() {
    // range low is 1500, severe threshold is exactly 1050; the very-low
    // branch requires strict <
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        1050.0,
    );
    assert_eq!(assessment.level, DeviationLevel::Low);
}

#[test]
fn test_just_below_severe_under_threshold_is_very_low() {
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        1049.0,
    );
    assert_eq!(assessment.level, DeviationLevel::VeryLow);
}

#[test]
fn test_boundary_at_severe_over_threshold_is_high_not_very_high() {
    // range high is 1750, severe threshold is exactly 2450
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        2450.0,
    );
    assert_eq!(assessment.level, DeviationLevel::High);
}

#[test]
fn test_just_above_severe_over_threshold_is_very_high() {
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        2451.0,
    );
    assert_eq!(assessment.level, DeviationLevel::VeryHigh);
}

// ============================================================================
// SCENARIO TESTS
// ============================================================================

#[test]
fn test_scenario_slightly_over_hydrated() {
    // 70 kg, 2500 ml, sedentary, mild: range [2100, 2450]; 2500 > 2450 but
    // not beyond 2450 * 1.4 = 3430
    let assessment = evaluate(
        &profile(70.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        2500.0,
    );

    assert_eq!(assessment.level, DeviationLevel::High);
    assert_eq!(assessment.label, "Over-Hydrated");
    assert!((assessment.actual_intake_ml - 2500.0).abs() < f64::EPSILON);
}

#[test]
fn test_scenario_severely_under_hydrated_athlete_in_heat() {
    // 70 kg, 1000 ml, high activity, very hot: range [3200, 3850];
    // 1000 < 3200 * 0.7 = 2240
    let assessment = evaluate(
        &profile(70.0, ActivityLevel::High, Climate::VeryHot, ThirstLevel::High),
        1000.0,
    );

    assert_eq!(assessment.level, DeviationLevel::VeryLow);
    assert_eq!(assessment.label, "Severely Under-Hydrated");
    // Active profile gets the electrolyte tip
    assert!(assessment
        .tips
        .iter()
        .any(|t| t.contains("electrolytes during high activity")));
}

#[test]
fn test_scenario_healthy_range_single_tip() {
    // 50 kg, 1600 ml, sedentary, mild: range [1500, 1750]; inside range
    let assessment = evaluate(
        &profile(50.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        1600.0,
    );

    assert_eq!(assessment.level, DeviationLevel::Normal);
    assert_eq!(assessment.tips.len(), 1);
    assert!(assessment.tips[0].contains("urine color"));
}

// ============================================================================
// SUMMARY COMPOSITION TESTS
// ============================================================================

#[test]
fn test_summary_baseline_profile_has_only_range_sentence() {
    let assessment = evaluate(
        &profile(70.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
        2200.0,
    );
    assert_eq!(
        assessment.summary,
        "Your calculated optimal hydration range is 2100–2450 ml/day."
    );
}

#[test]
fn test_summary_fragments_are_independently_conditioned() {
    // High thirst + high activity + hot climate: all three extra fragments
    let assessment = evaluate(
        &profile(70.0, ActivityLevel::High, Climate::Hot, ThirstLevel::High),
        2500.0,
    );

    assert!(assessment.summary.contains("frequently feel thirsty"));
    assert!(assessment.summary.contains("sweat-related losses"));
    assert!(assessment.summary.contains("climate increases daily water needs"));
}

#[test]
fn test_summary_rare_thirst_fragment() {
    let assessment = evaluate(
        &profile(70.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Low),
        2200.0,
    );
    assert!(assessment.summary.contains("rarely feel thirsty"));
    assert!(!assessment.summary.contains("frequently feel thirsty"));
}

// ============================================================================
// PURITY AND IDEMPOTENCE
// ============================================================================

#[test]
fn test_evaluate_is_idempotent() {
    let p = profile(82.5, ActivityLevel::Moderate, Climate::VeryHot, ThirstLevel::High);
    let intake = DailyIntake {
        avg_intake_ml: 3100.0,
    };
    let a = analyzer();

    let first = a.evaluate(&p, &intake).unwrap();
    let second = a.evaluate(&p, &intake).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_tips_are_never_empty() {
    for intake_ml in [300.0, 1500.0, 2200.0, 3000.0, 9000.0] {
        let assessment = evaluate(
            &profile(70.0, ActivityLevel::Low, Climate::Mild, ThirstLevel::Normal),
            intake_ml,
        );
        assert!(!assessment.tips.is_empty(), "no tips at {intake_ml} ml");
    }
}
