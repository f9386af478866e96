// ABOUTME: Hydralert CLI - evaluates a hydration profile and renders the assessment
// ABOUTME: Thin host over the deviation engine; all decision logic lives in the library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project
//!
//! Usage:
//! ```bash
//! # Check a 70 kg person drinking 2.5 L/day
//! hydralert-cli --weight-kg 70 --intake-ml 2500
//!
//! # Full profile with machine-readable output
//! hydralert-cli --weight-kg 70 --intake-ml 1000 \
//!     --activity high --climate veryHot --thirst high --json
//! ```

use anyhow::Result;
use clap::Parser;
use hydralert::intelligence::{DeviationLevel, HydrationAnalyzer, HydrationAssessment};
use hydralert::logging::LoggingConfig;
use hydralert::models::{ActivityLevel, Climate, DailyIntake, HydrationProfile, ThirstLevel};
use std::process;
use tracing::info;

/// Shown under every text rendering, mirroring the product disclaimer.
const DISCLAIMER: &str = "Over- or under-hydration may be influenced by diet, climate, exercise, \
                          or medications. Consult a professional for persistent symptoms.";

#[derive(Parser)]
#[command(
    name = "hydralert-cli",
    about = "Hydration deviation check",
    long_about = "Detect over- or under-hydration based on body weight, habits, and environment."
)]
struct Cli {
    /// Body weight in kilograms (30+)
    #[arg(long)]
    weight_kg: f64,

    /// Average daily water intake in millilitres (200+)
    #[arg(long)]
    intake_ml: f64,

    /// Activity level: low, moderate, or high
    #[arg(long, default_value = "low")]
    activity: ActivityLevel,

    /// Climate: mild, hot, or veryHot
    #[arg(long, default_value = "mild")]
    climate: Climate,

    /// Thirst level: normal, low, or high
    #[arg(long, default_value = "normal")]
    thirst: ThirstLevel,

    /// Print the assessment as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let profile = HydrationProfile {
        weight_kg: cli.weight_kg,
        activity_level: cli.activity,
        climate: cli.climate,
        thirst_level: cli.thirst,
    };
    let intake = DailyIntake {
        avg_intake_ml: cli.intake_ml,
    };

    let analyzer = HydrationAnalyzer::new();
    let assessment = analyzer.evaluate(&profile, &intake)?;

    info!(label = %assessment.label, "assessment complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_text(&assessment);
    }

    Ok(())
}

/// ANSI color for the level badge.
///
/// Exhaustive on purpose: adding a deviation level without choosing its
/// style must fail to compile.
fn badge_color(level: DeviationLevel) -> &'static str {
    match level {
        DeviationLevel::Normal => "\x1b[32m",   // green
        DeviationLevel::Low => "\x1b[33m",      // yellow
        DeviationLevel::VeryLow => "\x1b[31m",  // red
        DeviationLevel::High => "\x1b[34m",     // blue
        DeviationLevel::VeryHigh => "\x1b[35m", // magenta
    }
}

fn render_text(assessment: &HydrationAssessment) {
    let color = badge_color(assessment.level);
    let reset = "\x1b[0m";

    println!("Hydration Analysis  {color}[{}]{reset}", assessment.label);
    println!();
    println!(
        "Optimal Range: {:.0}–{:.0} ml/day",
        assessment.range.low_ml, assessment.range.high_ml
    );
    println!("Your intake:   {:.0} ml/day", assessment.actual_intake_ml);
    println!();
    println!("Key Patterns");
    println!("  {}", assessment.summary);
    println!();
    println!("Actionable Tips");
    for tip in &assessment.tips {
        println!("  - {tip}");
    }
    println!();
    println!("{DISCLAIMER}");
}
