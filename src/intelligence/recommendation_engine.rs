// ABOUTME: Actionable tip generation keyed by deviation level and profile
// ABOUTME: Independently-guarded under/over blocks plus an always-on generic tip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Tip recommendation generation.

use crate::config::MessagesConfig;
use crate::intelligence::deviation::DeviationLevel;
use crate::models::{ActivityLevel, HydrationProfile};

/// Build the ordered tip list for an assessment
///
/// The under- and over-hydration blocks are guarded independently rather than
/// chained: today the level partition makes them exclusive, but a taxonomy
/// extension that put a level in both sets must trigger both blocks. The
/// generic closing tip is unconditional, so the result is never empty.
#[must_use]
pub fn build_tips(
    profile: &HydrationProfile,
    level: DeviationLevel,
    messages: &MessagesConfig,
) -> Vec<String> {
    let mut tips = Vec::new();

    if matches!(level, DeviationLevel::Low | DeviationLevel::VeryLow) {
        tips.push(messages.tip_increase_intake.clone());
        tips.push(messages.tip_carry_bottle.clone());
        if profile.activity_level != ActivityLevel::Low {
            tips.push(messages.tip_electrolytes_active.clone());
        }
    }

    if matches!(level, DeviationLevel::High | DeviationLevel::VeryHigh) {
        tips.push(messages.tip_avoid_forcing.clone());
        tips.push(messages.tip_spread_hydration.clone());
        tips.push(messages.tip_monitor_electrolytes.clone());
    }

    tips.push(messages.tip_generic_indicators.clone());

    tips
}
