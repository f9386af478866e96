// ABOUTME: Summary composition from the profile and computed ideal range
// ABOUTME: Fixed-order, independently-conditioned sentence fragments joined with spaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Human-readable summary generation.

use crate::config::MessagesConfig;
use crate::intelligence::deviation::IdealRange;
use crate::models::{ActivityLevel, Climate, HydrationProfile, ThirstLevel};

/// Build the "key patterns" summary for an assessment
///
/// The range sentence always leads; the remaining fragments are each
/// independently conditioned on the profile and appended in a fixed order.
/// The conditions are not mutually exclusive and must stay separate `if`
/// blocks rather than an if/else chain.
#[must_use]
pub fn build_summary(
    profile: &HydrationProfile,
    range: &IdealRange,
    messages: &MessagesConfig,
) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        "Your calculated optimal hydration range is {:.0}–{:.0} ml/day.",
        range.low_ml, range.high_ml
    ));

    if profile.thirst_level == ThirstLevel::High {
        parts.push(messages.thirst_high.clone());
    }

    if profile.thirst_level == ThirstLevel::Low {
        parts.push(messages.thirst_low.clone());
    }

    if profile.activity_level == ActivityLevel::High {
        parts.push(messages.high_activity.clone());
    }

    if profile.climate != Climate::Mild {
        parts.push(messages.climate.clone());
    }

    parts.join(" ")
}
