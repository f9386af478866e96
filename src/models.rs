// ABOUTME: Transient domain models describing the person and their reported intake
// ABOUTME: Enumerated activity/climate/thirst inputs plus the profile and intake structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hydralert Project

//! Input models for hydration analysis.
//!
//! All entities here are constructed per evaluation and discarded after the
//! result is rendered; nothing persists between invocations. Enum variants
//! serialize in camelCase to match the JSON wire form used by UI callers
//! (`veryHot`, not `very_hot`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical activity level reported by the person
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Mostly sedentary
    Low,
    /// Light workouts
    Moderate,
    /// Intense training
    High,
}

/// Ambient climate the person lives in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Climate {
    /// Mild or indoor climate
    Mild,
    /// Hot climate
    Hot,
    /// Very hot climate
    VeryHot,
}

/// Subjective thirst frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ThirstLevel {
    /// Normal thirst
    Normal,
    /// Rarely thirsty
    Low,
    /// Very thirsty
    High,
}

/// Per-person inputs that drive the ideal range computation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HydrationProfile {
    /// Body weight in kilograms (must be >= 30)
    pub weight_kg: f64,
    /// Reported activity level
    pub activity_level: ActivityLevel,
    /// Reported climate
    pub climate: Climate,
    /// Reported thirst frequency
    pub thirst_level: ThirstLevel,
}

/// Reported average daily water consumption
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyIntake {
    /// Average daily intake in millilitres (must be >= 200)
    pub avg_intake_ml: f64,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unknown activity level '{other}' (expected low, moderate, or high)"
            )),
        }
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mild => write!(f, "mild"),
            Self::Hot => write!(f, "hot"),
            Self::VeryHot => write!(f, "veryHot"),
        }
    }
}

impl FromStr for Climate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Self::Mild),
            "hot" => Ok(Self::Hot),
            "veryHot" | "very-hot" => Ok(Self::VeryHot),
            other => Err(format!(
                "unknown climate '{other}' (expected mild, hot, or veryHot)"
            )),
        }
    }
}

impl fmt::Display for ThirstLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for ThirstLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unknown thirst level '{other}' (expected normal, low, or high)"
            )),
        }
    }
}
