// ABOUTME: Evolution configuration for assessment comparison and trend analysis
// ABOUTME: Change thresholds that turn numeric deltas into qualitative notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use serde::{Deserialize, Serialize};

/// Minimum changes that produce a note when comparing two assessments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionThresholds {
    /// Weight change worth reporting (kg)
    pub weight_change_kg: f64,
    /// Body-fat change worth reporting (percentage points)
    pub body_fat_change_pct: f64,
    /// Lean-mass change worth reporting (kg)
    pub lean_mass_change_kg: f64,
    /// Waist change worth reporting (cm)
    pub waist_change_cm: f64,
    /// Limb circumference gain worth reporting (cm)
    pub limb_gain_cm: f64,
    /// Score improvement counted as progress (points)
    pub score_improvement: f64,
    /// Score improvement counted as significant progress (points)
    pub significant_score_improvement: f64,
}

impl Default for EvolutionThresholds {
    fn default() -> Self {
        Self {
            weight_change_kg: 1.0,
            body_fat_change_pct: 1.0,
            lean_mass_change_kg: 0.5,
            waist_change_cm: 1.0,
            limb_gain_cm: 0.5,
            score_improvement: 2.0,
            significant_score_improvement: 5.0,
        }
    }
}

/// Trend classification parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// First-to-last change below this is stable (%)
    pub stable_threshold_pct: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_threshold_pct: 2.0,
        }
    }
}
