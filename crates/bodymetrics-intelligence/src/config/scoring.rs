// ABOUTME: Scoring configuration for modular and overall body scores
// ABOUTME: Overall score weights, composition ideal bands, and symmetry thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! Scoring Configuration
//!
//! Thresholds consumed by the symmetry analyzer, the composition sub-score
//! and the overall score aggregator.

use bodymetrics_core::models::BiologicalSex;
use serde::{Deserialize, Serialize};

/// Weights combining the five modular scores into the overall score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallWeights {
    /// Composition sub-score weight (0.0-1.0)
    pub composition: f64,
    /// Proportional sub-score weight (0.0-1.0)
    pub proportional: f64,
    /// Upper-body sub-score weight (0.0-1.0)
    pub upper: f64,
    /// Lower-body sub-score weight (0.0-1.0)
    pub lower: f64,
    /// Posterior-chain sub-score weight (0.0-1.0)
    pub posterior: f64,
}

impl OverallWeights {
    /// Sum of all five weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.composition + self.proportional + self.upper + self.lower + self.posterior
    }
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            composition: 0.30,
            proportional: 0.25,
            upper: 0.20,
            lower: 0.15,
            posterior: 0.10,
        }
    }
}

/// Body-fat scoring parameters for the composition sub-score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionScoringConfig {
    /// Lower edge of the male ideal body-fat band (%)
    pub male_ideal_min_pct: f64,
    /// Upper edge of the male ideal body-fat band (%)
    pub male_ideal_max_pct: f64,
    /// Lower edge of the female ideal body-fat band (%)
    pub female_ideal_min_pct: f64,
    /// Upper edge of the female ideal body-fat band (%)
    pub female_ideal_max_pct: f64,
    /// Points lost per percentage point below the band
    pub deficit_penalty: f64,
    /// Points lost per percentage point above the band
    pub excess_penalty: f64,
    /// Minimum body-fat points when below the band
    pub deficit_floor: f64,
    /// Minimum body-fat points when above the band
    pub excess_floor: f64,
}

impl CompositionScoringConfig {
    /// Ideal body-fat band `(min, max)` for the given sex
    #[must_use]
    pub const fn ideal_band(&self, sex: BiologicalSex) -> (f64, f64) {
        match sex {
            BiologicalSex::Male => (self.male_ideal_min_pct, self.male_ideal_max_pct),
            BiologicalSex::Female => (self.female_ideal_min_pct, self.female_ideal_max_pct),
        }
    }
}

impl Default for CompositionScoringConfig {
    fn default() -> Self {
        Self {
            male_ideal_min_pct: 10.0,
            male_ideal_max_pct: 15.0,
            female_ideal_min_pct: 18.0,
            female_ideal_max_pct: 23.0,
            deficit_penalty: 4.0,
            excess_penalty: 3.0,
            deficit_floor: 35.0,
            excess_floor: 20.0,
        }
    }
}

/// Left/right difference thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryConfig {
    /// Differences strictly below this are ideal (%)
    pub ideal_threshold_pct: f64,
    /// Differences up to and including this need attention (%)
    pub attention_threshold_pct: f64,
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            ideal_threshold_pct: 5.0,
            attention_threshold_pct: 10.0,
        }
    }
}
