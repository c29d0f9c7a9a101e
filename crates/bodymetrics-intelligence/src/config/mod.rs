// ABOUTME: Analysis configuration for the assessment pipeline and comparator
// ABOUTME: Defaults, BODYMETRICS_* environment overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Analysis Configuration
//!
//! Every tunable threshold used by the scoring and comparison stages lives
//! here. Defaults reproduce the reference scoring tables; environment
//! variables prefixed with `BODYMETRICS_` override individual values.

/// Comparison and trend thresholds
pub mod evolution;
/// Score weights, composition bands and symmetry thresholds
pub mod scoring;

pub use evolution::{EvolutionThresholds, TrendConfig};
pub use scoring::{CompositionScoringConfig, OverallWeights, SymmetryConfig};

use bodymetrics_core::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Tolerance when checking that overall weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Main analysis configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Weights of the five modular scores in the overall score
    pub overall_weights: OverallWeights,
    /// Body-fat scoring bands and penalties
    pub composition: CompositionScoringConfig,
    /// Symmetry classification thresholds
    pub symmetry: SymmetryConfig,
    /// Comparison note thresholds
    pub evolution: EvolutionThresholds,
    /// Trend direction parameters
    pub trend: TrendConfig,
}

impl AnalysisConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when bands are unordered, penalties are not positive,
    /// weights do not sum to 1.0, or symmetry thresholds are inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.overall_weights;
        let all_weights = [
            weights.composition,
            weights.proportional,
            weights.upper,
            weights.lower,
            weights.posterior,
        ];
        if all_weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(ConfigError::ValueOutOfRange(
                "Overall score weights must be within [0, 1]",
            ));
        }
        if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Overall score weights must sum to 1.0",
            ));
        }

        let comp = &self.composition;
        if comp.male_ideal_min_pct >= comp.male_ideal_max_pct {
            return Err(ConfigError::InvalidRange(
                "male_ideal_min_pct must be < male_ideal_max_pct",
            ));
        }
        if comp.female_ideal_min_pct >= comp.female_ideal_max_pct {
            return Err(ConfigError::InvalidRange(
                "female_ideal_min_pct must be < female_ideal_max_pct",
            ));
        }
        if comp.deficit_penalty <= 0.0 || comp.excess_penalty <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Body-fat penalties must be positive",
            ));
        }

        if self.symmetry.ideal_threshold_pct <= 0.0
            || self.symmetry.attention_threshold_pct <= self.symmetry.ideal_threshold_pct
        {
            return Err(ConfigError::InvalidRange(
                "Symmetry thresholds must satisfy 0 < ideal < attention",
            ));
        }

        if self.evolution.significant_score_improvement < self.evolution.score_improvement {
            return Err(ConfigError::InvalidRange(
                "significant_score_improvement must be >= score_improvement",
            ));
        }

        if self.trend.stable_threshold_pct < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend stable threshold must not be negative",
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

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Overall weights
        Self::apply_env_var(
            "BODYMETRICS_WEIGHT_COMPOSITION",
            &mut self.overall_weights.composition,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_WEIGHT_PROPORTIONAL",
            &mut self.overall_weights.proportional,
        )?;
        Self::apply_env_var("BODYMETRICS_WEIGHT_UPPER", &mut self.overall_weights.upper)?;
        Self::apply_env_var("BODYMETRICS_WEIGHT_LOWER", &mut self.overall_weights.lower)?;
        Self::apply_env_var(
            "BODYMETRICS_WEIGHT_POSTERIOR",
            &mut self.overall_weights.posterior,
        )?;

        // Composition bands
        Self::apply_env_var(
            "BODYMETRICS_MALE_BODY_FAT_MIN",
            &mut self.composition.male_ideal_min_pct,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_MALE_BODY_FAT_MAX",
            &mut self.composition.male_ideal_max_pct,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_FEMALE_BODY_FAT_MIN",
            &mut self.composition.female_ideal_min_pct,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_FEMALE_BODY_FAT_MAX",
            &mut self.composition.female_ideal_max_pct,
        )?;

        // Symmetry
        Self::apply_env_var(
            "BODYMETRICS_SYMMETRY_IDEAL_PCT",
            &mut self.symmetry.ideal_threshold_pct,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_SYMMETRY_ATTENTION_PCT",
            &mut self.symmetry.attention_threshold_pct,
        )?;

        // Evolution and trend
        Self::apply_env_var(
            "BODYMETRICS_EVOLUTION_WEIGHT_KG",
            &mut self.evolution.weight_change_kg,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_EVOLUTION_BODY_FAT_PCT",
            &mut self.evolution.body_fat_change_pct,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_EVOLUTION_LEAN_MASS_KG",
            &mut self.evolution.lean_mass_change_kg,
        )?;
        Self::apply_env_var(
            "BODYMETRICS_TREND_STABLE_PCT",
            &mut self.trend.stable_threshold_pct,
        )?;

        Ok(self)
    }
}
