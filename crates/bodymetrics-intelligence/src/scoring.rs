// ABOUTME: Modular score engine and overall score aggregator
// ABOUTME: Upper, lower, posterior, proportional, and composition sub-scores with weighted overall score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Modular Scores
//!
//! Five independent 0-100 scores, each a sum of weighted components. A
//! component whose inputs are missing contributes 0 points; the remaining
//! components are not renormalized, so incomplete data lowers the score.
//!
//! | Score | Components (max points) |
//! |---|---|
//! | Upper | shoulders 25, chest 25, contracted arm 25, scapular breadth 15, arm symmetry 10 |
//! | Lower | thigh 35, calf 35, hip 20, lower symmetry 10 |
//! | Posterior | V-taper 40, posterior index 35, shoulder breadth 25 |
//! | Proportional | WHR 30, WHtR 30, chest/waist 25, shoulder/waist 15 |
//! | Composition | body fat 70, BMI 30 |

use crate::config::{CompositionScoringConfig, OverallWeights, SymmetryConfig};
use crate::ideals::{IdealDeviation, MuscleRegion};
use crate::indices::BasicIndices;
use crate::numeric::round_to;
use crate::proportions::Proportions;
use crate::structural::{PosteriorDevelopment, StructuralIndices};
use crate::symmetry::{region_score, SymmetryAnalysis};
use bodymetrics_core::models::{BilateralRegion, BiologicalSex, MeasurementSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Band shared by every modular score and the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreClass {
    /// >= 85
    Athletic,
    /// >= 70
    Aesthetic,
    /// >= 50
    Intermediate,
    /// >= 30
    Developing,
    /// < 30
    Beginner,
}

impl ScoreClass {
    /// Band for a 0-100 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::Athletic
        } else if score >= 70.0 {
            Self::Aesthetic
        } else if score >= 50.0 {
            Self::Intermediate
        } else if score >= 30.0 {
            Self::Developing
        } else {
            Self::Beginner
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Athletic => "Athletic",
            Self::Aesthetic => "Aesthetic",
            Self::Intermediate => "Intermediate",
            Self::Developing => "Developing",
            Self::Beginner => "Beginner",
        }
    }
}

/// One weighted part of a modular score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Component name
    pub name: String,
    /// Points earned
    pub points: f64,
    /// Maximum points
    pub max_points: f64,
    /// Whether the inputs were present
    pub available: bool,
}

impl ScoreComponent {
    fn new(name: &str, max_points: f64, points: Option<f64>) -> Self {
        Self {
            name: name.to_owned(),
            points: points.unwrap_or(0.0),
            max_points,
            available: points.is_some(),
        }
    }
}

/// A 0-100 score with its breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModularScore {
    /// Total points, 1 decimal
    pub score: f64,
    /// Band
    pub classification: ScoreClass,
    /// Breakdown
    pub components: Vec<ScoreComponent>,
}

impl ModularScore {
    fn from_components(components: Vec<ScoreComponent>) -> Self {
        let total: f64 = components.iter().map(|c| c.points).sum();
        let score = round_to(total.clamp(0.0, 100.0), 1);
        Self {
            score,
            classification: ScoreClass::from_score(score),
            components,
        }
    }
}

/// Everything the score engine reads from earlier stages
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    /// Raw measurements
    pub measurements: &'a MeasurementSet,
    /// Formula branch
    pub sex: BiologicalSex,
    /// Deviation from ideal per muscular region
    pub deviations: &'a BTreeMap<MuscleRegion, IdealDeviation>,
    /// Left/right analysis
    pub symmetry: &'a SymmetryAnalysis,
    /// Frame indices
    pub structural: &'a StructuralIndices,
    /// BMI, body fat, waist ratios
    pub indices: &'a BasicIndices,
    /// Circumference ratios
    pub proportions: &'a Proportions,
}

/// Points for a deviation-from-ideal, banded by absolute percent
#[must_use]
pub fn ideal_proximity_points(deviation: Option<&IdealDeviation>, weight: f64) -> Option<f64> {
    let pct = deviation?.percent_difference?.abs();
    let fraction = if pct <= 5.0 {
        1.0
    } else if pct <= 10.0 {
        0.8
    } else if pct <= 15.0 {
        0.6
    } else if pct <= 20.0 {
        0.4
    } else {
        0.2
    };
    Some(weight * fraction)
}

/// Upper-body score
#[must_use]
pub fn upper_score(inputs: &ScoringInputs<'_>) -> ModularScore {
    let dev = |region| inputs.deviations.get(&region);

    let scapular = inputs.measurements.shoulder_breadth.map(|breadth| {
        if breadth >= 35.0 {
            15.0
        } else if breadth >= 32.0 {
            12.0
        } else {
            9.0
        }
    });

    let arm_symmetry = inputs
        .symmetry
        .region(BilateralRegion::ContractedArm)
        .or_else(|| inputs.symmetry.region(BilateralRegion::RelaxedArm))
        .map(|s| {
            if s.percent_difference < 5.0 {
                10.0
            } else if s.percent_difference <= 10.0 {
                7.0
            } else {
                4.0
            }
        });

    ModularScore::from_components(vec![
        ScoreComponent::new(
            "shoulders",
            25.0,
            ideal_proximity_points(dev(MuscleRegion::Shoulders), 25.0),
        ),
        ScoreComponent::new(
            "chest",
            25.0,
            ideal_proximity_points(dev(MuscleRegion::Chest), 25.0),
        ),
        ScoreComponent::new(
            "contracted_arm",
            25.0,
            ideal_proximity_points(dev(MuscleRegion::ContractedArm), 25.0),
        ),
        ScoreComponent::new("scapular_breadth", 15.0, scapular),
        ScoreComponent::new("arm_symmetry", 10.0, arm_symmetry),
    ])
}

/// Lower-body score
#[must_use]
pub fn lower_score(inputs: &ScoringInputs<'_>, symmetry_config: &SymmetryConfig) -> ModularScore {
    let dev = |region| inputs.deviations.get(&region);

    let hip = inputs.measurements.hip.map(|hip| {
        if (85.0..=110.0).contains(&hip) {
            20.0
        } else if (80.0..=115.0).contains(&hip) {
            15.0
        } else {
            10.0
        }
    });

    let leg_scores: Vec<f64> = [BilateralRegion::Thigh, BilateralRegion::Calf]
        .into_iter()
        .filter_map(|region| inputs.symmetry.region(region))
        .map(|s| region_score(s.percent_difference, symmetry_config))
        .collect();
    let lower_symmetry = if leg_scores.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = leg_scores.iter().sum::<f64>() / leg_scores.len() as f64;
        Some(mean / 100.0 * 10.0)
    };

    ModularScore::from_components(vec![
        ScoreComponent::new(
            "thigh",
            35.0,
            ideal_proximity_points(dev(MuscleRegion::Thigh), 35.0),
        ),
        ScoreComponent::new(
            "calf",
            35.0,
            ideal_proximity_points(dev(MuscleRegion::Calf), 35.0),
        ),
        ScoreComponent::new("hip", 20.0, hip),
        ScoreComponent::new("lower_symmetry", 10.0, lower_symmetry),
    ])
}

/// Posterior-chain score
#[must_use]
pub fn posterior_score(inputs: &ScoringInputs<'_>) -> ModularScore {
    let v_taper = inputs.proportions.shoulder_waist.map(|r| {
        if r >= 1.40 {
            40.0
        } else if r >= 1.30 {
            32.0
        } else if r >= 1.20 {
            24.0
        } else {
            16.0
        }
    });

    let posterior = inputs
        .structural
        .posterior
        .map(|reading| match reading.classification {
            PosteriorDevelopment::HighlyDeveloped => 35.0,
            PosteriorDevelopment::Balanced => 28.0,
            PosteriorDevelopment::Underdeveloped => 18.0,
        });

    let breadth = inputs.measurements.shoulder_breadth.map(|b| {
        if b >= 40.0 {
            25.0
        } else if b >= 35.0 {
            20.0
        } else {
            15.0
        }
    });

    ModularScore::from_components(vec![
        ScoreComponent::new("v_taper", 40.0, v_taper),
        ScoreComponent::new("posterior_index", 35.0, posterior),
        ScoreComponent::new("shoulder_breadth", 25.0, breadth),
    ])
}

fn descending_bands(value: f64, edges: [f64; 3], points: [f64; 4]) -> f64 {
    if value <= edges[0] {
        points[0]
    } else if value <= edges[1] {
        points[1]
    } else if value <= edges[2] {
        points[2]
    } else {
        points[3]
    }
}

fn ascending_bands(value: f64, edges: [f64; 3], points: [f64; 4]) -> f64 {
    if value >= edges[0] {
        points[0]
    } else if value >= edges[1] {
        points[1]
    } else if value >= edges[2] {
        points[2]
    } else {
        points[3]
    }
}

/// Proportional score
#[must_use]
pub fn proportional_score(inputs: &ScoringInputs<'_>) -> ModularScore {
    let whr = inputs.indices.waist_hip.map(|r| {
        descending_bands(r.value, [0.85, 0.90, 0.95], [30.0, 24.0, 18.0, 12.0])
    });
    let whtr = inputs.indices.waist_height.map(|r| {
        descending_bands(r.value, [0.50, 0.55, 0.60], [30.0, 24.0, 18.0, 12.0])
    });
    let chest_waist = inputs
        .proportions
        .chest_waist
        .map(|r| ascending_bands(r, [1.40, 1.30, 1.20], [25.0, 20.0, 15.0, 10.0]));
    let shoulder_waist = inputs
        .proportions
        .shoulder_waist
        .map(|r| ascending_bands(r, [1.50, 1.40, 1.30], [15.0, 12.0, 9.0, 6.0]));

    ModularScore::from_components(vec![
        ScoreComponent::new("waist_hip_ratio", 30.0, whr),
        ScoreComponent::new("waist_height_ratio", 30.0, whtr),
        ScoreComponent::new("chest_waist_ratio", 25.0, chest_waist),
        ScoreComponent::new("shoulder_waist_ratio", 15.0, shoulder_waist),
    ])
}

/// Body-fat points (max 70) relative to the sex-specific ideal band
#[must_use]
pub fn body_fat_points(
    body_fat_pct: f64,
    sex: BiologicalSex,
    config: &CompositionScoringConfig,
) -> f64 {
    const MAX_POINTS: f64 = 70.0;
    let (min, max) = config.ideal_band(sex);
    if body_fat_pct < min {
        let deficit = min - body_fat_pct;
        (MAX_POINTS - deficit * config.deficit_penalty).max(config.deficit_floor)
    } else if body_fat_pct > max {
        let excess = body_fat_pct - max;
        (MAX_POINTS - excess * config.excess_penalty).max(config.excess_floor)
    } else {
        MAX_POINTS
    }
}

/// BMI points (max 30)
#[must_use]
pub fn bmi_points(bmi: f64) -> f64 {
    if (18.5..=24.9).contains(&bmi) {
        30.0
    } else if (17.5..18.5).contains(&bmi) || (bmi > 24.9 && bmi <= 27.0) {
        24.0
    } else if (16.5..17.5).contains(&bmi) || (bmi > 27.0 && bmi <= 30.0) {
        18.0
    } else {
        12.0
    }
}

/// Composition score
#[must_use]
pub fn composition_score(
    inputs: &ScoringInputs<'_>,
    config: &CompositionScoringConfig,
) -> ModularScore {
    let body_fat = inputs
        .indices
        .body_fat
        .map(|bf| body_fat_points(bf.percent, inputs.sex, config));
    let bmi = inputs.indices.bmi.map(|b| bmi_points(b.value));

    ModularScore::from_components(vec![
        ScoreComponent::new("body_fat", 70.0, body_fat),
        ScoreComponent::new("bmi", 30.0, bmi),
    ])
}

/// The five modular scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModularScores {
    /// Upper body
    pub upper: ModularScore,
    /// Lower body
    pub lower: ModularScore,
    /// Posterior chain
    pub posterior: ModularScore,
    /// Proportions
    pub proportional: ModularScore,
    /// Body composition
    pub composition: ModularScore,
}

impl ModularScores {
    /// Compute all five scores
    #[must_use]
    pub fn calculate(
        inputs: &ScoringInputs<'_>,
        composition: &CompositionScoringConfig,
        symmetry: &SymmetryConfig,
    ) -> Self {
        Self {
            upper: upper_score(inputs),
            lower: lower_score(inputs, symmetry),
            posterior: posterior_score(inputs),
            proportional: proportional_score(inputs),
            composition: composition_score(inputs, composition),
        }
    }
}

/// Weighted combination of the five modular scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    /// 0-100, 1 decimal
    pub score: f64,
    /// Band
    pub classification: ScoreClass,
}

impl OverallScore {
    /// Aggregate sub-scores with the configured weights
    #[must_use]
    pub fn calculate(scores: &ModularScores, weights: &OverallWeights) -> Self {
        Self::from_values(
            [
                scores.composition.score,
                scores.proportional.score,
                scores.upper.score,
                scores.lower.score,
                scores.posterior.score,
            ],
            weights,
        )
    }

    /// Aggregate raw values ordered composition, proportional, upper, lower, posterior
    #[must_use]
    pub fn from_values(values: [f64; 5], weights: &OverallWeights) -> Self {
        let [composition, proportional, upper, lower, posterior] = values;
        let weighted = composition * weights.composition
            + proportional * weights.proportional
            + upper * weights.upper
            + lower * weights.lower
            + posterior * weights.posterior;
        let score = round_to(weighted, 1).clamp(0.0, 100.0);
        Self {
            score,
            classification: ScoreClass::from_score(score),
        }
    }
}
