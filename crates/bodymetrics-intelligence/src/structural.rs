// ABOUTME: Structural index calculator for skeletal-frame ratios
// ABOUTME: Superior frame shape, bone robustness, posterior development, and shoulder structural factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Structural Indices
//!
//! Ratios describing the bone frame independently of muscle or fat. Each
//! index needs specific inputs and is omitted when any of them is absent.

use crate::bilateral::BilateralAverages;
use crate::numeric::round_to;
use bodymetrics_core::models::{BiologicalSex, MeasurementSet};
use serde::{Deserialize, Serialize};

/// Expected biacromial breadth as a fraction of height (male)
const MALE_SHOULDER_BREADTH_RATIO: f64 = 0.23;
/// Expected biacromial breadth as a fraction of height (female)
const FEMALE_SHOULDER_BREADTH_RATIO: f64 = 0.21;

/// Frame shape from shoulder breadth over hip breadth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameShape {
    /// Shoulders dominate (> 1.10)
    Inverted,
    /// Balanced (0.95 to 1.10)
    Neutral,
    /// Hips dominate (< 0.95)
    Triangular,
}

/// Bone robustness from wrist and ankle breadths relative to height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoneRobustness {
    /// Below 0.105
    Light,
    /// 0.105 to 0.115
    Medium,
    /// Above 0.115
    Robust,
}

/// Back development from shoulder circumference over shoulder breadth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosteriorDevelopment {
    /// Below 2.8
    Underdeveloped,
    /// 2.8 to 3.2
    Balanced,
    /// Above 3.2
    HighlyDeveloped,
}

/// A computed ratio with its classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexReading<C> {
    /// Rounded ratio
    pub value: f64,
    /// Band the ratio falls into
    pub classification: C,
}

/// Shoulder breadth / hip breadth, rounded to 3 decimals
#[must_use]
pub fn structural_superior_index(
    shoulder_breadth: Option<f64>,
    hip_breadth: Option<f64>,
) -> Option<IndexReading<FrameShape>> {
    let shoulder = shoulder_breadth.filter(|v| *v > 0.0)?;
    let hip = hip_breadth.filter(|v| *v > 0.0)?;
    let value = round_to(shoulder / hip, 3);
    let classification = if value > 1.10 {
        FrameShape::Inverted
    } else if value >= 0.95 {
        FrameShape::Neutral
    } else {
        FrameShape::Triangular
    };
    Some(IndexReading {
        value,
        classification,
    })
}

/// (wrist breadth + ankle breadth) / height, rounded to 4 decimals
#[must_use]
pub fn bone_robustness_index(
    wrist_breadth: Option<f64>,
    ankle_breadth: Option<f64>,
    height_cm: f64,
) -> Option<IndexReading<BoneRobustness>> {
    let wrist = wrist_breadth.filter(|v| *v > 0.0)?;
    let ankle = ankle_breadth.filter(|v| *v > 0.0)?;
    if height_cm <= 0.0 {
        return None;
    }
    let value = round_to((wrist + ankle) / height_cm, 4);
    let classification = if value < 0.105 {
        BoneRobustness::Light
    } else if value <= 0.115 {
        BoneRobustness::Medium
    } else {
        BoneRobustness::Robust
    };
    Some(IndexReading {
        value,
        classification,
    })
}

/// Shoulder circumference / shoulder breadth, rounded to 2 decimals
#[must_use]
pub fn posterior_index(
    shoulder_circumference: Option<f64>,
    shoulder_breadth: Option<f64>,
) -> Option<IndexReading<PosteriorDevelopment>> {
    let circumference = shoulder_circumference.filter(|v| *v > 0.0)?;
    let breadth = shoulder_breadth.filter(|v| *v > 0.0)?;
    let value = round_to(circumference / breadth, 2);
    let classification = if value < 2.8 {
        PosteriorDevelopment::Underdeveloped
    } else if value <= 3.2 {
        PosteriorDevelopment::Balanced
    } else {
        PosteriorDevelopment::HighlyDeveloped
    };
    Some(IndexReading {
        value,
        classification,
    })
}

/// Actual shoulder breadth over the breadth expected for this height and sex
///
/// A value of 1.0 means an average frame. Rounded to 3 decimals.
#[must_use]
pub fn shoulder_structural_factor(
    shoulder_breadth: Option<f64>,
    height_cm: f64,
    sex: BiologicalSex,
) -> Option<f64> {
    let breadth = shoulder_breadth.filter(|v| *v > 0.0)?;
    if height_cm <= 0.0 {
        return None;
    }
    let expected =
        height_cm * sex.select(MALE_SHOULDER_BREADTH_RATIO, FEMALE_SHOULDER_BREADTH_RATIO);
    Some(round_to(breadth / expected, 3))
}

/// All structural indices for one assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralIndices {
    /// Frame shape index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superior: Option<IndexReading<FrameShape>>,
    /// Bone robustness index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bone_robustness: Option<IndexReading<BoneRobustness>>,
    /// Posterior development index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posterior: Option<IndexReading<PosteriorDevelopment>>,
    /// Frame multiplier applied to ideal targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_factor: Option<f64>,
}

impl StructuralIndices {
    /// Compute every structural index the inputs allow
    #[must_use]
    pub fn calculate(
        measurements: &MeasurementSet,
        averages: &BilateralAverages,
        sex: BiologicalSex,
    ) -> Self {
        Self {
            superior: structural_superior_index(
                measurements.shoulder_breadth,
                measurements.hip_breadth,
            ),
            bone_robustness: bone_robustness_index(
                averages.wrist_breadth,
                averages.ankle_breadth,
                measurements.height_cm,
            ),
            posterior: posterior_index(measurements.shoulders, measurements.shoulder_breadth),
            shoulder_factor: shoulder_structural_factor(
                measurements.shoulder_breadth,
                measurements.height_cm,
                sex,
            ),
        }
    }
}
