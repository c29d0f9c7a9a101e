// ABOUTME: Ideal-target calculator for muscular circumferences
// ABOUTME: Height-based proportions adjusted by the shoulder structural factor, plus deviation-from-ideal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Ideal Targets
//!
//! Reference circumferences derived from height (classic wrist-baseline
//! proportions) and, when a frame measurement exists, scaled by the
//! shoulder structural factor. Targets are comparison baselines, not goals.

use crate::bilateral::BilateralAverages;
use crate::numeric::round_to;
use bodymetrics_core::models::{BiologicalSex, MeasurementSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Proportion constants for one sex
struct IdealProportions {
    wrist_baseline: f64,
    neck: f64,
    shoulders: f64,
    chest: f64,
    forearm: f64,
    thigh: f64,
}

const MALE_PROPORTIONS: IdealProportions = IdealProportions {
    wrist_baseline: 0.100,
    neck: 2.52,
    shoulders: 0.629,
    chest: 0.577,
    forearm: 2.10,
    thigh: 3.52,
};

const FEMALE_PROPORTIONS: IdealProportions = IdealProportions {
    wrist_baseline: 0.095,
    neck: 2.30,
    shoulders: 0.600,
    chest: 0.550,
    forearm: 1.95,
    thigh: 3.20,
};

/// Deviation band edges (%)
const IDEAL_TOLERANCE_PCT: f64 = 5.0;
const FAR_DEVIATION_PCT: f64 = 15.0;

/// Muscular regions that have an ideal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleRegion {
    /// Neck circumference
    Neck,
    /// Shoulder circumference
    Shoulders,
    /// Chest circumference
    Chest,
    /// Contracted arm
    ContractedArm,
    /// Forearm
    Forearm,
    /// Thigh
    Thigh,
    /// Calf
    Calf,
}

impl MuscleRegion {
    /// Every region with a target, in reporting order
    pub const ALL: [Self; 7] = [
        Self::Neck,
        Self::Shoulders,
        Self::Chest,
        Self::ContractedArm,
        Self::Forearm,
        Self::Thigh,
        Self::Calf,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neck => "Neck",
            Self::Shoulders => "Shoulders",
            Self::Chest => "Chest",
            Self::ContractedArm => "Contracted arm",
            Self::Forearm => "Forearm",
            Self::Thigh => "Thigh",
            Self::Calf => "Calf",
        }
    }
}

impl fmt::Display for MuscleRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the targets were derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealBasis {
    /// Height proportions only
    HeightBased,
    /// Height proportions scaled by the shoulder structural factor
    StructureBased,
}

/// Ideal circumference per muscular region (cm)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealTargets {
    /// Neck
    pub neck: f64,
    /// Shoulder circumference
    pub shoulders: f64,
    /// Chest
    pub chest: f64,
    /// Contracted arm
    pub contracted_arm: f64,
    /// Forearm
    pub forearm: f64,
    /// Thigh
    pub thigh: f64,
    /// Calf
    pub calf: f64,
    /// Factor applied to the height-based targets, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structural_factor: Option<f64>,
    /// Derivation tag
    pub basis: IdealBasis,
}

impl IdealTargets {
    /// Height-based targets for the given sex, each rounded to 1 decimal
    #[must_use]
    pub fn height_based(height_cm: f64, sex: BiologicalSex) -> Self {
        let p = match sex {
            BiologicalSex::Male => &MALE_PROPORTIONS,
            BiologicalSex::Female => &FEMALE_PROPORTIONS,
        };
        let baseline = height_cm * p.wrist_baseline;
        let neck = round_to(baseline * p.neck, 1);
        Self {
            neck,
            shoulders: round_to(height_cm * p.shoulders, 1),
            chest: round_to(height_cm * p.chest, 1),
            contracted_arm: neck,
            forearm: round_to(baseline * p.forearm, 1),
            thigh: round_to(baseline * p.thigh, 1),
            calf: neck,
            structural_factor: None,
            basis: IdealBasis::HeightBased,
        }
    }

    /// Targets for the subject, scaled by the structural factor when it differs from 1.0
    #[must_use]
    pub fn calculate(height_cm: f64, sex: BiologicalSex, structural_factor: Option<f64>) -> Self {
        let base = Self::height_based(height_cm, sex);
        match structural_factor {
            Some(factor) if factor > 0.0 && (factor - 1.0).abs() > f64::EPSILON => {
                let scale = |value: f64| round_to(value * factor, 1);
                Self {
                    neck: scale(base.neck),
                    shoulders: scale(base.shoulders),
                    chest: scale(base.chest),
                    contracted_arm: scale(base.contracted_arm),
                    forearm: scale(base.forearm),
                    thigh: scale(base.thigh),
                    calf: scale(base.calf),
                    structural_factor: Some(factor),
                    basis: IdealBasis::StructureBased,
                }
            }
            _ => base,
        }
    }

    /// Target for one region
    #[must_use]
    pub const fn get(&self, region: MuscleRegion) -> f64 {
        match region {
            MuscleRegion::Neck => self.neck,
            MuscleRegion::Shoulders => self.shoulders,
            MuscleRegion::Chest => self.chest,
            MuscleRegion::ContractedArm => self.contracted_arm,
            MuscleRegion::Forearm => self.forearm,
            MuscleRegion::Thigh => self.thigh,
            MuscleRegion::Calf => self.calf,
        }
    }
}

/// Classification of a real value against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationStatus {
    /// Within ±5 %
    Ideal,
    /// Between -15 % and -5 %
    Underdeveloped,
    /// Below -15 %
    VeryUnderdeveloped,
    /// Between 5 % and 15 %
    AboveIdeal,
    /// Above 15 %
    VeryAbove,
    /// Real or ideal value missing
    NotMeasured,
}

impl DeviationStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal",
            Self::Underdeveloped => "Underdeveloped",
            Self::VeryUnderdeveloped => "Very underdeveloped",
            Self::AboveIdeal => "Above ideal",
            Self::VeryAbove => "Very above",
            Self::NotMeasured => "Not measured",
        }
    }
}

/// Difference between a real measurement and its ideal target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealDeviation {
    /// real - ideal (cm), 1 decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_difference: Option<f64>,
    /// (real - ideal) / ideal × 100, 1 decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_difference: Option<f64>,
    /// Band
    pub status: DeviationStatus,
}

impl IdealDeviation {
    const NOT_MEASURED: Self = Self {
        absolute_difference: None,
        percent_difference: None,
        status: DeviationStatus::NotMeasured,
    };
}

/// Compare a real value against its ideal
#[must_use]
pub fn deviation_from_ideal(real: Option<f64>, ideal: Option<f64>) -> IdealDeviation {
    let (Some(real), Some(ideal)) = (real, ideal) else {
        return IdealDeviation::NOT_MEASURED;
    };
    if real <= 0.0 || ideal <= 0.0 {
        return IdealDeviation::NOT_MEASURED;
    }

    let percent = round_to((real - ideal) / ideal * 100.0, 1);
    let status = if percent.abs() <= IDEAL_TOLERANCE_PCT {
        DeviationStatus::Ideal
    } else if percent < -FAR_DEVIATION_PCT {
        DeviationStatus::VeryUnderdeveloped
    } else if percent < -IDEAL_TOLERANCE_PCT {
        DeviationStatus::Underdeveloped
    } else if percent > FAR_DEVIATION_PCT {
        DeviationStatus::VeryAbove
    } else {
        DeviationStatus::AboveIdeal
    };

    IdealDeviation {
        absolute_difference: Some(round_to(real - ideal, 1)),
        percent_difference: Some(percent),
        status,
    }
}

/// Real value measured for a muscular region
#[must_use]
pub const fn measured_value(
    region: MuscleRegion,
    measurements: &MeasurementSet,
    averages: &BilateralAverages,
) -> Option<f64> {
    match region {
        MuscleRegion::Neck => measurements.neck,
        MuscleRegion::Shoulders => measurements.shoulders,
        MuscleRegion::Chest => measurements.chest,
        MuscleRegion::ContractedArm => averages.contracted_arm,
        MuscleRegion::Forearm => averages.forearm,
        MuscleRegion::Thigh => averages.thigh,
        MuscleRegion::Calf => averages.calf,
    }
}

/// Deviation from ideal for every muscular region
#[must_use]
pub fn region_deviations(
    targets: &IdealTargets,
    measurements: &MeasurementSet,
    averages: &BilateralAverages,
) -> BTreeMap<MuscleRegion, IdealDeviation> {
    MuscleRegion::ALL
        .into_iter()
        .map(|region| {
            let real = measured_value(region, measurements, averages);
            (region, deviation_from_ideal(real, Some(targets.get(region))))
        })
        .collect()
}
