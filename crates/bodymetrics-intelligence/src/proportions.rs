// ABOUTME: Classic proportion ratios, qualitative feedback, and the aesthetic score
// ABOUTME: Shoulder/chest to waist, arm to calf, height percentages, and arm pump ratio
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Proportion Analyzer
//!
//! Reference proportions:
//!
//! - Shoulders about 1.6× waist, chest about 1.4× waist
//! - Contracted arm close to calf
//! - Waist 45-47 % of height, chest 55-60 % of height
//! - Contracted arm 5-15 % larger than relaxed arm

use crate::bilateral::BilateralAverages;
use crate::numeric::{ratio, round_to};
use bodymetrics_core::models::MeasurementSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ratios between circumferences and relative to height
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Proportions {
    /// Shoulders / waist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder_waist: Option<f64>,
    /// Chest / waist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_waist: Option<f64>,
    /// Contracted arm / calf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_calf: Option<f64>,
    /// Thigh / calf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh_calf: Option<f64>,
    /// Waist as % of height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_height_pct: Option<f64>,
    /// Chest as % of height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest_height_pct: Option<f64>,
    /// Thigh as % of height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh_height_pct: Option<f64>,
    /// Calf as % of height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calf_height_pct: Option<f64>,
    /// Contracted arm / relaxed arm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_pump: Option<f64>,
}

fn ratio_2dp(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    ratio(numerator, denominator).map(|r| round_to(r, 2))
}

fn height_pct(value: Option<f64>, height_cm: f64) -> Option<f64> {
    value
        .filter(|_| height_cm > 0.0)
        .map(|v| round_to(v / height_cm * 100.0, 1))
}

impl Proportions {
    /// Whether the set carries enough circumferences for proportion analysis
    #[must_use]
    pub const fn is_applicable(measurements: &MeasurementSet) -> bool {
        measurements.waist.is_some()
            && (measurements.chest.is_some() || measurements.shoulders.is_some())
    }

    /// Compute every ratio the measurements allow
    #[must_use]
    pub fn calculate(measurements: &MeasurementSet, averages: &BilateralAverages) -> Self {
        let height = measurements.height_cm;
        Self {
            shoulder_waist: ratio_2dp(measurements.shoulders, measurements.waist),
            chest_waist: ratio_2dp(measurements.chest, measurements.waist),
            arm_calf: ratio_2dp(averages.contracted_arm, averages.calf),
            thigh_calf: ratio_2dp(averages.thigh, averages.calf),
            waist_height_pct: height_pct(measurements.waist, height),
            chest_height_pct: height_pct(measurements.chest, height),
            thigh_height_pct: height_pct(averages.thigh, height),
            calf_height_pct: height_pct(averages.calf, height),
            arm_pump: ratio_2dp(averages.contracted_arm, averages.relaxed_arm),
        }
    }

    /// Qualitative feedback per ratio
    #[must_use]
    pub fn feedback(&self) -> BTreeMap<ProportionMetric, String> {
        let mut notes = BTreeMap::new();

        if let Some(r) = self.shoulder_waist {
            let msg = if r >= 1.6 {
                "Excellent proportion (V shape)"
            } else if r >= 1.4 {
                "Good proportion"
            } else {
                "Develop shoulders or reduce waist"
            };
            notes.insert(ProportionMetric::ShoulderWaist, msg.to_owned());
        }

        if let Some(r) = self.chest_waist {
            let msg = if r >= 1.4 {
                "Excellent thoracic development"
            } else if r >= 1.2 {
                "Good development"
            } else {
                "Develop chest"
            };
            notes.insert(ProportionMetric::ChestWaist, msg.to_owned());
        }

        if let Some(r) = self.arm_calf {
            let diff = (r - 1.0).abs();
            let msg = if diff <= 0.05 {
                "Perfect symmetry"
            } else if diff <= 0.10 {
                "Good symmetry"
            } else if r > 1.0 {
                "Arms dominant - train calves"
            } else {
                "Calves dominant - train arms"
            };
            notes.insert(ProportionMetric::ArmCalf, msg.to_owned());
        }

        if let Some(pct) = self.waist_height_pct {
            let msg = if (45.0..=47.0).contains(&pct) {
                "Ideal proportion"
            } else if pct < 45.0 {
                "Slim waist (excellent)"
            } else {
                "Reduce abdominal fat"
            };
            notes.insert(ProportionMetric::WaistHeight, msg.to_owned());
        }

        if let Some(pct) = self.chest_height_pct {
            let msg = if (55.0..=60.0).contains(&pct) {
                "Ideal proportion"
            } else if pct < 55.0 {
                "Develop chest"
            } else {
                "Development above ideal"
            };
            notes.insert(ProportionMetric::ChestHeight, msg.to_owned());
        }

        if let Some(pump) = self.arm_pump {
            let gain = (pump - 1.0) * 100.0;
            let msg = if (5.0..=15.0).contains(&gain) {
                format!("Normal contraction ({gain:.1}%)")
            } else if gain < 5.0 {
                format!("Little hypertrophy ({gain:.1}%)")
            } else {
                format!("Excellent hypertrophy ({gain:.1}%)")
            };
            notes.insert(ProportionMetric::ArmPump, msg);
        }

        notes
    }
}

/// Ratios that receive a feedback note
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProportionMetric {
    /// Shoulders / waist
    ShoulderWaist,
    /// Chest / waist
    ChestWaist,
    /// Contracted arm / calf
    ArmCalf,
    /// Waist % of height
    WaistHeight,
    /// Chest % of height
    ChestHeight,
    /// Contracted / relaxed arm
    ArmPump,
}

/// Aesthetic score bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AestheticClass {
    /// >= 90
    Exceptional,
    /// >= 80
    Excellent,
    /// >= 70
    VeryGood,
    /// >= 60
    Good,
    /// >= 50
    Average,
    /// < 50
    ToDevelop,
}

impl AestheticClass {
    /// Band for a 0-100 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Exceptional
        } else if score >= 80.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::VeryGood
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Average
        } else {
            Self::ToDevelop
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::ToDevelop => "To develop",
        }
    }
}

/// Proportion-based aesthetic score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AestheticScore {
    /// 0-100, 1 decimal
    pub score: f64,
    /// Band
    pub classification: AestheticClass,
}

impl AestheticScore {
    /// Score the available ratios against classic ideals
    ///
    /// Points are normalized over the weights of the ratios that are
    /// present, so a partial set is scored on what was measured. Returns
    /// `None` when no scored ratio is available.
    ///
    /// The divisor is the summed weight of the available ratios, not the
    /// number of ratios measured, so each ratio keeps its own weight share.
    #[must_use]
    pub fn calculate(proportions: &Proportions) -> Option<Self> {
        let mut points = 0.0;
        let mut available = 0.0;

        if let Some(r) = proportions.shoulder_waist {
            available += 25.0;
            points += if r >= 1.6 {
                25.0
            } else if r >= 1.5 {
                20.0
            } else if r >= 1.4 {
                15.0
            } else {
                (r / 1.6 * 25.0).max(0.0)
            };
        }

        if let Some(r) = proportions.chest_waist {
            available += 20.0;
            points += if r >= 1.4 {
                20.0
            } else if r >= 1.3 {
                15.0
            } else {
                (r / 1.4 * 20.0).max(0.0)
            };
        }

        if let Some(r) = proportions.arm_calf {
            available += 15.0;
            points += (15.0 * (1.0 - (r - 1.0).abs() * 2.0)).max(0.0);
        }

        if let Some(pct) = proportions.waist_height_pct {
            available += 20.0;
            points += if (45.0..=47.0).contains(&pct) {
                20.0
            } else {
                let deviation = (pct - 46.0).abs().min(10.0);
                (20.0 - deviation * 2.0).max(0.0)
            };
        }

        if let Some(pump) = proportions.arm_pump {
            available += 20.0;
            let gain = (pump - 1.0) * 100.0;
            points += if (5.0..=15.0).contains(&gain) {
                20.0
            } else {
                let deviation = (gain - 10.0).abs().min(10.0);
                (20.0 - deviation * 2.0).max(0.0)
            };
        }

        if available <= 0.0 {
            return None;
        }

        let score = round_to(points / available * 100.0, 1);
        Some(Self {
            score,
            classification: AestheticClass::from_score(score),
        })
    }
}
