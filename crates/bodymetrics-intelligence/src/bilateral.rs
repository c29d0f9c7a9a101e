// ABOUTME: Bilateral averager collapsing left/right pairs into single values
// ABOUTME: Mean of both sides, single-side fallback, or absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Bilateral Averager
//!
//! The only place where left/right fallback is resolved. Later stages read
//! [`BilateralAverages`] and never inspect the raw pairs for magnitudes.

use crate::numeric::round_to;
use bodymetrics_core::models::{BilateralMeasurement, BilateralRegion, MeasurementSet};
use serde::{Deserialize, Serialize};

/// Average a left/right pair
///
/// Both sides present gives the mean rounded to one decimal; a single side is
/// returned as-is; no sides gives `None`. A side that is not a finite
/// positive number counts as missing.
#[must_use]
pub fn average_pair(pair: BilateralMeasurement) -> Option<f64> {
    let valid = |side: Option<f64>| side.filter(|v| v.is_finite() && *v > 0.0);
    match (valid(pair.left), valid(pair.right)) {
        (Some(left), Some(right)) => Some(round_to((left + right) / 2.0, 1)),
        (Some(side), None) | (None, Some(side)) => Some(side),
        (None, None) => None,
    }
}

/// Averaged value per bilateral region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BilateralAverages {
    /// Relaxed arm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxed_arm: Option<f64>,
    /// Contracted arm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracted_arm: Option<f64>,
    /// Forearm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forearm: Option<f64>,
    /// Thigh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh: Option<f64>,
    /// Calf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calf: Option<f64>,
    /// Wrist breadth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrist_breadth: Option<f64>,
    /// Elbow breadth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elbow_breadth: Option<f64>,
    /// Knee breadth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knee_breadth: Option<f64>,
    /// Ankle breadth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ankle_breadth: Option<f64>,
}

impl BilateralAverages {
    /// Average every bilateral region of a measurement set
    #[must_use]
    pub fn from_measurements(measurements: &MeasurementSet) -> Self {
        let avg = |region| average_pair(measurements.bilateral(region));
        Self {
            relaxed_arm: avg(BilateralRegion::RelaxedArm),
            contracted_arm: avg(BilateralRegion::ContractedArm),
            forearm: avg(BilateralRegion::Forearm),
            thigh: avg(BilateralRegion::Thigh),
            calf: avg(BilateralRegion::Calf),
            wrist_breadth: avg(BilateralRegion::WristBreadth),
            elbow_breadth: avg(BilateralRegion::ElbowBreadth),
            knee_breadth: avg(BilateralRegion::KneeBreadth),
            ankle_breadth: avg(BilateralRegion::AnkleBreadth),
        }
    }

    /// Averaged value for one region
    #[must_use]
    pub const fn get(&self, region: BilateralRegion) -> Option<f64> {
        match region {
            BilateralRegion::RelaxedArm => self.relaxed_arm,
            BilateralRegion::ContractedArm => self.contracted_arm,
            BilateralRegion::Forearm => self.forearm,
            BilateralRegion::Thigh => self.thigh,
            BilateralRegion::Calf => self.calf,
            BilateralRegion::WristBreadth => self.wrist_breadth,
            BilateralRegion::ElbowBreadth => self.elbow_breadth,
            BilateralRegion::KneeBreadth => self.knee_breadth,
            BilateralRegion::AnkleBreadth => self.ankle_breadth,
        }
    }
}
