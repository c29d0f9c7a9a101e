// ABOUTME: Symmetry analyzer comparing left and right sides per bilateral region
// ABOUTME: Percent difference, classification, per-region score, and overall symmetry score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Symmetry Analyzer
//!
//! `diff_pct = |right - left| / max(left, right) × 100`
//!
//! Region scores are 100 below the ideal threshold, fall linearly to 70 at
//! the attention threshold and then lose 5 points per extra percent.

use crate::config::SymmetryConfig;
use crate::numeric::round_to;
use bodymetrics_core::models::{BilateralMeasurement, BilateralRegion, MeasurementSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FULL_SCORE: f64 = 100.0;
const ATTENTION_SCORE: f64 = 70.0;
const PENALTY_PER_PCT: f64 = 5.0;

/// Left/right balance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymmetryStatus {
    /// Below the ideal threshold
    Ideal,
    /// Up to the attention threshold
    Attention,
    /// Above the attention threshold
    RelevantAsymmetry,
}

impl SymmetryStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal",
            Self::Attention => "Attention",
            Self::RelevantAsymmetry => "Relevant asymmetry",
        }
    }
}

/// Symmetry of one bilateral region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSymmetry {
    /// Left side (cm)
    pub left: f64,
    /// Right side (cm)
    pub right: f64,
    /// |right - left| (cm), 1 decimal
    pub absolute_difference: f64,
    /// Difference relative to the larger side (%), 2 decimals
    pub percent_difference: f64,
    /// Band
    pub status: SymmetryStatus,
}

/// Compare both sides of a pair; `None` unless both sides are present and positive
#[must_use]
pub fn analyze_pair(pair: BilateralMeasurement, config: &SymmetryConfig) -> Option<RegionSymmetry> {
    let left = pair.left.filter(|v| *v > 0.0)?;
    let right = pair.right.filter(|v| *v > 0.0)?;

    let difference = (right - left).abs();
    let percent_difference = round_to(difference / left.max(right) * 100.0, 2);
    let status = if percent_difference < config.ideal_threshold_pct {
        SymmetryStatus::Ideal
    } else if percent_difference <= config.attention_threshold_pct {
        SymmetryStatus::Attention
    } else {
        SymmetryStatus::RelevantAsymmetry
    };

    Some(RegionSymmetry {
        left,
        right,
        absolute_difference: round_to(difference, 1),
        percent_difference,
        status,
    })
}

/// Score (0-100) for a single region's percent difference
#[must_use]
pub fn region_score(percent_difference: f64, config: &SymmetryConfig) -> f64 {
    let ideal = config.ideal_threshold_pct;
    let attention = config.attention_threshold_pct;
    if percent_difference < ideal {
        FULL_SCORE
    } else if percent_difference <= attention {
        let slope = (FULL_SCORE - ATTENTION_SCORE) / (attention - ideal);
        FULL_SCORE - (percent_difference - ideal) * slope
    } else {
        (ATTENTION_SCORE - (percent_difference - attention) * PENALTY_PER_PCT).max(0.0)
    }
}

/// Symmetry of every measurable region plus the averaged score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymmetryAnalysis {
    /// Regions with both sides measured
    pub regions: BTreeMap<BilateralRegion, RegionSymmetry>,
    /// Mean region score, 1 decimal; absent when no region could be analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
}

impl SymmetryAnalysis {
    /// Analyze every bilateral region of a measurement set
    #[must_use]
    pub fn analyze(measurements: &MeasurementSet, config: &SymmetryConfig) -> Self {
        let regions: BTreeMap<_, _> = BilateralRegion::ALL
            .into_iter()
            .filter_map(|region| {
                analyze_pair(measurements.bilateral(region), config).map(|s| (region, s))
            })
            .collect();

        let overall_score = if regions.is_empty() {
            None
        } else {
            let total: f64 = regions
                .values()
                .map(|s| region_score(s.percent_difference, config))
                .sum();
            #[allow(clippy::cast_precision_loss)]
            let count = regions.len() as f64;
            Some(round_to(total / count, 1))
        };

        Self {
            regions,
            overall_score,
        }
    }

    /// Symmetry of a single region, if analyzed
    #[must_use]
    pub fn region(&self, region: BilateralRegion) -> Option<&RegionSymmetry> {
        self.regions.get(&region)
    }
}
