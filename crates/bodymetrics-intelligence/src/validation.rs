// ABOUTME: Non-blocking plausibility and consistency checks on measurement sets
// ABOUTME: Produces warnings for out-of-range readings, contradictory circumferences, and duplicate dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Measurement Validation
//!
//! Hard invariants live on [`MeasurementSet::validate`]. The checks here
//! only flag readings an assessor should double-check; processing continues.

use crate::bilateral::BilateralAverages;
use bodymetrics_core::constants::plausible_ranges;
use bodymetrics_core::constants::units::CM_PER_M;
use bodymetrics_core::models::MeasurementSet;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Abdomen may sit this far below the waist before it is flagged (cm)
const ABDOMEN_WAIST_TOLERANCE_CM: f64 = 5.0;
/// Contracted arm above relaxed arm by more than this factor is flagged
const MAX_ARM_PUMP_RATIO: f64 = 1.3;
const MIN_PLAUSIBLE_BMI: f64 = 12.0;
const MAX_PLAUSIBLE_BMI: f64 = 60.0;

fn range_check(
    warnings: &mut Vec<String>,
    name: &str,
    value: Option<f64>,
    (min, max): (f64, f64),
    unit: &str,
) {
    if let Some(v) = value {
        if v < min || v > max {
            warnings.push(format!(
                "{name} of {v} {unit} is outside the plausible range ({min}-{max} {unit})"
            ));
        }
    }
}

/// Readings outside physically plausible ranges
#[must_use]
pub fn plausibility_warnings(
    measurements: &MeasurementSet,
    averages: &BilateralAverages,
) -> Vec<String> {
    let mut w = Vec::new();
    let m = measurements;
    range_check(&mut w, "Height", Some(m.height_cm), plausible_ranges::HEIGHT_CM, "cm");
    range_check(&mut w, "Weight", Some(m.weight_kg), plausible_ranges::WEIGHT_KG, "kg");
    range_check(&mut w, "Neck", m.neck, plausible_ranges::NECK_CM, "cm");
    range_check(&mut w, "Shoulders", m.shoulders, plausible_ranges::SHOULDERS_CM, "cm");
    range_check(&mut w, "Chest", m.chest, plausible_ranges::CHEST_CM, "cm");
    range_check(&mut w, "Waist", m.waist, plausible_ranges::WAIST_CM, "cm");
    range_check(&mut w, "Abdomen", m.abdomen, plausible_ranges::ABDOMEN_CM, "cm");
    range_check(&mut w, "Hip", m.hip, plausible_ranges::HIP_CM, "cm");
    range_check(
        &mut w,
        "Relaxed arm",
        averages.relaxed_arm,
        plausible_ranges::RELAXED_ARM_CM,
        "cm",
    );
    range_check(
        &mut w,
        "Contracted arm",
        averages.contracted_arm,
        plausible_ranges::CONTRACTED_ARM_CM,
        "cm",
    );
    range_check(&mut w, "Forearm", averages.forearm, plausible_ranges::FOREARM_CM, "cm");
    range_check(&mut w, "Thigh", averages.thigh, plausible_ranges::THIGH_CM, "cm");
    range_check(&mut w, "Calf", averages.calf, plausible_ranges::CALF_CM, "cm");
    w
}

/// Readings that contradict each other
#[must_use]
pub fn consistency_warnings(
    measurements: &MeasurementSet,
    averages: &BilateralAverages,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(relaxed), Some(contracted)) = (averages.relaxed_arm, averages.contracted_arm) {
        if contracted <= relaxed {
            warnings.push("Contracted arm should be larger than relaxed arm".to_owned());
        } else if contracted > relaxed * MAX_ARM_PUMP_RATIO {
            warnings.push(
                "Difference between contracted and relaxed arm is unusually high (>30%)"
                    .to_owned(),
            );
        }
    }

    if let (Some(waist), Some(abdomen)) = (measurements.waist, measurements.abdomen) {
        if abdomen < waist - ABDOMEN_WAIST_TOLERANCE_CM {
            warnings.push("Abdomen is usually greater than or equal to waist".to_owned());
        }
    }

    if let (Some(waist), Some(hip)) = (measurements.waist, measurements.hip) {
        if hip < waist {
            warnings.push("Hip is usually larger than waist".to_owned());
        }
    }

    if let (Some(waist), Some(chest)) = (measurements.waist, measurements.chest) {
        if chest < waist {
            warnings.push("Chest smaller than waist - check the readings".to_owned());
        }
    }

    if let (Some(thigh), Some(calf)) = (averages.thigh, averages.calf) {
        if thigh < calf {
            warnings.push("Thigh smaller than calf - check the readings".to_owned());
        }
    }

    let height_m = measurements.height_cm / CM_PER_M;
    if height_m > 0.0 {
        let bmi = measurements.weight_kg / (height_m * height_m);
        if bmi < MIN_PLAUSIBLE_BMI {
            warnings.push("BMI extremely low (<12) - check the readings".to_owned());
        } else if bmi > MAX_PLAUSIBLE_BMI {
            warnings.push("BMI extremely high (>60) - check the readings".to_owned());
        }
    }

    warnings
}

/// Warnings about a series of assessment dates (duplicates)
#[must_use]
pub fn series_warnings(dates: &[NaiveDate]) -> Vec<String> {
    let unique: BTreeSet<_> = dates.iter().collect();
    if unique.len() == dates.len() {
        Vec::new()
    } else {
        vec!["Several assessments share the same date".to_owned()]
    }
}
