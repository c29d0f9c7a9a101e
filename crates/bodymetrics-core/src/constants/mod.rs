// ABOUTME: Application-wide constants for anthropometric validation
// ABOUTME: Hard limits for mandatory fields, plausible ranges for circumferences, unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! Application constants organized by domain

/// Hard validation limits; values outside these make an assessment unprocessable
pub mod limits {
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Oldest plausible subject age in years
    pub const MAX_AGE_YEARS: u32 = 120;
}

/// Plausible ranges used for non-blocking warnings
///
/// Values outside these ranges are still processed; the pipeline only records
/// a warning so the assessor can double-check the tape reading.
pub mod plausible_ranges {
    /// Height (cm)
    pub const HEIGHT_CM: (f64, f64) = (50.0, 250.0);
    /// Body weight (kg)
    pub const WEIGHT_KG: (f64, f64) = (20.0, 300.0);
    /// Neck circumference (cm)
    pub const NECK_CM: (f64, f64) = (20.0, 60.0);
    /// Shoulder circumference (cm)
    pub const SHOULDERS_CM: (f64, f64) = (70.0, 180.0);
    /// Chest circumference (cm)
    pub const CHEST_CM: (f64, f64) = (60.0, 180.0);
    /// Waist circumference (cm)
    pub const WAIST_CM: (f64, f64) = (40.0, 180.0);
    /// Abdomen circumference (cm)
    pub const ABDOMEN_CM: (f64, f64) = (45.0, 200.0);
    /// Hip circumference (cm)
    pub const HIP_CM: (f64, f64) = (50.0, 180.0);
    /// Relaxed arm circumference (cm)
    pub const RELAXED_ARM_CM: (f64, f64) = (15.0, 60.0);
    /// Contracted arm circumference (cm)
    pub const CONTRACTED_ARM_CM: (f64, f64) = (15.0, 70.0);
    /// Forearm circumference (cm)
    pub const FOREARM_CM: (f64, f64) = (15.0, 50.0);
    /// Thigh circumference (cm)
    pub const THIGH_CM: (f64, f64) = (30.0, 100.0);
    /// Calf circumference (cm)
    pub const CALF_CM: (f64, f64) = (20.0, 70.0);
}

/// Unit conversions
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_M: f64 = 100.0;
}
