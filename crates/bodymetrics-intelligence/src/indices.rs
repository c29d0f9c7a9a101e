// ABOUTME: Basic body-composition indices with classification bands
// ABOUTME: BMI, circumference-method body fat, WHR, WHtR, fat/lean mass, tissue breakdown, conicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Basic Index Calculator
//!
//! Every calculator validates its inputs and fails with
//! [`ErrorCode::InvalidMeasurement`](bodymetrics_core::errors::ErrorCode::InvalidMeasurement)
//! when they are non-positive or inconsistent. The pipeline turns those
//! failures into diagnostics and omits the dependent result.
//!
//! ## Body fat (circumference method)
//!
//! - Male: `86.010·log10(waist - neck) - 70.041·log10(height) + 36.76`
//! - Female: `163.205·log10(waist + hip - neck) - 97.684·log10(height) - 78.387`
//!
//! Result clamped to [3, 60] %.

use crate::numeric::round_to;
use bodymetrics_core::constants::limits::MAX_HEIGHT_CM;
use bodymetrics_core::constants::units::CM_PER_M;
use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::BiologicalSex;
use serde::{Deserialize, Serialize};

/// BMI lower bound of the normal band
pub const HEALTHY_BMI_MIN: f64 = 18.5;
/// BMI upper bound of the normal band
pub const HEALTHY_BMI_MAX: f64 = 25.0;

const BODY_FAT_MIN_PCT: f64 = 3.0;
const BODY_FAT_MAX_PCT: f64 = 60.0;

/// Bone mass as a fraction of lean mass
const MALE_BONE_FRACTION: f64 = 0.15;
const FEMALE_BONE_FRACTION: f64 = 0.12;

/// Conicity denominator constant
const CONICITY_CONSTANT: f64 = 0.109;

// ============================================================================
// BMI
// ============================================================================

/// WHO-style BMI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// < 16
    SevereThinness,
    /// 16 to 17
    ModerateThinness,
    /// 17 to 18.5
    MildThinness,
    /// 18.5 to 25
    Normal,
    /// 25 to 30
    Overweight,
    /// 30 to 35
    ObesityI,
    /// 35 to 40
    ObesityII,
    /// >= 40
    ObesityIII,
}

impl BmiCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SevereThinness => "Severe thinness (grade III)",
            Self::ModerateThinness => "Moderate thinness (grade II)",
            Self::MildThinness => "Mild thinness (grade I)",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight (pre-obesity)",
            Self::ObesityI => "Obesity grade I",
            Self::ObesityII => "Obesity grade II",
            Self::ObesityIII => "Obesity grade III",
        }
    }
}

/// Body mass index, rounded to 2 decimals
///
/// # Errors
///
/// Returns `InvalidMeasurement` if weight is not positive or height is
/// outside (0, 300] cm.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_measurement(format!(
            "Weight must be positive, got {weight_kg}"
        )));
    }
    if height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
        return Err(AppError::invalid_measurement(format!(
            "Height must be within (0, {MAX_HEIGHT_CM}] cm, got {height_cm}"
        )));
    }
    let height_m = height_cm / CM_PER_M;
    Ok(round_to(weight_kg / (height_m * height_m), 2))
}

/// Band for a BMI value
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::SevereThinness
    } else if bmi < 17.0 {
        BmiCategory::ModerateThinness
    } else if bmi < HEALTHY_BMI_MIN {
        BmiCategory::MildThinness
    } else if bmi < HEALTHY_BMI_MAX {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObesityI
    } else if bmi < 40.0 {
        BmiCategory::ObesityII
    } else {
        BmiCategory::ObesityIII
    }
}

/// Weight range `(min, max)` in kg that keeps BMI within [18.5, 25]
#[must_use]
pub fn healthy_weight_range(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / CM_PER_M;
    let squared = height_m * height_m;
    (
        round_to(HEALTHY_BMI_MIN * squared, 1),
        round_to(HEALTHY_BMI_MAX * squared, 1),
    )
}

/// BMI with its band and the healthy weight range for the height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// BMI value
    pub value: f64,
    /// Band
    pub category: BmiCategory,
    /// Lowest weight in the normal band (kg)
    pub healthy_weight_min_kg: f64,
    /// Highest weight in the normal band (kg)
    pub healthy_weight_max_kg: f64,
}

impl BmiReading {
    /// Compute BMI, band and healthy range
    ///
    /// # Errors
    ///
    /// See [`calculate_bmi`].
    pub fn calculate(weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        let value = calculate_bmi(weight_kg, height_cm)?;
        let (healthy_weight_min_kg, healthy_weight_max_kg) = healthy_weight_range(height_cm);
        Ok(Self {
            value,
            category: classify_bmi(value),
            healthy_weight_min_kg,
            healthy_weight_max_kg,
        })
    }
}

// ============================================================================
// Body fat
// ============================================================================

/// Body-fat bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Essential fat only
    Essential,
    /// Athletic range
    Athlete,
    /// Fitness range
    Fitness,
    /// Acceptable range
    Acceptable,
    /// Obesity
    Obesity,
}

impl BodyFatCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Essential => "Essential (very low)",
            Self::Athlete => "Athlete",
            Self::Fitness => "Fitness",
            Self::Acceptable => "Acceptable",
            Self::Obesity => "Obesity",
        }
    }
}

/// Body-fat percentage by the circumference method, clamped to [3, 60] and rounded to 1 decimal
///
/// # Errors
///
/// Returns `InvalidMeasurement` when height, waist or neck is not positive,
/// when waist <= neck (male), or when hip is missing or
/// waist + hip - neck <= 0 (female).
pub fn calculate_body_fat_navy(
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
    sex: BiologicalSex,
) -> AppResult<f64> {
    if height_cm <= 0.0 || waist_cm <= 0.0 || neck_cm <= 0.0 {
        return Err(AppError::invalid_measurement(
            "Height, waist and neck must all be positive",
        ));
    }

    let raw = match sex {
        BiologicalSex::Male => {
            if waist_cm <= neck_cm {
                return Err(AppError::invalid_measurement(format!(
                    "Waist ({waist_cm} cm) must be greater than neck ({neck_cm} cm)"
                )));
            }
            86.010f64.mul_add(
                (waist_cm - neck_cm).log10(),
                (-70.041f64).mul_add(height_cm.log10(), 36.76),
            )
        }
        BiologicalSex::Female => {
            let hip = hip_cm.filter(|h| *h > 0.0).ok_or_else(|| {
                AppError::invalid_measurement(
                    "Hip circumference is required for the female formula",
                )
            })?;
            let girth = waist_cm + hip - neck_cm;
            if girth <= 0.0 {
                return Err(AppError::invalid_measurement(
                    "Waist plus hip must be greater than neck",
                ));
            }
            163.205f64.mul_add(
                girth.log10(),
                (-97.684f64).mul_add(height_cm.log10(), -78.387),
            )
        }
    };

    Ok(round_to(raw.clamp(BODY_FAT_MIN_PCT, BODY_FAT_MAX_PCT), 1))
}

/// Body-fat band for the given sex
#[must_use]
pub fn classify_body_fat(percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    let [essential, athlete, fitness, acceptable] = match sex {
        BiologicalSex::Male => [6.0, 14.0, 18.0, 25.0],
        BiologicalSex::Female => [14.0, 21.0, 25.0, 32.0],
    };
    if percent < essential {
        BodyFatCategory::Essential
    } else if percent < athlete {
        BodyFatCategory::Athlete
    } else if percent < fitness {
        BodyFatCategory::Fitness
    } else if percent < acceptable {
        BodyFatCategory::Acceptable
    } else {
        BodyFatCategory::Obesity
    }
}

/// Fat mass (kg), rounded to 1 decimal
#[must_use]
pub fn calculate_fat_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    round_to(weight_kg * (body_fat_pct / 100.0), 1)
}

/// Lean mass (kg) = weight - fat mass, rounded to 1 decimal
#[must_use]
pub fn calculate_lean_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    round_to(weight_kg - calculate_fat_mass(weight_kg, body_fat_pct), 1)
}

/// Body fat with band and mass split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFatReading {
    /// Body-fat percentage
    pub percent: f64,
    /// Band
    pub category: BodyFatCategory,
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Lean mass (kg)
    pub lean_mass_kg: f64,
}

impl BodyFatReading {
    /// Build a reading from an already computed percentage
    #[must_use]
    pub fn from_percent(percent: f64, weight_kg: f64, sex: BiologicalSex) -> Self {
        Self {
            percent,
            category: classify_body_fat(percent, sex),
            fat_mass_kg: calculate_fat_mass(weight_kg, percent),
            lean_mass_kg: calculate_lean_mass(weight_kg, percent),
        }
    }
}

// ============================================================================
// Tissue composition
// ============================================================================

/// Four-compartment tissue estimate derived from body fat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TissueComposition {
    /// Fat mass (kg)
    pub fat_mass_kg: f64,
    /// Skeletal muscle estimate (kg)
    pub muscle_mass_kg: f64,
    /// Bone mass estimate (kg)
    pub bone_mass_kg: f64,
    /// Muscle as a share of body weight (%)
    pub muscle_pct: f64,
    /// Bone as a share of body weight (%)
    pub bone_pct: f64,
}

impl TissueComposition {
    /// Split body weight into fat, bone and muscle; values rounded to 2 decimals
    ///
    /// Bone is 15 % (male) or 12 % (female) of lean mass; muscle is the rest.
    #[must_use]
    pub fn calculate(weight_kg: f64, body_fat_pct: f64, sex: BiologicalSex) -> Self {
        let fat_mass = weight_kg * (body_fat_pct / 100.0);
        let lean_mass = weight_kg - fat_mass;
        let bone_mass = lean_mass * sex.select(MALE_BONE_FRACTION, FEMALE_BONE_FRACTION);
        let muscle_mass = lean_mass - bone_mass;
        Self {
            fat_mass_kg: round_to(fat_mass, 2),
            muscle_mass_kg: round_to(muscle_mass, 2),
            bone_mass_kg: round_to(bone_mass, 2),
            muscle_pct: round_to(muscle_mass / weight_kg * 100.0, 2),
            bone_pct: round_to(bone_mass / weight_kg * 100.0, 2),
        }
    }
}

// ============================================================================
// Waist ratios
// ============================================================================

/// Cardiometabolic risk from waist-hip ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardiometabolicRisk {
    /// Low risk
    Low,
    /// Moderate risk
    Moderate,
    /// High risk
    High,
}

/// Waist-height ratio bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaistHeightCategory {
    /// < 0.40
    VeryLow,
    /// 0.40 to 0.50
    Healthy,
    /// 0.50 to 0.60
    Overweight,
    /// 0.60 to 0.70
    Obesity,
    /// >= 0.70
    MorbidObesity,
}

/// Waist / hip, rounded to 3 decimals
///
/// # Errors
///
/// Returns `InvalidMeasurement` if either circumference is not positive.
pub fn calculate_waist_hip_ratio(waist_cm: f64, hip_cm: f64) -> AppResult<f64> {
    if waist_cm <= 0.0 || hip_cm <= 0.0 {
        return Err(AppError::invalid_measurement(
            "Waist and hip must be positive",
        ));
    }
    Ok(round_to(waist_cm / hip_cm, 3))
}

/// Risk band for a waist-hip ratio
#[must_use]
pub fn classify_waist_hip_ratio(ratio: f64, sex: BiologicalSex) -> CardiometabolicRisk {
    let (low, moderate) = match sex {
        BiologicalSex::Male => (0.85, 0.90),
        BiologicalSex::Female => (0.75, 0.85),
    };
    if ratio < low {
        CardiometabolicRisk::Low
    } else if ratio < moderate {
        CardiometabolicRisk::Moderate
    } else {
        CardiometabolicRisk::High
    }
}

/// Waist / height, rounded to 3 decimals
///
/// # Errors
///
/// Returns `InvalidMeasurement` if waist or height is not positive.
pub fn calculate_waist_height_ratio(waist_cm: f64, height_cm: f64) -> AppResult<f64> {
    if waist_cm <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::invalid_measurement(
            "Waist and height must be positive",
        ));
    }
    Ok(round_to(waist_cm / height_cm, 3))
}

/// Band for a waist-height ratio
#[must_use]
pub fn classify_waist_height_ratio(ratio: f64) -> WaistHeightCategory {
    if ratio < 0.40 {
        WaistHeightCategory::VeryLow
    } else if ratio < 0.50 {
        WaistHeightCategory::Healthy
    } else if ratio < 0.60 {
        WaistHeightCategory::Overweight
    } else if ratio < 0.70 {
        WaistHeightCategory::Obesity
    } else {
        WaistHeightCategory::MorbidObesity
    }
}

/// A waist ratio with its band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioReading<C> {
    /// Ratio value
    pub value: f64,
    /// Band
    pub classification: C,
}

/// Conicity index = waist(m) / (0.109 × √(weight / height(m))), rounded to 3 decimals
///
/// # Errors
///
/// Returns `InvalidMeasurement` if any input is not positive.
pub fn calculate_conicity_index(waist_cm: f64, weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if waist_cm <= 0.0 || weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(AppError::invalid_measurement(
            "Waist, weight and height must be positive",
        ));
    }
    let waist_m = waist_cm / CM_PER_M;
    let height_m = height_cm / CM_PER_M;
    Ok(round_to(
        waist_m / (CONICITY_CONSTANT * (weight_kg / height_m).sqrt()),
        3,
    ))
}

/// Every basic index the pipeline computed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicIndices {
    /// BMI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<BmiReading>,
    /// Body fat and mass split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<BodyFatReading>,
    /// Tissue breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tissue: Option<TissueComposition>,
    /// Waist-hip ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_hip: Option<RatioReading<CardiometabolicRisk>>,
    /// Waist-height ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_height: Option<RatioReading<WaistHeightCategory>>,
    /// Conicity index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conicity: Option<f64>,
}
