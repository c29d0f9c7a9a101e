// ABOUTME: Anthropometric measurement set for a single assessment
// ABOUTME: MeasurementSet, BilateralMeasurement, and BilateralRegion with invariant validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use crate::constants::limits::{MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use crate::constants::units::CM_PER_M;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measurement taken on both the left and right side of the body
///
/// Either side may be missing; the bilateral averager resolves the
/// fallback (mean of both, or whichever side is present).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BilateralMeasurement {
    /// Left side value (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Right side value (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl BilateralMeasurement {
    /// Both sides measured
    #[must_use]
    pub const fn both(left: f64, right: f64) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    /// Only the left side measured
    #[must_use]
    pub const fn left_only(left: f64) -> Self {
        Self {
            left: Some(left),
            right: None,
        }
    }

    /// Only the right side measured
    #[must_use]
    pub const fn right_only(right: f64) -> Self {
        Self {
            left: None,
            right: Some(right),
        }
    }

    /// Neither side measured
    #[must_use]
    pub const fn none() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    /// True when neither side carries a value
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Body regions that are measured on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BilateralRegion {
    /// Relaxed upper arm circumference
    RelaxedArm,
    /// Flexed upper arm circumference
    ContractedArm,
    /// Forearm circumference
    Forearm,
    /// Mid-thigh circumference
    Thigh,
    /// Calf circumference
    Calf,
    /// Wrist bone breadth
    WristBreadth,
    /// Elbow bone breadth
    ElbowBreadth,
    /// Knee bone breadth
    KneeBreadth,
    /// Ankle bone breadth
    AnkleBreadth,
}

impl BilateralRegion {
    /// Every bilateral region, in reporting order
    pub const ALL: [Self; 9] = [
        Self::RelaxedArm,
        Self::ContractedArm,
        Self::Forearm,
        Self::Thigh,
        Self::Calf,
        Self::WristBreadth,
        Self::ElbowBreadth,
        Self::KneeBreadth,
        Self::AnkleBreadth,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RelaxedArm => "Relaxed arm",
            Self::ContractedArm => "Contracted arm",
            Self::Forearm => "Forearm",
            Self::Thigh => "Thigh",
            Self::Calf => "Calf",
            Self::WristBreadth => "Wrist breadth",
            Self::ElbowBreadth => "Elbow breadth",
            Self::KneeBreadth => "Knee breadth",
            Self::AnkleBreadth => "Ankle breadth",
        }
    }

    /// True for skeletal breadths, false for muscular circumferences
    #[must_use]
    pub const fn is_bone_breadth(self) -> bool {
        matches!(
            self,
            Self::WristBreadth | Self::ElbowBreadth | Self::KneeBreadth | Self::AnkleBreadth
        )
    }
}

impl fmt::Display for BilateralRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete set of body measurements for one assessment
///
/// Circumferences and breadths are in centimeters, weight in kilograms.
/// Height and weight are mandatory; everything else is optional and
/// downstream stages omit whatever they cannot compute.
///
/// # Examples
///
/// ```rust
/// use bodymetrics_core::models::{BilateralMeasurement, MeasurementSet};
///
/// let measurements = MeasurementSet::new(178.0, 85.0)
///     .unwrap()
///     .with_waist(88.0)
///     .with_neck(38.0)
///     .with_contracted_arm(BilateralMeasurement::both(38.0, 38.5));
/// assert!(measurements.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    /// Standing height (cm)
    pub height_cm: f64,
    /// Body weight (kg)
    pub weight_kg: f64,

    /// Neck circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
    /// Shoulder circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulders: Option<f64>,
    /// Chest circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Narrowest circumference between ribs and iliac crest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Circumference at navel line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abdomen: Option<f64>,
    /// Widest gluteal circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,

    /// Relaxed upper arm
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub relaxed_arm: BilateralMeasurement,
    /// Flexed upper arm
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub contracted_arm: BilateralMeasurement,
    /// Forearm
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub forearm: BilateralMeasurement,
    /// Mid-thigh
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub thigh: BilateralMeasurement,
    /// Calf
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub calf: BilateralMeasurement,

    /// Biacromial breadth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_breadth: Option<f64>,
    /// Bi-iliac breadth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_breadth: Option<f64>,
    /// Wrist breadth
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub wrist_breadth: BilateralMeasurement,
    /// Elbow breadth
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub elbow_breadth: BilateralMeasurement,
    /// Knee breadth
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub knee_breadth: BilateralMeasurement,
    /// Ankle breadth
    #[serde(default, skip_serializing_if = "BilateralMeasurement::is_empty")]
    pub ankle_breadth: BilateralMeasurement,
}

impl MeasurementSet {
    /// Create a measurement set with only the mandatory fields
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if height is outside (0, 300] cm or weight
    /// outside (0, 500] kg.
    pub fn new(height_cm: f64, weight_kg: f64) -> AppResult<Self> {
        let set = Self {
            height_cm,
            weight_kg,
            neck: None,
            shoulders: None,
            chest: None,
            waist: None,
            abdomen: None,
            hip: None,
            relaxed_arm: BilateralMeasurement::none(),
            contracted_arm: BilateralMeasurement::none(),
            forearm: BilateralMeasurement::none(),
            thigh: BilateralMeasurement::none(),
            calf: BilateralMeasurement::none(),
            shoulder_breadth: None,
            hip_breadth: None,
            wrist_breadth: BilateralMeasurement::none(),
            elbow_breadth: BilateralMeasurement::none(),
            knee_breadth: BilateralMeasurement::none(),
            ankle_breadth: BilateralMeasurement::none(),
        };
        set.validate_required()?;
        Ok(set)
    }

    /// Set neck circumference
    #[must_use]
    pub const fn with_neck(mut self, value: f64) -> Self {
        self.neck = Some(value);
        self
    }

    /// Set shoulder circumference
    #[must_use]
    pub const fn with_shoulders(mut self, value: f64) -> Self {
        self.shoulders = Some(value);
        self
    }

    /// Set chest circumference
    #[must_use]
    pub const fn with_chest(mut self, value: f64) -> Self {
        self.chest = Some(value);
        self
    }

    /// Set waist circumference
    #[must_use]
    pub const fn with_waist(mut self, value: f64) -> Self {
        self.waist = Some(value);
        self
    }

    /// Set abdomen circumference
    #[must_use]
    pub const fn with_abdomen(mut self, value: f64) -> Self {
        self.abdomen = Some(value);
        self
    }

    /// Set hip circumference
    #[must_use]
    pub const fn with_hip(mut self, value: f64) -> Self {
        self.hip = Some(value);
        self
    }

    /// Set relaxed arm pair
    #[must_use]
    pub const fn with_relaxed_arm(mut self, pair: BilateralMeasurement) -> Self {
        self.relaxed_arm = pair;
        self
    }

    /// Set contracted arm pair
    #[must_use]
    pub const fn with_contracted_arm(mut self, pair: BilateralMeasurement) -> Self {
        self.contracted_arm = pair;
        self
    }

    /// Set forearm pair
    #[must_use]
    pub const fn with_forearm(mut self, pair: BilateralMeasurement) -> Self {
        self.forearm = pair;
        self
    }

    /// Set thigh pair
    #[must_use]
    pub const fn with_thigh(mut self, pair: BilateralMeasurement) -> Self {
        self.thigh = pair;
        self
    }

    /// Set calf pair
    #[must_use]
    pub const fn with_calf(mut self, pair: BilateralMeasurement) -> Self {
        self.calf = pair;
        self
    }

    /// Set biacromial and bi-iliac breadths
    #[must_use]
    pub const fn with_frame_breadths(
        mut self,
        shoulder_breadth: Option<f64>,
        hip_breadth: Option<f64>,
    ) -> Self {
        self.shoulder_breadth = shoulder_breadth;
        self.hip_breadth = hip_breadth;
        self
    }

    /// Set wrist breadth pair
    #[must_use]
    pub const fn with_wrist_breadth(mut self, pair: BilateralMeasurement) -> Self {
        self.wrist_breadth = pair;
        self
    }

    /// Set elbow breadth pair
    #[must_use]
    pub const fn with_elbow_breadth(mut self, pair: BilateralMeasurement) -> Self {
        self.elbow_breadth = pair;
        self
    }

    /// Set knee breadth pair
    #[must_use]
    pub const fn with_knee_breadth(mut self, pair: BilateralMeasurement) -> Self {
        self.knee_breadth = pair;
        self
    }

    /// Set ankle breadth pair
    #[must_use]
    pub const fn with_ankle_breadth(mut self, pair: BilateralMeasurement) -> Self {
        self.ankle_breadth = pair;
        self
    }

    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / CM_PER_M
    }

    /// Left/right pair for a bilateral region
    #[must_use]
    pub const fn bilateral(&self, region: BilateralRegion) -> BilateralMeasurement {
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

    /// Every single-valued optional field with its name
    #[must_use]
    pub fn single_fields(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("neck", self.neck),
            ("shoulders", self.shoulders),
            ("chest", self.chest),
            ("waist", self.waist),
            ("abdomen", self.abdomen),
            ("hip", self.hip),
            ("shoulder_breadth", self.shoulder_breadth),
            ("hip_breadth", self.hip_breadth),
        ]
    }

    fn single_fields_mut(&mut self) -> [(&'static str, &mut Option<f64>); 8] {
        [
            ("neck", &mut self.neck),
            ("shoulders", &mut self.shoulders),
            ("chest", &mut self.chest),
            ("waist", &mut self.waist),
            ("abdomen", &mut self.abdomen),
            ("hip", &mut self.hip),
            ("shoulder_breadth", &mut self.shoulder_breadth),
            ("hip_breadth", &mut self.hip_breadth),
        ]
    }

    fn bilateral_mut(&mut self, region: BilateralRegion) -> &mut BilateralMeasurement {
        match region {
            BilateralRegion::RelaxedArm => &mut self.relaxed_arm,
            BilateralRegion::ContractedArm => &mut self.contracted_arm,
            BilateralRegion::Forearm => &mut self.forearm,
            BilateralRegion::Thigh => &mut self.thigh,
            BilateralRegion::Calf => &mut self.calf,
            BilateralRegion::WristBreadth => &mut self.wrist_breadth,
            BilateralRegion::ElbowBreadth => &mut self.elbow_breadth,
            BilateralRegion::KneeBreadth => &mut self.knee_breadth,
            BilateralRegion::AnkleBreadth => &mut self.ankle_breadth,
        }
    }

    /// Copy of the set with every invalid optional value removed
    ///
    /// Any optional field or bilateral side that is not a finite positive
    /// number becomes `None`. Returns the cleaned set and one `InvalidInput`
    /// error per rejected value, in field order.
    #[must_use]
    pub fn sanitized(&self) -> (Self, Vec<AppError>) {
        let mut clean = self.clone();
        let mut rejected = Vec::new();

        for (name, slot) in clean.single_fields_mut() {
            if let Err(e) = check_positive(name, *slot) {
                rejected.push(e);
                *slot = None;
            }
        }

        for region in BilateralRegion::ALL {
            let pair = clean.bilateral_mut(region);
            for (side, slot) in [("left", &mut pair.left), ("right", &mut pair.right)] {
                let name = format!("{} ({side})", region.label());
                if let Err(e) = check_positive(&name, *slot) {
                    rejected.push(e);
                    *slot = None;
                }
            }
        }

        (clean, rejected)
    }

    /// Validate every invariant of the set
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-range height/weight and
    /// `InvalidInput` for any optional value that is present but not a
    /// finite positive number.
    pub fn validate(&self) -> AppResult<()> {
        self.validate_required()?;

        for (name, value) in self.single_fields() {
            check_positive(name, value)?;
        }

        for region in BilateralRegion::ALL {
            let pair = self.bilateral(region);
            check_positive(region.label(), pair.left)?;
            check_positive(region.label(), pair.right)?;
        }

        Ok(())
    }

    /// Validate only the mandatory height and weight
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for out-of-range height or weight.
    pub fn validate_required(&self) -> AppResult<()> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 || self.height_cm > MAX_HEIGHT_CM
        {
            return Err(AppError::out_of_range(format!(
                "Height must be within (0, {MAX_HEIGHT_CM}] cm, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > MAX_WEIGHT_KG
        {
            return Err(AppError::out_of_range(format!(
                "Weight must be within (0, {MAX_WEIGHT_KG}] kg, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

fn check_positive(name: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(AppError::invalid_input(format!(
            "{name} must be a positive number, got {v}"
        ))),
        _ => Ok(()),
    }
}
