// ABOUTME: Subject profile and biological sex models
// ABOUTME: Single normalization point for sex codes and age derivation from date of birth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use crate::constants::limits::MAX_AGE_YEARS;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Biological sex, used only to select between formula branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male formula branch
    #[serde(
        alias = "M",
        alias = "m",
        alias = "MALE",
        alias = "Male",
        alias = "MASCULINO",
        alias = "masculino"
    )]
    Male,
    /// Female formula branch
    #[serde(
        alias = "F",
        alias = "f",
        alias = "FEMALE",
        alias = "Female",
        alias = "FEMININO",
        alias = "feminino"
    )]
    Female,
}

impl BiologicalSex {
    /// Short code (`M` / `F`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Pick the male or female variant of a constant
    #[must_use]
    pub const fn select(self, male: f64, female: f64) -> f64 {
        match self {
            Self::Male => male,
            Self::Female => female,
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" | "MASCULINO" => Ok(Self::Male),
            "F" | "FEMALE" | "FEMININO" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized biological sex: {other}"
            ))),
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Person whose body composition is being tracked
///
/// Immutable once created. Assessments reference a profile by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Name shown in reports
    pub display_name: String,
    /// Formula branch selector
    pub sex: BiologicalSex,
    /// Used to derive age at evaluation time
    pub date_of_birth: NaiveDate,
}

impl SubjectProfile {
    /// Create a profile, validating name and birth date against `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the display name is blank, and
    /// `ValueOutOfRange` when the birth date lies after `today` or implies an
    /// age above the supported maximum.
    pub fn new(
        display_name: impl Into<String>,
        sex: BiologicalSex,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let profile = Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            sex,
            date_of_birth,
        };
        profile.validate(today)?;
        Ok(profile)
    }

    /// Check the profile invariants relative to `today`
    ///
    /// # Errors
    ///
    /// See [`SubjectProfile::new`].
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        if self.display_name.trim().is_empty() {
            return Err(AppError::invalid_input("Display name must not be blank"));
        }
        if self.date_of_birth > today {
            return Err(AppError::out_of_range(format!(
                "Date of birth {} is in the future",
                self.date_of_birth
            )));
        }
        if self.age_on(today) > MAX_AGE_YEARS {
            return Err(AppError::out_of_range(format!(
                "Date of birth {} implies an age above {MAX_AGE_YEARS} years",
                self.date_of_birth
            )));
        }
        Ok(())
    }

    /// Completed years of age on the given date (0 if the date precedes birth)
    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        if date < self.date_of_birth {
            return 0;
        }
        let mut years = date.year() - self.date_of_birth.year();
        if (date.month(), date.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }
}
