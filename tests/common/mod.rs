// ABOUTME: Shared fixtures for integration tests: subjects, measurement sets, and processed assessments
// ABOUTME: Fixed reference dates keep every test independent of the wall clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `bodymetrics`

use bodymetrics_core::models::{BilateralMeasurement, BiologicalSex, MeasurementSet, SubjectProfile};
use bodymetrics_intelligence::{AnalysisConfig, Assessment};
use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference "today" for date validation
pub fn today() -> NaiveDate {
    date(2025, 6, 1)
}

pub fn male_subject() -> SubjectProfile {
    SubjectProfile::new("Carlos", BiologicalSex::Male, date(1990, 3, 15), today()).unwrap()
}

pub fn female_subject() -> SubjectProfile {
    SubjectProfile::new("Ana", BiologicalSex::Female, date(1994, 11, 2), today()).unwrap()
}

/// Fully measured male set: 178 cm, 80 kg
pub fn complete_male_measurements() -> MeasurementSet {
    MeasurementSet::new(178.0, 80.0)
        .unwrap()
        .with_neck(38.0)
        .with_shoulders(118.0)
        .with_chest(102.0)
        .with_waist(84.0)
        .with_abdomen(86.0)
        .with_hip(98.0)
        .with_relaxed_arm(BilateralMeasurement::both(34.0, 34.5))
        .with_contracted_arm(BilateralMeasurement::both(37.0, 37.5))
        .with_forearm(BilateralMeasurement::both(29.0, 29.5))
        .with_thigh(BilateralMeasurement::both(56.0, 57.0))
        .with_calf(BilateralMeasurement::both(37.0, 37.5))
        .with_frame_breadths(Some(41.0), Some(33.0))
        .with_wrist_breadth(BilateralMeasurement::both(5.8, 5.9))
        .with_ankle_breadth(BilateralMeasurement::both(7.2, 7.3))
}

/// Female set with the circumferences needed for every index
pub fn female_measurements() -> MeasurementSet {
    MeasurementSet::new(165.0, 62.0)
        .unwrap()
        .with_neck(32.0)
        .with_chest(90.0)
        .with_waist(70.0)
        .with_hip(98.0)
        .with_thigh(BilateralMeasurement::both(55.0, 55.5))
        .with_calf(BilateralMeasurement::both(35.0, 35.0))
}

/// Male set with one weight and waist, everything else as the complete set
pub fn male_measurements_with(weight_kg: f64, waist_cm: f64) -> MeasurementSet {
    let mut m = complete_male_measurements();
    m.weight_kg = weight_kg;
    m.waist = Some(waist_cm);
    m
}

pub fn processed_assessment(
    subject: &SubjectProfile,
    on: NaiveDate,
    measurements: MeasurementSet,
) -> Assessment {
    let mut assessment = Assessment::new(subject.id, on, measurements, today()).unwrap();
    assessment
        .process(subject, &AnalysisConfig::default())
        .unwrap();
    assessment
}

pub fn unprocessed_assessment(subject_id: Uuid, on: NaiveDate, measurements: MeasurementSet) -> Assessment {
    Assessment::new(subject_id, on, measurements, today()).unwrap()
}
