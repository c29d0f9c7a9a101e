// ABOUTME: Tests for subject profiles, sex normalization, and measurement set invariants
// ABOUTME: Construction-time validation and serde defaults for optional measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use bodymetrics_core::errors::ErrorCode;
use bodymetrics_core::models::{
    BilateralMeasurement, BilateralRegion, BiologicalSex, MeasurementSet, SubjectProfile,
};

#[test]
fn test_sex_parsing_accepts_codes_and_words() {
    assert_eq!("M".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
    assert_eq!(" female ".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);
    assert_eq!("masculino".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
    assert_eq!("f".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);

    let err = "x".parse::<BiologicalSex>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_sex_serde_aliases() {
    let male: BiologicalSex = serde_json::from_str("\"M\"").unwrap();
    let female: BiologicalSex = serde_json::from_str("\"FEMININO\"").unwrap();
    assert_eq!(male, BiologicalSex::Male);
    assert_eq!(female, BiologicalSex::Female);
    assert_eq!(serde_json::to_string(&male).unwrap(), "\"male\"");
    assert!(serde_json::from_str::<BiologicalSex>("\"other\"").is_err());
    assert_eq!(BiologicalSex::Female.code(), "F");
    assert_eq!(BiologicalSex::Female.select(1.0, 2.0), 2.0);
}

#[test]
fn test_subject_age_on_birthday_boundary() {
    let subject = common::male_subject();
    assert_eq!(subject.age_on(common::date(2025, 3, 14)), 34);
    assert_eq!(subject.age_on(common::date(2025, 3, 15)), 35);
    assert_eq!(subject.age_on(common::date(1980, 1, 1)), 0);
}

#[test]
fn test_subject_validation() {
    let today = common::today();
    let blank = SubjectProfile::new("   ", BiologicalSex::Male, common::date(1990, 1, 1), today);
    assert_eq!(blank.unwrap_err().code, ErrorCode::InvalidInput);

    let unborn = SubjectProfile::new("Kid", BiologicalSex::Female, common::date(2025, 7, 1), today);
    assert_eq!(unborn.unwrap_err().code, ErrorCode::ValueOutOfRange);

    let ancient = SubjectProfile::new("Old", BiologicalSex::Male, common::date(1900, 1, 1), today);
    assert_eq!(ancient.unwrap_err().code, ErrorCode::ValueOutOfRange);

    let newborn = SubjectProfile::new("Baby", BiologicalSex::Male, today, today).unwrap();
    assert_eq!(newborn.age_on(today), 0);
}

#[test]
fn test_measurement_set_rejects_out_of_range_required_values() {
    assert_eq!(
        MeasurementSet::new(0.0, 80.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        MeasurementSet::new(301.0, 80.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        MeasurementSet::new(178.0, -1.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        MeasurementSet::new(178.0, f64::NAN).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert!(MeasurementSet::new(300.0, 500.0).is_ok());
}

#[test]
fn test_measurement_set_validates_optional_values() {
    assert!(common::complete_male_measurements().validate().is_ok());

    let bad_waist = MeasurementSet::new(178.0, 80.0).unwrap().with_waist(0.0);
    assert_eq!(bad_waist.validate().unwrap_err().code, ErrorCode::InvalidInput);

    let bad_calf = MeasurementSet::new(178.0, 80.0)
        .unwrap()
        .with_calf(BilateralMeasurement::left_only(-3.0));
    let err = bad_calf.validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains(BilateralRegion::Calf.label()));
}

#[test]
fn test_sanitized_drops_each_invalid_optional_value() {
    let mut m = common::complete_male_measurements()
        .with_calf(BilateralMeasurement::both(f64::NAN, 37.5));
    m.hip = Some(-98.0);

    let (clean, rejected) = m.sanitized();
    assert_eq!(rejected.len(), 2);
    assert!(rejected.iter().all(|e| e.code == ErrorCode::InvalidInput));
    assert!(rejected[0].message.contains("hip"));
    assert!(rejected[1].message.contains("Calf (left)"));

    assert!(clean.hip.is_none());
    assert_eq!(clean.calf, BilateralMeasurement::right_only(37.5));
    assert_eq!(clean.waist, Some(84.0));
    assert!(clean.validate().is_ok());

    let (untouched, none) = common::complete_male_measurements().sanitized();
    assert!(none.is_empty());
    assert_eq!(untouched, common::complete_male_measurements());
}

#[test]
fn test_measurement_set_json_defaults_missing_fields() {
    let json = r#"{
        "height_cm": 170.0,
        "weight_kg": 70.0,
        "waist": 80.0,
        "thigh": {"left": 55.0}
    }"#;
    let m: MeasurementSet = serde_json::from_str(json).unwrap();
    assert_eq!(m.waist, Some(80.0));
    assert!(m.neck.is_none());
    assert_eq!(m.thigh, BilateralMeasurement::left_only(55.0));
    assert!(m.calf.is_empty());
    assert_eq!(m.bilateral(BilateralRegion::Thigh).left, Some(55.0));
    assert!((m.height_m() - 1.7).abs() < 1e-12);

    // Empty pairs are not written back out
    let text = serde_json::to_string(&m).unwrap();
    assert!(!text.contains("calf"));
}

#[test]
fn test_bone_breadth_regions() {
    assert!(BilateralRegion::WristBreadth.is_bone_breadth());
    assert!(!BilateralRegion::Thigh.is_bone_breadth());
}
