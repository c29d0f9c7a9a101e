// ABOUTME: Tests for BMI, circumference-method body fat, tissue breakdown, waist ratios, and conicity
// ABOUTME: Covers reference values, classification bands, and rejected inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use bodymetrics_core::errors::ErrorCode;
use bodymetrics_core::models::BiologicalSex;
use bodymetrics_intelligence::indices::{
    calculate_bmi, calculate_body_fat_navy, calculate_conicity_index, calculate_fat_mass,
    calculate_lean_mass, calculate_waist_height_ratio, calculate_waist_hip_ratio, classify_bmi,
    classify_body_fat, classify_waist_height_ratio, classify_waist_hip_ratio,
    healthy_weight_range, BmiCategory, BmiReading, BodyFatCategory, CardiometabolicRisk,
    TissueComposition, WaistHeightCategory,
};

#[test]
fn test_bmi_reference_value() {
    assert_eq!(calculate_bmi(70.0, 175.0).unwrap(), 22.86);
}

#[test]
fn test_bmi_rejects_invalid_inputs() {
    for (weight, height) in [(0.0, 175.0), (-1.0, 175.0), (70.0, 0.0), (70.0, 301.0)] {
        let err = calculate_bmi(weight, height).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMeasurement, "{weight}/{height}");
    }
    assert!(calculate_bmi(70.0, 300.0).is_ok());
}

#[test]
fn test_bmi_bands() {
    assert_eq!(classify_bmi(15.9), BmiCategory::SevereThinness);
    assert_eq!(classify_bmi(16.5), BmiCategory::ModerateThinness);
    assert_eq!(classify_bmi(18.0), BmiCategory::MildThinness);
    assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
    assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0), BmiCategory::ObesityI);
    assert_eq!(classify_bmi(35.0), BmiCategory::ObesityII);
    assert_eq!(classify_bmi(40.0), BmiCategory::ObesityIII);
}

#[test]
fn test_bmi_reading_includes_healthy_weight_range() {
    let reading = BmiReading::calculate(70.0, 175.0).unwrap();
    assert_eq!(reading.category, BmiCategory::Normal);
    assert_eq!(reading.healthy_weight_min_kg, 56.7);
    assert_eq!(reading.healthy_weight_max_kg, 76.6);
    assert_eq!(healthy_weight_range(175.0), (56.7, 76.6));
}

#[test]
fn test_body_fat_male_matches_formula() {
    let pct = calculate_body_fat_navy(178.0, 88.0, 38.0, None, BiologicalSex::Male).unwrap();
    let expected = 86.010f64.mul_add(50f64.log10(), (-70.041f64).mul_add(178f64.log10(), 36.76));
    assert!((pct - expected).abs() < 0.05, "{pct} vs {expected}");
    assert_eq!(pct, 25.3);
}

#[test]
fn test_body_fat_male_requires_waist_above_neck() {
    let err = calculate_body_fat_navy(178.0, 38.0, 38.0, None, BiologicalSex::Male).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidMeasurement);
    assert!(calculate_body_fat_navy(178.0, 35.0, 38.0, None, BiologicalSex::Male).is_err());
}

#[test]
fn test_body_fat_female_requires_hip() {
    let err = calculate_body_fat_navy(165.0, 75.0, 33.0, None, BiologicalSex::Female).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidMeasurement);
    assert!(err.message.contains("Hip"));

    let pct =
        calculate_body_fat_navy(165.0, 75.0, 33.0, Some(100.0), BiologicalSex::Female).unwrap();
    assert_eq!(pct, 56.3);
}

#[test]
fn test_body_fat_is_clamped() {
    // Tiny waist-neck gap drives the raw formula below the floor
    let low = calculate_body_fat_navy(200.0, 39.0, 38.0, None, BiologicalSex::Male).unwrap();
    assert_eq!(low, 3.0);
    let high = calculate_body_fat_navy(150.0, 180.0, 30.0, None, BiologicalSex::Male).unwrap();
    assert_eq!(high, 60.0);
}

#[test]
fn test_body_fat_bands_differ_by_sex() {
    assert_eq!(classify_body_fat(12.0, BiologicalSex::Male), BodyFatCategory::Athlete);
    assert_eq!(classify_body_fat(12.0, BiologicalSex::Female), BodyFatCategory::Essential);
    assert_eq!(classify_body_fat(22.0, BiologicalSex::Male), BodyFatCategory::Acceptable);
    assert_eq!(classify_body_fat(22.0, BiologicalSex::Female), BodyFatCategory::Fitness);
    assert_eq!(classify_body_fat(33.0, BiologicalSex::Female), BodyFatCategory::Obesity);
}

#[test]
fn test_fat_and_lean_mass() {
    assert_eq!(calculate_fat_mass(80.0, 20.0), 16.0);
    assert_eq!(calculate_lean_mass(80.0, 20.0), 64.0);
}

#[test]
fn test_tissue_composition_bone_fraction() {
    let male = TissueComposition::calculate(80.0, 20.0, BiologicalSex::Male);
    assert!((male.fat_mass_kg - 16.0).abs() < 1e-9);
    assert!((male.bone_mass_kg - 9.6).abs() < 1e-9);
    assert!((male.muscle_mass_kg - 54.4).abs() < 1e-9);
    assert!((male.muscle_pct - 68.0).abs() < 1e-9);
    assert!((male.bone_pct - 12.0).abs() < 1e-9);

    let female = TissueComposition::calculate(60.0, 25.0, BiologicalSex::Female);
    assert!((female.bone_mass_kg - 5.4).abs() < 1e-9);
    assert!((female.muscle_mass_kg - 39.6).abs() < 1e-9);
}

#[test]
fn test_waist_ratios() {
    assert_eq!(calculate_waist_hip_ratio(84.0, 98.0).unwrap(), 0.857);
    assert_eq!(calculate_waist_height_ratio(84.0, 178.0).unwrap(), 0.472);
    assert!(calculate_waist_hip_ratio(84.0, 0.0).is_err());
    assert!(calculate_waist_height_ratio(0.0, 178.0).is_err());

    assert_eq!(
        classify_waist_hip_ratio(0.857, BiologicalSex::Male),
        CardiometabolicRisk::Moderate
    );
    assert_eq!(
        classify_waist_hip_ratio(0.857, BiologicalSex::Female),
        CardiometabolicRisk::High
    );
    assert_eq!(classify_waist_height_ratio(0.39), WaistHeightCategory::VeryLow);
    assert_eq!(classify_waist_height_ratio(0.472), WaistHeightCategory::Healthy);
    assert_eq!(classify_waist_height_ratio(0.55), WaistHeightCategory::Overweight);
    assert_eq!(classify_waist_height_ratio(0.65), WaistHeightCategory::Obesity);
    assert_eq!(classify_waist_height_ratio(0.75), WaistHeightCategory::MorbidObesity);
}

#[test]
fn test_conicity_index() {
    let ci = calculate_conicity_index(84.0, 80.0, 178.0).unwrap();
    assert!((ci - 1.15).abs() < 1e-9);
    assert!(calculate_conicity_index(84.0, 0.0, 178.0).is_err());
}
