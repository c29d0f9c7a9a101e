// ABOUTME: Tests for the bilateral averager, symmetry analyzer, proportion ratios, and aesthetic score
// ABOUTME: Exercises single-side fallbacks, threshold edges, and partial proportion sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use bodymetrics_core::models::{BilateralMeasurement, BilateralRegion, MeasurementSet};
use bodymetrics_intelligence::bilateral::{average_pair, BilateralAverages};
use bodymetrics_intelligence::config::SymmetryConfig;
use bodymetrics_intelligence::proportions::{
    AestheticClass, AestheticScore, ProportionMetric, Proportions,
};
use bodymetrics_intelligence::symmetry::{
    analyze_pair, region_score, SymmetryAnalysis, SymmetryStatus,
};

#[test]
fn test_average_pair_fallbacks() {
    assert_eq!(average_pair(BilateralMeasurement::both(37.0, 38.0)), Some(37.5));
    assert_eq!(average_pair(BilateralMeasurement::left_only(36.0)), Some(36.0));
    assert_eq!(average_pair(BilateralMeasurement::right_only(35.5)), Some(35.5));
    assert_eq!(average_pair(BilateralMeasurement::none()), None);
}

#[test]
fn test_average_pair_ignores_invalid_side() {
    assert_eq!(average_pair(BilateralMeasurement::both(-10.0, 40.0)), Some(40.0));
    assert_eq!(average_pair(BilateralMeasurement::both(36.0, f64::NAN)), Some(36.0));
    assert_eq!(average_pair(BilateralMeasurement::both(0.0, -1.0)), None);
}

#[test]
fn test_bilateral_averages_for_fixture() {
    let averages = BilateralAverages::from_measurements(&common::complete_male_measurements());
    assert_eq!(averages.contracted_arm, Some(37.3));
    assert_eq!(averages.relaxed_arm, Some(34.3));
    assert_eq!(averages.thigh, Some(56.5));
    assert_eq!(averages.get(BilateralRegion::Calf), Some(37.3));
    assert!(averages.elbow_breadth.is_none());
}

#[test]
fn test_symmetry_classification() {
    let config = SymmetryConfig::default();

    let ideal = analyze_pair(BilateralMeasurement::both(35.0, 35.5), &config).unwrap();
    assert_eq!(ideal.percent_difference, 1.41);
    assert_eq!(ideal.absolute_difference, 0.5);
    assert_eq!(ideal.status, SymmetryStatus::Ideal);

    let attention = analyze_pair(BilateralMeasurement::both(40.0, 37.0), &config).unwrap();
    assert_eq!(attention.percent_difference, 7.5);
    assert_eq!(attention.status, SymmetryStatus::Attention);

    let asymmetric = analyze_pair(BilateralMeasurement::both(30.0, 40.0), &config).unwrap();
    assert_eq!(asymmetric.percent_difference, 25.0);
    assert_eq!(asymmetric.status, SymmetryStatus::RelevantAsymmetry);
}

#[test]
fn test_symmetry_threshold_edges() {
    let config = SymmetryConfig::default();
    // 5 % exactly is attention, 10 % exactly is still attention
    let five = analyze_pair(BilateralMeasurement::both(100.0, 95.0), &config).unwrap();
    assert_eq!(five.status, SymmetryStatus::Attention);
    let ten = analyze_pair(BilateralMeasurement::both(100.0, 90.0), &config).unwrap();
    assert_eq!(ten.status, SymmetryStatus::Attention);
}

#[test]
fn test_symmetry_needs_both_sides() {
    let config = SymmetryConfig::default();
    assert!(analyze_pair(BilateralMeasurement::left_only(35.0), &config).is_none());
    assert!(analyze_pair(BilateralMeasurement::both(0.0, 35.0), &config).is_none());
}

#[test]
fn test_region_score_curve() {
    let config = SymmetryConfig::default();
    assert_eq!(region_score(2.0, &config), 100.0);
    assert!((region_score(7.5, &config) - 85.0).abs() < 1e-9);
    assert!((region_score(10.0, &config) - 70.0).abs() < 1e-9);
    assert!((region_score(12.0, &config) - 60.0).abs() < 1e-9);
    assert_eq!(region_score(40.0, &config), 0.0);
}

#[test]
fn test_symmetry_analysis_overall_score() {
    let analysis = SymmetryAnalysis::analyze(
        &common::complete_male_measurements(),
        &SymmetryConfig::default(),
    );
    assert_eq!(analysis.regions.len(), 7);
    assert_eq!(analysis.overall_score, Some(100.0));
    assert!(analysis.region(BilateralRegion::ElbowBreadth).is_none());
}

#[test]
fn test_symmetry_analysis_without_pairs() {
    let m = MeasurementSet::new(178.0, 80.0)
        .unwrap()
        .with_contracted_arm(BilateralMeasurement::left_only(37.0));
    let analysis = SymmetryAnalysis::analyze(&m, &SymmetryConfig::default());
    assert!(analysis.regions.is_empty());
    assert!(analysis.overall_score.is_none());
}

#[test]
fn test_proportions_for_fixture() {
    let m = common::complete_male_measurements();
    let averages = BilateralAverages::from_measurements(&m);
    assert!(Proportions::is_applicable(&m));

    let p = Proportions::calculate(&m, &averages);
    assert_eq!(p.shoulder_waist, Some(1.4));
    assert_eq!(p.chest_waist, Some(1.21));
    assert_eq!(p.arm_calf, Some(1.0));
    assert_eq!(p.waist_height_pct, Some(47.2));
    assert_eq!(p.arm_pump, Some(1.09));

    let feedback = p.feedback();
    assert_eq!(feedback[&ProportionMetric::ShoulderWaist], "Good proportion");
    assert_eq!(feedback[&ProportionMetric::ChestWaist], "Good development");
    assert_eq!(feedback[&ProportionMetric::ArmCalf], "Perfect symmetry");
    assert_eq!(feedback[&ProportionMetric::WaistHeight], "Reduce abdominal fat");
    assert!(feedback[&ProportionMetric::ArmPump].starts_with("Normal contraction"));
}

#[test]
fn test_proportions_not_applicable_without_waist() {
    let m = MeasurementSet::new(178.0, 80.0).unwrap().with_chest(100.0);
    assert!(!Proportions::is_applicable(&m));

    let averages = BilateralAverages::from_measurements(&m);
    let p = Proportions::calculate(&m, &averages);
    assert!(p.chest_waist.is_none());
    assert_eq!(p.chest_height_pct, Some(56.2));
}

#[test]
fn test_aesthetic_score_full_marks() {
    let p = Proportions {
        shoulder_waist: Some(1.62),
        chest_waist: Some(1.45),
        arm_calf: Some(1.0),
        waist_height_pct: Some(46.0),
        arm_pump: Some(1.10),
        ..Proportions::default()
    };
    let score = AestheticScore::calculate(&p).unwrap();
    assert_eq!(score.score, 100.0);
    assert_eq!(score.classification, AestheticClass::Exceptional);
}

#[test]
fn test_aesthetic_score_normalizes_partial_sets() {
    let p = Proportions {
        shoulder_waist: Some(1.62),
        ..Proportions::default()
    };
    let score = AestheticScore::calculate(&p).unwrap();
    assert_eq!(score.score, 100.0);

    assert!(AestheticScore::calculate(&Proportions::default()).is_none());
}

#[test]
fn test_aesthetic_class_bands() {
    assert_eq!(AestheticClass::from_score(90.0), AestheticClass::Exceptional);
    assert_eq!(AestheticClass::from_score(85.0), AestheticClass::Excellent);
    assert_eq!(AestheticClass::from_score(72.0), AestheticClass::VeryGood);
    assert_eq!(AestheticClass::from_score(60.0), AestheticClass::Good);
    assert_eq!(AestheticClass::from_score(55.0), AestheticClass::Average);
    assert_eq!(AestheticClass::from_score(10.0), AestheticClass::ToDevelop);
}
