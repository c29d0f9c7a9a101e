// ABOUTME: Tests for structural frame indices, ideal circumference targets, and deviation bands
// ABOUTME: Checks frame classification edges and structure-scaled targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use bodymetrics_core::models::BiologicalSex;
use bodymetrics_intelligence::bilateral::BilateralAverages;
use bodymetrics_intelligence::ideals::{
    deviation_from_ideal, region_deviations, DeviationStatus, IdealBasis, IdealTargets,
    MuscleRegion,
};
use bodymetrics_intelligence::structural::{
    bone_robustness_index, posterior_index, shoulder_structural_factor,
    structural_superior_index, BoneRobustness, FrameShape, PosteriorDevelopment,
    StructuralIndices,
};

#[test]
fn test_superior_index_frame_shapes() {
    let inverted = structural_superior_index(Some(41.0), Some(33.0)).unwrap();
    assert_eq!(inverted.value, 1.242);
    assert_eq!(inverted.classification, FrameShape::Inverted);

    let neutral = structural_superior_index(Some(36.0), Some(36.0)).unwrap();
    assert_eq!(neutral.classification, FrameShape::Neutral);

    let triangular = structural_superior_index(Some(30.0), Some(36.0)).unwrap();
    assert_eq!(triangular.classification, FrameShape::Triangular);

    assert!(structural_superior_index(None, Some(33.0)).is_none());
    assert!(structural_superior_index(Some(41.0), Some(0.0)).is_none());
}

#[test]
fn test_bone_robustness_bands() {
    let medium = bone_robustness_index(Some(5.85), Some(13.5), 178.0).unwrap();
    assert_eq!(medium.value, 0.1087);
    assert_eq!(medium.classification, BoneRobustness::Medium);

    let light = bone_robustness_index(Some(5.0), Some(12.0), 178.0).unwrap();
    assert_eq!(light.classification, BoneRobustness::Light);

    let robust = bone_robustness_index(Some(7.0), Some(14.0), 178.0).unwrap();
    assert_eq!(robust.classification, BoneRobustness::Robust);

    assert!(bone_robustness_index(Some(5.8), None, 178.0).is_none());
}

#[test]
fn test_posterior_index_bands() {
    let balanced = posterior_index(Some(118.0), Some(41.0)).unwrap();
    assert_eq!(balanced.value, 2.88);
    assert_eq!(balanced.classification, PosteriorDevelopment::Balanced);

    assert_eq!(
        posterior_index(Some(100.0), Some(40.0)).unwrap().classification,
        PosteriorDevelopment::Underdeveloped
    );
    assert_eq!(
        posterior_index(Some(130.0), Some(40.0)).unwrap().classification,
        PosteriorDevelopment::HighlyDeveloped
    );
}

#[test]
fn test_shoulder_structural_factor() {
    assert_eq!(
        shoulder_structural_factor(Some(41.0), 178.0, BiologicalSex::Male),
        Some(1.001)
    );
    assert!(shoulder_structural_factor(None, 178.0, BiologicalSex::Male).is_none());
    assert!(shoulder_structural_factor(Some(41.0), 0.0, BiologicalSex::Male).is_none());
}

#[test]
fn test_structural_indices_from_fixture() {
    let m = common::complete_male_measurements();
    let averages = BilateralAverages::from_measurements(&m);
    let structural = StructuralIndices::calculate(&m, &averages, BiologicalSex::Male);

    assert_eq!(structural.superior.unwrap().classification, FrameShape::Inverted);
    assert_eq!(
        structural.posterior.unwrap().classification,
        PosteriorDevelopment::Balanced
    );
    assert_eq!(structural.shoulder_factor, Some(1.001));
    assert_eq!(
        structural.bone_robustness.unwrap().classification,
        BoneRobustness::Light
    );
}

#[test]
fn test_height_based_targets() {
    let targets = IdealTargets::height_based(178.0, BiologicalSex::Male);
    assert_eq!(targets.basis, IdealBasis::HeightBased);
    assert_eq!(targets.neck, 44.9);
    assert_eq!(targets.shoulders, 112.0);
    assert_eq!(targets.chest, 102.7);
    assert_eq!(targets.forearm, 37.4);
    assert_eq!(targets.thigh, 62.7);
    assert_eq!(targets.contracted_arm, targets.neck);
    assert_eq!(targets.calf, targets.neck);
    assert!(targets.structural_factor.is_none());
}

#[test]
fn test_structure_based_targets_scale_by_factor() {
    let targets = IdealTargets::calculate(178.0, BiologicalSex::Male, Some(1.001));
    assert_eq!(targets.basis, IdealBasis::StructureBased);
    assert_eq!(targets.structural_factor, Some(1.001));
    assert_eq!(targets.neck, 44.9);
    assert_eq!(targets.shoulders, 112.1);
    assert_eq!(targets.chest, 102.8);
    assert_eq!(targets.thigh, 62.8);
}

#[test]
fn test_unit_factor_keeps_height_basis() {
    let neutral = IdealTargets::calculate(178.0, BiologicalSex::Male, Some(1.0));
    assert_eq!(neutral, IdealTargets::height_based(178.0, BiologicalSex::Male));

    let missing = IdealTargets::calculate(178.0, BiologicalSex::Male, None);
    assert_eq!(missing.basis, IdealBasis::HeightBased);
}

#[test]
fn test_female_targets_are_smaller() {
    let male = IdealTargets::height_based(170.0, BiologicalSex::Male);
    let female = IdealTargets::height_based(170.0, BiologicalSex::Female);
    for region in MuscleRegion::ALL {
        assert!(female.get(region) < male.get(region), "{region:?}");
    }
}

#[test]
fn test_deviation_bands() {
    let ideal = deviation_from_ideal(Some(102.0), Some(102.8));
    assert_eq!(ideal.status, DeviationStatus::Ideal);
    assert_eq!(ideal.percent_difference, Some(-0.8));
    assert_eq!(ideal.absolute_difference, Some(-0.8));

    assert_eq!(
        deviation_from_ideal(Some(90.0), Some(100.0)).status,
        DeviationStatus::Underdeveloped
    );
    assert_eq!(
        deviation_from_ideal(Some(80.0), Some(100.0)).status,
        DeviationStatus::VeryUnderdeveloped
    );
    assert_eq!(
        deviation_from_ideal(Some(110.0), Some(100.0)).status,
        DeviationStatus::AboveIdeal
    );
    assert_eq!(
        deviation_from_ideal(Some(120.0), Some(100.0)).status,
        DeviationStatus::VeryAbove
    );
}

#[test]
fn test_deviation_not_measured() {
    let missing = deviation_from_ideal(None, Some(100.0));
    assert_eq!(missing.status, DeviationStatus::NotMeasured);
    assert!(missing.percent_difference.is_none());
    assert_eq!(
        deviation_from_ideal(Some(0.0), Some(100.0)).status,
        DeviationStatus::NotMeasured
    );
}

#[test]
fn test_region_deviations_for_fixture() {
    let m = common::complete_male_measurements();
    let averages = BilateralAverages::from_measurements(&m);
    let targets = IdealTargets::calculate(178.0, BiologicalSex::Male, Some(1.001));
    let deviations = region_deviations(&targets, &m, &averages);

    assert_eq!(deviations.len(), MuscleRegion::ALL.len());
    assert_eq!(deviations[&MuscleRegion::Chest].status, DeviationStatus::Ideal);
    assert_eq!(
        deviations[&MuscleRegion::Shoulders].status,
        DeviationStatus::AboveIdeal
    );
    assert_eq!(deviations[&MuscleRegion::Thigh].percent_difference, Some(-10.0));
    assert_eq!(
        deviations[&MuscleRegion::ContractedArm].status,
        DeviationStatus::VeryUnderdeveloped
    );
}
