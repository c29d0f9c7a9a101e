// ABOUTME: Assessment pipeline running every calculation stage in order
// ABOUTME: Produces the typed result set with diagnostics, warnings, and a plain-text report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Assessment Pipeline
//!
//! Stages run strictly in order: bilateral averages, structural indices,
//! ideal targets, basic indices, symmetry, proportions, modular scores,
//! overall score, somatotype. Each stage reads only earlier outputs.
//!
//! Invalid optional values are dropped up front, one [`Diagnostic`] each.
//! A stage that rejects its inputs leaves its output empty and records a
//! diagnostic too; siblings keep running. Only invalid height or weight
//! aborts the whole assessment.

use crate::bilateral::BilateralAverages;
use crate::config::AnalysisConfig;
use crate::ideals::{region_deviations, IdealDeviation, IdealTargets, MuscleRegion};
use crate::indices::{
    calculate_body_fat_navy, calculate_conicity_index, calculate_waist_height_ratio,
    calculate_waist_hip_ratio, classify_waist_height_ratio, classify_waist_hip_ratio,
    BasicIndices, BmiReading, BodyFatReading, RatioReading, TissueComposition,
};
use crate::proportions::{AestheticScore, ProportionMetric, Proportions};
use crate::scoring::{ModularScores, OverallScore, ScoringInputs};
use crate::somatotype::{classify_somatotype, SomatotypeInputs, SomatotypeProfile};
use crate::structural::StructuralIndices;
use crate::symmetry::SymmetryAnalysis;
use crate::validation::{consistency_warnings, plausibility_warnings};
use bodymetrics_core::errors::AppResult;
use bodymetrics_core::models::{BiologicalSex, MeasurementSet, SubjectProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::{debug, warn};

/// Pipeline stage that can reject its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Optional-field validation
    Measurements,
    /// Body mass index
    Bmi,
    /// Circumference-method body fat
    BodyFat,
    /// Waist-hip ratio
    WaistHip,
    /// Waist-height ratio
    WaistHeight,
    /// Conicity index
    Conicity,
}

/// A stage failure recorded instead of aborting the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stage that failed
    pub stage: PipelineStage,
    /// Failure reason
    pub message: String,
}

/// Every value computed for one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResults {
    /// Date the measurements were taken
    pub evaluation_date: NaiveDate,
    /// Completed years of age on the evaluation date
    pub age_years: u32,
    /// Formula branch used
    pub sex: BiologicalSex,
    /// Averaged bilateral regions
    pub bilateral: BilateralAverages,
    /// Frame indices
    pub structural: StructuralIndices,
    /// Ideal circumferences
    pub ideals: IdealTargets,
    /// Deviation from ideal per region
    pub ideal_deviations: BTreeMap<MuscleRegion, IdealDeviation>,
    /// BMI, body fat, waist ratios
    pub indices: BasicIndices,
    /// Left/right analysis
    pub symmetry: SymmetryAnalysis,
    /// Circumference ratios, when waist and chest or shoulders were measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportions: Option<Proportions>,
    /// Feedback per ratio
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub proportion_feedback: BTreeMap<ProportionMetric, String>,
    /// Proportion-based aesthetic score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aesthetic: Option<AestheticScore>,
    /// Five modular scores
    pub scores: ModularScores,
    /// Weighted overall score
    pub overall: OverallScore,
    /// Body type, when BMI and both waist ratios are available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub somatotype: Option<SomatotypeProfile>,
    /// Readings worth double-checking
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Stages that rejected their inputs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Collects stage failures while the pipeline runs
#[derive(Default)]
struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    fn capture<T>(&mut self, stage: PipelineStage, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(?stage, error = %e.message, "assessment stage skipped");
                self.entries.push(Diagnostic {
                    stage,
                    message: e.message,
                });
                None
            }
        }
    }
}

/// Run the full pipeline for one measurement set
///
/// Deterministic: identical inputs give identical results. The clock is
/// never read.
///
/// # Errors
///
/// Returns `ValueOutOfRange` only when height or weight is invalid.
pub fn process_assessment(
    measurements: &MeasurementSet,
    subject: &SubjectProfile,
    evaluation_date: NaiveDate,
    config: &AnalysisConfig,
) -> AppResult<AssessmentResults> {
    measurements.validate_required()?;

    let sex = subject.sex;
    let mut log = DiagnosticLog::default();
    let (clean, rejected) = measurements.sanitized();
    for e in rejected {
        log.capture::<()>(PipelineStage::Measurements, Err(e));
    }
    // Every stage below sees only valid optional values
    let measurements = &clean;

    let bilateral = BilateralAverages::from_measurements(measurements);
    debug!(?bilateral, "bilateral averages computed");

    let structural = StructuralIndices::calculate(measurements, &bilateral, sex);
    debug!(?structural, "structural indices computed");

    let ideals = IdealTargets::calculate(measurements.height_cm, sex, structural.shoulder_factor);
    let ideal_deviations = region_deviations(&ideals, measurements, &bilateral);
    debug!(basis = ?ideals.basis, "ideal targets computed");

    let indices = basic_indices(measurements, sex, &mut log);
    debug!(?indices, "basic indices computed");

    let symmetry = SymmetryAnalysis::analyze(measurements, &config.symmetry);
    debug!(overall = ?symmetry.overall_score, "symmetry analyzed");

    let all_proportions = Proportions::calculate(measurements, &bilateral);
    let proportions = Proportions::is_applicable(measurements).then(|| all_proportions.clone());
    let proportion_feedback = proportions
        .as_ref()
        .map(Proportions::feedback)
        .unwrap_or_default();
    let aesthetic = proportions.as_ref().and_then(AestheticScore::calculate);

    let inputs = ScoringInputs {
        measurements,
        sex,
        deviations: &ideal_deviations,
        symmetry: &symmetry,
        structural: &structural,
        indices: &indices,
        proportions: &all_proportions,
    };
    let scores = ModularScores::calculate(&inputs, &config.composition, &config.symmetry);
    let overall = OverallScore::calculate(&scores, &config.overall_weights);
    debug!(overall = overall.score, "scores computed");

    let somatotype = somatotype_for(&indices, &all_proportions);

    let mut warnings = plausibility_warnings(measurements, &bilateral);
    warnings.extend(consistency_warnings(measurements, &bilateral));

    Ok(AssessmentResults {
        evaluation_date,
        age_years: subject.age_on(evaluation_date),
        sex,
        bilateral,
        structural,
        ideals,
        ideal_deviations,
        indices,
        symmetry,
        proportions,
        proportion_feedback,
        aesthetic,
        scores,
        overall,
        somatotype,
        warnings,
        diagnostics: log.entries,
    })
}

fn basic_indices(
    measurements: &MeasurementSet,
    sex: BiologicalSex,
    log: &mut DiagnosticLog,
) -> BasicIndices {
    let height = measurements.height_cm;
    let weight = measurements.weight_kg;

    let bmi = log.capture(PipelineStage::Bmi, BmiReading::calculate(weight, height));

    let body_fat_pct = match (measurements.waist, measurements.neck) {
        (Some(waist), Some(neck)) => log.capture(
            PipelineStage::BodyFat,
            calculate_body_fat_navy(height, waist, neck, measurements.hip, sex),
        ),
        _ => None,
    };
    let body_fat = body_fat_pct.map(|pct| BodyFatReading::from_percent(pct, weight, sex));
    let tissue = body_fat_pct.map(|pct| TissueComposition::calculate(weight, pct, sex));

    let waist_hip = match (measurements.waist, measurements.hip) {
        (Some(waist), Some(hip)) => log
            .capture(PipelineStage::WaistHip, calculate_waist_hip_ratio(waist, hip))
            .map(|value| RatioReading {
                value,
                classification: classify_waist_hip_ratio(value, sex),
            }),
        _ => None,
    };

    let waist_height = measurements.waist.and_then(|waist| {
        log.capture(
            PipelineStage::WaistHeight,
            calculate_waist_height_ratio(waist, height),
        )
        .map(|value| RatioReading {
            value,
            classification: classify_waist_height_ratio(value),
        })
    });

    let conicity = measurements.waist.and_then(|waist| {
        log.capture(
            PipelineStage::Conicity,
            calculate_conicity_index(waist, weight, height),
        )
    });

    BasicIndices {
        bmi,
        body_fat,
        tissue,
        waist_hip,
        waist_height,
        conicity,
    }
}

fn somatotype_for(indices: &BasicIndices, proportions: &Proportions) -> Option<SomatotypeProfile> {
    let inputs = SomatotypeInputs {
        bmi: indices.bmi?.value,
        waist_height_ratio: indices.waist_height?.value,
        waist_hip_ratio: indices.waist_hip?.value,
        shoulder_waist: proportions.shoulder_waist,
        chest_waist: proportions.chest_waist,
    };
    Some(classify_somatotype(&inputs))
}

impl AssessmentResults {
    /// Render a plain-text report of the results
    #[must_use]
    pub fn summary_report(&self, subject: &SubjectProfile, measurements: &MeasurementSet) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "BODY ASSESSMENT REPORT");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Name: {}", subject.display_name);
        let _ = writeln!(out, "Sex: {}", self.sex);
        let _ = writeln!(out, "Age: {} years", self.age_years);
        let _ = writeln!(out, "Assessment date: {}", self.evaluation_date);
        let _ = writeln!(out);

        let _ = writeln!(out, "BASIC MEASUREMENTS:");
        let _ = writeln!(out, "  Height: {} cm", measurements.height_cm);
        let _ = writeln!(out, "  Weight: {} kg", measurements.weight_kg);
        let _ = writeln!(out);

        let _ = writeln!(out, "BODY INDICES:");
        if let Some(bmi) = self.indices.bmi {
            let _ = writeln!(out, "  BMI: {} - {}", bmi.value, bmi.category.label());
            let _ = writeln!(
                out,
                "  Healthy weight range: {}-{} kg",
                bmi.healthy_weight_min_kg, bmi.healthy_weight_max_kg
            );
        }
        if let Some(bf) = self.indices.body_fat {
            let _ = writeln!(out, "  Body fat: {}% - {}", bf.percent, bf.category.label());
            let _ = writeln!(out, "  Fat mass: {} kg", bf.fat_mass_kg);
            let _ = writeln!(out, "  Lean mass: {} kg", bf.lean_mass_kg);
        }
        if let Some(whr) = self.indices.waist_hip {
            let _ = writeln!(out, "  Waist-hip ratio: {} ({:?} risk)", whr.value, whr.classification);
        }
        if let Some(whtr) = self.indices.waist_height {
            let _ = writeln!(out, "  Waist-height ratio: {} ({:?})", whtr.value, whtr.classification);
        }
        if let Some(ci) = self.indices.conicity {
            let _ = writeln!(out, "  Conicity index: {ci}");
        }
        let _ = writeln!(out);

        if !self.proportion_feedback.is_empty() {
            let _ = writeln!(out, "PROPORTION FEEDBACK:");
            for (metric, note) in &self.proportion_feedback {
                let _ = writeln!(out, "  {metric:?}: {note}");
            }
            let _ = writeln!(out);
        }
        if let Some(aesthetic) = self.aesthetic {
            let _ = writeln!(
                out,
                "AESTHETIC SCORE: {}/100 - {}",
                aesthetic.score,
                aesthetic.classification.label()
            );
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "SCORES:");
        for (name, score) in [
            ("Upper", &self.scores.upper),
            ("Lower", &self.scores.lower),
            ("Posterior", &self.scores.posterior),
            ("Proportional", &self.scores.proportional),
            ("Composition", &self.scores.composition),
        ] {
            let _ = writeln!(
                out,
                "  {name}: {} ({})",
                score.score,
                score.classification.label()
            );
        }
        let _ = writeln!(
            out,
            "  Overall: {} ({})",
            self.overall.score,
            self.overall.classification.label()
        );
        let _ = writeln!(out);

        if let Some(profile) = &self.somatotype {
            let _ = writeln!(out, "SOMATOTYPE: {}", profile.somatotype.label().to_uppercase());
            let _ = writeln!(out, "  {}", profile.description);
            let d = profile.distribution;
            let _ = writeln!(
                out,
                "  Ectomorph {}% / Mesomorph {}% / Endomorph {}%",
                d.ectomorph, d.mesomorph, d.endomorph
            );
            let _ = writeln!(out, "  Training: {}", profile.recommendations.training);
            let _ = writeln!(out, "  Diet: {}", profile.recommendations.diet);
            let _ = writeln!(out, "  Tips: {}", profile.recommendations.tips);
            let _ = writeln!(out);
        }

        for warning in &self.warnings {
            let _ = writeln!(out, "WARNING: {warning}");
        }
        for diagnostic in &self.diagnostics {
            let _ = writeln!(out, "SKIPPED {:?}: {}", diagnostic.stage, diagnostic.message);
        }
        out.push_str(&rule);
        out
    }
}

