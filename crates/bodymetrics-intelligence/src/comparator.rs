// ABOUTME: Longitudinal comparison of processed assessments for one subject
// ABOUTME: Pairwise deltas with evolution notes and a verdict, plus trend direction over a series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Longitudinal Comparator
//!
//! [`compare`] diffs two assessments field by field. Only fields present on
//! both sides produce a delta. Evolution notes are flagged positive,
//! negative or neutral against [`EvolutionThresholds`], and the verdict
//! counts positive against negative flags.
//!
//! [`analyze_trend`] sorts a series ascending by date and classifies the
//! first-to-last change of each tracked metric.

use crate::assessment::Assessment;
use crate::bilateral::BilateralAverages;
use crate::config::{AnalysisConfig, EvolutionThresholds, TrendConfig};
use crate::numeric::{percent_change, round_to};
use crate::validation::series_warnings;
use bodymetrics_core::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use tracing::debug;

/// Raw measurement or bilateral average tracked between assessments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    /// Body weight (kg)
    Weight,
    /// Neck circumference
    Neck,
    /// Chest circumference
    Chest,
    /// Waist circumference
    Waist,
    /// Abdomen circumference
    Abdomen,
    /// Hip circumference
    Hip,
    /// Shoulder circumference
    Shoulders,
    /// Averaged relaxed arm
    RelaxedArm,
    /// Averaged contracted arm
    ContractedArm,
    /// Averaged forearm
    Forearm,
    /// Averaged thigh
    Thigh,
    /// Averaged calf
    Calf,
}

impl MeasurementField {
    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Neck => "Neck",
            Self::Chest => "Chest",
            Self::Waist => "Waist",
            Self::Abdomen => "Abdomen",
            Self::Hip => "Hip",
            Self::Shoulders => "Shoulders",
            Self::RelaxedArm => "Relaxed arm",
            Self::ContractedArm => "Contracted arm",
            Self::Forearm => "Forearm",
            Self::Thigh => "Thigh",
            Self::Calf => "Calf",
        }
    }
}

/// Computed index tracked between assessments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexField {
    /// Body mass index
    Bmi,
    /// Body fat percentage
    BodyFat,
    /// Fat mass (kg)
    FatMass,
    /// Lean mass (kg)
    LeanMass,
    /// Waist-hip ratio
    WaistHip,
    /// Waist-height ratio
    WaistHeight,
    /// Proportion-based aesthetic score
    AestheticScore,
    /// Weighted overall score
    OverallScore,
}

impl IndexField {
    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bmi => "BMI",
            Self::BodyFat => "Body fat %",
            Self::FatMass => "Fat mass",
            Self::LeanMass => "Lean mass",
            Self::WaistHip => "Waist-hip ratio",
            Self::WaistHeight => "Waist-height ratio",
            Self::AestheticScore => "Aesthetic score",
            Self::OverallScore => "Overall score",
        }
    }
}

/// Change of one value between two assessments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Older value
    pub previous: f64,
    /// Newer value
    pub current: f64,
    /// `current - previous`, rounded
    pub difference: f64,
    /// Relative change in %, 2 decimals; 0 when `previous` is 0
    pub percent: f64,
}

impl Delta {
    /// Diff two values, rounding the difference to `decimals`
    #[must_use]
    pub fn between(previous: f64, current: f64, decimals: i32) -> Self {
        Self {
            previous,
            current,
            difference: round_to(current - previous, decimals),
            percent: round_to(percent_change(previous, current), 2),
        }
    }
}

/// How an evolution note should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSentiment {
    /// Progress
    Positive,
    /// Regression
    Negative,
    /// Informational
    Neutral,
}

/// One qualitative observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNote {
    /// Reading of the note
    pub sentiment: NoteSentiment,
    /// Text
    pub message: String,
}

impl EvolutionNote {
    fn new(sentiment: NoteSentiment, message: String) -> Self {
        Self { sentiment, message }
    }
}

/// Overall verdict of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionVerdict {
    /// Positive flags exceed negative flags by more than two
    Excellent,
    /// More positive than negative flags
    Good,
    /// As many positive as negative flags
    Moderate,
    /// More negative than positive flags
    NeedsAdjustment,
}

impl EvolutionVerdict {
    /// Classify from flag counts
    #[must_use]
    pub const fn from_counts(positive: usize, negative: usize) -> Self {
        if positive > negative + 2 {
            Self::Excellent
        } else if positive > negative {
            Self::Good
        } else if positive == negative {
            Self::Moderate
        } else {
            Self::NeedsAdjustment
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent evolution",
            Self::Good => "Good evolution",
            Self::Moderate => "Moderate evolution",
            Self::NeedsAdjustment => "Needs adjustment",
        }
    }
}

impl fmt::Display for EvolutionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of comparing two assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentComparison {
    /// Date of the older assessment
    pub older_date: NaiveDate,
    /// Date of the newer assessment
    pub newer_date: NaiveDate,
    /// Days between the two
    pub days_between: i64,
    /// Raw measurement and limb-average changes (1 decimal)
    pub measurement_deltas: BTreeMap<MeasurementField, Delta>,
    /// Computed index changes (2 decimals)
    pub index_deltas: BTreeMap<IndexField, Delta>,
    /// Qualitative observations
    pub notes: Vec<EvolutionNote>,
    /// Overall verdict
    pub verdict: EvolutionVerdict,
}

fn measurement_values(assessment: &Assessment) -> BTreeMap<MeasurementField, f64> {
    let (m, _) = assessment.measurements.sanitized();
    let averages = assessment
        .results()
        .map_or_else(|| BilateralAverages::from_measurements(&m), |r| r.bilateral.clone());
    [
        (MeasurementField::Weight, Some(m.weight_kg)),
        (MeasurementField::Neck, m.neck),
        (MeasurementField::Chest, m.chest),
        (MeasurementField::Waist, m.waist),
        (MeasurementField::Abdomen, m.abdomen),
        (MeasurementField::Hip, m.hip),
        (MeasurementField::Shoulders, m.shoulders),
        (MeasurementField::RelaxedArm, averages.relaxed_arm),
        (MeasurementField::ContractedArm, averages.contracted_arm),
        (MeasurementField::Forearm, averages.forearm),
        (MeasurementField::Thigh, averages.thigh),
        (MeasurementField::Calf, averages.calf),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

fn index_values(assessment: &Assessment) -> BTreeMap<IndexField, f64> {
    let Some(results) = assessment.results() else {
        return BTreeMap::new();
    };
    let indices = &results.indices;
    [
        (IndexField::Bmi, indices.bmi.map(|b| b.value)),
        (IndexField::BodyFat, indices.body_fat.map(|b| b.percent)),
        (IndexField::FatMass, indices.body_fat.map(|b| b.fat_mass_kg)),
        (IndexField::LeanMass, indices.body_fat.map(|b| b.lean_mass_kg)),
        (IndexField::WaistHip, indices.waist_hip.map(|r| r.value)),
        (IndexField::WaistHeight, indices.waist_height.map(|r| r.value)),
        (IndexField::AestheticScore, results.aesthetic.map(|a| a.score)),
        (IndexField::OverallScore, Some(results.overall.score)),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
}

fn paired_deltas<K: Ord + Copy>(
    older: &BTreeMap<K, f64>,
    newer: &BTreeMap<K, f64>,
    decimals: i32,
) -> BTreeMap<K, Delta> {
    older
        .iter()
        .filter_map(|(key, &previous)| {
            newer
                .get(key)
                .map(|&current| (*key, Delta::between(previous, current, decimals)))
        })
        .collect()
}

fn score_note(notes: &mut Vec<EvolutionNote>, name: &str, delta: Option<&Delta>, t: &EvolutionThresholds) {
    if let Some(d) = delta {
        if d.difference > t.significant_score_improvement {
            notes.push(EvolutionNote::new(
                NoteSentiment::Positive,
                format!("Significant {name} improvement: +{} points", d.difference),
            ));
        } else if d.difference > t.score_improvement {
            notes.push(EvolutionNote::new(
                NoteSentiment::Positive,
                format!("{name} improvement: +{} points", d.difference),
            ));
        }
    }
}

fn evolution_notes(
    measurements: &BTreeMap<MeasurementField, Delta>,
    indices: &BTreeMap<IndexField, Delta>,
    t: &EvolutionThresholds,
) -> Vec<EvolutionNote> {
    let mut notes = Vec::new();

    if let Some(d) = measurements.get(&MeasurementField::Weight) {
        let note = if d.difference > t.weight_change_kg {
            EvolutionNote::new(
                NoteSentiment::Neutral,
                format!("Weight gain: +{} kg", d.difference),
            )
        } else if d.difference < -t.weight_change_kg {
            EvolutionNote::new(
                NoteSentiment::Positive,
                format!("Weight loss: {} kg", d.difference),
            )
        } else {
            EvolutionNote::new(NoteSentiment::Neutral, "Weight stable".to_owned())
        };
        notes.push(note);
    }

    if let Some(d) = indices.get(&IndexField::BodyFat) {
        if d.difference < -t.body_fat_change_pct {
            notes.push(EvolutionNote::new(
                NoteSentiment::Positive,
                format!("Body fat reduction: {} points", d.difference),
            ));
        } else if d.difference > t.body_fat_change_pct {
            notes.push(EvolutionNote::new(
                NoteSentiment::Negative,
                format!("Body fat increase: +{} points", d.difference),
            ));
        }
    }

    if let Some(d) = indices.get(&IndexField::LeanMass) {
        if d.difference > t.lean_mass_change_kg {
            notes.push(EvolutionNote::new(
                NoteSentiment::Positive,
                format!("Lean mass gain: +{} kg", d.difference),
            ));
        } else if d.difference < -t.lean_mass_change_kg {
            notes.push(EvolutionNote::new(
                NoteSentiment::Negative,
                format!("Lean mass loss: {} kg", d.difference),
            ));
        }
    }

    if let Some(d) = measurements.get(&MeasurementField::Waist) {
        if d.difference < -t.waist_change_cm {
            notes.push(EvolutionNote::new(
                NoteSentiment::Positive,
                format!("Waist reduction: {} cm", d.difference),
            ));
        } else if d.difference > t.waist_change_cm {
            notes.push(EvolutionNote::new(
                NoteSentiment::Neutral,
                format!("Waist increase: +{} cm", d.difference),
            ));
        }
    }

    let gains: Vec<String> = [
        MeasurementField::ContractedArm,
        MeasurementField::Thigh,
        MeasurementField::Calf,
    ]
    .into_iter()
    .filter_map(|field| {
        measurements
            .get(&field)
            .filter(|d| d.difference > t.limb_gain_cm)
            .map(|d| format!("{} (+{} cm)", field.label(), d.difference))
    })
    .collect();
    if !gains.is_empty() {
        notes.push(EvolutionNote::new(
            NoteSentiment::Positive,
            format!("Muscle gains: {}", gains.join(", ")),
        ));
    }

    score_note(&mut notes, "aesthetic", indices.get(&IndexField::AestheticScore), t);
    score_note(&mut notes, "overall score", indices.get(&IndexField::OverallScore), t);

    notes
}

/// Compare an older assessment with a newer one of the same subject
///
/// Index deltas need both assessments processed; measurement deltas do not.
///
/// # Errors
///
/// Returns `InvalidInput` when the assessments belong to different subjects
/// or `older` is dated after `newer`.
pub fn compare(
    older: &Assessment,
    newer: &Assessment,
    config: &AnalysisConfig,
) -> AppResult<AssessmentComparison> {
    if older.subject_id != newer.subject_id {
        return Err(AppError::invalid_input(
            "Cannot compare assessments of different subjects",
        ));
    }
    if older.date > newer.date {
        return Err(AppError::invalid_input(format!(
            "Older assessment ({}) is dated after the newer one ({})",
            older.date, newer.date
        )));
    }

    let measurement_deltas =
        paired_deltas(&measurement_values(older), &measurement_values(newer), 1);
    let index_deltas = paired_deltas(&index_values(older), &index_values(newer), 2);
    let notes = evolution_notes(&measurement_deltas, &index_deltas, &config.evolution);

    let positive = notes
        .iter()
        .filter(|n| n.sentiment == NoteSentiment::Positive)
        .count();
    let negative = notes
        .iter()
        .filter(|n| n.sentiment == NoteSentiment::Negative)
        .count();
    let verdict = EvolutionVerdict::from_counts(positive, negative);
    debug!(positive, negative, ?verdict, "assessments compared");

    Ok(AssessmentComparison {
        older_date: older.date,
        newer_date: newer.date,
        days_between: (newer.date - older.date).num_days(),
        measurement_deltas,
        index_deltas,
        notes,
        verdict,
    })
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

impl AssessmentComparison {
    /// Render a plain-text comparison report
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "ASSESSMENT COMPARISON REPORT");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Period: {} to {}",
            self.older_date.format("%d/%m/%Y"),
            self.newer_date.format("%d/%m/%Y")
        );
        let _ = writeln!(out, "Interval: {} days", self.days_between);
        let _ = writeln!(out, "Verdict: {}", self.verdict);
        let _ = writeln!(out);

        if !self.notes.is_empty() {
            let _ = writeln!(out, "KEY CHANGES:");
            for note in &self.notes {
                let marker = match note.sentiment {
                    NoteSentiment::Positive => "[+]",
                    NoteSentiment::Negative => "[-]",
                    NoteSentiment::Neutral => "[ ]",
                };
                let _ = writeln!(out, "  {marker} {}", note.message);
            }
            let _ = writeln!(out);
        }

        if !self.measurement_deltas.is_empty() {
            let _ = writeln!(out, "MEASUREMENT CHANGES:");
            for (field, d) in &self.measurement_deltas {
                let _ = writeln!(
                    out,
                    "  {}: {} -> {} ({}, {}%)",
                    field.label(),
                    d.previous,
                    d.current,
                    signed(d.difference),
                    signed(d.percent)
                );
            }
            let _ = writeln!(out);
        }

        if !self.index_deltas.is_empty() {
            let _ = writeln!(out, "INDEX CHANGES:");
            for (field, d) in &self.index_deltas {
                let _ = writeln!(
                    out,
                    "  {}: {} -> {} ({})",
                    field.label(),
                    d.previous,
                    d.current,
                    signed(d.difference)
                );
            }
            let _ = writeln!(out);
        }

        out.push_str(&rule);
        out
    }
}

/// Direction of a tracked series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// First-to-last change below the stable threshold
    Stable,
    /// Rising
    Increasing,
    /// Falling
    Decreasing,
    /// Fewer than two points
    InsufficientData,
}

/// Classify a chronologically ordered series
#[must_use]
pub fn trend_direction(values: &[f64], config: &TrendConfig) -> TrendDirection {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return TrendDirection::InsufficientData;
    };
    if values.len() < 2 {
        return TrendDirection::InsufficientData;
    }
    let change = percent_change(first, last);
    if change.abs() < config.stable_threshold_pct {
        TrendDirection::Stable
    } else if last > first {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

/// Metric followed across a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Body weight
    Weight,
    /// Body fat percentage
    BodyFat,
    /// Lean mass
    LeanMass,
    /// Waist circumference
    Waist,
    /// Overall score
    OverallScore,
}

/// One dated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Assessment date
    pub date: NaiveDate,
    /// Value on that date
    pub value: f64,
}

/// A metric's points and direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    /// Points in ascending date order
    pub points: Vec<SeriesPoint>,
    /// First-to-last direction
    pub direction: TrendDirection,
}

/// Trend over a series of assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Number of assessments considered
    pub assessment_count: usize,
    /// Days between first and last assessment
    pub period_days: i64,
    /// Series per metric; metrics with no points are omitted
    pub series: BTreeMap<TrendMetric, MetricTrend>,
    /// One-line summary
    pub summary: String,
    /// Series-level warnings such as duplicate dates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl TrendAnalysis {
    /// Direction of one metric, if it has points
    #[must_use]
    pub fn direction(&self, metric: TrendMetric) -> Option<TrendDirection> {
        self.series.get(&metric).map(|t| t.direction)
    }
}

fn metric_value(assessment: &Assessment, metric: TrendMetric) -> Option<f64> {
    let results = assessment.results();
    match metric {
        TrendMetric::Weight => Some(assessment.measurements.weight_kg),
        TrendMetric::Waist => assessment.measurements.waist.filter(|w| w.is_finite() && *w > 0.0),
        TrendMetric::BodyFat => results.and_then(|r| r.indices.body_fat).map(|b| b.percent),
        TrendMetric::LeanMass => results
            .and_then(|r| r.indices.body_fat)
            .map(|b| b.lean_mass_kg),
        TrendMetric::OverallScore => results.map(|r| r.overall.score),
    }
}

fn trend_summary(series: &BTreeMap<TrendMetric, MetricTrend>) -> String {
    let mut parts = Vec::new();
    if let Some(weight) = series.get(&TrendMetric::Weight) {
        let word = match weight.direction {
            TrendDirection::Stable => "stable",
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::InsufficientData => "insufficient data",
        };
        parts.push(format!("Weight: {word}"));
    }
    match series.get(&TrendMetric::BodyFat).map(|t| t.direction) {
        Some(TrendDirection::Decreasing) => parts.push("Body fat: reducing".to_owned()),
        Some(TrendDirection::Increasing) => parts.push("Body fat: rising".to_owned()),
        _ => {}
    }
    match series.get(&TrendMetric::LeanMass).map(|t| t.direction) {
        Some(TrendDirection::Increasing) => parts.push("Lean mass: rising".to_owned()),
        Some(TrendDirection::Decreasing) => parts.push("Lean mass: reducing".to_owned()),
        _ => {}
    }
    parts.join(" | ")
}

/// Analyze the trend of a subject's assessments
///
/// Input order does not matter; assessments are sorted ascending by date.
///
/// # Errors
///
/// Returns `InsufficientData` for fewer than two assessments.
pub fn analyze_trend(assessments: &[Assessment], config: &AnalysisConfig) -> AppResult<TrendAnalysis> {
    if assessments.len() < 2 {
        return Err(AppError::insufficient_data(format!(
            "Trend analysis needs at least 2 assessments, got {}",
            assessments.len()
        )));
    }

    let mut ordered: Vec<&Assessment> = assessments.iter().collect();
    ordered.sort_by_key(|a| a.date);

    let mut series = BTreeMap::new();
    for metric in [
        TrendMetric::Weight,
        TrendMetric::BodyFat,
        TrendMetric::LeanMass,
        TrendMetric::Waist,
        TrendMetric::OverallScore,
    ] {
        let points: Vec<SeriesPoint> = ordered
            .iter()
            .filter_map(|a| metric_value(a, metric).map(|value| SeriesPoint { date: a.date, value }))
            .collect();
        if points.is_empty() {
            continue;
        }
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let direction = trend_direction(&values, &config.trend);
        series.insert(metric, MetricTrend { points, direction });
    }

    let dates: Vec<NaiveDate> = ordered.iter().map(|a| a.date).collect();
    let period_days = match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => (*last - *first).num_days(),
        _ => 0,
    };

    Ok(TrendAnalysis {
        assessment_count: ordered.len(),
        period_days,
        summary: trend_summary(&series),
        series,
        warnings: series_warnings(&dates),
    })
}
