// ABOUTME: Assessment record pairing a measurement snapshot with its one-time computed results
// ABOUTME: Enforces non-future evaluation dates and single population of the result set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use crate::analyzer::{process_assessment, AssessmentResults};
use crate::config::AnalysisConfig;
use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::{MeasurementSet, SubjectProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// One evaluation of a subject
///
/// The measurement set is immutable once the assessment exists. Results are
/// written exactly once by [`Assessment::process`] or
/// [`Assessment::record_results`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Subject this assessment belongs to
    pub subject_id: Uuid,
    /// Evaluation date
    pub date: NaiveDate,
    /// Raw measurements
    pub measurements: MeasurementSet,
    /// Free-text goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Computed results, empty until processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    results: Option<AssessmentResults>,
}

impl Assessment {
    /// Create an unprocessed assessment
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `date` is after `today`, or when
    /// height or weight is invalid.
    pub fn new(
        subject_id: Uuid,
        date: NaiveDate,
        measurements: MeasurementSet,
        today: NaiveDate,
    ) -> AppResult<Self> {
        Self::check_date(date, today)?;
        measurements.validate_required()?;
        Ok(Self {
            id: Uuid::new_v4(),
            subject_id,
            date,
            measurements,
            goal: None,
            notes: None,
            results: None,
        })
    }

    /// Reject an evaluation date after `today`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a future date
    pub fn check_date(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
        if date > today {
            return Err(AppError::out_of_range(format!(
                "Assessment date {date} is in the future"
            )));
        }
        Ok(())
    }

    /// Attach a goal
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Whether the result set has been populated
    #[must_use]
    pub const fn is_processed(&self) -> bool {
        self.results.is_some()
    }

    /// Computed results, if processed
    #[must_use]
    pub const fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    /// Populate the result set
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if results were already recorded.
    pub fn record_results(&mut self, results: AssessmentResults) -> AppResult<()> {
        if self.results.is_some() {
            return Err(AppError::locked(format!(
                "Assessment {} already has results",
                self.id
            )));
        }
        self.results = Some(results);
        Ok(())
    }

    /// Run the pipeline and record its results
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the subject does not own this assessment,
    /// `ResourceLocked` if already processed, or the pipeline's error for
    /// invalid height or weight.
    pub fn process(
        &mut self,
        subject: &SubjectProfile,
        config: &AnalysisConfig,
    ) -> AppResult<&AssessmentResults> {
        if subject.id != self.subject_id {
            return Err(AppError::invalid_input(format!(
                "Assessment {} does not belong to subject {}",
                self.id, subject.id
            )));
        }
        if self.is_processed() {
            return Err(AppError::locked(format!(
                "Assessment {} already has results",
                self.id
            )));
        }
        let results = process_assessment(&self.measurements, subject, self.date, config)?;
        info!(
            assessment_id = %self.id,
            overall = results.overall.score,
            diagnostics = results.diagnostics.len(),
            "assessment processed"
        );
        Ok(self.results.insert(results))
    }
}
