// ABOUTME: Assessment service coordinating validation, pipeline runs, storage, and comparisons
// ABOUTME: Batch processing of pending assessments runs on the rayon pool off the async executor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use crate::repository::AssessmentRepository;
use bodymetrics_core::errors::{AppError, AppResult, ErrorCode};
use bodymetrics_core::models::{MeasurementSet, SubjectProfile};
use bodymetrics_intelligence::{
    analyze_trend, compare, AnalysisConfig, Assessment, AssessmentComparison, TrendAnalysis,
};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::sync::Arc;
use tokio::task;
use tracing::{info, warn};
use uuid::Uuid;

/// Input for a new assessment
#[derive(Debug, Clone)]
pub struct AssessmentSubmission {
    /// Evaluation date
    pub date: NaiveDate,
    /// Raw measurements
    pub measurements: MeasurementSet,
    /// Optional goal
    pub goal: Option<String>,
    /// Optional notes
    pub notes: Option<String>,
}

/// Coordinates the analysis engine with a repository
pub struct AssessmentService<R> {
    repository: Arc<R>,
    config: Arc<AnalysisConfig>,
}

impl<R> Clone for AssessmentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: AssessmentRepository + 'static> AssessmentService<R> {
    /// Create a service over `repository` using `config`
    #[must_use]
    pub fn new(repository: Arc<R>, config: AnalysisConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validate and store a subject
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or an implausible birth
    /// date, or `ResourceAlreadyExists` for a duplicate id.
    pub async fn register_subject(&self, subject: SubjectProfile, today: NaiveDate) -> AppResult<Uuid> {
        subject.validate(today)?;
        let id = subject.id;
        self.repository.save_subject(subject).await?;
        info!(subject_id = %id, "subject registered");
        Ok(id)
    }

    /// Create, process and store an assessment
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown subject, or a validation
    /// error for a future date or invalid height or weight.
    pub async fn submit_assessment(
        &self,
        subject_id: Uuid,
        submission: AssessmentSubmission,
        today: NaiveDate,
    ) -> AppResult<Assessment> {
        let subject = self.repository.get_subject(subject_id).await?;
        let mut assessment =
            Assessment::new(subject_id, submission.date, submission.measurements, today)?;
        assessment.goal = submission.goal;
        assessment.notes = submission.notes;
        assessment.process(&subject, &self.config)?;
        self.repository.save_assessment(assessment.clone()).await?;
        Ok(assessment)
    }

    /// Store a new assessment as-is, processed or not
    ///
    /// Existing records are never replaced; unprocessed imports are picked
    /// up by [`Self::process_pending`].
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a future date, `ResourceLocked` if the
    /// id belongs to a processed record, `ResourceAlreadyExists` if it belongs
    /// to a pending one, or `ResourceNotFound` if the owning subject does not
    /// exist.
    pub async fn import_assessment(&self, assessment: Assessment, today: NaiveDate) -> AppResult<Uuid> {
        Assessment::check_date(assessment.date, today)?;
        let id = assessment.id;
        match self.repository.get_assessment(id).await {
            Ok(existing) if existing.is_processed() => {
                return Err(AppError::locked(format!(
                    "Assessment {id} already has results"
                )));
            }
            Ok(_) => return Err(AppError::already_exists(format!("Assessment {id}"))),
            Err(e) if e.code == ErrorCode::ResourceNotFound => {}
            Err(e) => return Err(e),
        }
        self.repository.save_assessment(assessment).await?;
        info!(assessment_id = %id, "assessment imported");
        Ok(id)
    }

    /// Process every unprocessed assessment of a subject in parallel
    ///
    /// Assessments whose height or weight is invalid are skipped with a
    /// warning. Returns the number processed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown subject or
    /// `InternalError` if the worker task fails.
    pub async fn process_pending(&self, subject_id: Uuid) -> AppResult<usize> {
        let subject = self.repository.get_subject(subject_id).await?;
        let pending: Vec<Assessment> = self
            .repository
            .list_assessments(subject_id)
            .await?
            .into_iter()
            .filter(|a| !a.is_processed())
            .collect();
        if pending.is_empty() {
            return Ok(0);
        }

        let config = Arc::clone(&self.config);
        let processed = task::spawn_blocking(move || {
            pending
                .into_par_iter()
                .filter_map(|mut assessment| {
                    if let Err(e) = assessment.process(&subject, &config) {
                        warn!(assessment_id = %assessment.id, error = %e.message, "assessment not processed");
                        return None;
                    }
                    Some(assessment)
                })
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| AppError::internal(format!("Batch processing task failed: {e}")))?;

        let mut count = 0;
        for assessment in processed {
            let id = assessment.id;
            match self.repository.save_assessment(assessment).await {
                Ok(()) => count += 1,
                // Another run stored results first; those stay
                Err(e) if e.code == ErrorCode::ResourceLocked => {
                    warn!(assessment_id = %id, "assessment already processed elsewhere");
                }
                Err(e) => return Err(e),
            }
        }
        info!(subject_id = %subject_id, count, "pending assessments processed");
        Ok(count)
    }

    /// Compare two stored assessments, ordering them by date
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown ids or `InvalidInput` if they
    /// belong to different subjects.
    pub async fn compare_assessments(&self, first: Uuid, second: Uuid) -> AppResult<AssessmentComparison> {
        let a = self.repository.get_assessment(first).await?;
        let b = self.repository.get_assessment(second).await?;
        let (older, newer) = if a.date <= b.date { (a, b) } else { (b, a) };
        compare(&older, &newer, &self.config)
    }

    /// Compare a subject's two most recent assessments
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when fewer than two assessments exist.
    pub async fn compare_latest(&self, subject_id: Uuid) -> AppResult<AssessmentComparison> {
        let assessments = self.repository.list_assessments(subject_id).await?;
        match assessments.as_slice() {
            [newer, older, ..] => {
                let comparison = compare(older, newer, &self.config)?;
                info!(
                    subject_id = %subject_id,
                    verdict = ?comparison.verdict,
                    days = comparison.days_between,
                    "latest assessments compared"
                );
                Ok(comparison)
            }
            _ => Err(AppError::insufficient_data(format!(
                "Comparison needs at least 2 assessments, subject {subject_id} has {}",
                assessments.len()
            ))),
        }
    }

    /// Trend over all of a subject's assessments
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when fewer than two assessments exist.
    pub async fn trend_for_subject(&self, subject_id: Uuid) -> AppResult<TrendAnalysis> {
        let assessments = self.repository.list_assessments(subject_id).await?;
        analyze_trend(&assessments, &self.config)
    }
}
