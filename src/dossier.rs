// ABOUTME: JSON dossier format holding one subject and their raw assessment entries
// ABOUTME: Loads from disk and ingests entries through the assessment service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use crate::repository::AssessmentRepository;
use crate::services::assessment_service::{AssessmentService, AssessmentSubmission};
use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::{MeasurementSet, SubjectProfile};
use bodymetrics_intelligence::Assessment;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// One raw assessment in a dossier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DossierEntry {
    /// Evaluation date
    pub date: NaiveDate,
    /// Raw measurements
    pub measurements: MeasurementSet,
    /// Optional goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A subject with their raw assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dossier {
    /// Subject profile
    pub subject: SubjectProfile,
    /// Raw assessments in any order
    #[serde(default)]
    pub assessments: Vec<DossierEntry>,
}

/// A dossier after every entry went through the pipeline
#[derive(Debug, Clone)]
pub struct IngestedDossier {
    /// Registered subject
    pub subject: SubjectProfile,
    /// Processed assessments, oldest first
    pub assessments: Vec<Assessment>,
}

impl IngestedDossier {
    /// Assessment on `date`, or the most recent when `date` is `None`
    #[must_use]
    pub fn select(&self, date: Option<NaiveDate>) -> Option<&Assessment> {
        match date {
            Some(d) => self.assessments.iter().find(|a| a.date == d),
            None => self.assessments.last(),
        }
    }
}

impl Dossier {
    /// Parse a dossier from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON or unknown sex codes
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a dossier file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the file cannot be read, or
    /// `SerializationError` if it is not a valid dossier
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .await
            .map_err(|e| AppError::not_found(format!("Dossier {}: {e}", path.display())))?;
        debug!(path = %path.display(), bytes = text.len(), "dossier read");
        Self::from_json(&text)
    }

    /// Register the subject and submit every entry
    ///
    /// # Errors
    ///
    /// Returns the first validation error raised by the subject or an entry
    pub async fn ingest<R: AssessmentRepository + 'static>(
        self,
        service: &AssessmentService<R>,
        today: NaiveDate,
    ) -> AppResult<IngestedDossier> {
        let subject_id = service.register_subject(self.subject.clone(), today).await?;
        let mut assessments = Vec::with_capacity(self.assessments.len());
        for entry in self.assessments {
            let submission = AssessmentSubmission {
                date: entry.date,
                measurements: entry.measurements,
                goal: entry.goal,
                notes: entry.notes,
            };
            assessments.push(service.submit_assessment(subject_id, submission, today).await?);
        }
        assessments.sort_by_key(|a| a.date);
        Ok(IngestedDossier {
            subject: self.subject,
            assessments,
        })
    }
}
