// ABOUTME: HashMap-backed assessment repository guarded by tokio read-write locks
// ABOUTME: Used by the CLI and tests; cloning shares the same underlying storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

use super::AssessmentRepository;
use async_trait::async_trait;
use bodymetrics_core::errors::{AppError, AppResult};
use bodymetrics_core::models::SubjectProfile;
use bodymetrics_intelligence::Assessment;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory `AssessmentRepository`
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    subjects: Arc<RwLock<HashMap<Uuid, SubjectProfile>>>,
    assessments: Arc<RwLock<HashMap<Uuid, Assessment>>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryRepository {
    async fn save_subject(&self, subject: SubjectProfile) -> AppResult<()> {
        let mut subjects = self.subjects.write().await;
        if subjects.contains_key(&subject.id) {
            return Err(AppError::already_exists(format!("Subject {}", subject.id)));
        }
        subjects.insert(subject.id, subject);
        Ok(())
    }

    async fn get_subject(&self, subject_id: Uuid) -> AppResult<SubjectProfile> {
        self.subjects
            .read()
            .await
            .get(&subject_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Subject {subject_id}")))
    }

    async fn save_assessment(&self, assessment: Assessment) -> AppResult<()> {
        if !self.subjects.read().await.contains_key(&assessment.subject_id) {
            return Err(AppError::not_found(format!(
                "Subject {}",
                assessment.subject_id
            )));
        }
        let mut assessments = self.assessments.write().await;
        if assessments
            .get(&assessment.id)
            .is_some_and(Assessment::is_processed)
        {
            return Err(AppError::locked(format!(
                "Assessment {} already has results",
                assessment.id
            )));
        }
        assessments.insert(assessment.id, assessment);
        Ok(())
    }

    async fn get_assessment(&self, assessment_id: Uuid) -> AppResult<Assessment> {
        self.assessments
            .read()
            .await
            .get(&assessment_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Assessment {assessment_id}")))
    }

    async fn list_assessments(&self, subject_id: Uuid) -> AppResult<Vec<Assessment>> {
        if !self.subjects.read().await.contains_key(&subject_id) {
            return Err(AppError::not_found(format!("Subject {subject_id}")));
        }
        let mut found: Vec<Assessment> = self
            .assessments
            .read()
            .await
            .values()
            .filter(|a| a.subject_id == subject_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| (Reverse(a.date), a.id));
        Ok(found)
    }

    async fn delete_assessment(&self, assessment_id: Uuid) -> AppResult<()> {
        self.assessments
            .write()
            .await
            .remove(&assessment_id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Assessment {assessment_id}")))
    }
}
