// ABOUTME: Storage abstraction for subjects and assessments injected into the assessment service
// ABOUTME: Async trait so persistent backends can sit behind the same interface as the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

/// In-memory implementation
pub mod memory;

pub use memory::InMemoryRepository;

use async_trait::async_trait;
use bodymetrics_core::errors::AppResult;
use bodymetrics_core::models::SubjectProfile;
use bodymetrics_intelligence::Assessment;
use uuid::Uuid;

/// Load and save capability for subjects and their assessments
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Store a new subject
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the id is taken
    async fn save_subject(&self, subject: SubjectProfile) -> AppResult<()>;

    /// Fetch a subject by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no subject has this id
    async fn get_subject(&self, subject_id: Uuid) -> AppResult<SubjectProfile>;

    /// Insert an assessment, or replace one that has no results yet
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the owning subject does not exist, or
    /// `ResourceLocked` if the stored record is already processed
    async fn save_assessment(&self, assessment: Assessment) -> AppResult<()>;

    /// Fetch an assessment by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no assessment has this id
    async fn get_assessment(&self, assessment_id: Uuid) -> AppResult<Assessment>;

    /// All assessments of a subject, most recent first
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the subject does not exist
    async fn list_assessments(&self, subject_id: Uuid) -> AppResult<Vec<Assessment>>;

    /// Remove an assessment
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no assessment has this id
    async fn delete_assessment(&self, assessment_id: Uuid) -> AppResult<()>;
}
