// ABOUTME: Integration tests for the assessment service over the in-memory repository
// ABOUTME: Registration, submission, batch processing, comparisons, and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use bodymetrics::errors::ErrorCode;
use bodymetrics::repository::{AssessmentRepository, InMemoryRepository};
use bodymetrics::services::assessment_service::AssessmentSubmission;
use bodymetrics::services::AssessmentService;
use bodymetrics_core::models::MeasurementSet;
use bodymetrics_intelligence::comparator::{EvolutionVerdict, TrendDirection, TrendMetric};
use bodymetrics_intelligence::AnalysisConfig;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

fn service() -> (AssessmentService<InMemoryRepository>, Arc<InMemoryRepository>) {
    common::init_test_logging();
    let repository = Arc::new(InMemoryRepository::new());
    let service = AssessmentService::new(Arc::clone(&repository), AnalysisConfig::default());
    (service, repository)
}

fn submission(date: NaiveDate, measurements: MeasurementSet) -> AssessmentSubmission {
    AssessmentSubmission {
        date,
        measurements,
        goal: Some("Recomposition".to_owned()),
        notes: None,
    }
}

#[tokio::test]
async fn test_register_subject_rejects_duplicates() {
    let (service, _) = service();
    let subject = common::male_subject();
    let id = service
        .register_subject(subject.clone(), common::today())
        .await
        .unwrap();
    assert_eq!(id, subject.id);

    let err = service
        .register_subject(subject, common::today())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_submit_processes_and_stores() {
    let (service, repository) = service();
    let subject = common::male_subject();
    let subject_id = service
        .register_subject(subject, common::today())
        .await
        .unwrap();

    let assessment = service
        .submit_assessment(
            subject_id,
            submission(common::date(2025, 5, 1), common::complete_male_measurements()),
            common::today(),
        )
        .await
        .unwrap();
    assert!(assessment.is_processed());
    assert_eq!(assessment.goal.as_deref(), Some("Recomposition"));

    let stored = repository.get_assessment(assessment.id).await.unwrap();
    assert_eq!(stored.results().unwrap().overall.score, 78.1);
}

#[tokio::test]
async fn test_submit_for_unknown_subject_fails() {
    let (service, _) = service();
    let err = service
        .submit_assessment(
            Uuid::new_v4(),
            submission(common::date(2025, 5, 1), common::complete_male_measurements()),
            common::today(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_submit_future_date_is_rejected() {
    let (service, repository) = service();
    let subject_id = service
        .register_subject(common::male_subject(), common::today())
        .await
        .unwrap();
    let err = service
        .submit_assessment(
            subject_id,
            submission(common::date(2025, 12, 1), common::complete_male_measurements()),
            common::today(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(repository.list_assessments(subject_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_process_pending_handles_imported_assessments() {
    let (service, repository) = service();
    let subject = common::male_subject();
    let subject_id = service
        .register_subject(subject.clone(), common::today())
        .await
        .unwrap();

    for (month, weight) in [(1, 85.0), (2, 84.0), (3, 83.0)] {
        let pending = common::unprocessed_assessment(
            subject_id,
            common::date(2025, month, 1),
            common::male_measurements_with(weight, 88.0),
        );
        service
            .import_assessment(pending, common::today())
            .await
            .unwrap();
    }
    let already_done = common::processed_assessment(
        &subject,
        common::date(2025, 4, 1),
        common::complete_male_measurements(),
    );
    service
        .import_assessment(already_done, common::today())
        .await
        .unwrap();

    assert_eq!(service.process_pending(subject_id).await.unwrap(), 3);
    assert_eq!(service.process_pending(subject_id).await.unwrap(), 0);

    let stored = repository.list_assessments(subject_id).await.unwrap();
    assert_eq!(stored.len(), 4);
    assert!(stored.iter().all(|a| a.is_processed()));
    // Most recent first
    assert_eq!(stored[0].date, common::date(2025, 4, 1));
}

#[tokio::test]
async fn test_import_never_replaces_existing_records() {
    let (service, repository) = service();
    let subject = common::male_subject();
    let subject_id = service
        .register_subject(subject.clone(), common::today())
        .await
        .unwrap();

    let original = common::processed_assessment(
        &subject,
        common::date(2025, 3, 1),
        common::complete_male_measurements(),
    );
    let id = service
        .import_assessment(original.clone(), common::today())
        .await
        .unwrap();

    let mut replacement = common::processed_assessment(
        &subject,
        common::date(2025, 3, 1),
        common::male_measurements_with(95.0, 100.0),
    );
    replacement.id = id;
    let err = service
        .import_assessment(replacement, common::today())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceLocked);
    assert_eq!(repository.get_assessment(id).await.unwrap(), original);

    let pending = common::unprocessed_assessment(
        subject_id,
        common::date(2025, 4, 1),
        common::male_measurements_with(84.0, 88.0),
    );
    service
        .import_assessment(pending.clone(), common::today())
        .await
        .unwrap();
    let err = service
        .import_assessment(pending, common::today())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(repository.list_assessments(subject_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_import_future_date_is_rejected() {
    let (service, repository) = service();
    let subject_id = service
        .register_subject(common::male_subject(), common::today())
        .await
        .unwrap();

    let mut pending = common::unprocessed_assessment(
        subject_id,
        common::date(2025, 5, 1),
        common::complete_male_measurements(),
    );
    pending.date = common::date(2025, 12, 1);
    let err = service
        .import_assessment(pending, common::today())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(repository.list_assessments(subject_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_repository_keeps_processed_results() {
    let (service, repository) = service();
    let subject = common::male_subject();
    service
        .register_subject(subject.clone(), common::today())
        .await
        .unwrap();

    let original = common::processed_assessment(
        &subject,
        common::date(2025, 3, 1),
        common::complete_male_measurements(),
    );
    repository.save_assessment(original.clone()).await.unwrap();

    let mut overwrite = original.clone();
    overwrite.notes = Some("edited".to_owned());
    let err = repository.save_assessment(overwrite).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceLocked);
    assert_eq!(repository.get_assessment(original.id).await.unwrap(), original);
}

#[tokio::test]
async fn test_compare_latest_requires_two_assessments() {
    let (service, _) = service();
    let subject_id = service
        .register_subject(common::male_subject(), common::today())
        .await
        .unwrap();
    service
        .submit_assessment(
            subject_id,
            submission(common::date(2025, 1, 10), common::male_measurements_with(85.0, 90.0)),
            common::today(),
        )
        .await
        .unwrap();

    let err = service.compare_latest(subject_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientData);

    service
        .submit_assessment(
            subject_id,
            submission(common::date(2025, 4, 10), common::male_measurements_with(83.0, 86.0)),
            common::today(),
        )
        .await
        .unwrap();
    let comparison = service.compare_latest(subject_id).await.unwrap();
    assert_eq!(comparison.days_between, 90);
    assert_eq!(comparison.verdict, EvolutionVerdict::Excellent);
}

#[tokio::test]
async fn test_compare_assessments_orders_by_date() {
    let (service, _) = service();
    let subject_id = service
        .register_subject(common::male_subject(), common::today())
        .await
        .unwrap();
    let older = service
        .submit_assessment(
            subject_id,
            submission(common::date(2025, 1, 10), common::male_measurements_with(85.0, 90.0)),
            common::today(),
        )
        .await
        .unwrap();
    let newer = service
        .submit_assessment(
            subject_id,
            submission(common::date(2025, 4, 10), common::male_measurements_with(83.0, 86.0)),
            common::today(),
        )
        .await
        .unwrap();

    let comparison = service
        .compare_assessments(newer.id, older.id)
        .await
        .unwrap();
    assert_eq!(comparison.older_date, older.date);
    assert_eq!(comparison.newer_date, newer.date);
}

#[tokio::test]
async fn test_trend_for_subject() {
    let (service, _) = service();
    let subject_id = service
        .register_subject(common::male_subject(), common::today())
        .await
        .unwrap();
    for (month, weight, waist) in [(1, 85.0, 90.0), (3, 83.0, 86.0), (5, 80.0, 84.0)] {
        service
            .submit_assessment(
                subject_id,
                submission(
                    common::date(2025, month, 1),
                    common::male_measurements_with(weight, waist),
                ),
                common::today(),
            )
            .await
            .unwrap();
    }

    let trend = service.trend_for_subject(subject_id).await.unwrap();
    assert_eq!(trend.assessment_count, 3);
    assert_eq!(trend.direction(TrendMetric::Weight), Some(TrendDirection::Decreasing));
}

#[tokio::test]
async fn test_unknown_subject_queries_fail() {
    let (service, _) = service();
    let missing = Uuid::new_v4();
    assert_eq!(
        service.trend_for_subject(missing).await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        service.process_pending(missing).await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[tokio::test]
async fn test_repository_delete_assessment() {
    let (service, repository) = service();
    let subject = common::male_subject();
    let subject_id = service
        .register_subject(subject.clone(), common::today())
        .await
        .unwrap();
    let assessment = common::unprocessed_assessment(
        subject_id,
        common::date(2025, 2, 1),
        common::complete_male_measurements(),
    );
    let id = service
        .import_assessment(assessment, common::today())
        .await
        .unwrap();

    repository.delete_assessment(id).await.unwrap();
    assert_eq!(
        repository.delete_assessment(id).await.unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}
