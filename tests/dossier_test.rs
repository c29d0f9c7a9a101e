// ABOUTME: Tests for the JSON dossier format used by the CLI
// ABOUTME: File loading, parse failures, ingestion through the service, and date selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use bodymetrics::dossier::Dossier;
use bodymetrics::errors::ErrorCode;
use bodymetrics::repository::InMemoryRepository;
use bodymetrics::services::AssessmentService;
use bodymetrics_core::models::BiologicalSex;
use bodymetrics_intelligence::AnalysisConfig;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const DOSSIER_JSON: &str = r#"{
    "subject": {
        "display_name": "Carlos",
        "sex": "M",
        "date_of_birth": "1990-03-15"
    },
    "assessments": [
        {
            "date": "2025-04-10",
            "measurements": {"height_cm": 178.0, "weight_kg": 83.0, "neck": 38.0, "waist": 86.0, "hip": 98.0}
        },
        {
            "date": "2025-01-10",
            "measurements": {"height_cm": 178.0, "weight_kg": 85.0, "neck": 38.0, "waist": 90.0, "hip": 98.0},
            "goal": "Fat loss"
        }
    ]
}"#;

fn service() -> AssessmentService<InMemoryRepository> {
    AssessmentService::new(
        Arc::new(InMemoryRepository::new()),
        AnalysisConfig::default(),
    )
}

#[test]
fn test_from_json_parses_sex_alias_and_defaults_id() {
    let dossier = Dossier::from_json(DOSSIER_JSON).unwrap();
    assert_eq!(dossier.subject.sex, BiologicalSex::Male);
    assert_eq!(dossier.assessments.len(), 2);
    assert_eq!(dossier.assessments[1].goal.as_deref(), Some("Fat loss"));
    assert!(dossier.assessments[0].notes.is_none());
}

#[test]
fn test_from_json_rejects_unknown_sex() {
    let text = DOSSIER_JSON.replace("\"M\"", "\"X\"");
    let err = Dossier::from_json(&text).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DOSSIER_JSON.as_bytes()).unwrap();

    let dossier = Dossier::load(file.path()).await.unwrap();
    assert_eq!(dossier.subject.display_name, "Carlos");
}

#[tokio::test]
async fn test_load_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dossier::load(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_ingest_processes_and_sorts_entries() {
    common::init_test_logging();
    let dossier = Dossier::from_json(DOSSIER_JSON).unwrap();
    let ingested = dossier.ingest(&service(), common::today()).await.unwrap();

    assert_eq!(ingested.assessments.len(), 2);
    assert!(ingested.assessments.iter().all(|a| a.is_processed()));
    assert_eq!(ingested.assessments[0].date, common::date(2025, 1, 10));

    let latest = ingested.select(None).unwrap();
    assert_eq!(latest.date, common::date(2025, 4, 10));
    let january = ingested.select(Some(common::date(2025, 1, 10))).unwrap();
    assert_eq!(january.measurements.weight_kg, 85.0);
    assert!(ingested.select(Some(common::date(2024, 1, 1))).is_none());
}

#[tokio::test]
async fn test_ingest_stops_at_invalid_entry() {
    let text = DOSSIER_JSON.replace("\"2025-04-10\"", "\"2026-04-10\"");
    let dossier = Dossier::from_json(&text).unwrap();
    let err = dossier.ingest(&service(), common::today()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}
