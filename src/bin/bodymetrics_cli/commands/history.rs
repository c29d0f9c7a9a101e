// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
// ABOUTME: History commands comparing two assessments or summarising the full series
// ABOUTME: Delegates to the assessment service so ordering and validation stay in one place

use crate::helpers::display::{render, trend_report, OutputFormat};
use bodymetrics::dossier::IngestedDossier;
use bodymetrics::errors::{AppError, AppResult};
use bodymetrics::repository::InMemoryRepository;
use bodymetrics::services::AssessmentService;
use chrono::NaiveDate;
use uuid::Uuid;

fn assessment_on(ingested: &IngestedDossier, date: NaiveDate) -> AppResult<Uuid> {
    ingested
        .select(Some(date))
        .map(|a| a.id)
        .ok_or_else(|| AppError::not_found(format!("Assessment dated {date}")))
}

/// Compare two dated assessments, or the two most recent
pub async fn compare(
    service: &AssessmentService<InMemoryRepository>,
    ingested: &IngestedDossier,
    dates: Option<(NaiveDate, NaiveDate)>,
    format: OutputFormat,
) -> AppResult<String> {
    let comparison = match dates {
        Some((older, newer)) => {
            service
                .compare_assessments(assessment_on(ingested, older)?, assessment_on(ingested, newer)?)
                .await?
        }
        None => service.compare_latest(ingested.subject.id).await?,
    };
    render(&comparison, format, || comparison.report())
}

/// Trend over every assessment
pub async fn trend(
    service: &AssessmentService<InMemoryRepository>,
    ingested: &IngestedDossier,
    format: OutputFormat,
) -> AppResult<String> {
    let analysis = service.trend_for_subject(ingested.subject.id).await?;
    render(&analysis, format, || trend_report(&analysis))
}
