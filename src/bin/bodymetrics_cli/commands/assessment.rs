// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
// ABOUTME: Analyze command printing one processed assessment
// ABOUTME: Selects by date or falls back to the most recent assessment

use crate::helpers::display::{render, OutputFormat};
use bodymetrics::dossier::IngestedDossier;
use bodymetrics::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Render the results of the selected assessment
pub fn analyze(
    ingested: &IngestedDossier,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> AppResult<String> {
    let assessment = ingested.select(date).ok_or_else(|| match date {
        Some(d) => AppError::not_found(format!("Assessment dated {d}")),
        None => AppError::insufficient_data("Dossier has no assessments"),
    })?;
    let results = assessment
        .results()
        .ok_or_else(|| AppError::internal(format!("Assessment {} was not processed", assessment.id)))?;
    render(results, format, || {
        results.summary_report(&ingested.subject, &assessment.measurements)
    })
}
