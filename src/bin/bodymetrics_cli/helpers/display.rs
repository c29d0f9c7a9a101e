// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
// ABOUTME: Output formatting helpers for bodymetrics-cli
// ABOUTME: Pretty JSON or plain-text rendering of results, comparisons, and trends

use bodymetrics::errors::AppResult;
use bodymetrics_intelligence::comparator::{TrendAnalysis, TrendDirection};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;

/// How command output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Plain-text report
    Text,
}

/// Render `value` as JSON or through the text renderer
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce() -> String,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text()),
    }
}

/// Plain-text trend summary
pub fn trend_report(analysis: &TrendAnalysis) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "TREND ANALYSIS");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Assessments: {}", analysis.assessment_count);
    let _ = writeln!(out, "Period: {} days", analysis.period_days);
    let _ = writeln!(out, "Summary: {}", analysis.summary);
    let _ = writeln!(out);
    for (metric, trend) in &analysis.series {
        let arrow = match trend.direction {
            TrendDirection::Increasing => "up",
            TrendDirection::Decreasing => "down",
            TrendDirection::Stable => "stable",
            TrendDirection::InsufficientData => "n/a",
        };
        let values: Vec<String> = trend.points.iter().map(|p| p.value.to_string()).collect();
        let _ = writeln!(out, "  {metric:?} ({arrow}): {}", values.join(" -> "));
    }
    for warning in &analysis.warnings {
        let _ = writeln!(out, "WARNING: {warning}");
    }
    out.push_str(&rule);
    out
}
