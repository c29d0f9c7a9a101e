// ABOUTME: Bodymetrics CLI - runs assessments, comparisons, and trends over a JSON dossier
// ABOUTME: Prints results as JSON or as plain-text reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
//!
//! Usage:
//! ```bash
//! # Analyze the most recent assessment in a dossier
//! bodymetrics-cli analyze --dossier subject.json
//!
//! # Analyze a specific date as a text report
//! bodymetrics-cli analyze --dossier subject.json --date 2025-03-01 --format text
//!
//! # Compare the two most recent assessments
//! bodymetrics-cli compare --dossier subject.json
//!
//! # Trend over every assessment
//! bodymetrics-cli trend --dossier subject.json
//! ```

mod commands;
mod helpers;

use bodymetrics::dossier::Dossier;
use bodymetrics::logging::LoggingConfig;
use bodymetrics::repository::InMemoryRepository;
use bodymetrics::services::AssessmentService;
use bodymetrics_intelligence::AnalysisConfig;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use helpers::display::OutputFormat;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bodymetrics-cli",
    about = "Body composition assessment CLI",
    long_about = "Runs the anthropometric assessment pipeline, pairwise comparisons, and trend analysis over a JSON dossier."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dossier file with the subject and raw assessments
    #[arg(long, short = 'd', global = true, default_value = "dossier.json")]
    dossier: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Reference date for date validation (defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Process one assessment and print its results
    Analyze {
        /// Assessment date (defaults to the most recent)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Compare two assessments
    Compare {
        /// Older assessment date (defaults to the second most recent)
        #[arg(long, requires = "newer")]
        older: Option<NaiveDate>,

        /// Newer assessment date (defaults to the most recent)
        #[arg(long, requires = "older")]
        newer: Option<NaiveDate>,
    },

    /// Trend over every assessment in the dossier
    Trend,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::for_cli(log_level).init()?;

    let config = AnalysisConfig::load()?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let service = AssessmentService::new(Arc::new(InMemoryRepository::new()), config);

    info!(dossier = %cli.dossier.display(), "loading dossier");
    let dossier = Dossier::load(&cli.dossier).await?;
    let ingested = dossier.ingest(&service, today).await?;

    let output = match cli.command {
        Command::Analyze { date } => commands::assessment::analyze(&ingested, date, cli.format)?,
        Command::Compare { older, newer } => {
            commands::history::compare(&service, &ingested, older.zip(newer), cli.format).await?
        }
        Command::Trend => commands::history::trend(&service, &ingested, cli.format).await?,
    };
    println!("{output}");

    Ok(())
}
