// ABOUTME: Main library entry point for the bodymetrics assessment platform
// ABOUTME: Wires the analysis engine to logging, an injected repository, and the assessment service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

#![deny(unsafe_code)]

//! # Bodymetrics
//!
//! Anthropometric body-composition assessments and their evolution over
//! time. The calculation engine lives in `bodymetrics-intelligence`; this
//! crate adds the service layer around it.
//!
//! ## Architecture
//!
//! - **Repository**: async storage abstraction with an in-memory backend
//! - **Services**: subject registration, assessment submission, comparison, trends
//! - **Dossier**: JSON file format consumed by the `bodymetrics-cli` binary
//! - **Logging**: `tracing-subscriber` setup driven by environment variables
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodymetrics::errors::AppResult;
//! use bodymetrics::repository::InMemoryRepository;
//! use bodymetrics::services::AssessmentService;
//! use bodymetrics_intelligence::AnalysisConfig;
//! use std::sync::Arc;
//!
//! fn build() -> AppResult<()> {
//!     let config = AnalysisConfig::load()?;
//!     let _service = AssessmentService::new(Arc::new(InMemoryRepository::new()), config);
//!     Ok(())
//! }
//! ```

/// JSON dossier of a subject and raw assessments
pub mod dossier;
/// Error types shared with the engine
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Storage abstraction and in-memory backend
pub mod repository;
/// Orchestrating services
pub mod services;

pub use bodymetrics_core::models;
pub use bodymetrics_intelligence::config;
