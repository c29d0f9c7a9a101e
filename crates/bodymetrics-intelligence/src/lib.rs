// ABOUTME: Body composition analysis engine for the bodymetrics platform
// ABOUTME: Calculation stages, the assessment pipeline, and the longitudinal comparator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

#![deny(unsafe_code)]

//! # Bodymetrics Intelligence
//!
//! Pure, synchronous analysis over `bodymetrics-core` models. Nothing here
//! performs I/O or reads the clock; callers pass dates explicitly.
//!
//! ## Pipeline order
//!
//! 1. [`bilateral`] averages left/right pairs
//! 2. [`structural`] derives frame indices from bone breadths
//! 3. [`ideals`] computes height- and frame-adjusted targets
//! 4. [`indices`] computes BMI, body fat and waist ratios
//! 5. [`symmetry`] compares left and right sides
//! 6. [`proportions`] computes circumference ratios and the aesthetic score
//! 7. [`scoring`] builds the five modular scores and the overall score
//! 8. [`somatotype`] classifies the body type
//!
//! [`analyzer::process_assessment`] runs all of them; [`comparator`] works
//! across processed [`assessment::Assessment`] records.

/// Pipeline orchestration and the typed result set
pub mod analyzer;
/// Assessment record with one-time results
pub mod assessment;
/// Left/right averaging
pub mod bilateral;
/// Pairwise comparison and trend analysis
pub mod comparator;
/// Tunable thresholds with environment overrides
pub mod config;
/// Ideal circumference targets and deviations
pub mod ideals;
/// BMI, body fat, tissue breakdown, waist ratios, conicity
pub mod indices;
/// Shared rounding and ratio helpers
pub mod numeric;
/// Circumference ratios and aesthetic score
pub mod proportions;
/// Modular and overall scores
pub mod scoring;
/// Heuristic body-type classifier
pub mod somatotype;
/// Skeletal frame indices
pub mod structural;
/// Left/right asymmetry analysis
pub mod symmetry;
/// Plausibility and consistency warnings
pub mod validation;

pub use analyzer::{process_assessment, AssessmentResults, Diagnostic, PipelineStage};
pub use assessment::Assessment;
pub use comparator::{analyze_trend, compare, AssessmentComparison, TrendAnalysis};
pub use config::AnalysisConfig;
