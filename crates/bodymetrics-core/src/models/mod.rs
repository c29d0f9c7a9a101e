// ABOUTME: Core data models for anthropometric assessments
// ABOUTME: Re-exports measurement and subject types shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Data Models
//!
//! Strongly-typed inputs to the assessment pipeline:
//!
//! - [`MeasurementSet`]: height, weight, circumferences and bone breadths
//! - [`BilateralMeasurement`]: a left/right pair for one body region
//! - [`SubjectProfile`]: the person being assessed
//! - [`BiologicalSex`]: formula branch selector

mod measurements;
mod subject;

pub use measurements::{BilateralMeasurement, BilateralRegion, MeasurementSet};
pub use subject::{BiologicalSex, SubjectProfile};
