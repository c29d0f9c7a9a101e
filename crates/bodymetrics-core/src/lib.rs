// ABOUTME: Core types and constants for the bodymetrics anthropometry platform
// ABOUTME: Foundation crate with error handling, measurement models, and plausibility constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

#![deny(unsafe_code)]

//! # Bodymetrics Core
//!
//! Foundation crate providing shared types and constants for the bodymetrics
//! assessment platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ConfigError`
//! - **constants**: Plausible measurement ranges and unit conversions
//! - **models**: Measurement sets, bilateral pairs, subject profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MeasurementSet`, `SubjectProfile`, `BiologicalSex`)
pub mod models;
