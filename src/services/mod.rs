// ABOUTME: Orchestrating services that tie the analysis engine to an injected repository
// ABOUTME: Currently the assessment service used by the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

/// Subject registration, assessment submission, comparison and trends
pub mod assessment_service;

pub use assessment_service::AssessmentService;
