// ABOUTME: Error types for the bodymetrics crate, shared with the core and engine crates
// ABOUTME: Re-exports AppError, ErrorCode, and AppResult so callers need a single import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Unified Error Handling
//!
//! Every layer returns [`AppResult`]. Configuration loading surfaces
//! [`ConfigError`], which converts into [`AppError`] with `?`.

pub use bodymetrics_core::errors::{AppError, AppResult, ConfigError, ErrorCode};
