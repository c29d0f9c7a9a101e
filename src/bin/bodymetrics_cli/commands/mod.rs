// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
// ABOUTME: Command modules for bodymetrics-cli
// ABOUTME: Single-assessment analysis and history commands (compare, trend)

pub mod assessment;
pub mod history;
