// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors
// ABOUTME: Helper modules for bodymetrics-cli
// ABOUTME: Output format selection and text rendering

pub mod display;
