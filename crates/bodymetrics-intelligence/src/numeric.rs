// ABOUTME: Numeric helpers shared by every calculation stage
// ABOUTME: Decimal rounding and guarded percentage change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

/// Round to a fixed number of decimal places (half away from zero)
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percentage change from `old` to `new`; zero when `old` is zero
#[must_use]
pub fn percent_change(old: f64, new: f64) -> f64 {
    if old.abs() < f64::EPSILON {
        return 0.0;
    }
    (new - old) / old * 100.0
}

/// Ratio of two optional values, absent unless both are present and positive
#[must_use]
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if n.is_finite() && n > 0.0 && d.is_finite() && d > 0.0 => Some(n / d),
        _ => None,
    }
}
