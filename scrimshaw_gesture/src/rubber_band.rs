// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band resistance curve.

/// Asymptotic bound of [`rubber_band`].
pub const RUBBER_BAND_DIMENSION: f64 = 20.0;

/// Resistance coefficient of [`rubber_band`].
pub const RUBBER_BAND_COEFFICIENT: f64 = 0.2;

/// Damped displacement for a raw drag `distance`, using the default span and
/// coefficient.
///
/// `rubber_band(0) == 0`, the curve is strictly increasing for non-negative
/// input and approaches (never reaches) [`RUBBER_BAND_DIMENSION`].
///
/// ```
/// use scrimshaw_gesture::rubber_band;
///
/// assert_eq!(rubber_band(0.0), 0.0);
/// assert!((rubber_band(20.0) - 3.333).abs() < 1e-3);
/// assert_eq!(rubber_band(100.0), 10.0);
/// ```
#[must_use]
pub fn rubber_band(distance: f64) -> f64 {
    rubber_band_with(distance, RUBBER_BAND_DIMENSION, RUBBER_BAND_COEFFICIENT)
}

/// Damped displacement for `distance` with an explicit span and coefficient.
///
/// Computes `(1 - 1 / (distance * coefficient / dimension + 1)) * dimension`.
/// Negative and NaN distances are treated as zero; callers apply the sign.
/// A non-positive `dimension` or `coefficient` disables movement entirely.
#[must_use]
pub fn rubber_band_with(distance: f64, dimension: f64, coefficient: f64) -> f64 {
    if !(dimension > 0.0 && coefficient > 0.0) {
        return 0.0;
    }
    let distance = distance.max(0.0);
    (1.0 - 1.0 / ((distance * coefficient / dimension) + 1.0)) * dimension
}
