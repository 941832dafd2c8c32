//! Special functions for p-value computation
//!
//! Local f64 routines; accuracy is bounded by the erfc approximation
//! (|error| ≤ 1.5e-7), far below the significance levels the tests are read
//! against.

use std::f64::consts::PI;

/// Complementary error function.
///
/// Abramowitz & Stegun 7.1.26 polynomial, evaluated with Horner's method.
/// Negative arguments use erfc(-x) = 2 - erfc(x).
pub(crate) fn erfc(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = A1 + t * (A2 + t * (A3 + t * (A4 + t * A5)));
    let value = t * poly * (-abs_x * abs_x).exp();

    if x < 0.0 {
        2.0 - value
    } else {
        value
    }
}

/// Regularized upper incomplete gamma Q(3/2, x).
///
/// Closed form for the half-integer shape: Q(3/2, x) = erfc(√x) + 2·√(x/π)·e^(−x).
pub(crate) fn igamc_three_halves(x: f64) -> f64 {
    let sqrt_x = x.sqrt();
    erfc(sqrt_x) + 2.0 * (x / PI).sqrt() * (-x).exp()
}
