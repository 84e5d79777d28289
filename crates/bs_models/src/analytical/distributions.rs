//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF goes through the complementary error function from `statrs`,
//! which stays accurate to near machine precision in both tails.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Using erfc rather than `1 + erf` keeps relative accuracy for large
/// negative x, where the tail probability is tiny.
///
/// # Examples
/// ```
/// use bs_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use bs_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
