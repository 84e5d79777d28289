//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal CDF/PDF used by the formulas
//!
//! ## Design Principles
//!
//! - **Validated construction**: `BlackScholes::new` rejects non-finite and
//!   out-of-domain parameters instead of letting NaN propagate
//! - **Numerical Stability**: erfc-based CDF for accurate tails

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::{black_scholes_price, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
