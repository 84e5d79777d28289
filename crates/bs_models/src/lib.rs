//! # bs_models: Black-Scholes Pricing and Implied Volatility
//!
//! European option pricing under the Black-Scholes model and the inverse
//! problem of recovering volatility from an observed market price.
//!
//! This crate provides:
//! - Option type definitions (`instruments`)
//! - Closed-form prices, Greeks and the normal distribution (`analytical`)
//! - Bracketed implied volatility inversion with TOML/environment
//!   configuration (`implied_vol`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: no shared state and no I/O on the pricing path
//! - **Typed failures**: every error is an `AnalyticalError` variant
//! - **Layering**: root finding lives in `bs_core`; this crate only
//!   supplies the objective and the bracket
//!
//! ## Usage Examples
//!
//! ```rust
//! use bs_models::{black_scholes_price, implied_volatility, OptionType};
//!
//! let price = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!((price - 10.4506).abs() < 1e-4);
//!
//! let sigma = implied_volatility(price, 100.0, 100.0, 1.0, 0.05, OptionType::Call).unwrap();
//! assert!((sigma - 0.2).abs() < 1e-6);
//! ```
//!
//! ## Logging
//!
//! The implied volatility solver emits `tracing` events at debug level.
//! No subscriber is installed here; binaries and tests choose their own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied_vol;
pub mod instruments;

pub use analytical::{black_scholes_price, AnalyticalError, BlackScholes, Greeks};
pub use implied_vol::implied_volatility;
pub use instruments::OptionType;
