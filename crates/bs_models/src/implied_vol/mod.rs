//! Implied volatility from observed option prices.
//!
//! - `ImpliedVolSolver`: Bracketed Brent inversion of the Black-Scholes price
//! - `ImpliedVolConfig`: Bracket and tolerance settings (TOML / environment)
//! - `implied_volatility`: Free function using the default configuration

pub mod config;
pub mod solver;

pub use config::{ConfigError, ImpliedVolConfig, ENV_PREFIX};
pub use solver::{implied_volatility, ImpliedVolSolver};
