//! Root-finding solvers for numerical computation.
//!
//! This module provides the bracketed root finder used to invert pricing
//! formulas, most notably for implied volatility.
//!
//! ## Available Solvers
//!
//! - [`BrentSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use bs_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve e^x - 2 = 0 (find ln 2)
//! let solver = BrentSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x.exp() - 2.0, 0.0, 1.0).unwrap();
//! assert!((root - 2.0_f64.ln()).abs() < 1e-10);
//! ```

mod brent;
mod config;

pub use brent::BrentSolver;
pub use config::SolverConfig;
