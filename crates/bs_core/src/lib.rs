//! # bs_core: Numerical Foundation for Black-Scholes Implied Volatility
//!
//! ## Foundation Layer Role
//!
//! bs_core is the bottom layer of the workspace, providing:
//! - Bracketed root finding (`math::solvers`)
//! - Solver configuration (`math::solvers::SolverConfig`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other bs_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use bs_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! let solver = BrentSolver::new(SolverConfig::default());
//! let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
