//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for solver operations
//!
//! # Re-exports
//!
//! [`SolverError`] is re-exported at this module level for convenience.

pub mod error;

pub use error::SolverError;
