//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Iteration budget spent before convergence
/// - `NoBracket`: Function values at the bracket endpoints share a sign
/// - `NumericalInstability`: The objective produced a non-finite value
///
/// # Examples
/// ```
/// use bs_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 42 };
        assert_eq!(format!("{}", err), "Failed to converge after 42 iterations");
    }

    #[test]
    fn test_no_bracket_display() {
        let err = SolverError::NoBracket { a: 1.0, b: 2.5 };
        assert_eq!(format!("{}", err), "No bracket: f(1) and f(2.5) have same sign");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = SolverError::NumericalInstability("f(x) = NaN".to_string());
        assert!(format!("{}", err).contains("NaN"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NoBracket { a: 0.0, b: 1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::MaxIterationsExceeded { iterations: 7 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
