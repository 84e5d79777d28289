//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from Black-Scholes pricing and implied
//!   volatility inversion

use bs_core::types::SolverError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every failure is local to a single call; retrying with the same inputs
/// yields the same error.
///
/// # Variants
/// - `InvalidArgument`: Non-finite or out-of-domain input
/// - `InvalidOptionType`: Option type string that is neither call nor put
/// - `NoBracketFound`: Market price outside the attainable price range
/// - `ConvergenceFailure`: Root finder spent its iteration budget
/// - `NumericalInstability`: Non-finite intermediate result
///
/// # Examples
/// ```
/// use bs_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidArgument {
///     name: "sigma",
///     value: -0.2,
///     reason: "must be positive",
/// };
/// assert!(format!("{}", err).contains("sigma"));
/// assert!(err.is_invalid_argument());
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-finite or out-of-domain input.
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Unrecognised option type.
    #[error("Invalid argument: unrecognised option type '{0}', expected 'call' or 'put'")]
    InvalidOptionType(String),

    /// No volatility in the searched interval reproduces the market price.
    #[error("No bracket found: market price not attainable for σ in [{lower}, {upper}]")]
    NoBracketFound {
        /// Lower volatility bound searched
        lower: f64,
        /// Upper volatility bound searched (after widening)
        upper: f64,
    },

    /// Root finder exhausted its iteration budget.
    #[error("Convergence failure after {iterations} iterations")]
    ConvergenceFailure {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl AnalyticalError {
    /// True for both argument-validation variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            AnalyticalError::InvalidArgument { .. } | AnalyticalError::InvalidOptionType(_)
        )
    }
}

impl From<SolverError> for AnalyticalError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NoBracket { a, b } => AnalyticalError::NoBracketFound {
                lower: a.min(b),
                upper: a.max(b),
            },
            SolverError::MaxIterationsExceeded { iterations } => {
                AnalyticalError::ConvergenceFailure { iterations }
            }
            SolverError::NumericalInstability(message) => {
                AnalyticalError::NumericalInstability { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = AnalyticalError::InvalidArgument {
            name: "spot_price",
            value: -100.0,
            reason: "must be positive",
        };
        assert_eq!(
            format!("{}", err),
            "Invalid argument: spot_price = -100 (must be positive)"
        );
    }

    #[test]
    fn test_invalid_option_type_display() {
        let err = AnalyticalError::InvalidOptionType("straddle".to_string());
        assert!(format!("{}", err).contains("'straddle'"));
    }

    #[test]
    fn test_no_bracket_found_display() {
        let err = AnalyticalError::NoBracketFound {
            lower: 1e-6,
            upper: 5.0,
        };
        assert!(format!("{}", err).starts_with("No bracket found"));
    }

    #[test]
    fn test_convergence_failure_display() {
        let err = AnalyticalError::ConvergenceFailure { iterations: 200 };
        assert_eq!(format!("{}", err), "Convergence failure after 200 iterations");
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(AnalyticalError::InvalidOptionType("x".into()).is_invalid_argument());
        assert!(!AnalyticalError::ConvergenceFailure { iterations: 1 }.is_invalid_argument());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::ConvergenceFailure { iterations: 3 };
        let _: &dyn std::error::Error = &err;
    }

    // ==========================================================
    // From<SolverError> tests
    // ==========================================================

    #[test]
    fn test_no_bracket_to_no_bracket_found() {
        let err: AnalyticalError = SolverError::NoBracket { a: 5.0, b: 1e-6 }.into();
        assert_eq!(
            err,
            AnalyticalError::NoBracketFound {
                lower: 1e-6,
                upper: 5.0
            }
        );
    }

    #[test]
    fn test_max_iterations_to_convergence_failure() {
        let err: AnalyticalError = SolverError::MaxIterationsExceeded { iterations: 50 }.into();
        assert_eq!(err, AnalyticalError::ConvergenceFailure { iterations: 50 });
    }

    #[test]
    fn test_instability_to_numerical_instability() {
        let err: AnalyticalError = SolverError::NumericalInstability("NaN".into()).into();
        match err {
            AnalyticalError::NumericalInstability { message } => assert_eq!(message, "NaN"),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }
}
