//! Stopping rule shared by the bracketed root finders.

use num_traits::Float;

/// When a root search stops.
///
/// Callers that load their own settings (see the implied volatility
/// configuration in `bs_models`) validate them there and build this value
/// directly.
///
/// # Example
///
/// ```
/// use bs_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig {
///     tolerance: 1e-8_f64,
///     max_iterations: 200,
/// };
/// assert_eq!(config.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Residual threshold `|f(x)|`; half of it is also the bracket width
    /// floor.
    pub tolerance: T,

    /// Iterations allowed before `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// `1e-10` and 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_f64() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_default_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }
}
