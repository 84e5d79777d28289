//! Brent's method root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, secant, and inverse quadratic interpolation for
/// robust root finding without requiring derivatives. Guaranteed to
/// converge for continuous functions with a valid bracket.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Algorithm
///
/// The solver keeps a bracket `[b, c]` with `f(b)·f(c) <= 0` and `b` the best
/// estimate so far. Each step tries inverse quadratic interpolation (three
/// distinct points) or the secant method (two points), and falls back to
/// bisection whenever the interpolated step leaves the bracket or fails to
/// shrink it fast enough.
///
/// # Example
///
/// ```
/// use bs_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a new Brent solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (or that one of
    /// them is zero). The endpoints may be given in either order.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance` or the bracket has collapsed
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::NumericalInstability)` - `f` returned NaN or infinity
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    ///
    /// # Example
    ///
    /// ```
    /// use bs_core::math::solvers::{BrentSolver, SolverConfig};
    ///
    /// let solver = BrentSolver::new(SolverConfig::default());
    ///
    /// // Solve x² - 2 = 0 in bracket [0, 2]
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let zero = T::zero();
        let one = T::one();
        let half = T::from(0.5).unwrap();
        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let tol = self.config.tolerance;

        let mut a = a;
        let mut b = b;
        let mut fa = eval(&f, a)?;
        let mut fb = eval(&f, b)?;

        if (fa > zero && fb > zero) || (fa < zero && fb < zero) {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let mut c = b;
        let mut fc = fb;
        let mut d = b - a;
        let mut e = d;

        for _ in 0..self.config.max_iterations {
            // Re-establish the bracket [b, c] around the root
            if (fb > zero && fc > zero) || (fb < zero && fc < zero) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            // Keep b as the best estimate
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol1 = two * T::epsilon() * b.abs() + half * tol;
            let m = half * (c - b);

            if fb.abs() < tol || m.abs() <= tol1 {
                return Ok(b);
            }

            if e.abs() >= tol1 && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    // Secant
                    (two * m * s, one - s)
                } else {
                    // Inverse quadratic interpolation
                    let q = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * m * q * (q - r) - (b - a) * (r - one)),
                        (q - one) * (r - one) * (s - one),
                    )
                };

                if p > zero {
                    q = -q;
                }
                p = p.abs();

                let min1 = three * m * q - (tol1 * q).abs();
                let min2 = (e * q).abs();

                if two * p < min1.min(min2) {
                    e = d;
                    d = p / q;
                } else {
                    d = m;
                    e = m;
                }
            } else {
                d = m;
                e = m;
            }

            a = b;
            fa = fb;

            b = if d.abs() > tol1 {
                b + d
            } else if m > zero {
                b + tol1
            } else {
                b - tol1
            };

            fb = eval(&f, b)?;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[inline]
fn eval<T: Float, F: Fn(T) -> T>(f: &F, x: T) -> Result<T, SolverError> {
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(SolverError::NumericalInstability(format!(
            "objective is not finite at x = {}",
            x.to_f64().unwrap_or(f64::NAN)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = BrentSolver::new(SolverConfig::default());

        let f = |x: f64| x * x - 2.0;

        let root = solver.find_root(f, 0.0, 2.0).unwrap();
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            root
        );
    }

    #[test]
    fn test_find_cubic_root() {
        let solver = BrentSolver::new(SolverConfig::default());

        let f = |x: f64| x * x * x - x - 2.0;

        let root = solver.find_root(f, 1.0, 2.0).unwrap();
        assert!(f(root).abs() < 1e-10, "f(root) = {} should be near zero", f(root));
    }

    #[test]
    fn test_find_sin_root() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x.sin(), 3.0, 4.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-10);
    }

    #[test]
    fn test_bracket_reversed() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x * x - 2.0, 2.0, 0.0).unwrap();
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_root_at_bracket_endpoint() {
        let solver = BrentSolver::new(SolverConfig::default());

        let root = solver.find_root(|x: f64| x - 1.0, 0.0, 1.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);

        let root = solver.find_root(|x: f64| x - 1.0, 1.0, 3.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_flat_then_steep() {
        // Mimics a deep out-of-the-money price curve: almost flat near the
        // left end, then rising sharply
        let solver = BrentSolver::new(SolverConfig { tolerance: 1e-12, max_iterations: 200 });
        let f = |x: f64| (20.0 * (x - 0.7)).exp() - 1.0;

        let root = solver.find_root(f, 0.0, 5.0).unwrap();
        assert!((root - 0.7).abs() < 1e-10, "got {}", root);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_no_bracket_same_sign_positive() {
        let solver = BrentSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| x * x, 1.0, 2.0);

        match result.unwrap_err() {
            SolverError::NoBracket { a, b } => {
                assert!((a - 1.0).abs() < 1e-10);
                assert!((b - 2.0).abs() < 1e-10);
            }
            other => panic!("Expected NoBracket error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_bracket_same_sign_negative() {
        let solver = BrentSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| -x * x - 1.0, -1.0, 1.0);
        assert!(matches!(result, Err(SolverError::NoBracket { .. })));
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let config = SolverConfig { tolerance: 1e-100, max_iterations: 3 };
        let solver = BrentSolver::new(config);

        let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);

        match result.unwrap_err() {
            SolverError::MaxIterationsExceeded { iterations } => {
                assert_eq!(iterations, 3);
            }
            other => panic!("Expected MaxIterationsExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_objective() {
        let solver = BrentSolver::new(SolverConfig::default());

        let result = solver.find_root(|x: f64| if x > 1.5 { f64::NAN } else { x - 1.0 }, 0.0, 2.0);
        assert!(matches!(result, Err(SolverError::NumericalInstability(_))));
    }

    // ========================================
    // Convergence Tests
    // ========================================

    #[test]
    fn test_achieves_tolerance() {
        let tol = 1e-12;
        let solver = BrentSolver::new(SolverConfig { tolerance: tol, max_iterations: 100 });

        let f = |x: f64| x * x - 2.0;

        let root = solver.find_root(f, 0.0, 2.0).unwrap();
        assert!(f(root).abs() < 1e-11, "f(root) = {} should be tiny", f(root));
    }

    #[test]
    fn test_difficult_function() {
        let solver = BrentSolver::new(SolverConfig::default());

        let f = |x: f64| x - x.cos();

        let root = solver.find_root(f, 0.0, 1.0).unwrap();
        assert!(f(root).abs() < 1e-10);
    }

    #[test]
    fn test_with_defaults() {
        let solver: BrentSolver<f64> = BrentSolver::with_defaults();

        let root = solver.find_root(|x: f64| x - 1.0, 0.0, 2.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_config_accessor() {
        let solver = BrentSolver::new(SolverConfig { tolerance: 1e-8, max_iterations: 50 });

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver: BrentSolver<f32> = BrentSolver::with_defaults();

        let root = solver.find_root(|x: f32| x * x - 2.0, 0.0_f32, 2.0_f32).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }
}
