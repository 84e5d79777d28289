//! Implied volatility inversion of the Black-Scholes price.
//!
//! The solver brackets σ in `[lower_bound, upper_bound]`, widening the upper
//! end geometrically while the model price is still below the market, then
//! hands the bracket to [`BrentSolver`].

use bs_core::math::solvers::BrentSolver;
use tracing::debug;

use super::config::{ConfigError, ImpliedVolConfig};
use crate::analytical::black_scholes::{require_finite, require_positive};
use crate::analytical::{AnalyticalError, BlackScholes};
use crate::instruments::OptionType;

/// Reusable implied volatility solver.
///
/// Holds no state besides its configuration, so a single instance can be
/// shared across threads.
///
/// # Examples
/// ```
/// use bs_models::implied_vol::{ImpliedVolConfig, ImpliedVolSolver};
/// use bs_models::OptionType;
///
/// let solver = ImpliedVolSolver::new(ImpliedVolConfig::default()).unwrap();
/// let sigma = solver
///     .solve(10.450583572185565, 100.0, 100.0, 1.0, 0.05, OptionType::Call)
///     .unwrap();
/// assert!((sigma - 0.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
}

impl ImpliedVolSolver {
    /// Create a solver with the given configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` if `config.validate()` fails. The solver
    /// keeps its own copy, so a config accepted here stays valid.
    pub fn new(config: ImpliedVolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a solver with the default bracket and tolerances.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Find σ such that the Black-Scholes price equals `market_price`.
    ///
    /// Returns `0.0` when `expiry <= 0`; the market price is not examined on
    /// that branch.
    ///
    /// # Errors
    /// - `InvalidArgument` for non-finite inputs, non-positive spot, strike
    ///   or (unexpired) market price
    /// - `NoBracketFound` when the market price lies outside the prices the
    ///   model can produce over the searched σ range
    /// - `ConvergenceFailure` when Brent's method spends its iteration budget
    pub fn solve(
        &self,
        market_price: f64,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        require_positive("spot_price", spot)?;
        require_positive("strike_price", strike)?;
        require_finite("years_to_expiration", expiry)?;
        require_finite("annualized_rf_rate", rate)?;
        require_finite("market_price", market_price)?;

        if expiry <= 0.0 {
            debug!(expiry, "option expired, implied volatility is zero");
            return Ok(0.0);
        }

        require_positive("market_price", market_price)?;

        let lower = self.config.lower_bound;
        let mut upper = self.config.upper_bound;

        // A call never exceeds S, a put never exceeds K·e^(-rT)
        let ceiling = match option_type {
            OptionType::Call => spot,
            OptionType::Put => strike * (-rate * expiry).exp(),
        };
        if market_price >= ceiling {
            debug!(market_price, ceiling, %option_type, "market price at or above model ceiling");
            return Err(AnalyticalError::NoBracketFound { lower, upper });
        }

        let model = BlackScholes::new(spot, rate, lower)?;
        let objective =
            |sigma: f64| model.with_volatility(sigma).price(strike, expiry, option_type) - market_price;

        if objective(lower) > 0.0 {
            debug!(market_price, lower, %option_type, "market price below the σ→0 price");
            return Err(AnalyticalError::NoBracketFound { lower, upper });
        }

        let mut widenings = 0;
        while objective(upper) < 0.0 {
            if widenings == self.config.max_widenings {
                debug!(market_price, lower, upper, "no sign change after widening");
                return Err(AnalyticalError::NoBracketFound { lower, upper });
            }
            upper *= self.config.widen_factor;
            widenings += 1;
            debug!(upper, widenings, "widened volatility bracket");
        }

        let solver = BrentSolver::new(self.config.solver_config());
        match solver.find_root(objective, lower, upper) {
            Ok(sigma) => {
                debug!(sigma, market_price, %option_type, "implied volatility converged");
                Ok(sigma)
            }
            Err(err) => {
                debug!(error = %err, market_price, lower, upper, "implied volatility failed");
                Err(err.into())
            }
        }
    }
}

/// Implied volatility of a European option under Black-Scholes.
///
/// Uses the default [`ImpliedVolConfig`]: bracket `[1e-6, 5.0]` widened by
/// doubling up to ten times, price tolerance `1e-8`, 200 Brent iterations.
///
/// # Examples
/// ```
/// use bs_models::{black_scholes_price, implied_volatility, OptionType};
///
/// let price = black_scholes_price(100.0, 110.0, 0.5, 0.03, 0.35, OptionType::Put).unwrap();
/// let sigma = implied_volatility(price, 100.0, 110.0, 0.5, 0.03, OptionType::Put).unwrap();
/// assert!((sigma - 0.35).abs() < 1e-6);
///
/// // Expired options carry no volatility
/// assert_eq!(implied_volatility(5.0, 100.0, 95.0, 0.0, 0.03, OptionType::Call).unwrap(), 0.0);
/// ```
pub fn implied_volatility(
    market_price: f64,
    spot_price: f64,
    strike_price: f64,
    years_to_expiration: f64,
    annualized_rf_rate: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    ImpliedVolSolver::with_defaults().solve(
        market_price,
        spot_price,
        strike_price,
        years_to_expiration,
        annualized_rf_rate,
        option_type,
    )
}
