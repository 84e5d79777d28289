//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! At or past expiry (T ≤ 0) every price collapses to intrinsic value.

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use bs_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

/// First- and second-order sensitivities of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (calendar time, so usually negative)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Continuously-compounded risk-free rate (any finite value)
    /// * `volatility` - Annualised volatility (must be positive)
    ///
    /// # Errors
    /// `AnalyticalError::InvalidArgument` if any input is non-finite or
    /// `spot <= 0` or `volatility <= 0`.
    ///
    /// # Examples
    /// ```
    /// use bs_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        require_positive("spot_price", spot)?;
        require_finite("annualized_rf_rate", rate)?;
        require_positive("sigma", volatility)?;

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Same spot and rate with a different volatility.
    ///
    /// Used on the implied volatility search path, where the solver only
    /// probes strictly positive, finite σ.
    #[inline]
    pub(crate) fn with_volatility(&self, volatility: f64) -> Self {
        debug_assert!(volatility.is_finite() && volatility > 0.0);
        Self {
            volatility,
            ..*self
        }
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// For `expiry <= 0` the limit is returned: +∞ in the money, -∞ out of
    /// the money, 0 at the money.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return if self.spot > strike {
                f64::INFINITY
            } else if self.spot < strike {
                f64::NEG_INFINITY
            } else {
                0.0
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Prices a European option of the given type.
    ///
    /// # Examples
    /// ```
    /// use bs_models::analytical::BlackScholes;
    /// use bs_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// let call = bs.price(100.0, 1.0, OptionType::Call);
    /// assert!((call - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return OptionType::Call.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        // Cancellation deep out of the money can leave a tiny negative value
        (self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)).max(0.0)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return OptionType::Put.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        (strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)).max(0.0)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if expiry <= 0.0 {
            return match option_type {
                OptionType::Call if self.spot > strike => 1.0,
                OptionType::Put if self.spot < strike => -1.0,
                _ => 0.0,
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = φ(d₁) / (S·σ·√T)
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·√T·φ(d₁)
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        self.spot * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        let decay = -(self.spot * self.volatility * norm_pdf(d1)) / (2.0 * sqrt_t);

        match option_type {
            OptionType::Call => decay - self.rate * strike * discount * norm_cdf(d2),
            OptionType::Put => decay + self.rate * strike * discount * norm_cdf(-d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if expiry <= 0.0 {
            return 0.0;
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => strike * expiry * discount * norm_cdf(d2),
            OptionType::Put => -strike * expiry * discount * norm_cdf(-d2),
        }
    }

    /// All five Greeks in one call.
    pub fn greeks(&self, strike: f64, expiry: f64, option_type: OptionType) -> Greeks {
        Greeks {
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            vega: self.vega(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            rho: self.rho(strike, expiry, option_type),
        }
    }
}

/// Theoretical price of a European option under Black-Scholes.
///
/// If `years_to_expiration <= 0` the intrinsic value is returned and `sigma`
/// only has to be finite.
///
/// # Errors
/// `AnalyticalError::InvalidArgument` for non-finite inputs, non-positive
/// spot or strike, or non-positive `sigma` when the option has not expired.
///
/// # Examples
/// ```
/// use bs_models::{black_scholes_price, OptionType};
///
/// let call = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let put = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// assert!((call - 10.4506).abs() < 1e-4);
/// assert!((put - 5.5735).abs() < 1e-4);
///
/// // Expired: intrinsic value
/// let expired = black_scholes_price(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(expired, 10.0);
/// ```
pub fn black_scholes_price(
    spot_price: f64,
    strike_price: f64,
    years_to_expiration: f64,
    annualized_rf_rate: f64,
    sigma: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    require_positive("spot_price", spot_price)?;
    require_positive("strike_price", strike_price)?;
    require_finite("years_to_expiration", years_to_expiration)?;
    require_finite("annualized_rf_rate", annualized_rf_rate)?;
    require_finite("sigma", sigma)?;

    if years_to_expiration <= 0.0 {
        return Ok(option_type.intrinsic(spot_price, strike_price));
    }

    let model = BlackScholes::new(spot_price, annualized_rf_rate, sigma)?;
    let price = model.price(strike_price, years_to_expiration, option_type);

    if !price.is_finite() {
        return Err(AnalyticalError::NumericalInstability {
            message: format!("non-finite {} price {}", option_type, price),
        });
    }
    Ok(price)
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), AnalyticalError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalyticalError::InvalidArgument {
            name,
            value,
            reason: "must be finite",
        })
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), AnalyticalError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(AnalyticalError::InvalidArgument {
            name,
            value,
            reason: "must be positive",
        })
    }
}
