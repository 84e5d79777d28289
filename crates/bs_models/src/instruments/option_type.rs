//! Option type definition.
//!
//! A closed two-variant enum replaces free-form string tags; parsing from
//! text goes through [`FromStr`] and rejects anything that is not a call
//! or a put.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analytical::AnalyticalError;

/// Type of a European vanilla option.
///
/// # Variants
/// - `Call`: right to buy, payoff max(S - K, 0)
/// - `Put`: right to sell, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use bs_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Intrinsic value: the payoff if exercised immediately.
    ///
    /// # Examples
    /// ```
    /// use bs_models::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
