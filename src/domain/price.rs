//! Fixed-point spot price.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Spot price of a base asset denominated in a quote asset, scaled by
/// [`Price::SCALE`] (`10^18`).
///
/// A price of `1.0` is represented as `10^18`; fractional prices floor
/// towards zero like every other division in the engine.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::{Amount, Price};
///
/// // 200 quote units held against 50 base units: price = 4.0
/// let price = Price::from_reserves(Amount::new(200), Amount::new(50))
///     .expect("non-zero base reserve");
/// assert_eq!(price.get(), 4 * Price::SCALE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u128);

impl Price {
    /// Fixed-point scaling factor: `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// Price ratio of exactly 1:1.
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `Price` from an already-scaled raw value.
    #[must_use]
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Returns the scaled raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes `quote_reserve * SCALE / base_reserve`, flooring.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `base_reserve` is zero.
    /// - [`AmmError::Overflow`] if the scaled numerator exceeds `u128`.
    pub fn from_reserves(quote_reserve: Amount, base_reserve: Amount) -> crate::error::Result<Self> {
        if base_reserve.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        let numerator = quote_reserve
            .checked_mul(&Amount::new(Self::SCALE))
            .ok_or(AmmError::Overflow("price numerator overflow"))?;
        let scaled = numerator
            .checked_div(&base_reserve, Rounding::Down)
            .ok_or(AmmError::DivisionByZero)?;
        Ok(Self(scaled.get()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e-18", self.0)
    }
}
