//! Constant-product swap pricing.
//!
//! The pricing rule is the feeless constant-product formula:
//!
//! ```text
//! amount_out = amount_in × reserve_out / (reserve_in + amount_in)
//! ```
//!
//! with integer division truncating toward zero. Truncation always
//! favours the pool, so for any valid inputs
//!
//! ```text
//! (reserve_in + amount_in) × (reserve_out − amount_out) ≥ reserve_in × reserve_out
//! ```
//!
//! and the output is strictly smaller than `reserve_out` — one swap can
//! never drain a reserve completely.

use crate::domain::{Amount, Rounding};
use crate::error::{AmmError, Result};

/// Computes the output of a feeless constant-product swap.
///
/// Pure: no state, no side effects, deterministic for given inputs.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
/// - [`AmmError::InsufficientReserve`] if either reserve is zero, with a
///   distinct message per side.
/// - [`AmmError::Overflow`] if an intermediate product or sum exceeds
///   `u128`.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::Amount;
/// use puddle_amm::engine::pricing::amount_out;
///
/// let out = amount_out(Amount::new(100), Amount::new(100), Amount::new(200))
///     .expect("valid swap");
/// assert_eq!(out, Amount::new(100));
/// ```
pub fn amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidQuantity("swap input must be positive"));
    }
    if reserve_in.is_zero() {
        return Err(AmmError::InsufficientReserve("input reserve is empty"));
    }
    if reserve_out.is_zero() {
        return Err(AmmError::InsufficientReserve("output reserve is empty"));
    }

    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;
    let numerator = amount_in
        .checked_mul(&reserve_out)
        .ok_or(AmmError::Overflow("swap numerator overflow"))?;

    numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(AmmError::DivisionByZero)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        // reserves (100, 200), input 100: out = 100 * 200 / 200 = 100
        let Ok(out) = amount_out(Amount::new(100), Amount::new(100), Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(100));
    }

    #[test]
    fn small_input_floors_to_fair_value() {
        // 10 * 1000 / 1010 = 9.9... floors to 9
        let Ok(out) = amount_out(Amount::new(10), Amount::new(1_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, Amount::new(9));
    }

    #[test]
    fn zero_input_rejected() {
        let result = amount_out(Amount::ZERO, Amount::new(100), Amount::new(100));
        assert_eq!(
            result,
            Err(AmmError::InvalidQuantity("swap input must be positive"))
        );
    }

    #[test]
    fn empty_reserves_rejected_distinctly() {
        assert_eq!(
            amount_out(Amount::new(1), Amount::ZERO, Amount::new(100)),
            Err(AmmError::InsufficientReserve("input reserve is empty"))
        );
        assert_eq!(
            amount_out(Amount::new(1), Amount::new(100), Amount::ZERO),
            Err(AmmError::InsufficientReserve("output reserve is empty"))
        );
    }

    #[test]
    fn output_strictly_below_reserve_out() {
        // Even an enormous input cannot take the whole output reserve.
        let Ok(out) = amount_out(
            Amount::new(1_000_000_000),
            Amount::new(1),
            Amount::new(1_000),
        ) else {
            panic!("expected Ok");
        };
        assert!(out < Amount::new(1_000));
    }

    #[test]
    fn product_never_decreases() {
        let cases = [
            (1u128, 100u128, 100u128),
            (37, 1_000, 2_000),
            (500, 500, 500),
            (999_999, 123_456, 654_321),
        ];
        for (input, r_in, r_out) in cases {
            let Ok(out) = amount_out(Amount::new(input), Amount::new(r_in), Amount::new(r_out))
            else {
                panic!("expected Ok");
            };
            let before = r_in * r_out;
            let after = (r_in + input) * (r_out - out.get());
            assert!(after >= before, "product decreased: {after} < {before}");
        }
    }

    #[test]
    fn overflow_reported() {
        let result = amount_out(Amount::MAX, Amount::new(1), Amount::new(2));
        assert!(matches!(result, Err(AmmError::Overflow(_))));
    }
}
