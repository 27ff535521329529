//! Deposit specification and outcome.

use core::fmt;

use super::{Amount, Shares};
use crate::error::AmmError;

/// Caller-supplied parameters for an add-liquidity operation.
///
/// Desired amounts state how much of each leg the caller offers; minimum
/// amounts are the slippage bounds below which the deposit must fail.
/// All four quantities are validated strictly positive at construction,
/// so an invalid specification can never reach the engine.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::{Amount, DepositSpec};
///
/// let spec = DepositSpec::new(
///     Amount::new(500),
///     Amount::new(500),
///     Amount::new(1),
///     Amount::new(1),
/// )
/// .expect("positive amounts");
/// assert_eq!(spec.amount_a_desired(), Amount::new(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositSpec {
    amount_a_desired: Amount,
    amount_b_desired: Amount,
    amount_a_min: Amount,
    amount_b_min: Amount,
}

impl DepositSpec {
    /// Creates a validated deposit specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if either desired amount or
    /// either minimum amount is zero.
    pub const fn new(
        amount_a_desired: Amount,
        amount_b_desired: Amount,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<Self, AmmError> {
        if amount_a_desired.is_zero() || amount_b_desired.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "desired deposit amount must be positive",
            ));
        }
        if amount_a_min.is_zero() || amount_b_min.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "minimum deposit amount must be positive",
            ));
        }
        Ok(Self {
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        })
    }

    /// Desired amount of the first leg.
    #[must_use]
    pub const fn amount_a_desired(&self) -> Amount {
        self.amount_a_desired
    }

    /// Desired amount of the second leg.
    #[must_use]
    pub const fn amount_b_desired(&self) -> Amount {
        self.amount_b_desired
    }

    /// Slippage bound for the first leg.
    #[must_use]
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Slippage bound for the second leg.
    #[must_use]
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }
}

/// Amounts actually deposited and shares minted by an add-liquidity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositOutcome {
    amount_a: Amount,
    amount_b: Amount,
    shares_issued: Shares,
}

impl DepositOutcome {
    /// Creates a new outcome record.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount, shares_issued: Shares) -> Self {
        Self {
            amount_a,
            amount_b,
            shares_issued,
        }
    }

    /// Amount of the first leg actually deposited.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the second leg actually deposited.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Pool shares minted to the recipient.
    #[must_use]
    pub const fn shares_issued(&self) -> Shares {
        self.shares_issued
    }
}

impl fmt::Display for DepositOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepositOutcome(a={}, b={}, shares={})",
            self.amount_a, self.amount_b, self.shares_issued
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_spec() {
        let Ok(spec) = DepositSpec::new(
            Amount::new(500),
            Amount::new(300),
            Amount::new(10),
            Amount::new(20),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(spec.amount_a_desired(), Amount::new(500));
        assert_eq!(spec.amount_b_desired(), Amount::new(300));
        assert_eq!(spec.amount_a_min(), Amount::new(10));
        assert_eq!(spec.amount_b_min(), Amount::new(20));
    }

    #[test]
    fn rejects_zero_desired() {
        let result = DepositSpec::new(
            Amount::ZERO,
            Amount::new(300),
            Amount::new(10),
            Amount::new(20),
        );
        assert_eq!(
            result,
            Err(AmmError::InvalidQuantity(
                "desired deposit amount must be positive"
            ))
        );
    }

    #[test]
    fn rejects_zero_minimum() {
        let result = DepositSpec::new(
            Amount::new(500),
            Amount::new(300),
            Amount::new(10),
            Amount::ZERO,
        );
        assert_eq!(
            result,
            Err(AmmError::InvalidQuantity(
                "minimum deposit amount must be positive"
            ))
        );
    }

    #[test]
    fn outcome_accessors() {
        let outcome = DepositOutcome::new(Amount::new(500), Amount::new(300), Shares::new(387));
        assert_eq!(outcome.amount_a(), Amount::new(500));
        assert_eq!(outcome.amount_b(), Amount::new(300));
        assert_eq!(outcome.shares_issued(), Shares::new(387));
    }

    #[test]
    fn outcome_display() {
        let outcome = DepositOutcome::new(Amount::new(1), Amount::new(2), Shares::new(3));
        assert_eq!(
            format!("{outcome}"),
            "DepositOutcome(a=1, b=2, shares=3)"
        );
    }
}
