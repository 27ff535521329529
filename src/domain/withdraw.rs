//! Withdrawal specification and outcome.

use core::fmt;

use super::{Amount, Shares};
use crate::error::AmmError;

/// Caller-supplied parameters for a remove-liquidity operation.
///
/// Names the share quantity to burn and the minimum acceptable amount of
/// each leg. Unlike deposits, zero minimums are allowed: a withdrawer may
/// accept whatever the proportional division yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawSpec {
    shares: Shares,
    amount_a_min: Amount,
    amount_b_min: Amount,
}

impl WithdrawSpec {
    /// Creates a validated withdrawal specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `shares` is zero.
    pub const fn new(
        shares: Shares,
        amount_a_min: Amount,
        amount_b_min: Amount,
    ) -> Result<Self, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "withdrawal must burn a positive share quantity",
            ));
        }
        Ok(Self {
            shares,
            amount_a_min,
            amount_b_min,
        })
    }

    /// Share quantity to burn.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
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

/// Amounts returned to the recipient by a remove-liquidity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawOutcome {
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawOutcome {
    /// Creates a new outcome record.
    #[must_use]
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Amount of the first leg withdrawn.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the second leg withdrawn.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawOutcome(a={}, b={})",
            self.amount_a, self.amount_b
        )
    }
}
