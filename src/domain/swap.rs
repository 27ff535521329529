//! Swap path and outcome.

use core::fmt;

use super::{Amount, AssetId};
use crate::error::AmmError;

/// An ordered single-hop route: the asset sold followed by the asset
/// bought.
///
/// Construction enforces the path shape: exactly two assets, both
/// non-null, and distinct from each other. Rejecting an
/// identical-input-and-output path aligns swaps with the distinctness
/// rule the liquidity operations already apply.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::{AssetId, SwapPath};
///
/// let sold = AssetId::from_bytes([1u8; 32]);
/// let bought = AssetId::from_bytes([2u8; 32]);
/// let path = SwapPath::new(sold, bought).expect("distinct assets");
/// assert_eq!(path.input(), sold);
/// assert_eq!(path.output(), bought);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPath {
    input: AssetId,
    output: AssetId,
}

impl SwapPath {
    /// Creates a validated two-asset path.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if either asset is null.
    /// - [`AmmError::InvalidPath`] if input and output are the same asset.
    pub fn new(input: AssetId, output: AssetId) -> Result<Self, AmmError> {
        if input.is_null() || output.is_null() {
            return Err(AmmError::InvalidPath("path asset must not be null"));
        }
        if input == output {
            return Err(AmmError::InvalidPath(
                "path input and output must be distinct",
            ));
        }
        Ok(Self { input, output })
    }

    /// Creates a path from a caller-supplied slice.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPath`] if the slice does not contain exactly
    ///   two assets.
    /// - Any error from [`SwapPath::new`].
    pub fn from_slice(assets: &[AssetId]) -> Result<Self, AmmError> {
        let [input, output] = assets else {
            return Err(AmmError::InvalidPath(
                "path must contain exactly two assets",
            ));
        };
        Self::new(*input, *output)
    }

    /// The asset being sold.
    #[must_use]
    pub const fn input(&self) -> AssetId {
        self.input
    }

    /// The asset being bought.
    #[must_use]
    pub const fn output(&self) -> AssetId {
        self.output
    }
}

/// Amounts exchanged by a swap, as an ordered `(in, out)` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a new outcome record.
    #[must_use]
    pub const fn new(amount_in: Amount, amount_out: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
        }
    }

    /// Exact input amount taken from the caller.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output amount delivered to the recipient.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={}, out={})",
            self.amount_in, self.amount_out
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    #[test]
    fn valid_path() {
        let Ok(path) = SwapPath::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(path.input(), asset(1));
        assert_eq!(path.output(), asset(2));
    }

    #[test]
    fn rejects_identical_assets() {
        let result = SwapPath::new(asset(1), asset(1));
        assert_eq!(
            result,
            Err(AmmError::InvalidPath(
                "path input and output must be distinct"
            ))
        );
    }

    #[test]
    fn rejects_null_asset() {
        assert!(SwapPath::new(AssetId::null(), asset(2)).is_err());
        assert!(SwapPath::new(asset(1), AssetId::null()).is_err());
    }

    #[test]
    fn from_slice_requires_two_elements() {
        assert!(SwapPath::from_slice(&[asset(1)]).is_err());
        assert!(SwapPath::from_slice(&[asset(1), asset(2), asset(3)]).is_err());
        assert!(SwapPath::from_slice(&[]).is_err());

        let Ok(path) = SwapPath::from_slice(&[asset(1), asset(2)]) else {
            panic!("expected Ok");
        };
        assert_eq!(path.input(), asset(1));
    }

    #[test]
    fn path_is_directional() {
        let (Ok(forward), Ok(reverse)) = (
            SwapPath::new(asset(1), asset(2)),
            SwapPath::new(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_ne!(forward, reverse);
    }

    #[test]
    fn outcome_accessors() {
        let outcome = SwapOutcome::new(Amount::new(100), Amount::new(99));
        assert_eq!(outcome.amount_in(), Amount::new(100));
        assert_eq!(outcome.amount_out(), Amount::new(99));
        assert_eq!(format!("{outcome}"), "SwapOutcome(in=100, out=99)");
    }
}
