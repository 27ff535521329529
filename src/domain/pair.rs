//! Normalized pair of distinct assets.

use super::AssetId;
use crate::error::AmmError;

/// A pair of distinct, non-null assets, canonically sorted by identifier.
///
/// The canonical ordering guarantees that `(A, B)` and `(B, A)` produce
/// the same `AssetPair`, so the pair is usable directly as a pool
/// registry key without order ambiguity.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let forward = AssetPair::new(a, b).expect("distinct assets");
/// let reversed = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(forward, reversed);
/// assert_eq!(forward.first(), a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if either identifier is null.
    /// - [`AmmError::InvalidAsset`] if both identifiers are equal.
    pub fn new(asset_1: AssetId, asset_2: AssetId) -> Result<Self, AmmError> {
        if asset_1.is_null() || asset_2.is_null() {
            return Err(AmmError::InvalidAsset("pool leg must not be null"));
        }
        if asset_1 == asset_2 {
            return Err(AmmError::InvalidAsset("pool legs must be distinct"));
        }

        let (asset_a, asset_b) = if asset_1 < asset_2 {
            (asset_1, asset_2)
        } else {
            (asset_2, asset_1)
        };

        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset in canonical order (lower identifier).
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset in canonical order (higher identifier).
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is one of the two legs.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `asset` is not a leg of
    /// this pair.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, AmmError> {
        if *asset == self.asset_a {
            Ok(self.asset_b)
        } else if *asset == self.asset_b {
            Ok(self.asset_a)
        } else {
            Err(AmmError::InvalidAsset("asset is not a leg of this pair"))
        }
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
    fn preserves_sorted_input() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), asset(1));
        assert_eq!(pair.second(), asset(2));
    }

    #[test]
    fn normalizes_reversed_input() {
        let Ok(pair) = AssetPair::new(asset(2), asset(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.first(), asset(1));
        assert_eq!(pair.second(), asset(2));
    }

    #[test]
    fn both_orders_are_equal() {
        let (Ok(p1), Ok(p2)) = (
            AssetPair::new(asset(1), asset(2)),
            AssetPair::new(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(p1, p2);
    }

    #[test]
    fn rejects_identical_assets() {
        let Err(e) = AssetPair::new(asset(1), asset(1)) else {
            panic!("expected Err");
        };
        assert_eq!(e, AmmError::InvalidAsset("pool legs must be distinct"));
    }

    #[test]
    fn rejects_null_leg() {
        assert!(AssetPair::new(AssetId::null(), asset(1)).is_err());
        assert!(AssetPair::new(asset(1), AssetId::null()).is_err());
    }

    #[test]
    fn contains_both_legs_only() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&asset(1)));
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
    }

    #[test]
    fn other_returns_counterpart() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.other(&asset(1)), Ok(asset(2)));
        assert_eq!(pair.other(&asset(2)), Ok(asset(1)));
        assert!(pair.other(&asset(3)).is_err());
    }
}
