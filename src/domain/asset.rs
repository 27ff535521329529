//! Opaque asset and account identifiers.

/// An opaque handle identifying one fungible asset tracked by the ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array. Identifiers compare by
/// content; the all-zero value is the null sentinel and never names a
/// valid pool leg.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::AssetId;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// assert!(!asset.is_null());
/// assert!(AssetId::null().is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero null identifier.
    #[must_use]
    pub const fn null() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null identifier.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// An opaque handle identifying a balance owner: a caller, a recipient,
/// or a pool's custody account.
///
/// Same shape and null semantics as [`AssetId`], kept as a separate type
/// so an asset can never be passed where an owner is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero null account.
    #[must_use]
    pub const fn null() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` if this is the null account.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        let mut i = 0;
        while i < 32 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }
}
