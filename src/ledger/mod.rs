//! Balance ledger seam.
//!
//! The engine never holds balances itself: custody, share issuance, and
//! every transfer go through a [`BalanceLedger`] implementation injected
//! at engine construction. The ledger is the single source of truth —
//! reserves are re-read from it at the start of every operation and never
//! cached, so accounting state cannot diverge from actual custody.
//!
//! Minting and burning of a share asset require a [`MintAuthority`]: an
//! explicit capability object binding the share asset to the account
//! authorized over it. The ledger honours mint/burn only when the
//! presented capability matches the authority registered for that asset,
//! which makes the authorization check testable without any particular
//! execution environment.

mod memory;

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

pub use memory::InMemoryLedger;

/// Errors surfaced by a [`BalanceLedger`] implementation.
///
/// The engine propagates these opaquely as
/// [`AmmError::Ledger`](crate::error::AmmError::Ledger) without
/// reinterpretation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The debited account holds less than the requested amount.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance of the debited account.
        have: Amount,
        /// Amount the operation required.
        need: Amount,
    },

    /// The presented capability does not match the registered authority.
    #[error("mint authority does not match the registered authority")]
    NotAuthorized,

    /// The share asset has already been registered with an authority.
    #[error("share asset is already registered")]
    AlreadyRegistered,

    /// Mint or burn was attempted on an asset with no registered authority.
    #[error("asset has no registered mint authority")]
    UnknownShareAsset,

    /// Crediting the amount would overflow the receiving balance or the
    /// issued supply.
    #[error("balance or supply overflow")]
    Overflow,
}

/// Capability object authorizing mint and burn of one share asset.
///
/// Binds a share asset to the account that holds authority over it. The
/// engine constructs one per pool, naming the pool's custody account as
/// holder; a ledger accepts mint/burn only when both fields match its
/// registration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAuthority {
    asset: AssetId,
    holder: AccountId,
}

impl MintAuthority {
    /// Creates a capability claiming authority of `holder` over `asset`.
    ///
    /// Possession alone grants nothing: the claim is checked against the
    /// ledger's registration on every mint and burn.
    #[must_use]
    pub const fn new(asset: AssetId, holder: AccountId) -> Self {
        Self { asset, holder }
    }

    /// The share asset this capability covers.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        self.asset
    }

    /// The account claiming authority.
    #[must_use]
    pub const fn holder(&self) -> AccountId {
        self.holder
    }
}

/// Capability contract the engine requires of its token ledger.
///
/// Implementations must be strict about authorization (a transfer debits
/// only `from`, mint/burn verify the [`MintAuthority`]) and must apply
/// each call atomically: a returned error means no balance changed.
pub trait BalanceLedger {
    /// Current balance of `owner` in `asset`. Unknown combinations are
    /// zero.
    fn balance_of(&self, asset: AssetId, owner: AccountId) -> Amount;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Overflow`] if crediting `to` would overflow.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Registers `authority` as the sole mint/burn capability for its
    /// share asset. A share asset can be registered once.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AlreadyRegistered`] on a second
    /// registration for the same asset.
    fn register_share_asset(&mut self, authority: &MintAuthority) -> Result<(), LedgerError>;

    /// Creates `amount` new units of the capability's share asset in
    /// `to`'s balance and grows the issued supply.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownShareAsset`] / [`LedgerError::NotAuthorized`]
    ///   if the capability does not match the registration.
    /// - [`LedgerError::Overflow`] if balance or supply would overflow.
    fn mint(
        &mut self,
        authority: &MintAuthority,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Destroys `amount` units of the capability's share asset from
    /// `from`'s balance and shrinks the issued supply.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownShareAsset`] / [`LedgerError::NotAuthorized`]
    ///   if the capability does not match the registration.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    fn burn(
        &mut self,
        authority: &MintAuthority,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Total units of `asset` ever minted minus ever burned. Zero for
    /// unregistered assets.
    fn total_issued(&self, asset: AssetId) -> Amount;
}
