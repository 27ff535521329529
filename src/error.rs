//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every failure is synchronous and leaves pool state untouched:
//! a failed call never applies a partial ledger mutation, and the engine
//! remains usable for the next call.
//!
//! Ledger rejections are carried opaquely in [`AmmError::Ledger`] — the
//! engine never reinterprets them.

use thiserror::Error;

use crate::ledger::LedgerError;

/// Unified error enum for all pool engine operations.
///
/// Variants carry a `&'static str` describing the exact condition so
/// callers (and tests) can distinguish failures on either leg of a pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// An asset identifier is null or the two pool legs are not distinct.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A quantity that must be strictly positive was zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// The recipient account is null.
    #[error("invalid recipient: {0}")]
    InvalidRecipient(&'static str),

    /// A swap path does not name exactly two distinct, non-null assets.
    #[error("invalid path: {0}")]
    InvalidPath(&'static str),

    /// The caller-supplied deadline has already passed.
    #[error("deadline expired")]
    Expired,

    /// A computed amount fell below the caller's minimum.
    #[error("slippage: {0}")]
    Slippage(&'static str),

    /// No pool has been initialized for the given asset pair.
    #[error("no pool exists for this asset pair")]
    UnknownPool,

    /// The caller holds fewer shares than the withdrawal requests.
    #[error("insufficient share balance")]
    InsufficientShares,

    /// A deposit was too small to mint a single share unit.
    #[error("deposit too small to mint any shares")]
    ZeroSharesMinted,

    /// A reserve required by the operation is empty.
    #[error("insufficient reserve: {0}")]
    InsufficientReserve(&'static str),

    /// Arithmetic overflow or underflow in an intermediate computation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero. Reachable only through an invariant violation;
    /// reported as an error rather than allowed to panic.
    #[error("division by zero")]
    DivisionByZero,

    /// The underlying ledger rejected a transfer, mint, or burn.
    #[error("ledger rejected operation: {0}")]
    Ledger(#[from] LedgerError),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
