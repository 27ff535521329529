//! Convenience re-exports of the crate's public surface.
//!
//! ```
//! use puddle_amm::prelude::*;
//!
//! let engine = PoolEngine::new(InMemoryLedger::new());
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let iron = AssetId::from_bytes([2u8; 32]);
//! assert!(engine.quote_price(gold, iron).is_err());
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Deadline, DepositOutcome, DepositSpec, Price, Rounding,
    Shares, SwapOutcome, SwapPath, Timestamp, WithdrawOutcome, WithdrawSpec,
};
pub use crate::engine::{pricing::amount_out, PoolEngine};
pub use crate::error::{AmmError, Result};
pub use crate::ledger::{BalanceLedger, InMemoryLedger, LedgerError, MintAuthority};
pub use crate::math::{isqrt, mul_div};
