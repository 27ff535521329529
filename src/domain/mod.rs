//! Fundamental domain value types used throughout the pool engine.
//!
//! All types are newtypes with validated constructors: an `AssetPair`
//! is always distinct and non-null, a `DepositSpec` always carries
//! positive amounts, a `SwapPath` always names two distinct assets.
//! Invalid values cannot reach the engine.

mod amount;
mod asset;
mod deposit;
mod pair;
mod price;
mod rounding;
mod shares;
mod swap;
mod time;
mod withdraw;

pub use amount::Amount;
pub use asset::{AccountId, AssetId};
pub use deposit::{DepositOutcome, DepositSpec};
pub use pair::AssetPair;
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap::{SwapOutcome, SwapPath};
pub use time::{Deadline, Timestamp};
pub use withdraw::{WithdrawOutcome, WithdrawSpec};
