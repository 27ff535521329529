//! # Puddle AMM
//!
//! Feeless constant-product pool engine: single-pair liquidity pools
//! priced by `x · y = k`, with custody delegated to an injected balance
//! ledger.
//!
//! The engine manages any number of two-asset pools, each identified by
//! its normalized asset pair. It holds no balances of its own: reserves
//! live in per-pool custody accounts on a [`ledger::BalanceLedger`], and
//! pool shares are ordinary ledger assets minted and burned under an
//! explicit [`ledger::MintAuthority`] capability. Every operation
//! re-reads reserves from the ledger at call time, so accounting can
//! never drift from actual custody.
//!
//! # Quick Start
//!
//! ```rust
//! use puddle_amm::domain::{
//!     AccountId, Amount, AssetId, Deadline, DepositSpec, SwapPath, Timestamp,
//! };
//! use puddle_amm::engine::PoolEngine;
//! use puddle_amm::ledger::InMemoryLedger;
//!
//! // 1. Fund a provider on both legs of the pair.
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let iron = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let mut ledger = InMemoryLedger::new();
//! ledger.credit(gold, alice, Amount::new(10_000));
//! ledger.credit(iron, alice, Amount::new(10_000));
//!
//! // 2. Bootstrap the pool with the first deposit.
//! let mut engine = PoolEngine::new(ledger);
//! let spec = DepositSpec::new(
//!     Amount::new(1_000),
//!     Amount::new(1_000),
//!     Amount::new(1),
//!     Amount::new(1),
//! )
//! .expect("positive amounts");
//! let deadline = Deadline::at(Timestamp::new(100));
//! let now = Timestamp::new(50);
//! engine
//!     .add_liquidity(alice, gold, iron, &spec, alice, deadline, now)
//!     .expect("bootstrap deposit");
//!
//! // 3. Swap a fixed input of gold for iron.
//! let path = SwapPath::new(gold, iron).expect("distinct assets");
//! let outcome = engine
//!     .swap_exact_in(alice, path, Amount::new(100), Amount::new(1), alice, deadline, now)
//!     .expect("swap succeeded");
//! assert!(outcome.amount_out().get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  add_liquidity / remove_liquidity / swap_exact_in / quote_price
//! └──────┬──────┘
//!        │ &mut PoolEngine
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  pair registry, share math, constant-product pricing
//! └──────┬──────┘
//!        │ BalanceLedger trait
//!        ▼
//! ┌─────────────┐
//! │   Ledger     │  custody balances, share mint/burn under MintAuthority
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`Price`](domain::Price), operation specs and outcomes |
//! | [`ledger`] | The [`BalanceLedger`](ledger::BalanceLedger) seam, [`MintAuthority`](ledger::MintAuthority), and the [`InMemoryLedger`](ledger::InMemoryLedger) reference implementation |
//! | [`engine`] | [`PoolEngine`](engine::PoolEngine) operations and the pure [`pricing`](engine::pricing) formula |
//! | [`math`]   | Checked `u128` helpers: [`mul_div`](math::mul_div), [`isqrt`](math::isqrt) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod prelude;
