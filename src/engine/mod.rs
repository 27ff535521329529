//! The pool engine: liquidity accounting and swap execution.
//!
//! [`PoolEngine`] owns the pricing and accounting logic for
//! constant-product pools and delegates all custody to an injected
//! [`BalanceLedger`]. Pool identity is explicit: a registry maps each
//! normalized [`AssetPair`] to the pool's custody account and share
//! asset, so `(A, B)` and `(B, A)` always address the same pool.
//!
//! Reserves are never cached. Every operation re-reads the custody
//! balances and the issued share supply from the ledger at call time,
//! computes under the constant-product invariants, and only then issues
//! ledger instructions. Validation and arithmetic complete before the
//! first mutation, and both the debit and credit sides of every
//! instruction are pre-flighted, so a failed call leaves the ledger
//! exactly as it found it.
//!
//! Operations take `&mut self`: exclusive access serializes the
//! read-compute-write sequence, so no two operations can act on a stale
//! reserve snapshot. Callers sharing an engine across threads wrap it
//! in a lock.

pub mod pricing;

#[cfg(test)]
mod proptest_properties;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Deadline, DepositOutcome, DepositSpec, Price, Rounding,
    Shares, SwapOutcome, SwapPath, Timestamp, WithdrawOutcome, WithdrawSpec,
};
use crate::error::{AmmError, Result};
use crate::ledger::{BalanceLedger, LedgerError, MintAuthority};
use crate::math::{isqrt, mul_div};

/// Handle tag byte for engine-allocated custody accounts.
const CUSTODY_TAG: u8 = 0xC5;

/// Handle tag byte for engine-allocated share assets.
const SHARE_TAG: u8 = 0x5A;

/// Registry record for one initialized pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PoolEntry {
    custody: AccountId,
    share_asset: AssetId,
}

impl PoolEntry {
    fn authority(&self) -> MintAuthority {
        MintAuthority::new(self.share_asset, self.custody)
    }
}

/// A constant-product pool engine over an injected balance ledger.
///
/// Pools are created implicitly: the first deposit for a fresh pair
/// allocates a custody account and a share asset, registers the engine's
/// [`MintAuthority`] with the ledger, and records the pool in the
/// registry. A pool whose last provider has withdrawn keeps its entry
/// with zero reserves and zero issued shares; the next deposit
/// bootstraps it again.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::{
///     AccountId, Amount, AssetId, Deadline, DepositSpec, Timestamp,
/// };
/// use puddle_amm::engine::PoolEngine;
/// use puddle_amm::ledger::InMemoryLedger;
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let iron = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(gold, alice, Amount::new(1_000));
/// ledger.credit(iron, alice, Amount::new(1_000));
///
/// let mut engine = PoolEngine::new(ledger);
/// let spec = DepositSpec::new(
///     Amount::new(100),
///     Amount::new(100),
///     Amount::new(1),
///     Amount::new(1),
/// )
/// .expect("positive amounts");
///
/// let outcome = engine
///     .add_liquidity(
///         alice,
///         gold,
///         iron,
///         &spec,
///         alice,
///         Deadline::at(Timestamp::new(100)),
///         Timestamp::new(50),
///     )
///     .expect("bootstrap deposit");
/// assert_eq!(outcome.shares_issued().get(), 100);
/// ```
#[derive(Debug)]
pub struct PoolEngine<L> {
    ledger: L,
    pools: HashMap<AssetPair, PoolEntry>,
    next_pool: u64,
}

impl<L: BalanceLedger> PoolEngine<L> {
    /// Creates an engine with no pools over the given ledger.
    #[must_use]
    pub fn new(ledger: L) -> Self {
        Self {
            ledger,
            pools: HashMap::new(),
            next_pool: 0,
        }
    }

    /// Shared access to the underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Exclusive access to the underlying ledger, for funding accounts
    /// and inspecting custody outside the engine's operations.
    #[must_use]
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Current reserves for a pair, in the order the assets are given.
    ///
    /// A validated pair without an initialized pool reports zero on both
    /// legs, matching the implicit pool lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] for a null or non-distinct
    /// pair.
    pub fn reserves(&self, asset_a: AssetId, asset_b: AssetId) -> Result<(Amount, Amount)> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        Ok(match self.pools.get(&pair) {
            Some(entry) => (
                self.ledger.balance_of(asset_a, entry.custody),
                self.ledger.balance_of(asset_b, entry.custody),
            ),
            None => (Amount::ZERO, Amount::ZERO),
        })
    }

    /// Total outstanding pool shares for a pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] for a null or non-distinct
    /// pair.
    pub fn total_shares(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Shares> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        Ok(match self.pools.get(&pair) {
            Some(entry) => Shares::new(self.ledger.total_issued(entry.share_asset).get()),
            None => Shares::ZERO,
        })
    }

    /// The share asset identifier of an initialized pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] for a null or non-distinct pair.
    /// - [`AmmError::UnknownPool`] if no pool exists for the pair.
    pub fn share_asset(&self, asset_a: AssetId, asset_b: AssetId) -> Result<AssetId> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        self.pools
            .get(&pair)
            .map(|entry| entry.share_asset)
            .ok_or(AmmError::UnknownPool)
    }

    /// Deposits both legs at the pool's current ratio and mints shares.
    ///
    /// On a pool with empty reserves the desired amounts are taken
    /// as-is and `isqrt(amount_a × amount_b)` shares are minted — the
    /// first depositor sets the initial exchange ratio and must choose
    /// it to reflect a fair price, since no external reference exists.
    /// On a live pool the deposit is scaled to the current reserve
    /// ratio, never diluting existing providers, and shares are the
    /// minimum of the two ratio-derived figures:
    /// `min(amount_a × total / reserve_a, amount_b × total / reserve_b)`.
    ///
    /// Returns the amounts actually deposited and the shares minted to
    /// `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the pair is null or not distinct.
    /// - [`AmmError::Expired`] if `now` is past `deadline`.
    /// - [`AmmError::InvalidRecipient`] if `recipient` is null.
    /// - [`AmmError::Slippage`] if the ratio-scaled amount on either leg
    ///   falls below its minimum.
    /// - [`AmmError::ZeroSharesMinted`] if the deposit is too small to
    ///   mint a single share unit.
    /// - [`AmmError::Ledger`] if the caller cannot fund either leg.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        asset_a: AssetId,
        asset_b: AssetId,
        spec: &DepositSpec,
        recipient: AccountId,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<DepositOutcome> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        if deadline.is_expired(now) {
            return Err(AmmError::Expired);
        }
        if recipient.is_null() {
            return Err(AmmError::InvalidRecipient("recipient must not be null"));
        }

        let existing = self.pools.get(&pair).copied();
        let (reserve_a, reserve_b, total) = match existing {
            Some(entry) => (
                self.ledger.balance_of(asset_a, entry.custody),
                self.ledger.balance_of(asset_b, entry.custody),
                Shares::new(self.ledger.total_issued(entry.share_asset).get()),
            ),
            None => (Amount::ZERO, Amount::ZERO, Shares::ZERO),
        };
        trace!(
            reserve_a = reserve_a.get(),
            reserve_b = reserve_b.get(),
            total_shares = total.get(),
            "reserves read for deposit"
        );

        let (amount_a, amount_b, shares) = if reserve_a.is_zero() && reserve_b.is_zero() {
            Self::bootstrap_deposit(spec)?
        } else {
            Self::proportional_deposit(spec, reserve_a, reserve_b, total)?
        };
        if shares.is_zero() {
            return Err(AmmError::ZeroSharesMinted);
        }

        self.require_balance(asset_a, caller, amount_a)?;
        self.require_balance(asset_b, caller, amount_b)?;
        if let Some(entry) = existing {
            // Pre-flight the credit sides too, so the instruction
            // sequence below cannot fail after its first mutation.
            self.require_headroom(asset_a, entry.custody, amount_a)?;
            self.require_headroom(asset_b, entry.custody, amount_b)?;
            self.require_headroom(entry.share_asset, recipient, Amount::new(shares.get()))?;
            if Amount::new(total.get())
                .checked_add(&Amount::new(shares.get()))
                .is_none()
            {
                return Err(AmmError::Ledger(LedgerError::Overflow));
            }
        }

        let entry = match existing {
            Some(entry) => entry,
            None => self.create_pool(pair)?,
        };

        self.ledger
            .transfer(asset_a, caller, entry.custody, amount_a)?;
        self.ledger
            .transfer(asset_b, caller, entry.custody, amount_b)?;
        self.ledger
            .mint(&entry.authority(), recipient, Amount::new(shares.get()))?;

        debug!(
            amount_a = amount_a.get(),
            amount_b = amount_b.get(),
            shares = shares.get(),
            "liquidity added"
        );
        Ok(DepositOutcome::new(amount_a, amount_b, shares))
    }

    /// Burns the caller's shares and pays out the proportional slice of
    /// both reserves.
    ///
    /// Amounts are `shares × reserve / total_shares`, flooring — a
    /// withdrawer receives at most their exact proportional entitlement.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the pair is null or not distinct.
    /// - [`AmmError::Expired`] if `now` is past `deadline`.
    /// - [`AmmError::InvalidRecipient`] if `recipient` is null.
    /// - [`AmmError::UnknownPool`] if no pool exists for the pair.
    /// - [`AmmError::InsufficientShares`] if the caller holds fewer
    ///   shares than the withdrawal burns.
    /// - [`AmmError::Slippage`] if either computed amount falls below
    ///   its minimum.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        asset_a: AssetId,
        asset_b: AssetId,
        spec: &WithdrawSpec,
        recipient: AccountId,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<WithdrawOutcome> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        if deadline.is_expired(now) {
            return Err(AmmError::Expired);
        }
        if recipient.is_null() {
            return Err(AmmError::InvalidRecipient("recipient must not be null"));
        }
        let entry = self.pools.get(&pair).copied().ok_or(AmmError::UnknownPool)?;

        let burn = Amount::new(spec.shares().get());
        let held = self.ledger.balance_of(entry.share_asset, caller);
        if held < burn {
            return Err(AmmError::InsufficientShares);
        }

        let total = self.ledger.total_issued(entry.share_asset);
        if total.is_zero() {
            // Unreachable when the share-balance check above passed;
            // fail loudly instead of dividing by zero.
            return Err(AmmError::DivisionByZero);
        }
        let reserve_a = self.ledger.balance_of(asset_a, entry.custody);
        let reserve_b = self.ledger.balance_of(asset_b, entry.custody);
        trace!(
            reserve_a = reserve_a.get(),
            reserve_b = reserve_b.get(),
            total_shares = total.get(),
            "reserves read for withdrawal"
        );

        let amount_a = Amount::new(
            mul_div(burn.get(), reserve_a.get(), total.get(), Rounding::Down)
                .ok_or(AmmError::Overflow("withdrawal amount overflow"))?,
        );
        let amount_b = Amount::new(
            mul_div(burn.get(), reserve_b.get(), total.get(), Rounding::Down)
                .ok_or(AmmError::Overflow("withdrawal amount overflow"))?,
        );
        if amount_a < spec.amount_a_min() {
            return Err(AmmError::Slippage("amount A below minimum"));
        }
        if amount_b < spec.amount_b_min() {
            return Err(AmmError::Slippage("amount B below minimum"));
        }
        // Pre-flight the recipient's credit side so the second transfer
        // cannot fail after the first applied.
        self.require_headroom(asset_a, recipient, amount_a)?;
        self.require_headroom(asset_b, recipient, amount_b)?;

        self.ledger
            .transfer(asset_a, entry.custody, recipient, amount_a)?;
        self.ledger
            .transfer(asset_b, entry.custody, recipient, amount_b)?;
        self.ledger.burn(&entry.authority(), caller, burn)?;

        debug!(
            amount_a = amount_a.get(),
            amount_b = amount_b.get(),
            shares = burn.get(),
            "liquidity removed"
        );
        Ok(WithdrawOutcome::new(amount_a, amount_b))
    }

    /// Executes a single-hop exact-input swap along `path`.
    ///
    /// The output is priced by [`pricing::amount_out`] against the
    /// custody balances of the path's two assets, checked against
    /// `amount_out_min`, and delivered to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] if `now` is past `deadline`.
    /// - [`AmmError::InvalidQuantity`] if `amount_in` or
    ///   `amount_out_min` is zero.
    /// - [`AmmError::InvalidRecipient`] if `recipient` is null.
    /// - [`AmmError::UnknownPool`] if no pool exists for the path's
    ///   pair.
    /// - [`AmmError::InsufficientReserve`] if either reserve is empty.
    /// - [`AmmError::Slippage`] if the priced output is below
    ///   `amount_out_min`.
    /// - [`AmmError::Ledger`] if the caller cannot fund the input.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact_in(
        &mut self,
        caller: AccountId,
        path: SwapPath,
        amount_in: Amount,
        amount_out_min: Amount,
        recipient: AccountId,
        deadline: Deadline,
        now: Timestamp,
    ) -> Result<SwapOutcome> {
        if deadline.is_expired(now) {
            return Err(AmmError::Expired);
        }
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap input must be positive"));
        }
        if amount_out_min.is_zero() {
            return Err(AmmError::InvalidQuantity("minimum output must be positive"));
        }
        if recipient.is_null() {
            return Err(AmmError::InvalidRecipient("recipient must not be null"));
        }

        let pair = AssetPair::new(path.input(), path.output())?;
        let entry = self.pools.get(&pair).copied().ok_or(AmmError::UnknownPool)?;

        let reserve_in = self.ledger.balance_of(path.input(), entry.custody);
        let reserve_out = self.ledger.balance_of(path.output(), entry.custody);
        trace!(
            reserve_in = reserve_in.get(),
            reserve_out = reserve_out.get(),
            "reserves read for swap"
        );

        let amount_out = pricing::amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out < amount_out_min {
            return Err(AmmError::Slippage("swap output below minimum"));
        }

        self.require_balance(path.input(), caller, amount_in)?;
        // Custody's input-side credit cannot overflow: the pricing
        // denominator already bounds reserve_in + amount_in. The
        // recipient's credit side still needs a pre-flight.
        self.require_headroom(path.output(), recipient, amount_out)?;
        self.ledger
            .transfer(path.input(), caller, entry.custody, amount_in)?;
        self.ledger
            .transfer(path.output(), entry.custody, recipient, amount_out)?;

        debug!(
            amount_in = amount_in.get(),
            amount_out = amount_out.get(),
            "swap executed"
        );
        Ok(SwapOutcome::new(amount_in, amount_out))
    }

    /// Quotes the spot price of `asset_a` denominated in `asset_b`,
    /// scaled by [`Price::SCALE`]: `reserve_b × 10^18 / reserve_a`.
    ///
    /// Read-only; mutates nothing.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if the pair is null or not distinct.
    /// - [`AmmError::InsufficientReserve`] if either reserve is empty,
    ///   with a distinct message naming which leg.
    pub fn quote_price(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Price> {
        let pair = AssetPair::new(asset_a, asset_b)?;
        let (reserve_a, reserve_b) = match self.pools.get(&pair) {
            Some(entry) => (
                self.ledger.balance_of(asset_a, entry.custody),
                self.ledger.balance_of(asset_b, entry.custody),
            ),
            None => (Amount::ZERO, Amount::ZERO),
        };
        if reserve_a.is_zero() {
            return Err(AmmError::InsufficientReserve("base asset reserve is empty"));
        }
        if reserve_b.is_zero() {
            return Err(AmmError::InsufficientReserve("quote asset reserve is empty"));
        }
        Price::from_reserves(reserve_b, reserve_a)
    }

    // -- internal -----------------------------------------------------------

    fn bootstrap_deposit(spec: &DepositSpec) -> Result<(Amount, Amount, Shares)> {
        let product = spec
            .amount_a_desired()
            .checked_mul(&spec.amount_b_desired())
            .ok_or(AmmError::Overflow("bootstrap share product overflow"))?;
        Ok((
            spec.amount_a_desired(),
            spec.amount_b_desired(),
            Shares::new(isqrt(product.get())),
        ))
    }

    fn proportional_deposit(
        spec: &DepositSpec,
        reserve_a: Amount,
        reserve_b: Amount,
        total: Shares,
    ) -> Result<(Amount, Amount, Shares)> {
        // A pool with any liquidity has positive reserves on both legs
        // and positive issued shares; anything else is a broken
        // invariant and must not reach the divisions below.
        if reserve_a.is_zero() || reserve_b.is_zero() || total.is_zero() {
            return Err(AmmError::DivisionByZero);
        }

        let amount_b_optimal = Amount::new(
            mul_div(
                spec.amount_a_desired().get(),
                reserve_b.get(),
                reserve_a.get(),
                Rounding::Down,
            )
            .ok_or(AmmError::Overflow("counterpart amount overflow"))?,
        );
        let (amount_a, amount_b) = if amount_b_optimal <= spec.amount_b_desired() {
            if amount_b_optimal < spec.amount_b_min() {
                return Err(AmmError::Slippage("amount B below minimum"));
            }
            (spec.amount_a_desired(), amount_b_optimal)
        } else {
            let amount_a_optimal = Amount::new(
                mul_div(
                    spec.amount_b_desired().get(),
                    reserve_a.get(),
                    reserve_b.get(),
                    Rounding::Down,
                )
                .ok_or(AmmError::Overflow("counterpart amount overflow"))?,
            );
            if amount_a_optimal < spec.amount_a_min() {
                return Err(AmmError::Slippage("amount A below minimum"));
            }
            (amount_a_optimal, spec.amount_b_desired())
        };

        let by_a = mul_div(amount_a.get(), total.get(), reserve_a.get(), Rounding::Down)
            .ok_or(AmmError::Overflow("share issuance overflow"))?;
        let by_b = mul_div(amount_b.get(), total.get(), reserve_b.get(), Rounding::Down)
            .ok_or(AmmError::Overflow("share issuance overflow"))?;
        Ok((amount_a, amount_b, Shares::new(by_a.min(by_b))))
    }

    fn require_balance(&self, asset: AssetId, owner: AccountId, need: Amount) -> Result<()> {
        let have = self.ledger.balance_of(asset, owner);
        if have < need {
            return Err(AmmError::Ledger(LedgerError::InsufficientBalance {
                have,
                need,
            }));
        }
        Ok(())
    }

    fn require_headroom(&self, asset: AssetId, owner: AccountId, add: Amount) -> Result<()> {
        if self
            .ledger
            .balance_of(asset, owner)
            .checked_add(&add)
            .is_none()
        {
            return Err(AmmError::Ledger(LedgerError::Overflow));
        }
        Ok(())
    }

    fn create_pool(&mut self, pair: AssetPair) -> Result<PoolEntry> {
        // Indices start at 1 so an allocated handle is never the null
        // sentinel.
        self.next_pool += 1;
        let entry = PoolEntry {
            custody: AccountId::from_bytes(handle_bytes(CUSTODY_TAG, self.next_pool)),
            share_asset: AssetId::from_bytes(handle_bytes(SHARE_TAG, self.next_pool)),
        };
        self.ledger.register_share_asset(&entry.authority())?;
        self.pools.insert(pair, entry);
        debug!(pool = self.next_pool, "pool initialized");
        Ok(entry)
    }
}

/// Builds an engine-allocated 32-byte handle: one tag byte plus a
/// big-endian pool index. Unique per engine instance.
fn handle_bytes(tag: u8, index: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[0] = tag;
    bytes[24..].copy_from_slice(&index.to_be_bytes());
    bytes
}
