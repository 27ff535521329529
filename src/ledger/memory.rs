//! In-memory reference ledger.

use std::collections::HashMap;

use tracing::trace;

use super::{BalanceLedger, LedgerError, MintAuthority};
use crate::domain::{AccountId, Amount, AssetId};

/// A `HashMap`-backed [`BalanceLedger`] holding balances, issued-supply
/// counters, and share-asset authority registrations.
///
/// This is the reference collaborator used by the test suite and by
/// callers that want a self-contained engine. It enforces the full
/// ledger contract: transfers check the debited balance, mint and burn
/// verify the registered [`MintAuthority`], and every call either
/// applies completely or changes nothing.
///
/// # Examples
///
/// ```
/// use puddle_amm::domain::{AccountId, Amount, AssetId};
/// use puddle_amm::ledger::{BalanceLedger, InMemoryLedger};
///
/// let mut ledger = InMemoryLedger::new();
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let bob = AccountId::from_bytes([11u8; 32]);
///
/// ledger.credit(gold, alice, Amount::new(100));
/// ledger.transfer(gold, alice, bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance_of(gold, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), Amount>,
    issued: HashMap<AssetId, Amount>,
    authorities: HashMap<AssetId, AccountId>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `owner` out of thin air.
    ///
    /// Test and bootstrap convenience; the administrative minting of
    /// underlying assets is outside the pool engine's scope. Saturates
    /// at `u128::MAX` rather than failing.
    pub fn credit(&mut self, asset: AssetId, owner: AccountId, amount: Amount) {
        let entry = self.balances.entry((asset, owner)).or_insert(Amount::ZERO);
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    fn registered_holder(&self, asset: AssetId) -> Result<AccountId, LedgerError> {
        self.authorities
            .get(&asset)
            .copied()
            .ok_or(LedgerError::UnknownShareAsset)
    }

    fn debit_balance(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(asset, owner);
        let remaining = have
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance { have, need: amount })?;
        if remaining.is_zero() {
            self.balances.remove(&(asset, owner));
        } else {
            self.balances.insert((asset, owner), remaining);
        }
        Ok(())
    }

    fn credit_balance(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(asset, owner);
        let updated = have.checked_add(&amount).ok_or(LedgerError::Overflow)?;
        self.balances.insert((asset, owner), updated);
        Ok(())
    }
}

impl BalanceLedger for InMemoryLedger {
    fn balance_of(&self, asset: AssetId, owner: AccountId) -> Amount {
        self.balances
            .get(&(asset, owner))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        // Check the credit side first so a failed transfer leaves both
        // balances untouched.
        let to_balance = self.balance_of(asset, to);
        if from != to && to_balance.checked_add(&amount).is_none() {
            return Err(LedgerError::Overflow);
        }
        self.debit_balance(asset, from, amount)?;
        self.credit_balance(asset, to, amount)?;
        trace!(amount = amount.get(), "ledger transfer applied");
        Ok(())
    }

    fn register_share_asset(&mut self, authority: &MintAuthority) -> Result<(), LedgerError> {
        if self.authorities.contains_key(&authority.asset()) {
            return Err(LedgerError::AlreadyRegistered);
        }
        self.authorities
            .insert(authority.asset(), authority.holder());
        Ok(())
    }

    fn mint(
        &mut self,
        authority: &MintAuthority,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let holder = self.registered_holder(authority.asset())?;
        if holder != authority.holder() {
            return Err(LedgerError::NotAuthorized);
        }
        let supply = self.total_issued(authority.asset());
        let grown = supply.checked_add(&amount).ok_or(LedgerError::Overflow)?;
        self.credit_balance(authority.asset(), to, amount)?;
        self.issued.insert(authority.asset(), grown);
        trace!(amount = amount.get(), "share mint applied");
        Ok(())
    }

    fn burn(
        &mut self,
        authority: &MintAuthority,
        from: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let holder = self.registered_holder(authority.asset())?;
        if holder != authority.holder() {
            return Err(LedgerError::NotAuthorized);
        }
        let supply = self.total_issued(authority.asset());
        let shrunk = supply
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                have: supply,
                need: amount,
            })?;
        self.debit_balance(authority.asset(), from, amount)?;
        self.issued.insert(authority.asset(), shrunk);
        trace!(amount = amount.get(), "share burn applied");
        Ok(())
    }

    fn total_issued(&self, asset: AssetId) -> Amount {
        self.issued.get(&asset).copied().unwrap_or(Amount::ZERO)
    }
}
