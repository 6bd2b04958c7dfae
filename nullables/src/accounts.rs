//! Nullable account balances.

use crate::lock;
use paysplit_store::{AccountStore, StoreError};
use paysplit_types::{AccountId, Asset, AssetId, ShareAmount};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

/// In-memory account balances plus a fee pool.
#[derive(Default)]
pub struct NullAccounts {
    balances: Mutex<BTreeMap<AccountId, BTreeMap<AssetId, ShareAmount>>>,
    fee_pool: Mutex<BTreeMap<AssetId, ShareAmount>>,
    rejected_credits: Mutex<BTreeSet<AccountId>>,
    reject_fees: Mutex<bool>,
}

impl NullAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account with no balances.
    pub fn open(&self, account: AccountId) {
        lock(&self.balances).entry(account).or_default();
    }

    /// Remove an account and everything it holds.
    pub fn close(&self, account: &AccountId) {
        lock(&self.balances).remove(account);
    }

    /// Set an account's balance, opening the account if needed.
    pub fn set_balance(&self, account: AccountId, amount: Asset) {
        lock(&self.balances)
            .entry(account)
            .or_default()
            .insert(amount.asset_id, amount.amount);
    }

    /// Make positive adjustments to `account` fail while it stays listed.
    pub fn reject_credits_to(&self, account: AccountId) {
        lock(&self.rejected_credits).insert(account);
    }

    pub fn reject_fees(&self, reject: bool) {
        *lock(&self.reject_fees) = reject;
    }

    /// Fees collected so far in `asset`.
    pub fn fee_pool(&self, asset: &AssetId) -> ShareAmount {
        lock(&self.fee_pool).get(asset).copied().unwrap_or(0)
    }
}

impl AccountStore for NullAccounts {
    fn account_exists(&self, account: &AccountId) -> Result<bool, StoreError> {
        Ok(lock(&self.balances).contains_key(account))
    }

    fn balance(&self, account: &AccountId, asset: &AssetId) -> Result<ShareAmount, StoreError> {
        lock(&self.balances)
            .get(account)
            .map(|held| held.get(asset).copied().unwrap_or(0))
            .ok_or_else(|| StoreError::NotFound(account.to_string()))
    }

    fn adjust_balance(&self, account: &AccountId, delta: &Asset) -> Result<(), StoreError> {
        if delta.amount > 0 && lock(&self.rejected_credits).contains(account) {
            return Err(StoreError::Rejected(format!("credits to {account} are blocked")));
        }
        let mut balances = lock(&self.balances);
        let held = balances
            .get_mut(account)
            .ok_or_else(|| StoreError::NotFound(account.to_string()))?;
        let current = held.get(&delta.asset_id).copied().unwrap_or(0);
        let next = current
            .checked_add(delta.amount)
            .ok_or_else(|| StoreError::Rejected("balance overflow".into()))?;
        if next < 0 {
            return Err(StoreError::Rejected(format!(
                "{account} holds {current} of {}, cannot remove {}",
                delta.asset_id, -delta.amount
            )));
        }
        held.insert(delta.asset_id, next);
        Ok(())
    }

    fn accumulate_fee(&self, fee: &Asset) -> Result<(), StoreError> {
        if *lock(&self.reject_fees) {
            return Err(StoreError::Backend("fee pool unavailable".into()));
        }
        let mut pool = lock(&self.fee_pool);
        let collected = pool.entry(fee.asset_id).or_insert(0);
        *collected = collected
            .checked_add(fee.amount)
            .ok_or_else(|| StoreError::Rejected("fee pool overflow".into()))?;
        Ok(())
    }
}
