//! Account balance storage trait.

use crate::StoreError;
use paysplit_types::{AccountId, Asset, AssetId, ShareAmount};

/// Account balances held by the ledger.
pub trait AccountStore {
    fn account_exists(&self, account: &AccountId) -> Result<bool, StoreError>;

    /// Balance of `account` in `asset`; zero if it never held any.
    fn balance(&self, account: &AccountId, asset: &AssetId) -> Result<ShareAmount, StoreError>;

    /// Add `delta` (which may be negative) to the account's balance.
    ///
    /// Fails with `NotFound` for an unknown account and `Rejected` if the
    /// balance would drop below zero; on failure nothing changes.
    fn adjust_balance(&self, account: &AccountId, delta: &Asset) -> Result<(), StoreError>;

    /// Move `fee` into the chain's accumulated fee pool for its asset.
    fn accumulate_fee(&self, fee: &Asset) -> Result<(), StoreError>;
}
