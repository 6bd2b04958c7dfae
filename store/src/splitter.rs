//! Splitter object storage.

use crate::StoreError;
use paysplit_operations::PaymentTarget;
use paysplit_types::{AccountId, Asset, AssetId, ShareAmount, SplitterId};
use serde::{Deserialize, Serialize};

/// Persistent state of one payment splitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterObject {
    pub id: SplitterId,
    /// Authorizes update, payout and delete.
    pub owner: AccountId,
    /// Order matters: it breaks ties when distributing remainders.
    pub targets: Vec<PaymentTarget>,
    /// Also fixes the asset the splitter accepts and pays out in.
    pub min_payment: Asset,
    pub max_payment: ShareAmount,
    /// Zero disables automatic payouts.
    pub payout_threshold: ShareAmount,
    pub balance: Asset,
}

impl SplitterObject {
    /// The single asset this splitter accepts and pays out.
    pub fn asset_id(&self) -> AssetId {
        self.min_payment.asset_id
    }

    /// Sum of all target weights.
    pub fn total_weight(&self) -> u32 {
        self.targets.iter().map(|t| u32::from(t.weight)).sum()
    }

    /// Whether the current balance has reached an enabled payout threshold.
    pub fn threshold_reached(&self) -> bool {
        self.payout_threshold > 0 && self.balance.amount >= self.payout_threshold
    }
}

/// Trait for splitter object storage.
pub trait SplitterStore {
    fn get_splitter(&self, id: &SplitterId) -> Result<SplitterObject, StoreError>;

    /// Insert or overwrite.
    fn put_splitter(&self, splitter: &SplitterObject) -> Result<(), StoreError>;

    fn delete_splitter(&self, id: &SplitterId) -> Result<(), StoreError>;

    fn splitter_exists(&self, id: &SplitterId) -> Result<bool, StoreError>;

    /// Id the next created splitter will take. Only a successful `put_splitter`
    /// with that id advances it, and ids are never reused.
    fn next_splitter_id(&self) -> Result<SplitterId, StoreError>;

    fn iter_splitters(&self) -> Result<Vec<SplitterObject>, StoreError>;

    /// All splitters owned by `owner`, in id order.
    fn splitters_by_owner(&self, owner: &AccountId) -> Result<Vec<SplitterObject>, StoreError> {
        let mut owned: Vec<_> = self
            .iter_splitters()?
            .into_iter()
            .filter(|s| s.owner == *owner)
            .collect();
        owned.sort_by_key(|s| s.id);
        Ok(owned)
    }
}
