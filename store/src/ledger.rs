//! The `Ledger` trait: every store a splitter touches, behind one handle.

use crate::{AccountStore, OrderBook, SplitterStore, StoreError};
use paysplit_types::{AssetId, ShareAmount};
use std::collections::BTreeMap;

/// The ledger as seen by the splitter engine.
///
/// Implementors expose the splitter object store plus the account and market
/// subsystems that payouts are dispatched into.
pub trait Ledger {
    type Splitters: SplitterStore;
    type Accounts: AccountStore;
    type Orders: OrderBook;

    fn splitter_store(&self) -> &Self::Splitters;
    fn account_store(&self) -> &Self::Accounts;
    fn order_book(&self) -> &Self::Orders;

    /// Splitter summary statistics.
    fn summary(&self) -> Result<LedgerSummary, StoreError> {
        let splitters = self.splitter_store().iter_splitters()?;
        let mut held = BTreeMap::new();
        for s in &splitters {
            if s.balance.amount > 0 {
                let total: &mut ShareAmount = held.entry(s.balance.asset_id).or_insert(0);
                *total = total.checked_add(s.balance.amount).ok_or_else(|| {
                    StoreError::Backend(format!("held {} overflows", s.balance.asset_id))
                })?;
            }
        }
        Ok(LedgerSummary {
            splitters: splitters.len() as u64,
            held,
        })
    }
}

/// Summary statistics for the splitters on a ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub splitters: u64,
    /// Undistributed funds per asset.
    pub held: BTreeMap<AssetId, ShareAmount>,
}
