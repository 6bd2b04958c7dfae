//! Nullable ledger: the in-memory stores behind the `Ledger` trait.

use crate::{NullAccounts, NullOrderBook, NullSplitterStore};
use paysplit_store::Ledger;
use paysplit_types::{AccountId, Asset};

#[derive(Default)]
pub struct NullLedger {
    pub splitters: NullSplitterStore,
    pub accounts: NullAccounts,
    pub orders: NullOrderBook,
}

impl NullLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper: open `account` holding `amount`.
    pub fn with_account(self, account: AccountId, amount: Asset) -> Self {
        self.accounts.set_balance(account, amount);
        self
    }

    /// Builder helper: open an empty account.
    pub fn with_empty_account(self, account: AccountId) -> Self {
        self.accounts.open(account);
        self
    }
}

impl Ledger for NullLedger {
    type Splitters = NullSplitterStore;
    type Accounts = NullAccounts;
    type Orders = NullOrderBook;

    fn splitter_store(&self) -> &Self::Splitters {
        &self.splitters
    }

    fn account_store(&self) -> &Self::Accounts {
        &self.accounts
    }

    fn order_book(&self) -> &Self::Orders {
        &self.orders
    }
}
