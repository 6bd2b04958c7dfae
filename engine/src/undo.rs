//! Undo log for multi-store writes.
//!
//! The stores offer no cross-store transaction, so every write made while
//! applying an operation is recorded here. If a later step fails, the recorded
//! writes are reverted newest-first, leaving all stores as they were.

use paysplit_store::{
    AccountStore, Ledger, LimitOrder, OrderBook, SplitterObject, SplitterStore, StoreError,
};
use paysplit_types::{AccountId, Asset, OrderId};

/// One reversible write.
#[derive(Clone, Debug)]
enum Undo {
    /// `delta` was added to the account's balance.
    Balance { account: AccountId, delta: Asset },
    /// An order was placed.
    Order(OrderId),
    /// A splitter was overwritten; holds the previous version.
    Splitter(SplitterObject),
    /// A fee was moved into the fee pool.
    Fee(Asset),
}

#[derive(Debug, Default)]
#[must_use = "an undo log must be either committed or rolled back"]
pub struct UndoLog {
    entries: Vec<Undo>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn adjust_balance<L: Ledger>(
        &mut self,
        ledger: &L,
        account: &AccountId,
        delta: Asset,
    ) -> Result<(), StoreError> {
        ledger.account_store().adjust_balance(account, &delta)?;
        self.entries.push(Undo::Balance {
            account: *account,
            delta,
        });
        Ok(())
    }

    pub fn place_order<L: Ledger>(
        &mut self,
        ledger: &L,
        order: &LimitOrder,
    ) -> Result<OrderId, StoreError> {
        let id = ledger.order_book().place_limit_order(order)?;
        self.entries.push(Undo::Order(id));
        Ok(id)
    }

    /// Overwrite a splitter; `previous` is restored on rollback.
    pub fn put_splitter<L: Ledger>(
        &mut self,
        ledger: &L,
        previous: &SplitterObject,
        next: &SplitterObject,
    ) -> Result<(), StoreError> {
        ledger.splitter_store().put_splitter(next)?;
        self.entries.push(Undo::Splitter(previous.clone()));
        Ok(())
    }

    pub fn accumulate_fee<L: Ledger>(&mut self, ledger: &L, fee: Asset) -> Result<(), StoreError> {
        ledger.account_store().accumulate_fee(&fee)?;
        self.entries.push(Undo::Fee(fee));
        Ok(())
    }

    /// Keep all recorded writes.
    pub fn commit(self) {}

    /// Revert all recorded writes, newest first.
    ///
    /// A failing revert is logged and the remaining entries are still
    /// attempted; the first failure is returned.
    pub fn rollback<L: Ledger>(self, ledger: &L) -> Result<(), StoreError> {
        let mut first_error = None;
        for entry in self.entries.into_iter().rev() {
            let result = match &entry {
                Undo::Balance { account, delta } => ledger
                    .account_store()
                    .adjust_balance(account, &Asset::new(delta.amount.saturating_neg(), delta.asset_id)),
                Undo::Order(id) => ledger.order_book().cancel_order(id).map(|_| ()),
                Undo::Splitter(previous) => ledger.splitter_store().put_splitter(previous),
                Undo::Fee(fee) => ledger
                    .account_store()
                    .accumulate_fee(&Asset::new(fee.amount.saturating_neg(), fee.asset_id)),
            };
            if let Err(e) = result {
                tracing::error!(error = %e, ?entry, "failed to revert write during rollback");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
