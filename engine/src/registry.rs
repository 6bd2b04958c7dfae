//! Splitter lifecycle: create, update, delete and lookup.

use crate::error::SplitterError;
use crate::object::{apply_update, check_invariants, from_create};
use crate::payout::{PayoutEngine, PayoutReport};
use paysplit_operations::validation::{validate_create, validate_delete, validate_update};
use paysplit_operations::{SplitterCreateOp, SplitterDeleteOp, SplitterUpdateOp};
use paysplit_store::{Ledger, SplitterObject, SplitterStore, StoreError};
use paysplit_types::{AccountId, SplitterId};

pub struct SplitterRegistry<'a, L: Ledger> {
    ledger: &'a L,
}

impl<'a, L: Ledger> SplitterRegistry<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Load a splitter, mapping a missing id to `NotFound`.
    pub fn get(&self, id: &SplitterId) -> Result<SplitterObject, SplitterError> {
        match self.ledger.splitter_store().get_splitter(id) {
            Ok(s) => Ok(s),
            Err(StoreError::NotFound(_)) => Err(SplitterError::NotFound(*id)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn splitters_by_owner(&self, owner: &AccountId) -> Result<Vec<SplitterObject>, SplitterError> {
        Ok(self.ledger.splitter_store().splitters_by_owner(owner)?)
    }

    /// Create a splitter with an empty balance. `op.payer` may differ from `op.owner`.
    pub fn create(&self, op: &SplitterCreateOp) -> Result<SplitterId, SplitterError> {
        validate_create(op)?;
        let store = self.ledger.splitter_store();
        let id = store.next_splitter_id()?;
        let splitter = from_create(id, op);
        check_invariants(&splitter)?;
        store.put_splitter(&splitter)?;
        tracing::info!(
            splitter = %id,
            owner = %op.owner,
            payer = %op.payer,
            asset = %splitter.asset_id(),
            targets = splitter.targets.len(),
            "splitter created"
        );
        Ok(id)
    }

    /// Replace owner, targets and bounds. Only the current owner may do this.
    pub fn update(&self, op: &SplitterUpdateOp) -> Result<SplitterObject, SplitterError> {
        validate_update(op)?;
        let current = self.get(&op.splitter_id)?;
        authorize(&current, &op.owner)?;
        let updated = apply_update(&current, op)?;
        check_invariants(&updated)?;
        self.ledger.splitter_store().put_splitter(&updated)?;
        tracing::info!(
            splitter = %updated.id,
            owner = %updated.owner,
            targets = updated.targets.len(),
            "splitter updated"
        );
        Ok(updated)
    }

    /// Remove a splitter. Remaining funds are first paid out with no fee
    /// deducted; if that payout fails the splitter is kept unchanged.
    pub fn delete(&self, op: &SplitterDeleteOp) -> Result<Option<PayoutReport>, SplitterError> {
        validate_delete(op)?;
        let current = self.get(&op.splitter_id)?;
        authorize(&current, &op.owner)?;

        let store = self.ledger.splitter_store();
        if current.balance.amount == 0 {
            store.delete_splitter(&current.id)?;
            tracing::info!(splitter = %current.id, "splitter deleted");
            return Ok(None);
        }

        let (report, undo) = PayoutEngine::new(self.ledger).execute(&current, 0)?;
        if let Err(e) = store.delete_splitter(&current.id) {
            if let Err(revert) = undo.rollback(self.ledger) {
                tracing::error!(error = %revert, splitter = %current.id, "delete rollback incomplete");
            }
            return Err(e.into());
        }
        undo.commit();
        tracing::info!(
            splitter = %current.id,
            distributed = report.distributed.amount,
            "splitter deleted after final payout"
        );
        Ok(Some(report))
    }
}

/// Fail unless `caller` owns `splitter`.
pub fn authorize(splitter: &SplitterObject, caller: &AccountId) -> Result<(), SplitterError> {
    if splitter.owner != *caller {
        return Err(SplitterError::Authorization {
            splitter: splitter.id,
            owner: splitter.owner,
            caller: *caller,
        });
    }
    Ok(())
}
