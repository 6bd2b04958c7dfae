//! Payout engine: distributes a splitter's balance to its targets.
//!
//! A payout is all-or-nothing: either every share is credited or ordered, the
//! fee is collected and the balance is reset to zero, or no store changes at all.

use crate::apportion::apportion;
use crate::error::SplitterError;
use crate::registry::{authorize, SplitterRegistry};
use crate::undo::UndoLog;
use paysplit_operations::validation::validate_payout;
use paysplit_operations::{PaymentTargetType, SplitterPayoutOp};
use paysplit_store::{AccountStore, Ledger, LimitOrder, SplitterObject, StoreError};
use paysplit_types::{Asset, OrderId, ShareAmount, SplitterId};
use serde::{Deserialize, Serialize};

/// What one target received in a payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDispatch {
    pub target: PaymentTargetType,
    pub amount: ShareAmount,
    /// Set for market buyback targets that received a non-zero share.
    pub order: Option<OrderId>,
}

/// Result of a completed payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutReport {
    pub splitter: SplitterId,
    /// Deducted from the balance before distribution.
    pub fee: Asset,
    /// Balance minus fee; equals the sum of all shares.
    pub distributed: Asset,
    /// One entry per target, in target order.
    pub shares: Vec<ShareDispatch>,
}

pub struct PayoutEngine<'a, L: Ledger> {
    ledger: &'a L,
}

impl<'a, L: Ledger> PayoutEngine<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Owner-requested payout. The owner pays the operation fee separately,
    /// so nothing is deducted from the balance.
    pub fn payout(&self, op: &SplitterPayoutOp) -> Result<PayoutReport, SplitterError> {
        validate_payout(op)?;
        let splitter = SplitterRegistry::new(self.ledger).get(&op.splitter_id)?;
        authorize(&splitter, &op.owner)?;
        self.distribute(&splitter, 0)
    }

    /// Distribute `splitter`'s balance minus `fee` across its targets.
    ///
    /// On success the stored splitter's balance is zero. On any error every
    /// store is left exactly as it was.
    pub fn distribute(
        &self,
        splitter: &SplitterObject,
        fee: ShareAmount,
    ) -> Result<PayoutReport, SplitterError> {
        let (report, undo) = self.execute(splitter, fee)?;
        undo.commit();
        Ok(report)
    }

    /// Perform a payout and hand back its undo log so the caller can revert it
    /// if a later step of the same operation fails.
    pub(crate) fn execute(
        &self,
        splitter: &SplitterObject,
        fee: ShareAmount,
    ) -> Result<(PayoutReport, UndoLog), SplitterError> {
        let asset_id = splitter.asset_id();
        if fee < 0 {
            return Err(SplitterError::Overflow);
        }
        let remaining = splitter
            .balance
            .checked_sub(Asset::new(fee, asset_id))
            .ok_or(SplitterError::Overflow)?
            .amount;
        if remaining < 0 {
            return Err(SplitterError::InsufficientFunds {
                balance: splitter.balance.amount,
                fee,
            });
        }

        let weights: Vec<u16> = splitter.targets.iter().map(|t| t.weight).collect();
        let amounts = apportion(remaining, &weights)?;
        debug_assert_eq!(amounts.iter().sum::<ShareAmount>(), remaining);

        self.check_targets(splitter)?;

        let mut undo = UndoLog::new();
        match self.dispatch_all(splitter, &amounts, &mut undo) {
            Ok(shares) => {
                let finish = self.finish(splitter, fee, &mut undo);
                if let Err(e) = finish {
                    self.abort(undo);
                    return Err(e.into());
                }
                tracing::info!(
                    splitter = %splitter.id,
                    fee,
                    distributed = remaining,
                    targets = shares.len(),
                    "payout complete"
                );
                let report = PayoutReport {
                    splitter: splitter.id,
                    fee: Asset::new(fee, asset_id),
                    distributed: Asset::new(remaining, asset_id),
                    shares,
                };
                Ok((report, undo))
            }
            Err(e) => {
                self.abort(undo);
                Err(e)
            }
        }
    }

    /// Every account target must still exist, whatever its share.
    fn check_targets(&self, splitter: &SplitterObject) -> Result<(), SplitterError> {
        for (index, target) in splitter.targets.iter().enumerate() {
            if let PaymentTargetType::Account(account) = &target.target {
                if !self.ledger.account_store().account_exists(account)? {
                    return Err(SplitterError::TargetDispatch {
                        index,
                        target: target.target.to_string(),
                        reason: "account does not exist".into(),
                    });
                }
            }
        }
        Ok(())
    }

    fn dispatch_all(
        &self,
        splitter: &SplitterObject,
        amounts: &[ShareAmount],
        undo: &mut UndoLog,
    ) -> Result<Vec<ShareDispatch>, SplitterError> {
        let asset_id = splitter.asset_id();
        let mut shares = Vec::with_capacity(amounts.len());
        for (index, (target, &amount)) in splitter.targets.iter().zip(amounts).enumerate() {
            let dispatch_error = |e: StoreError| SplitterError::TargetDispatch {
                index,
                target: target.target.to_string(),
                reason: e.to_string(),
            };
            let share = Asset::new(amount, asset_id);
            let order = if share.is_zero() {
                None
            } else {
                match &target.target {
                    PaymentTargetType::Account(account) => {
                        undo.adjust_balance(self.ledger, account, share)
                            .map_err(dispatch_error)?;
                        None
                    }
                    PaymentTargetType::MarketBuyback(buyback) => {
                        let order = LimitOrder {
                            seller: splitter.owner,
                            funded_by: splitter.id,
                            amount_to_sell: share,
                            limit_price: buyback.limit_price,
                        };
                        Some(undo.place_order(self.ledger, &order).map_err(dispatch_error)?)
                    }
                }
            };
            tracing::debug!(
                splitter = %splitter.id,
                index,
                target = %target.target,
                amount,
                "share dispatched"
            );
            shares.push(ShareDispatch {
                target: target.target,
                amount,
                order,
            });
        }
        Ok(shares)
    }

    /// Reset the balance and collect the fee.
    fn finish(
        &self,
        splitter: &SplitterObject,
        fee: ShareAmount,
        undo: &mut UndoLog,
    ) -> Result<(), StoreError> {
        let mut emptied = splitter.clone();
        emptied.balance = Asset::zero(splitter.asset_id());
        undo.put_splitter(self.ledger, splitter, &emptied)?;
        if fee > 0 {
            undo.accumulate_fee(self.ledger, Asset::new(fee, splitter.asset_id()))?;
        }
        Ok(())
    }

    fn abort(&self, undo: UndoLog) {
        let writes = undo.len();
        if let Err(e) = undo.rollback(self.ledger) {
            tracing::error!(error = %e, writes, "payout rollback incomplete");
        }
    }
}
