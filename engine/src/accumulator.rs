//! Payment accumulator: takes payments in and triggers automatic payouts.

use crate::error::SplitterError;
use crate::payout::{PayoutEngine, PayoutReport};
use crate::registry::SplitterRegistry;
use crate::undo::UndoLog;
use paysplit_operations::validation::validate_pay;
use paysplit_operations::{OperationError, SplitterPayOp};
use paysplit_store::Ledger;
use paysplit_types::{Asset, ShareAmount};
use serde::{Deserialize, Serialize};

/// What happened to the automatic payout after a payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoPayout {
    /// The threshold was not reached, or is disabled.
    NotTriggered,
    Completed(PayoutReport),
    /// The threshold was reached but the payout failed; funds stay accumulated.
    Deferred { reason: String },
}

/// Outcome of a successful payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayOutcome {
    /// Balance after the payment and any payout.
    pub balance: Asset,
    pub payout: AutoPayout,
}

pub struct PaymentAccumulator<'a, L: Ledger> {
    ledger: &'a L,
    /// Deducted from the splitter's own funds on an automatic payout.
    auto_payout_fee: ShareAmount,
}

impl<'a, L: Ledger> PaymentAccumulator<'a, L> {
    pub fn new(ledger: &'a L, auto_payout_fee: ShareAmount) -> Self {
        Self {
            ledger,
            auto_payout_fee,
        }
    }

    /// Move `op.payment` from the paying account into the splitter, then pay
    /// out automatically if the threshold is reached.
    pub fn pay(&self, op: &SplitterPayOp) -> Result<PayOutcome, SplitterError> {
        validate_pay(op)?;
        let registry = SplitterRegistry::new(self.ledger);
        let current = registry.get(&op.splitter_id)?;

        if op.payment.asset_id != current.asset_id() {
            return Err(SplitterError::AssetMismatch {
                expected: current.asset_id(),
                provided: op.payment.asset_id,
            });
        }
        let amount = op.payment.amount;
        if amount < current.min_payment.amount || amount > current.max_payment {
            return Err(OperationError::PaymentOutOfRange {
                amount,
                min: current.min_payment.amount,
                max: current.max_payment,
            }
            .into());
        }

        let mut funded = current.clone();
        funded.balance = current
            .balance
            .checked_add(op.payment)
            .ok_or(SplitterError::Overflow)?;

        let mut undo = UndoLog::new();
        let debit = Asset::new(-amount, op.payment.asset_id);
        undo.adjust_balance(self.ledger, &op.paying_account, debit)?;
        if let Err(e) = undo.put_splitter(self.ledger, &current, &funded) {
            if let Err(revert) = undo.rollback(self.ledger) {
                tracing::error!(error = %revert, splitter = %current.id, "pay rollback incomplete");
            }
            return Err(e.into());
        }
        undo.commit();
        tracing::debug!(
            splitter = %funded.id,
            from = %op.paying_account,
            amount,
            balance = funded.balance.amount,
            "payment accepted"
        );

        if !funded.threshold_reached() {
            return Ok(PayOutcome {
                balance: funded.balance,
                payout: AutoPayout::NotTriggered,
            });
        }

        match PayoutEngine::new(self.ledger).distribute(&funded, self.auto_payout_fee) {
            Ok(report) => Ok(PayOutcome {
                balance: Asset::zero(funded.asset_id()),
                payout: AutoPayout::Completed(report),
            }),
            Err(e) => {
                tracing::warn!(
                    splitter = %funded.id,
                    error = %e,
                    balance = funded.balance.amount,
                    "automatic payout failed, keeping funds"
                );
                Ok(PayOutcome {
                    balance: funded.balance,
                    payout: AutoPayout::Deferred {
                        reason: e.to_string(),
                    },
                })
            }
        }
    }
}
