//! Operation evaluator: applies operations to the ledger in order.

use crate::accumulator::{PayOutcome, PaymentAccumulator};
use crate::error::SplitterError;
use crate::payout::{PayoutEngine, PayoutReport};
use crate::registry::SplitterRegistry;
use paysplit_operations::Operation;
use paysplit_store::{Ledger, SplitterObject};
use paysplit_types::{AccountId, ChainParams, ShareAmount, SplitterId};
use serde::{Deserialize, Serialize};

/// Effect of one applied operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationResult {
    Created(SplitterId),
    Updated(SplitterObject),
    Paid(PayOutcome),
    PaidOut(PayoutReport),
    Deleted { final_payout: Option<PayoutReport> },
}

/// An operation that has been applied, with its fee details for the fee pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedOperation {
    pub fee_payer: AccountId,
    pub required_fee: ShareAmount,
    pub result: OperationResult,
}

pub struct OperationEvaluator<'a, L: Ledger> {
    ledger: &'a L,
    params: &'a ChainParams,
}

impl<'a, L: Ledger> OperationEvaluator<'a, L> {
    pub fn new(ledger: &'a L, params: &'a ChainParams) -> Self {
        Self { ledger, params }
    }

    /// Apply one operation. Either all of its effects are stored, including any
    /// payout it triggers, or none are.
    pub fn apply(&self, op: &Operation) -> Result<AppliedOperation, SplitterError> {
        let span = tracing::debug_span!("apply", op = op.name(), fee_payer = %op.fee_payer());
        let _enter = span.enter();

        op.validate()?;
        let required_fee = op.check_fee(&self.params.fees)?;

        let result = match op {
            Operation::Create(op) => {
                OperationResult::Created(SplitterRegistry::new(self.ledger).create(op)?)
            }
            Operation::Update(op) => {
                OperationResult::Updated(SplitterRegistry::new(self.ledger).update(op)?)
            }
            Operation::Pay(op) => OperationResult::Paid(
                PaymentAccumulator::new(self.ledger, self.params.auto_payout_fee).pay(op)?,
            ),
            Operation::Payout(op) => {
                OperationResult::PaidOut(PayoutEngine::new(self.ledger).payout(op)?)
            }
            Operation::Delete(op) => OperationResult::Deleted {
                final_payout: SplitterRegistry::new(self.ledger).delete(op)?,
            },
        };

        Ok(AppliedOperation {
            fee_payer: op.fee_payer(),
            required_fee,
            result,
        })
    }

    /// Apply operations strictly in order. A failed operation changes nothing
    /// and does not stop the ones after it.
    pub fn apply_all<'o>(
        &self,
        ops: impl IntoIterator<Item = &'o Operation>,
    ) -> Vec<Result<AppliedOperation, SplitterError>> {
        ops.into_iter()
            .map(|op| {
                let result = self.apply(op);
                if let Err(e) = &result {
                    tracing::debug!(op = op.name(), error = %e, "operation rejected");
                }
                result
            })
            .collect()
    }
}
