//! Construction and invariants of splitter objects.

use crate::error::SplitterError;
use paysplit_operations::validation::validate_buyback;
use paysplit_operations::{OperationError, PaymentTargetType, SplitterCreateOp, SplitterUpdateOp};
use paysplit_store::SplitterObject;
use paysplit_types::{Asset, SplitterId};

/// Build a fresh splitter with a zero balance from a create operation.
pub fn from_create(id: SplitterId, op: &SplitterCreateOp) -> SplitterObject {
    SplitterObject {
        id,
        owner: op.owner,
        targets: op.targets.clone(),
        min_payment: op.min_payment,
        max_payment: op.max_payment,
        payout_threshold: op.payout_threshold,
        balance: Asset::zero(op.min_payment.asset_id),
    }
}

/// Apply an update wholesale: owner, targets and bounds are replaced, never merged.
///
/// Changing the asset is only allowed while the balance is empty.
pub fn apply_update(
    current: &SplitterObject,
    op: &SplitterUpdateOp,
) -> Result<SplitterObject, SplitterError> {
    let asset_id = op.min_payment.asset_id;
    if asset_id != current.asset_id() && current.balance.amount != 0 {
        return Err(SplitterError::AssetMismatch {
            expected: current.asset_id(),
            provided: asset_id,
        });
    }
    Ok(SplitterObject {
        id: current.id,
        owner: op.new_owner,
        targets: op.targets.clone(),
        min_payment: op.min_payment,
        max_payment: op.max_payment,
        payout_threshold: op.payout_threshold,
        balance: Asset::new(current.balance.amount, asset_id),
    })
}

/// Check everything that must hold for a stored splitter.
pub fn check_invariants(splitter: &SplitterObject) -> Result<(), SplitterError> {
    if splitter.min_payment.amount <= 0 {
        return Err(OperationError::NonPositiveMinPayment(splitter.min_payment.amount).into());
    }
    if splitter.min_payment.amount > splitter.max_payment {
        return Err(OperationError::MinAboveMax {
            min: splitter.min_payment.amount,
            max: splitter.max_payment,
        }
        .into());
    }
    if splitter.payout_threshold < 0 {
        return Err(OperationError::NegativeThreshold(splitter.payout_threshold).into());
    }
    if splitter.targets.is_empty() {
        return Err(OperationError::EmptyTargets.into());
    }
    for (index, target) in splitter.targets.iter().enumerate() {
        if target.weight == 0 {
            return Err(OperationError::ZeroWeight { index }.into());
        }
        match &target.target {
            PaymentTargetType::Account(_) => {}
            PaymentTargetType::MarketBuyback(buyback) => {
                validate_buyback(index, buyback, splitter.asset_id())?
            }
        }
    }
    if splitter.balance.asset_id != splitter.asset_id() {
        return Err(SplitterError::AssetMismatch {
            expected: splitter.asset_id(),
            provided: splitter.balance.asset_id,
        });
    }
    if splitter.balance.amount < 0 {
        return Err(SplitterError::Overflow);
    }
    Ok(())
}
