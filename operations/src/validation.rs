//! Stateless operation validation.
//!
//! These checks look only at the operation's own fields. Checks that need the
//! stored splitter (ownership, configured asset, balance) are done by the engine.

use crate::create::SplitterCreateOp;
use crate::error::OperationError;
use crate::payout::{SplitterDeleteOp, SplitterPayoutOp};
use crate::pay::SplitterPayOp;
use crate::target::{MarketBuyback, PaymentTarget, PaymentTargetType};
use crate::update::SplitterUpdateOp;
use crate::Operation;
use paysplit_types::{Asset, AssetId, ShareAmount};

/// Validate any splitter operation.
pub fn validate_operation(op: &Operation) -> Result<(), OperationError> {
    match op {
        Operation::Create(op) => validate_create(op),
        Operation::Update(op) => validate_update(op),
        Operation::Pay(op) => validate_pay(op),
        Operation::Payout(op) => validate_payout(op),
        Operation::Delete(op) => validate_delete(op),
    }
}

/// Validate a create operation, including every market buyback's price.
pub fn validate_create(op: &SplitterCreateOp) -> Result<(), OperationError> {
    validate_fee(&op.fee)?;
    validate_bounds(&op.min_payment, op.max_payment, op.payout_threshold)?;
    if op.targets.is_empty() {
        return Err(OperationError::EmptyTargets);
    }
    for (index, target) in op.targets.iter().enumerate() {
        validate_weight(index, target)?;
        match &target.target {
            PaymentTargetType::Account(_) => {}
            PaymentTargetType::MarketBuyback(buyback) => {
                validate_buyback(index, buyback, op.min_payment.asset_id)?
            }
        }
    }
    Ok(())
}

/// Validate an update operation.
///
/// Only target weights are checked here; market buyback prices are not. The
/// engine re-checks the full object invariants before storing the update.
pub fn validate_update(op: &SplitterUpdateOp) -> Result<(), OperationError> {
    validate_fee(&op.fee)?;
    validate_bounds(&op.min_payment, op.max_payment, op.payout_threshold)?;
    if op.targets.is_empty() {
        return Err(OperationError::EmptyTargets);
    }
    for (index, target) in op.targets.iter().enumerate() {
        validate_weight(index, target)?;
    }
    Ok(())
}

pub fn validate_pay(op: &SplitterPayOp) -> Result<(), OperationError> {
    if op.payment.amount <= 0 {
        return Err(OperationError::NonPositivePayment(op.payment.amount));
    }
    validate_fee(&op.fee)
}

pub fn validate_payout(op: &SplitterPayoutOp) -> Result<(), OperationError> {
    validate_fee(&op.fee)
}

pub fn validate_delete(op: &SplitterDeleteOp) -> Result<(), OperationError> {
    validate_fee(&op.fee)
}

/// A market buyback must carry a well-formed price that sells the splitter's
/// asset for the asset it buys.
pub fn validate_buyback(
    index: usize,
    buyback: &MarketBuyback,
    splitter_asset: AssetId,
) -> Result<(), OperationError> {
    buyback
        .limit_price
        .validate()
        .map_err(|e| OperationError::InvalidBuyback {
            index,
            reason: e.to_string(),
        })?;
    if buyback.limit_price.quote.asset_id != buyback.asset_to_buy {
        return Err(OperationError::InvalidBuyback {
            index,
            reason: format!(
                "limit price quote {} does not match asset to buy {}",
                buyback.limit_price.quote.asset_id, buyback.asset_to_buy
            ),
        });
    }
    if buyback.limit_price.base.asset_id != splitter_asset {
        return Err(OperationError::InvalidBuyback {
            index,
            reason: format!(
                "limit price base {} is not the splitter asset {}",
                buyback.limit_price.base.asset_id, splitter_asset
            ),
        });
    }
    Ok(())
}

fn validate_fee(fee: &Asset) -> Result<(), OperationError> {
    if fee.amount < 0 {
        return Err(OperationError::NegativeFee(fee.amount));
    }
    Ok(())
}

fn validate_bounds(
    min_payment: &Asset,
    max_payment: ShareAmount,
    payout_threshold: ShareAmount,
) -> Result<(), OperationError> {
    if min_payment.amount <= 0 {
        return Err(OperationError::NonPositiveMinPayment(min_payment.amount));
    }
    if min_payment.amount > max_payment {
        return Err(OperationError::MinAboveMax {
            min: min_payment.amount,
            max: max_payment,
        });
    }
    if payout_threshold < 0 {
        return Err(OperationError::NegativeThreshold(payout_threshold));
    }
    Ok(())
}

fn validate_weight(index: usize, target: &PaymentTarget) -> Result<(), OperationError> {
    if target.weight == 0 {
        return Err(OperationError::ZeroWeight { index });
    }
    Ok(())
}
