//! Splitter operation types and their stateless logic.
//!
//! Operation types:
//! - **Create**: Register a new splitter with weighted targets and payment bounds
//! - **Update**: Replace a splitter's owner, targets and bounds wholesale
//! - **Pay**: Send a payment into a splitter
//! - **Payout**: Ask a splitter to distribute its balance now
//! - **Delete**: Remove a splitter

pub mod codec;
pub mod create;
pub mod error;
pub mod fee;
pub mod pay;
pub mod payout;
pub mod target;
pub mod update;
pub mod validation;

pub use codec::{FieldDef, FieldKind, FieldSchema};
pub use create::SplitterCreateOp;
pub use error::OperationError;
pub use pay::SplitterPayOp;
pub use payout::{SplitterDeleteOp, SplitterPayoutOp};
pub use target::{MarketBuyback, PaymentTarget, PaymentTargetType};
pub use update::SplitterUpdateOp;

use paysplit_types::{AccountId, Asset, AssetId, FeeSchedule, ShareAmount};
use serde::{Deserialize, Serialize};

/// The unified operation enum wrapping all splitter operation types.
///
/// Variant order is the operation tag on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Create(SplitterCreateOp),
    Update(SplitterUpdateOp),
    Pay(SplitterPayOp),
    Payout(SplitterPayoutOp),
    Delete(SplitterDeleteOp),
}

impl Operation {
    /// Schema name of the wrapped operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => SplitterCreateOp::NAME,
            Self::Update(_) => SplitterUpdateOp::NAME,
            Self::Pay(_) => SplitterPayOp::NAME,
            Self::Payout(_) => SplitterPayoutOp::NAME,
            Self::Delete(_) => SplitterDeleteOp::NAME,
        }
    }

    /// The fee the submitter offers.
    pub fn fee(&self) -> &Asset {
        match self {
            Self::Create(op) => &op.fee,
            Self::Update(op) => &op.fee,
            Self::Pay(op) => &op.fee,
            Self::Payout(op) => &op.fee,
            Self::Delete(op) => &op.fee,
        }
    }

    /// The account charged the fee.
    pub fn fee_payer(&self) -> AccountId {
        match self {
            Self::Create(op) => op.payer,
            Self::Update(op) => op.owner,
            Self::Pay(op) => op.paying_account,
            Self::Payout(op) => op.owner,
            Self::Delete(op) => op.owner,
        }
    }

    /// Stateless field checks.
    pub fn validate(&self) -> Result<(), OperationError> {
        validation::validate_operation(self)
    }

    /// Required fee under `schedule`, in core asset units.
    pub fn calculate_fee(&self, schedule: &FeeSchedule) -> Result<ShareAmount, OperationError> {
        match self {
            Self::Create(op) => fee::sized_fee(op, &schedule.splitter_create),
            Self::Update(op) => fee::sized_fee(op, &schedule.splitter_update),
            Self::Pay(_) => fee::flat_fee(&schedule.splitter_pay),
            Self::Payout(_) => fee::flat_fee(&schedule.splitter_payout),
            Self::Delete(_) => fee::flat_fee(&schedule.splitter_delete),
        }
    }

    /// Check that the offered fee is in the core asset and covers the required fee.
    pub fn check_fee(&self, schedule: &FeeSchedule) -> Result<ShareAmount, OperationError> {
        let offered = self.fee();
        if offered.asset_id != AssetId::CORE {
            return Err(OperationError::FeeAsset(offered.asset_id.to_string()));
        }
        let required = self.calculate_fee(schedule)?;
        if offered.amount < required {
            return Err(OperationError::InsufficientFee {
                required,
                provided: offered.amount,
            });
        }
        Ok(required)
    }

    /// Set the offered fee to exactly the required fee.
    ///
    /// The fee field has a fixed width, so changing it never changes the
    /// encoded size the required fee was computed from.
    pub fn with_required_fee(mut self, schedule: &FeeSchedule) -> Result<Self, OperationError> {
        let required = self.calculate_fee(schedule)?;
        let fee = Asset::core(required);
        match &mut self {
            Self::Create(op) => op.fee = fee,
            Self::Update(op) => op.fee = fee,
            Self::Pay(op) => op.fee = fee,
            Self::Payout(op) => op.fee = fee,
            Self::Delete(op) => op.fee = fee,
        }
        Ok(self)
    }

    /// Encode with a one-byte operation tag followed by the operation's schema encoding.
    pub fn encode(&self) -> Result<Vec<u8>, OperationError> {
        let (tag, body) = match self {
            Self::Create(op) => (0u8, codec::encode(op)?),
            Self::Update(op) => (1, codec::encode(op)?),
            Self::Pay(op) => (2, codec::encode(op)?),
            Self::Payout(op) => (3, codec::encode(op)?),
            Self::Delete(op) => (4, codec::encode(op)?),
        };
        let mut out = Vec::with_capacity(body.len() + 1);
        out.push(tag);
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Inverse of [`Operation::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, OperationError> {
        let (&tag, body) = bytes
            .split_first()
            .ok_or_else(|| OperationError::Codec("empty operation".into()))?;
        match tag {
            0 => codec::decode(body).map(Self::Create),
            1 => codec::decode(body).map(Self::Update),
            2 => codec::decode(body).map(Self::Pay),
            3 => codec::decode(body).map(Self::Payout),
            4 => codec::decode(body).map(Self::Delete),
            other => Err(OperationError::Codec(format!("unknown operation tag {other}"))),
        }
    }
}
