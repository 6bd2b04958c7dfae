//! Create a new splitter.

use crate::target::PaymentTarget;
use paysplit_types::{AccountId, Asset, ShareAmount};
use serde::{Deserialize, Serialize};

/// Create a splitter owned by `owner`, paid for by `payer`.
///
/// `min_payment` fixes the asset the splitter accepts; `max_payment` and
/// `payout_threshold` are denominated in that same asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterCreateOp {
    pub fee: Asset,
    pub payer: AccountId,
    pub owner: AccountId,
    pub targets: Vec<PaymentTarget>,
    pub min_payment: Asset,
    pub max_payment: ShareAmount,
    pub payout_threshold: ShareAmount,
}
