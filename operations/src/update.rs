//! Replace a splitter's configuration wholesale.

use crate::target::PaymentTarget;
use paysplit_types::{AccountId, Asset, ShareAmount, SplitterId};
use serde::{Deserialize, Serialize};

/// Full replacement of owner, targets and payment bounds.
///
/// Targets not resubmitted are dropped; nothing is merged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterUpdateOp {
    pub fee: Asset,
    pub splitter_id: SplitterId,
    /// Must match the stored owner.
    pub owner: AccountId,
    pub new_owner: AccountId,
    pub targets: Vec<PaymentTarget>,
    pub min_payment: Asset,
    pub max_payment: ShareAmount,
    pub payout_threshold: ShareAmount,
}
