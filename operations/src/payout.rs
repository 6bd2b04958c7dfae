//! Manually trigger a payout, and remove a splitter.

use paysplit_types::{AccountId, Asset, SplitterId};
use serde::{Deserialize, Serialize};

/// Distribute the splitter's balance now. The owner pays the fee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterPayoutOp {
    pub fee: Asset,
    pub splitter_id: SplitterId,
    /// Must match the stored owner.
    pub owner: AccountId,
}

/// Remove a splitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterDeleteOp {
    pub fee: Asset,
    pub splitter_id: SplitterId,
    /// Must match the stored owner.
    pub owner: AccountId,
}
