//! Pay into a splitter.

use paysplit_types::{AccountId, Asset, SplitterId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterPayOp {
    pub fee: Asset,
    pub splitter_id: SplitterId,
    /// Funds the payment and pays the fee.
    pub paying_account: AccountId,
    pub payment: Asset,
}
