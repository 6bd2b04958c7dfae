use paysplit_operations::OperationError;
use paysplit_store::StoreError;
use paysplit_types::{AccountId, AssetId, ShareAmount, SplitterId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitterError {
    #[error("validation failed: {0}")]
    Validation(#[from] OperationError),

    #[error("splitter {splitter} is owned by {owner}, not {caller}")]
    Authorization {
        splitter: SplitterId,
        owner: AccountId,
        caller: AccountId,
    },

    #[error("asset mismatch: splitter uses {expected}, got {provided}")]
    AssetMismatch { expected: AssetId, provided: AssetId },

    #[error("insufficient funds: balance {balance} cannot cover fee {fee}")]
    InsufficientFunds { balance: ShareAmount, fee: ShareAmount },

    #[error("no targets to distribute to (total weight is zero)")]
    NoTargets,

    #[error("dispatch to target {index} ({target}) failed: {reason}")]
    TargetDispatch {
        index: usize,
        target: String,
        reason: String,
    },

    #[error("splitter {0} not found")]
    NotFound(SplitterId),

    #[error("arithmetic overflow in splitter computation")]
    Overflow,

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
