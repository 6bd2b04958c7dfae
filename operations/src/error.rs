use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("fee amount {0} must not be negative")]
    NegativeFee(i64),

    #[error("fee must be paid in the core asset, got {0}")]
    FeeAsset(String),

    #[error("insufficient fee: required {required}, provided {provided}")]
    InsufficientFee { required: i64, provided: i64 },

    #[error("minimum payment {0} must be positive")]
    NonPositiveMinPayment(i64),

    #[error("minimum payment {min} exceeds maximum payment {max}")]
    MinAboveMax { min: i64, max: i64 },

    #[error("payout threshold {0} must not be negative")]
    NegativeThreshold(i64),

    #[error("splitter must have at least one target")]
    EmptyTargets,

    #[error("target {index} has zero weight")]
    ZeroWeight { index: usize },

    #[error("target {index} has an invalid market buyback: {reason}")]
    InvalidBuyback { index: usize, reason: String },

    #[error("payment amount {0} must be positive")]
    NonPositivePayment(i64),

    #[error("payment {amount} outside allowed range [{min}, {max}]")]
    PaymentOutOfRange { amount: i64, min: i64, max: i64 },

    #[error("unsupported schema version {found} for {name}, expected {expected}")]
    UnsupportedVersion {
        name: &'static str,
        found: u8,
        expected: u8,
    },

    #[error("{name} schema does not match its struct fields ({declared})")]
    SchemaMismatch {
        name: &'static str,
        declared: String,
    },

    #[error("codec error: {0}")]
    Codec(String),

    #[error("fee computation overflow")]
    Overflow,
}
