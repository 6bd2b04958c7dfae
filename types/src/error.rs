//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for primitive-level checks.
#[derive(Debug, Error)]
pub enum PaysplitError {
    #[error("invalid price: {reason}")]
    InvalidPrice { reason: String },

    #[error("arithmetic overflow")]
    Overflow,
}
