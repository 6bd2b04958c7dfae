//! Operation fee formulas.

use crate::codec::{encoded_size, FieldSchema};
use crate::error::OperationError;
use paysplit_types::{FeeParameters, ShareAmount, MAX_SHARE_SUPPLY};

/// Fee for `bytes` of payload at `price_per_kbyte` per 1024 bytes, rounded down.
pub fn calculate_data_fee(bytes: u64, price_per_kbyte: u32) -> Result<ShareAmount, OperationError> {
    let fee = u128::from(bytes) * u128::from(price_per_kbyte) / 1024;
    if fee > MAX_SHARE_SUPPLY as u128 {
        return Err(OperationError::Overflow);
    }
    Ok(fee as ShareAmount)
}

/// `base_fee + data_fee(encoded size)`.
pub fn sized_fee<T: FieldSchema>(op: &T, k: &FeeParameters) -> Result<ShareAmount, OperationError> {
    let data_fee = calculate_data_fee(encoded_size(op)?, k.price_per_kbyte)?;
    flat_fee(k)?
        .checked_add(data_fee)
        .ok_or(OperationError::Overflow)
}

/// The base fee alone.
pub fn flat_fee(k: &FeeParameters) -> Result<ShareAmount, OperationError> {
    ShareAmount::try_from(k.fee).map_err(|_| OperationError::Overflow)
}
