//! Amount formatting helpers.

use paysplit_types::{ShareAmount, BLOCKCHAIN_PRECISION};

/// Format a raw share amount as whole units with the chain's precision,
/// e.g. `150000` → `"1.50000"`.
pub fn format_amount(amount: ShareAmount) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let precision = BLOCKCHAIN_PRECISION as u64;
    let digits = precision.ilog10() as usize;
    format!("{sign}{}.{:0digits$}", abs / precision, abs % precision)
}
