//! Chain parameters consumed by the splitter operations.
//!
//! These values are set at genesis and may later be changed by the chain's
//! governance process; nothing here is a compiled-in constant beyond the
//! genesis defaults.

use crate::amount::{ShareAmount, BLOCKCHAIN_PRECISION};
use serde::{Deserialize, Serialize};

/// Fee parameters for one operation kind.
///
/// `price_per_kbyte` only applies to operations whose fee scales with their
/// serialized size (create and update); flat-fee operations ignore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParameters {
    /// Base fee, in core asset units.
    pub fee: u64,
    /// Fee per 1024 bytes of serialized operation, in core asset units.
    #[serde(default)]
    pub price_per_kbyte: u32,
}

impl FeeParameters {
    /// A fee that scales with operation size.
    pub const fn sized(fee: u64, price_per_kbyte: u32) -> Self {
        Self { fee, price_per_kbyte }
    }

    /// A fee that does not depend on operation size.
    pub const fn flat(fee: u64) -> Self {
        Self {
            fee,
            price_per_kbyte: 0,
        }
    }
}

/// Fee parameters for every splitter operation kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub splitter_create: FeeParameters,
    pub splitter_update: FeeParameters,
    pub splitter_pay: FeeParameters,
    pub splitter_payout: FeeParameters,
    pub splitter_delete: FeeParameters,
}

impl FeeSchedule {
    /// Genesis defaults: one whole core unit per operation, plus one whole
    /// unit per kilobyte for create and update.
    pub fn genesis_defaults() -> Self {
        let base = BLOCKCHAIN_PRECISION as u64;
        let per_kb = BLOCKCHAIN_PRECISION as u32;
        Self {
            splitter_create: FeeParameters::sized(base, per_kb),
            splitter_update: FeeParameters::sized(base, per_kb),
            splitter_pay: FeeParameters::flat(base),
            splitter_payout: FeeParameters::flat(base),
            splitter_delete: FeeParameters::flat(base),
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::genesis_defaults()
    }
}

/// All chain parameters relevant to splitters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Operation fee schedule.
    #[serde(default)]
    pub fees: FeeSchedule,

    /// Amount deducted from a splitter's own balance, in the splitter's asset,
    /// when a payment pushes it over its payout threshold.
    #[serde(default = "default_auto_payout_fee")]
    pub auto_payout_fee: ShareAmount,
}

fn default_auto_payout_fee() -> ShareAmount {
    BLOCKCHAIN_PRECISION
}

impl ChainParams {
    pub fn genesis_defaults() -> Self {
        Self {
            fees: FeeSchedule::genesis_defaults(),
            auto_payout_fee: default_auto_payout_fee(),
        }
    }

    /// Override the automatic payout fee.
    pub fn with_auto_payout_fee(mut self, fee: ShareAmount) -> Self {
        self.auto_payout_fee = fee;
        self
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::genesis_defaults()
    }
}
