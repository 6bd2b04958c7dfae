//! Asset amount types.
//!
//! Amounts are signed 64-bit integers counted in the smallest unit of their asset.
//! Signed so that field validation can reject negative values explicitly.

use crate::ids::AssetId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of some asset, in its smallest unit.
pub type ShareAmount = i64;

/// Number of smallest units in one whole unit of the core asset.
pub const BLOCKCHAIN_PRECISION: ShareAmount = 100_000;

/// Upper bound on any amount that may exist on the ledger.
pub const MAX_SHARE_SUPPLY: ShareAmount = 1_000_000_000_000_000;

/// An amount tagged with the asset it is denominated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    pub amount: ShareAmount,
    pub asset_id: AssetId,
}

impl Asset {
    pub fn new(amount: ShareAmount, asset_id: AssetId) -> Self {
        Self { amount, asset_id }
    }

    /// An amount of the core asset.
    pub fn core(amount: ShareAmount) -> Self {
        Self::new(amount, AssetId::CORE)
    }

    pub fn zero(asset_id: AssetId) -> Self {
        Self::new(0, asset_id)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Add two amounts of the same asset. `None` on asset mismatch or overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        if self.asset_id != other.asset_id {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.asset_id))
    }

    /// Subtract two amounts of the same asset. `None` on asset mismatch or overflow.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        if self.asset_id != other.asset_id {
            return None;
        }
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self::new(amount, self.asset_id))
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.asset_id)
    }
}
