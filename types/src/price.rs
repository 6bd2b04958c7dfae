//! Exchange rates between two assets.

use crate::amount::Asset;
use crate::error::PaysplitError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A ratio `base / quote` between two different assets.
///
/// Selling `base.amount` units of the base asset yields `quote.amount` units
/// of the quote asset at this price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub base: Asset,
    pub quote: Asset,
}

impl Price {
    pub fn new(base: Asset, quote: Asset) -> Self {
        Self { base, quote }
    }

    /// A price is well-formed when both sides are positive and name distinct assets.
    pub fn validate(&self) -> Result<(), PaysplitError> {
        if self.base.amount <= 0 {
            return Err(PaysplitError::InvalidPrice {
                reason: format!("base amount {} must be positive", self.base.amount),
            });
        }
        if self.quote.amount <= 0 {
            return Err(PaysplitError::InvalidPrice {
                reason: format!("quote amount {} must be positive", self.quote.amount),
            });
        }
        if self.base.asset_id == self.quote.asset_id {
            return Err(PaysplitError::InvalidPrice {
                reason: format!("base and quote are both {}", self.base.asset_id),
            });
        }
        Ok(())
    }

    /// Convert an amount of the base asset into the quote asset, rounding down.
    pub fn convert(&self, amount: &Asset) -> Result<Asset, PaysplitError> {
        if amount.asset_id != self.base.asset_id {
            return Err(PaysplitError::InvalidPrice {
                reason: format!(
                    "cannot convert {} with a price based on {}",
                    amount.asset_id, self.base.asset_id
                ),
            });
        }
        let converted =
            i128::from(amount.amount) * i128::from(self.quote.amount) / i128::from(self.base.amount);
        let converted = i64::try_from(converted).map_err(|_| PaysplitError::Overflow)?;
        Ok(Asset::new(converted, self.quote.asset_id))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
