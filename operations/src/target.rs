//! Payment targets: where a splitter sends each share of a payout.

use paysplit_types::{AccountId, AssetId, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spend a share on a buy order for `asset_to_buy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketBuyback {
    pub asset_to_buy: AssetId,
    /// Quote side must be `asset_to_buy`.
    pub limit_price: Price,
}

impl MarketBuyback {
    pub fn new(asset_to_buy: AssetId, limit_price: Price) -> Self {
        Self {
            asset_to_buy,
            limit_price,
        }
    }
}

/// Destination of one share. Variant order is part of the wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTargetType {
    /// Credit the account directly.
    Account(AccountId),
    /// Place a limit buy order on the market.
    MarketBuyback(MarketBuyback),
}

impl fmt::Display for PaymentTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account {id}"),
            Self::MarketBuyback(b) => write!(f, "buyback of {} at {}", b.asset_to_buy, b.limit_price),
        }
    }
}

/// A weighted payout destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentTarget {
    /// Relative share; must be non-zero.
    pub weight: u16,
    pub target: PaymentTargetType,
}

impl PaymentTarget {
    pub fn account(weight: u16, account: AccountId) -> Self {
        Self {
            weight,
            target: PaymentTargetType::Account(account),
        }
    }

    pub fn buyback(weight: u16, buyback: MarketBuyback) -> Self {
        Self {
            weight,
            target: PaymentTargetType::MarketBuyback(buyback),
        }
    }
}
