//! Order book trait for market buyback targets.

use crate::StoreError;
use paysplit_types::{AccountId, Asset, OrderId, Price, SplitterId};
use serde::{Deserialize, Serialize};

/// A limit order funded from a splitter's balance.
///
/// The order sells `amount_to_sell` at no worse than `limit_price`; proceeds
/// belong to `seller`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub seller: AccountId,
    pub funded_by: SplitterId,
    pub amount_to_sell: Asset,
    pub limit_price: Price,
}

impl LimitOrder {
    /// Smallest amount of the bought asset this order accepts.
    pub fn min_to_receive(&self) -> Result<Asset, StoreError> {
        self.limit_price
            .convert(&self.amount_to_sell)
            .map_err(|e| StoreError::Rejected(e.to_string()))
    }
}

/// The market engine. Placement is all this crate asks of it; fills happen later.
pub trait OrderBook {
    /// Place an order, taking custody of `amount_to_sell`.
    fn place_limit_order(&self, order: &LimitOrder) -> Result<OrderId, StoreError>;

    /// Remove an order that has not been matched yet, returning it.
    fn cancel_order(&self, id: &OrderId) -> Result<LimitOrder, StoreError>;

    fn get_order(&self, id: &OrderId) -> Result<LimitOrder, StoreError>;
}
