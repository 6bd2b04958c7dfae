//! Nullable order book.

use crate::lock;
use paysplit_store::{LimitOrder, OrderBook, StoreError};
use paysplit_types::OrderId;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Records placed orders; never matches them.
///
/// Orders whose minimum receive amount rounds to zero are rejected, as a real
/// matching engine would.
#[derive(Default)]
pub struct NullOrderBook {
    orders: Mutex<BTreeMap<OrderId, LimitOrder>>,
    next_id: Mutex<u64>,
    reject_all: Mutex<bool>,
}

impl NullOrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_all(&self, reject: bool) {
        *lock(&self.reject_all) = reject;
    }

    /// Open orders in placement order.
    pub fn open_orders(&self) -> Vec<LimitOrder> {
        lock(&self.orders).values().cloned().collect()
    }
}

impl OrderBook for NullOrderBook {
    fn place_limit_order(&self, order: &LimitOrder) -> Result<OrderId, StoreError> {
        if *lock(&self.reject_all) {
            return Err(StoreError::Rejected("market closed".into()));
        }
        if order.amount_to_sell.amount <= 0 {
            return Err(StoreError::Rejected("order sells nothing".into()));
        }
        if order.min_to_receive()?.amount <= 0 {
            return Err(StoreError::Rejected(format!(
                "order of {} at {} receives nothing",
                order.amount_to_sell, order.limit_price
            )));
        }
        let mut next = lock(&self.next_id);
        let id = OrderId::new(*next);
        *next += 1;
        lock(&self.orders).insert(id, order.clone());
        Ok(id)
    }

    fn cancel_order(&self, id: &OrderId) -> Result<LimitOrder, StoreError> {
        lock(&self.orders)
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn get_order(&self, id: &OrderId) -> Result<LimitOrder, StoreError> {
        lock(&self.orders)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
