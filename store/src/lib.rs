//! Abstract storage traits for the payment splitter.
//!
//! Every backend (a chain's object database, in-memory for testing) implements
//! these traits. The rest of the codebase depends only on the traits.

pub mod account;
pub mod error;
pub mod ledger;
pub mod market;
pub mod splitter;

pub use account::AccountStore;
pub use error::StoreError;
pub use ledger::{Ledger, LedgerSummary};
pub use market::{LimitOrder, OrderBook};
pub use splitter::{SplitterObject, SplitterStore};
