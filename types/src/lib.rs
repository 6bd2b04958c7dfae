//! Fundamental types for the payment splitter.
//!
//! This crate defines the core types shared across every other crate in the workspace:
//! object ids, asset amounts, prices, chain parameters and the shared error type.

pub mod amount;
pub mod error;
pub mod ids;
pub mod params;
pub mod price;

pub use amount::{Asset, ShareAmount, BLOCKCHAIN_PRECISION, MAX_SHARE_SUPPLY};
pub use error::PaysplitError;
pub use ids::{AccountId, AssetId, OrderId, SplitterId};
pub use params::{ChainParams, FeeParameters, FeeSchedule};
pub use price::Price;
