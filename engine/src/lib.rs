//! Payment splitter engine.
//!
//! A splitter accumulates payments in one asset and distributes its whole
//! balance across weighted targets, either when a payment pushes it over its
//! threshold or when the owner asks. Targets are account credits or market
//! buyback orders.
//!
//! This crate handles:
//! - Splitter lifecycle (create, wholesale update, delete) with owner checks
//! - Accepting payments and triggering automatic payouts
//! - Exact integer apportionment by the largest-remainder method
//! - All-or-nothing dispatch of shares with rollback

pub mod accumulator;
pub mod apportion;
pub mod error;
pub mod evaluator;
pub mod object;
pub mod payout;
pub mod registry;
pub mod undo;

pub use accumulator::{AutoPayout, PayOutcome, PaymentAccumulator};
pub use apportion::apportion;
pub use error::SplitterError;
pub use evaluator::{AppliedOperation, OperationEvaluator, OperationResult};
pub use paysplit_store::{Ledger, LedgerSummary};
pub use payout::{PayoutEngine, PayoutReport, ShareDispatch};
pub use registry::SplitterRegistry;
pub use undo::UndoLog;
