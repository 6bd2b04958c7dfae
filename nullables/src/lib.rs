//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the splitter engine (object store, account
//! balances, order book) is abstracted behind a trait. This crate provides
//! in-memory implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically, including injected failures
//! - Never touch the filesystem or network
//!
//! Usage: build a [`NullLedger`], fund some accounts, and hand it to the engine.

pub mod accounts;
pub mod ledger;
pub mod market;
pub mod splitters;

pub use accounts::NullAccounts;
pub use ledger::NullLedger;
pub use market::NullOrderBook;
pub use splitters::NullSplitterStore;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock ignoring poisoning; a panicked test thread must not hide state from the others.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
