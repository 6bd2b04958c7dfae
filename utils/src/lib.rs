//! Shared utilities for the payment splitter tools.

pub mod display;
pub mod logging;

pub use display::format_amount;
pub use logging::{init_logging, LogFormat, LoggingError};
