//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod trade;

// Re-export main command functions
pub use models::TradeArgs;
pub use trade::{execute_trade, run_trade, validate_args};
