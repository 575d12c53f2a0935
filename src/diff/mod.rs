//! Collection diff generation.
//!
//! This module compares two collections and produces, for each side, the
//! cards it could trade away: held only by that side, from a tradable
//! expansion, and owned more times than the duplicate threshold.
//!
//! # Example
//! ```ignore
//! use ptcgp_trade::collection::read_collection;
//! use ptcgp_trade::diff::{diff_collections, TradeRules};
//!
//! let first = read_collection("alice.json")?;
//! let second = read_collection("bob.json")?;
//! let report = diff_collections(&first, &second, &database, &TradeRules::default());
//! ```

mod engine;
mod filters;
mod schema;

// Public API exports
pub use engine::{diff_collections, enrich_record};
pub use filters::{exclusive_holdings, filter_banned_expansions, filter_by_threshold, is_banned_expansion};
pub use schema::{CardRecord, CardRecords, DiffReport, DiffStats, TradeRules};

#[cfg(test)]
mod tests;
