//! PTCGP Trade
//!
//! Finds the duplicate Pokemon TCG Pocket cards one collection can offer
//! another: cards only one side holds, from tradable expansions and
//! rarities, owned more than once.
//!
//! This crate provides the core implementation for the
//! `ptcgp-trade` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! ptcgp-trade alice.json bob.json
//! ```

pub mod card;
pub mod collection;
pub mod commands;
pub mod diff;
pub mod metadata;
pub mod report;
pub mod utils;
