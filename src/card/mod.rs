//! Card identifiers and rarity tiers.
//!
//! Collections refer to cards by ptcgp.app-style identifiers such as
//! `A1-001`, `A2α-010` or `P-A-005`. This module splits them into an
//! expansion code and a collection number, and maps the dataset's rarity
//! labels onto an ordered enum.

pub mod identifier;
pub mod rarity;

// Re-export main types
pub use identifier::{expansion_code, normalize_alpha, CardId};
pub use rarity::{Rarity, RarityState};
