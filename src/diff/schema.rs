//! Schema definitions for diff results.

use crate::card::{Rarity, RarityState};
use crate::utils::config::{BANNED_EXPANSIONS, BANNED_RARITIES, DEFAULT_COUNT_THRESHOLD};
use indexmap::IndexMap;

/// A tradable card with whatever metadata could be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    /// Identifier exactly as written in the collection
    pub id: String,

    /// Quantity owned
    pub count: u32,

    /// Display name, None when the lookup failed
    pub name: Option<String>,

    /// Rarity tier, the unlisted dataset label, or Unresolved when the
    /// lookup failed
    pub rarity: RarityState,
}

impl CardRecord {
    /// A record with no metadata attached
    pub fn unresolved(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            count,
            name: None,
            rarity: RarityState::Unresolved,
        }
    }

    /// Whether metadata was found for the card
    pub fn is_resolved(&self) -> bool {
        self.rarity != RarityState::Unresolved
    }
}

/// Records keyed by identifier, in source collection order
pub type CardRecords = IndexMap<String, CardRecord>;

/// Business rules deciding what counts as tradable
#[derive(Debug, Clone)]
pub struct TradeRules {
    /// Expansion codes that cannot be traded
    pub banned_expansions: Vec<String>,

    /// Rarities that cannot be traded (applied when rendering)
    pub banned_rarities: Vec<Rarity>,

    /// A card is tradable only if owned strictly more times than this
    pub min_count_exclusive: u32,
}

impl Default for TradeRules {
    fn default() -> Self {
        Self {
            banned_expansions: BANNED_EXPANSIONS.iter().map(|s| s.to_string()).collect(),
            banned_rarities: BANNED_RARITIES
                .iter()
                .filter_map(|label| Rarity::from_label(label))
                .collect(),
            min_count_exclusive: DEFAULT_COUNT_THRESHOLD,
        }
    }
}

/// How many cards survived each stage for one collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Cards not present in the other collection
    pub exclusive: usize,

    /// Exclusive cards from tradable expansions
    pub tradable_expansion: usize,

    /// Of those, cards above the duplicate threshold
    pub surplus: usize,

    /// Surplus cards whose metadata could not be resolved
    pub unresolved: usize,
}

/// Complete diff of two collections
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    /// Cards only the first collection can offer
    pub collection_1: CardRecords,

    /// Cards only the second collection can offer
    pub collection_2: CardRecords,

    /// Filter statistics for the first collection
    pub stats_1: DiffStats,

    /// Filter statistics for the second collection
    pub stats_2: DiffStats,
}
