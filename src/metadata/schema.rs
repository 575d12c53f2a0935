//! Types for the reference card dataset.
//!
//! Mirrors the subset of the Pokemon Zone `game-data` response we need.
//! Unknown fields are ignored so newer dataset versions keep loading.

use serde::Deserialize;

/// Top-level dataset document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardData {
    #[serde(default)]
    pub data: CardDataPayload,
}

/// Container for the card list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDataPayload {
    #[serde(default)]
    pub cards: Vec<CardEntry>,
}

/// A single card in the dataset
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    /// Ordinal of the card within its expansion
    pub collection_number: u32,

    /// Expansion the card belongs to
    pub expansion: ExpansionRef,

    /// Rarity label, e.g. "Double Rare"
    #[serde(default)]
    pub rarity_name: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// Expansion reference embedded in each card
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionRef {
    /// Dataset expansion id, e.g. "A1" or "PROMO-A"
    pub expansion_id: String,
}
