//! In-memory card metadata store.

use super::schema::{CardData, CardEntry};
use crate::card::{CardId, RarityState};
use log::debug;
use std::collections::HashMap;

/// Name and rarity resolved for a single card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMetadata {
    /// Display name (empty when the dataset has none)
    pub name: String,

    /// Known tier, or the dataset label when it is not one
    pub rarity: RarityState,
}

/// Read-only lookup over the reference dataset
///
/// **Public** - built once at startup and shared by reference with the
/// diff engine. An empty database answers every lookup with None.
#[derive(Debug, Clone, Default)]
pub struct CardDatabase {
    entries: Vec<CardEntry>,

    /// (dataset expansion id, collection number) -> index of first match
    index: HashMap<(String, u32), usize>,
}

impl CardDatabase {
    /// Build a database from dataset entries
    ///
    /// When several entries share an expansion and number, the first one
    /// in dataset order wins.
    pub fn new(entries: Vec<CardEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            index
                .entry((entry.expansion.expansion_id.clone(), entry.collection_number))
                .or_insert(i);
        }

        debug!("Indexed {} cards ({} unique)", entries.len(), index.len());

        Self { entries, index }
    }

    /// A database with no cards
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of cards in the dataset
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a card's name and rarity
    ///
    /// The identifier's expansion is normalized to the dataset spelling
    /// before searching. Returns None when no card matches.
    pub fn lookup(&self, id: &CardId) -> Option<CardMetadata> {
        let key = (id.dataset_expansion(), id.number());
        let entry = &self.entries[*self.index.get(&key)?];

        let rarity = RarityState::from_label(entry.rarity_name.as_deref().unwrap_or_default());
        if let RarityState::Unlisted(label) = &rarity {
            debug!("Card {} has unlisted rarity '{}'", id, label);
        }

        Some(CardMetadata {
            name: entry.name.clone().unwrap_or_default(),
            rarity,
        })
    }
}

impl From<CardData> for CardDatabase {
    fn from(data: CardData) -> Self {
        Self::new(data.data.cards)
    }
}
