//! Rarity tiers used by the card database.
//!
//! Diamond and star counts as shown in-game:
//! Common = 1 Diamond, Uncommon = 2, Rare = 3, Double Rare = 4,
//! Art Rare = 1 Star, Super Rare = 2, Immersive Rare = 3, Crown Rare = Crown.

use std::fmt;

/// Rarity tier, ordered from most common to rarest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    DoubleRare,
    ArtRare,
    SuperRare,
    ImmersiveRare,
    CrownRare,
}

impl Rarity {
    /// Every tier in report priority order
    pub const ALL: [Rarity; 8] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::DoubleRare,
        Rarity::ArtRare,
        Rarity::SuperRare,
        Rarity::ImmersiveRare,
        Rarity::CrownRare,
    ];

    /// Map a dataset rarity label to a tier
    ///
    /// Returns None for labels outside the known tiers.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Common" => Some(Rarity::Common),
            "Uncommon" => Some(Rarity::Uncommon),
            "Rare" => Some(Rarity::Rare),
            "Double Rare" => Some(Rarity::DoubleRare),
            "Art Rare" => Some(Rarity::ArtRare),
            "Super Rare" => Some(Rarity::SuperRare),
            "Immersive Rare" => Some(Rarity::ImmersiveRare),
            "Crown Rare" => Some(Rarity::CrownRare),
            _ => None,
        }
    }

    /// Label as it appears in the dataset and the report
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::DoubleRare => "Double Rare",
            Rarity::ArtRare => "Art Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::ImmersiveRare => "Immersive Rare",
            Rarity::CrownRare => "Crown Rare",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What is known about a card's rarity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RarityState {
    /// One of the known tiers
    Tier(Rarity),

    /// The dataset has a label outside the known tiers
    Unlisted(String),

    /// No metadata was found for the card
    Unresolved,
}

impl RarityState {
    /// Classify a dataset rarity label
    pub fn from_label(label: &str) -> Self {
        match Rarity::from_label(label) {
            Some(rarity) => RarityState::Tier(rarity),
            None => RarityState::Unlisted(label.to_string()),
        }
    }

    /// The tier, if the label is a known one
    pub fn tier(&self) -> Option<Rarity> {
        match self {
            RarityState::Tier(rarity) => Some(*rarity),
            _ => None,
        }
    }
}
