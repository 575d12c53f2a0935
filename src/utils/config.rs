//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for the card data download
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote source of the reference card dataset
pub const CARD_DATA_URL: &str = "https://www.pokemon-zone.com/api/game/game-data/";

/// Where the downloaded dataset is cached between runs
pub const DEFAULT_CARD_DATA_PATH: &str = "data.json";

// Expansions that cannot be traded in-game
pub const BANNED_EXPANSIONS: &[&str] = &["A2α", "P-A"];

// Rarities that cannot be traded in-game
pub const BANNED_RARITIES: &[&str] = &["Super Rare", "Immersive Rare", "Crown Rare"];

/// A card must be held strictly more than this many times to be offered
pub const DEFAULT_COUNT_THRESHOLD: u32 = 1;

// Identifier normalization.
// Collections write the promo set as "P-A", the dataset calls it "PROMO-A".
pub const ALPHA_MARKER: char = 'α';
pub const ALPHA_REPLACEMENT: &str = "a";
pub const PROMO_SHORTHAND: &str = "P-A";
pub const PROMO_CANONICAL: &str = "PROMO-A";

// Report layout
pub const COLUMN_WIDTH: usize = 40;
pub const COLUMN_SEPARATOR: &str = "| ";
pub const LEFT_COLUMN_TITLE: &str = "Collection 1";
pub const RIGHT_COLUMN_TITLE: &str = "Collection 2";
pub const UNKNOWN_RARITY_TITLE: &str = "Unknown";
