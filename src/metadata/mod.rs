//! Card metadata lookup backed by the Pokemon Zone game dataset.
//!
//! The dataset is downloaded once, cached on disk, and loaded into a
//! read-only [`CardDatabase`] for the rest of the run.

pub mod fetch;
pub mod schema;
pub mod store;

// Re-export main types
pub use fetch::{cache_card_data, download_card_data, load_card_data, parse_card_data};
pub use schema::{CardData, CardDataPayload, CardEntry, ExpansionRef};
pub use store::{CardDatabase, CardMetadata};
