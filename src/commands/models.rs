use crate::utils::config::{CARD_DATA_URL, DEFAULT_CARD_DATA_PATH};
use std::path::PathBuf;

/// Arguments for the trade command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TradeArgs {
    /// First collection JSON file
    pub collection_1: PathBuf,

    /// Second collection JSON file
    pub collection_2: PathBuf,

    /// Cache file for the card dataset
    pub card_data: PathBuf,

    /// Where to download the card dataset from
    pub data_url: String,

    /// Download the dataset even if a cached copy exists
    pub refresh: bool,
}

impl Default for TradeArgs {
    fn default() -> Self {
        Self {
            collection_1: PathBuf::new(),
            collection_2: PathBuf::new(),
            card_data: PathBuf::from(DEFAULT_CARD_DATA_PATH),
            data_url: CARD_DATA_URL.to_string(),
            refresh: false,
        }
    }
}
