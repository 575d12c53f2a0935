//! Download and cache the reference card dataset.

use super::schema::CardData;
use super::store::CardDatabase;
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::CardDataError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;

/// Load the card database, downloading it first if needed
///
/// **Public** - main entry point for the metadata store
///
/// # Arguments
/// * `cache_path` - Where the dataset is (or will be) cached
/// * `url` - Remote dataset URL
/// * `refresh` - Ignore an existing cache and download again
///
/// # Errors
/// * `CardDataError::RequestFailed` / `HttpStatus` - download failed
/// * `CardDataError::Io` - cache could not be read or written
/// * `CardDataError::InvalidJson` - dataset is not in the expected shape
pub fn load_card_data(
    cache_path: impl AsRef<Path>,
    url: &str,
    refresh: bool,
) -> Result<CardDatabase, CardDataError> {
    let cache_path = cache_path.as_ref();

    let database = if cache_path.is_file() && !refresh {
        info!("Card data already downloaded, using {}", cache_path.display());
        parse_card_data(&fs::read_to_string(cache_path)?)?
    } else {
        if refresh {
            info!("Refreshing card data...");
        } else {
            info!("Card data does not exist, downloading...");
        }
        let body = download_card_data(url)?;
        let database = cache_card_data(cache_path, &body)?;
        info!("Downloaded and saved card data to {}", cache_path.display());
        database
    };

    info!("Loaded {} cards", database.len());

    Ok(database)
}

/// Parse a dataset body into a card database
pub fn parse_card_data(body: &str) -> Result<CardDatabase, CardDataError> {
    let data: CardData = serde_json::from_str(body)?;
    Ok(CardDatabase::from(data))
}

/// Parse a freshly downloaded body and cache it
///
/// The cache is only written when the body parses, so an error page served
/// with HTTP 200 never replaces or creates the cache file.
pub fn cache_card_data(cache_path: &Path, body: &str) -> Result<CardDatabase, CardDataError> {
    let database = parse_card_data(body)?;
    write_cache(cache_path, body)?;
    Ok(database)
}

/// Fetch the raw dataset body
///
/// **Public** - exposed for callers that manage their own cache
pub fn download_card_data(url: &str) -> Result<String, CardDataError> {
    let client = Client::builder()
        .timeout(DEFAULT_HTTP_TIMEOUT)
        .build()
        .map_err(CardDataError::RequestFailed)?;

    debug!("GET {}", url);

    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(CardDataError::HttpStatus(response.status()));
    }

    let body = response.text()?;

    debug!("Received {} bytes of card data", body.len());

    Ok(body)
}

/// Write the dataset to the cache path, creating parent directories
///
/// **Private** - internal helper for load_card_data
fn write_cache(path: &Path, body: &str) -> Result<(), CardDataError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, body)?;
    Ok(())
}
