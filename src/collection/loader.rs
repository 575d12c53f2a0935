//! JSON collection reader.

use crate::utils::error::CollectionError;
use indexmap::IndexMap;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Card identifier -> owned quantity, in file order
pub type Collection = IndexMap<String, u32>;

/// Read a collection from a JSON file
///
/// **Public** - main entry point for collection input
///
/// # Errors
/// * `CollectionError::MissingFile` - path does not exist or is not a regular file
/// * `CollectionError::Io` - file could not be read
/// * `CollectionError::InvalidJson` - contents are not an identifier -> count object
pub fn read_collection(input_path: impl AsRef<Path>) -> Result<Collection, CollectionError> {
    let input_path = input_path.as_ref();

    if !input_path.is_file() {
        return Err(CollectionError::MissingFile(input_path.to_path_buf()));
    }

    debug!("Reading collection from: {}", input_path.display());

    let file = File::open(input_path)?;
    let collection = parse_collection(BufReader::new(file))?;

    debug!("Collection loaded: {} distinct cards", collection.len());

    Ok(collection)
}

/// Parse a collection from any reader
pub fn parse_collection(reader: impl Read) -> Result<Collection, CollectionError> {
    let collection: Collection = serde_json::from_reader(reader)?;
    Ok(collection)
}
