//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a collection file
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Could not open {}, file does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read collection: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid collection JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors that can occur while parsing a card identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Malformed card identifier '{identifier}': {reason}")]
    Malformed { identifier: String, reason: String },
}

/// Errors that can occur while fetching or loading the card dataset
#[derive(Error, Debug)]
pub enum CardDataError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Card database returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Failed to access card data cache: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid card data JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
