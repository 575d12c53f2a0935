//! Collection file loading.
//!
//! Collections are exported from ptcgp.app as a JSON object mapping
//! dash-delimited card identifiers to owned counts.

pub mod loader;

// Re-export main functions
pub use loader::{parse_collection, read_collection, Collection};
