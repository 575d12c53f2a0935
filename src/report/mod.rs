//! Terminal report rendering.
//!
//! Lays the two trade lists out side by side, one table per rarity tier.

pub mod layout;
pub mod render;

// Re-export main functions
pub use layout::{format_cell, format_row, pair_rows, separator_line, PairedRows};
pub use render::{render_columns, render_report, RenderOptions};
