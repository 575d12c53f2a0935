//! Trade command implementation.
//!
//! The trade command:
//! 1. Loads (or downloads) the card dataset
//! 2. Reads both collections
//! 3. Diffs them and attaches card metadata
//! 4. Renders the side-by-side report

use super::models::TradeArgs;
use crate::collection::read_collection;
use crate::diff::{diff_collections, DiffStats, TradeRules};
use crate::metadata::{load_card_data, CardDatabase};
use crate::report::{render_report, RenderOptions};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Printed when neither collection has anything to trade
pub const NO_TRADES_MESSAGE: &str = "No tradable cards found.";

/// Execute the trade command and print the report to stdout
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or unreadable collection files
/// * Invalid collection JSON
///
/// A card dataset that cannot be loaded is not an error: every card is
/// then reported without name or rarity.
pub fn execute_trade(args: TradeArgs) -> Result<()> {
    let report = run_trade(&args)?;
    print!("{}", report);
    Ok(())
}

/// Run the trade pipeline and return the rendered report
///
/// **Public** - used by execute_trade and integration tests
pub fn run_trade(args: &TradeArgs) -> Result<String> {
    let start_time = Instant::now();

    // Step 1: Card data
    info!("Step 1/4: Loading card data...");
    let database = load_card_data(&args.card_data, &args.data_url, args.refresh)
        .unwrap_or_else(|e| {
            warn!("Card data unavailable ({}), continuing without names or rarities", e);
            CardDatabase::empty()
        });

    // Step 2: Collections
    info!("Step 2/4: Reading collections...");
    let first = read_collection(&args.collection_1).with_context(|| {
        format!("Failed to read collection {}", args.collection_1.display())
    })?;
    let second = read_collection(&args.collection_2).with_context(|| {
        format!("Failed to read collection {}", args.collection_2.display())
    })?;

    // Step 3: Diff
    info!("Step 3/4: Comparing collections...");
    let rules = TradeRules::default();
    let report = diff_collections(&first, &second, &database, &rules);

    log_stats("Collection 1", first.len(), &report.stats_1);
    log_stats("Collection 2", second.len(), &report.stats_2);

    // Step 4: Render
    info!("Step 4/4: Rendering report...");
    let rendered = render_report(&report, &RenderOptions::from_rules(&rules));

    let elapsed = start_time.elapsed();
    info!("Comparison completed in {:.2}s", elapsed.as_secs_f64());

    if rendered.is_empty() {
        Ok(format!("{}\n", NO_TRADES_MESSAGE))
    } else {
        Ok(rendered)
    }
}

/// Log how many cards each filter stage kept
///
/// **Private** - internal helper for run_trade
fn log_stats(label: &str, total: usize, stats: &DiffStats) {
    info!(
        "{}: {} cards, {} exclusive, {} tradable ({} without card data)",
        label, total, stats.exclusive, stats.surplus, stats.unresolved
    );
}

/// Validate trade arguments
///
/// **Public** - can be called before execute_trade for early validation
pub fn validate_args(args: &TradeArgs) -> Result<()> {
    if args.collection_1.as_os_str().is_empty() || args.collection_2.as_os_str().is_empty() {
        anyhow::bail!("Both collection paths are required");
    }

    if args.card_data.as_os_str().is_empty() {
        anyhow::bail!("Card data path cannot be empty");
    }

    if args.data_url.is_empty() {
        anyhow::bail!("Card data URL cannot be empty");
    }

    if !args.data_url.starts_with("http://") && !args.data_url.starts_with("https://") {
        anyhow::bail!("Card data URL must start with http:// or https://");
    }

    Ok(())
}
