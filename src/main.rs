//! PTCGP Trade CLI
//!
//! Compares two Pokemon TCG Pocket collections and lists the duplicate
//! cards each player holds that the other lacks, grouped by rarity.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use ptcgp_trade::commands::{execute_trade, validate_args, TradeArgs};
use ptcgp_trade::utils::config::{CARD_DATA_URL, DEFAULT_CARD_DATA_PATH};

/// PTCGP Trade - find tradable duplicates between two collections
#[derive(Parser, Debug)]
#[command(name = "ptcgp-trade")]
#[command(version, about, long_about = None)]
struct Cli {
    /// First collection JSON file (ptcgp.app export)
    collection_1: PathBuf,

    /// Second collection JSON file (ptcgp.app export)
    collection_2: PathBuf,

    /// Cache file for the downloaded card data
    #[arg(long, env = "PTCGP_CARD_DATA", default_value = DEFAULT_CARD_DATA_PATH)]
    card_data: PathBuf,

    /// URL of the card database
    #[arg(long, env = "PTCGP_DATA_URL", default_value = CARD_DATA_URL)]
    data_url: String,

    /// Download the card data again even if it is cached
    #[arg(long)]
    refresh: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = TradeArgs {
        collection_1: cli.collection_1,
        collection_2: cli.collection_2,
        card_data: cli.card_data,
        data_url: cli.data_url,
        refresh: cli.refresh,
    };

    // Validate args first
    validate_args(&args)?;

    execute_trade(args)?;

    Ok(())
}
