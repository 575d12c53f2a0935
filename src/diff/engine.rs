//! Core diff engine implementation.
//! Builds the per-collection trade lists and attaches card metadata.

use super::filters::{exclusive_holdings, filter_banned_expansions, filter_by_threshold};
use super::schema::{CardRecord, CardRecords, DiffReport, DiffStats, TradeRules};
use crate::card::CardId;
use crate::collection::Collection;
use crate::metadata::CardDatabase;
use log::{debug, warn};

/// Compare two collections and list what each side can trade away
///
/// # Arguments
/// * `first` - The first collection
/// * `second` - The second collection
/// * `database` - Card metadata used for enrichment
/// * `rules` - Banned expansions and duplicate threshold
///
/// # Returns
/// DiffReport with one ordered record map per collection. Rarity bans are
/// not applied here; the renderer drops banned tiers.
///
/// # Example
/// ```ignore
/// let report = diff_collections(&first, &second, &database, &TradeRules::default());
/// assert!(report.collection_1.keys().all(|id| !second.contains_key(id)));
/// ```
pub fn diff_collections(
    first: &Collection,
    second: &Collection,
    database: &CardDatabase,
    rules: &TradeRules,
) -> DiffReport {
    let (collection_1, stats_1) = tradable_side("Collection 1", first, second, database, rules);
    let (collection_2, stats_2) = tradable_side("Collection 2", second, first, database, rules);

    DiffReport {
        collection_1,
        collection_2,
        stats_1,
        stats_2,
    }
}

/// Run the filter pipeline for one side of the diff
///
/// **Private** - internal helper for diff_collections
fn tradable_side(
    label: &str,
    own: &Collection,
    other: &Collection,
    database: &CardDatabase,
    rules: &TradeRules,
) -> (CardRecords, DiffStats) {
    // Step 1: Cards the other side lacks
    let exclusive = exclusive_holdings(own, other);
    let exclusive_count = exclusive.len();

    // Step 2: Drop un-tradable expansions
    let allowed = filter_banned_expansions(exclusive, &rules.banned_expansions);
    let allowed_count = allowed.len();

    // Step 3: Only surplus duplicates
    let surplus = filter_by_threshold(allowed, rules.min_count_exclusive);

    // Step 4: Attach metadata
    let records: CardRecords = surplus
        .into_iter()
        .map(|(id, count)| {
            let record = enrich_record(&id, count, database);
            (id, record)
        })
        .collect();

    let stats = DiffStats {
        exclusive: exclusive_count,
        tradable_expansion: allowed_count,
        surplus: records.len(),
        unresolved: records.values().filter(|r| !r.is_resolved()).count(),
    };

    debug!(
        "{}: {} exclusive, {} from tradable expansions, {} above threshold",
        label, stats.exclusive, stats.tradable_expansion, stats.surplus
    );

    (records, stats)
}

/// Resolve one identifier into a CardRecord
///
/// Malformed identifiers and failed lookups are logged and produce a
/// record without name or rarity instead of an error.
pub fn enrich_record(id: &str, count: u32, database: &CardDatabase) -> CardRecord {
    let card_id = match CardId::parse(id) {
        Ok(card_id) => card_id,
        Err(e) => {
            warn!("{}", e);
            return CardRecord::unresolved(id, count);
        }
    };

    match database.lookup(&card_id) {
        Some(meta) => CardRecord {
            id: id.to_string(),
            count,
            name: Some(meta.name),
            rarity: meta.rarity,
        },
        None => {
            warn!("No card data found for {}", id);
            CardRecord::unresolved(id, count)
        }
    }
}
