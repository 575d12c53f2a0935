//! Set-difference and business-rule filters over collections.

use crate::card::{expansion_code, normalize_alpha};
use crate::collection::Collection;

/// Cards in `own` whose identifier does not appear in `other`
///
/// Keeps `own`'s order and counts.
pub fn exclusive_holdings(own: &Collection, other: &Collection) -> Collection {
    own.iter()
        .filter(|(id, _)| !other.contains_key(id.as_str()))
        .map(|(id, count)| (id.clone(), *count))
        .collect()
}

/// Whether an identifier belongs to one of the banned expansions
///
/// Compares alpha-normalized codes so `A2α` and `A2a` match each other.
pub fn is_banned_expansion(identifier: &str, banned: &[String]) -> bool {
    let expansion = normalize_alpha(expansion_code(identifier));
    banned.iter().any(|b| normalize_alpha(b) == expansion)
}

/// Drop cards from banned expansions
pub fn filter_banned_expansions(holdings: Collection, banned: &[String]) -> Collection {
    holdings
        .into_iter()
        .filter(|(id, _)| !is_banned_expansion(id, banned))
        .collect()
}

/// Keep cards owned strictly more than `min_count_exclusive` times
pub fn filter_by_threshold(holdings: Collection, min_count_exclusive: u32) -> Collection {
    holdings
        .into_iter()
        .filter(|(_, count)| *count > min_count_exclusive)
        .collect()
}
