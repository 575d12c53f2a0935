//! Rarity-grouped side-by-side report.

use super::layout::{format_cell, format_row, pair_rows, separator_line};
use crate::card::{Rarity, RarityState};
use crate::diff::{CardRecord, CardRecords, DiffReport, TradeRules};
use crate::utils::config::{
    COLUMN_WIDTH, LEFT_COLUMN_TITLE, RIGHT_COLUMN_TITLE, UNKNOWN_RARITY_TITLE,
};
use log::debug;

/// Settings for rendering a report
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Tiers in the order they are printed
    pub rarity_order: Vec<Rarity>,

    /// Tiers that are never printed
    pub banned_rarities: Vec<Rarity>,

    /// Width of each column in characters
    pub column_width: usize,
}

impl RenderOptions {
    /// Default layout with the rarity bans taken from `rules`
    pub fn from_rules(rules: &TradeRules) -> Self {
        Self {
            banned_rarities: rules.banned_rarities.clone(),
            ..Default::default()
        }
    }

    /// Tiers to print, in order, with banned ones removed
    pub fn visible_rarities(&self) -> impl Iterator<Item = Rarity> + '_ {
        self.rarity_order
            .iter()
            .copied()
            .filter(|rarity| !self.banned_rarities.contains(rarity))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            rarity_order: Rarity::ALL.to_vec(),
            banned_rarities: TradeRules::default().banned_rarities,
            column_width: COLUMN_WIDTH,
        }
    }
}

/// Render a diff report as text
///
/// **Public** - main entry point for report output
pub fn render_report(report: &DiffReport, options: &RenderOptions) -> String {
    render_columns(&report.collection_1, &report.collection_2, options)
}

/// Render two record maps as side-by-side tables grouped by rarity
///
/// A tier is skipped when neither side has a card of that rarity. Cards
/// whose metadata could not be resolved go into a final "Unknown" group;
/// cards with a rarity outside `rarity_order` are not printed. Returns an
/// empty string when nothing is printable.
pub fn render_columns(left: &CardRecords, right: &CardRecords, options: &RenderOptions) -> String {
    let mut out = String::new();

    for rarity in options.visible_rarities() {
        let left_group = select(left, |r| r.rarity.tier() == Some(rarity));
        let right_group = select(right, |r| r.rarity.tier() == Some(rarity));
        render_group(&mut out, rarity.label(), &left_group, &right_group, options.column_width);
    }

    let left_unknown = select(left, |r| r.rarity == RarityState::Unresolved);
    let right_unknown = select(right, |r| r.rarity == RarityState::Unresolved);
    render_group(
        &mut out,
        UNKNOWN_RARITY_TITLE,
        &left_unknown,
        &right_unknown,
        options.column_width,
    );

    out
}

/// Records matching `predicate`, in map order
///
/// **Private** - internal helper
fn select(records: &CardRecords, predicate: impl Fn(&CardRecord) -> bool) -> Vec<&CardRecord> {
    records.values().filter(|r| predicate(*r)).collect()
}

/// Append one rarity table to `out`
///
/// **Private** - does nothing when both groups are empty
fn render_group(
    out: &mut String,
    title: &str,
    left: &[&CardRecord],
    right: &[&CardRecord],
    width: usize,
) {
    if left.is_empty() && right.is_empty() {
        return;
    }

    debug!("{}: {} vs {} cards", title, left.len(), right.len());

    out.push_str(title);
    out.push('\n');
    out.push_str(&format_row(LEFT_COLUMN_TITLE, RIGHT_COLUMN_TITLE, width));
    out.push('\n');
    out.push_str(&separator_line(width));
    out.push('\n');

    for (l, r) in pair_rows(left.iter().copied(), right.iter().copied()) {
        out.push_str(&format_row(&format_cell(l), &format_cell(r), width));
        out.push('\n');
    }

    out.push('\n');
}
