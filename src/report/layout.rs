//! Column layout helpers.

use crate::diff::CardRecord;
use crate::utils::config::COLUMN_SEPARATOR;
use std::iter::Fuse;

/// Iterator pairing two sequences positionally
///
/// Yields `(Some(a), Some(b))` while both sides have items, then pairs the
/// remaining items of the longer side with `None`. Stops once both are
/// exhausted, so it yields `max(len_a, len_b)` rows.
#[derive(Debug, Clone)]
pub struct PairedRows<L, R> {
    left: Fuse<L>,
    right: Fuse<R>,
}

/// Pair two sequences row by row
pub fn pair_rows<L, R>(left: L, right: R) -> PairedRows<L::IntoIter, R::IntoIter>
where
    L: IntoIterator,
    R: IntoIterator,
{
    PairedRows {
        left: left.into_iter().fuse(),
        right: right.into_iter().fuse(),
    }
}

impl<L, R> Iterator for PairedRows<L, R>
where
    L: Iterator,
    R: Iterator,
{
    type Item = (Option<L::Item>, Option<R::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.next(), self.right.next()) {
            (None, None) => None,
            pair => Some(pair),
        }
    }
}

/// Text for one table cell: `<name> (<id> x<count>)`
///
/// An absent record is an empty cell; an unresolved name renders empty.
pub fn format_cell(record: Option<&CardRecord>) -> String {
    match record {
        Some(r) => format!("{} ({} x{})", r.name.as_deref().unwrap_or(""), r.id, r.count),
        None => String::new(),
    }
}

/// Two cells left-justified to `width` and joined by the column separator
pub fn format_row(left: &str, right: &str, width: usize) -> String {
    format!(
        "{:<width$}{}{:<width$}",
        left,
        COLUMN_SEPARATOR,
        right,
        width = width
    )
}

/// Horizontal rule under the column titles
pub fn separator_line(width: usize) -> String {
    format!("{}+{}", "-".repeat(width), "-".repeat(width))
}
