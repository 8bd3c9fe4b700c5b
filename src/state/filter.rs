//! Free-text filter over the roster snapshot.

use crate::model::Record;

/// Result of applying a query to the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The query was empty. The caller restores canonical = snapshot.
    Reset,
    /// Records that matched, in snapshot order. May be empty.
    Matches(Vec<Record>),
}

/// Filter `snapshot` by `query`.
///
/// A record matches when its name contains the query ignoring case, or its
/// email or role text contains the query exactly. Substring only; no
/// tokenizing, no fuzzy matching.
pub fn filter(snapshot: &[Record], query: &str) -> FilterOutcome {
    if query.is_empty() {
        return FilterOutcome::Reset;
    }
    let query_lower = query.to_lowercase();
    FilterOutcome::Matches(
        snapshot
            .iter()
            .filter(|r| matches_lowered(r, query, &query_lower))
            .cloned()
            .collect(),
    )
}

/// Whether a single record matches a non-empty query.
pub fn matches(record: &Record, query: &str) -> bool {
    matches_lowered(record, query, &query.to_lowercase())
}

fn matches_lowered(record: &Record, query: &str, query_lower: &str) -> bool {
    record.name.to_lowercase().contains(query_lower)
        || record.email.contains(query)
        || record.role.as_str().contains(query)
}
