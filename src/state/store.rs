//! Record store: the canonical list and the fixed snapshot.
//!
//! The canonical list is what the operator currently sees (filtered when a
//! query is active). The snapshot is the full roster and is only replaced by
//! `load`. Edits and deletes are applied to both lists by id, so clearing a
//! search never brings back a deleted record or a pre-edit value.

use crate::model::{Record, RecordId};
use std::collections::HashSet;

/// Owns the two record lists. Performs no validation.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    canonical: Vec<Record>,
    snapshot: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both the canonical list and the snapshot.
    pub fn load(&mut self, records: Vec<Record>) {
        self.canonical = records.clone();
        self.snapshot = records;
    }

    /// Replace the canonical list only. Used by search.
    pub fn replace_canonical(&mut self, records: Vec<Record>) {
        self.canonical = records;
    }

    /// Make the canonical list equal to the snapshot again.
    pub fn restore_snapshot(&mut self) {
        self.canonical = self.snapshot.clone();
    }

    /// The list the operator is browsing.
    pub fn canonical(&self) -> &[Record] {
        &self.canonical
    }

    /// The full roster, unaffected by search.
    pub fn snapshot(&self) -> &[Record] {
        &self.snapshot
    }

    /// Position of `id` in the canonical list.
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.canonical.iter().position(|r| r.id() == id)
    }

    /// Look up a record in the canonical list.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.canonical.iter().find(|r| r.id() == id)
    }

    /// Whether `id` is in the canonical list.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    /// Apply `f` to the record with `id` in both lists.
    ///
    /// Returns false when the canonical list has no such record; the snapshot
    /// is left alone in that case.
    pub fn update(&mut self, id: &RecordId, f: impl Fn(&mut Record)) -> bool {
        let Some(record) = self.canonical.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        f(record);
        if let Some(record) = self.snapshot.iter_mut().find(|r| r.id() == id) {
            f(record);
        }
        true
    }

    /// Remove the record with `id` from both lists, preserving order.
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let pos = self.position(id)?;
        let removed = self.canonical.remove(pos);
        self.snapshot.retain(|r| r.id() != id);
        Some(removed)
    }

    /// Remove every record whose id is in `ids` from both lists in one pass.
    ///
    /// Returns how many records left the canonical list.
    pub fn remove_all(&mut self, ids: &HashSet<RecordId>) -> usize {
        let before = self.canonical.len();
        self.canonical.retain(|r| !ids.contains(r.id()));
        self.snapshot.retain(|r| !ids.contains(r.id()));
        before - self.canonical.len()
    }
}
