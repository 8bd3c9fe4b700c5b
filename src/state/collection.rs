//! Collection manager: the single owner of roster state.
//!
//! Every operation the presentation layer can invoke lives here. Each one
//! mutates the store, selection and pagination together and finishes with
//! [`CollectionManager::settle`], so derived state (page count, window,
//! markers) is always consistent before the next draw.

use crate::model::{Record, RecordId, Role, ValidationError};
use crate::state::edit::{self, EditDraft};
use crate::state::filter::{self, FilterOutcome};
use crate::state::pagination::{self, PageWindow, Pagination};
use crate::state::selection::{SelectAllMode, Selection};
use crate::state::store::RecordStore;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info};

/// Roster state: records, search query, pagination, selection and edit drafts.
#[derive(Debug, Clone, Default)]
pub struct CollectionManager {
    store: RecordStore,
    query: String,
    pagination: Pagination,
    selection: Selection,
    drafts: HashMap<RecordId, EditDraft>,
}

impl CollectionManager {
    /// Empty collection with the given select-all policy.
    pub fn new(mode: SelectAllMode) -> Self {
        Self {
            selection: Selection::new(mode),
            ..Self::default()
        }
    }

    /// Populate from the inbound feed.
    ///
    /// Replaces everything: query, selection and drafts are reset and the
    /// view returns to page 1.
    pub fn load(&mut self, records: Vec<Record>) {
        info!(count = records.len(), "Roster loaded");
        self.store.load(records);
        self.query.clear();
        self.selection = Selection::new(self.selection.mode());
        self.drafts.clear();
        self.pagination = Pagination::new();
        self.settle();
    }

    // ===== Read side =====

    /// The list being browsed (filtered while a query is active).
    pub fn records(&self) -> &[Record] {
        self.store.canonical()
    }

    /// The full roster regardless of search.
    pub fn all_records(&self) -> &[Record] {
        self.store.snapshot()
    }

    /// Look up a browsable record.
    pub fn record(&self, id: &RecordId) -> Option<&Record> {
        self.store.get(id)
    }

    /// Active search query. Empty when not searching.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of browsable records.
    pub fn visible_count(&self) -> usize {
        self.store.canonical().len()
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Page count, at least 1.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    /// Index window of the current page.
    pub fn window(&self) -> PageWindow {
        self.pagination.window()
    }

    /// Records on the current page, without padding.
    pub fn page_records(&self) -> &[Record] {
        &self.store.canonical()[self.pagination.window().range()]
    }

    /// Current page padded to exactly [`pagination::PAGE_SIZE`] slots.
    pub fn visible_rows(&self) -> Vec<Option<&Record>> {
        pagination::pad_to_page_size(self.page_records())
    }

    /// Selected ids.
    pub fn selected_ids(&self) -> &HashSet<RecordId> {
        self.selection.ids()
    }

    /// Pages whose "select all" checkbox is checked.
    pub fn page_markers(&self) -> &BTreeSet<usize> {
        self.selection.page_markers()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    /// Whether the current page's "select all" checkbox is checked.
    pub fn is_current_page_marked(&self) -> bool {
        self.selection.is_page_marked(self.current_page())
    }

    /// Select-all policy in effect.
    pub fn select_all_mode(&self) -> SelectAllMode {
        self.selection.mode()
    }

    /// Whether `id` is in editing.
    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.drafts.contains_key(id)
    }

    /// Draft for a row in editing.
    pub fn draft(&self, id: &RecordId) -> Option<&EditDraft> {
        self.drafts.get(id)
    }

    /// Mutable draft for a row in editing.
    pub fn draft_mut(&mut self, id: &RecordId) -> Option<&mut EditDraft> {
        self.drafts.get_mut(id)
    }

    // ===== Search =====

    /// Apply a search query.
    ///
    /// A non-empty query filters the snapshot and returns to page 1. An empty
    /// query restores the full roster and keeps the current page. Either way
    /// the selection is pruned to browsable ids and page markers are dropped,
    /// since page numbers now index a different list.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        match filter::filter(self.store.snapshot(), query) {
            FilterOutcome::Reset => self.store.restore_snapshot(),
            FilterOutcome::Matches(records) => {
                self.store.replace_canonical(records);
                self.pagination.first_page();
            }
        }
        debug!(query, matches = self.visible_count(), "Search applied");

        let store = &self.store;
        self.selection.retain(|id| store.contains(id));
        self.selection.clear_markers();
        self.drafts.retain(|id, _| store.contains(id));
        self.settle();
    }

    // ===== Pages =====

    /// Advance `step` pages. Refused past the last page.
    pub fn next_page(&mut self, step: usize) -> bool {
        self.pagination.next(step)
    }

    /// Go back `step` pages. Refused below page 1.
    pub fn prev_page(&mut self, step: usize) -> bool {
        self.pagination.prev(step)
    }

    /// Jump to page `n`.
    ///
    /// Precondition: `1 <= n <= total_pages()`. Callers offer one control per
    /// existing page.
    pub fn select_page(&mut self, n: usize) {
        self.pagination.select_page(n);
    }

    // ===== Selection =====

    /// Flip selection of a browsable record. Unknown ids are ignored.
    pub fn toggle_select_one(&mut self, id: &RecordId) {
        if !self.store.contains(id) {
            debug!(%id, "Ignoring selection of unknown record");
            return;
        }
        self.selection.toggle_one(id);
        self.settle();
    }

    /// Header checkbox on the current page.
    ///
    /// `checked` is the state the checkbox shows after the click.
    pub fn toggle_select_all_on_page(&mut self, checked: bool) {
        let page_ids: Vec<RecordId> = self.page_records().iter().map(|r| r.id().clone()).collect();
        let page = self.current_page();
        self.selection.toggle_all_on_page(&page_ids, page, checked);
        self.settle();
    }

    // ===== Deletes =====

    /// Delete one record by id. Unknown ids are a no-op.
    ///
    /// The shrink rule looks at the window from before the removal; the
    /// removal comes second; `settle` reconciles last.
    pub fn delete_one(&mut self, id: &RecordId) -> Option<Record> {
        if !self.store.contains(id) {
            debug!(%id, "Delete of unknown record ignored");
            return None;
        }
        let shrink = self.pagination.should_shrink_after_single_delete();

        let removed = self.store.remove(id);
        self.selection.remove(id);
        self.drafts.remove(id);

        if shrink {
            self.pagination.step_back();
        }
        self.settle();
        info!(%id, remaining = self.visible_count(), "Record deleted");
        removed
    }

    /// Delete every selected record, then clear the selection.
    ///
    /// Returns the number of records removed. No-op when nothing is selected.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let shrink = self.pagination.should_shrink_after_bulk_delete();

        let removed = self.store.remove_all(self.selection.ids());
        let selected = self.selection.ids();
        self.drafts.retain(|id, _| !selected.contains(id));
        self.selection.clear_all();

        if shrink {
            self.pagination.step_back();
        }
        self.settle();
        info!(removed, remaining = self.visible_count(), "Selected records deleted");
        removed
    }

    // ===== Edit =====

    /// Put a row into editing. Returns false for unknown ids.
    ///
    /// Re-entering a row already in editing keeps its draft.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.store.get(id) else {
            return false;
        };
        self.drafts
            .entry(id.clone())
            .or_insert_with(|| EditDraft::from_record(record));
        true
    }

    /// Leave editing without saving.
    pub fn cancel_edit(&mut self, id: &RecordId) {
        self.drafts.remove(id);
    }

    /// Validate and write new field values into the record.
    ///
    /// On success the record is updated in place (identity kept) and its row
    /// leaves editing. On failure nothing is written and the row stays in
    /// editing.
    pub fn save_edit(
        &mut self,
        id: &RecordId,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<(), ValidationError> {
        edit::validate(name, email)?;
        let written = self.store.update(id, |record| {
            record.name = name.to_string();
            record.email = email.to_string();
            record.role = role;
        });
        if !written {
            return Err(ValidationError::UnknownRecord(id.clone()));
        }
        self.drafts.remove(id);
        self.settle();
        info!(%id, "Record edited");
        Ok(())
    }

    /// Save the row's current draft.
    pub fn save_draft(&mut self, id: &RecordId) -> Result<(), ValidationError> {
        let Some(draft) = self.drafts.get(id).cloned() else {
            return Err(ValidationError::UnknownRecord(id.clone()));
        };
        self.save_edit(id, &draft.name, &draft.email, draft.role)
    }

    // ===== Derived state =====

    /// Recompute page count, window and (in recompute mode) page markers.
    fn settle(&mut self) {
        self.pagination.recompute(self.store.canonical().len());
        self.selection.sync_markers(self.store.canonical());
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
