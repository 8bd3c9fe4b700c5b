//! Multi-selection of records and per-page "select all" markers.
//!
//! In [`SelectAllMode::Toggle`] the page marker is a blind flip: it records
//! that the header checkbox was clicked an odd number of times on that page,
//! nothing more. Unchecking rows by hand afterwards leaves the marker set.
//!
//! [`SelectAllMode::Recompute`] instead derives each marker from the
//! selection after every change: a page is marked iff it has rows and all of
//! them are selected.

use crate::model::{Record, RecordId};
use crate::state::pagination::PAGE_SIZE;
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// How the per-page "select all" marker is maintained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllMode {
    /// Flip on every header click.
    #[default]
    Toggle,
    /// Derive from the selection.
    Recompute,
}

impl SelectAllMode {
    /// Config and CLI spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SelectAllMode::Toggle => "toggle",
            SelectAllMode::Recompute => "recompute",
        }
    }
}

impl fmt::Display for SelectAllMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown select-all mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown select-all mode '{0}' (expected 'toggle' or 'recompute')")]
pub struct UnknownSelectAllMode(pub String);

impl FromStr for SelectAllMode {
    type Err = UnknownSelectAllMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(SelectAllMode::Toggle),
            "recompute" => Ok(SelectAllMode::Recompute),
            other => Err(UnknownSelectAllMode(other.to_string())),
        }
    }
}

/// Selected ids plus page markers.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<RecordId>,
    page_markers: BTreeSet<usize>,
    mode: SelectAllMode,
}

impl Selection {
    /// Empty selection using `mode` for page markers.
    pub fn new(mode: SelectAllMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Marker policy in effect.
    pub fn mode(&self) -> SelectAllMode {
        self.mode
    }

    /// Selected ids.
    pub fn ids(&self) -> &HashSet<RecordId> {
        &self.ids
    }

    /// Pages whose "select all" checkbox is shown checked.
    pub fn page_markers(&self) -> &BTreeSet<usize> {
        &self.page_markers
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Whether `page` shows its "select all" checkbox checked.
    pub fn is_page_marked(&self, page: usize) -> bool {
        self.page_markers.contains(&page)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id`. Returns whether it is now selected.
    pub fn toggle_one(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Header checkbox click on `page`.
    ///
    /// Adds every id in `page_ids` when `checked`, removes them otherwise. In
    /// toggle mode the page marker flips regardless of `checked`.
    pub fn toggle_all_on_page(&mut self, page_ids: &[RecordId], page: usize, checked: bool) {
        if self.mode == SelectAllMode::Toggle && !self.page_markers.remove(&page) {
            self.page_markers.insert(page);
        }
        for id in page_ids {
            if checked {
                self.ids.insert(id.clone());
            } else {
                self.ids.remove(id);
            }
        }
    }

    /// Drop a single id.
    pub fn remove(&mut self, id: &RecordId) {
        self.ids.remove(id);
    }

    /// Keep only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    /// Forget every page marker.
    pub fn clear_markers(&mut self) {
        self.page_markers.clear();
    }

    /// Empty both the selection and the markers.
    pub fn clear_all(&mut self) {
        self.ids.clear();
        self.page_markers.clear();
    }

    /// In recompute mode, rebuild every marker from the paged `visible` list.
    ///
    /// No-op in toggle mode.
    pub fn sync_markers(&mut self, visible: &[Record]) {
        if self.mode != SelectAllMode::Recompute {
            return;
        }
        self.page_markers = visible
            .chunks(PAGE_SIZE)
            .enumerate()
            .filter(|(_, page)| page.iter().all(|r| self.ids.contains(r.id())))
            .map(|(index, _)| index + 1)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn id(s: &str) -> RecordId {
        RecordId::new(s).unwrap()
    }

    fn records(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new(id(&i.to_string()), "Some Name", "a@b.co", Role::Member))
            .collect()
    }

    #[test]
    fn toggle_one_twice_restores_original_state() {
        let mut sel = Selection::default();
        assert!(sel.toggle_one(&id("1")));
        assert!(sel.is_selected(&id("1")));
        assert!(!sel.toggle_one(&id("1")));
        assert!(sel.is_empty());
    }

    #[test]
    fn select_all_checked_adds_page_ids_and_marks_page() {
        let mut sel = Selection::new(SelectAllMode::Toggle);
        sel.toggle_all_on_page(&[id("1"), id("2")], 1, true);
        assert_eq!(sel.len(), 2);
        assert!(sel.is_page_marked(1));
    }

    #[test]
    fn select_all_unchecked_removes_page_ids_and_unmarks_page() {
        let mut sel = Selection::new(SelectAllMode::Toggle);
        sel.toggle_all_on_page(&[id("1"), id("2")], 1, true);
        sel.toggle_all_on_page(&[id("1"), id("2")], 1, false);
        assert!(sel.is_empty());
        assert!(!sel.is_page_marked(1));
    }

    #[test]
    fn toggle_mode_marker_is_blind_flip() {
        let mut sel = Selection::new(SelectAllMode::Toggle);
        sel.toggle_all_on_page(&[id("1"), id("2")], 1, true);
        sel.toggle_one(&id("1"));
        assert!(
            sel.is_page_marked(1),
            "manual uncheck leaves the marker set in toggle mode"
        );
        // flip happens even when `checked` disagrees with the marker
        sel.toggle_all_on_page(&[id("1"), id("2")], 1, true);
        assert!(!sel.is_page_marked(1));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn recompute_mode_tracks_actual_selection() {
        let visible = records(12);
        let page_one: Vec<RecordId> = visible[..10].iter().map(|r| r.id().clone()).collect();
        let mut sel = Selection::new(SelectAllMode::Recompute);

        sel.toggle_all_on_page(&page_one, 1, true);
        sel.sync_markers(&visible);
        assert!(sel.is_page_marked(1));
        assert!(!sel.is_page_marked(2));

        sel.toggle_one(&id("3"));
        sel.sync_markers(&visible);
        assert!(!sel.is_page_marked(1));

        sel.toggle_one(&id("11"));
        sel.toggle_one(&id("12"));
        sel.sync_markers(&visible);
        assert!(sel.is_page_marked(2));
    }

    #[test]
    fn recompute_mode_does_not_mark_empty_list() {
        let mut sel = Selection::new(SelectAllMode::Recompute);
        sel.sync_markers(&[]);
        assert!(sel.page_markers().is_empty());
    }

    #[test]
    fn sync_markers_is_noop_in_toggle_mode() {
        let visible = records(3);
        let mut sel = Selection::new(SelectAllMode::Toggle);
        sel.toggle_all_on_page(&[], 4, true);
        sel.sync_markers(&visible);
        assert!(sel.is_page_marked(4));
    }

    #[test]
    fn clear_all_empties_ids_and_markers() {
        let mut sel = Selection::new(SelectAllMode::Toggle);
        sel.toggle_all_on_page(&[id("1")], 1, true);
        sel.clear_all();
        assert!(sel.is_empty());
        assert!(sel.page_markers().is_empty());
    }

    #[test]
    fn retain_purges_ids() {
        let mut sel = Selection::default();
        sel.toggle_one(&id("1"));
        sel.toggle_one(&id("2"));
        sel.retain(|i| i.as_str() != "1");
        assert!(!sel.is_selected(&id("1")));
        assert!(sel.is_selected(&id("2")));
    }

    #[test]
    fn mode_parses_from_config_spelling() {
        assert_eq!("toggle".parse::<SelectAllMode>(), Ok(SelectAllMode::Toggle));
        assert_eq!("recompute".parse::<SelectAllMode>(), Ok(SelectAllMode::Recompute));
        assert!("majority".parse::<SelectAllMode>().is_err());
    }
}
