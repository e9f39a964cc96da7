// src/store.rs
//
// Catalog Store: the loaded catalog plus the current filtered view and
// selection. One writer per field:
//   data/provenance  ← install()        (the Loader's result)
//   query/filtered   ← apply_query()
//   selected         ← select() and friends
// The filtered view holds positions into `data`; items are never mutated
// after install.

use crate::item::Item;
use crate::loader::{Loaded, Provenance};
use crate::query::SearchIndex;
use crate::share::ShareState;

#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    data: Vec<Item>,
    provenance: Option<Provenance>,
    status: String,
    index: SearchIndex,

    query: String,
    filtered: Vec<usize>,
    selected: Option<usize>, // into `filtered`
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a finished load, then re-run the current query.
    pub fn install(&mut self, loaded: Loaded) {
        logf!(
            "Store: install provenance={} items={}",
            loaded.provenance,
            loaded.items.len()
        );
        self.status = loaded.status_message();
        self.index = SearchIndex::build(&loaded.items);
        self.data = loaded.items;
        self.provenance = Some(loaded.provenance);
        let q = std::mem::take(&mut self.query);
        self.apply_query(&q);
    }

    /* ---------- catalog ---------- */

    pub fn data(&self) -> &[Item] { &self.data }

    pub fn is_loaded(&self) -> bool { self.provenance.is_some() }

    pub fn provenance(&self) -> Option<Provenance> { self.provenance }

    /// Banner text for the last install ("" before the first load).
    pub fn status(&self) -> &str { &self.status }

    /* ---------- query ---------- */

    pub fn query(&self) -> &str { &self.query }

    /// Recompute the filtered view; clears the selection, except that a
    /// single remaining item is selected automatically.
    pub fn apply_query(&mut self, query: &str) {
        self.query = s!(query);
        self.filtered = self.index.query(query);
        self.selected = if self.filtered.len() == 1 { Some(0) } else { None };
    }

    pub fn clear_query(&mut self) {
        self.apply_query("");
    }

    pub fn filtered_len(&self) -> usize { self.filtered.len() }

    pub fn filtered_item(&self, i: usize) -> Option<&Item> {
        self.filtered.get(i).and_then(|&ix| self.data.get(ix))
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Item> + '_ {
        self.filtered.iter().filter_map(|&ix| self.data.get(ix))
    }

    /// "N item(s)" for the count badge.
    pub fn count_label(&self) -> String {
        let n = self.filtered.len();
        format!("{} item{}", n, if n == 1 { "" } else { "s" })
    }

    /// What Export writes: the filtered view, or everything if it's empty.
    pub fn export_view(&self) -> Vec<&Item> {
        if self.filtered.is_empty() {
            self.data.iter().collect()
        } else {
            self.filtered().collect()
        }
    }

    /* ---------- selection ---------- */

    pub fn selected_index(&self) -> Option<usize> { self.selected }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.filtered_item(i))
    }

    /// Select position `i` of the filtered view. Out of range is a no-op.
    pub fn select(&mut self, i: usize) -> bool {
        if i >= self.filtered.len() {
            logd!("Select: {} out of range (len={})", i, self.filtered.len());
            return false;
        }
        self.selected = Some(i);
        logd!("Select: {} → {:?}", i, self.selected().map(|it| it.name.as_str()));
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn select_next(&mut self) -> bool {
        match self.selected {
            Some(i) => self.select(i + 1),
            None => self.select(0),
        }
    }

    pub fn select_prev(&mut self) -> bool {
        match self.selected {
            Some(i) if i > 0 => self.select(i - 1),
            _ => false,
        }
    }

    /// Position in the filtered view of the first item named exactly
    /// `name`, else of the first case-insensitive match. Duplicate names
    /// resolve to the earliest copy.
    pub fn find_in_view(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        if let Some(i) = self.filtered().position(|it| it.name == name) {
            return Some(i);
        }
        let want = name.to_lowercase();
        self.filtered().position(|it| it.name.to_lowercase() == want)
    }

    /* ---------- shareable state ---------- */

    pub fn share_state(&self) -> ShareState {
        ShareState {
            query: self.query.clone(),
            anchor: self.selected().map(|it| it.name.clone()),
        }
    }

    /// Apply a shared query, then select the anchored item if it is in view.
    /// Returns whether the anchor was found.
    pub fn restore(&mut self, state: &ShareState) -> bool {
        self.apply_query(&state.query);
        let Some(name) = state.anchor.as_deref() else {
            return false;
        };
        match self.find_in_view(name) {
            Some(i) => self.select(i),
            None => {
                logd!("Restore: anchor {:?} not in view", name);
                false
            }
        }
    }
}
