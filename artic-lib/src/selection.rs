//! Page-scoped selection tracking.
//!
//! Selection state is keyed by the page it was made on, so navigating away
//! and back restores exactly what was selected there. An id selected on one
//! page is independent of the same id on any other page.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::api::UiPage;
use crate::model::ArtworkId;

/// Maps each page to the set of artwork ids selected on it.
///
/// Starts empty and is never pruned. Pages that were never touched read as
/// an empty selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionIndex {
    pages: HashMap<UiPage, HashSet<ArtworkId>>,
}

impl SelectionIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ids selected on `page`, or an empty set.
    pub fn get_selected_ids(&self, page: UiPage) -> HashSet<ArtworkId> {
        self.pages.get(&page).cloned().unwrap_or_default()
    }

    /// Replaces the selection for `page` with `ids`.
    ///
    /// The page's previous set is discarded wholesale; partial updates are
    /// not supported.
    pub fn set_selected_ids(&mut self, page: UiPage, ids: impl IntoIterator<Item = ArtworkId>) {
        self.pages.insert(page, ids.into_iter().collect());
    }

    /// Returns `true` if `id` is selected on `page`.
    pub fn is_selected(&self, page: UiPage, id: ArtworkId) -> bool {
        self.pages.get(&page).is_some_and(|ids| ids.contains(&id))
    }

    /// Number of ids selected on `page`.
    pub fn selected_count(&self, page: UiPage) -> usize {
        self.pages.get(&page).map_or(0, HashSet::len)
    }

    /// Number of ids selected across every page.
    pub fn total_selected_count(&self) -> usize {
        self.pages.values().map(HashSet::len).sum()
    }

    /// Iterates pages that have a recorded selection, including empty ones.
    pub fn pages(&self) -> impl Iterator<Item = (UiPage, &HashSet<ArtworkId>)> {
        self.pages.iter().map(|(page, ids)| (*page, ids))
    }

    /// Drops every recorded selection.
    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
