//! Headless state behind the artwork table.
//!
//! [`TableView`] owns the rows of the visible page, the latest total, the
//! page cursor and the [`SelectionIndex`]. Front ends feed it page-change and
//! selection-change events and render from its accessors.
//!
//! Fetching is split in two so the caller decides how to run it: an event
//! returns a [`FetchRequest`], the caller fetches `request.api_page()`, and
//! the outcome goes back through [`TableView::apply_fetch`]. Each request
//! carries a generation; only the latest one issued is ever applied, so a
//! slow response for a page the user already left is dropped.

use std::collections::HashSet;
use std::fmt;

use crate::api::ApiPage;
use crate::api::CatalogSource;
use crate::api::PAGE_SIZE;
use crate::api::Page;
use crate::api::UiPage;
use crate::error::Error;
use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::selection::SelectionIndex;

/// Whether a fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Idle,
}

/// The user moved to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangeEvent {
    pub page: UiPage,
}

/// The set of selected rows on the visible page changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChangeEvent {
    /// Every row that is now selected, in display order.
    pub selected_records: Vec<Artwork>,
}

/// A page fetch the view is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    generation: u64,
    page: UiPage,
}

impl FetchRequest {
    /// Generation this request was issued with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The table page being loaded.
    pub fn page(&self) -> UiPage {
        self.page
    }

    /// The page number to send to the API.
    pub fn api_page(&self) -> ApiPage {
        self.page.to_api()
    }
}

/// 1-based inclusive range of records shown, plus the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl DisplayRange {
    /// Computes the range for `page`.
    ///
    /// `end` is clamped to `total` only, so a stale or zero total can put it
    /// below `start`.
    pub fn compute(page: UiPage, page_size: usize, total: usize) -> Self {
        let start = page.index() * page_size + 1;
        let end = (start + page_size - 1).min(total);
        Self { start, end, total }
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// State of the paginated, multi-selectable artwork table.
#[derive(Debug)]
pub struct TableView {
    records: Vec<Artwork>,
    total_records: usize,
    current_page: UiPage,
    page_size: usize,
    state: LoadState,
    selection: SelectionIndex,
    generation: u64,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    /// Creates a view on the first page, waiting for its first load.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            total_records: 0,
            current_page: UiPage::FIRST,
            page_size: PAGE_SIZE,
            state: LoadState::Loading,
            selection: SelectionIndex::new(),
            generation: 0,
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Starts the initial load of the first page.
    pub fn mount(&mut self) -> FetchRequest {
        self.on_page_change(PageChangeEvent {
            page: UiPage::FIRST,
        })
    }

    /// Moves to `event.page` and starts loading it.
    ///
    /// The previous page's rows are dropped so they are never paired with
    /// the new page's selection. Any request issued before this one becomes
    /// stale.
    pub fn on_page_change(&mut self, event: PageChangeEvent) -> FetchRequest {
        self.current_page = event.page;
        self.records.clear();
        self.state = LoadState::Loading;
        self.generation += 1;
        log::debug!(
            "loading page {} (api page {}, generation {})",
            event.page.index(),
            event.page.to_api(),
            self.generation
        );
        FetchRequest {
            generation: self.generation,
            page: event.page,
        }
    }

    /// Applies the outcome of a fetch.
    ///
    /// Returns `false` and changes nothing if `request` is not the latest one
    /// issued. Otherwise the view always ends up idle: a success replaces the
    /// rows and total, a failure is logged and leaves an empty table with the
    /// previous total.
    pub fn apply_fetch(&mut self, request: FetchRequest, result: Result<Page, Error>) -> bool {
        if request.generation != self.generation {
            log::debug!(
                "dropping stale response for page {} (generation {}, latest {})",
                request.page.index(),
                request.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.total_records = page.total_records();
                self.records = page.into_records();
            }
            Err(e) => {
                log::error!(
                    "Error loading artworks page {}: {}",
                    request.api_page(),
                    e
                );
                self.records.clear();
            }
        }
        self.state = LoadState::Idle;
        true
    }

    /// Fetches `request` from `source` and applies the outcome.
    pub async fn load<S>(&mut self, source: &S, request: FetchRequest) -> bool
    where
        S: CatalogSource + ?Sized,
    {
        let result = source.fetch_page(request.api_page()).await;
        self.apply_fetch(request, result)
    }

    /// Records the rows selected on the current page, replacing whatever was
    /// selected there before.
    ///
    /// Ignored while a page is loading, since the visible rows may belong to
    /// the page being left. Returns whether the event was applied.
    pub fn on_selection_change(&mut self, event: SelectionChangeEvent) -> bool {
        if self.state == LoadState::Loading {
            log::debug!("ignoring selection change while loading");
            return false;
        }
        let ids = event.selected_records.iter().map(|record| record.id);
        self.selection.set_selected_ids(self.current_page, ids);
        true
    }

    /// Builds the selection event for toggling the row at `row`.
    ///
    /// Returns `None` if there is no such row.
    pub fn toggle_row(&self, row: usize) -> Option<SelectionChangeEvent> {
        let target = self.records.get(row)?.id;
        let mut ids = self.selected_ids();
        if !ids.remove(&target) {
            ids.insert(target);
        }
        Some(self.event_for(&ids))
    }

    /// Builds the selection event for the header checkbox: selects every
    /// visible row, or clears them all if they are already selected.
    pub fn toggle_all(&self) -> SelectionChangeEvent {
        let all_selected = !self.records.is_empty()
            && self
                .records
                .iter()
                .all(|record| self.selection.is_selected(self.current_page, record.id));
        if all_selected {
            SelectionChangeEvent {
                selected_records: Vec::new(),
            }
        } else {
            SelectionChangeEvent {
                selected_records: self.records.clone(),
            }
        }
    }

    fn event_for(&self, ids: &HashSet<ArtworkId>) -> SelectionChangeEvent {
        SelectionChangeEvent {
            selected_records: self
                .records
                .iter()
                .filter(|record| ids.contains(&record.id))
                .cloned()
                .collect(),
        }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Rows of the current page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Total from the latest successful fetch.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// The 0-based page currently shown.
    pub fn current_page(&self) -> UiPage {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a fetch is in flight.
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Shorthand for `load_state() == LoadState::Loading`.
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// The per-page selection store.
    pub fn selection(&self) -> &SelectionIndex {
        &self.selection
    }

    /// Ids selected on the current page.
    pub fn selected_ids(&self) -> HashSet<ArtworkId> {
        self.selection.get_selected_ids(self.current_page)
    }

    /// Visible rows that are selected, in display order.
    pub fn selected_records(&self) -> Vec<&Artwork> {
        let ids = self.selected_ids();
        self.records
            .iter()
            .filter(|record| ids.contains(&record.id))
            .collect()
    }

    /// Whether the visible row at `row` is selected.
    pub fn is_row_selected(&self, row: usize) -> bool {
        self.records
            .get(row)
            .is_some_and(|record| self.selection.is_selected(self.current_page, record.id))
    }

    /// Number of rows selected on the current page.
    pub fn selected_count(&self) -> usize {
        self.selection.selected_count(self.current_page)
    }

    /// Number of rows selected across all pages.
    pub fn total_selected_count(&self) -> usize {
        self.selection.total_selected_count()
    }

    /// Range of records shown on the current page.
    pub fn range(&self) -> DisplayRange {
        DisplayRange::compute(self.current_page, self.page_size, self.total_records)
    }

    /// `"Showing X to Y of Z entries"` for the current page.
    pub fn page_report(&self) -> String {
        self.range().to_string()
    }

    /// Number of pages at the current total.
    pub fn page_count(&self) -> usize {
        self.total_records.div_ceil(self.page_size)
    }

    /// The last page, or the first if the total is zero.
    pub fn last_page(&self) -> UiPage {
        UiPage(self.page_count().saturating_sub(1))
    }

    /// The next page, if the total says there is one.
    pub fn next_page(&self) -> Option<UiPage> {
        let next = self.current_page.index() + 1;
        (next < self.page_count()).then_some(UiPage(next))
    }

    /// The previous page, if not on the first.
    pub fn prev_page(&self) -> Option<UiPage> {
        self.current_page.index().checked_sub(1).map(UiPage)
    }
}
