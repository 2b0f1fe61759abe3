//! Page types for paginated artwork results.

use std::fmt;

use crate::error::Error;
use crate::model::Artwork;
use crate::model::PaginationMeta;

/// Number of records requested per page. Always sent as `limit`.
pub const PAGE_SIZE: usize = 12;

/// 0-based page cursor used by the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UiPage(pub usize);

/// 1-based page number used at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiPage(usize);

impl UiPage {
    /// The first page.
    pub const FIRST: UiPage = UiPage(0);

    /// Returns the cursor value.
    pub fn index(self) -> usize {
        self.0
    }

    /// Translates the cursor to the page number the API expects.
    pub fn to_api(self) -> ApiPage {
        ApiPage(self.0 + 1)
    }
}

impl ApiPage {
    /// Creates a 1-based API page, rejecting `0`.
    pub fn new(page: usize) -> Result<Self, Error> {
        if page == 0 {
            return Err(Error::InvalidPage("API pages start at 1".into()));
        }
        Ok(Self(page))
    }

    /// Returns the 1-based page number.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<UiPage> for ApiPage {
    fn from(page: UiPage) -> Self {
        page.to_api()
    }
}

impl fmt::Display for ApiPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A page of artworks with its pagination metadata.
#[derive(Debug, Clone, Default)]
pub struct Page {
    records: Vec<Artwork>,
    pagination: PaginationMeta,
}

impl Page {
    /// Creates a new page.
    pub fn new(records: Vec<Artwork>, pagination: PaginationMeta) -> Self {
        Self {
            records,
            pagination,
        }
    }

    /// An empty page with a zero total.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// Returns the pagination metadata.
    pub fn pagination(&self) -> &PaginationMeta {
        &self.pagination
    }

    /// Total record count reported by the API.
    pub fn total_records(&self) -> usize {
        self.pagination.total_records
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
