//! Pagination metadata

use serde::Deserialize;

/// Pagination metadata returned alongside each page of artworks.
///
/// Only `total_records` is needed to drive the table; the remaining fields
/// are kept when the API provides them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPagination")]
pub struct PaginationMeta {
    /// Total number of records across all pages.
    pub total_records: usize,
    /// 1-based page the response belongs to.
    pub current_page: Option<usize>,
    /// Total number of pages at the requested limit.
    pub total_pages: Option<usize>,
    /// Page size the API applied.
    pub per_page: Option<usize>,
}

impl PaginationMeta {
    /// Creates metadata carrying only a total.
    pub fn with_total(total_records: usize) -> Self {
        Self {
            total_records,
            ..Self::default()
        }
    }
}

/// Wire shape of the `pagination` object.
///
/// API versions disagree on the name of the total field.
#[derive(Debug, Default, Deserialize)]
struct RawPagination {
    #[serde(default)]
    total: Option<usize>,
    #[serde(default)]
    total_entries: Option<usize>,
    #[serde(default)]
    total_object: Option<usize>,
    #[serde(default)]
    current_page: Option<usize>,
    #[serde(default)]
    total_pages: Option<usize>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    per_page: Option<usize>,
}

impl From<RawPagination> for PaginationMeta {
    fn from(raw: RawPagination) -> Self {
        Self {
            total_records: raw
                .total
                .or(raw.total_entries)
                .or(raw.total_object)
                .unwrap_or(0),
            current_page: raw.current_page,
            total_pages: raw.total_pages,
            per_page: raw.limit.or(raw.per_page),
        }
    }
}
