//! Abstraction over where pages of artworks come from.

use async_trait::async_trait;

use super::ApiPage;
use super::Page;
use crate::error::Error;

/// A source of artwork pages.
///
/// [`ArticClient`](crate::ArticClient) is the production implementation; the
/// table view only depends on this trait.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page of artworks.
    async fn fetch_page(&self, page: ApiPage) -> Result<Page, Error>;
}
