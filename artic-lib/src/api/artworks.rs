//! Artworks listing endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::ApiPage;
use super::CatalogSource;
use super::PAGE_SIZE;
use super::Page;
use crate::ArticClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Artwork;
use crate::model::PaginationMeta;

/// Builds `{base}/artworks?page={page}&limit=12`.
pub fn artworks_url(base: &Url, page: ApiPage) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("artworks");
    }
    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string())
        .append_pair("limit", &PAGE_SIZE.to_string());
    url
}

/// Response body of the artworks listing.
#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    data: Vec<Artwork>,
    #[serde(default)]
    pagination: PaginationMeta,
}

impl ArticClient {
    /// Fetches one page of artworks.
    ///
    /// Makes a single request with no retry. Non-success statuses, transport
    /// failures and unexpected bodies are all returned as errors.
    pub async fn fetch_page(&self, page: ApiPage) -> Result<Page, Error> {
        let url = artworks_url(self.base_url(), page);
        log::debug!("GET {}", url);

        let mut request = self.http_client().get(url.as_str());
        if let Some(timeout) = self.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let parsed: ArtworksResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

        log::debug!(
            "page {}: {} records, total {}",
            page,
            parsed.data.len(),
            parsed.pagination.total_records
        );

        Ok(Page::new(parsed.data, parsed.pagination))
    }

    /// Fetches one page, treating every failure as an empty page.
    ///
    /// The error is logged and an empty page with a zero total is returned,
    /// so callers cannot tell "no results" from "fetch failed".
    pub async fn load_page(&self, page: ApiPage) -> Page {
        match self.fetch_page(page).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("Error loading artworks page {}: {}", page, e);
                Page::empty()
            }
        }
    }
}

#[async_trait]
impl CatalogSource for ArticClient {
    async fn fetch_page(&self, page: ApiPage) -> Result<Page, Error> {
        ArticClient::fetch_page(self, page).await
    }
}
