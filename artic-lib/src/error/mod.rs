//! Error types

mod api;

pub use api::*;

/// Top-level error type for the catalog library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error talking to the catalog API.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A page index that cannot be requested from the API.
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

impl Error {
    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status_code(),
            _ => None,
        }
    }
}
