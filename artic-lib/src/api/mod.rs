//! Catalog API operations

mod artworks;
mod page;
mod source;

pub use artworks::artworks_url;
pub use page::*;
pub use source::CatalogSource;
