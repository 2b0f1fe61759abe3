//! Data model types

mod artwork;
mod pagination;

pub use artwork::*;
pub use pagination::*;

use serde::Deserialize;
use serde::Deserializer;

/// Reads a JSON `null` (or a missing field, paired with `#[serde(default)]`)
/// as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
