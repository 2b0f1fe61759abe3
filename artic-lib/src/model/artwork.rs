//! Artwork record

use serde::Deserialize;
use serde::Serialize;

use super::null_as_default;

/// Stable identifier of an artwork in the catalog.
pub type ArtworkId = u64;

/// One artwork entry returned by the catalog API.
///
/// The API emits `null` for many text fields and for undated works; those
/// read as the empty string and `0` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inscriptions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_start: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_end: i64,
}

impl Artwork {
    /// Creates an artwork with only an id and title set.
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: String::new(),
            artist_display: String::new(),
            inscriptions: String::new(),
            date_start: 0,
            date_end: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte — 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": "",
            "date_start": 1884,
            "date_end": 1886
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.place_of_origin, "France");
        assert_eq!(artwork.date_start, 1884);
        assert_eq!(artwork.date_end, 1886);
    }

    #[test]
    fn test_deserialize_nulls_and_missing() {
        let json = r#"{"id": 7, "title": null, "inscriptions": null, "date_start": -500}"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.title, "");
        assert_eq!(artwork.inscriptions, "");
        assert_eq!(artwork.artist_display, "");
        assert_eq!(artwork.date_start, -500);
        assert_eq!(artwork.date_end, 0);
    }

    #[test]
    fn test_id_is_required() {
        let result: Result<Artwork, _> = serde_json::from_str(r#"{"title": "Untitled"}"#);
        assert!(result.is_err());
    }
}
