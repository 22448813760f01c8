//! Movie catalog domain model.

use serde::{Deserialize, Serialize};

/// Base URL for poster images served by the catalog's CDN.
pub const POSTER_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// A single movie as returned by the remote catalog.
///
/// Fields are taken verbatim from the catalog response; anything the
/// response omits falls back to its default rather than failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,

    #[serde(default)]
    pub title: String,

    /// Relative poster path, e.g. `/abc123.jpg`. `None` when the catalog
    /// has no artwork for this movie.
    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub popularity: f64,

    #[serde(default)]
    pub vote_average: f64,

    /// Release date as `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<String>,

    #[serde(default)]
    pub original_language: Option<String>,
}

impl MovieSummary {
    /// Full poster URL, or `None` when the movie has no poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", POSTER_IMAGE_BASE, path))
    }

    /// Release year, parsed from the leading segment of `release_date`.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let movie: MovieSummary = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.title, "");
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.popularity, 0.0);
    }

    #[test]
    fn poster_url_joins_cdn_base_and_path() {
        let movie: MovieSummary =
            serde_json::from_str(r#"{"id": 1, "poster_path": "/abc.jpg"}"#).unwrap();
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn release_year_comes_from_date_prefix() {
        let movie: MovieSummary = serde_json::from_str(
            r#"{"id": 1, "release_date": "2010-07-16"}"#,
        )
        .unwrap();
        assert_eq!(movie.release_year(), Some("2010"));

        let undated: MovieSummary = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(undated.release_year(), None);
    }
}
