use serde::{Deserialize, Serialize};

use crate::domain::MovieId;

/// A movie as presented to consumers, decoupled from wire and storage formats.
///
/// Core fields are always present. `adult`, `video`, `genre_ids` and
/// `original_language` appear in some catalog payloads and not in others and
/// are carried as optional extensions rather than invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub genre_ids: Option<Vec<i64>>,
    pub original_language: Option<String>,
}

impl Movie {
    /// Full URL of the poster image, if the catalog provided one.
    #[must_use]
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{image_base_url}{path}"))
    }
}
