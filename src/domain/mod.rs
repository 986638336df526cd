//! Domain primitives for the movie catalog.
//!
//! Newtype wrappers keep catalog identifiers from mixing with other strings
//! and give the cache categories a closed, typed vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a catalog entry.
///
/// The catalog serves numeric identifiers in list payloads and string
/// identifiers elsewhere; both are normalized to a single string
/// representation here.
///
/// # Examples
///
/// ```rust
/// use cinedex::domain::MovieId;
///
/// let id = MovieId::from(603);
/// assert_eq!(id.as_str(), "603");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as it appears in catalog paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A fixed movie list the catalog exposes.
///
/// Each category is cached in its own table, so one movie may be cached
/// under several categories as independent rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Popular,
    Upcoming,
}

impl Category {
    /// Catalog path segment for the category's list endpoint.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Popular => "movie/popular",
            Self::Upcoming => "movie/upcoming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::Upcoming => write!(f, "upcoming"),
        }
    }
}
