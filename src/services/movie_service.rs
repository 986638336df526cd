//! Repository contract for movie retrieval.
//!
//! This is the single source of truth exposed to use cases: category lists
//! are served cache-first from the local store, everything else passes
//! through to the remote catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::clients::tmdb::RemoteError;
use crate::db::StoreError;
use crate::domain::{Category, MovieId};
use crate::models::{Movie, MovieDetail, Video};

/// Failure of a repository operation, tagged with the pipeline stage that
/// produced it.
///
/// Network and storage failures are never merged: a caller can always tell
/// "the store broke before the network was tried" apart from "the network
/// also failed". Nothing is retried and no generic catch-all exists; the
/// originating error is forwarded unchanged.
#[derive(Debug, Error)]
pub enum MovieError {
    /// The initial cache read failed.
    #[error("reading the {category} cache failed: {source}")]
    LocalRead {
        category: Category,
        source: StoreError,
    },

    /// The remote fetch failed; the local store was left untouched.
    #[error(transparent)]
    RemoteFetch(#[from] RemoteError),

    /// Persisting the fetched batch failed; the transaction rolled back.
    #[error("writing the {category} cache failed: {source}")]
    LocalWrite {
        category: Category,
        source: StoreError,
    },

    /// The canonical re-read after a successful write failed.
    #[error("re-reading the {category} cache failed: {source}")]
    LocalReread {
        category: Category,
        source: StoreError,
    },
}

/// Repository operations exposed upward to use cases.
///
/// Each operation is one asynchronous unit of work; its internal steps run
/// strictly in sequence, while independent operations may be in flight
/// concurrently. There is no cancellation once a pipeline has started.
#[async_trait]
pub trait MovieService: Send + Sync {
    /// Popular movies, cache-first.
    ///
    /// # Errors
    ///
    /// Any stage of the cache-or-fetch pipeline can fail; see [`MovieError`]
    /// for the stage tagging.
    async fn get_popular(&self) -> Result<Vec<Movie>, MovieError>;

    /// Upcoming movies, cache-first.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`MovieService::get_popular`].
    async fn get_upcoming(&self) -> Result<Vec<Movie>, MovieError>;

    /// Full record for one movie. Pass-through: no caching.
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::RemoteFetch`] when the catalog call fails.
    async fn get_detail(&self, movie_id: &MovieId) -> Result<MovieDetail, MovieError>;

    /// Videos attached to one movie. Pass-through: no caching.
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::RemoteFetch`] when the catalog call fails.
    async fn get_videos(&self, movie_id: &MovieId) -> Result<Vec<Video>, MovieError>;

    /// Free-text title search. Pass-through: no caching.
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::RemoteFetch`] when the catalog call fails.
    async fn search(&self, query: &str) -> Result<Vec<Movie>, MovieError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_failed_stage() {
        let err = MovieError::LocalWrite {
            category: Category::Popular,
            source: StoreError::WriteFailed("disk full".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "writing the popular cache failed: movie store write failed: disk full"
        );

        let err = MovieError::RemoteFetch(RemoteError::InvalidResponse);
        assert_eq!(err.to_string(), "the catalog returned an invalid response");
    }
}
