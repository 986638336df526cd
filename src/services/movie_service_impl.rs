//! Cache-first implementation of the [`MovieService`] repository contract.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::clients::MovieCatalog;
use crate::db::MovieStore;
use crate::domain::{Category, MovieId};
use crate::mapper;
use crate::models::{Movie, MovieDetail, Video};
use crate::services::movie_service::{MovieError, MovieService};

/// Repository over a local store and a remote catalog.
///
/// Category lists run the cache-or-fetch pipeline: local read, return on a
/// non-empty cache, otherwise remote fetch, transactional upsert, and a
/// re-read of the store so the returned batch always matches what is now
/// durably persisted. Detail, video and search calls defer entirely to the
/// catalog.
pub struct CachedMovieService {
    store: Arc<dyn MovieStore>,
    catalog: Arc<dyn MovieCatalog>,
}

impl CachedMovieService {
    #[must_use]
    pub fn new(store: Arc<dyn MovieStore>, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { store, catalog }
    }

    async fn cached_category(&self, category: Category) -> Result<Vec<Movie>, MovieError> {
        let cached = self
            .store
            .read_all(category)
            .await
            .map_err(|source| MovieError::LocalRead { category, source })?;

        let movies: Vec<Movie> = cached.into_iter().map(mapper::movie_from_record).collect();
        if !movies.is_empty() {
            debug!(%category, rows = movies.len(), "cache hit, skipping catalog");
            return Ok(movies);
        }

        let fetched = match category {
            Category::Popular => self.catalog.popular().await?,
            Category::Upcoming => self.catalog.upcoming().await?,
        };

        let records: Vec<_> = fetched
            .iter()
            .map(mapper::movie_from_response)
            .map(|movie| mapper::movie_to_record(&movie))
            .collect();

        self.store
            .upsert_all(category, &records)
            .await
            .map_err(|source| MovieError::LocalWrite { category, source })?;

        info!(%category, rows = records.len(), "cache filled from catalog");

        // The re-read is the canonical answer, not the raw fetch: what goes
        // back to the caller is exactly what the store now holds.
        let rows = self
            .store
            .read_all(category)
            .await
            .map_err(|source| MovieError::LocalReread { category, source })?;

        Ok(rows.into_iter().map(mapper::movie_from_record).collect())
    }
}

#[async_trait]
impl MovieService for CachedMovieService {
    async fn get_popular(&self) -> Result<Vec<Movie>, MovieError> {
        self.cached_category(Category::Popular).await
    }

    async fn get_upcoming(&self) -> Result<Vec<Movie>, MovieError> {
        self.cached_category(Category::Upcoming).await
    }

    async fn get_detail(&self, movie_id: &MovieId) -> Result<MovieDetail, MovieError> {
        let response = self.catalog.detail(movie_id.as_str()).await?;
        Ok(mapper::detail_from_response(response))
    }

    async fn get_videos(&self, movie_id: &MovieId) -> Result<Vec<Video>, MovieError> {
        let responses = self.catalog.videos(movie_id.as_str()).await?;
        Ok(responses.into_iter().map(mapper::video_from_response).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, MovieError> {
        let responses = self.catalog.search(query).await?;
        Ok(responses.iter().map(mapper::movie_from_response).collect())
    }
}
