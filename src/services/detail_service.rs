//! Use case behind the detail screen: one movie's record and its videos.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::MovieId;
use crate::models::{MovieDetail, Video};
use crate::services::movie_service::{MovieError, MovieService};

#[async_trait]
pub trait DetailService: Send + Sync {
    async fn detail_movie(&self, movie_id: &MovieId) -> Result<MovieDetail, MovieError>;

    async fn videos_movie(&self, movie_id: &MovieId) -> Result<Vec<Video>, MovieError>;
}

pub struct DefaultDetailService {
    movies: Arc<dyn MovieService>,
}

impl DefaultDetailService {
    #[must_use]
    pub fn new(movies: Arc<dyn MovieService>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl DetailService for DefaultDetailService {
    async fn detail_movie(&self, movie_id: &MovieId) -> Result<MovieDetail, MovieError> {
        self.movies.get_detail(movie_id).await
    }

    async fn videos_movie(&self, movie_id: &MovieId) -> Result<Vec<Video>, MovieError> {
        self.movies.get_videos(movie_id).await
    }
}
