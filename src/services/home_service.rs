//! Use case behind the home screen: popular and upcoming lists plus search.
//!
//! Thin pass-through over the repository; no logic beyond delegation lives
//! here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Movie;
use crate::services::movie_service::{MovieError, MovieService};

#[async_trait]
pub trait HomeService: Send + Sync {
    async fn popular_movies(&self) -> Result<Vec<Movie>, MovieError>;

    async fn upcoming_movies(&self) -> Result<Vec<Movie>, MovieError>;

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, MovieError>;
}

pub struct DefaultHomeService {
    movies: Arc<dyn MovieService>,
}

impl DefaultHomeService {
    #[must_use]
    pub fn new(movies: Arc<dyn MovieService>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl HomeService for DefaultHomeService {
    async fn popular_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.movies.get_popular().await
    }

    async fn upcoming_movies(&self) -> Result<Vec<Movie>, MovieError> {
        self.movies.get_upcoming().await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, MovieError> {
        self.movies.search(query).await
    }
}
