pub mod tmdb;

use async_trait::async_trait;

use tmdb::{DetailResponse, MovieResponse, RemoteError, VideoResponse};

/// Remote data source for the movie catalog.
///
/// One method per catalog endpoint, each a single HTTP attempt with no
/// retry. Implementations hold no mutable state beyond configuration, so a
/// shared reference can serve concurrent calls.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Movies currently trending on the catalog.
    async fn popular(&self) -> Result<Vec<MovieResponse>, RemoteError>;

    /// Movies with an upcoming release window.
    async fn upcoming(&self) -> Result<Vec<MovieResponse>, RemoteError>;

    /// Full record for one movie.
    async fn detail(&self, movie_id: &str) -> Result<DetailResponse, RemoteError>;

    /// Trailers and clips attached to one movie.
    async fn videos(&self, movie_id: &str) -> Result<Vec<VideoResponse>, RemoteError>;

    /// Free-text title search. The query is percent-encoded by the
    /// implementation.
    async fn search(&self, query: &str) -> Result<Vec<MovieResponse>, RemoteError>;
}
