use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::config::TmdbConfig;
use crate::domain::Category;

use super::MovieCatalog;

/// Failure modes of the remote catalog boundary.
///
/// Everything the catalog can do wrong collapses into these two cases;
/// nothing is thrown past this boundary.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure before an HTTP status was received. Carries
    /// the attempted endpoint (credentials stripped) for diagnostics.
    #[error("{endpoint} is unreachable")]
    Unreachable { endpoint: String },

    /// Non-200 status, or a 200 body that does not decode as the expected
    /// shape.
    #[error("the catalog returned an invalid response")]
    InvalidResponse,
}

/// Paged list envelope returned by the category and search endpoints.
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub page: i64,
    pub results: Vec<MovieResponse>,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub total_results: Option<i64>,
    /// Release window, only present on the upcoming list.
    #[serde(default)]
    pub dates: Option<DateRange>,
}

#[derive(Debug, Deserialize)]
pub struct DateRange {
    pub minimum: String,
    pub maximum: String,
}

/// One movie as it appears in list payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub adult: Option<bool>,
    #[serde(default)]
    pub video: Option<bool>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub original_language: Option<String>,
}

/// Full movie record from the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub adult: Option<bool>,
    #[serde(default)]
    pub video: Option<bool>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub runtime: Option<i64>,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub revenue: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub genres: Vec<GenreResponse>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompanyResponse>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountryResponse>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguageResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCompanyResponse {
    pub id: i64,
    #[serde(default)]
    pub logo_path: Option<String>,
    pub name: String,
    #[serde(default)]
    pub origin_country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductionCountryResponse {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpokenLanguageResponse {
    pub iso_639_1: String,
    pub name: String,
}

/// Video list envelope from the videos endpoint.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    pub id: i64,
    pub results: Vec<VideoResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoResponse {
    pub id: String,
    pub name: String,
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub iso_639_1: String,
    #[serde(default)]
    pub iso_3166_1: String,
    #[serde(default)]
    pub published_at: String,
}

/// HTTP client for the movie catalog API.
///
/// Holds no mutable state besides configuration; the underlying connection
/// pool is managed by `reqwest`.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Endpoint as reported in errors and logs: base URL plus path, without
    /// the API-key query parameter.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}?api_key={}", self.base_url, path, self.api_key)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        endpoint: String,
    ) -> Result<T, RemoteError> {
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(%endpoint, error = %err, "catalog request failed to reach the server");
                return Err(RemoteError::Unreachable { endpoint });
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            warn!(%endpoint, status = %response.status(), "catalog returned a non-200 status");
            return Err(RemoteError::InvalidResponse);
        }

        response.json::<T>().await.map_err(|err| {
            warn!(%endpoint, error = %err, "catalog body did not match the expected shape");
            RemoteError::InvalidResponse
        })
    }

    async fn movie_list(&self, path: &str) -> Result<Vec<MovieResponse>, RemoteError> {
        let page: PageResponse = self
            .get_json(self.url(path), self.endpoint(path))
            .await?;
        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbClient {
    async fn popular(&self) -> Result<Vec<MovieResponse>, RemoteError> {
        self.movie_list(Category::Popular.endpoint()).await
    }

    async fn upcoming(&self) -> Result<Vec<MovieResponse>, RemoteError> {
        self.movie_list(Category::Upcoming.endpoint()).await
    }

    async fn detail(&self, movie_id: &str) -> Result<DetailResponse, RemoteError> {
        let path = format!("movie/{movie_id}");
        self.get_json(self.url(&path), self.endpoint(&path)).await
    }

    async fn videos(&self, movie_id: &str) -> Result<Vec<VideoResponse>, RemoteError> {
        let path = format!("movie/{movie_id}/videos");
        let envelope: VideoListResponse =
            self.get_json(self.url(&path), self.endpoint(&path)).await?;
        Ok(envelope.results)
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieResponse>, RemoteError> {
        let path = "search/movie";
        let url = format!("{}&query={}", self.url(path), urlencoding::encode(query));
        let page: PageResponse = self.get_json(url, self.endpoint(path)).await?;
        Ok(page.results)
    }
}
