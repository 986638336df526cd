//! Orchestration tests for the cache-first repository.
//!
//! The store and catalog seams are replaced with counting fakes so the
//! pipeline's sequencing (read, fetch, write, re-read) and its failure
//! tagging can be observed; one scenario wires the real SQLite store in.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use cinedex::clients::MovieCatalog;
use cinedex::clients::tmdb::{DetailResponse, MovieResponse, RemoteError, VideoResponse};
use cinedex::db::{CachedMovie, MovieStore, Store, StoreError};
use cinedex::domain::{Category, MovieId};
use cinedex::services::{
    CachedMovieService, DefaultDetailService, DefaultHomeService, DetailService, HomeService,
    MovieError, MovieService,
};

fn response(id: i64, title: &str) -> MovieResponse {
    MovieResponse {
        id,
        title: title.to_string(),
        original_title: title.to_string(),
        overview: format!("{title} overview"),
        backdrop_path: None,
        poster_path: Some(format!("/{id}.jpg")),
        release_date: "2023-02-10".to_string(),
        popularity: 10.0,
        vote_average: 7.0,
        vote_count: 100,
        adult: Some(false),
        video: Some(false),
        genre_ids: Some(vec![18]),
        original_language: Some("en".to_string()),
    }
}

fn detail_response(id: i64) -> DetailResponse {
    DetailResponse {
        id,
        title: "The Matrix".to_string(),
        original_title: "The Matrix".to_string(),
        overview: "Set in the 22nd century...".to_string(),
        backdrop_path: None,
        poster_path: None,
        release_date: "1999-03-30".to_string(),
        popularity: 84.4,
        vote_average: 8.2,
        vote_count: 24601,
        adult: Some(false),
        video: Some(false),
        original_language: Some("en".to_string()),
        homepage: Some("http://www.warnerbros.com/matrix".to_string()),
        imdb_id: Some("tt0133093".to_string()),
        runtime: Some(136),
        budget: 63_000_000,
        revenue: 463_517_383,
        status: "Released".to_string(),
        tagline: "Welcome to the Real World.".to_string(),
        genres: vec![],
        production_companies: vec![],
        production_countries: vec![],
        spoken_languages: vec![],
    }
}

fn record(id: &str, title: &str) -> CachedMovie {
    CachedMovie {
        id: id.to_string(),
        title: title.to_string(),
        original_title: title.to_string(),
        original_language: None,
        overview: String::new(),
        backdrop_path: None,
        poster_path: None,
        release_date: "2023-02-10".to_string(),
        popularity: 1.0,
        vote_average: 6.0,
        vote_count: 10,
        adult: None,
        video: None,
        genre_ids: None,
    }
}

/// Catalog fake that counts invocations per endpoint.
#[derive(Default)]
struct MockCatalog {
    page: Vec<MovieResponse>,
    fail: bool,
    popular_calls: AtomicUsize,
    upcoming_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    video_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl MockCatalog {
    fn with_page(page: Vec<MovieResponse>) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn outcome(&self) -> Result<Vec<MovieResponse>, RemoteError> {
        if self.fail {
            Err(RemoteError::InvalidResponse)
        } else {
            Ok(self.page.clone())
        }
    }
}

#[async_trait]
impl MovieCatalog for MockCatalog {
    async fn popular(&self) -> Result<Vec<MovieResponse>, RemoteError> {
        self.popular_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }

    async fn upcoming(&self) -> Result<Vec<MovieResponse>, RemoteError> {
        self.upcoming_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }

    async fn detail(&self, movie_id: &str) -> Result<DetailResponse, RemoteError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RemoteError::InvalidResponse);
        }
        Ok(detail_response(movie_id.parse().unwrap_or(0)))
    }

    async fn videos(&self, _movie_id: &str) -> Result<Vec<VideoResponse>, RemoteError> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RemoteError::InvalidResponse);
        }
        Ok(vec![VideoResponse {
            id: "614b6bb6a76ce2008dd4c4f2".to_string(),
            name: "Official Trailer".to_string(),
            key: "nUEQNVV3Gfs".to_string(),
            site: "YouTube".to_string(),
            video_type: "Trailer".to_string(),
            official: true,
            iso_639_1: "en".to_string(),
            iso_3166_1: "US".to_string(),
            published_at: "2021-09-22T16:00:11.000Z".to_string(),
        }])
    }

    async fn search(&self, _query: &str) -> Result<Vec<MovieResponse>, RemoteError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }
}

/// In-memory store fake with switchable failure points.
#[derive(Default)]
struct MemStore {
    tables: Mutex<HashMap<Category, Vec<CachedMovie>>>,
    fail_reads: bool,
    fail_writes: bool,
    fail_second_read: bool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MemStore {
    fn preloaded(category: Category, records: Vec<CachedMovie>) -> Self {
        let store = Self::default();
        store.tables.lock().unwrap().insert(category, records);
        store
    }

    fn rows(&self, category: Category) -> Vec<CachedMovie> {
        self.tables
            .lock()
            .unwrap()
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MovieStore for MemStore {
    async fn read_all(&self, category: Category) -> Result<Vec<CachedMovie>, StoreError> {
        let read_number = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_reads {
            return Err(StoreError::Unavailable("no database".to_string()));
        }
        if self.fail_second_read && read_number > 1 {
            return Err(StoreError::Unavailable("connection lost".to_string()));
        }
        Ok(self.rows(category))
    }

    async fn upsert_all(
        &self,
        category: Category,
        records: &[CachedMovie],
    ) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(StoreError::WriteFailed("disk full".to_string()));
        }

        let mut tables = self.tables.lock().unwrap();
        let table = tables.entry(category).or_default();
        for incoming in records {
            match table.iter_mut().find(|row| row.id == incoming.id) {
                Some(existing) => *existing = incoming.clone(),
                None => table.push(incoming.clone()),
            }
        }
        Ok(())
    }
}

fn service(store: Arc<MemStore>, catalog: Arc<MockCatalog>) -> CachedMovieService {
    CachedMovieService::new(store, catalog)
}

#[tokio::test]
async fn cache_hit_short_circuits_the_catalog() {
    let store = Arc::new(MemStore::preloaded(
        Category::Popular,
        vec![record("603", "The Matrix")],
    ));
    let catalog = Arc::new(MockCatalog::with_page(vec![response(999, "Fresh")]));
    let movies = service(store.clone(), catalog.clone());

    let result = movies.get_popular().await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.as_str(), "603");
    assert_eq!(catalog.popular_calls.load(Ordering::SeqCst), 0);
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cache_miss_fetches_once_persists_once_and_rereads() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::with_page(vec![
        response(603, "The Matrix"),
        response(604, "The Matrix Reloaded"),
    ]));
    let movies = service(store.clone(), catalog.clone());

    let result = movies.get_popular().await.unwrap();

    assert_eq!(catalog.popular_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    // Initial read plus the canonical re-read.
    assert_eq!(store.reads.load(Ordering::SeqCst), 2);

    let mut ids: Vec<_> = result.iter().map(|m| m.id.as_str().to_string()).collect();
    ids.sort();
    assert_eq!(ids, vec!["603", "604"]);

    let stored = store.rows(Category::Popular);
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn second_call_is_served_from_the_cache() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::with_page(vec![response(603, "The Matrix")]));
    let movies = service(store.clone(), catalog.clone());

    movies.get_upcoming().await.unwrap();
    movies.get_upcoming().await.unwrap();

    assert_eq!(catalog.upcoming_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.writes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn remote_failure_on_miss_leaves_store_untouched() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::failing());
    let movies = service(store.clone(), catalog.clone());

    let err = movies.get_popular().await.unwrap_err();

    assert!(matches!(
        err,
        MovieError::RemoteFetch(RemoteError::InvalidResponse)
    ));
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
    assert!(store.rows(Category::Popular).is_empty());
}

#[tokio::test]
async fn local_read_failure_never_reaches_the_catalog() {
    let store = Arc::new(MemStore {
        fail_reads: true,
        ..MemStore::default()
    });
    let catalog = Arc::new(MockCatalog::with_page(vec![response(603, "The Matrix")]));
    let movies = service(store, catalog.clone());

    let err = movies.get_popular().await.unwrap_err();

    assert!(matches!(
        err,
        MovieError::LocalRead {
            category: Category::Popular,
            source: StoreError::Unavailable(_)
        }
    ));
    assert_eq!(catalog.popular_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn write_failure_is_tagged_with_the_write_stage() {
    let store = Arc::new(MemStore {
        fail_writes: true,
        ..MemStore::default()
    });
    let catalog = Arc::new(MockCatalog::with_page(vec![response(603, "The Matrix")]));
    let movies = service(store.clone(), catalog);

    let err = movies.get_popular().await.unwrap_err();

    assert!(matches!(
        err,
        MovieError::LocalWrite {
            category: Category::Popular,
            source: StoreError::WriteFailed(_)
        }
    ));
    assert!(store.rows(Category::Popular).is_empty());
}

#[tokio::test]
async fn reread_failure_is_tagged_with_the_reread_stage() {
    let store = Arc::new(MemStore {
        fail_second_read: true,
        ..MemStore::default()
    });
    let catalog = Arc::new(MockCatalog::with_page(vec![response(603, "The Matrix")]));
    let movies = service(store, catalog);

    let err = movies.get_popular().await.unwrap_err();

    assert!(matches!(
        err,
        MovieError::LocalReread {
            category: Category::Popular,
            ..
        }
    ));
}

#[tokio::test]
async fn reread_is_the_canonical_answer_not_the_raw_fetch() {
    // A page carrying the same identifier twice collapses to one row on
    // upsert; the returned batch reflects the store, not the response.
    let store = Store::new("sqlite::memory:").await.unwrap();
    let catalog = Arc::new(MockCatalog::with_page(vec![
        response(603, "The Matrix"),
        response(603, "The Matrix (duplicate)"),
    ]));
    let movies = CachedMovieService::new(Arc::new(store.clone()), catalog);

    let result = movies.get_popular().await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "The Matrix (duplicate)");
    assert_eq!(store.read_all(Category::Popular).await.unwrap().len(), 1);
}

#[tokio::test]
async fn two_item_page_fills_the_real_store() {
    let store = Store::new("sqlite::memory:").await.unwrap();
    let catalog = Arc::new(MockCatalog::with_page(vec![
        response(603, "The Matrix"),
        response(550, "Fight Club"),
    ]));
    let movies = CachedMovieService::new(Arc::new(store.clone()), catalog.clone());

    let result = movies.get_popular().await.unwrap();

    let mut ids: Vec<_> = result.iter().map(|m| m.id.as_str().to_string()).collect();
    ids.sort();
    assert_eq!(ids, vec!["550", "603"]);

    let mut stored: Vec<_> = store
        .read_all(Category::Popular)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect();
    stored.sort();
    assert_eq!(stored, vec!["550", "603"]);
    assert_eq!(catalog.popular_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn detail_is_a_pass_through_without_caching() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::default());
    let movies = service(store.clone(), catalog.clone());

    let detail = movies.get_detail(&MovieId::from("603")).await.unwrap();

    assert_eq!(detail.id.as_str(), "603");
    assert_eq!(detail.runtime, 136);
    assert_eq!(catalog.detail_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_detail_resolves_to_a_network_error_not_a_panic() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::failing());
    let movies = service(store, catalog);

    let err = movies.get_detail(&MovieId::from("42")).await.unwrap_err();

    assert!(matches!(
        err,
        MovieError::RemoteFetch(RemoteError::InvalidResponse)
    ));
}

#[tokio::test]
async fn videos_and_search_defer_to_the_catalog() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::with_page(vec![response(603, "The Matrix")]));
    let movies = service(store.clone(), catalog.clone());

    let videos = movies.get_videos(&MovieId::from("603")).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].video_type, "Trailer");

    let found = movies.search("the matrix").await.unwrap();
    assert_eq!(found.len(), 1);

    assert_eq!(catalog.video_calls.load(Ordering::SeqCst), 1);
    assert_eq!(catalog.search_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn use_cases_delegate_to_the_repository() {
    let store = Arc::new(MemStore::preloaded(
        Category::Popular,
        vec![record("603", "The Matrix")],
    ));
    let catalog = Arc::new(MockCatalog::with_page(vec![response(550, "Fight Club")]));
    let movies: Arc<dyn MovieService> = Arc::new(service(store, catalog));

    let home = DefaultHomeService::new(Arc::clone(&movies));
    let detail = DefaultDetailService::new(movies);

    let popular = home.popular_movies().await.unwrap();
    assert_eq!(popular[0].title, "The Matrix");

    let found = home.search_movies("fight club").await.unwrap();
    assert_eq!(found[0].title, "Fight Club");

    let full = detail.detail_movie(&MovieId::from("603")).await.unwrap();
    assert_eq!(full.imdb_id.as_deref(), Some("tt0133093"));

    let videos = detail.videos_movie(&MovieId::from("603")).await.unwrap();
    assert_eq!(videos[0].site, "YouTube");
}

#[tokio::test]
async fn independent_category_calls_can_run_concurrently() {
    let store = Arc::new(MemStore::default());
    let catalog = Arc::new(MockCatalog::with_page(vec![response(603, "The Matrix")]));
    let movies = service(store.clone(), catalog.clone());

    let (popular, upcoming) = tokio::join!(movies.get_popular(), movies.get_upcoming());

    assert_eq!(popular.unwrap().len(), 1);
    assert_eq!(upcoming.unwrap().len(), 1);
    assert_eq!(catalog.popular_calls.load(Ordering::SeqCst), 1);
    assert_eq!(catalog.upcoming_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.rows(Category::Popular).len(), 1);
    assert_eq!(store.rows(Category::Upcoming).len(), 1);
}
