use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::domain::Category;

pub mod migrator;
pub mod repositories;

pub use repositories::movie_cache::CachedMovie;

/// Failure modes of the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence engine could not be opened or reached.
    #[error("movie store unavailable: {0}")]
    Unavailable(String),

    /// The transactional write raised; the batch was rolled back.
    #[error("movie store write failed: {0}")]
    WriteFailed(String),
}

/// Local data source for cached movie categories.
///
/// Reads of a never-populated category return an empty list. Writes are
/// all-or-nothing per batch; within one category's table the identifier is
/// unique and a repeated write overwrites the row.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn read_all(&self, category: Category) -> Result<Vec<CachedMovie>, StoreError>;

    async fn upsert_all(
        &self,
        category: Category,
        records: &[CachedMovie],
    ) -> Result<(), StoreError>;
}

/// SQLite-backed store. Owns the connection pool and applies migrations on
/// startup.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self, StoreError> {
        // In-memory databases exist per connection; a larger pool would hand
        // out blank databases.
        if db_url.contains(":memory:") {
            Self::with_pool_options(db_url, 1, 1).await
        } else {
            Self::with_pool_options(db_url, 5, 1).await
        }
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        migrator::Migrator::up(&conn, None)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        info!(
            "Movie store connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }

    fn movie_cache_repo(&self) -> repositories::movie_cache::MovieCacheRepository {
        repositories::movie_cache::MovieCacheRepository::new(self.conn.clone())
    }
}

#[async_trait]
impl MovieStore for Store {
    async fn read_all(&self, category: Category) -> Result<Vec<CachedMovie>, StoreError> {
        self.movie_cache_repo().read_all(category).await
    }

    async fn upsert_all(
        &self,
        category: Category,
        records: &[CachedMovie],
    ) -> Result<(), StoreError> {
        self.movie_cache_repo().upsert_all(category, records).await
    }
}
