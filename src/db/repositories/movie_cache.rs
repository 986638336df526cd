use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::db::StoreError;
use crate::domain::Category;
use crate::entities::{popular_movies, prelude::*, upcoming_movies};

/// Persisted projection of a movie, keyed by catalog identifier.
///
/// One row per identifier per category table; `genre_ids` round-trips
/// through a JSON string column.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedMovie {
    pub id: String,
    pub title: String,
    pub original_title: String,
    pub original_language: Option<String>,
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
}

impl CachedMovie {
    fn from_popular(model: popular_movies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            original_title: model.original_title,
            original_language: model.original_language,
            overview: model.overview,
            backdrop_path: model.backdrop_path,
            poster_path: model.poster_path,
            release_date: model.release_date,
            popularity: model.popularity,
            vote_average: model.vote_average,
            vote_count: model.vote_count,
            adult: model.adult,
            video: model.video,
            genre_ids: model.genre_ids.and_then(|s| serde_json::from_str(&s).ok()),
        }
    }

    fn to_popular(&self) -> popular_movies::ActiveModel {
        popular_movies::ActiveModel {
            id: Set(self.id.clone()),
            title: Set(self.title.clone()),
            original_title: Set(self.original_title.clone()),
            original_language: Set(self.original_language.clone()),
            overview: Set(self.overview.clone()),
            backdrop_path: Set(self.backdrop_path.clone()),
            poster_path: Set(self.poster_path.clone()),
            release_date: Set(self.release_date.clone()),
            popularity: Set(self.popularity),
            vote_average: Set(self.vote_average),
            vote_count: Set(self.vote_count),
            adult: Set(self.adult),
            video: Set(self.video),
            genre_ids: Set(self
                .genre_ids
                .as_ref()
                .and_then(|g| serde_json::to_string(g).ok())),
        }
    }

    fn from_upcoming(model: upcoming_movies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            original_title: model.original_title,
            original_language: model.original_language,
            overview: model.overview,
            backdrop_path: model.backdrop_path,
            poster_path: model.poster_path,
            release_date: model.release_date,
            popularity: model.popularity,
            vote_average: model.vote_average,
            vote_count: model.vote_count,
            adult: model.adult,
            video: model.video,
            genre_ids: model.genre_ids.and_then(|s| serde_json::from_str(&s).ok()),
        }
    }

    fn to_upcoming(&self) -> upcoming_movies::ActiveModel {
        upcoming_movies::ActiveModel {
            id: Set(self.id.clone()),
            title: Set(self.title.clone()),
            original_title: Set(self.original_title.clone()),
            original_language: Set(self.original_language.clone()),
            overview: Set(self.overview.clone()),
            backdrop_path: Set(self.backdrop_path.clone()),
            poster_path: Set(self.poster_path.clone()),
            release_date: Set(self.release_date.clone()),
            popularity: Set(self.popularity),
            vote_average: Set(self.vote_average),
            vote_count: Set(self.vote_count),
            adult: Set(self.adult),
            video: Set(self.video),
            genre_ids: Set(self
                .genre_ids
                .as_ref()
                .and_then(|g| serde_json::to_string(g).ok())),
        }
    }
}

pub struct MovieCacheRepository {
    conn: DatabaseConnection,
}

impl MovieCacheRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Reads every cached row for a category. A table that has never been
    /// populated yields an empty list, not an error.
    pub async fn read_all(&self, category: Category) -> Result<Vec<CachedMovie>, StoreError> {
        let rows = match category {
            Category::Popular => PopularMovies::find()
                .all(&self.conn)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?
                .into_iter()
                .map(CachedMovie::from_popular)
                .collect(),
            Category::Upcoming => UpcomingMovies::find()
                .all(&self.conn)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?
                .into_iter()
                .map(CachedMovie::from_upcoming)
                .collect(),
        };

        Ok(rows)
    }

    /// Upserts a whole batch inside one transaction: rows with a known
    /// identifier are overwritten, new identifiers are inserted, and a
    /// failure anywhere rolls the entire batch back.
    pub async fn upsert_all(
        &self,
        category: Category,
        records: &[CachedMovie],
    ) -> Result<(), StoreError> {
        if records.is_empty() {
            return Ok(());
        }

        let txn = self
            .conn
            .begin()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        match category {
            Category::Popular => {
                let rows: Vec<popular_movies::ActiveModel> =
                    records.iter().map(CachedMovie::to_popular).collect();

                PopularMovies::insert_many(rows)
                    .on_conflict(
                        OnConflict::column(popular_movies::Column::Id)
                            .update_columns([
                                popular_movies::Column::Title,
                                popular_movies::Column::OriginalTitle,
                                popular_movies::Column::OriginalLanguage,
                                popular_movies::Column::Overview,
                                popular_movies::Column::BackdropPath,
                                popular_movies::Column::PosterPath,
                                popular_movies::Column::ReleaseDate,
                                popular_movies::Column::Popularity,
                                popular_movies::Column::VoteAverage,
                                popular_movies::Column::VoteCount,
                                popular_movies::Column::Adult,
                                popular_movies::Column::Video,
                                popular_movies::Column::GenreIds,
                            ])
                            .to_owned(),
                    )
                    .exec(&txn)
                    .await
                    .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
            }
            Category::Upcoming => {
                let rows: Vec<upcoming_movies::ActiveModel> =
                    records.iter().map(CachedMovie::to_upcoming).collect();

                UpcomingMovies::insert_many(rows)
                    .on_conflict(
                        OnConflict::column(upcoming_movies::Column::Id)
                            .update_columns([
                                upcoming_movies::Column::Title,
                                upcoming_movies::Column::OriginalTitle,
                                upcoming_movies::Column::OriginalLanguage,
                                upcoming_movies::Column::Overview,
                                upcoming_movies::Column::BackdropPath,
                                upcoming_movies::Column::PosterPath,
                                upcoming_movies::Column::ReleaseDate,
                                upcoming_movies::Column::Popularity,
                                upcoming_movies::Column::VoteAverage,
                                upcoming_movies::Column::VoteCount,
                                upcoming_movies::Column::Adult,
                                upcoming_movies::Column::Video,
                                upcoming_movies::Column::GenreIds,
                            ])
                            .to_owned(),
                    )
                    .exec(&txn)
                    .await
                    .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}
