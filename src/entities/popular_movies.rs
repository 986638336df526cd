use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "popular_movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub original_title: String,
    pub original_language: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub adult: Option<bool>,
    pub video: Option<bool>,
    pub genre_ids: Option<String>, // JSON array stored as string
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
