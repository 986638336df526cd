pub mod detail;
pub mod movie;
pub mod video;

pub use detail::{Genre, MovieDetail, ProductionCompany, ProductionCountry, SpokenLanguage};
pub use movie::Movie;
pub use video::Video;
