pub mod movie_service;
pub use movie_service::{MovieError, MovieService};

pub mod movie_service_impl;
pub use movie_service_impl::CachedMovieService;

pub mod home_service;
pub use home_service::{DefaultHomeService, HomeService};

pub mod detail_service;
pub use detail_service::{DefaultDetailService, DetailService};
