pub use super::popular_movies::Entity as PopularMovies;
pub use super::upcoming_movies::Entity as UpcomingMovies;
