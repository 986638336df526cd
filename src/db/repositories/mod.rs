pub mod movie_cache;
