pub mod tmdb {

    pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

    pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

    pub const YOUTUBE_WATCH_URL: &str = "https://youtube.com/watch?v=";
}
