//! Home command handler: both category lists in one go.

use crate::config::Config;
use crate::services::HomeService;

use super::print_movie_list;

/// The two lists are independent repository calls, so they run concurrently;
/// each one's read-fetch-write steps stay sequential internally.
pub async fn cmd_home(home: &dyn HomeService, config: &Config) -> anyhow::Result<()> {
    let (popular, upcoming) = tokio::join!(home.popular_movies(), home.upcoming_movies());

    print_movie_list("Popular Movies", &popular?, &config.tmdb.image_base_url);
    println!();
    print_movie_list("Upcoming Movies", &upcoming?, &config.tmdb.image_base_url);

    Ok(())
}
