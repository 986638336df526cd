//! Upcoming movies command handler

use crate::config::Config;
use crate::services::HomeService;

use super::print_movie_list;

pub async fn cmd_upcoming(home: &dyn HomeService, config: &Config) -> anyhow::Result<()> {
    let movies = home.upcoming_movies().await?;

    if movies.is_empty() {
        println!("The catalog returned no upcoming movies.");
        return Ok(());
    }

    print_movie_list("Upcoming Movies", &movies, &config.tmdb.image_base_url);
    Ok(())
}
