//! Popular movies command handler

use crate::config::Config;
use crate::services::HomeService;

use super::print_movie_list;

pub async fn cmd_popular(home: &dyn HomeService, config: &Config) -> anyhow::Result<()> {
    let movies = home.popular_movies().await?;

    if movies.is_empty() {
        println!("The catalog returned no popular movies.");
        return Ok(());
    }

    print_movie_list("Popular Movies", &movies, &config.tmdb.image_base_url);
    Ok(())
}
