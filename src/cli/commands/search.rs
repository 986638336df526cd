//! Catalog search command handler

use crate::config::Config;
use crate::services::HomeService;

use super::print_movie_list;

pub async fn cmd_search(
    home: &dyn HomeService,
    config: &Config,
    query: &str,
) -> anyhow::Result<()> {
    let movies = home.search_movies(query).await?;

    if movies.is_empty() {
        println!("No movies found for \"{query}\".");
        return Ok(());
    }

    print_movie_list(
        &format!("Results for \"{query}\""),
        &movies,
        &config.tmdb.image_base_url,
    );
    Ok(())
}
