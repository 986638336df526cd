//! Movie detail command handler

use crate::config::Config;
use crate::domain::MovieId;
use crate::services::DetailService;

pub async fn cmd_detail(
    detail: &dyn DetailService,
    config: &Config,
    id: &str,
) -> anyhow::Result<()> {
    let movie_id = MovieId::from(id);
    let movie = detail.detail_movie(&movie_id).await?;

    let year = movie.release_date.split('-').next().unwrap_or("?");
    println!("{} ({})", movie.title, year);
    if !movie.tagline.is_empty() {
        println!("\"{}\"", movie.tagline);
    }
    println!("{:-<70}", "");

    if !movie.overview.is_empty() {
        println!("{}", movie.overview);
        println!();
    }

    println!("Status: {} | Rating: {:.1}/10 ({} votes)", movie.status, movie.vote_average, movie.vote_count);
    if !movie.genres.is_empty() {
        println!("Genres: {}", movie.genre_names().join(", "));
    }
    if movie.runtime > 0 {
        println!("Runtime: {} min", movie.runtime);
    }
    if movie.budget > 0 || movie.revenue > 0 {
        println!("Budget: ${} | Revenue: ${}", movie.budget, movie.revenue);
    }
    if !movie.homepage.is_empty() {
        println!("Homepage: {}", movie.homepage);
    }
    if let Some(imdb_id) = &movie.imdb_id {
        println!("IMDb: https://www.imdb.com/title/{imdb_id}/");
    }
    if let Some(path) = &movie.poster_path {
        println!("Poster: {}{}", config.tmdb.image_base_url, path);
    }

    Ok(())
}
