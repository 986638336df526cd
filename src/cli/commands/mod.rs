mod detail;
mod home;
mod init;
mod popular;
mod search;
mod upcoming;
mod videos;

pub use detail::cmd_detail;
pub use home::cmd_home;
pub use init::cmd_init;
pub use popular::cmd_popular;
pub use search::cmd_search;
pub use upcoming::cmd_upcoming;
pub use videos::cmd_videos;

use crate::models::Movie;

pub(crate) fn print_movie_list(header: &str, movies: &[Movie], image_base_url: &str) {
    println!("{} ({} total)", header, movies.len());
    println!("{:-<70}", "");

    for movie in movies {
        let year = movie.release_date.split('-').next().unwrap_or("?");
        println!("{} ({}) - {:.1}/10", movie.title, year, movie.vote_average);
        println!("  ID: {} | Votes: {}", movie.id, movie.vote_count);
        if let Some(url) = movie.poster_url(image_base_url) {
            println!("  Poster: {url}");
        }
    }
}
