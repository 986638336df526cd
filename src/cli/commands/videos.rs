//! Movie videos command handler

use crate::domain::MovieId;
use crate::services::DetailService;

pub async fn cmd_videos(detail: &dyn DetailService, id: &str) -> anyhow::Result<()> {
    let movie_id = MovieId::from(id);
    let videos = detail.videos_movie(&movie_id).await?;

    if videos.is_empty() {
        println!("No videos available for movie {movie_id}.");
        return Ok(());
    }

    println!("Videos for movie {} ({} total)", movie_id, videos.len());
    println!("{:-<70}", "");

    for video in videos {
        let official = if video.official { " [official]" } else { "" };
        println!("{} - {}{}", video.video_type, video.name, official);
        match video.playback_url() {
            Some(url) => println!("  {url}"),
            None => println!("  {} key: {}", video.site, video.key),
        }
    }

    Ok(())
}
