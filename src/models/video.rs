use serde::{Deserialize, Serialize};

use crate::constants::tmdb::YOUTUBE_WATCH_URL;

/// A trailer, teaser or clip attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Catalog-assigned identifier of the video record itself.
    pub id: String,
    pub name: String,
    /// Hosting site as reported by the catalog, e.g. "YouTube".
    pub site: String,
    /// Site-specific opaque key used to build the playback URL.
    pub key: String,
    /// Free-text category, e.g. "Trailer".
    pub video_type: String,
    pub official: bool,
    pub iso_639_1: String,
    pub iso_3166_1: String,
    pub published_at: String,
}

impl Video {
    /// Playback URL for the video, when the hosting site is known.
    ///
    /// Only YouTube-hosted videos can be resolved; other sites return `None`.
    #[must_use]
    pub fn playback_url(&self) -> Option<String> {
        if self.site.eq_ignore_ascii_case("youtube") {
            Some(format!("{YOUTUBE_WATCH_URL}{}", self.key))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(site: &str) -> Video {
        Video {
            id: "64f0c2".to_string(),
            name: "Official Trailer".to_string(),
            site: site.to_string(),
            key: "dQw4w9WgXcQ".to_string(),
            video_type: "Trailer".to_string(),
            official: true,
            iso_639_1: "en".to_string(),
            iso_3166_1: "US".to_string(),
            published_at: "2023-02-10T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn playback_url_for_youtube() {
        assert_eq!(
            video("YouTube").playback_url().as_deref(),
            Some("https://youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn playback_url_unknown_site() {
        assert_eq!(video("Vimeo").playback_url(), None);
    }
}
