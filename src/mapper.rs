//! Pure translation between wire payloads, domain models and cached records.
//!
//! No function here touches the network or the store. Catalog identifiers
//! arrive as numbers in wire payloads and are normalized to strings on the
//! way into the domain.

use crate::clients::tmdb::{DetailResponse, MovieResponse, VideoResponse};
use crate::db::CachedMovie;
use crate::domain::MovieId;
use crate::models::{
    Genre, Movie, MovieDetail, ProductionCompany, ProductionCountry, SpokenLanguage, Video,
};

pub fn movie_from_response(response: &MovieResponse) -> Movie {
    Movie {
        id: MovieId::from(response.id),
        title: response.title.clone(),
        original_title: response.original_title.clone(),
        overview: response.overview.clone(),
        backdrop_path: response.backdrop_path.clone(),
        poster_path: response.poster_path.clone(),
        release_date: response.release_date.clone(),
        popularity: response.popularity,
        vote_average: response.vote_average,
        vote_count: response.vote_count,
        adult: response.adult,
        video: response.video,
        genre_ids: response.genre_ids.clone(),
        original_language: response.original_language.clone(),
    }
}

pub fn detail_from_response(response: DetailResponse) -> MovieDetail {
    MovieDetail {
        id: MovieId::from(response.id),
        title: response.title,
        original_title: response.original_title,
        overview: response.overview,
        backdrop_path: response.backdrop_path,
        poster_path: response.poster_path,
        release_date: response.release_date,
        popularity: response.popularity,
        vote_average: response.vote_average,
        vote_count: response.vote_count,
        adult: response.adult,
        video: response.video,
        original_language: response.original_language,
        homepage: response.homepage.unwrap_or_default(),
        imdb_id: response.imdb_id,
        runtime: response.runtime.unwrap_or_default(),
        budget: response.budget,
        revenue: response.revenue,
        status: response.status,
        tagline: response.tagline,
        genres: response
            .genres
            .into_iter()
            .map(|genre| Genre {
                id: genre.id,
                name: genre.name,
            })
            .collect(),
        production_companies: response
            .production_companies
            .into_iter()
            .map(|company| ProductionCompany {
                id: company.id,
                logo_path: company.logo_path,
                name: company.name,
                origin_country: company.origin_country,
            })
            .collect(),
        production_countries: response
            .production_countries
            .into_iter()
            .map(|country| ProductionCountry {
                iso_3166_1: country.iso_3166_1,
                name: country.name,
            })
            .collect(),
        spoken_languages: response
            .spoken_languages
            .into_iter()
            .map(|language| SpokenLanguage {
                iso_639_1: language.iso_639_1,
                name: language.name,
            })
            .collect(),
    }
}

pub fn video_from_response(response: VideoResponse) -> Video {
    Video {
        id: response.id,
        name: response.name,
        site: response.site,
        key: response.key,
        video_type: response.video_type,
        official: response.official,
        iso_639_1: response.iso_639_1,
        iso_3166_1: response.iso_3166_1,
        published_at: response.published_at,
    }
}

pub fn movie_to_record(movie: &Movie) -> CachedMovie {
    CachedMovie {
        id: movie.id.as_str().to_string(),
        title: movie.title.clone(),
        original_title: movie.original_title.clone(),
        original_language: movie.original_language.clone(),
        overview: movie.overview.clone(),
        backdrop_path: movie.backdrop_path.clone(),
        poster_path: movie.poster_path.clone(),
        release_date: movie.release_date.clone(),
        popularity: movie.popularity,
        vote_average: movie.vote_average,
        vote_count: movie.vote_count,
        adult: movie.adult,
        video: movie.video,
        genre_ids: movie.genre_ids.clone(),
    }
}

pub fn movie_from_record(record: CachedMovie) -> Movie {
    Movie {
        id: MovieId::from(record.id),
        title: record.title,
        original_title: record.original_title,
        overview: record.overview,
        backdrop_path: record.backdrop_path,
        poster_path: record.poster_path,
        release_date: record.release_date,
        popularity: record.popularity,
        vote_average: record.vote_average,
        vote_count: record.vote_count,
        adult: record.adult,
        video: record.video,
        genre_ids: record.genre_ids,
        original_language: record.original_language,
    }
}
