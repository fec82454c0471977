//! Wire types for the TMDB API and the resolved shapes handed to callers.
//!
//! Raw `Deserialize`-only structs mirror the JSON payloads; `into_*`
//! mappings resolve every image path exactly once. Callers never see a
//! bare image path.

use serde::{Deserialize, Serialize};

use marquee_core::models::{MovieSummary, SeriesSummary, TrendingTitle};

use crate::images::{self, ImageSize};

/// Listing envelope, returned unchanged apart from image resolution on
/// the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

// ── Raw listing rows ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct RawPage<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> RawPage<T> {
    pub(crate) fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            results: self.results.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub adult: bool,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f32,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
}

impl RawMovie {
    pub(crate) fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title,
            adult: self.adult,
            backdrop_path: images::resolve(self.backdrop_path.as_deref(), ImageSize::Backdrop),
            genre_ids: self.genre_ids,
            original_language: self.original_language,
            original_title: self.original_title,
            overview: self.overview,
            popularity: self.popularity,
            poster_path: images::resolve(self.poster_path.as_deref(), ImageSize::Poster),
            release_date: self.release_date,
            video: self.video,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSeries {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f32,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub first_air_date: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
}

impl RawSeries {
    pub(crate) fn into_summary(self) -> SeriesSummary {
        SeriesSummary {
            id: self.id,
            name: self.name,
            backdrop_path: images::resolve(self.backdrop_path.as_deref(), ImageSize::Backdrop),
            genre_ids: self.genre_ids,
            original_language: self.original_language,
            original_name: self.original_name,
            overview: self.overview,
            popularity: self.popularity,
            poster_path: images::resolve(self.poster_path.as_deref(), ImageSize::Poster),
            first_air_date: self.first_air_date,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
        }
    }
}

/// Trending rows are movies or series; the title field differs.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrendingEntry {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub vote_count: u64,
    pub poster_path: Option<String>,
}

impl RawTrendingEntry {
    pub(crate) fn into_trending(self) -> TrendingTitle {
        TrendingTitle {
            id: self.id,
            name: self.title.or(self.name).unwrap_or_default(),
            vote_count: self.vote_count,
            poster_url: images::resolve(self.poster_path.as_deref(), ImageSize::Poster),
        }
    }
}

// ── Shared detail components ────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_url: String,
    pub origin_country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    pub kind: String,
    pub official: bool,
}

impl Video {
    /// Watch URL for YouTube-hosted videos, `None` for other sites.
    pub fn youtube_url(&self) -> Option<String> {
        self.site
            .eq_ignore_ascii_case("YouTube")
            .then(|| format!("https://www.youtube.com/watch?v={}", self.key))
    }
}

/// Pick the video a detail screen should feature: the first YouTube
/// trailer, else the first YouTube teaser.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.site.eq_ignore_ascii_case("YouTube") && v.kind == "Trailer")
        .or_else(|| {
            videos
                .iter()
                .find(|v| v.site.eq_ignore_ascii_case("YouTube") && v.kind == "Teaser")
        })
}

#[derive(Debug, Clone, Serialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_url: String,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub profile_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCredits {
    #[serde(default)]
    pub cast: Vec<RawCredit>,
    #[serde(default)]
    pub crew: Vec<RawCredit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCredit {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub character: Option<String>,
    pub job: Option<String>,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawVideos {
    #[serde(default)]
    pub results: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVideo {
    #[serde(default)]
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub official: bool,
}

impl RawVideo {
    fn into_video(self) -> Video {
        Video {
            id: self.id,
            key: self.key,
            name: self.name,
            site: self.site,
            kind: self.kind,
            official: self.official,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCompany {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: String,
}

impl RawCompany {
    fn into_company(self) -> ProductionCompany {
        ProductionCompany {
            id: self.id,
            name: self.name,
            logo_url: images::resolve(self.logo_path.as_deref(), ImageSize::Poster),
            origin_country: self.origin_country,
        }
    }
}

fn map_credits(credits: RawCredits) -> (Vec<CastMember>, Vec<CrewMember>) {
    let cast = credits
        .cast
        .into_iter()
        .map(|c| CastMember {
            id: c.id,
            name: c.name,
            character: c.character.unwrap_or_default(),
            profile_url: images::resolve(c.profile_path.as_deref(), ImageSize::Profile),
            order: c.order,
        })
        .collect();
    let crew = credits
        .crew
        .into_iter()
        .map(|c| CrewMember {
            id: c.id,
            name: c.name,
            job: c.job.unwrap_or_default(),
            profile_url: images::resolve(c.profile_path.as_deref(), ImageSize::Profile),
        })
        .collect();
    (cast, crew)
}

// ── Movie detail ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub id: u64,
    pub name: String,
    pub poster_url: String,
    pub backdrop_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub adult: bool,
    pub backdrop_path: String,
    pub belongs_to_collection: Option<Collection>,
    pub budget: u64,
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f32,
    pub poster_path: String,
    pub production_companies: Vec<ProductionCompany>,
    pub release_date: String,
    pub revenue: u64,
    pub runtime: Option<u32>,
    pub status: String,
    pub tagline: String,
    pub video: bool,
    pub vote_average: f32,
    pub vote_count: u64,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl MovieDetails {
    /// The canonical down-projection into the listing-row shape. Every
    /// by-id accessor and cache goes through this one function.
    pub fn to_summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            adult: self.adult,
            backdrop_path: self.backdrop_path.clone(),
            genre_ids: self.genres.iter().map(|g| g.id).collect(),
            original_language: self.original_language.clone(),
            original_title: self.original_title.clone(),
            overview: self.overview.clone(),
            popularity: self.popularity,
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            video: self.video,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
        }
    }

    pub fn trailer(&self) -> Option<&Video> {
        select_trailer(&self.videos)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub adult: bool,
    pub backdrop_path: Option<String>,
    pub belongs_to_collection: Option<RawCollection>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f32,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<RawCompany>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub revenue: u64,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub videos: RawVideos,
    #[serde(default)]
    pub credits: RawCredits,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCollection {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl RawMovieDetails {
    pub(crate) fn into_details(self) -> MovieDetails {
        let (cast, crew) = map_credits(self.credits);
        MovieDetails {
            id: self.id,
            title: self.title,
            adult: self.adult,
            backdrop_path: images::resolve(self.backdrop_path.as_deref(), ImageSize::Backdrop),
            belongs_to_collection: self.belongs_to_collection.map(|c| Collection {
                id: c.id,
                name: c.name,
                poster_url: images::resolve(c.poster_path.as_deref(), ImageSize::Poster),
                backdrop_url: images::resolve(c.backdrop_path.as_deref(), ImageSize::Backdrop),
            }),
            budget: self.budget,
            genres: self.genres,
            homepage: self.homepage,
            imdb_id: self.imdb_id,
            original_language: self.original_language,
            original_title: self.original_title,
            overview: self.overview,
            popularity: self.popularity,
            poster_path: images::resolve(self.poster_path.as_deref(), ImageSize::Poster),
            production_companies: self
                .production_companies
                .into_iter()
                .map(RawCompany::into_company)
                .collect(),
            release_date: self.release_date,
            revenue: self.revenue,
            runtime: self.runtime,
            status: self.status,
            tagline: self.tagline,
            video: self.video,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            videos: self.videos.results.into_iter().map(RawVideo::into_video).collect(),
            cast,
            crew,
        }
    }
}

// ── Series detail ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Creator {
    pub id: u64,
    pub name: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Season {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub air_date: Option<String>,
    pub episode_count: u32,
    pub poster_url: String,
    pub season_number: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesDetails {
    pub id: u64,
    pub name: String,
    pub backdrop_path: String,
    pub created_by: Vec<Creator>,
    pub episode_run_time: Vec<u32>,
    pub first_air_date: String,
    pub last_air_date: String,
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    pub in_production: bool,
    pub networks: Vec<Network>,
    pub number_of_episodes: u32,
    pub number_of_seasons: u32,
    pub origin_country: Vec<String>,
    pub original_language: String,
    pub original_name: String,
    pub overview: String,
    pub popularity: f32,
    pub poster_path: String,
    pub production_companies: Vec<ProductionCompany>,
    pub seasons: Vec<Season>,
    pub status: String,
    pub tagline: String,
    pub vote_average: f32,
    pub vote_count: u64,
    pub videos: Vec<Video>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl SeriesDetails {
    /// Canonical down-projection; the series shape has no `video` flag,
    /// the rest carries over losslessly.
    pub fn to_summary(&self) -> SeriesSummary {
        SeriesSummary {
            id: self.id,
            name: self.name.clone(),
            backdrop_path: self.backdrop_path.clone(),
            genre_ids: self.genres.iter().map(|g| g.id).collect(),
            original_language: self.original_language.clone(),
            original_name: self.original_name.clone(),
            overview: self.overview.clone(),
            popularity: self.popularity,
            poster_path: self.poster_path.clone(),
            first_air_date: self.first_air_date.clone(),
            vote_average: self.vote_average,
            vote_count: self.vote_count,
        }
    }

    pub fn trailer(&self) -> Option<&Video> {
        select_trailer(&self.videos)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSeriesDetails {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub created_by: Vec<RawCreator>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    #[serde(default)]
    pub first_air_date: String,
    #[serde(default)]
    pub last_air_date: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub in_production: bool,
    #[serde(default)]
    pub networks: Vec<RawNetwork>,
    #[serde(default)]
    pub number_of_episodes: u32,
    #[serde(default)]
    pub number_of_seasons: u32,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f32,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<RawCompany>,
    #[serde(default)]
    pub seasons: Vec<RawSeason>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub videos: RawVideos,
    #[serde(default)]
    pub credits: RawCredits,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCreator {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNetwork {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub logo_path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSeason {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub air_date: Option<String>,
    #[serde(default)]
    pub episode_count: u32,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub season_number: u32,
}

impl RawSeriesDetails {
    pub(crate) fn into_details(self) -> SeriesDetails {
        let (cast, crew) = map_credits(self.credits);
        SeriesDetails {
            id: self.id,
            name: self.name,
            backdrop_path: images::resolve(self.backdrop_path.as_deref(), ImageSize::Backdrop),
            created_by: self
                .created_by
                .into_iter()
                .map(|c| Creator {
                    id: c.id,
                    name: c.name,
                    profile_url: images::resolve(c.profile_path.as_deref(), ImageSize::Profile),
                })
                .collect(),
            episode_run_time: self.episode_run_time,
            first_air_date: self.first_air_date,
            last_air_date: self.last_air_date,
            genres: self.genres,
            homepage: self.homepage,
            in_production: self.in_production,
            networks: self
                .networks
                .into_iter()
                .map(|n| Network {
                    id: n.id,
                    name: n.name,
                    logo_url: images::resolve(n.logo_path.as_deref(), ImageSize::Poster),
                })
                .collect(),
            number_of_episodes: self.number_of_episodes,
            number_of_seasons: self.number_of_seasons,
            origin_country: self.origin_country,
            original_language: self.original_language,
            original_name: self.original_name,
            overview: self.overview,
            popularity: self.popularity,
            poster_path: images::resolve(self.poster_path.as_deref(), ImageSize::Poster),
            production_companies: self
                .production_companies
                .into_iter()
                .map(RawCompany::into_company)
                .collect(),
            seasons: self
                .seasons
                .into_iter()
                .map(|s| Season {
                    id: s.id,
                    name: s.name,
                    overview: s.overview,
                    air_date: s.air_date,
                    episode_count: s.episode_count,
                    poster_url: images::resolve(s.poster_path.as_deref(), ImageSize::Poster),
                    season_number: s.season_number,
                })
                .collect(),
            status: self.status,
            tagline: self.tagline,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            videos: self.videos.results.into_iter().map(RawVideo::into_video).collect(),
            cast,
            crew,
        }
    }
}

// ── Person detail ───────────────────────────────────────────────

/// One appearance in a person's combined movie/TV credits.
#[derive(Debug, Clone, Serialize)]
pub struct PersonCredit {
    pub id: u64,
    /// Movie title or series name, whichever the row carries.
    pub title: String,
    pub media_type: String,
    pub character: String,
    pub poster_url: String,
    /// Release date (movies) or first air date (series).
    pub date: Option<String>,
    pub vote_average: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonDetails {
    pub id: u64,
    pub name: String,
    pub biography: String,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_url: String,
    pub known_for_department: String,
    pub popularity: f32,
    pub credits: Vec<PersonCredit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPersonDetails {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub biography: String,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub combined_credits: RawCombinedCredits,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCombinedCredits {
    #[serde(default)]
    pub cast: Vec<RawPersonCredit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPersonCredit {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub media_type: String,
    pub character: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
}

impl RawPersonDetails {
    pub(crate) fn into_details(self) -> PersonDetails {
        PersonDetails {
            id: self.id,
            name: self.name,
            biography: self.biography,
            birthday: self.birthday,
            deathday: self.deathday,
            place_of_birth: self.place_of_birth,
            profile_url: images::resolve(self.profile_path.as_deref(), ImageSize::Profile),
            known_for_department: self.known_for_department,
            popularity: self.popularity,
            credits: self
                .combined_credits
                .cast
                .into_iter()
                .map(|c| PersonCredit {
                    id: c.id,
                    title: c.title.or(c.name).unwrap_or_default(),
                    media_type: c.media_type,
                    character: c.character.unwrap_or_default(),
                    poster_url: images::resolve(c.poster_path.as_deref(), ImageSize::Poster),
                    date: c.release_date.or(c.first_air_date),
                    vote_average: c.vote_average,
                })
                .collect(),
        }
    }
}

/// Error body the API sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct RawErrorBody {
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details_fixture() -> MovieDetails {
        let raw: RawMovieDetails = serde_json::from_value(serde_json::json!({
            "id": 27205,
            "title": "Inception",
            "adult": false,
            "backdrop_path": "/s3TBrRGB1iav7gFOCNx3H31MoES.jpg",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "original_language": "en",
            "original_title": "Inception",
            "overview": "Cobb steals secrets from dreams.",
            "popularity": 83.9,
            "poster_path": "/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg",
            "production_companies": [
                {"id": 923, "name": "Legendary Pictures", "logo_path": "/8M99Dkt23MjQMTTWukq4m5XsEuo.png", "origin_country": "US"}
            ],
            "release_date": "2010-07-16",
            "runtime": 148,
            "status": "Released",
            "tagline": "Your mind is the scene of the crime.",
            "video": false,
            "vote_average": 8.4,
            "vote_count": 34000,
            "videos": {"results": [
                {"id": "a", "key": "teaser1", "name": "Teaser", "site": "YouTube", "type": "Teaser", "official": true},
                {"id": "b", "key": "trailer1", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true}
            ]},
            "credits": {"cast": [
                {"id": 6193, "name": "Leonardo DiCaprio", "character": "Dom Cobb", "profile_path": "/wo2hJpn04vbtmh0B9utCFdsQhxM.jpg", "order": 0}
            ], "crew": [
                {"id": 525, "name": "Christopher Nolan", "job": "Director", "profile_path": null}
            ]}
        }))
        .unwrap();
        raw.into_details()
    }

    #[test]
    fn test_detail_mapping_resolves_all_images() {
        let details = details_fixture();
        assert!(details
            .poster_path
            .starts_with("https://image.tmdb.org/t/p/w500/"));
        assert!(details
            .backdrop_path
            .starts_with("https://image.tmdb.org/t/p/original/"));
        assert!(details.production_companies[0]
            .logo_url
            .starts_with("https://image.tmdb.org/t/p/"));
        assert!(details.cast[0]
            .profile_url
            .starts_with("https://image.tmdb.org/t/p/w185/"));
        // Missing crew profile resolves to the empty placeholder marker.
        assert_eq!(details.crew[0].profile_url, "");
    }

    #[test]
    fn test_trailer_prefers_trailer_over_teaser() {
        let details = details_fixture();
        let trailer = details.trailer().unwrap();
        assert_eq!(trailer.kind, "Trailer");
        assert_eq!(
            trailer.youtube_url().as_deref(),
            Some("https://www.youtube.com/watch?v=trailer1")
        );
    }

    #[test]
    fn test_movie_summary_projection() {
        let details = details_fixture();
        let summary = details.to_summary();
        assert_eq!(summary.id, details.id);
        assert_eq!(summary.genre_ids, vec![28, 878]);
        assert_eq!(summary.poster_path, details.poster_path);
        assert_eq!(summary.release_date, "2010-07-16");
        assert!(!summary.video);
    }

    #[test]
    fn test_person_credit_merges_movie_and_tv_fields() {
        let raw: RawPersonDetails = serde_json::from_value(serde_json::json!({
            "id": 6193,
            "name": "Leonardo DiCaprio",
            "biography": "An actor.",
            "birthday": "1974-11-11",
            "deathday": null,
            "place_of_birth": "Los Angeles",
            "profile_path": "/wo2hJpn04vbtmh0B9utCFdsQhxM.jpg",
            "known_for_department": "Acting",
            "popularity": 98.0,
            "combined_credits": {"cast": [
                {"id": 27205, "title": "Inception", "media_type": "movie",
                 "character": "Dom Cobb", "poster_path": "/p.jpg",
                 "release_date": "2010-07-16", "vote_average": 8.4},
                {"id": 1668, "name": "Some Show", "media_type": "tv",
                 "character": "Himself", "poster_path": null,
                 "first_air_date": "1994-09-22", "vote_average": 8.9}
            ]}
        }))
        .unwrap();
        let person = raw.into_details();

        assert_eq!(person.credits[0].title, "Inception");
        assert_eq!(person.credits[0].date.as_deref(), Some("2010-07-16"));
        assert_eq!(person.credits[1].title, "Some Show");
        assert_eq!(person.credits[1].date.as_deref(), Some("1994-09-22"));
        assert_eq!(person.credits[1].poster_url, "");
    }

    #[test]
    fn test_trending_entry_uses_title_or_name() {
        let movie: RawTrendingEntry = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "Dune", "vote_count": 5000, "poster_path": "/d.jpg"
        }))
        .unwrap();
        assert_eq!(movie.into_trending().name, "Dune");

        let series: RawTrendingEntry = serde_json::from_value(serde_json::json!({
            "id": 2, "name": "Severance", "vote_count": 3000, "poster_path": null
        }))
        .unwrap();
        let trending = series.into_trending();
        assert_eq!(trending.name, "Severance");
        assert_eq!(trending.poster_url, "");
    }
}
