use serde::{Deserialize, Serialize};

/// A movie listing row, as shown in grids and carousels and as persisted
/// in the saved-movies list.
///
/// Image fields hold fully resolved URLs; an empty string means the API
/// had no image and the caller should render a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub backdrop_path: String,
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
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
}

impl MovieSummary {
    /// Year component of the release date, if any.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date.split('-').next().filter(|y| !y.is_empty())
    }
}

/// A TV series listing row; the series counterpart of [`MovieSummary`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub backdrop_path: String,
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
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub first_air_date: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: u64,
}

impl SeriesSummary {
    /// Year component of the first air date, if any.
    pub fn first_air_year(&self) -> Option<&str> {
        self.first_air_date
            .split('-')
            .next()
            .filter(|y| !y.is_empty())
    }
}

/// A weekly trending entry: the bare minimum needed for a trending card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTitle {
    pub id: u64,
    pub name: String,
    pub vote_count: u64,
    pub poster_url: String,
}
