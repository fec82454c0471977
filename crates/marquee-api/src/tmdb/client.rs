use reqwest::Client;
use serde::de::DeserializeOwned;

use marquee_core::models::{MovieSummary, SeriesSummary, TrendingTitle};

use super::error::TmdbError;
use super::types::{
    MovieDetails, Page, PersonDetails, RawErrorBody, RawMovie, RawMovieDetails, RawPage,
    RawPersonDetails, RawSeries, RawSeriesDetails, RawTrendingEntry, SeriesDetails,
};
use crate::traits::CatalogService;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB REST client.
///
/// Constructed once and passed to consumers; there is no global instance.
/// All calls propagate [`TmdbError`]; callers that want demo data on
/// failure opt in via the [`crate::sample`] module.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TmdbClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, BASE_URL)
    }

    /// Point the client at a different host (tests use a local mock).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "catalog request");

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            // The API wraps errors in {"status_code", "status_message"};
            // fall back to the HTTP status text for anything else.
            let message = serde_json::from_str::<RawErrorBody>(&body)
                .ok()
                .and_then(|e| e.status_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(TmdbError::NotFound(message));
            }
            return Err(TmdbError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json().await.map_err(|e| TmdbError::Parse(e.to_string()))
    }

    async fn movie_page(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<MovieSummary>, TmdbError> {
        let raw: RawPage<RawMovie> = self.get_json(path, query).await?;
        Ok(raw.map(RawMovie::into_summary))
    }

    async fn series_page(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<SeriesSummary>, TmdbError> {
        let raw: RawPage<RawSeries> = self.get_json(path, query).await?;
        Ok(raw.map(RawSeries::into_summary))
    }

    async fn trending(&self, path: &str) -> Result<Vec<TrendingTitle>, TmdbError> {
        let raw: RawPage<RawTrendingEntry> = self.get_json(path, &[]).await?;
        Ok(raw
            .results
            .into_iter()
            .map(RawTrendingEntry::into_trending)
            .collect())
    }

    // ── By-id accessors ─────────────────────────────────────────

    /// Listing-row shape for a single movie: detail fetch followed by the
    /// canonical summary projection.
    pub async fn movie_by_id(&self, id: u64) -> Result<MovieSummary, TmdbError> {
        Ok(self.movie_details(id).await?.to_summary())
    }

    /// Listing-row shape for a single series.
    pub async fn series_by_id(&self, id: u64) -> Result<SeriesSummary, TmdbError> {
        Ok(self.series_details(id).await?.to_summary())
    }
}

fn page_query(page: u32) -> [(&'static str, String); 1] {
    [("page", page.to_string())]
}

impl CatalogService for TmdbClient {
    type Error = TmdbError;

    async fn top_rated_movies(&self, page: u32) -> Result<Page<MovieSummary>, TmdbError> {
        self.movie_page("/movie/top_rated", &page_query(page)).await
    }

    async fn popular_movies(&self, page: u32) -> Result<Page<MovieSummary>, TmdbError> {
        self.movie_page("/movie/popular", &page_query(page)).await
    }

    async fn upcoming_movies(&self, page: u32) -> Result<Page<MovieSummary>, TmdbError> {
        self.movie_page("/movie/upcoming", &page_query(page)).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<MovieSummary>, TmdbError> {
        let query = query.trim();
        if query.is_empty() {
            self.movie_page(
                "/discover/movie",
                &[
                    ("sort_by", "popularity.desc".into()),
                    ("page", page.to_string()),
                ],
            )
            .await
        } else {
            self.movie_page(
                "/search/movie",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await
        }
    }

    async fn trending_movies(&self) -> Result<Vec<TrendingTitle>, TmdbError> {
        self.trending("/trending/movie/week").await
    }

    async fn movie_details(&self, id: u64) -> Result<MovieDetails, TmdbError> {
        let raw: RawMovieDetails = self
            .get_json(
                &format!("/movie/{id}"),
                &[("append_to_response", "credits,videos".into())],
            )
            .await?;
        Ok(raw.into_details())
    }

    async fn top_rated_series(&self, page: u32) -> Result<Page<SeriesSummary>, TmdbError> {
        self.series_page("/tv/top_rated", &page_query(page)).await
    }

    async fn popular_series(&self, page: u32) -> Result<Page<SeriesSummary>, TmdbError> {
        self.series_page("/tv/popular", &page_query(page)).await
    }

    async fn on_the_air_series(&self, page: u32) -> Result<Page<SeriesSummary>, TmdbError> {
        self.series_page("/tv/on_the_air", &page_query(page)).await
    }

    async fn search_series(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<SeriesSummary>, TmdbError> {
        let query = query.trim();
        if query.is_empty() {
            self.series_page(
                "/discover/tv",
                &[
                    ("sort_by", "popularity.desc".into()),
                    ("page", page.to_string()),
                ],
            )
            .await
        } else {
            self.series_page(
                "/search/tv",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await
        }
    }

    async fn trending_series(&self) -> Result<Vec<TrendingTitle>, TmdbError> {
        self.trending("/trending/tv/week").await
    }

    async fn series_details(&self, id: u64) -> Result<SeriesDetails, TmdbError> {
        let raw: RawSeriesDetails = self
            .get_json(
                &format!("/tv/{id}"),
                &[("append_to_response", "credits,videos".into())],
            )
            .await?;
        Ok(raw.into_details())
    }

    async fn person_details(&self, id: u64) -> Result<PersonDetails, TmdbError> {
        let raw: RawPersonDetails = self
            .get_json(
                &format!("/person/{id}"),
                &[("append_to_response", "combined_credits".into())],
            )
            .await?;
        Ok(raw.into_details())
    }
}
