//! Trait definition for the remote catalog.
//!
//! The concrete client implements this, and so can stubs in tests, so the
//! runtime and view layers never depend on a live transport.

use std::future::Future;

use marquee_core::models::{MovieSummary, SeriesSummary, TrendingTitle};

use crate::tmdb::types::{MovieDetails, Page, PersonDetails, SeriesDetails};

/// A movie/TV metadata catalog.
pub trait CatalogService: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    // ── Movie listings ──────────────────────────────────────────

    fn top_rated_movies(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<MovieSummary>, Self::Error>> + Send;

    fn popular_movies(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<MovieSummary>, Self::Error>> + Send;

    fn upcoming_movies(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<MovieSummary>, Self::Error>> + Send;

    /// Search movies; an empty query browses by popularity instead.
    fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Page<MovieSummary>, Self::Error>> + Send;

    fn trending_movies(
        &self,
    ) -> impl Future<Output = Result<Vec<TrendingTitle>, Self::Error>> + Send;

    fn movie_details(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<MovieDetails, Self::Error>> + Send;

    // ── Series listings ─────────────────────────────────────────

    fn top_rated_series(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<SeriesSummary>, Self::Error>> + Send;

    fn popular_series(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<SeriesSummary>, Self::Error>> + Send;

    fn on_the_air_series(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<SeriesSummary>, Self::Error>> + Send;

    /// Search series; an empty query browses by popularity instead.
    fn search_series(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<Page<SeriesSummary>, Self::Error>> + Send;

    fn trending_series(
        &self,
    ) -> impl Future<Output = Result<Vec<TrendingTitle>, Self::Error>> + Send;

    fn series_details(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<SeriesDetails, Self::Error>> + Send;

    // ── People ──────────────────────────────────────────────────

    fn person_details(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<PersonDetails, Self::Error>> + Send;
}
