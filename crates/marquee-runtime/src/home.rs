use marquee_api::traits::CatalogService;
use marquee_core::models::{MovieSummary, SeriesSummary, TrendingTitle};

/// The home screen's eight category slots, each carrying its own result.
///
/// A failed category stays an `Err` in its slot instead of poisoning the
/// whole feed; every fetch has settled by the time `load` returns, so
/// callers can clear their loading state unconditionally.
#[derive(Debug)]
pub struct HomeFeed<E> {
    pub top_rated_movies: Result<Vec<MovieSummary>, E>,
    pub popular_movies: Result<Vec<MovieSummary>, E>,
    pub upcoming_movies: Result<Vec<MovieSummary>, E>,
    pub trending_movies: Result<Vec<TrendingTitle>, E>,
    pub top_rated_series: Result<Vec<SeriesSummary>, E>,
    pub popular_series: Result<Vec<SeriesSummary>, E>,
    pub on_the_air_series: Result<Vec<SeriesSummary>, E>,
    pub trending_series: Result<Vec<TrendingTitle>, E>,
}

impl<E> HomeFeed<E> {
    pub const SECTION_COUNT: usize = 8;

    /// Fetch all categories concurrently, capturing failures per slot.
    pub async fn load<C: CatalogService<Error = E>>(client: &C) -> Self {
        let (
            top_rated_movies,
            popular_movies,
            upcoming_movies,
            trending_movies,
            top_rated_series,
            popular_series,
            on_the_air_series,
            trending_series,
        ) = tokio::join!(
            client.top_rated_movies(1),
            client.popular_movies(1),
            client.upcoming_movies(1),
            client.trending_movies(),
            client.top_rated_series(1),
            client.popular_series(1),
            client.on_the_air_series(1),
            client.trending_series(),
        );

        Self {
            top_rated_movies: top_rated_movies.map(|p| p.results),
            popular_movies: popular_movies.map(|p| p.results),
            upcoming_movies: upcoming_movies.map(|p| p.results),
            trending_movies,
            top_rated_series: top_rated_series.map(|p| p.results),
            popular_series: popular_series.map(|p| p.results),
            on_the_air_series: on_the_air_series.map(|p| p.results),
            trending_series,
        }
    }

    /// Number of categories that failed to load.
    pub fn failed_count(&self) -> usize {
        [
            self.top_rated_movies.is_err(),
            self.popular_movies.is_err(),
            self.upcoming_movies.is_err(),
            self.trending_movies.is_err(),
            self.top_rated_series.is_err(),
            self.popular_series.is_err(),
            self.on_the_air_series.is_err(),
            self.trending_series.is_err(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_api::tmdb::types::{MovieDetails, Page, PersonDetails, SeriesDetails};

    #[derive(Debug, thiserror::Error)]
    #[error("category unavailable")]
    struct StubError;

    /// Catalog stub: every listing succeeds except popular movies.
    struct StubCatalog;

    fn movie_page() -> Page<MovieSummary> {
        Page {
            page: 1,
            results: vec![MovieSummary {
                id: 1,
                title: "Stub Movie".into(),
                adult: false,
                backdrop_path: String::new(),
                genre_ids: vec![],
                original_language: "en".into(),
                original_title: "Stub Movie".into(),
                overview: String::new(),
                popularity: 0.0,
                poster_path: String::new(),
                release_date: String::new(),
                video: false,
                vote_average: 0.0,
                vote_count: 0,
            }],
            total_pages: 1,
            total_results: 1,
        }
    }

    fn series_page() -> Page<SeriesSummary> {
        Page {
            page: 1,
            results: vec![SeriesSummary {
                id: 1,
                name: "Stub Series".into(),
                backdrop_path: String::new(),
                genre_ids: vec![],
                original_language: "en".into(),
                original_name: "Stub Series".into(),
                overview: String::new(),
                popularity: 0.0,
                poster_path: String::new(),
                first_air_date: String::new(),
                vote_average: 0.0,
                vote_count: 0,
            }],
            total_pages: 1,
            total_results: 1,
        }
    }

    fn trending() -> Vec<TrendingTitle> {
        vec![TrendingTitle {
            id: 1,
            name: "Stub".into(),
            vote_count: 10,
            poster_url: String::new(),
        }]
    }

    impl CatalogService for StubCatalog {
        type Error = StubError;

        async fn top_rated_movies(&self, _page: u32) -> Result<Page<MovieSummary>, StubError> {
            Ok(movie_page())
        }

        async fn popular_movies(&self, _page: u32) -> Result<Page<MovieSummary>, StubError> {
            Err(StubError)
        }

        async fn upcoming_movies(&self, _page: u32) -> Result<Page<MovieSummary>, StubError> {
            Ok(movie_page())
        }

        async fn search_movies(
            &self,
            _query: &str,
            _page: u32,
        ) -> Result<Page<MovieSummary>, StubError> {
            Ok(movie_page())
        }

        async fn trending_movies(&self) -> Result<Vec<TrendingTitle>, StubError> {
            Ok(trending())
        }

        async fn movie_details(&self, _id: u64) -> Result<MovieDetails, StubError> {
            Err(StubError)
        }

        async fn top_rated_series(&self, _page: u32) -> Result<Page<SeriesSummary>, StubError> {
            Ok(series_page())
        }

        async fn popular_series(&self, _page: u32) -> Result<Page<SeriesSummary>, StubError> {
            Ok(series_page())
        }

        async fn on_the_air_series(&self, _page: u32) -> Result<Page<SeriesSummary>, StubError> {
            Ok(series_page())
        }

        async fn search_series(
            &self,
            _query: &str,
            _page: u32,
        ) -> Result<Page<SeriesSummary>, StubError> {
            Ok(series_page())
        }

        async fn trending_series(&self) -> Result<Vec<TrendingTitle>, StubError> {
            Ok(trending())
        }

        async fn series_details(&self, _id: u64) -> Result<SeriesDetails, StubError> {
            Err(StubError)
        }

        async fn person_details(&self, _id: u64) -> Result<PersonDetails, StubError> {
            Err(StubError)
        }
    }

    #[tokio::test]
    async fn test_one_failed_category_leaves_the_rest_intact() {
        let feed = HomeFeed::load(&StubCatalog).await;

        assert_eq!(feed.failed_count(), 1);
        assert!(feed.popular_movies.is_err());

        assert_eq!(feed.top_rated_movies.as_ref().unwrap().len(), 1);
        assert_eq!(feed.upcoming_movies.as_ref().unwrap().len(), 1);
        assert_eq!(feed.trending_movies.as_ref().unwrap().len(), 1);
        assert_eq!(feed.top_rated_series.as_ref().unwrap().len(), 1);
        assert_eq!(feed.popular_series.as_ref().unwrap().len(), 1);
        assert_eq!(feed.on_the_air_series.as_ref().unwrap().len(), 1);
        assert_eq!(feed.trending_series.as_ref().unwrap().len(), 1);
    }
}
