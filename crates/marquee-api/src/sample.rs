//! Bundled demo dataset.
//!
//! The client itself never falls back to this; callers that prefer demo
//! rows over an error (offline demos, UI development) substitute it
//! explicitly after a listing call fails.

use marquee_core::models::MovieSummary;

use crate::tmdb::types::Page;

fn movie(
    id: u64,
    title: &str,
    poster: &str,
    backdrop: &str,
    overview: &str,
    release_date: &str,
    vote_average: f32,
    genre_ids: &[u64],
) -> MovieSummary {
    MovieSummary {
        id,
        title: title.into(),
        adult: false,
        backdrop_path: format!("https://image.tmdb.org/t/p/original{backdrop}"),
        genre_ids: genre_ids.to_vec(),
        original_language: "en".into(),
        original_title: title.into(),
        overview: overview.into(),
        popularity: 0.0,
        poster_path: format!("https://image.tmdb.org/t/p/w500{poster}"),
        release_date: release_date.into(),
        video: false,
        vote_average,
        vote_count: 0,
    }
}

/// A fixed page of well-known movies for offline/demo use.
pub fn top_movies() -> Page<MovieSummary> {
    let results = vec![
        movie(
            1,
            "Inception",
            "/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg",
            "/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg",
            "A skilled thief who steals secrets from deep within the \
             subconscious is offered a chance to have his past crimes \
             forgiven in exchange for planting an idea in a target's mind.",
            "2010-07-16",
            8.8,
            &[28, 878, 12],
        ),
        movie(
            2,
            "The Dark Knight",
            "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            "When the menace known as the Joker wreaks havoc on Gotham, \
             Batman must confront a nemesis that is absolutely fearless \
             and utterly malevolent.",
            "2008-07-18",
            9.0,
            &[28, 80, 18],
        ),
        movie(
            3,
            "Interstellar",
            "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
            "A team of explorers travel through a wormhole near Saturn in \
             search of a new habitable planet for humanity.",
            "2014-11-07",
            8.6,
            &[878, 12, 18],
        ),
        movie(
            4,
            "The Shawshank Redemption",
            "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
            "/kXfqcdQKsToO0OUXHcrrNCHDBzO.jpg",
            "Framed for a double murder, banker Andy Dufresne begins a new \
             life at Shawshank prison, where his integrity and \
             unquenchable hope win over the other inmates.",
            "1994-09-23",
            8.7,
            &[18, 80],
        ),
        movie(
            5,
            "Pulp Fiction",
            "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
            "/suaEOtk1N1sgg2MTM7oZd2cfVp3.jpg",
            "A burger-loving hit man, his philosophical partner and a \
             washed-up boxer converge in three stories that trip back and \
             forth in time.",
            "1994-10-14",
            8.5,
            &[80, 53],
        ),
    ];
    Page {
        page: 1,
        total_pages: 1,
        total_results: results.len() as u32,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_no_duplicate_ids_and_absolute_urls() {
        let page = top_movies();
        assert_eq!(page.total_results as usize, page.results.len());
        for (i, movie) in page.results.iter().enumerate() {
            assert!(movie.poster_path.starts_with("https://"));
            assert!(page.results[i + 1..].iter().all(|m| m.id != movie.id));
        }
    }
}
