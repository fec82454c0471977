//! Plain-text rendering for listing rows and detail pages.

use std::fmt::Display;

use marquee_api::tmdb::types::{CastMember, MovieDetails, PersonDetails, SeriesDetails};
use marquee_core::models::{MovieSummary, SeriesSummary, TrendingTitle};

pub fn movie_rows(movies: &[MovieSummary]) {
    if movies.is_empty() {
        println!("  (nothing here)");
        return;
    }
    for movie in movies {
        println!(
            "  {:>8}  {} ({})  {:.1}/10",
            movie.id,
            movie.title,
            movie.release_year().unwrap_or("?"),
            movie.vote_average,
        );
    }
}

pub fn series_rows(series: &[SeriesSummary]) {
    if series.is_empty() {
        println!("  (nothing here)");
        return;
    }
    for entry in series {
        println!(
            "  {:>8}  {} ({})  {:.1}/10",
            entry.id,
            entry.name,
            entry.first_air_year().unwrap_or("?"),
            entry.vote_average,
        );
    }
}

pub fn trending_rows(titles: &[TrendingTitle], limit: usize) {
    for title in titles.iter().take(limit) {
        println!("  {:>8}  {}  ({} votes)", title.id, title.name, title.vote_count);
    }
}

pub fn movie_section<E: Display>(header: &str, result: &Result<Vec<MovieSummary>, E>) {
    println!("\n{header}");
    match result {
        Ok(movies) => movie_rows(movies),
        Err(e) => println!("  (failed to load: {e})"),
    }
}

pub fn series_section<E: Display>(header: &str, result: &Result<Vec<SeriesSummary>, E>) {
    println!("\n{header}");
    match result {
        Ok(series) => series_rows(series),
        Err(e) => println!("  (failed to load: {e})"),
    }
}

pub fn trending_section<E: Display>(
    header: &str,
    result: &Result<Vec<TrendingTitle>, E>,
    limit: usize,
) {
    println!("\n{header}");
    match result {
        Ok(titles) => trending_rows(titles, limit),
        Err(e) => println!("  (failed to load: {e})"),
    }
}

pub fn movie_details(details: &MovieDetails, cast_limit: usize) {
    println!("{} ({})", details.title, year_of(&details.release_date));
    if !details.tagline.is_empty() {
        println!("\"{}\"", details.tagline);
    }
    println!();
    println!("Status:   {}", details.status);
    if let Some(runtime) = details.runtime {
        println!("Runtime:  {runtime} min");
    }
    println!("Rating:   {:.1}/10 ({} votes)", details.vote_average, details.vote_count);
    println!("Genres:   {}", join_names(details.genres.iter().map(|g| g.name.as_str())));
    if let Some(collection) = &details.belongs_to_collection {
        println!("Part of:  {}", collection.name);
    }
    if !details.overview.is_empty() {
        println!("\n{}", details.overview);
    }
    if let Some(trailer) = details.trailer() {
        if let Some(url) = trailer.youtube_url() {
            println!("\nTrailer:  {url}");
        }
    }
    if let Some(director) = details.crew.iter().find(|c| c.job == "Director") {
        println!("\nDirected by {}", director.name);
    }
    print_cast(&details.cast, cast_limit);
}

pub fn series_details(details: &SeriesDetails, cast_limit: usize) {
    println!("{} ({})", details.name, year_of(&details.first_air_date));
    if !details.tagline.is_empty() {
        println!("\"{}\"", details.tagline);
    }
    println!();
    println!(
        "Seasons:  {} ({} episodes)",
        details.number_of_seasons, details.number_of_episodes
    );
    println!(
        "Status:   {}{}",
        details.status,
        if details.in_production { " (in production)" } else { "" }
    );
    println!("Rating:   {:.1}/10 ({} votes)", details.vote_average, details.vote_count);
    println!("Genres:   {}", join_names(details.genres.iter().map(|g| g.name.as_str())));
    if !details.networks.is_empty() {
        println!(
            "Networks: {}",
            join_names(details.networks.iter().map(|n| n.name.as_str()))
        );
    }
    if !details.created_by.is_empty() {
        println!(
            "Creators: {}",
            join_names(details.created_by.iter().map(|c| c.name.as_str()))
        );
    }
    if !details.overview.is_empty() {
        println!("\n{}", details.overview);
    }
    if let Some(trailer) = details.trailer() {
        if let Some(url) = trailer.youtube_url() {
            println!("\nTrailer:  {url}");
        }
    }
    print_cast(&details.cast, cast_limit);
}

pub fn person(details: &PersonDetails, credit_limit: usize) {
    println!("{}", details.name);
    println!("Known for: {}", details.known_for_department);
    if let Some(birthday) = &details.birthday {
        match &details.place_of_birth {
            Some(place) => println!("Born:      {birthday} in {place}"),
            None => println!("Born:      {birthday}"),
        }
    }
    if let Some(deathday) = &details.deathday {
        println!("Died:      {deathday}");
    }
    if !details.biography.is_empty() {
        println!("\n{}", details.biography);
    }
    if !details.credits.is_empty() {
        println!("\nCredits");
        for credit in details.credits.iter().take(credit_limit) {
            let year = credit.date.as_deref().map(year_of).unwrap_or("?");
            if credit.character.is_empty() {
                println!("  {} ({}, {})", credit.title, credit.media_type, year);
            } else {
                println!(
                    "  {} ({}, {}) as {}",
                    credit.title, credit.media_type, year, credit.character
                );
            }
        }
    }
}

fn print_cast(cast: &[CastMember], limit: usize) {
    if cast.is_empty() {
        return;
    }
    println!("\nCast");
    for member in cast.iter().take(limit) {
        if member.character.is_empty() {
            println!("  {}", member.name);
        } else {
            println!("  {} as {}", member.name, member.character);
        }
    }
}

fn year_of(date: &str) -> &str {
    date.split('-').next().filter(|y| !y.is_empty()).unwrap_or("?")
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
