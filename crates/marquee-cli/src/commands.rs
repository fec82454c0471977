use marquee_api::traits::CatalogService;
use marquee_api::{sample, TmdbClient, TmdbError};
use marquee_core::config::{AppConfig, TOKEN_ENV_VAR};
use marquee_core::error::MarqueeError;
use marquee_core::models::{MovieSummary, UserPreferences};
use marquee_runtime::{HomeFeed, StoreHandle};

use crate::format;
use crate::{Cli, Command, ConfigAction, NameAction, PrefsAction, SavedAction};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] TmdbError),
    #[error(transparent)]
    Core(#[from] MarqueeError),
    #[error("no API token configured; set {TOKEN_ENV_VAR} or `api.token` in the config file")]
    MissingToken,
    #[error("could not open the preference store")]
    StoreUnavailable,
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;

    match cli.command {
        Command::Home => home(&config, cli.offline_fallback).await,
        Command::Search {
            query,
            series,
            page,
        } => search(&config, &query, series, page, cli.offline_fallback).await,
        Command::Movie { id } => movie(&config, id).await,
        Command::Series { id } => series(&config, id).await,
        Command::Person { id } => person(&config, id).await,
        Command::Trending { series } => trending(&config, series).await,
        Command::Saved { action } => saved(&config, action).await,
        Command::Prefs { action } => prefs(action).await,
        Command::Name { action } => name(action).await,
        Command::Config { action } => configure(config, action),
    }
}

fn client(config: &AppConfig) -> Result<TmdbClient, CliError> {
    config
        .api_token()
        .map(TmdbClient::new)
        .ok_or(CliError::MissingToken)
}

fn store() -> Result<StoreHandle, CliError> {
    let path = AppConfig::ensure_db_path()?;
    StoreHandle::open(&path).ok_or(CliError::StoreUnavailable)
}

/// Substitute the built-in sample listing for a failed movie category.
fn with_fallback(
    result: Result<Vec<MovieSummary>, TmdbError>,
    enabled: bool,
) -> Result<Vec<MovieSummary>, TmdbError> {
    result.or_else(|e| {
        if enabled {
            tracing::warn!("category failed, using sample listing: {e}");
            Ok(sample::top_movies().results)
        } else {
            Err(e)
        }
    })
}

async fn home(config: &AppConfig, offline_fallback: bool) -> Result<(), CliError> {
    let client = client(config)?;
    let feed = HomeFeed::load(&client).await;
    if feed.failed_count() > 0 {
        tracing::warn!(
            failed = feed.failed_count(),
            total = HomeFeed::<TmdbError>::SECTION_COUNT,
            "some home categories failed to load"
        );
    }

    let limit = config.display.trending_limit;
    let top_rated = with_fallback(feed.top_rated_movies, offline_fallback);
    let popular = with_fallback(feed.popular_movies, offline_fallback);
    let upcoming = with_fallback(feed.upcoming_movies, offline_fallback);

    format::movie_section("Top rated movies", &top_rated);
    format::movie_section("Popular movies", &popular);
    format::movie_section("Upcoming movies", &upcoming);
    format::trending_section("Trending movies this week", &feed.trending_movies, limit);
    format::series_section("Top rated series", &feed.top_rated_series);
    format::series_section("Popular series", &feed.popular_series);
    format::series_section("On the air", &feed.on_the_air_series);
    format::trending_section("Trending series this week", &feed.trending_series, limit);
    Ok(())
}

async fn search(
    config: &AppConfig,
    query: &str,
    series: bool,
    page: u32,
    offline_fallback: bool,
) -> Result<(), CliError> {
    let client = client(config)?;
    if series {
        let results = client.search_series(query, page).await?;
        println!(
            "Page {}/{} ({} results)",
            results.page, results.total_pages, results.total_results
        );
        format::series_rows(&results.results);
    } else {
        let results = match client.search_movies(query, page).await {
            Ok(page) => page,
            Err(e) if offline_fallback => {
                tracing::warn!("search failed, using sample listing: {e}");
                sample::top_movies()
            }
            Err(e) => return Err(e.into()),
        };
        println!(
            "Page {}/{} ({} results)",
            results.page, results.total_pages, results.total_results
        );
        format::movie_rows(&results.results);
    }
    Ok(())
}

async fn movie(config: &AppConfig, id: u64) -> Result<(), CliError> {
    let details = client(config)?.movie_details(id).await?;
    format::movie_details(&details, config.display.cast_limit);
    Ok(())
}

async fn series(config: &AppConfig, id: u64) -> Result<(), CliError> {
    let details = client(config)?.series_details(id).await?;
    format::series_details(&details, config.display.cast_limit);
    Ok(())
}

async fn person(config: &AppConfig, id: u64) -> Result<(), CliError> {
    let details = client(config)?.person_details(id).await?;
    format::person(&details, config.display.cast_limit);
    Ok(())
}

async fn trending(config: &AppConfig, series: bool) -> Result<(), CliError> {
    let client = client(config)?;
    let titles = if series {
        client.trending_series().await?
    } else {
        client.trending_movies().await?
    };
    format::trending_rows(&titles, config.display.trending_limit);
    Ok(())
}

async fn saved(config: &AppConfig, action: SavedAction) -> Result<(), CliError> {
    let store = store()?;
    match action {
        SavedAction::List { series: true } => {
            format::series_rows(&store.saved_series().await?);
        }
        SavedAction::List { series: false } => {
            format::movie_rows(&store.saved_movies().await?);
        }
        SavedAction::Add { id, series: true } => {
            let summary = client(config)?.series_by_id(id).await?;
            let name = summary.name.clone();
            if store.save_series(summary).await? {
                println!("Saved \"{name}\"");
            } else {
                println!("\"{name}\" is already saved");
            }
        }
        SavedAction::Add { id, series: false } => {
            let summary = client(config)?.movie_by_id(id).await?;
            let title = summary.title.clone();
            if store.save_movie(summary).await? {
                println!("Saved \"{title}\"");
            } else {
                println!("\"{title}\" is already saved");
            }
        }
        SavedAction::Remove { id, series: true } => {
            store.remove_series(id).await?;
            println!("Removed series {id}");
        }
        SavedAction::Remove { id, series: false } => {
            store.remove_movie(id).await?;
            println!("Removed movie {id}");
        }
    }
    Ok(())
}

async fn prefs(action: PrefsAction) -> Result<(), CliError> {
    let store = store()?;
    match action {
        PrefsAction::Show => {
            let prefs = store.preferences(UserPreferences::default()).await?;
            println!("notifications: {}", prefs.enable_notifications);
            println!("dark mode:     {}", prefs.dark_mode);
        }
        PrefsAction::Set {
            notifications,
            dark_mode,
        } => {
            let mut prefs = store.preferences(UserPreferences::default()).await?;
            if let Some(on) = notifications {
                prefs.enable_notifications = on;
            }
            if let Some(on) = dark_mode {
                prefs.dark_mode = on;
            }
            store.set_preferences(prefs).await?;
            println!("Preferences updated");
        }
    }
    Ok(())
}

fn configure(mut config: AppConfig, action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            println!("Config file: {}", AppConfig::config_path().display());
            println!(
                "API token:   {}",
                if config.api_token().is_some() { "set" } else { "not set" }
            );
            println!("Trending:    {} rows", config.display.trending_limit);
            println!("Cast:        {} rows", config.display.cast_limit);
        }
        ConfigAction::SetToken { token } => {
            config.api.token = token;
            config.save()?;
            println!("Token saved to {}", AppConfig::config_path().display());
        }
    }
    Ok(())
}

async fn name(action: NameAction) -> Result<(), CliError> {
    let store = store()?;
    match action {
        NameAction::Show => match store.user_name().await? {
            Some(name) => println!("{name}"),
            None => println!("(no name set)"),
        },
        NameAction::Set { name } => {
            store.set_user_name(name.as_str()).await?;
            println!("Hello, {name}");
        }
    }
    Ok(())
}
