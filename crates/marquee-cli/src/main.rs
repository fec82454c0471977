mod commands;
mod format;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about = "Browse movies and TV from the terminal")]
pub struct Cli {
    /// Fall back to a built-in sample listing when a movie fetch fails.
    #[arg(long, global = true)]
    pub offline_fallback: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every home category
    Home,
    /// Search by title; an empty query browses by popularity
    Search {
        #[arg(default_value = "")]
        query: String,
        /// Search TV series instead of movies
        #[arg(long)]
        series: bool,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Full details for one movie
    Movie { id: u64 },
    /// Full details for one series
    Series { id: u64 },
    /// A person and their combined screen credits
    Person { id: u64 },
    /// This week's trending titles
    Trending {
        /// Trending series instead of movies
        #[arg(long)]
        series: bool,
    },
    /// Manage the saved list
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// Show or change stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Show or change the stored display name
    Name {
        #[command(subcommand)]
        action: NameAction,
    },
    /// Show or change the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file path and current values
    Show,
    /// Store the API bearer token in the config file
    SetToken { token: String },
}

#[derive(Subcommand, Debug)]
pub enum SavedAction {
    /// List saved titles
    List {
        #[arg(long)]
        series: bool,
    },
    /// Fetch a title by id and add it to the saved list
    Add {
        id: u64,
        #[arg(long)]
        series: bool,
    },
    /// Remove a title from the saved list
    Remove {
        id: u64,
        #[arg(long)]
        series: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsAction {
    /// Print current preferences
    Show,
    /// Update one or both preference flags
    Set {
        #[arg(long)]
        notifications: Option<bool>,
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NameAction {
    /// Print the stored display name
    Show,
    /// Replace the stored display name
    Set { name: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "marquee=info".into()))
        .init();

    let cli = Cli::parse();
    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
