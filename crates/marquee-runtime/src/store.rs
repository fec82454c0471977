use std::path::Path;

use tokio::sync::{mpsc, oneshot};

use marquee_core::error::MarqueeError;
use marquee_core::models::{MovieSummary, SeriesSummary, UserPreferences};
use marquee_core::storage::{PreferenceStore, SqliteStore};

/// Handle to the store actor.
///
/// The preference store is a whole-value key-value store, so every
/// save/remove is a read-modify-write; funneling all access through one
/// thread makes those mutations last-write-wins per command instead of
/// per racing caller.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::UnboundedSender<StoreCommand>,
}

enum StoreCommand {
    SavedMovies {
        reply: oneshot::Sender<Result<Vec<MovieSummary>, MarqueeError>>,
    },
    SaveMovie {
        movie: MovieSummary,
        reply: oneshot::Sender<Result<bool, MarqueeError>>,
    },
    RemoveMovie {
        movie_id: u64,
        reply: oneshot::Sender<Result<(), MarqueeError>>,
    },
    SavedSeries {
        reply: oneshot::Sender<Result<Vec<SeriesSummary>, MarqueeError>>,
    },
    SaveSeries {
        series: SeriesSummary,
        reply: oneshot::Sender<Result<bool, MarqueeError>>,
    },
    RemoveSeries {
        series_id: u64,
        reply: oneshot::Sender<Result<(), MarqueeError>>,
    },
    GetPreferences {
        defaults: UserPreferences,
        reply: oneshot::Sender<Result<UserPreferences, MarqueeError>>,
    },
    SetPreferences {
        prefs: UserPreferences,
        reply: oneshot::Sender<Result<(), MarqueeError>>,
    },
    GetUserName {
        reply: oneshot::Sender<Result<Option<String>, MarqueeError>>,
    },
    SetUserName {
        name: String,
        reply: oneshot::Sender<Result<(), MarqueeError>>,
    },
}

fn actor_closed<T>() -> Result<T, MarqueeError> {
    Err(MarqueeError::Config("store actor closed".into()))
}

impl StoreHandle {
    /// Open the store at the given path and spawn the actor thread.
    pub fn open(path: &Path) -> Option<Self> {
        let store = SqliteStore::open(path)
            .map_err(|e| tracing::error!("Failed to open preference store: {e}"))
            .ok()?;
        Self::spawn(PreferenceStore::new(store))
    }

    /// In-memory store (for tests).
    pub fn open_memory() -> Option<Self> {
        let store = SqliteStore::open_memory()
            .map_err(|e| tracing::error!("Failed to open in-memory store: {e}"))
            .ok()?;
        Self::spawn(PreferenceStore::new(store))
    }

    fn spawn(store: PreferenceStore<SqliteStore>) -> Option<Self> {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("store-actor".into())
            .spawn(move || actor_loop(store, rx))
            .map_err(|e| tracing::error!("Failed to spawn store thread: {e}"))
            .ok()?;

        Some(Self { tx })
    }

    pub async fn saved_movies(&self) -> Result<Vec<MovieSummary>, MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::SavedMovies { reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    /// Returns whether the movie was newly added.
    pub async fn save_movie(&self, movie: MovieSummary) -> Result<bool, MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::SaveMovie { movie, reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn remove_movie(&self, movie_id: u64) -> Result<(), MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::RemoveMovie { movie_id, reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn saved_series(&self) -> Result<Vec<SeriesSummary>, MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::SavedSeries { reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    /// Returns whether the series was newly added.
    pub async fn save_series(&self, series: SeriesSummary) -> Result<bool, MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::SaveSeries { series, reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn remove_series(&self, series_id: u64) -> Result<(), MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::RemoveSeries { series_id, reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn preferences(
        &self,
        defaults: UserPreferences,
    ) -> Result<UserPreferences, MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::GetPreferences { defaults, reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn set_preferences(&self, prefs: UserPreferences) -> Result<(), MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::SetPreferences { prefs, reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn user_name(&self) -> Result<Option<String>, MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::GetUserName { reply });
        rx.await.unwrap_or_else(|_| actor_closed())
    }

    pub async fn set_user_name(&self, name: impl Into<String>) -> Result<(), MarqueeError> {
        let (reply, rx) = oneshot::channel();
        let _ = self.tx.send(StoreCommand::SetUserName {
            name: name.into(),
            reply,
        });
        rx.await.unwrap_or_else(|_| actor_closed())
    }
}

fn actor_loop(store: PreferenceStore<SqliteStore>, mut rx: mpsc::UnboundedReceiver<StoreCommand>) {
    while let Some(cmd) = rx.blocking_recv() {
        match cmd {
            StoreCommand::SavedMovies { reply } => {
                let _ = reply.send(store.saved_movies());
            }
            StoreCommand::SaveMovie { movie, reply } => {
                let _ = reply.send(store.save_movie(&movie));
            }
            StoreCommand::RemoveMovie { movie_id, reply } => {
                let _ = reply.send(store.remove_movie(movie_id));
            }
            StoreCommand::SavedSeries { reply } => {
                let _ = reply.send(store.saved_series());
            }
            StoreCommand::SaveSeries { series, reply } => {
                let _ = reply.send(store.save_series(&series));
            }
            StoreCommand::RemoveSeries { series_id, reply } => {
                let _ = reply.send(store.remove_series(series_id));
            }
            StoreCommand::GetPreferences { defaults, reply } => {
                let _ = reply.send(store.preferences(defaults));
            }
            StoreCommand::SetPreferences { prefs, reply } => {
                let _ = reply.send(store.set_preferences(&prefs));
            }
            StoreCommand::GetUserName { reply } => {
                let _ = reply.send(store.user_name());
            }
            StoreCommand::SetUserName { name, reply } => {
                let _ = reply.send(store.set_user_name(&name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            adult: false,
            backdrop_path: String::new(),
            genre_ids: vec![],
            original_language: "en".into(),
            original_title: format!("Movie {id}"),
            overview: String::new(),
            popularity: 0.0,
            poster_path: String::new(),
            release_date: String::new(),
            video: false,
            vote_average: 0.0,
            vote_count: 0,
        }
    }

    #[tokio::test]
    async fn test_save_and_remove_through_handle() {
        let handle = StoreHandle::open_memory().unwrap();

        assert!(handle.save_movie(test_movie(1)).await.unwrap());
        assert!(!handle.save_movie(test_movie(1)).await.unwrap());
        assert_eq!(handle.saved_movies().await.unwrap().len(), 1);

        handle.remove_movie(1).await.unwrap();
        assert!(handle.saved_movies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_saves_all_land() {
        let handle = StoreHandle::open_memory().unwrap();

        let tasks: Vec<_> = (0..16u64)
            .map(|id| {
                let handle = handle.clone();
                tokio::spawn(async move { handle.save_movie(test_movie(id)).await })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().unwrap());
        }

        // Every read-modify-write went through the actor, so no save
        // overwrote another.
        assert_eq!(handle.saved_movies().await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_preferences_and_name_through_handle() {
        let handle = StoreHandle::open_memory().unwrap();

        let defaults = UserPreferences::default();
        assert_eq!(handle.preferences(defaults).await.unwrap(), defaults);

        let mut prefs = defaults;
        prefs.dark_mode = false;
        handle.set_preferences(prefs).await.unwrap();
        assert_eq!(handle.preferences(defaults).await.unwrap(), prefs);

        handle.set_user_name("Ada").await.unwrap();
        assert_eq!(handle.user_name().await.unwrap().as_deref(), Some("Ada"));
    }
}
