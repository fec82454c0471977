use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::MarqueeError;
use crate::models::{MovieSummary, SeriesSummary, UserPreferences};

/// Fixed storage keys for the four logical records.
pub mod keys {
    pub const SAVED_MOVIES: &str = "saved_movies";
    pub const SAVED_SERIES: &str = "saved_series";
    pub const USER_PREFERENCES: &str = "user_preferences";
    pub const USER_NAME: &str = "user_name";
}

/// A whole-value key-value store: `get` and `set` only, no partial
/// updates, no transactions across keys.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, MarqueeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), MarqueeError>;
}

/// SQLite-backed key-value store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, MarqueeError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, MarqueeError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, MarqueeError> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MarqueeError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Schema migrations tracked via `PRAGMA user_version`.
fn run_migrations(conn: &Connection) -> Result<(), MarqueeError> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap_or(0);

    if version < 1 {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )?;
        conn.pragma_update(None, "user_version", 1)?;
    }
    Ok(())
}

/// Stored preference record with every field optional, so records written
/// by older versions still read cleanly.
#[derive(Debug, Default, Deserialize)]
struct PartialPreferences {
    enable_notifications: Option<bool>,
    dark_mode: Option<bool>,
}

/// The local preference store: saved-title lists, preference flags, and
/// the display name, each serialized as JSON under a fixed key.
///
/// Read-modify-write on the saved lists is not atomic at this level;
/// concurrent mutators must serialize access (marquee-runtime's
/// `StoreHandle` owns a store on a single thread for exactly that).
pub struct PreferenceStore<S> {
    kv: S,
}

impl<S: KvStore> PreferenceStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    // ── Saved movies ────────────────────────────────────────────

    pub fn saved_movies(&self) -> Result<Vec<MovieSummary>, MarqueeError> {
        self.read_list(keys::SAVED_MOVIES)
    }

    /// Append a movie to the saved list unless its id is already present.
    /// Returns whether the movie was newly added.
    pub fn save_movie(&self, movie: &MovieSummary) -> Result<bool, MarqueeError> {
        let mut saved = self.saved_movies()?;
        if saved.iter().any(|m| m.id == movie.id) {
            return Ok(false);
        }
        saved.push(movie.clone());
        self.write_list(keys::SAVED_MOVIES, &saved)?;
        Ok(true)
    }

    /// Remove a movie by id. Removing an absent id is a no-op.
    pub fn remove_movie(&self, movie_id: u64) -> Result<(), MarqueeError> {
        let mut saved = self.saved_movies()?;
        saved.retain(|m| m.id != movie_id);
        self.write_list(keys::SAVED_MOVIES, &saved)
    }

    // ── Saved series ────────────────────────────────────────────

    pub fn saved_series(&self) -> Result<Vec<SeriesSummary>, MarqueeError> {
        self.read_list(keys::SAVED_SERIES)
    }

    /// Append a series to the saved list unless its id is already present.
    /// Returns whether the series was newly added.
    pub fn save_series(&self, series: &SeriesSummary) -> Result<bool, MarqueeError> {
        let mut saved = self.saved_series()?;
        if saved.iter().any(|s| s.id == series.id) {
            return Ok(false);
        }
        saved.push(series.clone());
        self.write_list(keys::SAVED_SERIES, &saved)?;
        Ok(true)
    }

    /// Remove a series by id. Removing an absent id is a no-op.
    pub fn remove_series(&self, series_id: u64) -> Result<(), MarqueeError> {
        let mut saved = self.saved_series()?;
        saved.retain(|s| s.id != series_id);
        self.write_list(keys::SAVED_SERIES, &saved)
    }

    // ── Preferences ─────────────────────────────────────────────

    /// Read the preference record, merging stored fields over the
    /// caller-supplied defaults.
    pub fn preferences(
        &self,
        defaults: UserPreferences,
    ) -> Result<UserPreferences, MarqueeError> {
        let partial = match self.kv.get(keys::USER_PREFERENCES)? {
            Some(raw) => serde_json::from_str::<PartialPreferences>(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable preference record: {e}");
                PartialPreferences::default()
            }),
            None => PartialPreferences::default(),
        };
        Ok(UserPreferences {
            enable_notifications: partial
                .enable_notifications
                .unwrap_or(defaults.enable_notifications),
            dark_mode: partial.dark_mode.unwrap_or(defaults.dark_mode),
        })
    }

    /// Overwrite the preference record. No merge: callers read, modify,
    /// and write the whole record.
    pub fn set_preferences(&self, prefs: &UserPreferences) -> Result<(), MarqueeError> {
        let raw = serde_json::to_string(prefs)?;
        self.kv.set(keys::USER_PREFERENCES, &raw)
    }

    // ── Display name ────────────────────────────────────────────

    pub fn user_name(&self) -> Result<Option<String>, MarqueeError> {
        self.kv.get(keys::USER_NAME)
    }

    pub fn set_user_name(&self, name: &str) -> Result<(), MarqueeError> {
        self.kv.set(keys::USER_NAME, name)
    }

    // ── Helpers ─────────────────────────────────────────────────

    /// Missing key and unreadable payload both degrade to an empty list;
    /// the latter is logged.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, MarqueeError> {
        match self.kv.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable list under {key}: {e}");
                Vec::new()
            })),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, list: &[T]) -> Result<(), MarqueeError> {
        let raw = serde_json::to_string(list)?;
        self.kv.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> PreferenceStore<SqliteStore> {
        PreferenceStore::new(SqliteStore::open_memory().unwrap())
    }

    fn test_movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            adult: false,
            backdrop_path: String::new(),
            genre_ids: vec![28, 12],
            original_language: "en".into(),
            original_title: format!("Movie {id}"),
            overview: "Plot.".into(),
            popularity: 1.0,
            poster_path: format!("https://image.tmdb.org/t/p/w500/{id}.jpg"),
            release_date: "2010-07-16".into(),
            video: false,
            vote_average: 7.5,
            vote_count: 100,
        }
    }

    fn test_series(id: u64) -> SeriesSummary {
        SeriesSummary {
            id,
            name: format!("Series {id}"),
            backdrop_path: String::new(),
            genre_ids: vec![18],
            original_language: "en".into(),
            original_name: format!("Series {id}"),
            overview: "Plot.".into(),
            popularity: 1.0,
            poster_path: String::new(),
            first_air_date: "2019-11-12".into(),
            vote_average: 8.1,
            vote_count: 42,
        }
    }

    #[test]
    fn test_save_movie_new_and_duplicate() {
        let store = test_store();
        assert!(store.save_movie(&test_movie(1)).unwrap());
        assert_eq!(store.saved_movies().unwrap().len(), 1);

        // Same id again: silent no-op, list unchanged.
        assert!(!store.save_movie(&test_movie(1)).unwrap());
        assert_eq!(store.saved_movies().unwrap().len(), 1);

        assert!(store.save_movie(&test_movie(2)).unwrap());
        let saved = store.saved_movies().unwrap();
        assert_eq!(saved.len(), 2);
        assert!(saved.iter().any(|m| m.id == 2));
    }

    #[test]
    fn test_remove_movie_idempotent() {
        let store = test_store();
        store.save_movie(&test_movie(1)).unwrap();

        store.remove_movie(99).unwrap();
        assert_eq!(store.saved_movies().unwrap().len(), 1);

        store.remove_movie(1).unwrap();
        assert!(store.saved_movies().unwrap().is_empty());
        // Removing again still succeeds.
        store.remove_movie(1).unwrap();
    }

    #[test]
    fn test_save_remove_round_trip() {
        let store = test_store();
        store.save_movie(&test_movie(1)).unwrap();
        store.save_movie(&test_movie(2)).unwrap();
        let before: Vec<u64> = store.saved_movies().unwrap().iter().map(|m| m.id).collect();

        store.save_movie(&test_movie(3)).unwrap();
        store.remove_movie(3).unwrap();

        let after: Vec<u64> = store.saved_movies().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_saved_series_independent_of_movies() {
        let store = test_store();
        store.save_movie(&test_movie(7)).unwrap();
        store.save_series(&test_series(7)).unwrap();

        store.remove_movie(7).unwrap();
        assert!(store.saved_movies().unwrap().is_empty());
        assert_eq!(store.saved_series().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_list_degrades_to_empty() {
        let store = test_store();
        store.kv.set(keys::SAVED_MOVIES, "not json").unwrap();
        assert!(store.saved_movies().unwrap().is_empty());

        // The store stays usable afterwards.
        assert!(store.save_movie(&test_movie(1)).unwrap());
        assert_eq!(store.saved_movies().unwrap().len(), 1);
    }

    #[test]
    fn test_preferences_default_when_unset() {
        let store = test_store();
        let defaults = UserPreferences {
            enable_notifications: false,
            dark_mode: true,
        };
        assert_eq!(store.preferences(defaults).unwrap(), defaults);
    }

    #[test]
    fn test_preferences_partial_record_merges_defaults() {
        let store = test_store();
        store
            .kv
            .set(keys::USER_PREFERENCES, r#"{"dark_mode":false}"#)
            .unwrap();

        let prefs = store.preferences(UserPreferences::default()).unwrap();
        assert!(!prefs.dark_mode);
        assert!(prefs.enable_notifications); // default filled in
    }

    #[test]
    fn test_preferences_write_then_read() {
        let store = test_store();
        let prefs = UserPreferences {
            enable_notifications: false,
            dark_mode: false,
        };
        store.set_preferences(&prefs).unwrap();
        assert_eq!(store.preferences(UserPreferences::default()).unwrap(), prefs);
    }

    #[test]
    fn test_user_name() {
        let store = test_store();
        assert!(store.user_name().unwrap().is_none());
        store.set_user_name("Movie Enthusiast").unwrap();
        assert_eq!(store.user_name().unwrap().as_deref(), Some("Movie Enthusiast"));
    }

    #[test]
    fn test_sqlite_store_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.db");

        {
            let store = PreferenceStore::new(SqliteStore::open(&path).unwrap());
            store.save_movie(&test_movie(1)).unwrap();
        }
        let store = PreferenceStore::new(SqliteStore::open(&path).unwrap());
        assert_eq!(store.saved_movies().unwrap().len(), 1);
    }
}
