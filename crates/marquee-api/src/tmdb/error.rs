use thiserror::Error;

/// Errors from the TMDB API client.
///
/// `Http` is a transport failure (the request never completed); `Api`
/// carries the server's status message for non-2xx responses; a 404 on an
/// entity fetch surfaces as `NotFound` so callers can tell "gone" from
/// "broken".
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("parse error: {0}")]
    Parse(String),
}
