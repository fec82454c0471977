//! Image URL resolution.
//!
//! The metadata API returns bare image paths (`/abc.jpg`); rendering needs
//! absolute CDN URLs with a size token. An empty result means "no image";
//! callers substitute their placeholder.

/// CDN base for all poster/backdrop/profile images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Per-field CDN size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Poster,
    Backdrop,
    Profile,
}

impl ImageSize {
    pub fn token(self) -> &'static str {
        match self {
            Self::Poster => "w500",
            Self::Backdrop => "original",
            Self::Profile => "w185",
        }
    }
}

/// Resolve a possibly-missing image path into an absolute URL.
///
/// Missing or empty paths resolve to `""`. Paths that are already
/// absolute pass through unchanged regardless of the requested size.
pub fn resolve(path: Option<&str>, size: ImageSize) -> String {
    let Some(path) = path else {
        return String::new();
    };
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_string();
    }
    format!("{IMAGE_BASE_URL}{}{path}", size.token())
}
