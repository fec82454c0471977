pub mod images;
pub mod sample;
pub mod tmdb;
pub mod traits;

pub use tmdb::{TmdbClient, TmdbError};
