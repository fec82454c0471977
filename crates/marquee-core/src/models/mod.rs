mod prefs;
mod title;

pub use prefs::UserPreferences;
pub use title::{MovieSummary, SeriesSummary, TrendingTitle};
