use serde::{Deserialize, Serialize};

/// User preference flags.
///
/// Stored as a whole record under a single key; reads merge the stored
/// record over caller-supplied defaults, writes overwrite the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub enable_notifications: bool,
    pub dark_mode: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            enable_notifications: true,
            dark_mode: true,
        }
    }
}
