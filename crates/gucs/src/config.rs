//! Configuration constants for gucs

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "gucs";

    /// Title shown above the catalog
    pub const TITLE: &str = "Explore Georgetown University's Computer Science Department";
}

/// Persistence-related configuration
pub mod storage {
    /// Favorites data file name
    pub const FAVORITES_FILE: &str = "favorites.json";

    /// Favorites file format version
    pub const FAVORITES_VERSION: u32 = 1;

    /// Settings data file name
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Settings file format version
    pub const SETTINGS_VERSION: u32 = 1;

    /// Log file written while the full-screen UI owns the terminal
    pub const LOG_FILE: &str = "gucs.log";
}

/// Gesture-related configuration
pub mod gesture {
    /// Default hold duration before a press counts as a long press
    pub const LONG_PRESS_DEFAULT_MS: u64 = 2_000;

    /// Shortest configurable long press
    pub const LONG_PRESS_MIN_MS: u64 = 1_000;

    /// Longest configurable long press
    pub const LONG_PRESS_MAX_MS: u64 = 3_000;

    /// Largest gap between key repeats that still counts as one held press.
    /// Terminals typically wait ~500ms before the first auto-repeat.
    pub const REPEAT_GAP_MS: u64 = 700;
}
