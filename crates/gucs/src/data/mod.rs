//! Data persistence
//!
//! Handles favorites, settings, and the JSON files behind them.

pub mod favorites;
pub mod settings;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::{favorite, remove_at, FavoritesManager, FavoritesStore};
pub use settings::Settings;
pub use storage::config_dir;
pub use types::{CatalogEntry, EntryKind, FavoriteRecord, FavoriteRow, RecordId, SortKey};
