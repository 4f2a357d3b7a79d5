//! Application settings management
//!
//! User preferences remembered between runs.

use crate::config::gesture::{LONG_PRESS_DEFAULT_MS, LONG_PRESS_MAX_MS, LONG_PRESS_MIN_MS};
use crate::config::storage::{SETTINGS_FILE, SETTINGS_VERSION};
use crate::data::storage;
use crate::data::types::SortKey;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Sort order of the favorites list
    #[serde(default)]
    pub favorites_sort: SortKey,

    /// How long a press must be held to favorite an entry
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    /// Tab shown on startup (0 = classes, 1 = professors, 2 = favorites)
    #[serde(default)]
    pub last_tab: usize,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_long_press_ms() -> u64 {
    LONG_PRESS_DEFAULT_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            favorites_sort: SortKey::default(),
            long_press_ms: LONG_PRESS_DEFAULT_MS,
            last_tab: 0,
        }
    }
}

impl Settings {
    /// Load settings from `dir`, or the default location when `None`
    ///
    /// Missing or empty files yield defaults.
    pub fn load_in(dir: Option<&Path>) -> Result<Self> {
        let path = storage::data_path_in(dir, SETTINGS_FILE)?;
        Self::load_from(&path)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = storage::load_from::<Settings>(path)?.unwrap_or_default();
        settings.set_long_press_ms(settings.long_press_ms);
        Ok(settings)
    }

    /// Save settings to `dir`, or the default location when `None`
    pub fn save_in(&self, dir: Option<&Path>) -> Result<()> {
        let path = storage::data_path_in(dir, SETTINGS_FILE)?;
        self.save_to(&path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Set long-press threshold (clamped to the supported range)
    pub fn set_long_press_ms(&mut self, ms: u64) {
        self.long_press_ms = ms.clamp(LONG_PRESS_MIN_MS, LONG_PRESS_MAX_MS);
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.favorites_sort, SortKey::ClassName);
        assert_eq!(settings.long_press(), Duration::from_secs(2));
        assert_eq!(settings.last_tab, 0);
    }

    #[test]
    fn test_long_press_clamping() {
        let mut settings = Settings::default();

        settings.set_long_press_ms(10);
        assert_eq!(settings.long_press_ms, 1_000);

        settings.set_long_press_ms(60_000);
        assert_eq!(settings.long_press_ms, 3_000);

        settings.set_long_press_ms(1_500);
        assert_eq!(settings.long_press_ms, 1_500);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut settings = Settings::default();
        settings.favorites_sort = SortKey::ProfessorName;
        settings.set_long_press_ms(1_200);
        settings.last_tab = 2;
        settings.save_in(Some(dir.path())).unwrap();

        let loaded = Settings::load_in(Some(dir.path())).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"favorites_sort":"professorName"}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.favorites_sort, SortKey::ProfessorName);
        assert_eq!(settings.long_press_ms, LONG_PRESS_DEFAULT_MS);
        assert_eq!(settings.version, SETTINGS_VERSION);
    }

    #[test]
    fn test_out_of_range_value_clamped_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"long_press_ms":50}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.long_press_ms, LONG_PRESS_MIN_MS);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_in(Some(dir.path())).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
