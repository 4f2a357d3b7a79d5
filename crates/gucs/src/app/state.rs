//! Shared application state and commands
//!
//! `AppCommand` is what a front end sends in response to user input.
//! `AppSnapshot` is what it reads back to render.

use std::borrow::Cow;
use std::time::Instant;

use crate::data::types::{FavoriteRecord, SortKey};

/// Top-level views
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Classes,
    Professors,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Classes, Tab::Professors, Tab::Favorites];

    pub fn index(self) -> usize {
        match self {
            Tab::Classes => 0,
            Tab::Professors => 1,
            Tab::Favorites => 2,
        }
    }

    /// Tab at `index`, falling back to the first tab
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Classes => "Classes",
            Tab::Professors => "Professors",
            Tab::Favorites => "Favorites",
        }
    }
}

/// Commands sent by the front end
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    SelectTab(Tab),
    NextTab,
    MoveUp,
    MoveDown,

    // Long-press gesture on the selected catalog entry
    Press(Instant),
    Release(Instant),
    Tick(Instant),

    // Favorites
    FavoriteSelected,
    DeleteSelected,
    CycleSort,

    Quit,
}

/// Snapshot of what the front end should show
#[derive(Clone, Debug)]
pub struct AppSnapshot {
    pub tab: Tab,
    /// Selected row per tab, indexed by `Tab::index`
    pub selection: [usize; 3],
    pub status_text: Cow<'static, str>,
    /// True when status_text describes a failure
    pub is_error: bool,
    /// Current favorites listing, already sorted
    pub favorites: Vec<FavoriteRecord>,
    pub favorites_sort: SortKey,
    /// Long-press progress on the selected row (0.0 - 1.0)
    pub press_progress: f64,
    pub running: bool,
}

impl AppSnapshot {
    pub fn selected(&self) -> usize {
        self.selection[self.tab.index()]
    }
}

impl Default for AppSnapshot {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            selection: [0; 3],
            status_text: Cow::Borrowed("Ready"),
            is_error: false,
            favorites: Vec::new(),
            favorites_sort: SortKey::default(),
            press_progress: 0.0,
            running: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Classes.next(), Tab::Professors);
        assert_eq!(Tab::Professors.next(), Tab::Favorites);
        assert_eq!(Tab::Favorites.next(), Tab::Classes);
    }

    #[test]
    fn test_tab_from_index_out_of_range() {
        assert_eq!(Tab::from_index(2), Tab::Favorites);
        assert_eq!(Tab::from_index(9), Tab::Classes);
    }
}
