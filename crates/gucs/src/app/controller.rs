//! Application controller
//!
//! Owns the catalog, the injected favorites store and the snapshot the
//! front end renders. Every user action arrives as an [`AppCommand`].

use std::borrow::Cow;
use std::time::Instant;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::data::favorites::{favorite, remove_at, FavoritesStore};
use crate::data::settings::Settings;
use crate::data::types::CatalogEntry;

use super::gesture::LongPress;
use super::state::{AppCommand, AppSnapshot, Tab};

pub struct AppController<S: FavoritesStore> {
    catalog: Catalog,
    store: S,
    settings: Settings,
    snapshot: AppSnapshot,
    press: LongPress,
    /// Store revision the favorites listing was built from
    seen_revision: Option<u64>,
}

impl<S: FavoritesStore> AppController<S> {
    pub fn new(catalog: Catalog, store: S, settings: Settings) -> Self {
        let snapshot = AppSnapshot {
            tab: Tab::from_index(settings.last_tab),
            favorites_sort: settings.favorites_sort,
            ..AppSnapshot::default()
        };
        let mut ctrl = Self {
            catalog,
            store,
            press: LongPress::new(settings.long_press()),
            settings,
            snapshot,
            seen_revision: None,
        };
        ctrl.refresh_favorites();
        ctrl
    }

    pub fn snapshot(&self) -> &AppSnapshot {
        &self.snapshot
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Settings updated with the current tab and sort order
    pub fn settings(&self) -> Settings {
        Settings {
            last_tab: self.snapshot.tab.index(),
            favorites_sort: self.snapshot.favorites_sort,
            ..self.settings.clone()
        }
    }

    /// Catalog entries listed on a catalog tab (empty for Favorites)
    pub fn catalog_rows(&self, tab: Tab) -> Vec<&CatalogEntry> {
        match tab {
            Tab::Classes => self.catalog.courses(),
            Tab::Professors => self.catalog.professors(),
            Tab::Favorites => Vec::new(),
        }
    }

    /// Number of rows on `tab`
    pub fn row_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Favorites => self.snapshot.favorites.len(),
            _ => self.catalog_rows(tab).len(),
        }
    }

    /// Entry under the cursor on the active tab
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        let index = self.snapshot.selected();
        match self.snapshot.tab {
            Tab::Favorites => self.snapshot.favorites.get(index).map(|r| &r.entry),
            tab => self.catalog_rows(tab).get(index).copied(),
        }
    }

    pub fn is_favorited(&self, entry: &CatalogEntry) -> bool {
        self.store.is_favorited(entry.kind(), entry.display_name())
    }

    /// Handle a single command. Returns true if the front end should exit.
    pub fn handle_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Quit => {
                self.snapshot.running = false;
            }
            AppCommand::SelectTab(tab) => self.switch_tab(tab),
            AppCommand::NextTab => self.switch_tab(self.snapshot.tab.next()),
            AppCommand::MoveUp => self.move_selection(-1),
            AppCommand::MoveDown => self.move_selection(1),

            AppCommand::Press(now) => {
                if self.press.press(now) {
                    self.favorite_selected();
                }
                self.snapshot.press_progress = self.press.progress(now);
            }
            AppCommand::Release(now) => {
                if self.press.release(now) {
                    self.favorite_selected();
                }
                self.snapshot.press_progress = 0.0;
            }
            AppCommand::Tick(now) => {
                if self.press.tick(now) {
                    self.favorite_selected();
                }
                self.snapshot.press_progress = self.press.progress(now);
            }

            AppCommand::FavoriteSelected => self.favorite_selected(),
            AppCommand::DeleteSelected => self.delete_selected(),
            AppCommand::CycleSort => {
                self.snapshot.favorites_sort = self.snapshot.favorites_sort.next();
                self.seen_revision = None;
                self.set_status(format!(
                    "Favorites sorted by {}",
                    self.snapshot.favorites_sort.label()
                ));
            }
        }

        self.refresh_favorites();
        !self.snapshot.running
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.press.cancel();
        self.snapshot.press_progress = 0.0;
        self.snapshot.tab = tab;
    }

    fn move_selection(&mut self, delta: isize) {
        self.press.cancel();
        self.snapshot.press_progress = 0.0;

        let count = self.row_count(self.snapshot.tab);
        let slot = &mut self.snapshot.selection[self.snapshot.tab.index()];
        if count == 0 {
            *slot = 0;
            return;
        }
        *slot = slot.saturating_add_signed(delta).min(count - 1);
    }

    fn favorite_selected(&mut self) {
        if self.snapshot.tab == Tab::Favorites {
            return;
        }
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };

        match favorite(&mut self.store, &entry) {
            Ok(Some(_)) => {
                self.set_status(format!("Added {} to favorites", entry.display_name()));
            }
            Ok(None) => {
                self.set_status(format!("{} is already a favorite", entry.display_name()));
            }
            Err(e) => {
                warn!(error = %e, "favorite failed");
                self.set_error(format!("Could not save favorite: {e}"));
            }
        }
    }

    fn delete_selected(&mut self) {
        if self.snapshot.tab != Tab::Favorites {
            return;
        }
        let index = self.snapshot.selected();
        let Some(name) = self
            .snapshot
            .favorites
            .get(index)
            .map(|r| r.entry.display_name().to_string())
        else {
            return;
        };

        match remove_at(&mut self.store, self.snapshot.favorites_sort, &[index]) {
            Ok(_) => self.set_status(format!("Removed {name} from favorites")),
            Err(e) => {
                warn!(error = %e, "delete failed");
                self.set_error(format!("Could not remove favorite: {e}"));
            }
        }
    }

    /// Rebuild the favorites listing when the store changed since last time
    fn refresh_favorites(&mut self) {
        let revision = self.store.revision();
        if self.seen_revision == Some(revision) {
            return;
        }

        self.snapshot.favorites = self.store.list_all(self.snapshot.favorites_sort);
        self.seen_revision = Some(revision);
        debug!(revision, count = self.snapshot.favorites.len(), "favorites view refreshed");

        let count = self.snapshot.favorites.len();
        let slot = &mut self.snapshot.selection[Tab::Favorites.index()];
        *slot = (*slot).min(count.saturating_sub(1));
    }

    fn set_status(&mut self, text: String) {
        self.snapshot.status_text = Cow::Owned(text);
        self.snapshot.is_error = false;
    }

    fn set_error(&mut self, text: String) {
        self.snapshot.status_text = Cow::Owned(text);
        self.snapshot.is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::favorites::FavoritesManager;
    use crate::data::types::{EntryKind, SortKey};
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn controller() -> AppController<FavoritesManager> {
        AppController::new(
            Catalog::builtin(),
            FavoritesManager::in_memory(),
            Settings::default(),
        )
    }

    #[test]
    fn test_starts_on_saved_tab() {
        let settings = Settings {
            last_tab: 1,
            favorites_sort: SortKey::ProfessorName,
            ..Settings::default()
        };
        let ctrl = AppController::new(Catalog::builtin(), FavoritesManager::in_memory(), settings);
        assert_eq!(ctrl.snapshot().tab, Tab::Professors);
        assert_eq!(ctrl.snapshot().favorites_sort, SortKey::ProfessorName);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::MoveUp);
        assert_eq!(ctrl.snapshot().selected(), 0);

        for _ in 0..50 {
            ctrl.handle_command(AppCommand::MoveDown);
        }
        assert_eq!(ctrl.snapshot().selected(), 10);
        assert_eq!(
            ctrl.selected_entry().and_then(|e| e.class_name()),
            Some("Deep Learning")
        );
    }

    #[test]
    fn test_favorite_updates_listing() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::FavoriteSelected);

        let snap = ctrl.snapshot();
        assert_eq!(snap.favorites.len(), 1);
        assert_eq!(snap.favorites[0].entry.class_name(), Some("Intro to Comp Science: Python"));
        assert!(!snap.is_error);
    }

    #[test]
    fn test_favorite_twice_is_reported() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::FavoriteSelected);
        ctrl.handle_command(AppCommand::FavoriteSelected);

        assert_eq!(ctrl.snapshot().favorites.len(), 1);
        assert!(ctrl.snapshot().status_text.contains("already a favorite"));
    }

    #[test]
    fn test_long_press_favorites_selected_entry() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::SelectTab(Tab::Professors));

        let t0 = Instant::now();
        ctrl.handle_command(AppCommand::Press(t0));
        assert!(ctrl.snapshot().favorites.is_empty());
        ctrl.handle_command(AppCommand::Release(t0 + Duration::from_millis(2_100)));

        let entry = ctrl.catalog().professors()[0].clone();
        assert!(ctrl.is_favorited(&entry));
        assert_eq!(ctrl.snapshot().press_progress, 0.0);
    }

    #[test]
    fn test_short_press_does_nothing() {
        let mut ctrl = controller();
        let t0 = Instant::now();
        ctrl.handle_command(AppCommand::Press(t0));
        ctrl.handle_command(AppCommand::Release(t0 + Duration::from_millis(200)));
        assert!(ctrl.snapshot().favorites.is_empty());
    }

    #[test]
    fn test_favorite_ignored_on_favorites_tab() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::FavoriteSelected);
        ctrl.handle_command(AppCommand::SelectTab(Tab::Favorites));
        ctrl.handle_command(AppCommand::FavoriteSelected);
        assert_eq!(ctrl.snapshot().favorites.len(), 1);
    }

    #[test]
    fn test_delete_selected_favorite() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::FavoriteSelected);
        ctrl.handle_command(AppCommand::MoveDown);
        ctrl.handle_command(AppCommand::FavoriteSelected);
        ctrl.handle_command(AppCommand::SelectTab(Tab::Favorites));
        ctrl.handle_command(AppCommand::MoveDown);

        // Sorted by class name: "Computer Science I" < "Intro to Comp Science: Python"
        ctrl.handle_command(AppCommand::DeleteSelected);
        let snap = ctrl.snapshot();
        assert_eq!(snap.favorites.len(), 1);
        assert_eq!(snap.favorites[0].entry.class_name(), Some("Computer Science I"));
        // Cursor follows the shrunken list
        assert_eq!(snap.selected(), 0);
        assert!(!ctrl.store().is_favorited(EntryKind::Course, "Intro to Comp Science: Python"));
    }

    #[test]
    fn test_delete_on_empty_favorites_is_noop() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::SelectTab(Tab::Favorites));
        ctrl.handle_command(AppCommand::DeleteSelected);
        assert!(ctrl.snapshot().favorites.is_empty());
        assert!(!ctrl.snapshot().is_error);
    }

    #[test]
    fn test_cycle_sort_reorders_listing() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::SelectTab(Tab::Professors));
        // Mahendran Velauthapillai
        ctrl.handle_command(AppCommand::FavoriteSelected);
        ctrl.handle_command(AppCommand::SelectTab(Tab::Classes));
        // Intro to Comp Science: Python (Jami Montgomery)
        ctrl.handle_command(AppCommand::FavoriteSelected);

        let names = |c: &AppController<FavoritesManager>| -> Vec<String> {
            c.snapshot()
                .favorites
                .iter()
                .map(|r| r.entry.display_name().to_string())
                .collect()
        };
        assert_eq!(names(&ctrl), ["Mahendran Velauthapillai", "Intro to Comp Science: Python"]);

        ctrl.handle_command(AppCommand::CycleSort);
        assert_eq!(ctrl.snapshot().favorites_sort, SortKey::ProfessorName);
        assert_eq!(names(&ctrl), ["Intro to Comp Science: Python", "Mahendran Velauthapillai"]);
        assert_eq!(ctrl.settings().favorites_sort, SortKey::ProfessorName);
    }

    #[test]
    fn test_store_failure_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        let store = FavoritesManager::load_from(&sub.join("favorites.json")).unwrap();
        fs::write(&sub, "").unwrap();

        let mut ctrl = AppController::new(Catalog::builtin(), store, Settings::default());
        let quit = ctrl.handle_command(AppCommand::FavoriteSelected);

        assert!(!quit);
        assert!(ctrl.snapshot().is_error);
        assert!(ctrl.snapshot().favorites.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut ctrl = controller();
        ctrl.handle_command(AppCommand::NextTab);
        assert!(ctrl.handle_command(AppCommand::Quit));
        assert_eq!(ctrl.settings().last_tab, 1);
    }
}
