use gucs::catalog::Catalog;
use gucs::data::{favorite, EntryKind, FavoritesManager, FavoritesStore, SortKey};
use tempfile::TempDir;

#[test]
fn favorite_then_remove_data_structures() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let entry = catalog.find_course("Data Structures").unwrap();
    assert_eq!(entry.professor_name(), "Bala Kalyanasundaram");

    let mut store = FavoritesManager::open_in(Some(dir.path())).unwrap();
    assert!(!store.is_favorited(EntryKind::Course, "Data Structures"));

    let id = favorite(&mut store, entry).unwrap().expect("new favorite");
    let all = store.list_all(SortKey::ClassName);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].entry.class_name(), Some("Data Structures"));
    assert_eq!(&all[0].entry, entry);

    store.delete(&[id]).unwrap();
    assert!(store.list_all(SortKey::ClassName).is_empty());
}

#[test]
fn favorites_survive_restart() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::builtin();

    {
        let mut store = FavoritesManager::open_in(Some(dir.path())).unwrap();
        for entry in catalog.professors().into_iter().take(3) {
            favorite(&mut store, entry).unwrap();
        }
    }

    let mut store = FavoritesManager::open_in(Some(dir.path())).unwrap();
    assert_eq!(store.list_all(SortKey::ProfessorName).len(), 3);

    // The reopened store still knows what is favorited
    let first = catalog.professors()[0];
    assert!(favorite(&mut store, first).unwrap().is_none());
    assert_eq!(store.list_all(SortKey::ProfessorName).len(), 3);
}

#[test]
fn every_catalog_entry_can_be_favorited_once() {
    let catalog = Catalog::builtin();
    let mut store = FavoritesManager::in_memory();

    for entry in catalog.entries() {
        assert!(favorite(&mut store, entry).unwrap().is_some());
    }
    for entry in catalog.entries() {
        assert!(favorite(&mut store, entry).unwrap().is_none());
    }
    assert_eq!(store.len(), catalog.len());
}
