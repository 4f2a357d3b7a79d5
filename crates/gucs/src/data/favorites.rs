//! Favorites management
//!
//! The [`FavoritesStore`] trait is what the front end talks to;
//! [`FavoritesManager`] implements it on top of a JSON file (or purely in
//! memory when no path is given).

use crate::config::storage::{FAVORITES_FILE, FAVORITES_VERSION};
use crate::data::storage;
use crate::data::types::{CatalogEntry, EntryKind, FavoriteRecord, FavoriteRow, RecordId, SortKey};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Durable set of favorite records
///
/// The store does not deduplicate: callers check [`is_favorited`] first
/// (see [`favorite`]).
///
/// [`is_favorited`]: FavoritesStore::is_favorited
pub trait FavoritesStore {
    /// Copy `entry` into a new record and append it
    fn insert(&mut self, entry: &CatalogEntry) -> Result<RecordId>;

    /// All records ordered ascending by `sort`, ties in insertion order
    fn list_all(&self, sort: SortKey) -> Vec<FavoriteRecord>;

    /// Remove every record whose id is in `ids`
    ///
    /// Unknown ids are ignored. Either the whole batch is removed or, on a
    /// persistence failure, nothing is. Returns the number removed.
    fn delete(&mut self, ids: &[RecordId]) -> Result<usize>;

    /// Counter bumped on every successful mutation
    fn revision(&self) -> u64;

    /// Whether an entry of `kind` named `name` has been favorited
    fn is_favorited(&self, kind: EntryKind, name: &str) -> bool {
        self.list_all(SortKey::default())
            .iter()
            .any(|r| r.entry.matches(kind, name))
    }
}

/// Favorite `entry` unless an entry with the same kind and name already is
///
/// Returns the new record id, or `None` when it was already a favorite.
pub fn favorite<S: FavoritesStore + ?Sized>(
    store: &mut S,
    entry: &CatalogEntry,
) -> Result<Option<RecordId>> {
    if store.is_favorited(entry.kind(), entry.display_name()) {
        debug!(name = entry.display_name(), "already a favorite");
        return Ok(None);
    }
    store.insert(entry).map(Some)
}

/// Delete the records shown at `offsets` of the listing sorted by `sort`
///
/// Offsets past the end are ignored.
pub fn remove_at<S: FavoritesStore + ?Sized>(
    store: &mut S,
    sort: SortKey,
    offsets: &[usize],
) -> Result<usize> {
    let listing = store.list_all(sort);
    let ids: Vec<RecordId> = offsets
        .iter()
        .filter_map(|&i| listing.get(i).map(|r| r.id))
        .collect();
    if ids.is_empty() {
        return Ok(0);
    }
    store.delete(&ids)
}

/// Favorites file structure
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    favorites: Vec<FavoriteRow>,
}

/// Manages favorites in memory, persisting every mutation
///
/// Records are kept in insertion order. Each mutation writes the complete
/// new record set before it is committed in memory.
#[derive(Debug, Default)]
pub struct FavoritesManager {
    records: Vec<FavoriteRecord>,
    /// Backing file; `None` keeps everything in memory
    path: Option<PathBuf>,
    revision: u64,
}

impl FavoritesManager {
    /// Create an empty manager that never touches disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load favorites from default storage location
    pub fn load() -> Result<Self> {
        Self::open_in(None)
    }

    /// Load favorites from `dir`, or the default location when `None`
    pub fn open_in(dir: Option<&Path>) -> Result<Self> {
        let path = storage::data_path_in(dir, FAVORITES_FILE)?;
        Self::load_from(&path)
    }

    /// Load favorites from a specific path
    ///
    /// A missing file yields an empty store bound to `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut records = Vec::new();

        if let Some(file) = storage::load_from::<FavoritesFile>(path)? {
            if file.version > FAVORITES_VERSION {
                return Err(AppError::Storage(format!(
                    "{:?} has format version {}, newest supported is {}",
                    path, file.version, FAVORITES_VERSION
                )));
            }
            records = file
                .favorites
                .into_iter()
                .map(FavoriteRecord::try_from)
                .collect::<Result<Vec<_>>>()?;
        }

        info!(path = %path.display(), count = records.len(), "loaded favorites");
        Ok(Self {
            records,
            path: Some(path.to_path_buf()),
            revision: 0,
        })
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a record by id
    pub fn get(&self, id: &RecordId) -> Option<&FavoriteRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Get number of favorites
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self, records: &[FavoriteRecord]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let file = FavoritesFile {
            version: FAVORITES_VERSION,
            favorites: records.iter().map(FavoriteRow::from).collect(),
        };
        storage::save_to(path, &file)
    }
}

impl FavoritesStore for FavoritesManager {
    fn insert(&mut self, entry: &CatalogEntry) -> Result<RecordId> {
        let record = FavoriteRecord::from_entry(entry);
        let id = record.id;

        self.records.push(record);
        if let Err(e) = self.persist(&self.records) {
            self.records.pop();
            warn!(error = %e, name = entry.display_name(), "failed to save favorite");
            return Err(e);
        }

        self.revision += 1;
        info!(%id, kind = entry.kind().label(), name = entry.display_name(), "added favorite");
        Ok(id)
    }

    fn list_all(&self, sort: SortKey) -> Vec<FavoriteRecord> {
        let mut records = self.records.clone();
        // sort_by is stable, so equal keys keep insertion order
        records.sort_by(|a, b| a.entry.sort_value(sort).cmp(&b.entry.sort_value(sort)));
        debug!(count = records.len(), sort = sort.label(), "listed favorites");
        records
    }

    fn delete(&mut self, ids: &[RecordId]) -> Result<usize> {
        let doomed: HashSet<&RecordId> = ids.iter().collect();
        let kept: Vec<FavoriteRecord> = self
            .records
            .iter()
            .filter(|r| !doomed.contains(&r.id))
            .cloned()
            .collect();

        let removed = self.records.len() - kept.len();
        if removed == 0 {
            debug!(requested = ids.len(), "nothing to delete");
            return Ok(0);
        }

        if let Err(e) = self.persist(&kept) {
            warn!(error = %e, "failed to delete favorites, keeping all");
            return Err(e);
        }

        self.records = kept;
        self.revision += 1;
        info!(removed, "deleted favorites");
        Ok(removed)
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn is_favorited(&self, kind: EntryKind, name: &str) -> bool {
        self.records.iter().any(|r| r.entry.matches(kind, name))
    }
}
