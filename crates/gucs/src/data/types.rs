//! Common data types for persistence
//!
//! Shared types used across the data module.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

// =============================================================================
// CatalogEntry - A course or a professor
// =============================================================================

/// Discriminates the two kinds of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Course,
    Professor,
}

impl EntryKind {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Course => "Class",
            EntryKind::Professor => "Professor",
        }
    }
}

/// A single catalog entry
///
/// Courses always name the professor who teaches them; only professors
/// carry an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Course {
        class_name: String,
        professor_name: String,
        about: String,
    },
    Professor {
        name: String,
        about: String,
        image: Option<String>,
    },
}

impl CatalogEntry {
    /// Create a course entry
    pub fn course(
        class_name: impl Into<String>,
        professor_name: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        CatalogEntry::Course {
            class_name: class_name.into(),
            professor_name: professor_name.into(),
            about: about.into(),
        }
    }

    /// Create a professor entry without an image
    pub fn professor(name: impl Into<String>, about: impl Into<String>) -> Self {
        CatalogEntry::Professor {
            name: name.into(),
            about: about.into(),
            image: None,
        }
    }

    /// Set the image reference (no-op for courses)
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        if let CatalogEntry::Professor { ref mut image, .. } = self {
            *image = Some(image_ref.into());
        }
        self
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Course { .. } => EntryKind::Course,
            CatalogEntry::Professor { .. } => EntryKind::Professor,
        }
    }

    pub fn is_class(&self) -> bool {
        self.kind() == EntryKind::Course
    }

    /// Class name, present only for courses
    pub fn class_name(&self) -> Option<&str> {
        match self {
            CatalogEntry::Course { class_name, .. } => Some(class_name),
            CatalogEntry::Professor { .. } => None,
        }
    }

    /// Professor name: who gives a course, or the professor themself
    pub fn professor_name(&self) -> &str {
        match self {
            CatalogEntry::Course { professor_name, .. } => professor_name,
            CatalogEntry::Professor { name, .. } => name,
        }
    }

    pub fn about(&self) -> &str {
        match self {
            CatalogEntry::Course { about, .. } | CatalogEntry::Professor { about, .. } => about,
        }
    }

    /// Image reference, present only for professors that have one
    pub fn image_name(&self) -> Option<&str> {
        match self {
            CatalogEntry::Course { .. } => None,
            CatalogEntry::Professor { image, .. } => image.as_deref(),
        }
    }

    /// Name shown in listings; also the name used by the favorite check
    pub fn display_name(&self) -> &str {
        match self {
            CatalogEntry::Course { class_name, .. } => class_name,
            CatalogEntry::Professor { name, .. } => name,
        }
    }

    /// Value of the given sort key for this entry
    pub fn sort_value(&self, key: SortKey) -> Option<&str> {
        match key {
            SortKey::ClassName => self.class_name(),
            SortKey::ProfessorName => Some(self.professor_name()),
        }
    }

    /// Whether this entry is identified by `(kind, name)`
    pub fn matches(&self, kind: EntryKind, name: &str) -> bool {
        self.kind() == kind && self.display_name() == name
    }
}

// =============================================================================
// RecordId - Generated identity of a favorite record
// =============================================================================

/// Unique identifier of a persisted favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| AppError::InvalidRecord(format!("'{}' is not a record id: {}", s, e)))
    }
}

// =============================================================================
// FavoriteRecord - A persisted copy of a catalog entry
// =============================================================================

/// A favorite, copied by value from the catalog at favorite time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRecord {
    pub id: RecordId,
    pub entry: CatalogEntry,
    /// When the favorite was added (Unix timestamp)
    pub added_at: u64,
}

impl FavoriteRecord {
    /// Create a new record from a catalog entry
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            id: RecordId::new(),
            entry: entry.clone(),
            added_at: now,
        }
    }
}

/// On-disk row shape of a favorite
///
/// Flat, with optional fields per kind. Converted to and from
/// [`FavoriteRecord`] at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRow {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub is_class: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor_name: Option<String>,
    #[serde(default)]
    pub about: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default)]
    pub added_at: u64,
}

impl From<&FavoriteRecord> for FavoriteRow {
    fn from(record: &FavoriteRecord) -> Self {
        let entry = &record.entry;
        Self {
            id: record.id,
            class_name: entry.class_name().map(str::to_string),
            is_class: entry.is_class(),
            professor_name: Some(entry.professor_name().to_string()),
            about: entry.about().to_string(),
            image_name: entry.image_name().map(str::to_string),
            added_at: record.added_at,
        }
    }
}

impl TryFrom<FavoriteRow> for FavoriteRecord {
    type Error = AppError;

    fn try_from(row: FavoriteRow) -> Result<Self> {
        let professor_name = row.professor_name.ok_or_else(|| {
            AppError::InvalidRecord(format!("row {} has no professorName", row.id))
        })?;

        let entry = if row.is_class {
            let class_name = row.class_name.ok_or_else(|| {
                AppError::InvalidRecord(format!("class row {} has no className", row.id))
            })?;
            if row.image_name.is_some() {
                tracing::warn!(id = %row.id, "ignoring imageName on class row");
            }
            CatalogEntry::Course {
                class_name,
                professor_name,
                about: row.about,
            }
        } else {
            CatalogEntry::Professor {
                name: professor_name,
                about: row.about,
                image: row.image_name,
            }
        };

        Ok(Self {
            id: row.id,
            entry,
            added_at: row.added_at,
        })
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sort criteria for favorites
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Alphabetical by class name; professors (no class name) first
    #[default]
    ClassName,
    /// Alphabetical by professor name
    ProfessorName,
}

impl SortKey {
    /// The other sort key
    pub fn next(self) -> Self {
        match self {
            SortKey::ClassName => SortKey::ProfessorName,
            SortKey::ProfessorName => SortKey::ClassName,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::ClassName => "class name",
            SortKey::ProfessorName => "professor name",
        }
    }
}
