//! gucs — CS department catalog with persistent favorites
//!
//! A static catalog of courses and professors, a favorites store that
//! survives restarts, and a front-end independent controller that turns
//! user gestures into store operations.
//!
//! ## Quick start
//!
//! ```no_run
//! use gucs::catalog::Catalog;
//! use gucs::data::{favorite, FavoritesManager, FavoritesStore, SortKey};
//!
//! let catalog = Catalog::builtin();
//! let mut store = FavoritesManager::load().unwrap();
//! if let Some(entry) = catalog.find_course("Data Structures") {
//!     favorite(&mut store, entry).unwrap();
//! }
//! for record in store.list_all(SortKey::ClassName) {
//!     println!("{}", record.entry.display_name());
//! }
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
