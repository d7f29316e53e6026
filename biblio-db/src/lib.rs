//! SQLite persistence layer for the library catalog.
//!
//! Provides the catalog storage handle, schema creation, the shared
//! base-table routines, and one generic data-access component per item kind,
//! backed by SQLite (via rusqlite with bundled feature).

pub mod base;
pub mod connection;
pub mod error;
pub mod queries;
pub mod record;
pub mod schema;
pub mod seed;
pub mod store;

pub use connection::Catalog;
pub use error::{StorageError, StorageResult};
pub use queries::{catalog_stats, find_orphans, CatalogStats, OrphanRow};
pub use record::ItemRecord;
pub use seed::{export_items, seed_from_path, seed_items, SeedStats};
pub use store::ItemStore;

pub use rusqlite::Connection;
