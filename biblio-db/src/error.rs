use biblio_catalog::{ItemId, ItemKind, YamlError};
use thiserror::Error;

/// The single failure type of the storage layer.
///
/// Any failed statement, any write that touched no row where one was
/// expected, and any connection fault ends up here.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Write to {table} affected no rows")]
    NoRowsAffected { table: &'static str },

    #[error("Insert into {table} returned no generated id")]
    NoGeneratedId { table: &'static str },

    #[error("{kind} with id {id} not found")]
    NotFound { kind: ItemKind, id: ItemId },

    #[error("{kind} has no id; it must be inserted before it can be updated")]
    MissingId { kind: ItemKind },

    #[error("Schema version mismatch: expected at most {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },

    #[error("Seed error: {0}")]
    Seed(#[from] YamlError),
}

pub type StorageResult<T> = Result<T, StorageError>;
