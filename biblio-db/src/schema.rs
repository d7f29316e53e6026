//! SQLite schema creation and version checks.

use rusqlite::Connection;

use crate::error::{StorageError, StorageResult};

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Bring an opened database up to the current schema.
///
/// A fresh file gets the full schema; a file written by a newer build is
/// rejected rather than silently misread.
pub(crate) fn ensure_schema(conn: &Connection) -> StorageResult<()> {
    let version = schema_version(conn)?;
    if version == 0 {
        log::debug!("Creating catalog schema v{}", CURRENT_VERSION);
        create_schema(conn)?;
    } else if version > CURRENT_VERSION {
        return Err(StorageError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }
    Ok(())
}

/// Get the current schema version, or 0 if no schema exists.
pub fn schema_version(conn: &Connection) -> StorageResult<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

// Each subtype row references its base row by (id, kind), so a row can only
// live in the table its discriminator names, and deleting the base row
// removes it.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Fields common to every item kind
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    publication_year INTEGER NOT NULL,
    kind TEXT NOT NULL CHECK (kind IN ('BOOK', 'MAGAZINE', 'DVD')),
    UNIQUE (id, kind)
);
CREATE INDEX IF NOT EXISTS idx_items_kind ON items(kind);

CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    kind TEXT NOT NULL DEFAULT 'BOOK' CHECK (kind = 'BOOK'),
    isbn TEXT NOT NULL,
    pages INTEGER NOT NULL,
    genre TEXT NOT NULL,
    publisher TEXT NOT NULL,
    FOREIGN KEY (id, kind) REFERENCES items(id, kind) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS magazines (
    id INTEGER PRIMARY KEY,
    kind TEXT NOT NULL DEFAULT 'MAGAZINE' CHECK (kind = 'MAGAZINE'),
    edition INTEGER NOT NULL,
    category TEXT NOT NULL,
    FOREIGN KEY (id, kind) REFERENCES items(id, kind) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS dvds (
    id INTEGER PRIMARY KEY,
    kind TEXT NOT NULL DEFAULT 'DVD' CHECK (kind = 'DVD'),
    duration INTEGER NOT NULL,
    genre TEXT NOT NULL,
    FOREIGN KEY (id, kind) REFERENCES items(id, kind) ON DELETE CASCADE
);
"#;
