//! Writes against the shared `items` table.
//!
//! These touch only the common fields. The per-kind stores call them inside
//! their own transactions.

use biblio_catalog::{ItemId, ItemInfo, ItemKind};
use rusqlite::{params, Connection};

use crate::error::{StorageError, StorageResult};

/// Insert the base row for a new item. Returns the generated id.
pub fn insert_base(conn: &Connection, kind: ItemKind, info: &ItemInfo) -> StorageResult<ItemId> {
    let changed = conn.execute(
        "INSERT INTO items (title, author, publication_year, kind) VALUES (?1, ?2, ?3, ?4)",
        params![info.title, info.author, info.year, kind.as_str()],
    )?;
    if changed == 0 {
        return Err(StorageError::NoRowsAffected { table: "items" });
    }

    // AUTOINCREMENT ids start at 1; zero means SQLite reported no insert.
    let id = conn.last_insert_rowid();
    if id == 0 {
        return Err(StorageError::NoGeneratedId { table: "items" });
    }
    log::debug!("Inserted {} base row {}", kind, id);
    Ok(id)
}

/// Update the common fields of an existing item.
///
/// The discriminator is never rewritten; the row must already carry `kind`.
pub fn update_base(conn: &Connection, kind: ItemKind, info: &ItemInfo) -> StorageResult<()> {
    let id = info.id.ok_or(StorageError::MissingId { kind })?;
    let changed = conn.execute(
        "UPDATE items SET title = ?1, author = ?2, publication_year = ?3
         WHERE id = ?4 AND kind = ?5",
        params![info.title, info.author, info.year, id, kind.as_str()],
    )?;
    if changed == 0 {
        return Err(StorageError::NotFound { kind, id });
    }
    Ok(())
}

/// Delete an item of any kind by id. Its subtype row cascades.
///
/// Returns `false` if no row had that id.
pub fn delete(conn: &Connection, id: ItemId) -> StorageResult<bool> {
    let changed = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Delete an item by id only if it is of the given kind.
pub fn delete_of_kind(conn: &Connection, kind: ItemKind, id: ItemId) -> StorageResult<bool> {
    let changed = conn.execute(
        "DELETE FROM items WHERE id = ?1 AND kind = ?2",
        params![id, kind.as_str()],
    )?;
    if changed > 0 {
        log::debug!("Deleted {} {}", kind, id);
    }
    Ok(changed > 0)
}
