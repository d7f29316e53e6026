//! The storage handle shared by every data-access component.

use std::path::Path;

use biblio_catalog::{Book, Dvd, Magazine};
use rusqlite::Connection;

use crate::error::StorageResult;
use crate::record::ItemRecord;
use crate::schema::{create_schema, ensure_schema};
use crate::store::ItemStore;

/// An open catalog database.
///
/// Open one at startup, hand out stores that borrow it, and [`close`] it at
/// shutdown.
///
/// [`close`]: Catalog::close
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Open or create a catalog database at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        ensure_schema(&conn)?;
        log::debug!("Opened catalog database {}", path.display());
        Ok(Self { conn })
    }

    /// Open an in-memory database with the full schema. Useful for testing.
    pub fn open_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Data-access component for one item kind.
    pub fn store<R: ItemRecord>(&self) -> ItemStore<'_, R> {
        ItemStore::new(&self.conn)
    }

    pub fn books(&self) -> ItemStore<'_, Book> {
        self.store()
    }

    pub fn magazines(&self) -> ItemStore<'_, Magazine> {
        self.store()
    }

    pub fn dvds(&self) -> ItemStore<'_, Dvd> {
        self.store()
    }

    /// Close the database, reporting any error SQLite raises while doing so.
    pub fn close(self) -> StorageResult<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
