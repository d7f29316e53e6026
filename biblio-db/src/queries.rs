//! Read queries that span item kinds: statistics and integrity checks.

use biblio_catalog::{ItemId, ItemKind};
use rusqlite::{params, Connection};

use crate::error::StorageResult;

// ── Statistics ──────────────────────────────────────────────────────────────

/// Item counts per kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub books: i64,
    pub magazines: i64,
    pub dvds: i64,
}

impl CatalogStats {
    pub fn total(&self) -> i64 {
        self.books + self.magazines + self.dvds
    }

    pub fn count(&self, kind: ItemKind) -> i64 {
        match kind {
            ItemKind::Book => self.books,
            ItemKind::Magazine => self.magazines,
            ItemKind::Dvd => self.dvds,
        }
    }
}

/// Count base rows per kind.
pub fn catalog_stats(conn: &Connection) -> StorageResult<CatalogStats> {
    let mut stmt = conn.prepare("SELECT kind, COUNT(*) FROM items GROUP BY kind")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut stats = CatalogStats::default();
    for row in rows {
        let (kind, count) = row?;
        match kind.parse::<ItemKind>() {
            Ok(ItemKind::Book) => stats.books = count,
            Ok(ItemKind::Magazine) => stats.magazines = count,
            Ok(ItemKind::Dvd) => stats.dvds = count,
            Err(e) => log::warn!("Ignoring rows with {}", e),
        }
    }
    Ok(stats)
}

// ── Integrity ───────────────────────────────────────────────────────────────

/// A base row whose subtype row is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanRow {
    pub id: ItemId,
    pub kind: String,
    pub title: String,
}

/// List base rows with no matching row in the subtype table their
/// discriminator names. A healthy catalog returns nothing.
pub fn find_orphans(conn: &Connection) -> StorageResult<Vec<OrphanRow>> {
    let mut stmt = conn.prepare(
        "SELECT e.id, e.kind, e.title FROM items e
         WHERE (e.kind = ?1 AND NOT EXISTS (SELECT 1 FROM books s WHERE s.id = e.id))
            OR (e.kind = ?2 AND NOT EXISTS (SELECT 1 FROM magazines s WHERE s.id = e.id))
            OR (e.kind = ?3 AND NOT EXISTS (SELECT 1 FROM dvds s WHERE s.id = e.id))
         ORDER BY e.id",
    )?;
    let rows = stmt.query_map(
        params![
            ItemKind::Book.as_str(),
            ItemKind::Magazine.as_str(),
            ItemKind::Dvd.as_str(),
        ],
        |row| {
            Ok(OrphanRow {
                id: row.get(0)?,
                kind: row.get(1)?,
                title: row.get(2)?,
            })
        },
    )?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
