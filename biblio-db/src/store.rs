//! Generic data-access component, one instance per item kind.
//!
//! Reads join `items` with the kind's subtype table. Writes touch both
//! tables inside one transaction so a base row never exists without its
//! subtype row, or the other way round.

use std::marker::PhantomData;

use biblio_catalog::ItemId;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, Row};

use crate::base::{delete_of_kind, insert_base, update_base};
use crate::error::{StorageError, StorageResult};
use crate::record::{row_to_info, ItemRecord};

/// Reads and writes items of kind `R` through a borrowed connection.
pub struct ItemStore<'c, R> {
    conn: &'c Connection,
    _record: PhantomData<fn() -> R>,
}

impl<'c, R: ItemRecord> ItemStore<'c, R> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    /// Find one item of this kind by id.
    pub fn get_by_id(&self, id: ItemId) -> StorageResult<Option<R>> {
        let mut stmt = self.conn.prepare(&select_sql::<R>("AND e.id = ?2"))?;
        let result = stmt.query_row(params![R::KIND.as_str(), id], row_to_record::<R>);
        match result {
            Ok(r) => Ok(Some(r)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List every item of this kind, ordered by id.
    pub fn get_all(&self) -> StorageResult<Vec<R>> {
        let mut stmt = self.conn.prepare(&select_sql::<R>(""))?;
        let rows = stmt.query_map(params![R::KIND.as_str()], row_to_record::<R>)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Items whose search column contains `term` (case-sensitive).
    ///
    /// An empty term matches nothing.
    pub fn search(&self, term: &str) -> StorageResult<Vec<R>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let filter = format!("AND instr({}, ?2) > 0", R::SEARCH_COLUMN);
        let mut stmt = self.conn.prepare(&select_sql::<R>(&filter))?;
        let rows = stmt.query_map(params![R::KIND.as_str(), term], row_to_record::<R>)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Store a new item: base row, then subtype row under the generated id.
    ///
    /// Returns `false` (nothing stored) if the subtype insert touched no
    /// row. On success the generated id is written back onto `record`; on
    /// failure `record` is left unchanged.
    pub fn insert(&self, record: &mut R) -> StorageResult<bool> {
        let mut new_id = None;
        let stored = self.write_in_transaction("insert", |conn| {
            let id = insert_base(conn, R::KIND, record.info())?;
            new_id = Some(id);

            let mut values: Vec<&dyn ToSql> = vec![&id];
            values.extend(record.subtype_values());
            let changed = conn.execute(&insert_sql::<R>(), values.as_slice())?;
            Ok(changed > 0)
        })?;

        if stored {
            record.info_mut().id = new_id;
        }
        Ok(stored)
    }

    /// Rewrite both rows of an existing item.
    ///
    /// Fails with [`StorageError::NotFound`] if no item of this kind has the
    /// record's id, and returns `false` if the subtype row was missing.
    pub fn update(&self, record: &R) -> StorageResult<bool> {
        let id = record
            .info()
            .id
            .ok_or(StorageError::MissingId { kind: R::KIND })?;

        self.write_in_transaction("update", |conn| {
            update_base(conn, R::KIND, record.info())?;

            let mut values = record.subtype_values();
            values.push(&id);
            let changed = conn.execute(&update_sql::<R>(), values.as_slice())?;
            Ok(changed > 0)
        })
    }

    /// Delete an item of this kind. Returns `false` if there was none.
    pub fn delete(&self, id: ItemId) -> StorageResult<bool> {
        delete_of_kind(self.conn, R::KIND, id)
    }

    /// Run `write` in a transaction, committing only when it returns
    /// `Ok(true)`. Autocommit is back on when this returns, whatever the
    /// outcome.
    fn write_in_transaction<F>(&self, op: &str, write: F) -> StorageResult<bool>
    where
        F: FnOnce(&Connection) -> StorageResult<bool>,
    {
        let tx = self.conn.unchecked_transaction()?;
        match write(&*tx) {
            Ok(true) => {
                tx.commit()?;
                Ok(true)
            }
            Ok(false) => {
                log::debug!("{} {} wrote no subtype row; rolling back", R::KIND, op);
                tx.rollback()?;
                Ok(false)
            }
            Err(e) => {
                log::debug!("{} {} failed, rolling back: {}", R::KIND, op, e);
                if let Err(rollback_err) = tx.rollback() {
                    log::warn!("Rollback after failed {} {} also failed: {}", R::KIND, op, rollback_err);
                }
                Err(e)
            }
        }
    }
}

// ── SQL Builders ────────────────────────────────────────────────────────────

/// Joined select of this kind. `?1` is always the discriminator; `filter`
/// may add conditions starting at `?2`.
fn select_sql<R: ItemRecord>(filter: &str) -> String {
    let subtype_cols = R::COLUMNS
        .iter()
        .map(|c| format!("s.{c}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "SELECT e.id, e.title, e.author, e.publication_year, {subtype_cols}
         FROM items e JOIN {table} s ON s.id = e.id
         WHERE e.kind = ?1 {filter}
         ORDER BY e.id",
        table = R::TABLE,
    )
}

fn insert_sql<R: ItemRecord>() -> String {
    let placeholders = (2..=R::COLUMNS.len() + 1)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} (id, {cols}) VALUES (?1, {placeholders})",
        table = R::TABLE,
        cols = R::COLUMNS.join(", "),
    )
}

fn update_sql<R: ItemRecord>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c} = ?{}", i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {table} SET {assignments} WHERE id = ?{id_param}",
        table = R::TABLE,
        id_param = R::COLUMNS.len() + 1,
    )
}

fn row_to_record<R: ItemRecord>(row: &Row<'_>) -> rusqlite::Result<R> {
    let info = row_to_info(row)?;
    R::from_row(info, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_catalog::{Book, Dvd};

    #[test]
    fn insert_sql_numbers_subtype_params_after_id() {
        assert_eq!(
            insert_sql::<Book>(),
            "INSERT INTO books (id, isbn, pages, genre, publisher) VALUES (?1, ?2, ?3, ?4, ?5)"
        );
    }

    #[test]
    fn update_sql_binds_id_last() {
        assert_eq!(
            update_sql::<Dvd>(),
            "UPDATE dvds SET duration = ?1, genre = ?2 WHERE id = ?3"
        );
    }

    #[test]
    fn select_sql_filters_by_discriminator() {
        let sql = select_sql::<Dvd>("AND e.id = ?2");
        assert!(sql.contains("JOIN dvds s ON s.id = e.id"));
        assert!(sql.contains("WHERE e.kind = ?1 AND e.id = ?2"));
        assert!(sql.contains("s.duration, s.genre"));
    }
}
