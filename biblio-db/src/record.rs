//! Per-kind descriptors: where each item kind lives and how its rows map.
//!
//! The generic [`ItemStore`](crate::store::ItemStore) builds every statement
//! from these constants, so the only per-kind code is the table layout and
//! the row mapping below.

use biblio_catalog::{Book, Dvd, ItemInfo, ItemKind, Magazine};
use rusqlite::types::ToSql;
use rusqlite::Row;

/// Number of base-table columns at the front of every joined row:
/// `e.id, e.title, e.author, e.publication_year`.
pub const BASE_COLUMN_COUNT: usize = 4;

/// An item kind stored as a base row plus one subtype row.
pub trait ItemRecord: Sized {
    const KIND: ItemKind;

    /// Subtype table name.
    const TABLE: &'static str;

    /// Subtype columns, excluding `id` and `kind`, in binding order.
    const COLUMNS: &'static [&'static str];

    /// Column matched by the kind's search, qualified with `e.` for the base
    /// table or `s.` for the subtype table.
    const SEARCH_COLUMN: &'static str;

    fn info(&self) -> &ItemInfo;

    fn info_mut(&mut self) -> &mut ItemInfo;

    /// Values for [`Self::COLUMNS`], same order.
    fn subtype_values(&self) -> Vec<&dyn ToSql>;

    /// Build the record from a joined row whose subtype columns start at
    /// [`BASE_COLUMN_COUNT`].
    fn from_row(info: ItemInfo, row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Map the base-table prefix of a joined row.
pub(crate) fn row_to_info(row: &Row<'_>) -> rusqlite::Result<ItemInfo> {
    Ok(ItemInfo {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
    })
}

impl ItemRecord for Book {
    const KIND: ItemKind = ItemKind::Book;
    const TABLE: &'static str = "books";
    const COLUMNS: &'static [&'static str] = &["isbn", "pages", "genre", "publisher"];
    const SEARCH_COLUMN: &'static str = "e.title";

    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }

    fn subtype_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.isbn, &self.pages, &self.genre, &self.publisher]
    }

    fn from_row(info: ItemInfo, row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Book {
            info,
            isbn: row.get(BASE_COLUMN_COUNT)?,
            pages: row.get(BASE_COLUMN_COUNT + 1)?,
            genre: row.get(BASE_COLUMN_COUNT + 2)?,
            publisher: row.get(BASE_COLUMN_COUNT + 3)?,
        })
    }
}

impl ItemRecord for Magazine {
    const KIND: ItemKind = ItemKind::Magazine;
    const TABLE: &'static str = "magazines";
    const COLUMNS: &'static [&'static str] = &["edition", "category"];
    const SEARCH_COLUMN: &'static str = "s.category";

    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }

    fn subtype_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.edition, &self.category]
    }

    fn from_row(info: ItemInfo, row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Magazine {
            info,
            edition: row.get(BASE_COLUMN_COUNT)?,
            category: row.get(BASE_COLUMN_COUNT + 1)?,
        })
    }
}

impl ItemRecord for Dvd {
    const KIND: ItemKind = ItemKind::Dvd;
    const TABLE: &'static str = "dvds";
    const COLUMNS: &'static [&'static str] = &["duration", "genre"];
    const SEARCH_COLUMN: &'static str = "s.genre";

    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }

    fn subtype_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.duration, &self.genre]
    }

    fn from_row(info: ItemInfo, row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Dvd {
            info,
            duration: row.get(BASE_COLUMN_COUNT)?,
            genre: row.get(BASE_COLUMN_COUNT + 1)?,
        })
    }
}
