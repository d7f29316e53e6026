//! Per-kind controllers: the boundary between screens and storage.
//!
//! Screens never see a [`StorageError`]. Every failure is logged here and
//! turned into the empty value for the call: `None`, an empty list, or
//! `false`.

use biblio_catalog::{Book, Dvd, ItemId, ItemKind, Magazine};
use biblio_db::{Catalog, ItemRecord, ItemStore, StorageError};

/// Controller for one item kind.
pub struct Controller<'c, R> {
    store: ItemStore<'c, R>,
}

pub type BookController<'c> = Controller<'c, Book>;
pub type MagazineController<'c> = Controller<'c, Magazine>;
pub type DvdController<'c> = Controller<'c, Dvd>;

impl<'c, R: ItemRecord> Controller<'c, R> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            store: catalog.store(),
        }
    }

    pub fn get_by_id(&self, id: ItemId) -> Option<R> {
        settle("loading", R::KIND, self.store.get_by_id(id))
    }

    pub fn get_all(&self) -> Vec<R> {
        settle("listing", R::KIND, self.store.get_all())
    }

    /// Insert `record` if it has never been stored, otherwise update it.
    ///
    /// After a successful insert `record` carries its new id.
    pub fn save(&self, record: &mut R) -> bool {
        let result = if record.info().is_new() {
            self.store.insert(record)
        } else {
            self.store.update(record)
        };
        settle("saving", R::KIND, result)
    }

    pub fn delete(&self, id: ItemId) -> bool {
        settle("deleting", R::KIND, self.store.delete(id))
    }

    fn search(&self, term: &str) -> Vec<R> {
        settle("searching", R::KIND, self.store.search(term))
    }
}

impl Controller<'_, Book> {
    pub fn search_by_title(&self, title: &str) -> Vec<Book> {
        self.search(title)
    }
}

impl Controller<'_, Magazine> {
    pub fn search_by_category(&self, category: &str) -> Vec<Magazine> {
        self.search(category)
    }
}

impl Controller<'_, Dvd> {
    pub fn search_by_genre(&self, genre: &str) -> Vec<Dvd> {
        self.search(genre)
    }
}

/// Map a storage result onto the value a screen is allowed to see.
fn settle<T: Default>(action: &str, kind: ItemKind, result: Result<T, StorageError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("Error {} {}: {}", action, kind, e);
            T::default()
        }
    }
}
