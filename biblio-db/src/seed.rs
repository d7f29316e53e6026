//! Bulk loading and exporting through the per-kind stores.

use std::path::Path;

use biblio_catalog::{CatalogItem, ItemKind};

use crate::connection::Catalog;
use crate::error::StorageResult;

/// Statistics from seeding the database.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub books: usize,
    pub magazines: usize,
    pub dvds: usize,
    /// Items whose subtype row could not be written.
    pub skipped: usize,
}

impl SeedStats {
    fn record(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::Book => self.books += 1,
            ItemKind::Magazine => self.magazines += 1,
            ItemKind::Dvd => self.dvds += 1,
        }
    }
}

/// Insert every item from a seed file or directory.
///
/// Each item is its own transaction; a storage error stops the load with
/// the items before it already stored. Ids present in the file are ignored
/// and fresh ones assigned.
pub fn seed_from_path(catalog: &Catalog, path: &Path) -> StorageResult<SeedStats> {
    let items = biblio_catalog::load_seed(path)?;
    log::debug!("Seeding {} items from {}", items.len(), path.display());
    seed_items(catalog, items)
}

/// Insert the given items. See [`seed_from_path`].
pub fn seed_items(catalog: &Catalog, items: Vec<CatalogItem>) -> StorageResult<SeedStats> {
    let mut stats = SeedStats::default();
    for item in items {
        let kind = item.kind();
        let stored = match item {
            CatalogItem::Book(mut b) => catalog.books().insert(&mut b)?,
            CatalogItem::Magazine(mut m) => catalog.magazines().insert(&mut m)?,
            CatalogItem::Dvd(mut d) => catalog.dvds().insert(&mut d)?,
        };
        if stored {
            stats.record(kind);
        } else {
            stats.skipped += 1;
        }
    }
    Ok(stats)
}

/// Every stored item, books first, then magazines, then DVDs.
pub fn export_items(catalog: &Catalog) -> StorageResult<Vec<CatalogItem>> {
    let mut items: Vec<CatalogItem> = Vec::new();
    items.extend(catalog.books().get_all()?.into_iter().map(CatalogItem::from));
    items.extend(catalog.magazines().get_all()?.into_iter().map(CatalogItem::from));
    items.extend(catalog.dvds().get_all()?.into_iter().map(CatalogItem::from));
    Ok(items)
}
