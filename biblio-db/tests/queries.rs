use biblio_catalog::{Book, Dvd, ItemInfo, ItemKind, Magazine};
use biblio_db::*;

fn setup_db() -> Catalog {
    let catalog = Catalog::open_memory().unwrap();
    let mut book = Book {
        info: ItemInfo::new("Dune", "Herbert", 1965),
        isbn: "0441013597".to_string(),
        pages: 412,
        genre: "SciFi".to_string(),
        publisher: "Ace".to_string(),
    };
    let mut mag = Magazine {
        info: ItemInfo::new("Byte", "McGraw-Hill", 1981),
        edition: 8,
        category: "Computing".to_string(),
    };
    let mut dvd_a = Dvd {
        info: ItemInfo::new("Alien", "Scott", 1979),
        duration: 117,
        genre: "Horror".to_string(),
    };
    let mut dvd_b = Dvd {
        info: ItemInfo::new("Heat", "Mann", 1995),
        duration: 170,
        genre: "Crime".to_string(),
    };
    catalog.books().insert(&mut book).unwrap();
    catalog.magazines().insert(&mut mag).unwrap();
    catalog.dvds().insert(&mut dvd_a).unwrap();
    catalog.dvds().insert(&mut dvd_b).unwrap();
    catalog
}

#[test]
fn stats_count_each_kind() {
    let catalog = setup_db();
    let stats = catalog_stats(catalog.connection()).unwrap();
    assert_eq!(
        stats,
        CatalogStats {
            books: 1,
            magazines: 1,
            dvds: 2,
        }
    );
    assert_eq!(stats.total(), 4);
    assert_eq!(stats.count(ItemKind::Dvd), 2);
}

#[test]
fn stats_on_empty_catalog_are_zero() {
    let catalog = Catalog::open_memory().unwrap();
    assert_eq!(catalog_stats(catalog.connection()).unwrap(), CatalogStats::default());
}

#[test]
fn healthy_catalog_has_no_orphans() {
    let catalog = setup_db();
    assert!(find_orphans(catalog.connection()).unwrap().is_empty());
}

#[test]
fn base_row_without_subtype_is_an_orphan() {
    let catalog = setup_db();
    catalog
        .connection()
        .execute(
            "INSERT INTO items (title, author, publication_year, kind)
             VALUES ('Stray', 'Nobody', 2000, 'MAGAZINE')",
            [],
        )
        .unwrap();
    let id = catalog.connection().last_insert_rowid();

    let orphans = find_orphans(catalog.connection()).unwrap();
    assert_eq!(
        orphans,
        vec![OrphanRow {
            id,
            kind: "MAGAZINE".to_string(),
            title: "Stray".to_string(),
        }]
    );
}
