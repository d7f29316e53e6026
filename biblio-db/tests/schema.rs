use biblio_db::schema::{create_schema, schema_version, CURRENT_VERSION};
use biblio_db::{Catalog, StorageError};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let catalog = Catalog::open_memory().unwrap();
    let version = schema_version(catalog.connection()).unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let catalog = Catalog::open_memory().unwrap();
    // Creating again should not error
    create_schema(catalog.connection()).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let catalog = Catalog::open_memory().unwrap();
    let fk: i32 = catalog
        .connection()
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let catalog = Catalog::open_memory().unwrap();
    let tables = ["schema_version", "items", "books", "magazines", "dvds"];
    for table in tables {
        let exists: bool = catalog
            .connection()
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn file_database_is_created_and_reopened() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.db");

    let catalog = Catalog::open(&path).unwrap();
    catalog.close().unwrap();
    assert!(path.exists());

    let catalog = Catalog::open(&path).unwrap();
    assert_eq!(schema_version(catalog.connection()).unwrap(), CURRENT_VERSION);
    catalog.close().unwrap();
}

#[test]
fn newer_schema_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.db");

    let catalog = Catalog::open(&path).unwrap();
    catalog
        .connection()
        .execute("INSERT INTO schema_version (version) VALUES (99)", [])
        .unwrap();
    catalog.close().unwrap();

    match Catalog::open(&path) {
        Err(StorageError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, 99);
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("newer schema should not open"),
    }
}
