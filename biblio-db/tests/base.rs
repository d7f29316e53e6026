use biblio_catalog::{ItemInfo, ItemKind};
use biblio_db::base::{delete, delete_of_kind, insert_base, update_base};
use biblio_db::{Catalog, StorageError};

fn title_of(catalog: &Catalog, id: i64) -> String {
    catalog
        .connection()
        .query_row("SELECT title FROM items WHERE id = ?1", [id], |row| row.get(0))
        .unwrap()
}

#[test]
fn insert_base_returns_fresh_ids() {
    let catalog = Catalog::open_memory().unwrap();
    let conn = catalog.connection();

    let a = insert_base(conn, ItemKind::Book, &ItemInfo::new("Dune", "Herbert", 1965)).unwrap();
    let b = insert_base(conn, ItemKind::Dvd, &ItemInfo::new("Alien", "Scott", 1979)).unwrap();
    assert!(a > 0);
    assert_ne!(a, b);

    let kind: String = conn
        .query_row("SELECT kind FROM items WHERE id = ?1", [b], |row| row.get(0))
        .unwrap();
    assert_eq!(kind, "DVD");
}

#[test]
fn insert_base_with_no_row_written_is_an_error() {
    let catalog = Catalog::open_memory().unwrap();
    let conn = catalog.connection();
    conn.execute_batch(
        "CREATE TRIGGER skip_items BEFORE INSERT ON items
         BEGIN SELECT RAISE(IGNORE); END;",
    )
    .unwrap();

    let err = insert_base(conn, ItemKind::Book, &ItemInfo::new("Dune", "Herbert", 1965))
        .unwrap_err();
    assert!(matches!(err, StorageError::NoRowsAffected { table: "items" }));
}

#[test]
fn update_base_rewrites_common_fields() {
    let catalog = Catalog::open_memory().unwrap();
    let conn = catalog.connection();
    let id = insert_base(conn, ItemKind::Book, &ItemInfo::new("Dune", "Herbert", 1965)).unwrap();

    let info = ItemInfo {
        id: Some(id),
        title: "Dune Messiah".to_string(),
        author: "Frank Herbert".to_string(),
        year: 1969,
    };
    update_base(conn, ItemKind::Book, &info).unwrap();
    assert_eq!(title_of(&catalog, id), "Dune Messiah");
}

#[test]
fn update_base_unknown_id_is_not_found() {
    let catalog = Catalog::open_memory().unwrap();
    let info = ItemInfo {
        id: Some(42),
        ..ItemInfo::new("Ghost", "Nobody", 2000)
    };
    let err = update_base(catalog.connection(), ItemKind::Book, &info).unwrap_err();
    assert!(matches!(
        err,
        StorageError::NotFound {
            kind: ItemKind::Book,
            id: 42
        }
    ));
}

#[test]
fn update_base_will_not_touch_another_kind() {
    let catalog = Catalog::open_memory().unwrap();
    let conn = catalog.connection();
    let id = insert_base(conn, ItemKind::Dvd, &ItemInfo::new("Alien", "Scott", 1979)).unwrap();

    let info = ItemInfo {
        id: Some(id),
        ..ItemInfo::new("Hijacked", "Someone", 2000)
    };
    assert!(update_base(conn, ItemKind::Book, &info).is_err());
    assert_eq!(title_of(&catalog, id), "Alien");
}

#[test]
fn update_base_requires_an_id() {
    let catalog = Catalog::open_memory().unwrap();
    let err = update_base(
        catalog.connection(),
        ItemKind::Magazine,
        &ItemInfo::new("Byte", "McGraw-Hill", 1981),
    )
    .unwrap_err();
    assert!(matches!(err, StorageError::MissingId { .. }));
}

#[test]
fn delete_reports_whether_a_row_went() {
    let catalog = Catalog::open_memory().unwrap();
    let conn = catalog.connection();
    let id = insert_base(conn, ItemKind::Book, &ItemInfo::new("Dune", "Herbert", 1965)).unwrap();

    assert!(!delete(conn, id + 100).unwrap());
    assert!(delete(conn, id).unwrap());
    assert!(!delete(conn, id).unwrap());
}

#[test]
fn delete_of_kind_ignores_other_kinds() {
    let catalog = Catalog::open_memory().unwrap();
    let conn = catalog.connection();
    let id = insert_base(conn, ItemKind::Magazine, &ItemInfo::new("Byte", "McGraw-Hill", 1981))
        .unwrap();

    assert!(!delete_of_kind(conn, ItemKind::Dvd, id).unwrap());
    assert!(delete_of_kind(conn, ItemKind::Magazine, id).unwrap());
}
