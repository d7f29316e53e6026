//! Data model types for the library catalog.
//!
//! Every item shares the fields in [`ItemInfo`]; each kind adds its own
//! fields on top. The kind of a record is fixed by its Rust type and stored
//! as a discriminator next to the common fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Storage-assigned identity of a catalog item.
pub type ItemId = i64;

// ── Kind ────────────────────────────────────────────────────────────────────

/// The three kinds of item a library holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Book,
    Magazine,
    Dvd,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Book, ItemKind::Magazine, ItemKind::Dvd];

    /// Discriminator string written to the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Book => "BOOK",
            ItemKind::Magazine => "MAGAZINE",
            ItemKind::Dvd => "DVD",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Book => "Book",
            ItemKind::Magazine => "Magazine",
            ItemKind::Dvd => "DVD",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Returned when a string does not name an item kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown item kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ItemKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BOOK" => Ok(ItemKind::Book),
            "MAGAZINE" => Ok(ItemKind::Magazine),
            "DVD" => Ok(ItemKind::Dvd),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

// ── Common fields ───────────────────────────────────────────────────────────

/// Fields shared by every item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    /// `None` until the item has been stored for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(deserialize_with = "text")]
    pub author: String,
    /// Publication year.
    pub year: i32,
}

impl ItemInfo {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// True if the item has never been stored.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// Accept a bare YAML scalar (`title: 1984`) for a text field.
fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(d)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(x) => x.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

// ── Book ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    pub info: ItemInfo,
    #[serde(deserialize_with = "text")]
    pub isbn: String,
    pub pages: i32,
    #[serde(deserialize_with = "text")]
    pub genre: String,
    #[serde(deserialize_with = "text")]
    pub publisher: String,
}

// ── Magazine ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    #[serde(flatten)]
    pub info: ItemInfo,
    /// Edition (issue) number.
    pub edition: i32,
    #[serde(deserialize_with = "text")]
    pub category: String,
}

// ── DVD ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvd {
    #[serde(flatten)]
    pub info: ItemInfo,
    /// Running time in minutes.
    pub duration: i32,
    #[serde(deserialize_with = "text")]
    pub genre: String,
}

// ── Any item ────────────────────────────────────────────────────────────────

/// An item of any kind, tagged by `kind` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem {
    Book(Book),
    Magazine(Magazine),
    Dvd(Dvd),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Book(_) => ItemKind::Book,
            CatalogItem::Magazine(_) => ItemKind::Magazine,
            CatalogItem::Dvd(_) => ItemKind::Dvd,
        }
    }

    pub fn info(&self) -> &ItemInfo {
        match self {
            CatalogItem::Book(b) => &b.info,
            CatalogItem::Magazine(m) => &m.info,
            CatalogItem::Dvd(d) => &d.info,
        }
    }
}

impl From<Book> for CatalogItem {
    fn from(b: Book) -> Self {
        CatalogItem::Book(b)
    }
}

impl From<Magazine> for CatalogItem {
    fn from(m: Magazine) -> Self {
        CatalogItem::Magazine(m)
    }
}

impl From<Dvd> for CatalogItem {
    fn from(d: Dvd) -> Self {
        CatalogItem::Dvd(d)
    }
}
