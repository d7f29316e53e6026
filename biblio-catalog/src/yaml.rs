//! YAML seed files for bulk-loading and exporting catalog items.
//!
//! A seed file is a YAML sequence of items, each tagged with its `kind`:
//!
//! ```yaml
//! - kind: book
//!   title: Dune
//!   author: Frank Herbert
//!   year: 1965
//!   isbn: "0441013597"
//!   pages: 412
//!   genre: SciFi
//!   publisher: Ace
//! - kind: dvd
//!   title: Alien
//!   author: Ridley Scott
//!   year: 1979
//!   duration: 117
//!   genre: Horror
//! ```
//!
//! Text fields also accept bare numbers (`title: 1984`); they are read as
//! their literal text.

use crate::types::CatalogItem;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("YAML serialize error: {0}")]
    Serialize(#[source] serde_yml::Error),
    #[error("Seed path not found: {0}")]
    NotFound(String),
}

/// Load the items listed in a single seed file.
pub fn load_items(path: &Path) -> Result<Vec<CatalogItem>, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load items from a seed file, or from every `.yaml`/`.yml` file in a
/// directory (sorted by file name).
pub fn load_seed(path: &Path) -> Result<Vec<CatalogItem>, YamlError> {
    if !path.exists() {
        return Err(YamlError::NotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return load_items(path);
    }

    let mut entries: Vec<_> = std::fs::read_dir(path)
        .map_err(|e| YamlError::Io {
            path: path.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut all = Vec::new();
    for entry in entries {
        all.extend(load_items(&entry.path())?);
    }
    Ok(all)
}

/// Render items as a seed document.
pub fn items_to_string(items: &[CatalogItem]) -> Result<String, YamlError> {
    serde_yml::to_string(items).map_err(YamlError::Serialize)
}

/// Write items to a seed file, replacing it if present.
pub fn write_items(path: &Path, items: &[CatalogItem]) -> Result<(), YamlError> {
    let contents = items_to_string(items)?;
    std::fs::write(path, contents).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
