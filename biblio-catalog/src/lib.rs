//! Library catalog data model types and YAML seed files.
//!
//! This crate defines the item records (books, magazines, DVDs) without any
//! database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `biblio-db` for persistence.

pub mod types;
pub mod yaml;

pub use types::*;
pub use yaml::{items_to_string, load_items, load_seed, write_items, YamlError};
