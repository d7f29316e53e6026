//! Shared application settings (database path, config file location).
//!
//! The settings file is always `~/.config/biblio/settings.toml`, so every
//! frontend opens the same catalog.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the shared settings file: `~/.config/biblio/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("biblio").join("settings.toml")
}

/// Where the catalog lives when nothing else says otherwise:
/// `<data dir>/biblio/catalog.db`.
pub fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("biblio").join("catalog.db")
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. [`default_db_path`]
pub fn resolve_db_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    load_db_path(&settings_path()).unwrap_or_else(default_db_path)
}

/// Read `database.path` from a settings file, if set.
fn load_db_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_db_path(path: Option<&Path>) -> io::Result<()> {
    write_db_path(&settings_path(), path)
}

/// Surgical update of `database.path`; other keys in the file are kept.
fn write_db_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_override_wins() {
        let p = PathBuf::from("/tmp/override.db");
        assert_eq!(resolve_db_path(Some(p.clone())), p);
    }

    #[test]
    fn missing_settings_file_has_no_path() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_db_path(&tmp.path().join("settings.toml")), None);
    }

    #[test]
    fn saved_path_is_read_back() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("biblio").join("settings.toml");
        write_db_path(&settings, Some(Path::new("/srv/library/catalog.db"))).unwrap();
        assert_eq!(
            load_db_path(&settings),
            Some(PathBuf::from("/srv/library/catalog.db"))
        );
    }

    #[test]
    fn clearing_keeps_other_settings() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(
            &settings,
            "[database]\npath = \"/old.db\"\n\n[display]\ncolor = false\n",
        )
        .unwrap();

        write_db_path(&settings, None).unwrap();
        assert_eq!(load_db_path(&settings), None);

        let doc: toml::Value = std::fs::read_to_string(&settings).unwrap().parse().unwrap();
        assert_eq!(doc["display"]["color"].as_bool(), Some(false));
    }

    #[test]
    fn empty_path_counts_as_unset() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[database]\npath = \"\"\n").unwrap();
        assert_eq!(load_db_path(&settings), None);
    }
}
