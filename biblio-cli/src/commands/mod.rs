pub(crate) mod books;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod dvds;
pub(crate) mod magazines;

use std::path::Path;

use biblio_db::Catalog;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Open (creating if needed) the catalog database at `db_path`.
pub(crate) fn open_catalog(db_path: &Path) -> Result<Catalog, CliError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Catalog::open(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database {}: {}",
            db_path.display(),
            e
        ))
    })
}

/// Open the catalog, run `f` against it, then close it.
pub(crate) fn with_catalog<F>(db_path: &Path, f: F) -> Result<(), CliError>
where
    F: FnOnce(&Catalog) -> Result<(), CliError>,
{
    let catalog = open_catalog(db_path)?;
    let result = f(&catalog);
    let closed = catalog.close();
    result?;
    closed.map_err(|e| CliError::database(format!("Failed to close catalog database: {}", e)))
}

/// Print rows under a bold header, columns padded to their widest cell.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header_line = pad_cells(headers.iter().map(|h| h.to_string()), &widths);
    log::info!(
        "{}",
        header_line.if_supports_color(Stdout, |t| t.bold())
    );
    for row in rows {
        log::info!("{}", pad_cells(row.iter().cloned(), &widths));
    }
}

fn pad_cells(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Print `label: value` pairs aligned on the colon.
pub(crate) fn print_fields(fields: &[(&str, String)]) {
    let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in fields {
        log::info!(
            "  {:<width$}  {}",
            format!("{}:", key).if_supports_color(Stdout, |t| t.dimmed()),
            value,
            width = width + 1,
        );
    }
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}

/// Longest title shown in list tables.
pub(crate) const TITLE_WIDTH: usize = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_str("Dune", 10), "Dune");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_str("The Left Hand of Darkness", 12), "The Left ...");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_str("Cien años de soledad", 8), "Cien ...");
    }

    #[test]
    fn with_catalog_returns_the_command_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db_path = tmp.path().join("catalog.db");

        let err = with_catalog(&db_path, |_| Err(CliError::not_found("No book with id 7")))
            .unwrap_err();
        assert!(matches!(err, CliError::NotFound(ref msg) if msg == "No book with id 7"));
        assert!(db_path.exists());
    }

    #[test]
    fn with_catalog_runs_against_an_open_catalog() {
        let tmp = tempfile::TempDir::new().unwrap();
        let db_path = tmp.path().join("nested").join("catalog.db");

        with_catalog(&db_path, |catalog| {
            assert!(catalog.books().get_all().unwrap().is_empty());
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn pad_cells_aligns_and_trims() {
        let line = pad_cells(
            vec!["1".to_string(), "Dune".to_string()].into_iter(),
            &[3, 6],
        );
        assert_eq!(line, "1    Dune");
    }
}
