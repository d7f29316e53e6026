use std::path::Path;

use biblio_catalog::ItemKind;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::with_catalog;

pub(crate) fn run_catalog_stats(db_path: &Path) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let stats = biblio_db::catalog_stats(catalog.connection())
            .map_err(|e| CliError::database(format!("Failed to query catalog stats: {}", e)))?;

        log::info!(
            "{}",
            "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!("  Database: {}", db_path.display());
        log::info!("");
        for kind in ItemKind::ALL {
            log::info!("  {:<11} {:>8}", format!("{}s:", kind.label()), stats.count(kind));
        }
        log::info!("  Total:      {:>8}", stats.total());
        Ok(())
    })
}

/// Report base rows whose book/magazine/DVD row is missing.
pub(crate) fn run_catalog_check(db_path: &Path) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let orphans = biblio_db::find_orphans(catalog.connection())
            .map_err(|e| CliError::database(format!("Failed to check catalog: {}", e)))?;

        if orphans.is_empty() {
            log::info!(
                "{}",
                "Catalog is consistent.".if_supports_color(Stdout, |t| t.green()),
            );
            return Ok(());
        }

        log::warn!("{} item(s) have no detail row:", orphans.len());
        for orphan in &orphans {
            log::warn!("  {:>6}  {:<9} {}", orphan.id, orphan.kind, orphan.title);
        }
        Err(CliError::database("Catalog has incomplete items"))
    })
}

pub(crate) fn run_catalog_seed(db_path: &Path, seed_path: &Path) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let stats = biblio_db::seed_from_path(catalog, seed_path)
            .map_err(|e| CliError::database(format!("Failed to seed catalog: {}", e)))?;

        log::info!(
            "{}",
            "Seed complete".if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!("  Books:      {:>6}", stats.books);
        log::info!("  Magazines:  {:>6}", stats.magazines);
        log::info!("  DVDs:       {:>6}", stats.dvds);
        if stats.skipped > 0 {
            log::warn!("  Skipped:    {:>6}", stats.skipped);
        }
        Ok(())
    })
}

/// Write every item as a YAML seed document.
pub(crate) fn run_catalog_export(db_path: &Path, out: Option<&Path>) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let items = biblio_db::export_items(catalog)
            .map_err(|e| CliError::database(format!("Failed to read catalog: {}", e)))?;

        match out {
            Some(path) => {
                biblio_catalog::write_items(path, &items)
                    .map_err(|e| CliError::database(e.to_string()))?;
                log::info!("Exported {} items to {}", items.len(), path.display());
            }
            None => {
                let yaml = biblio_catalog::items_to_string(&items)
                    .map_err(|e| CliError::database(e.to_string()))?;
                print!("{}", yaml);
            }
        }
        Ok(())
    })
}

/// Delete the catalog database file.
pub(crate) fn run_catalog_reset(db_path: &Path, confirm: bool) -> Result<(), CliError> {
    if !confirm {
        log::warn!(
            "This will permanently delete the catalog database at:\n  {}",
            db_path.display(),
        );
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  biblio catalog reset --confirm");
        return Ok(());
    }

    if !db_path.exists() {
        log::info!("No catalog database found at {}", db_path.display());
        log::info!("Nothing to reset.");
        return Ok(());
    }

    std::fs::remove_file(db_path)?;
    // WAL side files are left behind when the last connection was not closed cleanly.
    for suffix in ["-wal", "-shm"] {
        let mut side = db_path.as_os_str().to_owned();
        side.push(suffix);
        let side = std::path::PathBuf::from(side);
        if side.exists() {
            std::fs::remove_file(&side)?;
        }
    }

    log::info!(
        "{}",
        "Catalog database deleted.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path: {}", db_path.display());
    Ok(())
}
