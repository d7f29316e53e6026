use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Show the settings file and which database the current invocation uses.
pub(crate) fn run_config_show(db_path: &Path) -> Result<(), CliError> {
    let path = biblio_lib::settings_path();

    log::info!(
        "{}",
        "biblio Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!(
        "  Database:      {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Default:       {}",
        biblio_lib::default_db_path().display(),
    );

    if let Some(contents) = biblio_lib::settings::load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", biblio_lib::settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_db(db: &Path) -> Result<(), CliError> {
    let db = if db.is_absolute() {
        db.to_path_buf()
    } else {
        std::env::current_dir()?.join(db)
    };
    biblio_lib::save_db_path(Some(&db))
        .map_err(|e| CliError::config(format!("Failed to write settings: {}", e)))?;
    log::info!("Catalog database set to {}", db.display());
    Ok(())
}

pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    biblio_lib::save_db_path(None)
        .map_err(|e| CliError::config(format!("Failed to write settings: {}", e)))?;
    log::info!(
        "Saved database path cleared; using {}",
        biblio_lib::default_db_path().display()
    );
    Ok(())
}
