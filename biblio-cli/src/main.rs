//! biblio CLI
//!
//! Command-line front end for the library catalog. Each item kind gets the
//! same verbs a catalog screen offers: list, show, search, add, edit, delete.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{CatalogAction, Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let db_path = biblio_lib::resolve_db_path(cli.db);

    let result = match cli.command {
        Commands::Books { action } => commands::books::run_books(&db_path, action),
        Commands::Magazines { action } => commands::magazines::run_magazines(&db_path, action),
        Commands::Dvds { action } => commands::dvds::run_dvds(&db_path, action),
        Commands::Catalog { action } => match action {
            CatalogAction::Stats => commands::catalog::run_catalog_stats(&db_path),
            CatalogAction::Check => commands::catalog::run_catalog_check(&db_path),
            CatalogAction::Seed { path } => commands::catalog::run_catalog_seed(&db_path, &path),
            CatalogAction::Export { path } => {
                commands::catalog::run_catalog_export(&db_path, path.as_deref())
            }
            CatalogAction::Reset { confirm } => {
                commands::catalog::run_catalog_reset(&db_path, confirm)
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&db_path),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDb { path } => commands::config::run_config_set_db(&path),
            ConfigAction::ClearDb => commands::config::run_config_clear_db(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
