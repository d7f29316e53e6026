use std::path::Path;

use biblio_catalog::{Dvd, ItemId};
use biblio_lib::DvdController;

use crate::cli_types::{DeleteArgs, DvdAction};
use crate::CliError;

use super::{print_fields, print_table, truncate_str, with_catalog, TITLE_WIDTH};

/// Entry point for `dvds <action>`.
pub(crate) fn run_dvds(db_path: &Path, action: DvdAction) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let dvds = DvdController::new(catalog);
        match action {
            DvdAction::List => {
                print_dvds(&dvds.get_all());
                Ok(())
            }
            DvdAction::Show { id } => show_dvd(&dvds, id),
            DvdAction::Search { genre } => {
                print_dvds(&dvds.search_by_genre(&genre));
                Ok(())
            }
            DvdAction::Add {
                item,
                duration,
                genre,
            } => {
                let mut dvd = Dvd {
                    info: item.into_info(),
                    duration,
                    genre,
                };
                if !dvds.save(&mut dvd) {
                    return Err(CliError::rejected("The DVD could not be added."));
                }
                log::info!(
                    "Added DVD {} \"{}\"",
                    dvd.info.id.unwrap_or_default(),
                    dvd.info.title
                );
                log::info!("");
                print_dvds(&dvds.get_all());
                Ok(())
            }
            DvdAction::Edit {
                id,
                item,
                duration,
                genre,
            } => {
                let mut dvd = dvds
                    .get_by_id(id)
                    .ok_or_else(|| CliError::not_found(format!("No DVD with id {}", id)))?;
                item.apply(&mut dvd.info);
                if let Some(duration) = duration {
                    dvd.duration = duration;
                }
                if let Some(genre) = genre {
                    dvd.genre = genre;
                }
                if !dvds.save(&mut dvd) {
                    return Err(CliError::rejected(format!("DVD {} could not be saved.", id)));
                }
                log::info!("Updated DVD {}", id);
                log::info!("");
                print_dvds(&dvds.get_all());
                Ok(())
            }
            DvdAction::Delete(DeleteArgs { id, confirm }) => {
                let dvd = dvds
                    .get_by_id(id)
                    .ok_or_else(|| CliError::not_found(format!("No DVD with id {}", id)))?;
                if !confirm {
                    log::warn!("This will permanently delete DVD {} \"{}\".", id, dvd.info.title);
                    log::info!("Re-run with --confirm to proceed:");
                    log::info!("  biblio dvds delete {} --confirm", id);
                    return Ok(());
                }
                if !dvds.delete(id) {
                    return Err(CliError::rejected(format!("DVD {} could not be deleted.", id)));
                }
                log::info!("Deleted DVD {} \"{}\"", id, dvd.info.title);
                log::info!("");
                print_dvds(&dvds.get_all());
                Ok(())
            }
        }
    })
}

fn show_dvd(dvds: &DvdController<'_>, id: ItemId) -> Result<(), CliError> {
    let dvd = dvds
        .get_by_id(id)
        .ok_or_else(|| CliError::not_found(format!("No DVD with id {}", id)))?;
    print_fields(&[
        ("ID", id.to_string()),
        ("Title", dvd.info.title),
        ("Director", dvd.info.author),
        ("Year", dvd.info.year.to_string()),
        ("Duration", format!("{} min", dvd.duration)),
        ("Genre", dvd.genre),
    ]);
    Ok(())
}

fn print_dvds(dvds: &[Dvd]) {
    if dvds.is_empty() {
        log::info!("No DVDs found.");
        return;
    }
    let rows: Vec<Vec<String>> = dvds
        .iter()
        .map(|d| {
            vec![
                d.info.id.map(|id| id.to_string()).unwrap_or_default(),
                truncate_str(&d.info.title, TITLE_WIDTH),
                d.info.author.clone(),
                d.info.year.to_string(),
                format!("{} min", d.duration),
                d.genre.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "Title", "Director", "Year", "Duration", "Genre"], &rows);
}
