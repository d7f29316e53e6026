use std::path::Path;

use biblio_catalog::{ItemId, Magazine};
use biblio_lib::MagazineController;

use crate::cli_types::{DeleteArgs, MagazineAction};
use crate::CliError;

use super::{print_fields, print_table, truncate_str, with_catalog, TITLE_WIDTH};

/// Entry point for `magazines <action>`.
pub(crate) fn run_magazines(db_path: &Path, action: MagazineAction) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let magazines = MagazineController::new(catalog);
        match action {
            MagazineAction::List => {
                print_magazines(&magazines.get_all());
                Ok(())
            }
            MagazineAction::Show { id } => show_magazine(&magazines, id),
            MagazineAction::Search { category } => {
                print_magazines(&magazines.search_by_category(&category));
                Ok(())
            }
            MagazineAction::Add {
                item,
                edition,
                category,
            } => {
                let mut magazine = Magazine {
                    info: item.into_info(),
                    edition,
                    category,
                };
                if !magazines.save(&mut magazine) {
                    return Err(CliError::rejected("The magazine could not be added."));
                }
                log::info!(
                    "Added magazine {} \"{}\"",
                    magazine.info.id.unwrap_or_default(),
                    magazine.info.title
                );
                log::info!("");
                print_magazines(&magazines.get_all());
                Ok(())
            }
            MagazineAction::Edit {
                id,
                item,
                edition,
                category,
            } => {
                let mut magazine = magazines
                    .get_by_id(id)
                    .ok_or_else(|| CliError::not_found(format!("No magazine with id {}", id)))?;
                item.apply(&mut magazine.info);
                if let Some(edition) = edition {
                    magazine.edition = edition;
                }
                if let Some(category) = category {
                    magazine.category = category;
                }
                if !magazines.save(&mut magazine) {
                    return Err(CliError::rejected(format!(
                        "Magazine {} could not be saved.",
                        id
                    )));
                }
                log::info!("Updated magazine {}", id);
                log::info!("");
                print_magazines(&magazines.get_all());
                Ok(())
            }
            MagazineAction::Delete(DeleteArgs { id, confirm }) => {
                let magazine = magazines
                    .get_by_id(id)
                    .ok_or_else(|| CliError::not_found(format!("No magazine with id {}", id)))?;
                if !confirm {
                    log::warn!(
                        "This will permanently delete magazine {} \"{}\".",
                        id,
                        magazine.info.title
                    );
                    log::info!("Re-run with --confirm to proceed:");
                    log::info!("  biblio magazines delete {} --confirm", id);
                    return Ok(());
                }
                if !magazines.delete(id) {
                    return Err(CliError::rejected(format!(
                        "Magazine {} could not be deleted.",
                        id
                    )));
                }
                log::info!("Deleted magazine {} \"{}\"", id, magazine.info.title);
                log::info!("");
                print_magazines(&magazines.get_all());
                Ok(())
            }
        }
    })
}

fn show_magazine(magazines: &MagazineController<'_>, id: ItemId) -> Result<(), CliError> {
    let magazine = magazines
        .get_by_id(id)
        .ok_or_else(|| CliError::not_found(format!("No magazine with id {}", id)))?;
    print_fields(&[
        ("ID", id.to_string()),
        ("Title", magazine.info.title),
        ("Author", magazine.info.author),
        ("Year", magazine.info.year.to_string()),
        ("Edition", magazine.edition.to_string()),
        ("Category", magazine.category),
    ]);
    Ok(())
}

fn print_magazines(magazines: &[Magazine]) {
    if magazines.is_empty() {
        log::info!("No magazines found.");
        return;
    }
    let rows: Vec<Vec<String>> = magazines
        .iter()
        .map(|m| {
            vec![
                m.info.id.map(|id| id.to_string()).unwrap_or_default(),
                truncate_str(&m.info.title, TITLE_WIDTH),
                m.info.author.clone(),
                m.info.year.to_string(),
                m.edition.to_string(),
                m.category.clone(),
            ]
        })
        .collect();
    print_table(
        &["ID", "Title", "Author", "Year", "Edition", "Category"],
        &rows,
    );
}
