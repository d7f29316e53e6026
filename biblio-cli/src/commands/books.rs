use std::path::Path;

use biblio_catalog::{Book, ItemId};
use biblio_lib::BookController;

use crate::cli_types::{BookAction, DeleteArgs};
use crate::CliError;

use super::{print_fields, print_table, truncate_str, with_catalog, TITLE_WIDTH};

/// Entry point for `books <action>`.
pub(crate) fn run_books(db_path: &Path, action: BookAction) -> Result<(), CliError> {
    with_catalog(db_path, |catalog| {
        let books = BookController::new(catalog);
        match action {
            BookAction::List => {
                print_books(&books.get_all());
                Ok(())
            }
            BookAction::Show { id } => show_book(&books, id),
            BookAction::Search { title } => {
                print_books(&books.search_by_title(&title));
                Ok(())
            }
            BookAction::Add {
                item,
                isbn,
                pages,
                genre,
                publisher,
            } => {
                let mut book = Book {
                    info: item.into_info(),
                    isbn,
                    pages,
                    genre,
                    publisher,
                };
                if !books.save(&mut book) {
                    return Err(CliError::rejected("The book could not be added."));
                }
                log::info!(
                    "Added book {} \"{}\"",
                    book.info.id.unwrap_or_default(),
                    book.info.title
                );
                log::info!("");
                print_books(&books.get_all());
                Ok(())
            }
            BookAction::Edit {
                id,
                item,
                isbn,
                pages,
                genre,
                publisher,
            } => {
                let mut book = books
                    .get_by_id(id)
                    .ok_or_else(|| CliError::not_found(format!("No book with id {}", id)))?;
                item.apply(&mut book.info);
                if let Some(isbn) = isbn {
                    book.isbn = isbn;
                }
                if let Some(pages) = pages {
                    book.pages = pages;
                }
                if let Some(genre) = genre {
                    book.genre = genre;
                }
                if let Some(publisher) = publisher {
                    book.publisher = publisher;
                }
                if !books.save(&mut book) {
                    return Err(CliError::rejected(format!("Book {} could not be saved.", id)));
                }
                log::info!("Updated book {}", id);
                log::info!("");
                print_books(&books.get_all());
                Ok(())
            }
            BookAction::Delete(DeleteArgs { id, confirm }) => {
                let book = books
                    .get_by_id(id)
                    .ok_or_else(|| CliError::not_found(format!("No book with id {}", id)))?;
                if !confirm {
                    log::warn!("This will permanently delete book {} \"{}\".", id, book.info.title);
                    log::info!("Re-run with --confirm to proceed:");
                    log::info!("  biblio books delete {} --confirm", id);
                    return Ok(());
                }
                if !books.delete(id) {
                    return Err(CliError::rejected(format!("Book {} could not be deleted.", id)));
                }
                log::info!("Deleted book {} \"{}\"", id, book.info.title);
                log::info!("");
                print_books(&books.get_all());
                Ok(())
            }
        }
    })
}

fn show_book(books: &BookController<'_>, id: ItemId) -> Result<(), CliError> {
    let book = books
        .get_by_id(id)
        .ok_or_else(|| CliError::not_found(format!("No book with id {}", id)))?;
    print_fields(&[
        ("ID", id.to_string()),
        ("Title", book.info.title),
        ("Author", book.info.author),
        ("Year", book.info.year.to_string()),
        ("ISBN", book.isbn),
        ("Pages", book.pages.to_string()),
        ("Genre", book.genre),
        ("Publisher", book.publisher),
    ]);
    Ok(())
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        log::info!("No books found.");
        return;
    }
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| {
            vec![
                b.info.id.map(|id| id.to_string()).unwrap_or_default(),
                truncate_str(&b.info.title, TITLE_WIDTH),
                b.info.author.clone(),
                b.info.year.to_string(),
                b.isbn.clone(),
                b.pages.to_string(),
                b.genre.clone(),
                b.publisher.clone(),
            ]
        })
        .collect();
    print_table(
        &["ID", "Title", "Author", "Year", "ISBN", "Pages", "Genre", "Publisher"],
        &rows,
    );
}
