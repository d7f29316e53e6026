//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use biblio_catalog::{ItemId, ItemInfo};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "Catalog the books, magazines and DVDs of a small library", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the saved setting, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List, search and edit books
    Books {
        #[command(subcommand)]
        action: BookAction,
    },

    /// List, search and edit magazines
    Magazines {
        #[command(subcommand)]
        action: MagazineAction,
    },

    /// List, search and edit DVDs
    Dvds {
        #[command(subcommand)]
        action: DvdAction,
    },

    /// Catalog database maintenance
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

// ── Common item arguments ───────────────────────────────────────────────────

/// Fields every new item needs.
#[derive(Args, Clone)]
pub(crate) struct NewItemArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    /// Publication year
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,
}

impl NewItemArgs {
    pub fn into_info(self) -> ItemInfo {
        ItemInfo::new(self.title, self.author, self.year)
    }
}

/// Common fields an edit may change; omitted fields keep their value.
#[derive(Args, Clone)]
pub(crate) struct EditItemArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Publication year
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,
}

impl EditItemArgs {
    pub fn apply(self, info: &mut ItemInfo) {
        if let Some(title) = self.title {
            info.title = title;
        }
        if let Some(author) = self.author {
            info.author = author;
        }
        if let Some(year) = self.year {
            info.year = year;
        }
    }
}

/// Arguments for deleting one item.
#[derive(Args, Clone)]
pub(crate) struct DeleteArgs {
    pub id: ItemId,

    /// Actually delete (without this, only show what would be deleted)
    #[arg(long)]
    pub confirm: bool,
}

// ── Per-kind actions ────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum BookAction {
    /// List all books
    List,

    /// Show one book
    Show { id: ItemId },

    /// Find books whose title contains TITLE (case-sensitive)
    Search { title: String },

    /// Add a book
    Add {
        #[command(flatten)]
        item: NewItemArgs,

        #[arg(long)]
        isbn: String,

        /// Page count
        #[arg(long)]
        pages: i32,

        #[arg(long)]
        genre: String,

        #[arg(long)]
        publisher: String,
    },

    /// Change fields of a book
    Edit {
        id: ItemId,

        #[command(flatten)]
        item: EditItemArgs,

        #[arg(long)]
        isbn: Option<String>,

        /// Page count
        #[arg(long)]
        pages: Option<i32>,

        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        publisher: Option<String>,
    },

    /// Delete a book
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub(crate) enum MagazineAction {
    /// List all magazines
    List,

    /// Show one magazine
    Show { id: ItemId },

    /// Find magazines whose category contains CATEGORY (case-sensitive)
    Search { category: String },

    /// Add a magazine
    Add {
        #[command(flatten)]
        item: NewItemArgs,

        /// Edition (issue) number
        #[arg(long)]
        edition: i32,

        #[arg(long)]
        category: String,
    },

    /// Change fields of a magazine
    Edit {
        id: ItemId,

        #[command(flatten)]
        item: EditItemArgs,

        /// Edition (issue) number
        #[arg(long)]
        edition: Option<i32>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a magazine
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub(crate) enum DvdAction {
    /// List all DVDs
    List,

    /// Show one DVD
    Show { id: ItemId },

    /// Find DVDs whose genre contains GENRE (case-sensitive)
    Search { genre: String },

    /// Add a DVD
    Add {
        #[command(flatten)]
        item: NewItemArgs,

        /// Running time in minutes
        #[arg(long)]
        duration: i32,

        #[arg(long)]
        genre: String,
    },

    /// Change fields of a DVD
    Edit {
        id: ItemId,

        #[command(flatten)]
        item: EditItemArgs,

        /// Running time in minutes
        #[arg(long)]
        duration: Option<i32>,

        #[arg(long)]
        genre: Option<String>,
    },

    /// Delete a DVD
    Delete(DeleteArgs),
}

// ── Maintenance ─────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// Show item counts
    Stats,

    /// Report base rows that lost their book/magazine/DVD row
    Check,

    /// Load items from a YAML seed file or directory
    Seed { path: PathBuf },

    /// Write every item as YAML (to stdout unless a file is given)
    Export { path: Option<PathBuf> },

    /// Delete the catalog database file
    Reset {
        /// Confirm deletion (required)
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the database path in use
    Show,

    /// Print the settings file path
    Path,

    /// Save a default catalog database path
    SetDb { path: PathBuf },

    /// Forget the saved database path
    ClearDb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_book_add() {
        let cli = Cli::try_parse_from([
            "biblio", "books", "add", "--title", "Dune", "--author", "Herbert", "--year", "1965",
            "--isbn", "0441013597", "--pages", "412", "--genre", "SciFi", "--publisher", "Ace",
        ])
        .unwrap();
        match cli.command {
            Commands::Books {
                action: BookAction::Add { item, pages, .. },
            } => {
                let info = item.into_info();
                assert_eq!(info.title, "Dune");
                assert_eq!(info.year, 1965);
                assert!(info.is_new());
                assert_eq!(pages, 412);
            }
            _ => panic!("expected books add"),
        }
    }

    #[test]
    fn edit_only_changes_given_fields() {
        let cli = Cli::try_parse_from(["biblio", "dvds", "edit", "3", "--year", "1980"]).unwrap();
        match cli.command {
            Commands::Dvds {
                action:
                    DvdAction::Edit {
                        id,
                        item,
                        duration,
                        genre,
                    },
            } => {
                assert_eq!(id, 3);
                assert_eq!(duration, None);
                assert_eq!(genre, None);

                let mut info = ItemInfo::new("Alien", "Scott", 1979);
                item.apply(&mut info);
                assert_eq!(info.year, 1980);
                assert_eq!(info.title, "Alien");
            }
            _ => panic!("expected dvds edit"),
        }
    }

    #[test]
    fn delete_requires_explicit_confirm() {
        let cli = Cli::try_parse_from(["biblio", "magazines", "delete", "7"]).unwrap();
        match cli.command {
            Commands::Magazines {
                action: MagazineAction::Delete(args),
            } => {
                assert_eq!(args.id, 7);
                assert!(!args.confirm);
            }
            _ => panic!("expected magazines delete"),
        }
    }

    #[test]
    fn global_db_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["biblio", "catalog", "stats", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn add_without_required_fields_is_rejected() {
        assert!(Cli::try_parse_from(["biblio", "dvds", "add", "--title", "Alien"]).is_err());
    }
}
