//! Frontend-agnostic services for the library catalog.
//!
//! The controllers are what a catalog screen talks to; the settings module
//! resolves where the catalog database lives. Both CLI and any future GUI
//! share these.

pub mod controller;
pub mod settings;

pub use controller::{BookController, Controller, DvdController, MagazineController};
pub use settings::{default_db_path, resolve_db_path, save_db_path, settings_path};
