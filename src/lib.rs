/// Available arguments.
mod args;
/// The client for calling the Larder API.
pub mod client;
/// Available commands.
pub mod cmd;
/// The configuration used in larder-backup.
mod config;
/// The remote entities and their CRUD surface.
pub mod entities;
/// The errors raised by this crate.
pub mod errors;
/// Serialization of folders to the Netscape bookmark format.
pub mod html;
/// The lazy folder/bookmark loader and its cache.
mod loader;
/// The logger used in larder-backup.
mod logger;
/// Pagination over the API's page cursor.
pub mod pagination;
/// The backup pipeline.
mod pipeline;
/// The settings used in larder-backup.
mod settings;
/// Utilities to work with files (create, open, read, rename, remove).
pub mod utils;

pub use args::{Args, BackupArgs, ConfigArgs, Subcommands};
pub use client::{ApiConfig, AuthMode, LarderApi, MockRestApi, RestApi};
pub use config::Config;
pub use entities::{Bookmark, EntityService, Folder, Operation, RemoteEntity, Tag};
pub use errors::LarderError;
pub use loader::{FolderCache, FolderLoader};
pub use logger::Logger;
pub use pagination::{fetch_all_pages, Page};
pub use pipeline::BackupPipeline;
pub use settings::Settings;
