//! # Chapter Reader - minimal web reader for numbered chapters
//!
//! Serves a directory of `chap<N>.txt` files as a small website.
//!
//! Chapter Reader provides:
//! - Chapter discovery by filename pattern, in numeric order
//! - Chapter loading with byte-order-mark tolerance
//! - Companion image resolution from the static assets directory
//! - An axum router with an index page, chapter pages and static passthrough

pub mod chapter;
pub mod config;
pub mod server;
pub mod ui;

// Re-exports for convenient access
pub use chapter::{Chapter, find_image, list_chapters, load_chapter};
pub use config::ReaderConfig;

/// Result type alias for Chapter Reader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chapter Reader operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} introuvable")]
    ChapterNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] handlebars::TemplateError),
}
