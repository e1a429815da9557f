//! wegotogether-source: a content source for the "we go together" webcomic
//!
//! This crate scrapes <https://wegotogethercomic.com>'s static archive pages
//! to produce an ordered chapter list and, per chapter, the list of page
//! image URLs. The site hosts a single manga entity; the crawl walks
//! archive page -> comic info page -> chapter-index page -> per-chapter
//! thumbnail page, strictly in sequence.

pub mod catalog;
pub mod crawler;
pub mod model;
pub mod url;

use thiserror::Error;

/// Main error type for source operations
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("operation not supported by this source: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result type alias for source operations
pub type Result<T> = std::result::Result<T, SourceError>;

// Re-export commonly used types
pub use catalog::WeGoTogether;
pub use crawler::ArchiveCrawler;
pub use model::{Chapter, Manga, MangaStatus, Page};
