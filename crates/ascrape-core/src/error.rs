//! Errors surfaced by the scraper before they are flattened to `Option`.

use crate::fetch::FetchError;
use thiserror::Error;

/// The extractor ran but produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionMiss {
    #[error("Error extracting title from {url}")]
    Title { url: String },
    #[error("Error extracting text from {url}")]
    Body { url: String },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// Server answered successfully with an empty body.
    #[error("empty response from {url}")]
    EmptyPage { url: String },
    #[error(transparent)]
    Miss(#[from] ExtractionMiss),
}

impl ScrapeError {
    /// True when no page content was obtained at all.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, ScrapeError::Fetch(_) | ScrapeError::EmptyPage { .. })
    }
}
