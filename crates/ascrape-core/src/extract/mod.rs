//! Structural content extraction: metadata and main body from raw HTML.
//!
//! The scraper only depends on [`ContentExtractor`]; the default
//! [`ReadabilityExtractor`] reads metadata with CSS selectors and finds the
//! article body with a Readability port.

mod metadata;
mod readability;

pub use metadata::extract_metadata;
pub use readability::extract_body;

use std::fmt;
use std::str::FromStr;

/// Descriptive fields of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
}

/// Shape of the extracted body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    /// Plain text with paragraph breaks kept.
    Text,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format {:?} (expected markdown or text)", other)),
        }
    }
}

/// HTML to structured content.
pub trait ContentExtractor {
    fn extract_metadata(&self, html: &str) -> PageMetadata;

    /// Main body of the page, or `None` if nothing usable was found.
    /// `source_url` lets the extractor resolve relative links.
    fn extract_body(&self, html: &str, source_url: &str, format: OutputFormat) -> Option<String>;
}

impl<T: ContentExtractor + ?Sized> ContentExtractor for &T {
    fn extract_metadata(&self, html: &str) -> PageMetadata {
        (**self).extract_metadata(html)
    }

    fn extract_body(&self, html: &str, source_url: &str, format: OutputFormat) -> Option<String> {
        (**self).extract_body(html, source_url, format)
    }
}

/// Default extractor: `scraper` selectors for metadata, `dom_smoothie` for the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityExtractor;

impl ReadabilityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for ReadabilityExtractor {
    fn extract_metadata(&self, html: &str) -> PageMetadata {
        extract_metadata(html)
    }

    fn extract_body(&self, html: &str, source_url: &str, format: OutputFormat) -> Option<String> {
        extract_body(html, source_url, format)
    }
}
