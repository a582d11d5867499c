pub mod config;
pub mod logging;

pub mod clean;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod scrape;

pub use config::FetchConfig;
pub use error::{ExtractionMiss, ScrapeError};
pub use extract::{ContentExtractor, OutputFormat, PageMetadata, ReadabilityExtractor};
pub use fetch::{CurlClient, FetchError, Fetcher, HttpClient};
pub use scrape::ArticleScraper;
