//! Fetch, extract, clean: the per-URL pipeline.

use crate::clean::clean_text;
use crate::config::FetchConfig;
use crate::error::{ExtractionMiss, ScrapeError};
use crate::extract::{ContentExtractor, OutputFormat, PageMetadata, ReadabilityExtractor};
use crate::fetch::{CurlClient, Fetcher, HttpClient, RawPage};

/// Couples a fetcher with an extractor.
///
/// `try_*` methods keep the failure reason; `get_*` methods log it and
/// return `None`, so a failed page never aborts the caller.
#[derive(Debug)]
pub struct ArticleScraper<C = CurlClient, E = ReadabilityExtractor> {
    fetcher: Fetcher<C>,
    extractor: E,
}

impl ArticleScraper {
    /// Scraper with the curl transport and the Readability extractor.
    pub fn new(config: &FetchConfig) -> Self {
        Self::with_parts(Fetcher::with_curl(config), ReadabilityExtractor::new())
    }
}

impl<C: HttpClient, E: ContentExtractor> ArticleScraper<C, E> {
    pub fn with_parts(fetcher: Fetcher<C>, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    pub fn fetcher(&self) -> &Fetcher<C> {
        &self.fetcher
    }

    fn fetch_page(&self, url: &str) -> Result<RawPage, ScrapeError> {
        let page = self.fetcher.fetch(url)?;
        if page.html.is_empty() {
            return Err(ScrapeError::EmptyPage {
                url: url.to_string(),
            });
        }
        Ok(page)
    }

    /// Raw HTML of `url`.
    pub fn get_raw_html(&self, url: &str) -> Option<String> {
        report(self.fetch_page(url)).map(|page| page.html)
    }

    /// Full metadata record of `url`.
    pub fn try_metadata(&self, url: &str) -> Result<PageMetadata, ScrapeError> {
        let page = self.fetch_page(url)?;
        Ok(self.extractor.extract_metadata(&page.html))
    }

    pub fn try_title(&self, url: &str) -> Result<String, ScrapeError> {
        self.try_metadata(url)?.title.ok_or_else(|| {
            ExtractionMiss::Title {
                url: url.to_string(),
            }
            .into()
        })
    }

    /// Article title, uncleaned. `None` if the fetch failed or no title was found.
    pub fn get_title(&self, url: &str) -> Option<String> {
        report(self.try_title(url))
    }

    /// Cleaned article body in `format`.
    pub fn try_body(&self, url: &str, format: OutputFormat) -> Result<String, ScrapeError> {
        let page = self.fetch_page(url)?;
        let body = self
            .extractor
            .extract_body(&page.html, url, format)
            .ok_or_else(|| ExtractionMiss::Body {
                url: url.to_string(),
            })?;
        tracing::debug!("extracted {} bytes of {} from {}", body.len(), format, url);
        Ok(clean_text(&body))
    }

    pub fn try_markdown(&self, url: &str) -> Result<String, ScrapeError> {
        self.try_body(url, OutputFormat::Markdown)
    }

    pub fn get_body(&self, url: &str, format: OutputFormat) -> Option<String> {
        report(self.try_body(url, format))
    }

    /// Cleaned markdown body. `None` if the fetch failed or nothing was extracted.
    pub fn get_markdown(&self, url: &str) -> Option<String> {
        self.get_body(url, OutputFormat::Markdown)
    }
}

/// Log what went wrong (fetch errors are already logged by the fetcher) and drop it.
fn report<T>(result: Result<T, ScrapeError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(ScrapeError::Fetch(_)) => None,
        Err(e @ ScrapeError::EmptyPage { .. }) => {
            tracing::warn!("{}", e);
            None
        }
        Err(ScrapeError::Miss(miss)) => {
            tracing::warn!("{}", miss);
            None
        }
    }
}
