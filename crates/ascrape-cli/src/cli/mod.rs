//! CLI for ascrape.

mod report;

use anyhow::Result;
use ascrape_core::config::{self, ConfigFile};
use ascrape_core::{ArticleScraper, ContentExtractor, FetchConfig, HttpClient, OutputFormat};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Scrape and clean article content from a URL.
#[derive(Debug, Parser)]
#[command(name = "ascrape")]
#[command(about = "Scrape and clean article content from a URL", long_about = None)]
pub struct Cli {
    /// The full URL of the article to scrape.
    pub url: String,

    /// Fetch the title of the article instead of its content.
    #[arg(short, long)]
    pub title: bool,

    /// Body format: markdown or text.
    #[arg(long, default_value_t = OutputFormat::Markdown, value_name = "FORMAT")]
    pub format: OutputFormat,

    /// TOML file with user_agent, request_timeout_secs and request_delay_secs.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the User-Agent header.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Minimum delay between consecutive requests, in seconds.
    #[arg(long, value_name = "SECS")]
    pub delay: Option<f64>,

    /// Log debug diagnostics to stderr (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a run ended; maps to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A title block or content block was printed.
    Reported,
    /// Content was requested and none could be produced.
    NoContent,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Reported => 0,
            Outcome::NoContent => 1,
        }
    }
}

impl Cli {
    /// Defaults, then the `--config` file, then command-line overrides.
    pub fn fetch_config(&self) -> Result<FetchConfig> {
        let mut cfg = FetchConfig::default();
        if let Some(path) = &self.config {
            cfg = cfg.with_file(&config::load_from(path)?);
        }
        let overrides = ConfigFile {
            user_agent: self.user_agent.clone(),
            request_timeout_secs: self.timeout,
            request_delay_secs: self.delay,
        };
        Ok(cfg.with_file(&overrides))
    }

    /// Fetch, extract and print to stdout.
    pub fn run(&self) -> Result<Outcome> {
        let cfg = self.fetch_config()?;
        tracing::debug!("fetch config: {:?}", cfg);
        let scraper = ArticleScraper::new(&cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let outcome = self.run_with(&scraper, &mut out)?;
        out.flush()?;
        Ok(outcome)
    }

    /// One fetch: the title when `--title` is set, the cleaned body otherwise.
    pub fn run_with<C, E, W>(&self, scraper: &ArticleScraper<C, E>, out: &mut W) -> Result<Outcome>
    where
        C: HttpClient,
        E: ContentExtractor,
        W: Write,
    {
        report::progress(out, &self.url)?;

        if self.title {
            let title = scraper.get_title(&self.url);
            report::title(out, title.as_deref())?;
            return Ok(Outcome::Reported);
        }

        match scraper.get_body(&self.url, self.format) {
            Some(body) => {
                report::content(out, &body)?;
                Ok(Outcome::Reported)
            }
            None => {
                report::failure(out)?;
                Ok(Outcome::NoContent)
            }
        }
    }
}
