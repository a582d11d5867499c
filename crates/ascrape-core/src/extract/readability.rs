//! Main-body extraction with `dom_smoothie` (a Readability port).

use super::OutputFormat;
use dom_smoothie::{Config, Readability, TextMode};

fn readability_config(format: OutputFormat) -> Config {
    let text_mode = match format {
        OutputFormat::Markdown => TextMode::Markdown,
        OutputFormat::Text => TextMode::Formatted,
    };
    Config {
        text_mode,
        ..Default::default()
    }
}

/// Extract the article body of `html` rendered as `format`.
///
/// `source_url` is the document URL used to resolve relative links; if the
/// extractor rejects it the page is parsed without a base URL.
pub fn extract_body(html: &str, source_url: &str, format: OutputFormat) -> Option<String> {
    let mut readability =
        match Readability::new(html, Some(source_url), Some(readability_config(format))) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(
                    "readability rejected base URL {} ({}); parsing without it",
                    source_url,
                    e
                );
                Readability::new(html, None, Some(readability_config(format))).ok()?
            }
        };

    let article = match readability.parse() {
        Ok(article) => article,
        Err(e) => {
            tracing::debug!("readability found no article at {}: {}", source_url, e);
            return None;
        }
    };

    let body = match format {
        OutputFormat::Markdown => unescape_markdown(&article.text_content),
        OutputFormat::Text => article.text_content.to_string(),
    };
    let body = body.trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

/// Undo backslash escapes of ASCII punctuation (`\.` -> `.`, `\[` -> `[`).
///
/// The markdown renderer escapes every punctuation character it emits; the
/// cleaning pass expects the literal text.
pub(crate) fn unescape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_punctuation() {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
