//! Page metadata via CSS selectors (`scraper`).

use super::PageMetadata;
use scraper::{ElementRef, Html, Selector};

const TITLE_META: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
    r#"meta[property="twitter:title"]"#,
    r#"meta[name="dc.title"]"#,
];

const SITE_NAME_META: &[&str] = &[
    r#"meta[property="og:site_name"]"#,
    r#"meta[name="application-name"]"#,
];

/// Separators commonly placed between an article title and the site name.
const TITLE_SEPARATORS: &[&str] = &[" | ", " - ", " – ", " — ", " · ", " :: "];

/// Read the page title from `html`.
///
/// Title order: title-like meta tags, a lone `<h1>`, the `<title>` element
/// (with a trailing site name cut off), then the first `<h1>`.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let doc = Html::parse_document(html);

    let site_name = first_meta(&doc, SITE_NAME_META);
    let h1s: Vec<String> = select_all(&doc, "h1")
        .into_iter()
        .filter_map(|el| normalize(&el.text().collect::<String>()))
        .collect();

    let title = first_meta(&doc, TITLE_META)
        .or_else(|| match h1s.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        })
        .or_else(|| {
            select_all(&doc, "title")
                .into_iter()
                .find_map(|el| normalize(&el.text().collect::<String>()))
                .map(|t| strip_site_suffix(&t, site_name.as_deref()))
        })
        .or_else(|| h1s.first().cloned());

    PageMetadata { title }
}

fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => doc.select(&selector).collect(),
        Err(e) => {
            tracing::debug!("bad selector {:?}: {:?}", css, e);
            Vec::new()
        }
    }
}

/// `content` of the first matching meta tag that is non-blank.
fn first_meta(doc: &Html, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|css| {
        select_all(doc, css)
            .into_iter()
            .find_map(|el| el.value().attr("content").and_then(normalize))
    })
}

/// Collapse internal whitespace; `None` when nothing is left.
fn normalize(s: &str) -> Option<String> {
    let joined = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Cut `"Article | Site"` down to `"Article"` when the tail is the known site name.
fn strip_site_suffix(title: &str, site_name: Option<&str>) -> String {
    let Some(site) = site_name else {
        return title.to_string();
    };
    for sep in TITLE_SEPARATORS {
        if let Some((head, tail)) = title.rsplit_once(sep) {
            if tail.trim().eq_ignore_ascii_case(site) && !head.trim().is_empty() {
                return head.trim().to_string();
            }
        }
    }
    title.to_string()
}
