//! Stdout framing for results.

use std::io::{self, Write};

pub const FAILURE_LINE: &str = "Failed to fetch or convert the article.";

pub fn progress<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "Fetching and processing: {}", url)
}

/// Title block; an absent title prints as an empty line.
pub fn title<W: Write>(out: &mut W, title: Option<&str>) -> io::Result<()> {
    writeln!(out, "\n--- Title ---")?;
    writeln!(out, "{}", title.unwrap_or_default())?;
    writeln!(out, "\n--- End of Title ---")
}

pub fn content<W: Write>(out: &mut W, body: &str) -> io::Result<()> {
    writeln!(out, "\n--- Cleaned Markdown Content ---")?;
    writeln!(out, "{}", body)?;
    writeln!(out, "\n--- End of Content ---")
}

pub fn failure<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", FAILURE_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn progress_line() {
        assert_eq!(
            render(|o| progress(o, "https://a.example/x")),
            "Fetching and processing: https://a.example/x\n"
        );
    }

    #[test]
    fn title_block() {
        assert_eq!(
            render(|o| title(o, Some("Hello"))),
            "\n--- Title ---\nHello\n\n--- End of Title ---\n"
        );
    }

    #[test]
    fn absent_title_block() {
        assert_eq!(
            render(|o| title(o, None)),
            "\n--- Title ---\n\n\n--- End of Title ---\n"
        );
    }

    #[test]
    fn content_block() {
        assert_eq!(
            render(|o| content(o, "# A\nb")),
            "\n--- Cleaned Markdown Content ---\n# A\nb\n\n--- End of Content ---\n"
        );
    }

    #[test]
    fn failure_line() {
        assert_eq!(render(failure), "Failed to fetch or convert the article.\n");
    }
}
