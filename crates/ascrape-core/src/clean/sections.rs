//! Line scanner for markdown ATX headings and the sections they open.

/// A line opening with 1-6 `#`.
///
/// Only a heading whose `#` run is followed by whitespace or end of line
/// (`# Title`) closes a section; `#Title` can still open one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Text with surrounding whitespace and any closing `#` run removed.
    pub text: &'a str,
    spaced: bool,
}

impl<'a> Heading<'a> {
    /// Parse one line (line ending optional). Indented lines are not headings.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let level = line.bytes().take_while(|b| *b == b'#').count();
        if level == 0 || level > 6 {
            return None;
        }
        let rest = &line[level..];
        Some(Heading {
            text: strip_closing_sequence(rest.trim()),
            spaced: rest.is_empty() || rest.starts_with(char::is_whitespace),
        })
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.text.eq_ignore_ascii_case(name)
    }

    /// True when this line bounds the section before it.
    pub fn ends_section(&self) -> bool {
        self.spaced
    }
}

fn strip_closing_sequence(text: &str) -> &str {
    let stripped = text.trim_end_matches('#');
    if stripped.is_empty() {
        stripped
    } else if stripped.ends_with(char::is_whitespace) {
        stripped.trim_end()
    } else {
        text
    }
}

/// Drop every section headed `name`: the heading line plus all lines up to
/// the next heading of any level, or the end of the text.
pub fn remove_section(text: &str, name: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut skipping = false;

    for line in text.split_inclusive('\n') {
        if let Some(heading) = Heading::parse(line) {
            if heading.is_named(name) {
                skipping = true;
            } else if heading.ends_section() {
                skipping = false;
            }
        }
        if !skipping {
            out.push_str(line);
        }
    }

    out
}

/// Apply `remove_section` once per name, in the given order, each pass
/// working on the output of the previous one.
pub fn remove_sections<'r, I>(text: &str, names: I) -> String
where
    I: IntoIterator<Item = &'r str>,
{
    names
        .into_iter()
        .fold(text.to_string(), |acc, name| remove_section(&acc, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_one_to_six() {
        for level in 1..=6 {
            let line = format!("{} Title\n", "#".repeat(level));
            let h = Heading::parse(&line).unwrap();
            assert_eq!(h.text, "Title");
            assert!(h.ends_section());
        }
        assert!(Heading::parse("####### Seven").is_none());
    }

    #[test]
    fn unspaced_heading_does_not_end_sections() {
        let h = Heading::parse("#hashtag").unwrap();
        assert_eq!(h.text, "hashtag");
        assert!(!h.ends_section());
        assert!(Heading::parse("  # indented").is_none());
        assert!(Heading::parse("plain").is_none());
        assert_eq!(Heading::parse("##").map(|h| h.text), Some(""));
        assert_eq!(Heading::parse("#\tTabbed").map(|h| h.text), Some("Tabbed"));
    }

    #[test]
    fn strips_closing_hashes_and_crlf() {
        assert_eq!(Heading::parse("## FAQ ##\r\n").unwrap().text, "FAQ");
        assert_eq!(Heading::parse("## C#").unwrap().text, "C#");
        assert_eq!(Heading::parse("# ###").unwrap().text, "");
    }

    #[test]
    fn name_match_is_case_insensitive_and_exact() {
        let h = Heading::parse("###   See ALSO   ").unwrap();
        assert!(h.is_named("see also"));
        assert!(!Heading::parse("## See also these").unwrap().is_named("see also"));
    }

    #[test]
    fn removes_through_next_heading() {
        let doc = "# A\na\n## Disclaimer\nlegal\nmore\n### B\nb\n";
        assert_eq!(remove_section(doc, "disclaimer"), "# A\na\n### B\nb\n");
    }

    #[test]
    fn last_section_runs_to_end() {
        let doc = "# A\na\n# FAQ\nq1\n\nq2";
        assert_eq!(remove_section(doc, "faq"), "# A\na\n");
    }

    #[test]
    fn empty_section_drops_heading_only() {
        let doc = "# A\n# Sponsored\n# B\nb";
        assert_eq!(remove_section(doc, "sponsored"), "# A\n# B\nb");
    }

    #[test]
    fn repeated_sections_all_removed() {
        let doc = "# Source\nx\n# Keep\nk\n# source\ny";
        assert_eq!(remove_section(doc, "source"), "# Keep\nk\n");
    }

    #[test]
    fn text_before_first_heading_kept() {
        let doc = "intro\n# FAQ\nq";
        assert_eq!(remove_section(doc, "faq"), "intro\n");
    }

    #[test]
    fn seven_hashes_do_not_end_a_section() {
        let doc = "# FAQ\n####### not a heading\n# Next";
        assert_eq!(remove_section(doc, "faq"), "# Next");
    }

    #[test]
    fn fold_applies_each_name() {
        let doc = "# FAQ\nq\n# Frequently Asked Questions\nq\n# Body\nb";
        assert_eq!(
            remove_sections(doc, ["frequently asked questions", "faq"]),
            "# Body\nb"
        );
    }

    #[test]
    fn unspaced_rule_heading_opens_a_section() {
        let doc = "# Body\nb\n#FAQ\nq\n# End\ne";
        assert_eq!(remove_section(doc, "faq"), "# Body\nb\n# End\ne");
    }

    #[test]
    fn unspaced_heading_inside_a_section_is_swallowed() {
        let doc = "## See Also\nx\n#tags\ny\n## Next\nn";
        assert_eq!(remove_section(doc, "see also"), "## Next\nn");
    }

    #[test]
    fn empty_input() {
        assert_eq!(remove_section("", "faq"), "");
    }
}
