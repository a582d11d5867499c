//! Boilerplate section names.

/// Headings whose whole section is dropped from extracted articles.
pub const BOILERPLATE_SECTIONS: &[&str] = &[
    // Advertising
    "advertisement",
    "sponsored",
    // Related content
    "related articles",
    "related posts",
    "you may also like",
    "popular posts",
    "latest posts",
    "see also",
    // FAQ
    "frequently asked questions",
    "faq",
    // Legal
    "disclaimer",
    // References and outbound links
    "references",
    "source",
    "external links",
    "additional resources",
];

/// Rules in application order: longest first, ties alphabetical.
pub fn ordered_rules() -> Vec<&'static str> {
    let mut rules = BOILERPLATE_SECTIONS.to_vec();
    rules.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    rules.dedup();
    rules
}
