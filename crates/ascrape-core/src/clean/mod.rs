//! Deterministic cleanup of extracted markdown.
//!
//! Two passes: bracketed runs are stripped, then boilerplate sections
//! (ads, related posts, FAQ, references, ...) are cut out rule by rule,
//! longest rule name first. The result is trimmed. Total over any input.

mod brackets;
mod rules;
mod sections;

pub use brackets::strip_bracketed;
pub use rules::{ordered_rules, BOILERPLATE_SECTIONS};
pub use sections::{remove_section, remove_sections, Heading};

/// Run the full cleaning pass.
pub fn clean_text(text: &str) -> String {
    let stripped = strip_bracketed(text);
    // Leading indentation goes first so the final trim cannot expose a new heading.
    let cleaned = remove_sections(stripped.trim_start(), ordered_rules());
    cleaned.trim().to_string()
}
