//! Removal of bracketed runs such as leftover link labels and `[1]` citations.

/// Remove every `[...]` run holding at least one character.
///
/// A run ends at the first `]` after its `[` (no nesting, may span lines).
/// An empty `[]` and a `[` with no closing bracket are kept as-is.
pub fn strip_bracketed(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(']') {
            Some(0) => {
                out.push('[');
                rest = after;
            }
            Some(close) => rest = &after[close + 1..],
            None => {
                // No `]` anywhere ahead, so no later `[` can close either.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}
