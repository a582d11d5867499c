//! Response body decoding: bytes to `String` using the declared charset.

use encoding_rs::{Encoding, UTF_8};

/// How far into the document a `<meta charset>` declaration is looked for.
const META_SNIFF_LEN: usize = 1024;

/// Decode `body` to UTF-8.
///
/// Encoding order: a byte-order mark, the `charset` parameter of
/// `content_type`, a `charset=` declaration near the top of the document,
/// then UTF-8. Unknown labels are skipped and malformed sequences become
/// U+FFFD.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(label_after_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!("body is not valid {}; replaced bad sequences", used.name());
    }
    text.into_owned()
}

fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let label = label_after_charset(&head)?;
    Encoding::for_label(label.as_bytes())
}

/// The value following the first `charset=` in `s`, unquoted.
fn label_after_charset(s: &str) -> Option<&str> {
    let start = s.to_ascii_lowercase().find("charset=")? + "charset=".len();
    let rest = s[start..].trim_start().trim_start_matches(['"', '\'']);
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')))
        .unwrap_or(rest.len());
    let label = &rest[..end];
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}
