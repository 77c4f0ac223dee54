//! Escaping of raw paper identifiers for the catalog query URL.
//!
//! Identifiers are escaped like a URI component: the unreserved characters
//! `A-Z a-z 0-9 - _ . ~` are kept and every other byte of the UTF-8 encoding becomes `%XX`.
//! A well-formed `%XX` escape that is already present is copied through untouched, so escaping
//! an escaped identifier gives the same token back.
//!
//! ```
//! use arxivist::encode::encode_identifier;
//!
//! assert_eq!(encode_identifier("1706.03762v7"), "1706.03762v7");
//! assert_eq!(encode_identifier("math.GT/0309136"), "math.GT%2F0309136");
//! assert_eq!(encode_identifier("math.GT%2F0309136"), "math.GT%2F0309136");
//! ```

/// Percent-encodes `raw` for concatenation onto the query endpoint.
///
/// Empty input gives an empty token. Rejecting empty identifiers is up to the caller.
pub fn encode_identifier(raw: &str) -> String {
  let mut encoded = String::with_capacity(raw.len());
  let mut rest = raw;

  while let Some(position) = rest.find('%') {
    let (head, tail) = rest.split_at(position);
    encoded.push_str(&urlencoding::encode(head));

    if is_escape(tail) {
      encoded.push_str(&tail[..3]);
      rest = &tail[3..];
    } else {
      encoded.push_str("%25");
      rest = &tail[1..];
    }
  }

  encoded.push_str(&urlencoding::encode(rest));
  encoded
}

/// Whether `s` starts with a `%` followed by two hex digits.
fn is_escape(s: &str) -> bool {
  let bytes = s.as_bytes();
  bytes.len() >= 3
    && bytes[0] == b'%'
    && bytes[1].is_ascii_hexdigit()
    && bytes[2].is_ascii_hexdigit()
}
