//! Article Identifiers
//!
//! Canonical identifiers carry a URI scheme (`info:doi/10.1371/...`).
//! Request paths use the bare DOI.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear raw in a path. `/` stays because DOIs
/// contain slashes and the service matches the rest of the path.
const PATH_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Strip one leading `scheme` if present
pub fn normalize<'a>(identifier: &'a str, scheme: &str) -> &'a str {
    identifier.strip_prefix(scheme).unwrap_or(identifier)
}

/// Normalized identifier, escaped for use after `<root><listing>/`
pub fn path_segment(identifier: &str, scheme: &str) -> String {
    utf8_percent_encode(normalize(identifier, scheme), PATH_UNSAFE).to_string()
}
