//! Endpoint path encoding.
//!
//! Every dynamic path segment (ids, routes, external ids) is
//! percent-encoded before it is joined onto a service base URL, so an id
//! containing `/`, `?` or `#` can never change the shape of the path.

use crate::error::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded in a path segment.
const SEGMENT_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

/// Percent-encode a single path segment.
///
/// # Examples
///
/// ```
/// use magistrala_sdk::encoding::encode_segment;
///
/// assert_eq!(encode_segment("c0ffee-01"), "c0ffee-01");
/// assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
/// ```
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ESCAPE).to_string()
}

/// Join encoded segments onto a base URL.
///
/// Trailing slashes of `base` are ignored.
///
/// # Examples
///
/// ```
/// use magistrala_sdk::encoding::endpoint;
///
/// let url = endpoint("http://localhost:9006/", &["d1", "clients", "c 1"]);
/// assert_eq!(url, "http://localhost:9006/d1/clients/c%201");
/// ```
#[must_use]
pub fn endpoint(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&encode_segment(segment));
    }
    url
}

/// Take a required id out of a record.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the id is missing or blank.
pub(crate) fn require_id<'a>(id: Option<&'a str>, what: &str) -> Result<&'a str> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(Error::InvalidArgument(format!("{what} id is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ids_pass_through() {
        let id = "2f4b0c1e-8c0a-4c8e-9d3f-6b1a2e7c9d10";
        assert_eq!(encode_segment(id), id);
    }

    #[test]
    fn structural_chars_are_escaped() {
        let encoded = encode_segment("id/with?query#frag");
        assert!(!encoded.contains('/'), "/ should be encoded");
        assert!(!encoded.contains('?'), "? should be encoded");
        assert!(!encoded.contains('#'), "# should be encoded");
    }

    #[test]
    fn endpoint_joins_segments() {
        assert_eq!(
            endpoint("http://localhost:9002", &["users", "u1", "enable"]),
            "http://localhost:9002/users/u1/enable"
        );
        assert_eq!(endpoint("http://localhost:9002//", &[]), "http://localhost:9002");
        assert_eq!(
            endpoint("http://localhost:9006/", &["d 1", "clients", "a/b"]),
            "http://localhost:9006/d%201/clients/a%2Fb"
        );
    }

    #[test]
    fn missing_ids_are_rejected() {
        assert_eq!(require_id(Some("u1"), "user").unwrap(), "u1");
        assert!(matches!(require_id(None, "user"), Err(Error::InvalidArgument(_))));
        let err = require_id(Some("  "), "client").unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: client id is required");
    }
}
