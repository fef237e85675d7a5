//! Reference token helpers: `~0`/`~1` escaping, map-key decoding and
//! array index checks.

use std::borrow::Cow;

/// Unescapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~1` is replaced with `/` and then `~0` with `~`.
///
/// # Example
///
/// ```
/// use json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('~') {
        return Cow::Borrowed(component);
    }
    // Order matters: ~1 must be replaced before ~0
    Cow::Owned(component.replace("~1", "/").replace("~0", "~"))
}

/// Escapes a JSON Pointer reference token.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` with `~1`.
///
/// # Example
///
/// ```
/// use json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('/') && !component.contains('~') {
        return Cow::Borrowed(component);
    }
    // Order matters: ~ must be escaped before /
    Cow::Owned(component.replace('~', "~0").replace('/', "~1"))
}

/// Decodes a raw token into the key used for an object lookup.
///
/// URI percent-escapes are decoded first (with the `percent-decode`
/// feature), then `~1` and `~0` are reverted. A token whose percent-escapes
/// do not decode to UTF-8 is used as written.
///
/// # Example
///
/// ```
/// use json_pointer::decode_map_key;
///
/// assert_eq!(decode_map_key("a~1b"), "a/b");
/// # #[cfg(feature = "percent-decode")]
/// assert_eq!(decode_map_key("c%25d"), "c%d");
/// ```
pub fn decode_map_key(token: &str) -> Cow<'_, str> {
    match percent_decode(token) {
        Cow::Borrowed(s) => unescape_component(s),
        Cow::Owned(s) => Cow::Owned(unescape_component(&s).into_owned()),
    }
}

/// Encodes an object key into a token that [`decode_map_key`] turns back
/// into the same key.
///
/// `~` and `/` are escaped as usual; with the `percent-decode` feature a
/// literal `%` also becomes `%25`.
///
/// # Example
///
/// ```
/// use json_pointer::{decode_map_key, encode_map_key};
///
/// assert_eq!(encode_map_key("a/b"), "a~1b");
/// assert_eq!(decode_map_key(&encode_map_key("100%41")), "100%41");
/// ```
pub fn encode_map_key(key: &str) -> Cow<'_, str> {
    match escape_component(key) {
        Cow::Borrowed(s) => percent_encode(s),
        Cow::Owned(s) => Cow::Owned(percent_encode(&s).into_owned()),
    }
}

#[cfg(feature = "percent-decode")]
fn percent_encode(token: &str) -> Cow<'_, str> {
    if !token.contains('%') {
        return Cow::Borrowed(token);
    }
    Cow::Owned(token.replace('%', "%25"))
}

#[cfg(not(feature = "percent-decode"))]
fn percent_encode(token: &str) -> Cow<'_, str> {
    Cow::Borrowed(token)
}

#[cfg(feature = "percent-decode")]
fn percent_decode(token: &str) -> Cow<'_, str> {
    if !token.contains('%') {
        return Cow::Borrowed(token);
    }
    urlencoding::decode(token).unwrap_or(Cow::Borrowed(token))
}

#[cfg(not(feature = "percent-decode"))]
fn percent_decode(token: &str) -> Cow<'_, str> {
    Cow::Borrowed(token)
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use json_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    !has_leading_zero(index) && is_integer(index)
}

/// A multi-digit token starting with `0`.
pub(crate) fn has_leading_zero(token: &str) -> bool {
    token.len() > 1 && token.starts_with('0')
}

/// Check if a string consists only of ASCII digits.
pub(crate) fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_component() {
        assert_eq!(unescape_component("foo"), "foo");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");
        assert_eq!(unescape_component("~0~0"), "~~");
        assert_eq!(unescape_component("~1~1"), "//");
        // "~01" is an escaped "~" followed by "1", not a slash
        assert_eq!(unescape_component("~01"), "~1");
    }

    #[test]
    fn test_unescape_borrows_plain_tokens() {
        assert!(matches!(unescape_component("plain"), Cow::Borrowed(_)));
        assert!(matches!(escape_component("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
        assert_eq!(escape_component("~~"), "~0~0");
        assert_eq!(escape_component("//"), "~1~1");
        assert_eq!(escape_component("~1"), "~01");
    }

    #[test]
    fn test_escape_then_unescape() {
        for s in ["", "a", "a/b", "~", "~1", "/~0/", "m~n/o"] {
            assert_eq!(unescape_component(&escape_component(s)), s);
        }
    }

    #[cfg(feature = "percent-decode")]
    #[test]
    fn test_decode_map_key_percent_first() {
        assert_eq!(decode_map_key("c%25d"), "c%d");
        assert_eq!(decode_map_key("caf%C3%A9"), "café");
        // Percent-decoding runs before tilde-unescaping
        assert_eq!(decode_map_key("%7E1"), "/");
        assert_eq!(decode_map_key("a%20b~0"), "a b~");
    }

    #[cfg(feature = "percent-decode")]
    #[test]
    fn test_encode_map_key_percent() {
        assert_eq!(encode_map_key("%41"), "%2541");
        assert_eq!(encode_map_key("100%"), "100%25");
        assert_eq!(encode_map_key("a%/~"), "a%25~1~0");
    }

    #[cfg(not(feature = "percent-decode"))]
    #[test]
    fn test_encode_map_key_strict() {
        assert_eq!(encode_map_key("%41"), "%41");
    }

    #[test]
    fn test_encode_then_decode_map_key() {
        for key in ["", "A", "%41", "100%25", "%", "%FF", "~1", "a/%7E1", "café%"] {
            assert_eq!(decode_map_key(&encode_map_key(key)), key, "key {key:?}");
        }
    }

    #[cfg(feature = "percent-decode")]
    #[test]
    fn test_decode_map_key_invalid_utf8_kept() {
        assert_eq!(decode_map_key("%FF"), "%FF");
    }

    #[cfg(not(feature = "percent-decode"))]
    #[test]
    fn test_decode_map_key_strict() {
        assert_eq!(decode_map_key("c%25d"), "c%25d");
    }

    #[test]
    fn test_decode_map_key_tilde() {
        assert_eq!(decode_map_key("a~1b"), "a/b");
        assert_eq!(decode_map_key("m~0n"), "m~n");
        assert_eq!(decode_map_key(""), "");
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("10"));
        assert!(!is_valid_index("00"));
        assert!(!is_valid_index("-"));
        assert!(!is_valid_index("+1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index(""));
    }

    #[test]
    fn test_has_leading_zero() {
        assert!(has_leading_zero("01"));
        assert!(has_leading_zero("0a"));
        assert!(!has_leading_zero("0"));
        assert!(!has_leading_zero("10"));
    }
}
