//! JSON Pointer (RFC 6901).
//!
//! This crate implements [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901)
//! over [`serde_json::Value`] documents: parsing, resolution, and a movable
//! end for walking a document without rebuilding pointer strings.
//!
//! # Example
//!
//! ```
//! use json_pointer::{evaluate, Pointer};
//! use serde_json::json;
//!
//! let doc = json!({"foo": ["bar", "baz"]});
//! assert_eq!(evaluate("/foo/0", &doc).unwrap(), &json!("bar"));
//! assert_eq!(evaluate("/foo/-", &doc).unwrap(), &json!("baz"));
//!
//! let mut pointer = Pointer::parse("/foo").unwrap();
//! pointer.descend(1usize);
//! assert_eq!(pointer.to_string(), "/foo/1");
//! assert_eq!(pointer.resolve(&doc).unwrap(), &json!("baz"));
//! ```

use serde_json::Value;

mod error;
pub use error::{JsonPointerError, ResolveError, ResolveErrorKind};

mod pointer;
pub use pointer::Pointer;

mod resolve;

pub mod types;
pub use types::PathStep;

mod util;
pub use util::{
    decode_map_key, encode_map_key, escape_component, is_valid_index, unescape_component,
};

pub mod validate;
pub use validate::{validate_json_pointer, validate_pointer_value};

/// Parse `pointer` and resolve it against `root` in one call.
///
/// # Errors
///
/// Any error from [`Pointer::parse`] or [`Pointer::resolve`].
///
/// # Example
///
/// ```
/// use json_pointer::{evaluate, JsonPointerError, ResolveErrorKind};
/// use serde_json::json;
///
/// let doc = json!({"foo": "bar"});
/// assert_eq!(evaluate("/foo", &doc).unwrap(), &json!("bar"));
/// assert_eq!(evaluate("/missing", &doc).unwrap_err().kind(), Some(ResolveErrorKind::NoSuchKey));
/// assert!(matches!(evaluate("foo", &doc), Err(JsonPointerError::MalformedPointer { .. })));
/// ```
pub fn evaluate<'a>(pointer: &str, root: &'a Value) -> Result<&'a Value, JsonPointerError> {
    Pointer::parse(pointer)?.resolve(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_evaluate_object_key() {
        assert_eq!(evaluate("/foo", &json!({"foo": "bar"})).unwrap(), &json!("bar"));
    }

    #[test]
    fn test_evaluate_dash() {
        let doc = json!({"foo": ["bar", "baz"]});
        assert_eq!(evaluate("/foo/-", &doc).unwrap(), &json!("baz"));
    }

    #[test]
    fn test_evaluate_failures() {
        let doc = json!({"foo": ["bar", "baz"]});
        assert_eq!(
            evaluate("/foo/01", &doc).unwrap_err().kind(),
            Some(ResolveErrorKind::LeadingZero)
        );
        assert_eq!(
            evaluate("/foo/5", &doc).unwrap_err().kind(),
            Some(ResolveErrorKind::IndexOutOfBounds)
        );
        assert_eq!(
            evaluate("/missing", &json!({"foo": 1})).unwrap_err().kind(),
            Some(ResolveErrorKind::NoSuchKey)
        );
    }

    #[test]
    fn test_evaluate_malformed_before_root_check() {
        assert!(matches!(
            evaluate("foo", &json!([])),
            Err(JsonPointerError::MalformedPointer { .. })
        ));
    }
}
