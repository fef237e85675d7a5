//! Walking a [`Pointer`] through a `serde_json` document.

use serde_json::Value;

use crate::error::{ResolveError, ResolveErrorKind};
use crate::util::{decode_map_key, has_leading_zero, is_integer};
use crate::{JsonPointerError, Pointer};

/// How one token applies to the current value, decided by the value's
/// shape. Object keys are decoded; array tokens are taken literally.
enum Access {
    Key(String),
    Index(usize),
}

impl Access {
    fn for_value(token: &str, current: &Value) -> Result<Self, ResolveErrorKind> {
        match current {
            Value::Object(_) => Ok(Access::Key(decode_map_key(token).into_owned())),
            Value::Array(arr) => array_index(token, arr.len()).map(Access::Index),
            _ => Err(ResolveErrorKind::InvalidAccess),
        }
    }
}

/// Bounds-checked array index for `token`. `-` is the last element.
fn array_index(token: &str, len: usize) -> Result<usize, ResolveErrorKind> {
    let idx = if token == "-" {
        len.checked_sub(1)
    } else if has_leading_zero(token) {
        return Err(ResolveErrorKind::LeadingZero);
    } else if !is_integer(token) {
        return Err(ResolveErrorKind::InvalidIndex);
    } else {
        // All digits, so a parse failure can only be overflow.
        token.parse::<usize>().ok()
    };
    idx.filter(|&i| i < len)
        .ok_or(ResolveErrorKind::IndexOutOfBounds)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Pointer {
    /// Resolve the pointer against an object document.
    ///
    /// # Errors
    ///
    /// - [`JsonPointerError::InvalidRoot`] if `root` is not an object
    /// - [`JsonPointerError::Resolve`] if any token fails to apply
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::{Pointer, ResolveErrorKind};
    /// use serde_json::json;
    ///
    /// let doc = json!({"foo": ["bar", "baz"]});
    /// let p = Pointer::parse("/foo/-").unwrap();
    /// assert_eq!(p.resolve(&doc).unwrap(), &json!("baz"));
    ///
    /// let p = Pointer::parse("/foo/01").unwrap();
    /// assert_eq!(p.resolve(&doc).unwrap_err().kind(), Some(ResolveErrorKind::LeadingZero));
    /// ```
    pub fn resolve<'a>(&self, root: &'a Value) -> Result<&'a Value, JsonPointerError> {
        self.check_root(root)?;
        let mut current = root;
        let mut previous: Option<&str> = None;
        for token in self.tokens() {
            let next = match self.access(token, current, previous)? {
                Access::Key(key) => current.get(key.as_str()),
                Access::Index(idx) => current.get(idx),
            };
            current = next.ok_or_else(|| self.fail(ResolveErrorKind::NoSuchKey, token, previous))?;
            tracing::trace!(token, "resolved json pointer token");
            previous = Some(token);
        }
        Ok(current)
    }

    /// Like [`Pointer::resolve`], but hands back a mutable reference.
    ///
    /// # Errors
    ///
    /// Same as [`Pointer::resolve`].
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Result<&'a mut Value, JsonPointerError> {
        self.check_root(root)?;
        let mut current = root;
        let mut previous: Option<&str> = None;
        for token in self.tokens() {
            let next = match self.access(token, current, previous)? {
                Access::Key(key) => current.get_mut(key.as_str()),
                Access::Index(idx) => current.get_mut(idx),
            };
            current = match next {
                Some(v) => v,
                None => return Err(self.fail(ResolveErrorKind::NoSuchKey, token, previous)),
            };
            tracing::trace!(token, "resolved json pointer token");
            previous = Some(token);
        }
        Ok(current)
    }

    /// Resolve, mapping every failure to `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    /// use serde_json::json;
    ///
    /// let doc = json!({"foo": {"bar": 42}});
    /// assert_eq!(Pointer::parse("/foo/bar").unwrap().get(&doc), Some(&json!(42)));
    /// assert_eq!(Pointer::parse("/missing").unwrap().get(&doc), None);
    /// ```
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.resolve(root).ok()
    }

    fn check_root(&self, root: &Value) -> Result<(), JsonPointerError> {
        if root.is_object() {
            return Ok(());
        }
        let found = kind_name(root);
        tracing::debug!(pointer = %self, found, "json pointer root is not an object");
        Err(JsonPointerError::InvalidRoot { found })
    }

    fn access(
        &self,
        token: &str,
        current: &Value,
        previous: Option<&str>,
    ) -> Result<Access, JsonPointerError> {
        Access::for_value(token, current).map_err(|kind| self.fail(kind, token, previous))
    }

    /// Turns a failed container access into the error reported to callers.
    fn fail(&self, kind: ResolveErrorKind, token: &str, previous: Option<&str>) -> JsonPointerError {
        let err = ResolveError {
            kind,
            token: token.to_string(),
            pointer: self.to_string(),
            array: previous.map(str::to_string),
        };
        tracing::debug!(%err, "json pointer resolution failed");
        err.into()
    }
}
