use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::PathStep;
use crate::util::decode_map_key;
use crate::validate::{validate_json_pointer, validate_pointer_value};
use crate::JsonPointerError;

/// A parsed JSON Pointer with a movable end.
///
/// Tokens are kept in their raw, escaped form and decoded only when they
/// meet an object during resolution, so array tokens are never unescaped.
/// A raw token never contains an unescaped `/`, which makes token-wise
/// equality the same as equality of the canonical strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// Parse a JSON Pointer string.
    ///
    /// # Errors
    ///
    /// Returns [`JsonPointerError::MalformedPointer`] if `pointer` is
    /// non-empty and does not start with `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// let p = Pointer::parse("/a~1b/0").unwrap();
    /// assert_eq!(p.tokens().collect::<Vec<_>>(), vec!["a~1b", "0"]);
    /// assert!(Pointer::parse("a/b").is_err());
    /// ```
    pub fn parse(pointer: &str) -> Result<Self, JsonPointerError> {
        validate_json_pointer(pointer)?;
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self {
            tokens: pointer[1..].split('/').map(str::to_string).collect(),
        })
    }

    /// The pointer to the whole document.
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Build a pointer from a sequence of unescaped steps.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::{PathStep, Pointer};
    ///
    /// let p = Pointer::from_steps([PathStep::from("a/b"), PathStep::from(3usize)]);
    /// assert_eq!(p.to_string(), "/a~1b/3");
    /// ```
    pub fn from_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathStep>,
    {
        let mut pointer = Self::root();
        for step in steps {
            pointer.descend(step);
        }
        pointer
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of reference tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw (still escaped) reference tokens, root first.
    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// The raw last token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Append a step to the end of the pointer.
    ///
    /// Keys are encoded on the way in (see [`encode_map_key`](crate::encode_map_key)),
    /// so `descend("a/b")` adds the token `a~1b` and resolving the pointer
    /// looks up exactly `"a/b"`. Nothing checks that the step exists in any
    /// document.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// let mut p = Pointer::root();
    /// p.descend("a");
    /// p.descend(0usize);
    /// assert_eq!(p.to_string(), "/a/0");
    /// ```
    pub fn descend(&mut self, step: impl Into<PathStep>) {
        let step = step.into();
        self.tokens.push(step.to_token().into_owned());
    }

    /// Remove the last token and return the key it names, decoded as
    /// [`decode_map_key`] does. This undoes [`Pointer::descend`].
    ///
    /// Returns `None` at the root, however many times it is called.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// let mut p = Pointer::parse("/foo/1").unwrap();
    /// assert_eq!(p.ascend().as_deref(), Some("1"));
    /// assert_eq!(p.ascend().as_deref(), Some("foo"));
    /// assert_eq!(p.ascend(), None);
    /// assert_eq!(p.to_string(), "");
    /// ```
    pub fn ascend(&mut self) -> Option<String> {
        let token = self.tokens.pop()?;
        Some(decode_map_key(&token).into_owned())
    }

    /// The pointer one level up, or `None` for the root.
    pub fn parent(&self) -> Option<Pointer> {
        let (_, head) = self.tokens.split_last()?;
        Some(Self {
            tokens: head.to_vec(),
        })
    }

    /// Whether `self` lies strictly below `ancestor`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_pointer::Pointer;
    ///
    /// let parent = Pointer::parse("/foo").unwrap();
    /// let child = Pointer::parse("/foo/bar").unwrap();
    /// assert!(child.is_child_of(&parent));
    /// assert!(!parent.is_child_of(&child));
    /// assert!(!parent.is_child_of(&parent));
    /// ```
    pub fn is_child_of(&self, ancestor: &Pointer) -> bool {
        self.tokens.len() > ancestor.tokens.len() && self.tokens.starts_with(&ancestor.tokens)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str("/")?;
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = JsonPointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = JsonPointerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pointer {
    type Error = JsonPointerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

/// Only `Value::String` holds a pointer; anything else is malformed.
impl TryFrom<&Value> for Pointer {
    type Error = JsonPointerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::parse(validate_pointer_value(value)?)
    }
}

impl Serialize for Pointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
