//! Type definitions for JSON Pointer.

use std::borrow::Cow;

use crate::util::encode_map_key;

/// A step appended to a pointer with [`Pointer::descend`](crate::Pointer::descend).
///
/// Can be either a string (object key) or number (array index).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    /// The escaped token this step occupies in a pointer string.
    pub fn to_token(&self) -> Cow<'_, str> {
        match self {
            PathStep::Key(key) => encode_map_key(key),
            PathStep::Index(idx) => Cow::Owned(idx.to_string()),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<&String> for PathStep {
    fn from(key: &String) -> Self {
        PathStep::Key(key.clone())
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}
