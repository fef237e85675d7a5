use std::fmt;

use thiserror::Error;

/// Why a single reference token could not be applied to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    /// Object lookup miss.
    NoSuchKey,
    /// Array token is neither `-` nor a non-negative integer.
    InvalidIndex,
    /// Array token has a leading zero, e.g. `01`.
    LeadingZero,
    /// Array index, including one computed from `-`, is outside the array.
    IndexOutOfBounds,
    /// Tokens remain but the current value is a scalar.
    InvalidAccess,
}

impl fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolveErrorKind::NoSuchKey => "NO_SUCH_KEY",
            ResolveErrorKind::InvalidIndex => "INVALID_INDEX",
            ResolveErrorKind::LeadingZero => "LEADING_ZERO",
            ResolveErrorKind::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            ResolveErrorKind::InvalidAccess => "INVALID_ACCESS",
        };
        f.write_str(s)
    }
}

/// A failed step while walking a pointer through a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", describe(.kind, .token, .pointer, .array))]
pub struct ResolveError {
    /// What went wrong.
    pub kind: ResolveErrorKind,
    /// The raw token that could not be applied.
    pub token: String,
    /// Canonical form of the whole pointer.
    pub pointer: String,
    /// The token consumed before `token`, naming the array for
    /// [`ResolveErrorKind::IndexOutOfBounds`]. `None` when `token` is the
    /// first one.
    pub array: Option<String>,
}

fn describe(kind: &ResolveErrorKind, token: &str, pointer: &str, array: &Option<String>) -> String {
    match kind {
        ResolveErrorKind::IndexOutOfBounds => format!(
            "array index \"{token}\" out of bounds for array \"{}\" given pointer \"{pointer}\"",
            array.as_deref().unwrap_or("")
        ),
        ResolveErrorKind::LeadingZero => {
            format!("found a leading zero in index \"{token}\" given pointer \"{pointer}\"")
        }
        ResolveErrorKind::InvalidIndex => {
            format!("\"{token}\" is not a valid array index given pointer \"{pointer}\"")
        }
        ResolveErrorKind::InvalidAccess => {
            format!("cannot use key \"{token}\" to access a scalar given pointer \"{pointer}\"")
        }
        ResolveErrorKind::NoSuchKey => {
            format!("could not use key \"{token}\" to access JSON given pointer \"{pointer}\"")
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// Input is not a string, or is non-empty and does not start with `/`.
    #[error("pointer \"{pointer}\" is not in JSON pointer format")]
    MalformedPointer { pointer: String },
    /// The document handed to the resolver is not an object.
    #[error("pointer root must be an object, got {found}")]
    InvalidRoot { found: &'static str },
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl JsonPointerError {
    /// The resolution failure kind, if this is a resolution error.
    pub fn kind(&self) -> Option<ResolveErrorKind> {
        match self {
            JsonPointerError::Resolve(e) => Some(e.kind),
            _ => None,
        }
    }
}
