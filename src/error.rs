//! Error types for snapshot rendering.
//!
//! Rendering is total over the default rule set, so errors here correspond to
//! the documented failure cases rather than to ordinary values:
//!
//! - **No formatter found**: a custom registry without a catch-all rule failed
//!   to match a value. This is a configuration error, surfaced immediately
//!   instead of producing empty output.
//! - **Unorderable keys**: mapping keys must be mutually comparable so they
//!   can be sorted into a deterministic order. Incomparable key kinds error
//!   rather than falling back to insertion order.
//! - **Representation failure**: capturing the native representation of an
//!   opaque value failed. The failure originates in the value being formatted
//!   and is propagated, not masked.
//!
//! ## Examples
//!
//! ```rust
//! use snapfmt::{FormatterRegistry, Renderer, RenderOptions, Value};
//!
//! // A registry with no rules matches nothing.
//! let registry = FormatterRegistry::new(Vec::new());
//! let renderer = Renderer::with_registry(registry, RenderOptions::default());
//! assert!(renderer.render(&Value::Null).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// No rule in the registry claimed the value (custom registry without a
    /// catch-all).
    #[error("no formatter found for {0} value")]
    NoFormatter(String),

    /// Mapping keys of incomparable kinds cannot be sorted.
    #[error("unorderable mapping keys: {left} and {right}")]
    UnorderableKeys { left: String, right: String },

    /// Capturing the native representation of a value failed.
    #[error("failed to capture native representation of {0}")]
    Repr(String),

    /// A value that cannot be converted into the snapshot value space.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a no-formatter-found error for the given value kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snapfmt::Error;
    ///
    /// let err = Error::no_formatter("mapping");
    /// assert!(err.to_string().contains("no formatter found"));
    /// ```
    pub fn no_formatter(kind: &str) -> Self {
        Error::NoFormatter(kind.to_string())
    }

    /// Creates an unorderable-keys error naming the two incomparable kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snapfmt::Error;
    ///
    /// let err = Error::unorderable_keys("text", "integer");
    /// assert!(err.to_string().contains("text"));
    /// ```
    pub fn unorderable_keys(left: &str, right: &str) -> Self {
        Error::UnorderableKeys {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Creates a representation-capture error for the named type.
    pub fn repr(type_name: &str) -> Self {
        Error::Repr(type_name.to_string())
    }

    /// Creates an unsupported-type error for values outside the snapshot
    /// value space.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snapfmt::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
