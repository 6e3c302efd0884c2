//! Dynamic value representation for snapshot rendering.
//!
//! This module provides the [`Value`] enum, the value space that rendering
//! rules classify at render time. It covers primitives, containers and an
//! opaque variant for anything else.
//!
//! ## Core Types
//!
//! - [`Value`]: any renderable value (null, bool, number, text, bytes, list,
//!   tuple, map, set, frozenset, opaque)
//! - [`Number`]: numeric values including unbounded integers and complex
//!   numbers
//! - [`Opaque`]: a captured native representation of an unrecognized value
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use snapfmt::{Number, Value};
//!
//! // From primitives
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the snap! macro
//! use snapfmt::snap;
//! let obj = snap!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use snapfmt::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 10, y: 20 };
//! let value: Value = to_value(&point).unwrap();
//! assert!(value.is_map());
//! ```
//!
//! ### Opaque values
//!
//! Anything without a natural place in the value space can still be rendered:
//! its `Debug` representation is captured up front and the catch-all rule
//! scrubs identity addresses out of it at render time.
//!
//! ```rust
//! use snapfmt::Value;
//!
//! struct Widget;
//! impl std::fmt::Debug for Widget {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "<Widget object at 0x7f00aa12>")
//!     }
//! }
//!
//! let value = Value::opaque(&Widget).unwrap();
//! assert!(value.is_opaque());
//! ```

use crate::{repr, Key, SnapMap};
use num_bigint::BigInt;
use std::fmt;
use std::fmt::Write as _;

/// A dynamically-typed representation of any renderable value.
///
/// # Examples
///
/// ```rust
/// use snapfmt::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Int(42));
/// let text = Value::Str("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_str());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(SnapMap),
    Set(Vec<Key>),
    FrozenSet(Vec<Key>),
    Opaque(Opaque),
}

/// A numeric value: bounded or unbounded integer, float, or complex.
///
/// # Examples
///
/// ```rust
/// use snapfmt::Number;
///
/// let integer = Number::Int(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), Some(3.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    BigInt(BigInt),
    Float(f64),
    Complex { re: f64, im: f64 },
}

impl Number {
    /// Returns `true` if this is a bounded or unbounded integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_) | Number::BigInt(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a complex number.
    #[inline]
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Number::Complex { .. })
    }

    /// Converts this number to an `i64` if it is a bounded integer.
    #[inline]
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Converts this number to an `f64` if it is a float.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::BigInt(b) => write!(f, "{}", b),
            Number::Float(x) => write!(f, "{}", repr::format_float(*x)),
            Number::Complex { re, im } => write!(f, "{}", repr::format_complex(*re, *im)),
        }
    }
}

/// The captured native representation of an unrecognized value.
///
/// Construction happens through [`Value::opaque`] (from any `Debug` type) or
/// [`Value::opaque_repr`] (from an already-produced representation string).
/// The stored text is raw; the catch-all rule scrubs identity addresses when
/// it renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opaque {
    repr: String,
}

impl Opaque {
    /// The captured representation, unscrubbed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.repr
    }
}

impl Value {
    /// Captures any `Debug` value as an opaque snapshot value.
    ///
    /// The representation is produced eagerly. A `Debug` impl that itself
    /// fails surfaces as [`Error::Repr`](crate::Error::Repr) here rather than
    /// aborting inside a formatting macro later.
    ///
    /// # Errors
    ///
    /// Returns an error if the value's `Debug` impl reports a formatting
    /// failure.
    pub fn opaque<T: fmt::Debug + ?Sized>(value: &T) -> crate::Result<Value> {
        let mut repr = String::new();
        write!(repr, "{:?}", value)
            .map_err(|_| crate::Error::repr(std::any::type_name::<T>()))?;
        Ok(Value::Opaque(Opaque { repr }))
    }

    /// Wraps an already-produced representation string as an opaque value.
    ///
    /// Useful for tests and for callers bridging foreign representation
    /// mechanisms: injecting a synthetic representation with a known address
    /// pattern exercises scrubbing deterministically, where a real address
    /// could not.
    #[must_use]
    pub fn opaque_repr(repr: impl Into<String>) -> Value {
        Value::Opaque(Opaque { repr: repr.into() })
    }

    /// Builds a set value from its elements.
    #[must_use]
    pub fn set(elems: Vec<Key>) -> Value {
        Value::Set(elems)
    }

    /// Builds a frozen (immutable) set value from its elements.
    #[must_use]
    pub fn frozenset(elems: Vec<Key>) -> Value {
        Value::FrozenSet(elems)
    }

    /// Returns a short name for this value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "mapping",
            Value::Set(_) => "set",
            Value::FrozenSet(_) => "frozenset",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is text.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is a byte sequence.
    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    /// Returns `true` if the value is an ordered sequence.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a fixed sequence.
    #[inline]
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is a set or frozen set.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_) | Value::FrozenSet(_))
    }

    /// Returns `true` if the value is opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Value::Opaque(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is text, returns a reference to it. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a bounded integer, returns it. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an ordered sequence, returns a reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&SnapMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Single-line native repr of the value, used by the scalar and catch-all
/// rules. Container variants repr their contents inline in storage order;
/// the multi-line snapshot layout lives in the rendering rules, not here.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", repr::quote_str(s)),
            Value::Bytes(b) => write!(f, "{}", repr::quote_bytes(b)),
            Value::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Set(elems) => {
                if elems.is_empty() {
                    write!(f, "set()")
                } else {
                    write!(f, "{{")?;
                    write_joined(f, elems)?;
                    write!(f, "}}")
                }
            }
            Value::FrozenSet(elems) => {
                if elems.is_empty() {
                    write!(f, "frozenset()")
                } else {
                    write!(f, "frozenset({{")?;
                    write_joined(f, elems)?;
                    write!(f, "}})")
                }
            }
            Value::Opaque(opaque) => write!(f, "{}", opaque.as_str()),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Int(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Int(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Int(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Int(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Int(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Int(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Int(value as i64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Int(i)),
            Err(_) => Value::Number(Number::BigInt(BigInt::from(value))),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Number(Number::BigInt(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<SnapMap> for Value {
    fn from(value: SnapMap) -> Self {
        Value::Map(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        value.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Int(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::Str("test".to_string()));
    }

    #[test]
    fn test_u64_promotes_to_bigint() {
        assert_eq!(Value::from(7u64), Value::Number(Number::Int(7)));
        assert_eq!(
            Value::from(u64::MAX),
            Value::Number(Number::BigInt(BigInt::from(u64::MAX)))
        );
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::from(true).to_string(), "True");
        assert_eq!(Value::from(false).to_string(), "False");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from("hi").to_string(), "'hi'");
        assert_eq!(Value::Bytes(b"ab".to_vec()).to_string(), "b'ab'");
        assert_eq!(
            Value::Number(Number::Complex { re: 1.0, im: 2.0 }).to_string(),
            "(1+2j)"
        );
    }

    #[test]
    fn test_display_sets() {
        assert_eq!(Value::set(vec![]).to_string(), "set()");
        assert_eq!(
            Value::set(vec![Key::from(1), Key::from(2)]).to_string(),
            "{1, 2}"
        );
        assert_eq!(Value::frozenset(vec![]).to_string(), "frozenset()");
        assert_eq!(
            Value::frozenset(vec![Key::from(1)]).to_string(),
            "frozenset({1})"
        );
    }

    #[test]
    fn test_display_containers_inline() {
        assert_eq!(
            Value::Tuple(vec![Value::from(1)]).to_string(),
            "(1,)"
        );
        assert_eq!(
            Value::List(vec![Value::from(1), Value::from(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn test_opaque_capture() {
        #[derive(Debug)]
        struct Plain {
            x: i32,
        }
        let value = Value::opaque(&Plain { x: 1 }).unwrap();
        assert!(value.is_opaque());
        assert_eq!(value.to_string(), "Plain { x: 1 }");
    }

    #[test]
    fn test_opaque_capture_failure() {
        struct Broken;
        impl fmt::Debug for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        assert!(Value::opaque(&Broken).is_err());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(42).as_i64(), Some(42));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(42).as_str(), None);
        assert!(Value::Map(SnapMap::new()).is_map());
        assert!(Value::set(vec![]).is_set());
        assert!(Value::frozenset(vec![]).is_set());
    }
}
