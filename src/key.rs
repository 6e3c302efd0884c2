//! Mapping keys and set elements.
//!
//! [`Key`] is the hashable, orderable subset of the snapshot value space.
//! Mapping keys must be mutually comparable so they can be sorted into a
//! deterministic order at render time; [`Key::try_cmp`] makes that
//! requirement explicit by erroring on incomparable kinds instead of falling
//! back to insertion order.
//!
//! ## Examples
//!
//! ```rust
//! use snapfmt::Key;
//! use std::cmp::Ordering;
//!
//! assert_eq!(Key::from("a").try_cmp(&Key::from("b")).unwrap(), Ordering::Less);
//!
//! // Booleans sit on the numeric line, below larger integers.
//! assert_eq!(Key::from(true).try_cmp(&Key::from(2)).unwrap(), Ordering::Less);
//!
//! // Cross-kind comparisons error rather than produce arbitrary order.
//! assert!(Key::from("a").try_cmp(&Key::from(1)).is_err());
//! ```

use crate::{Error, Result, Value};
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A mapping key or set element.
///
/// Covers the value kinds that are hashable and (within a kind, or along the
/// numeric line) mutually comparable: null, booleans, integers, unbounded
/// integers, floats, text, bytes and tuples of keys.
#[derive(Clone, Debug)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    BigInt(BigInt),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Tuple(Vec<Key>),
}

impl Key {
    /// Returns a short name for this key's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Key::Null => "null",
            Key::Bool(_) => "boolean",
            Key::Int(_) | Key::BigInt(_) => "integer",
            Key::Float(_) => "float",
            Key::Str(_) => "text",
            Key::Bytes(_) => "bytes",
            Key::Tuple(_) => "tuple",
        }
    }

    /// Converts this key into the equivalent [`Value`] so it can be rendered
    /// through the same rule dispatch as any other value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Key::Null => Value::Null,
            Key::Bool(b) => Value::from(*b),
            Key::Int(i) => Value::from(*i),
            Key::BigInt(b) => Value::from(b.clone()),
            Key::Float(f) => Value::from(*f),
            Key::Str(s) => Value::from(s.as_str()),
            Key::Bytes(b) => Value::Bytes(b.clone()),
            Key::Tuple(elems) => Value::Tuple(elems.iter().map(Key::to_value).collect()),
        }
    }

    /// Compares two keys for sorting, erroring when they are incomparable.
    ///
    /// Booleans, integers, unbounded integers and floats compare along one
    /// numeric line (a boolean counts as 0 or 1). Text, bytes and tuples
    /// compare within their own kind; tuples element-wise. Everything else,
    /// and any comparison involving a NaN float, is an
    /// [`Error::UnorderableKeys`].
    pub fn try_cmp(&self, other: &Key) -> Result<Ordering> {
        match (self, other) {
            (Key::Null, Key::Null) => Ok(Ordering::Equal),
            (Key::Str(a), Key::Str(b)) => Ok(a.cmp(b)),
            (Key::Bytes(a), Key::Bytes(b)) => Ok(a.cmp(b)),
            (Key::Tuple(a), Key::Tuple(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.try_cmp(y)? {
                        Ordering::Equal => continue,
                        unequal => return Ok(unequal),
                    }
                }
                Ok(a.len().cmp(&b.len()))
            }
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => a
                    .try_cmp(&b)
                    .ok_or_else(|| Error::unorderable_keys(self.kind(), other.kind())),
                _ => Err(Error::unorderable_keys(self.kind(), other.kind())),
            },
        }
    }

    fn numeric(&self) -> Option<Numeric<'_>> {
        match self {
            Key::Bool(b) => Some(Numeric::Int(i64::from(*b))),
            Key::Int(i) => Some(Numeric::Int(*i)),
            Key::BigInt(b) => Some(Numeric::Big(b)),
            Key::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }
}

/// A key viewed as a point on the numeric line.
enum Numeric<'a> {
    Int(i64),
    Big(&'a BigInt),
    Float(f64),
}

impl Numeric<'_> {
    fn try_cmp(&self, other: &Numeric<'_>) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(b)),
            (Numeric::Big(a), Numeric::Big(b)) => Some(a.cmp(b)),
            (Numeric::Int(a), Numeric::Big(b)) => Some(BigInt::from(*a).cmp(b)),
            (Numeric::Big(a), Numeric::Int(b)) => Some((*a).cmp(&BigInt::from(*b))),
            (Numeric::Float(a), Numeric::Float(b)) => a.partial_cmp(b),
            (Numeric::Int(a), Numeric::Float(b)) => (*a as f64).partial_cmp(b),
            (Numeric::Float(a), Numeric::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Numeric::Big(a), Numeric::Float(b)) => cmp_big_float(a, *b),
            (Numeric::Float(a), Numeric::Big(b)) => {
                cmp_big_float(b, *a).map(Ordering::reverse)
            }
        }
    }
}

fn cmp_big_float(big: &BigInt, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        None
    } else if f.is_infinite() {
        Some(if f > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    } else if f == f.trunc() && f.abs() <= i64::MAX as f64 {
        Some(big.cmp(&BigInt::from(f as i64)))
    } else {
        // Non-integral or out-of-range floats would need arbitrary-precision
        // rounding to compare exactly; treat as incomparable.
        None
    }
}

// Floats are compared and hashed by bit pattern so Key satisfies the Eq and
// Hash contracts required by the mapping storage.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Null, Key::Null) => true,
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::BigInt(a), Key::BigInt(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a.to_bits() == b.to_bits(),
            (Key::Str(a), Key::Str(b)) => a == b,
            (Key::Bytes(a), Key::Bytes(b)) => a == b,
            (Key::Tuple(a), Key::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Key::Null => {}
            Key::Bool(b) => b.hash(state),
            Key::Int(i) => i.hash(state),
            Key::BigInt(b) => b.hash(state),
            Key::Float(f) => f.to_bits().hash(state),
            Key::Str(s) => s.hash(state),
            Key::Bytes(b) => b.hash(state),
            Key::Tuple(elems) => elems.hash(state),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "None"),
            Key::Bool(true) => write!(f, "True"),
            Key::Bool(false) => write!(f, "False"),
            Key::Int(i) => write!(f, "{}", i),
            Key::BigInt(b) => write!(f, "{}", b),
            Key::Float(x) => write!(f, "{}", crate::repr::format_float(*x)),
            Key::Str(s) => write!(f, "{}", crate::repr::quote_str(s)),
            Key::Bytes(b) => write!(f, "{}", crate::repr::quote_bytes(b)),
            Key::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                if elems.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Float(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<BigInt> for Key {
    fn from(value: BigInt) -> Self {
        Key::BigInt(value)
    }
}

impl TryFrom<Value> for Key {
    type Error = Error;

    /// Converts a value into a key, failing for unhashable kinds (lists,
    /// mappings, sets, opaque values).
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Key::Null),
            Value::Bool(b) => Ok(Key::Bool(b)),
            Value::Number(crate::Number::Int(i)) => Ok(Key::Int(i)),
            Value::Number(crate::Number::BigInt(b)) => Ok(Key::BigInt(b)),
            Value::Number(crate::Number::Float(f)) => Ok(Key::Float(f)),
            Value::Str(s) => Ok(Key::Str(s)),
            Value::Bytes(b) => Ok(Key::Bytes(b)),
            Value::Tuple(elems) => Ok(Key::Tuple(
                elems
                    .into_iter()
                    .map(Key::try_from)
                    .collect::<Result<Vec<_>>>()?,
            )),
            other => Err(Error::unsupported_type(&format!(
                "unhashable mapping key: {}",
                other.kind()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_ordering() {
        assert_eq!(
            Key::from("a").try_cmp(&Key::from("b")).unwrap(),
            Ordering::Less
        );
        assert_eq!(Key::from(2).try_cmp(&Key::from(1)).unwrap(), Ordering::Greater);
        assert_eq!(
            Key::Bytes(b"a".to_vec())
                .try_cmp(&Key::Bytes(b"ab".to_vec()))
                .unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_numeric_line() {
        assert_eq!(
            Key::from(false).try_cmp(&Key::from(1)).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            Key::from(true).try_cmp(&Key::from(1)).unwrap(),
            Ordering::Equal
        );
        assert_eq!(
            Key::from(1).try_cmp(&Key::from(1.5)).unwrap(),
            Ordering::Less
        );
        let big = Key::from(BigInt::from(u64::MAX));
        assert_eq!(big.try_cmp(&Key::from(1)).unwrap(), Ordering::Greater);
        assert_eq!(
            big.try_cmp(&Key::from(f64::INFINITY)).unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn test_cross_kind_errors() {
        assert!(Key::from("a").try_cmp(&Key::from(1)).is_err());
        assert!(Key::Null.try_cmp(&Key::from(0)).is_err());
        assert!(Key::Bytes(vec![]).try_cmp(&Key::from("a")).is_err());
    }

    #[test]
    fn test_nan_errors() {
        assert!(Key::from(f64::NAN).try_cmp(&Key::from(1.0)).is_err());
        assert!(Key::from(1.0).try_cmp(&Key::from(f64::NAN)).is_err());
    }

    #[test]
    fn test_tuple_ordering() {
        let a = Key::Tuple(vec![Key::from(1), Key::from(2)]);
        let b = Key::Tuple(vec![Key::from(1), Key::from(3)]);
        let shorter = Key::Tuple(vec![Key::from(1)]);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(shorter.try_cmp(&a).unwrap(), Ordering::Less);

        let mixed = Key::Tuple(vec![Key::from("x")]);
        assert!(a.try_cmp(&mixed).is_err());
    }

    #[test]
    fn test_nan_keys_are_self_equal() {
        // Required for map storage: a NaN key must find itself again.
        assert_eq!(Key::from(f64::NAN), Key::from(f64::NAN));
    }

    #[test]
    fn test_display_repr() {
        assert_eq!(Key::from("a").to_string(), "'a'");
        assert_eq!(Key::from(true).to_string(), "True");
        assert_eq!(
            Key::Tuple(vec![Key::from(1)]).to_string(),
            "(1,)"
        );
        assert_eq!(
            Key::Tuple(vec![Key::from(1), Key::from(2)]).to_string(),
            "(1, 2)"
        );
    }
}
