//! Ordered map type for snapshot mappings.
//!
//! This module provides [`SnapMap`], a wrapper around [`IndexMap`] that
//! stores entries in insertion order. The mapping rule sorts keys at render
//! time, so storage order never leaks into rendered output, but predictable
//! iteration keeps construction, equality and debugging deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use snapfmt::{SnapMap, Value};
//!
//! let mut map = SnapMap::new();
//! map.insert("name".into(), Value::from("Alice"));
//! map.insert("age".into(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&"name".into()).and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::{Key, Value};
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of snapshot keys to values.
///
/// # Examples
///
/// ```rust
/// use snapfmt::{Key, SnapMap, Value};
///
/// let mut map = SnapMap::new();
/// map.insert(Key::from("first"), Value::from(1));
/// map.insert(Key::from(2), Value::from("second"));
///
/// // Iteration follows insertion order; rendering sorts independently.
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::from("first"), Key::from(2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapMap(IndexMap<Key, Value>);

impl SnapMap {
    /// Creates an empty `SnapMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snapfmt::SnapMap;
    ///
    /// let map = SnapMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        SnapMap(IndexMap::new())
    }

    /// Creates an empty `SnapMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SnapMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snapfmt::{SnapMap, Value};
    ///
    /// let mut map = SnapMap::new();
    /// assert!(map.insert("key".into(), Value::from(42)).is_none());
    /// assert!(map.insert("key".into(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }
}

impl From<HashMap<Key, Value>> for SnapMap {
    fn from(map: HashMap<Key, Value>) -> Self {
        SnapMap(map.into_iter().collect())
    }
}

impl IntoIterator for SnapMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SnapMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Key, Value)> for SnapMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        SnapMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_iteration() {
        let mut map = SnapMap::new();
        map.insert("b".into(), Value::from(1));
        map.insert("a".into(), Value::from(2));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("b"), Key::from("a")]);
    }

    #[test]
    fn test_non_string_keys() {
        let mut map = SnapMap::new();
        map.insert(Key::from(3), Value::from("three"));
        map.insert(Key::Tuple(vec![Key::from(1), Key::from(2)]), Value::Null);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&Key::from(3)).and_then(|v| v.as_str()),
            Some("three")
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = SnapMap::new();
        assert!(map.insert("k".into(), Value::from(1)).is_none());
        assert_eq!(map.insert("k".into(), Value::from(2)), Some(Value::from(1)));
        assert_eq!(map.len(), 1);
    }
}
