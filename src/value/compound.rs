use std::sync::Arc;

use indexmap::IndexMap;

use crate::{ByteArray, IntArray, LongArray};

use super::{List, Value};

/// An NBT compound: string keys to values of any tag. Keys keep the order
/// they were inserted in, which is also the order they are written in.
/// Inserting an existing key replaces its value in place.
///
/// Equality ignores order, two compounds are equal when they hold the same
/// keys with equal values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    entries: IndexMap<Arc<str>, Value>,
}

macro_rules! getter {
    ($(#[$meta:meta])* $name:ident, $as:ident, $ret:ty) => {
        $(#[$meta])*
        pub fn $name(&self, key: &str) -> Option<$ret> {
            self.get(key).and_then(Value::$as)
        }
    };
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Remove a key, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Arc<str>, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Arc<str>, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, Arc<str>, Value> {
        self.entries.values()
    }

    getter!(get_i8, as_i8, i8);
    getter!(
        /// A Byte read as a boolean, non-zero is `true`.
        get_bool,
        as_bool,
        bool
    );
    getter!(get_i16, as_i16, i16);
    getter!(get_i32, as_i32, i32);
    getter!(get_i64, as_i64, i64);
    getter!(get_f32, as_f32, f32);
    getter!(get_f64, as_f64, f64);
    getter!(get_str, as_str, &str);
    getter!(get_byte_array, as_byte_array, &ByteArray);
    getter!(get_int_array, as_int_array, &IntArray);
    getter!(get_long_array, as_long_array, &LongArray);
    getter!(get_list, as_list, &List);
    getter!(get_compound, as_compound, &Compound);
}

impl<K, V> FromIterator<(K, V)> for Compound
where
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Compound
where
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a Arc<str>, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Arc<str>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (Arc<str>, Value);
    type IntoIter = indexmap::map::IntoIter<Arc<str>, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
