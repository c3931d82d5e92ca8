use std::fmt::{self, Debug, Display, Formatter};

use indexmap::IndexMap;

use super::error::require_pair;
use super::{DisplayStringifier, Entry, PutError, Stringifier};

/// A map which identifies keys by their stringified form rather than by hashing them, so two keys
/// which stringify the same are the same key.
///
/// Entries are kept in the order their key was first set. Setting an existing key replaces its
/// entry in place without moving it.
pub struct Dictionary<K, V, S = DisplayStringifier> {
    pub(crate) table: IndexMap<String, Entry<K, V>>,
    pub(crate) stringifier: S,
}

impl<K, V> Dictionary<K, V> {
    /// Creates a new, empty Dictionary which stringifies keys with [`Display`].
    pub fn new() -> Dictionary<K, V> {
        Dictionary::with_stringifier(DisplayStringifier)
    }
}

impl<K, V, S> Dictionary<K, V, S> {
    /// Creates a new, empty Dictionary which identifies keys with the provided `stringifier`.
    pub fn with_stringifier(stringifier: S) -> Dictionary<K, V, S> {
        Dictionary {
            table: IndexMap::new(),
            stringifier,
        }
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over every key, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.table.values().map(|entry| &entry.key)
    }

    /// Returns an iterator over every value, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.table.values().map(|entry| &entry.value)
    }

    /// Returns an iterator over every entry, in insertion order.
    pub fn key_values(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.table.values()
    }

    /// Calls `f` with each key-value pair in insertion order, stopping early if it returns false.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        for entry in self.table.values() {
            if !f(&entry.key, &entry.value) {
                break;
            }
        }
    }

    /// Returns the value stored under any key which stringifies the same as `key`.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        S: Stringifier<Q>,
    {
        self.table
            .get(&self.stringifier.stringify(key))
            .map(|entry| &entry.value)
    }

    /// Returns true if a value is stored under any key which stringifies the same as `key`.
    pub fn has_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        S: Stringifier<Q>,
    {
        self.table.contains_key(&self.stringifier.stringify(key))
    }

    /// Removes the entry for `key`, returning true if there was one. The remaining entries keep
    /// their order.
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool
    where
        S: Stringifier<Q>,
    {
        let tag = self.stringifier.stringify(key);
        self.table.shift_remove(&tag).is_some()
    }
}

impl<K, V, S: Stringifier<K>> Dictionary<K, V, S> {
    /// Stores `value` under `key`, replacing the value of an existing key which stringifies the
    /// same.
    pub fn try_set(&mut self, key: Option<K>, value: Option<V>) -> Result<(), PutError> {
        let (key, value) = require_pair(key, value)?;
        let tag = self.stringifier.stringify(&key);
        self.table.insert(tag, Entry::new(key, value));
        Ok(())
    }

    /// Stores `value` under `key`, returning true if it was stored.
    pub fn set(&mut self, key: K, value: V) -> bool {
        self.try_set(Some(key), Some(value)).is_ok()
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, S> Debug for Dictionary<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.table.values().map(Entry::tuple))
            .finish()
    }
}

impl<K: Display, V: Display, S> Display for Dictionary<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut entries = self.table.values();
        if let Some(first) = entries.next() {
            write!(f, "{first}")?;
        }
        for entry in entries {
            write!(f, ", {entry}")?;
        }
        Ok(())
    }
}
