use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use super::error::require_pair;
use super::table::fmt_slots;
use super::{Entry, LoseLose, PutError, SlotHasher, Table};

/// A table with no collision policy: each slot holds at most one entry and a put into an occupied
/// slot replaces whatever was there, even if it was stored under a different key.
///
/// Lookups and removals only succeed if the resident entry's key matches, so a key which has been
/// displaced by a collision simply disappears from the table.
pub struct DirectTable<K, V, H = LoseLose> {
    pub(crate) slots: BTreeMap<usize, Entry<K, V>>,
    pub(crate) hasher: H,
}

impl<K, V> DirectTable<K, V> {
    /// Creates a new, empty DirectTable which uses the [`LoseLose`] hash.
    pub fn new() -> DirectTable<K, V> {
        DirectTable::with_hasher(LoseLose::default())
    }
}

impl<K, V, H> DirectTable<K, V, H> {
    /// Creates a new, empty DirectTable which uses the provided `hasher`.
    pub const fn with_hasher(hasher: H) -> DirectTable<K, V, H> {
        DirectTable {
            slots: BTreeMap::new(),
            hasher,
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn slots(&self) -> impl Iterator<Item = (usize, &Entry<K, V>)> + '_ {
        self.slots.iter().map(|(index, entry)| (*index, entry))
    }

    fn resident<Q>(&self, key: &Q) -> Option<(usize, &Entry<K, V>)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let index = self.hasher.slot(key);
        self.slots
            .get(&index)
            .filter(|entry| entry.key.borrow() == key)
            .map(|entry| (index, entry))
    }
}

impl<K: Eq, V, H: SlotHasher<K>> DirectTable<K, V, H> {
    /// Stores an entry for `key` in its home slot, displacing any resident entry.
    pub fn try_put(&mut self, key: Option<K>, value: Option<V>) -> Result<(), PutError> {
        let (key, value) = require_pair(key, value)?;
        let index = self.hasher.slot(&key);

        if self.slots.insert(index, Entry::new(key, value)).is_some() {
            log::debug!("slot {index} overwritten by a put");
        }
        Ok(())
    }

    pub fn put(&mut self, key: K, value: V) -> bool {
        self.try_put(Some(key), Some(value)).is_ok()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.resident(key).map(|(_, entry)| &entry.value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let Some((index, _)) = self.resident(key) else {
            return false;
        };
        self.slots.remove(&index).is_some()
    }
}

impl<K: Eq, V, H: SlotHasher<K>> Table<K, V> for DirectTable<K, V, H> {
    fn put(&mut self, key: K, value: V) -> bool {
        DirectTable::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        DirectTable::get(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        DirectTable::remove(self, key)
    }

    fn size(&self) -> usize {
        DirectTable::size(self)
    }

    fn clear(&mut self) {
        DirectTable::clear(self)
    }
}

impl<K, V> Default for DirectTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for DirectTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectTable")
            .field("slots", &self.slots)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Display, V: Display, H> Display for DirectTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_slots(f, self.slots())
    }
}
