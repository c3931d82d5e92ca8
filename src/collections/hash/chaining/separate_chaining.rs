use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::hash::error::require_pair;
use crate::collections::hash::table::fmt_slots;
use crate::collections::hash::{Entry, LoseLose, PutError, SlotHasher, Table};
use crate::collections::linked::LinkedList;

/// A table which resolves collisions by keeping every entry for a slot in a chain.
///
/// Putting a key which is already present does not replace the existing entry: the new entry is
/// appended to the chain and lookups keep finding the older one, because chains are always
/// scanned from the head. Removing a key removes the oldest matching entry, exposing the next.
///
/// A chain exists only while it holds entries, it is dropped as soon as it is emptied.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `s`: The number of occupied slots.
/// - `c`: The length of the chain in the key's slot.
///
/// | Method | Complexity |
/// |-|-|
/// | `put` | `O(log s + c)` |
/// | `get` | `O(log s + c)` |
/// | `remove` | `O(log s + c)` |
/// | `size` | `O(s)` |
pub struct SeparateChainingTable<K, V, H = LoseLose> {
    pub(crate) slots: BTreeMap<usize, LinkedList<Entry<K, V>>>,
    pub(crate) hasher: H,
}

impl<K, V> SeparateChainingTable<K, V> {
    /// Creates a new, empty SeparateChainingTable which uses the [`LoseLose`] hash.
    pub fn new() -> SeparateChainingTable<K, V> {
        SeparateChainingTable::with_hasher(LoseLose::default())
    }
}

impl<K, V, H> SeparateChainingTable<K, V, H> {
    /// Creates a new, empty SeparateChainingTable which uses the provided `hasher`.
    pub const fn with_hasher(hasher: H) -> SeparateChainingTable<K, V, H> {
        SeparateChainingTable {
            slots: BTreeMap::new(),
            hasher,
        }
    }

    /// Returns the number of entries across all chains.
    pub fn size(&self) -> usize {
        self.slots.values().map(LinkedList::len).sum()
    }

    /// Returns true if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every entry from the table.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns a reference to the table's hasher.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns an iterator over every occupied slot and its chain, in ascending slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &LinkedList<Entry<K, V>>)> + '_ {
        self.slots.iter().map(|(index, chain)| (*index, chain))
    }

    /// Returns an iterator over every entry, in slot order and then chain order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.slots.values().flat_map(LinkedList::iter)
    }

    /// Returns the home slot of `key`.
    fn home_of<Q: ?Sized>(&self, key: &Q) -> usize
    where
        H: SlotHasher<Q>,
    {
        self.hasher.slot(key)
    }
}

impl<K: Eq, V, H: SlotHasher<K>> SeparateChainingTable<K, V, H> {
    /// Appends an entry for `key` to the chain of its home slot, creating the chain if needed.
    pub fn try_put(&mut self, key: Option<K>, value: Option<V>) -> Result<(), PutError> {
        let (key, value) = require_pair(key, value)?;
        let index = self.home_of(&key);

        self.slots
            .entry(index)
            .or_default()
            .push(Entry::new(key, value));
        Ok(())
    }

    /// Appends an entry for `key` to the chain of its home slot, returning true if it was stored.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.try_put(Some(key), Some(value)).is_ok()
    }

    /// Returns the oldest entry stored under `key`.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.slots
            .get(&self.home_of(key))?
            .iter()
            .find(|entry| entry.key.borrow() == key)
    }

    /// Returns the value of the oldest entry stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Returns true if at least one entry is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.get_entry(key).is_some()
    }

    /// Removes and returns the oldest entry stored under `key`. The slot's chain is dropped if
    /// this leaves it empty.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let index = self.home_of(key);
        let chain = self.slots.get_mut(&index)?;
        let removed = chain.remove_first_by(|entry| entry.key.borrow() == key);

        if chain.is_empty() {
            log::debug!("dropping emptied chain at slot {index}");
            self.slots.remove(&index);
        }

        removed
    }

    /// Removes the oldest entry stored under `key`, returning true if there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.remove_entry(key).is_some()
    }
}

impl<K: Eq, V, H: SlotHasher<K>> Table<K, V> for SeparateChainingTable<K, V, H> {
    fn put(&mut self, key: K, value: V) -> bool {
        SeparateChainingTable::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        SeparateChainingTable::get(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        SeparateChainingTable::remove(self, key)
    }

    fn size(&self) -> usize {
        SeparateChainingTable::size(self)
    }

    fn clear(&mut self) {
        SeparateChainingTable::clear(self)
    }
}

impl<K, V> Default for SeparateChainingTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for SeparateChainingTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeparateChainingTable")
            .field("slots", &self.slots)
            .field("size", &self.size())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Display, V: Display, H> Display for SeparateChainingTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_slots(f, self.slots())
    }
}
