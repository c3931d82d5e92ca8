use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::hash::error::require_pair;
use crate::collections::hash::table::fmt_slots;
use crate::collections::hash::{Entry, LoseLose, PutError, SlotHasher, Table};

/// A table which resolves collisions by linear probing, moving entries back into the freed slot
/// after a removal so that no probe sequence is ever interrupted by a gap.
///
/// The slot space is unbounded: probing never wraps and the table never grows. A probe only fails
/// if it would step past `usize::MAX`.
///
/// Putting a key which is already present does not replace the existing entry, the new entry is
/// stored further along the probe sequence and lookups keep finding the older one.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `c`: The length of the cluster (run of occupied slots) containing the key's home slot.
///
/// | Method | Complexity |
/// |-|-|
/// | `put` | `O(c log n)` |
/// | `get` | `O(c log n)` |
/// | `remove` | `O(c log n)` |
/// | `size` | `O(1)` |
pub struct LinearProbingTable<K, V, H = LoseLose> {
    pub(crate) slots: BTreeMap<usize, Entry<K, V>>,
    pub(crate) hasher: H,
}

impl<K, V> LinearProbingTable<K, V> {
    /// Creates a new, empty LinearProbingTable which uses the [`LoseLose`] hash.
    pub fn new() -> LinearProbingTable<K, V> {
        LinearProbingTable::with_hasher(LoseLose::default())
    }
}

impl<K, V, H> LinearProbingTable<K, V, H> {
    /// Creates a new, empty LinearProbingTable which uses the provided `hasher`.
    pub const fn with_hasher(hasher: H) -> LinearProbingTable<K, V, H> {
        LinearProbingTable {
            slots: BTreeMap::new(),
            hasher,
        }
    }

    /// Returns the number of entries in the table.
    pub fn size(&self) -> usize {
        self.slots.len()
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

    /// Returns an iterator over every occupied slot and its entry, in ascending slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Entry<K, V>)> + '_ {
        self.slots.iter().map(|(index, entry)| (*index, entry))
    }

    /// Finds the slot holding `key`, probing forward from its home slot until a gap.
    fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let mut index = self.hasher.slot(key);

        // A gap ends the probe sequence: no key can have been placed beyond it.
        loop {
            let entry = self.slots.get(&index)?;
            if entry.key.borrow() == key {
                return Some(index);
            }
            index = index.checked_add(1)?;
        }
    }
}

impl<K: Eq, V, H: SlotHasher<K>> LinearProbingTable<K, V, H> {
    /// Stores an entry for `key` in the first free slot at or after its home slot.
    pub fn try_put(&mut self, key: Option<K>, value: Option<V>) -> Result<(), PutError> {
        let (key, value) = require_pair(key, value)?;
        let mut index = self.hasher.slot(&key);

        while self.slots.contains_key(&index) {
            index = index.checked_add(1).ok_or(PutError::SlotOverflow)?;
        }

        self.slots.insert(index, Entry::new(key, value));
        Ok(())
    }

    /// Stores an entry for `key` in the first free slot at or after its home slot, returning true
    /// if it was stored.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.try_put(Some(key), Some(value)).is_ok()
    }

    /// Returns the first entry stored under `key` along its probe sequence.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.slots.get(&self.find_index(key)?)
    }

    /// Returns the value of the first entry stored under `key` along its probe sequence.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Returns true if an entry is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.find_index(key).is_some()
    }

    /// Removes and returns the first entry stored under `key`, then re-homes the rest of its
    /// cluster.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let index = self.find_index(key)?;
        let removed = self.slots.remove(&index)?;
        self.rehome_after(index);
        Some(removed)
    }

    /// Removes the first entry stored under `key`, returning true if there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.remove_entry(key).is_some()
    }

    /// Closes the gap left at `freed` by walking the rest of the cluster and moving back every
    /// entry whose home slot is at or before the current gap. Each move opens a new gap where the
    /// entry used to be, so the walk continues until the cluster ends.
    fn rehome_after(&mut self, freed: usize) {
        let mut gap = freed;
        let mut index = freed;

        while let Some(next) = index.checked_add(1) {
            index = next;
            let Some(entry) = self.slots.get(&index) else {
                break;
            };

            if self.hasher.slot(&entry.key) <= gap
                && let Some(moving) = self.slots.remove(&index)
            {
                log::trace!("re-homing entry from slot {index} to slot {gap}");
                self.slots.insert(gap, moving);
                gap = index;
            }
        }
    }
}

impl<K: Eq, V, H: SlotHasher<K>> Table<K, V> for LinearProbingTable<K, V, H> {
    fn put(&mut self, key: K, value: V) -> bool {
        LinearProbingTable::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        LinearProbingTable::get(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        LinearProbingTable::remove(self, key)
    }

    fn size(&self) -> usize {
        LinearProbingTable::size(self)
    }

    fn clear(&mut self) {
        LinearProbingTable::clear(self)
    }
}

impl<K, V> Default for LinearProbingTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for LinearProbingTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearProbingTable")
            .field("slots", &self.slots)
            .field("size", &self.size())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Display, V: Display, H> Display for LinearProbingTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_slots(f, self.slots())
    }
}
