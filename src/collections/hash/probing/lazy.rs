use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::hash::error::require_pair;
use crate::collections::hash::table::fmt_slots;
use crate::collections::hash::{Entry, LoseLose, PutError, SlotHasher, Table};

/// An occupied slot in a [`LinearProbingLazyTable`]. A deleted slot keeps its entry in place as a
/// tombstone until a later put reuses the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSlot<K, V> {
    pub entry: Entry<K, V>,
    pub deleted: bool,
}

impl<K, V> ProbeSlot<K, V> {
    /// Returns the entry if this slot hasn't been deleted.
    pub const fn live(&self) -> Option<&Entry<K, V>> {
        if self.deleted {
            None
        } else {
            Some(&self.entry)
        }
    }
}

impl<K: Display, V: Display> Display for ProbeSlot<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry)?;
        if self.deleted {
            write!(f, " (deleted)")?;
        }
        Ok(())
    }
}

/// A table which resolves collisions by linear probing and deletes lazily: a removed entry stays
/// in its slot as a tombstone, so probe sequences running through it are never broken.
///
/// Tombstones are skipped by lookups and reused by puts. A lookup which runs into the tombstone of
/// the very key it is looking for stops there and reports the key as absent.
///
/// The slot space is unbounded, as with [`LinearProbingTable`](super::LinearProbingTable).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of occupied slots, live or deleted.
/// - `c`: The length of the cluster containing the key's home slot, including tombstones.
///
/// | Method | Complexity |
/// |-|-|
/// | `put` | `O(c log n)` |
/// | `get` | `O(c log n)` |
/// | `remove` | `O(c log n)` |
/// | `size` | `O(n)` |
pub struct LinearProbingLazyTable<K, V, H = LoseLose> {
    pub(crate) slots: BTreeMap<usize, ProbeSlot<K, V>>,
    pub(crate) hasher: H,
}

impl<K, V> LinearProbingLazyTable<K, V> {
    /// Creates a new, empty LinearProbingLazyTable which uses the [`LoseLose`] hash.
    pub fn new() -> LinearProbingLazyTable<K, V> {
        LinearProbingLazyTable::with_hasher(LoseLose::default())
    }
}

impl<K, V, H> LinearProbingLazyTable<K, V, H> {
    /// Creates a new, empty LinearProbingLazyTable which uses the provided `hasher`.
    pub const fn with_hasher(hasher: H) -> LinearProbingLazyTable<K, V, H> {
        LinearProbingLazyTable {
            slots: BTreeMap::new(),
            hasher,
        }
    }

    /// Returns the number of live entries in the table. Tombstones aren't counted.
    pub fn size(&self) -> usize {
        self.slots.values().filter(|slot| !slot.deleted).count()
    }

    /// Returns the number of tombstones currently occupying slots.
    pub fn tombstones(&self) -> usize {
        self.slots.values().filter(|slot| slot.deleted).count()
    }

    /// Returns true if the table contains no live entries.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every entry and tombstone from the table.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns a reference to the table's hasher.
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns an iterator over every physically occupied slot, tombstones included, in ascending
    /// slot order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &ProbeSlot<K, V>)> + '_ {
        self.slots.iter().map(|(index, slot)| (*index, slot))
    }

    /// Finds the slot holding a live entry for `key`. The probe stops at the first gap, or at the
    /// first slot whose key matches, live or not.
    fn find_live<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let mut index = self.hasher.slot(key);

        loop {
            let slot = self.slots.get(&index)?;
            if slot.entry.key.borrow() == key {
                return (!slot.deleted).then_some(index);
            }
            index = index.checked_add(1)?;
        }
    }

    /// Finds the slot holding a live entry for `key`, probing through tombstones of any key until
    /// the first gap.
    fn find_removable<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let mut index = self.hasher.slot(key);

        loop {
            let slot = self.slots.get(&index)?;
            if !slot.deleted && slot.entry.key.borrow() == key {
                return Some(index);
            }
            index = index.checked_add(1)?;
        }
    }
}

impl<K: Eq, V, H: SlotHasher<K>> LinearProbingLazyTable<K, V, H> {
    /// Stores an entry for `key` in the first free or deleted slot at or after its home slot.
    pub fn try_put(&mut self, key: Option<K>, value: Option<V>) -> Result<(), PutError> {
        let (key, value) = require_pair(key, value)?;
        let mut index = self.hasher.slot(&key);

        while self.slots.get(&index).is_some_and(|slot| !slot.deleted) {
            index = index.checked_add(1).ok_or(PutError::SlotOverflow)?;
        }

        let replaced = self.slots.insert(index, ProbeSlot {
            entry: Entry::new(key, value),
            deleted: false,
        });
        if replaced.is_some() {
            log::trace!("reusing tombstone at slot {index}");
        }
        Ok(())
    }

    /// Stores an entry for `key` in the first free or deleted slot at or after its home slot,
    /// returning true if it was stored.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.try_put(Some(key), Some(value)).is_ok()
    }

    /// Returns the live entry stored under `key`.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.slots.get(&self.find_live(key)?)?.live()
    }

    /// Returns the value of the live entry stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Returns true if a live entry is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        self.find_live(key).is_some()
    }

    /// Marks the live entry stored under `key` as deleted, leaving it in place. Returns true if a
    /// live entry was found.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        H: SlotHasher<Q>,
    {
        let Some(index) = self.find_removable(key) else {
            return false;
        };

        match self.slots.get_mut(&index) {
            Some(slot) => {
                slot.deleted = true;
                true
            },
            None => false,
        }
    }
}

impl<K: Eq, V, H: SlotHasher<K>> Table<K, V> for LinearProbingLazyTable<K, V, H> {
    fn put(&mut self, key: K, value: V) -> bool {
        LinearProbingLazyTable::put(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        LinearProbingLazyTable::get(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        LinearProbingLazyTable::remove(self, key)
    }

    fn size(&self) -> usize {
        LinearProbingLazyTable::size(self)
    }

    fn clear(&mut self) {
        LinearProbingLazyTable::clear(self)
    }
}

impl<K, V> Default for LinearProbingLazyTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, H: Debug> Debug for LinearProbingLazyTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearProbingLazyTable")
            .field("slots", &self.slots)
            .field("size", &self.size())
            .field("tombstones", &self.tombstones())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Display, V: Display, H> Display for LinearProbingLazyTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_slots(f, self.slots())
    }
}
