use std::fmt::{self, Debug, Formatter};

use crate::collections::compare::{Comparator, NaturalOrder};
use crate::util::fmt::DebugRaw;

use super::balance::{Balance, Unbalanced};
use super::node::Branch;
use super::{InOrder, PostOrder, PreOrder};

/// A binary search tree of keys, ordered by a [`Comparator`].
///
/// The tree stores keys only. Inserting a key which compares equal to one already present is
/// silently ignored, neither key replaces the other.
///
/// No rebalancing is performed, so inserting keys in sorted order degrades the tree into a list.
/// See [`AvlTree`](super::AvlTree) for a self-balancing alternative.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the tree.
/// - `h`: The height of the tree, between `log n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(h)` |
/// | `search` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `min`/`max` | `O(h)` |
/// | `height` | `O(n)` |
/// | `len` | `O(1)` |
pub struct BinarySearchTree<K, C = NaturalOrder> {
    pub(crate) root: Branch<K>,
    pub(crate) len: usize,
    pub(crate) cmp: C,
}

impl<K: Ord> BinarySearchTree<K> {
    /// Creates a new, empty BinarySearchTree which orders keys by their [`Ord`] implementation.
    pub const fn new() -> BinarySearchTree<K> {
        BinarySearchTree::with_comparator(NaturalOrder)
    }
}

impl<K, C> BinarySearchTree<K, C> {
    /// Creates a new, empty BinarySearchTree which orders keys with the provided `cmp`.
    pub const fn with_comparator(cmp: C) -> BinarySearchTree<K, C> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
            cmp,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        // Children are detached before each node drops, so dropping never recurses.
        let mut pending: Vec<_> = self.root.0.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
        self.len = 0;
    }

    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the height of the tree: -1 when empty, 0 for a single key.
    pub fn height(&self) -> isize {
        self.root.height()
    }

    /// Returns the key at the root of the tree.
    pub fn root(&self) -> Option<&K> {
        self.root.key()
    }

    /// Returns the smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root.first()
    }

    /// Returns the largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root.last()
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(&self.root)
    }

    /// Returns an iterator over the keys, yielding each node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(&self.root)
    }

    /// Returns an iterator over the keys, yielding each node after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(&self.root)
    }

    /// Calls `f` with every key in ascending order.
    pub fn in_order_traverse<F: FnMut(&K)>(&self, f: F) {
        self.in_order().for_each(f);
    }

    /// Calls `f` with every key, visiting each node before its subtrees.
    pub fn pre_order_traverse<F: FnMut(&K)>(&self, f: F) {
        self.pre_order().for_each(f);
    }

    /// Calls `f` with every key, visiting each node after its subtrees.
    pub fn post_order_traverse<F: FnMut(&K)>(&self, f: F) {
        self.post_order().for_each(f);
    }

    pub(crate) fn is_balanced(&self) -> bool {
        self.root.is_balanced()
    }
}

impl<K, C: Comparator<K>> BinarySearchTree<K, C> {
    /// Inserts `key` into the tree, returning true if it wasn't already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.insert_balanced::<Unbalanced>(key)
    }

    /// Returns true if a key equal to `key` is in the tree.
    pub fn search(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the stored key which compares equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.root.search(key, &self.cmp)
    }

    /// Removes the key equal to `key` from the tree, returning true if there was one.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_balanced::<Unbalanced>(key).is_some()
    }

    /// Removes and returns the key equal to `key`.
    pub fn take(&mut self, key: &K) -> Option<K> {
        self.remove_balanced::<Unbalanced>(key)
    }

    pub(crate) fn insert_balanced<B: Balance>(&mut self, key: K) -> bool {
        let inserted = self.root.insert::<C, B>(key, &self.cmp).is_some();
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub(crate) fn remove_balanced<B: Balance>(&mut self, key: &K) -> Option<K> {
        let removed = self.root.remove::<C, B>(key, &self.cmp)?;
        self.len -= 1;
        Some(removed)
    }
}

impl<K, C> Drop for BinarySearchTree<K, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Ord> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C: Comparator<K>> Extend<K> for BinarySearchTree<K, C> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for BinarySearchTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug, C> Debug for BinarySearchTree<K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", self.root)))
            .field("len", &self.len)
            .finish()
    }
}
