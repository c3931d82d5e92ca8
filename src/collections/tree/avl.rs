use std::fmt::{self, Debug, Formatter};

use crate::collections::compare::{Comparator, NaturalOrder};
use crate::util::fmt::DebugRaw;

use super::balance::{Avl, BalanceFactor};
use super::{BinarySearchTree, InOrder, PostOrder, PreOrder};

/// A self-balancing binary search tree.
///
/// After every insertion or removal, each ancestor of the changed node is checked on the way back
/// up and rotated if its subtrees' heights differ by two, so the heights of any node's subtrees
/// never differ by more than one. The tree's height stays within `O(log n)`.
///
/// Insertions choose a rotation by where the new key landed relative to the unbalanced node's
/// child. Removals may have shortened a subtree anywhere below, so they choose by the child's own
/// balance factor instead.
///
/// Heights aren't cached on nodes, they are recomputed whenever a balance factor is needed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of keys in the tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `search` | `O(log n)` |
/// | `remove` | `O(n)` |
/// | `min`/`max` | `O(log n)` |
/// | `height` | `O(n)` |
/// | `len` | `O(1)` |
pub struct AvlTree<K, C = NaturalOrder> {
    pub(crate) inner: BinarySearchTree<K, C>,
}

impl<K: Ord> AvlTree<K> {
    /// Creates a new, empty AvlTree which orders keys by their [`Ord`] implementation.
    pub const fn new() -> AvlTree<K> {
        AvlTree::with_comparator(NaturalOrder)
    }
}

impl<K, C> AvlTree<K, C> {
    /// Creates a new, empty AvlTree which orders keys with the provided `cmp`.
    pub const fn with_comparator(cmp: C) -> AvlTree<K, C> {
        AvlTree {
            inner: BinarySearchTree::with_comparator(cmp),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub const fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    pub fn height(&self) -> isize {
        self.inner.height()
    }

    pub fn root(&self) -> Option<&K> {
        self.inner.root()
    }

    /// Classifies the root of the tree by its balance factor. An empty tree is balanced.
    pub fn balance_factor(&self) -> BalanceFactor {
        BalanceFactor::of(&self.inner.root)
    }

    pub fn min(&self) -> Option<&K> {
        self.inner.min()
    }

    pub fn max(&self) -> Option<&K> {
        self.inner.max()
    }

    pub fn in_order(&self) -> InOrder<'_, K> {
        self.inner.in_order()
    }

    pub fn pre_order(&self) -> PreOrder<'_, K> {
        self.inner.pre_order()
    }

    pub fn post_order(&self) -> PostOrder<'_, K> {
        self.inner.post_order()
    }

    pub fn in_order_traverse<F: FnMut(&K)>(&self, f: F) {
        self.inner.in_order_traverse(f);
    }

    pub fn pre_order_traverse<F: FnMut(&K)>(&self, f: F) {
        self.inner.pre_order_traverse(f);
    }

    pub fn post_order_traverse<F: FnMut(&K)>(&self, f: F) {
        self.inner.post_order_traverse(f);
    }

    /// Consumes the tree, returning its keys as an unbalanced [`BinarySearchTree`] with the same
    /// shape.
    pub fn into_inner(self) -> BinarySearchTree<K, C> {
        self.inner
    }

    pub(crate) fn is_balanced(&self) -> bool {
        self.inner.is_balanced()
    }
}

impl<K, C: Comparator<K>> AvlTree<K, C> {
    /// Inserts `key` into the tree and rebalances, returning true if it wasn't already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.inner.insert_balanced::<Avl>(key)
    }

    pub fn search(&self, key: &K) -> bool {
        self.inner.search(key)
    }

    pub fn get(&self, key: &K) -> Option<&K> {
        self.inner.get(key)
    }

    /// Removes the key equal to `key` and rebalances, returning true if there was one.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    pub fn take(&mut self, key: &K) -> Option<K> {
        self.inner.remove_balanced::<Avl>(key)
    }
}

impl<K: Ord> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C: Comparator<K>> Extend<K> for AvlTree<K, C> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> IntoIterator for AvlTree<K, C> {
    type Item = K;

    type IntoIter = super::IntoIter<K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C> {
    type Item = &'a K;

    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K: Debug, C> Debug for AvlTree<K, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", self.inner.root)))
            .field("len", &self.len())
            .finish()
    }
}
