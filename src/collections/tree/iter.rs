use std::iter::FusedIterator;

use super::BinarySearchTree;
use super::balance::Unbalanced;
use super::node::{Branch, Node};

/// An iterator over the keys of a tree in ascending order.
///
/// Traversal keeps its own stack of pending nodes rather than recursing.
pub struct InOrder<'a, K> {
    pub(crate) stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: &'a Branch<K>) -> InOrder<'a, K> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut branch: &'a Branch<K>) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}

/// An iterator over the keys of a tree, visiting each node before either of its subtrees.
pub struct PreOrder<'a, K> {
    pub(crate) stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: &'a Branch<K>) -> PreOrder<'a, K> {
        PreOrder {
            stack: root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

impl<K> FusedIterator for PreOrder<'_, K> {}

/// An iterator over the keys of a tree, visiting each node after both of its subtrees.
pub struct PostOrder<'a, K> {
    // Each node is pushed once unexpanded, then again expanded once its children are pending.
    pub(crate) stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: &'a Branch<K>) -> PostOrder<'a, K> {
        PostOrder {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

impl<K> FusedIterator for PostOrder<'_, K> {}

impl<K, C> IntoIterator for BinarySearchTree<K, C> {
    type Item = K;

    type IntoIter = IntoIter<K, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owning iterator over the keys of a tree in ascending order.
pub struct IntoIter<K, C>(pub(crate) BinarySearchTree<K, C>);

impl<K, C> Iterator for IntoIter<K, C> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        // Each step takes O(h), but avoids needing parent links.
        let key = self.0.root.take_first::<Unbalanced>()?;
        self.0.len -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<K, C> ExactSizeIterator for IntoIter<K, C> {}

impl<K, C> FusedIterator for IntoIter<K, C> {}

impl<'a, K, C> IntoIterator for &'a BinarySearchTree<K, C> {
    type Item = &'a K;

    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
