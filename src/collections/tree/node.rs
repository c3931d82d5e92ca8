use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::compare::{Comparator, Comparison};
use crate::util::fmt::prefix_lines;

use super::balance::Balance;

pub(crate) struct Branch<K>(pub Option<Box<Node<K>>>);

pub(crate) struct Node<K> {
    pub left: Branch<K>,
    pub right: Branch<K>,
    pub key: K,
}

impl<K> Node<K> {
    pub const fn leaf(key: K) -> Node<K> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
        }
    }
}

impl<K> Branch<K> {
    /// Returns the height of this subtree, where a lone leaf has a height of 0 and an empty
    /// subtree has a height of -1.
    pub fn height(&self) -> isize {
        match &self.0 {
            Some(node) => node.left.height().max(node.right.height()) + 1,
            None => -1,
        }
    }

    /// Returns the height of the left subtree minus the height of the right one.
    pub fn balance_factor(&self) -> isize {
        match &self.0 {
            Some(node) => node.left.height() - node.right.height(),
            None => 0,
        }
    }

    pub fn is_balanced(&self) -> bool {
        match &self.0 {
            Some(node) => {
                self.balance_factor().abs() <= 1
                    && node.left.is_balanced()
                    && node.right.is_balanced()
            },
            None => true,
        }
    }

    pub fn key(&self) -> Option<&K> {
        self.0.as_ref().map(|node| &node.key)
    }

    pub fn search<C: Comparator<K>>(&self, key: &K, cmp: &C) -> Option<&K> {
        match &self.0 {
            Some(node) => match cmp.compare(key, &node.key) {
                Comparison::Less => node.left.search(key, cmp),
                Comparison::Greater => node.right.search(key, cmp),
                Comparison::Equal => Some(&node.key),
            },
            None => None,
        }
    }

    pub fn first(&self) -> Option<&K> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(k) => Some(k),
                None => Some(&node.key),
            },
            None => None,
        }
    }

    pub fn last(&self) -> Option<&K> {
        match &self.0 {
            Some(node) => match node.right.last() {
                Some(k) => Some(k),
                None => Some(&node.key),
            },
            None => None,
        }
    }

    /// Inserts `key` below this branch, rebalancing each ancestor with `B` on the way back up.
    ///
    /// Returns how `key` compared to the key of the node at this branch, or
    /// [`Equal`](Comparison::Equal) if `key` became that node. Returns `None` if an equal key was
    /// already present, in which case nothing changes.
    pub fn insert<C, B>(&mut self, key: K, cmp: &C) -> Option<Comparison>
    where
        C: Comparator<K>,
        B: Balance,
    {
        match &mut self.0 {
            Some(node) => {
                let side = cmp.compare(&key, &node.key);
                let child_side = match side {
                    Comparison::Less => node.left.insert::<C, B>(key, cmp)?,
                    Comparison::Greater => node.right.insert::<C, B>(key, cmp)?,
                    Comparison::Equal => return None,
                };
                B::after_insert(self, child_side);
                Some(side)
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(key)));
                Some(Comparison::Equal)
            },
        }
    }

    /// Removes the key equal to `key` from below this branch, rebalancing each ancestor with `B`
    /// on the way back up.
    pub fn remove<C, B>(&mut self, key: &K, cmp: &C) -> Option<K>
    where
        C: Comparator<K>,
        B: Balance,
    {
        let node = self.0.as_mut()?;
        let removed = match cmp.compare(key, &node.key) {
            Comparison::Less => node.left.remove::<C, B>(key, cmp)?,
            Comparison::Greater => node.right.remove::<C, B>(key, cmp)?,
            Comparison::Equal => self.unlink::<B>()?,
        };
        B::after_remove(self);
        Some(removed)
    }

    /// Removes the node at this branch, returning its key.
    ///
    /// A leaf is simply cleared and a node with one child is replaced by that child. A node with
    /// two children takes the key of its in-order successor, which is then removed from the right
    /// subtree instead.
    fn unlink<B: Balance>(&mut self) -> Option<K> {
        let mut node = self.0.take()?;

        match (node.left.0.take(), node.right.0.take()) {
            (None, None) => Some(node.key),
            (Some(child), None) | (None, Some(child)) => {
                self.0 = Some(child);
                Some(node.key)
            },
            (left, Some(right)) => {
                let mut right = Branch(Some(right));
                let successor = right.take_first::<B>()?;
                let removed = mem::replace(&mut node.key, successor);

                node.left = Branch(left);
                node.right = right;
                self.0 = Some(node);
                Some(removed)
            },
        }
    }

    /// Removes and returns the smallest key below this branch, splicing in its right subtree.
    pub fn take_first<B: Balance>(&mut self) -> Option<K> {
        let node = self.0.as_mut()?;

        if node.left.is_some() {
            let first = node.left.take_first::<B>();
            B::after_remove(self);
            first
        } else {
            let node = self.0.take()?;
            let Node { right, key, .. } = *node;
            *self = right;
            Some(key)
        }
    }

    /// Rotates this subtree to the right: the left child takes this node's place, and this node
    /// adopts the child's right subtree as its new left subtree.
    pub fn rotate_right(&mut self) {
        let Some(mut node) = self.0.take() else {
            return;
        };

        match node.left.0.take() {
            Some(mut pivot) => {
                node.left = mem::take(&mut pivot.right);
                pivot.right = Branch(Some(node));
                self.0 = Some(pivot);
            },
            None => self.0 = Some(node),
        }
    }

    /// Rotates this subtree to the left, the mirror image of [`rotate_right`](Self::rotate_right).
    pub fn rotate_left(&mut self) {
        let Some(mut node) = self.0.take() else {
            return;
        };

        match node.right.0.take() {
            Some(mut pivot) => {
                node.right = mem::take(&mut pivot.left);
                pivot.left = Branch(Some(node));
                self.0 = Some(pivot);
            },
            None => self.0 = Some(node),
        }
    }

    /// Rotates the left child to the left, then this subtree to the right.
    pub fn rotate_left_right(&mut self) {
        if let Some(node) = &mut self.0 {
            node.left.rotate_left();
        }
        self.rotate_right();
    }

    /// Rotates the right child to the right, then this subtree to the left.
    pub fn rotate_right_left(&mut self) {
        if let Some(node) = &mut self.0 {
            node.right.rotate_right();
        }
        self.rotate_left();
    }
}

impl<K> Default for Branch<K> {
    fn default() -> Self {
        Branch(None)
    }
}

impl<K> Deref for Branch<K> {
    type Target = Option<Box<Node<K>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K> DerefMut for Branch<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K> From<Option<Box<Node<K>>>> for Branch<K> {
    fn from(value: Option<Box<Node<K>>>) -> Self {
        Branch(value)
    }
}

impl<K: Debug> Debug for Branch<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                prefix_lines(&format!("{:?}", node.left), "┌    "),
                node.key,
                prefix_lines(&format!("{:?}", node.right), "└    "),
            ),
            None => write!(f, "-"),
        }
    }
}
