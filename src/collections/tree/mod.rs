//! Binary search trees over keys ordered by a [`Comparator`](super::compare::Comparator).
//!
//! [`BinarySearchTree`] and [`AvlTree`] share the same node layout and the same recursive descent
//! for every operation. They differ only in the step applied to each ancestor as an insertion or
//! removal unwinds: the plain tree leaves ancestors alone, while the AVL tree rotates any ancestor
//! whose subtrees have grown two levels apart.
//!
//! Traversals are available both as iterators ([`in_order`](BinarySearchTree::in_order) and
//! friends) and as callbacks ([`in_order_traverse`](BinarySearchTree::in_order_traverse) and
//! friends). Neither recurses, so traversing even a degenerate tree can't exhaust the call stack.

mod avl;
mod balance;
mod bst;
mod iter;
mod node;
mod tests;

pub use avl::*;
pub use balance::BalanceFactor;
pub use bst::*;
pub use iter::*;
