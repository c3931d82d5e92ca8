use derive_more::{Display, IsVariant};

use crate::collections::compare::Comparison;

use super::node::Branch;

/// The classification of a node by its balance factor, the height of its left subtree minus the
/// height of its right subtree.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum BalanceFactor {
    /// The left subtree is two or more levels taller.
    UnbalancedLeft,
    SlightLeft,
    Balanced,
    SlightRight,
    /// The right subtree is two or more levels taller.
    UnbalancedRight,
}

impl BalanceFactor {
    pub const fn from_difference(difference: isize) -> BalanceFactor {
        match difference {
            ..=-2 => BalanceFactor::UnbalancedRight,
            -1 => BalanceFactor::SlightRight,
            0 => BalanceFactor::Balanced,
            1 => BalanceFactor::SlightLeft,
            2.. => BalanceFactor::UnbalancedLeft,
        }
    }

    pub(crate) fn of<K>(branch: &Branch<K>) -> BalanceFactor {
        BalanceFactor::from_difference(branch.balance_factor())
    }
}

/// The step applied to each ancestor of a changed node as a mutation unwinds.
pub(crate) trait Balance {
    /// Called after a key was inserted into the subtree at `branch`. `child_side` is how the
    /// inserted key compared to the key of the child it was inserted below.
    fn after_insert<K>(branch: &mut Branch<K>, child_side: Comparison);

    /// Called after a key was removed from the subtree at `branch`.
    fn after_remove<K>(branch: &mut Branch<K>);
}

/// Leaves the tree exactly as the mutation shaped it.
pub(crate) struct Unbalanced;

impl Balance for Unbalanced {
    fn after_insert<K>(_: &mut Branch<K>, _: Comparison) {}

    fn after_remove<K>(_: &mut Branch<K>) {}
}

/// Restores the AVL property with at most one single or double rotation per ancestor.
pub(crate) struct Avl;

impl Balance for Avl {
    fn after_insert<K>(branch: &mut Branch<K>, child_side: Comparison) {
        match BalanceFactor::of(branch) {
            BalanceFactor::UnbalancedLeft if child_side.is_less() => {
                log::trace!("rebalancing insertion with a right rotation");
                branch.rotate_right();
            },
            BalanceFactor::UnbalancedLeft => {
                log::trace!("rebalancing insertion with a left-right rotation");
                branch.rotate_left_right();
            },
            BalanceFactor::UnbalancedRight if child_side.is_greater() => {
                log::trace!("rebalancing insertion with a left rotation");
                branch.rotate_left();
            },
            BalanceFactor::UnbalancedRight => {
                log::trace!("rebalancing insertion with a right-left rotation");
                branch.rotate_right_left();
            },
            _ => {},
        }
    }

    fn after_remove<K>(branch: &mut Branch<K>) {
        let Some(node) = &branch.0 else {
            return;
        };

        match BalanceFactor::of(branch) {
            BalanceFactor::UnbalancedLeft => {
                if BalanceFactor::of(&node.left).is_slight_right() {
                    log::trace!("rebalancing removal with a left-right rotation");
                    branch.rotate_left_right();
                } else {
                    log::trace!("rebalancing removal with a right rotation");
                    branch.rotate_right();
                }
            },
            BalanceFactor::UnbalancedRight => {
                if BalanceFactor::of(&node.right).is_slight_left() {
                    log::trace!("rebalancing removal with a right-left rotation");
                    branch.rotate_right_left();
                } else {
                    log::trace!("rebalancing removal with a left rotation");
                    branch.rotate_left();
                }
            },
            _ => {},
        }
    }
}
