#![cfg(test)]

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::collections::compare::Comparison;
use crate::util::alloc::CountedDrop;
use crate::util::log::init_logging;

fn pre_order<K: Copy, C>(tree: &AvlTree<K, C>) -> Vec<K> {
    tree.pre_order().copied().collect()
}

#[test]
fn test_single_rotations_on_insert() {
    init_logging();
    let left_heavy = AvlTree::from_iter([3, 2, 1]);
    assert_eq!(
        pre_order(&left_heavy),
        [2, 1, 3],
        "Inserting in descending order should trigger a right rotation."
    );

    let right_heavy = AvlTree::from_iter([1, 2, 3]);
    assert_eq!(
        pre_order(&right_heavy),
        [2, 1, 3],
        "Inserting in ascending order should trigger a left rotation."
    );
    assert_eq!(right_heavy.height(), 1);
    assert!(right_heavy.balance_factor().is_balanced());
}

#[test]
fn test_double_rotations_on_insert() {
    let left_right = AvlTree::from_iter([3, 1, 2]);
    assert_eq!(pre_order(&left_right), [2, 1, 3]);

    let right_left = AvlTree::from_iter([1, 3, 2]);
    assert_eq!(pre_order(&right_left), [2, 1, 3]);
}

#[test]
fn test_rotations_on_remove() {
    init_logging();

    let mut tree = AvlTree::from_iter([2, 1, 3, 4]);
    assert!(tree.remove(&1));
    assert_eq!(pre_order(&tree), [3, 2, 4], "A right-leaning child should need one rotation.");

    let mut tree = AvlTree::from_iter([2, 1, 4, 3]);
    assert!(tree.remove(&1));
    assert_eq!(pre_order(&tree), [3, 2, 4], "A left-leaning right child needs two rotations.");

    let mut tree = AvlTree::from_iter([3, 1, 4, 2]);
    assert!(tree.remove(&4));
    assert_eq!(pre_order(&tree), [2, 1, 3]);

    let mut tree = AvlTree::from_iter([2, 1, 4, 3, 5]);
    assert!(tree.remove(&1));
    assert_eq!(
        pre_order(&tree),
        [4, 2, 3, 5],
        "A balanced child should be handled with a single rotation."
    );
    assert!(tree.is_balanced());
}

#[test]
fn test_plain_tree_never_rotates() {
    let tree = BinarySearchTree::from_iter([3, 2, 1]);
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(tree.height(), 2);
    assert!(!tree.is_balanced());
}

#[test]
fn test_duplicates_are_absorbed() {
    let mut tree = BinarySearchTree::new();
    assert!(tree.insert(5));
    assert!(!tree.insert(5), "An equal key shouldn't be inserted twice.");
    assert_eq!(tree.len(), 1);

    let mut avl = AvlTree::new();
    assert!(avl.insert("b"));
    assert!(!avl.insert("b"));
    assert_eq!(avl.len(), 1);
}

#[test]
fn test_remove_cases() {
    let mut tree = BinarySearchTree::from_iter([50, 30, 70, 20, 40, 60, 80]);

    assert!(tree.remove(&20));
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [50, 30, 40, 70, 60, 80],
        "A leaf should simply be cleared."
    );

    assert!(tree.remove(&30));
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [50, 40, 70, 60, 80],
        "A node with one child should be replaced by that child."
    );

    assert!(tree.remove(&50));
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [60, 40, 70, 80],
        "A node with two children should take its in-order successor's key."
    );

    assert!(!tree.remove(&50));
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.take(&70), Some(70));
}

#[test]
fn test_search_min_max() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.height(), -1);

    tree.extend([11, 7, 15, 5, 3, 9, 8, 10, 13, 12, 14, 20, 18, 25]);
    assert_eq!(tree.min(), Some(&3));
    assert_eq!(tree.max(), Some(&25));
    assert!(tree.search(&13));
    assert!(!tree.search(&1));
    assert_eq!(tree.get(&8), Some(&8));
}

#[test]
fn test_traversals() {
    let tree = AvlTree::from_iter([2, 1, 3]);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 3, 2]);

    let mut visited = Vec::new();
    tree.pre_order_traverse(|key| visited.push(*key));
    tree.in_order_traverse(|key| visited.push(*key));
    tree.post_order_traverse(|key| visited.push(*key));
    assert_eq!(visited, [2, 1, 3, 1, 2, 3, 1, 3, 2]);

    let in_order: Vec<_> = tree.in_order().collect();
    let restarted: Vec<_> = (&tree).into_iter().collect();
    assert_eq!(in_order, restarted, "Traversals should be restartable.");
    assert_eq!(tree.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_custom_comparator() {
    let descending = |a: &i32, b: &i32| Comparison::from(b.cmp(a));
    let mut tree = AvlTree::with_comparator(descending);
    tree.extend([4, 8, 1, 6, 2]);

    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [8, 6, 4, 2, 1]);
    assert_eq!(tree.min(), Some(&8), "min should follow the comparator, not Ord.");
    assert!(tree.remove(&8));
    assert_eq!(tree.min(), Some(&6));
}

#[test]
fn test_clear() {
    let mut tree = BinarySearchTree::from_iter(0..100);
    let mut avl = AvlTree::from_iter(0..100);

    tree.clear();
    avl.clear();
    assert!(tree.is_empty() && avl.is_empty());
    assert_eq!(tree.in_order().next(), None);
    assert_eq!(avl.height(), -1);
}

#[test]
fn test_degenerate_tree() {
    let tree = BinarySearchTree::from_iter(0..2_000);
    assert_eq!(tree.height(), 1_999);
    assert_eq!(tree.in_order().count(), 2_000);
    assert_eq!(tree.post_order().next(), Some(&1_999));
    // Dropping must not recurse through 2000 nodes.
    drop(tree);
}

#[test]
fn test_keys_dropped_once() {
    let counter = CountedDrop::counter();
    let by_id = |a: &(u8, CountedDrop), b: &(u8, CountedDrop)| Comparison::from(a.0.cmp(&b.0));

    let mut tree = AvlTree::with_comparator(by_id);
    for id in 0..10 {
        tree.insert((id, CountedDrop::new(&counter)));
    }
    assert!(!tree.insert((3, CountedDrop::new(&counter))));
    assert_eq!(*counter.borrow(), 1, "A rejected key should be dropped immediately.");

    assert!(tree.remove(&(4, CountedDrop::new(&counter))));
    assert_eq!(*counter.borrow(), 3, "The probe and the removed key should both be dropped.");

    drop(tree);
    assert_eq!(*counter.borrow(), 12);
}

#[test]
fn test_debug_shows_shape() {
    let tree = AvlTree::from_iter([1, 2, 3]);
    let rendered = format!("{tree:?}");
    assert!(rendered.contains("┌    (1)"), "{rendered}");
    assert!(rendered.contains("\n(2)\n"), "{rendered}");
    assert!(rendered.contains("└    (3)"), "{rendered}");
}

#[test]
fn test_avl_matches_model() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0xa71);
    let mut tree = AvlTree::new();
    let mut model = BTreeSet::new();

    for step in 0..3_000 {
        let key: u16 = rng.gen_range(0..256);
        if rng.gen_bool(0.6) {
            assert_eq!(tree.insert(key), model.insert(key));
        } else {
            assert_eq!(tree.remove(&key), model.remove(&key));
        }

        assert!(tree.is_balanced(), "Tree became unbalanced at step {step}.");
        assert_eq!(tree.len(), model.len());
    }

    assert!(tree.in_order().eq(model.iter()), "In-order traversal should be ascending.");
    assert_eq!(tree.min(), model.first());
    assert_eq!(tree.max(), model.last());
}

#[test]
fn test_bst_in_order_is_sorted() {
    let mut rng = StdRng::seed_from_u64(0xb57);
    let mut tree = BinarySearchTree::new();
    let mut model = BTreeSet::new();

    for _ in 0..1_000 {
        let key: i32 = rng.gen_range(-500..500);
        tree.insert(key);
        model.insert(key);
        if rng.gen_bool(0.3) {
            let victim = rng.gen_range(-500..500);
            assert_eq!(tree.remove(&victim), model.remove(&victim));
        }
    }

    let keys: Vec<_> = tree.in_order().copied().collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "Keys should be strictly ascending.");
    assert_eq!(keys, model.into_iter().collect::<Vec<_>>());
}
