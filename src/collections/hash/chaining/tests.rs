#![cfg(test)]

use super::*;
use crate::collections::hash::{DisplayStringifier, LoseLose, PutError, lose_lose_code};
use crate::util::log::init_logging;

#[test]
fn test_colliding_keys_share_a_chain() {
    init_logging();
    let mut table = SeparateChainingTable::new();
    assert_eq!(lose_lose_code("Jonathan"), lose_lose_code("Jamie"));
    assert_eq!(lose_lose_code("Jamie"), lose_lose_code("Sue"));

    assert!(table.put("Jonathan", "jonathan@email.com"));
    assert!(table.put("Jamie", "jamie@email.com"));
    assert!(table.put("Sue", "sue@email.com"));
    assert!(table.put("Gandalf", "gandalf@email.com"));

    assert_eq!(table.size(), 4);
    assert_eq!(
        table.slots().map(|(index, chain)| (index, chain.len())).collect::<Vec<_>>(),
        [(5, 3), (19, 1)],
        "Colliding keys should be chained within a single slot."
    );
    assert_eq!(table.get("Jamie"), Some(&"jamie@email.com"));
    assert_eq!(table.get("Sue"), Some(&"sue@email.com"));
    assert_eq!(table.get("Frodo"), None);
}

#[test]
fn test_duplicate_keys_are_chained() {
    let mut table = SeparateChainingTable::new();
    table.put("key", 1);
    table.put("key", 2);

    assert_eq!(table.size(), 2, "Duplicate keys should not be deduplicated.");
    assert_eq!(table.get("key"), Some(&1), "The first inserted entry should win.");

    assert!(table.remove("key"));
    assert_eq!(
        table.get("key"),
        Some(&2),
        "Removing should expose the next entry for the same key."
    );
    assert!(table.remove("key"));
    assert!(!table.remove("key"));
}

#[test]
fn test_emptied_chains_are_dropped() {
    init_logging();
    let mut table = SeparateChainingTable::new();
    table.put("Jonathan", 1);
    table.put("Jamie", 2);

    assert!(table.remove("Jonathan"));
    assert_eq!(table.slots().count(), 1);
    assert!(table.remove("Jamie"));
    assert_eq!(
        table.slots().count(),
        0,
        "A chain should be removed from the table once it is empty."
    );
    assert!(table.is_empty());

    assert!(!table.remove("Jamie"), "Removing from an absent slot should fail.");
}

#[test]
fn test_remove_keeps_other_chain_members() {
    let mut table = SeparateChainingTable::new();
    table.put("Jonathan", 1);
    table.put("Jamie", 2);
    table.put("Sue", 3);

    assert!(table.remove("Jamie"));
    assert_eq!(table.get("Jonathan"), Some(&1));
    assert_eq!(table.get("Jamie"), None);
    assert_eq!(table.get("Sue"), Some(&3));
    assert_eq!(table.size(), 2);
}

#[test]
fn test_missing_halves_are_rejected() {
    let mut table: SeparateChainingTable<&str, u32> = SeparateChainingTable::new();

    assert_eq!(table.try_put(None, Some(1)), Err(PutError::MissingKey));
    assert_eq!(table.try_put(Some("key"), None), Err(PutError::MissingValue));
    assert!(table.is_empty(), "Rejected puts should leave the table untouched.");
    assert_eq!(table.try_put(Some("key"), Some(1)), Ok(()));
}

#[test]
fn test_numeric_keys_use_their_own_slot() {
    let mut table = SeparateChainingTable::new();
    table.put(1_000_u32, "thousand");
    table.put(5_u32, "five");

    assert_eq!(
        table.slots().map(|(index, _)| index).collect::<Vec<_>>(),
        [5, 1_000],
        "Numeric keys should bypass hashing and the modulus."
    );
    assert_eq!(table.get(&1_000), Some(&"thousand"));
}

#[test]
fn test_string_keys_borrow() {
    let mut table = SeparateChainingTable::with_hasher(LoseLose::<DisplayStringifier>::default());
    table.put(String::from("Ana"), 1);
    table.put(String::from("Donnie"), 2);

    assert_eq!(table.get("Ana"), Some(&1), "Lookups should accept a borrowed key.");
    assert!(table.contains_key("Donnie"));
    assert_eq!(table.remove_entry("Ana").map(|e| e.value), Some(1));
}

#[test]
fn test_display_and_clear() {
    let mut table = SeparateChainingTable::new();
    assert_eq!(table.to_string(), "");

    table.put("Jonathan", 1);
    table.put("Jamie", 2);
    table.put("Gandalf", 3);
    assert_eq!(
        table.to_string(),
        "{5 => [#Jonathan: 1], [#Jamie: 2]}, {19 => [#Gandalf: 3]}"
    );

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.size(), 0);
}
