#![cfg(test)]

use super::*;
use crate::util::log::init_logging;

#[derive(Debug, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

impl TableKey for Point {}

#[test]
fn test_lose_lose_codes() {
    assert_eq!(lose_lose_code("Jonathan"), 5);
    assert_eq!(lose_lose_code("Jamie"), 5);
    assert_eq!(lose_lose_code("Sue"), 5);
    assert_eq!(lose_lose_code("Gandalf"), 19);
    assert_eq!(lose_lose_code("Ana"), lose_lose_code("Donnie"));
    assert_eq!(
        lose_lose_code("ab"),
        lose_lose_code("ba"),
        "Anagrams should always collide."
    );
    assert_eq!(lose_lose_code(""), 0);
}

#[test]
fn test_djb2_codes() {
    assert_eq!(djb2_code("Gandalf"), 798);
    assert_eq!(djb2_code("Jonathan"), 288);
    assert_eq!(djb2_code("Jamie"), 962);
    assert_eq!(djb2_code("Sue"), 502);
    assert_eq!(djb2_code(""), 5381 % DJB2_MODULUS);
}

#[test]
fn test_numeric_keys_bypass_hashing() {
    let hasher = <LoseLose>::default();
    assert_eq!(hasher.slot(&1_000_000_u32), 1_000_000);
    assert_eq!(hasher.slot(&5_i64), 5);
    assert_eq!(<Djb2>::default().slot(&42_u8), 42);

    assert_eq!(
        hasher.slot(&-5_i32),
        lose_lose_code("-5"),
        "Negative numbers should be hashed through their string form."
    );
    assert_eq!(hasher.slot("5"), lose_lose_code("5"), "Numeric strings are still strings.");
    assert_eq!(hasher.slot(&&"Gandalf"), 19);
}

#[test]
fn test_custom_stringifier() {
    let hasher = LoseLose::with_stringifier(|key: &&str| key.to_lowercase());
    assert_eq!(hasher.slot(&"AB"), lose_lose_code("ab"));

    let mut table = SeparateChainingTable::with_hasher(LoseLose::with_stringifier(
        |point: &Point| format!("{},{}", point.x, point.y),
    ));
    assert!(table.put(Point { x: 1, y: 2 }, "a"));
    assert!(table.put(Point { x: 2, y: 1 }, "b"));

    assert_eq!(table.get(&Point { x: 1, y: 2 }), Some(&"a"));
    assert_eq!(table.get(&Point { x: 2, y: 1 }), Some(&"b"));
    assert_eq!(
        table.slots().count(),
        1,
        "Both points stringify to anagrams and should share a chain."
    );
}

#[test]
fn test_direct_table_overwrites() {
    init_logging();
    let mut table = DirectTable::new();
    assert!(table.put("Jonathan", 1));
    assert!(table.put("Gandalf", 3));
    assert!(table.put("Jamie", 2));

    assert_eq!(table.get("Jonathan"), None, "A colliding put should displace the resident.");
    assert_eq!(table.get("Jamie"), Some(&2));
    assert!(!table.remove("Jonathan"), "A displaced key can't be removed.");
    assert_eq!(table.size(), 2);
    assert_eq!(table.to_string(), "{5 => [#Jamie: 2]}, {19 => [#Gandalf: 3]}");

    assert!(table.remove("Jamie"));
    assert_eq!(table.get("Jamie"), None);
    assert_eq!(table.try_put(None, Some(4)), Err(PutError::MissingKey));
    assert_eq!(table.size(), 1);
}

#[test]
fn test_dictionary_identifies_by_string() {
    let mut dict = Dictionary::new();
    assert!(dict.set(1, "one"));
    assert!(dict.set(2, "two"));

    assert!(dict.has_key("1"), "Keys should be matched through their string form.");
    assert_eq!(dict.get(&2), Some(&"two"));
    assert_eq!(dict.get("3"), None);

    assert!(dict.set(1, "uno"));
    assert_eq!(dict.size(), 2, "Setting an existing key should replace it.");
    assert_eq!(dict.keys().copied().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(dict.values().copied().collect::<Vec<_>>(), ["uno", "two"]);
}

#[test]
fn test_dictionary_remove_and_order() {
    let mut dict = Dictionary::new();
    for (i, key) in ["c", "a", "b", "d"].into_iter().enumerate() {
        dict.set(key, i);
    }

    assert!(dict.remove("a"));
    assert!(!dict.remove("a"));
    assert_eq!(
        dict.key_values().map(Entry::tuple).collect::<Vec<_>>(),
        [(&"c", &0), (&"b", &2), (&"d", &3)],
        "Removal should keep the remaining entries in insertion order."
    );
    assert_eq!(dict.to_string(), "[#c: 0], [#b: 2], [#d: 3]");

    let mut seen = Vec::new();
    dict.for_each(|key, _| {
        seen.push(*key);
        *key != "b"
    });
    assert_eq!(seen, ["c", "b"], "for_each should stop once the callback returns false.");

    dict.clear();
    assert!(dict.is_empty());
    assert_eq!(dict.to_string(), "");
}

#[test]
fn test_dictionary_missing_halves() {
    let mut dict: Dictionary<&str, u8> = Dictionary::new();
    assert_eq!(dict.try_set(None, Some(1)), Err(PutError::MissingKey));
    assert_eq!(dict.try_set(Some("key"), None), Err(PutError::MissingValue));
    assert!(dict.is_empty());
}

fn exercise<T: Table<&'static str, u32>>(mut table: T) {
    let keys = ["Jonathan", "Gandalf", "Ana", "Tyrion"];
    for (i, key) in keys.into_iter().enumerate() {
        assert!(table.put(key, i as u32));
    }
    assert_eq!(table.size(), keys.len());

    for (i, key) in keys.iter().enumerate() {
        assert_eq!(table.get(key), Some(&(i as u32)));
    }
    assert!(table.remove(&"Ana"));
    assert!(!table.remove(&"Ana"));
    assert_eq!(table.get(&"Ana"), None);
    assert_eq!(table.size(), keys.len() - 1);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.get(&"Jonathan"), None);
}

#[test]
fn test_every_table_through_trait() {
    exercise(SeparateChainingTable::new());
    exercise(LinearProbingTable::new());
    exercise(LinearProbingLazyTable::new());
    exercise(DirectTable::new());
    exercise(LinearProbingTable::with_hasher(<Djb2>::default()));
}

#[test]
fn test_put_error_display() {
    assert_eq!(
        PutError::MissingKey.to_string(),
        "Unable to store an entry without a key!"
    );
    assert_eq!(
        PutError::MissingValue.to_string(),
        "Unable to store an entry without a value!"
    );
    assert!(PutError::SlotOverflow.is_slot_overflow());
}
