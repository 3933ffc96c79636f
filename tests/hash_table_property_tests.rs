//! Property-based tests для HashTable.
//!
//! Случайные последовательности операций сверяются с моделью на
//! `std::collections::HashMap`.

use std::collections::{HashMap, HashSet};

use chainmap::HashTable;
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 512;

/// Небольшой пул ключей, чтобы перезаписи и удаления встречались часто.
fn key(n: usize) -> String {
    format!("key-{n}")
}

#[derive(Debug, Clone)]
enum Op {
    Set(usize, i32),
    Remove(usize),
    Get(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..48, any::<i32>()).prop_map(|(k, v)| Op::Set(k, v)),
        3 => (0usize..48).prop_map(Op::Remove),
        2 => (0usize..48).prop_map(Op::Get),
        1 => Just(Op::Clear),
    ]
}

/// При `load_factor >= 0.5` одного удвоения всегда достаточно.
fn ratio_within(t: &HashTable<i32>) -> bool {
    t.length() as f64 / t.capacity() as f64 <= t.load_factor() + 1e-12
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROPTEST_CASES,
        .. ProptestConfig::default()
    })]

    /// Таблица ведёт себя как HashMap на любой последовательности операций.
    #[test]
    fn prop_behaves_like_hashmap(
        load_factor in 0.5f64..4.0,
        initial_capacity in 1usize..64,
        ops in prop::collection::vec(op_strategy(), 0..300),
    ) {
        let mut t = HashTable::new(load_factor, initial_capacity).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    let is_new = t.set(key(k), v);
                    prop_assert_eq!(is_new, model.insert(key(k), v).is_none());
                    prop_assert!(ratio_within(&t), "ratio above load factor after set");
                }
                Op::Remove(k) => {
                    let before = t.length();
                    let removed = t.remove(&key(k));
                    prop_assert_eq!(removed, model.remove(&key(k)).is_some());
                    if !removed {
                        prop_assert_eq!(t.length(), before);
                    }
                    prop_assert!(!t.has(&key(k)));
                }
                Op::Get(k) => {
                    prop_assert_eq!(t.get(&key(k)), model.get(&key(k)));
                    prop_assert_eq!(t.has(&key(k)), model.contains_key(&key(k)));
                }
                Op::Clear => {
                    let capacity = t.capacity();
                    t.clear();
                    model.clear();
                    prop_assert_eq!(t.capacity(), capacity);
                }
            }

            prop_assert_eq!(t.length(), model.len());
        }

        for (k, v) in &model {
            prop_assert_eq!(t.get(k), Some(v));
        }

        let keys: HashSet<String> = t.keys().into_iter().collect();
        let expected: HashSet<String> = model.keys().cloned().collect();
        prop_assert_eq!(keys.len(), t.length(), "keys() returned duplicates");
        prop_assert_eq!(keys, expected);
    }

    /// Рост не теряет и не дублирует записи.
    #[test]
    fn prop_growth_keeps_entries(
        initial_capacity in 1usize..8,
        n in 0usize..500,
    ) {
        let mut t = HashTable::new(0.75, initial_capacity).unwrap();

        for i in 0..n {
            t.set(key(i), i as i32);
        }

        prop_assert_eq!(t.length(), n);
        prop_assert_eq!(t.iter().count(), n);
        prop_assert!(ratio_within(&t));
        prop_assert!(t.capacity() >= initial_capacity);
        prop_assert!(t.capacity().is_power_of_two() || !initial_capacity.is_power_of_two());

        for i in 0..n {
            prop_assert_eq!(t.get(&key(i)), Some(&(i as i32)));
        }
    }

    /// После clear ни один из прежних ключей не найден.
    #[test]
    fn prop_clear_forgets_everything(keys in prop::collection::hash_set("[a-z]{0,8}", 0..64)) {
        let mut t = HashTable::with_defaults();
        for k in &keys {
            t.set(k.as_str(), 1);
        }
        let capacity = t.capacity();

        t.clear();

        prop_assert_eq!(t.length(), 0);
        prop_assert_eq!(t.capacity(), capacity);
        for k in &keys {
            prop_assert!(!t.has(k));
        }
    }
}
