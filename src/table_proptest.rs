#![cfg(test)]

// Property tests for the table engine kept inside the crate so they can
// inspect private bucket layout.

use crate::config::TableConfig;
use crate::hash::hash_text;
use crate::hash_map::HashMap;
use crate::hash_set::HashSet;
use crate::table::{Payload, Table};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// Pool-indexed operations: indices shrink to earlier keys, and op lists
// shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    Has(String),
    Remove(usize),
    Clear,
    Keys,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-zA-Z0-9]{0,6}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            3 => idx.clone().prop_map(Op::Get),
            2 => "[a-z]{0,4}".prop_map(Op::Has),
            3 => idx.clone().prop_map(Op::Remove),
            1 => Just(Op::Clear),
            1 => Just(Op::Keys),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn arb_config() -> impl Strategy<Value = TableConfig> {
    (prop_oneof![Just(0.75), 0.2f64..=1.0], 1usize..=16).prop_map(|(lf, cap)| {
        TableConfig::new().with_load_factor(lf).with_capacity(cap)
    })
}

// Structural invariants of the engine, checked after every operation:
// - bucket array length equals capacity;
// - every node lives in the bucket its key hashes to;
// - no duplicate key within the table;
// - size equals the node count;
// - the table is never left loaded after an insert.
fn check_layout<V: Payload>(t: &Table<V>) -> Result<(), TestCaseError> {
    prop_assert_eq!(t.bucket_count(), t.capacity());
    let mut seen = BTreeSet::new();
    let mut total = 0usize;
    for (index, chain) in t.chains() {
        for node in chain.iter() {
            prop_assert_eq!(hash_text(node.key(), t.capacity()), index);
            prop_assert!(seen.insert(node.key().to_string()), "duplicate key {}", node.key());
            total += 1;
        }
    }
    prop_assert_eq!(total, t.len());
    prop_assert!(!t.is_loaded());
    Ok(())
}

// Property: state-machine equivalence of HashMap against BTreeMap, with
// layout invariants checked after each step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_map_matches_model((pool, ops) in arb_scenario(), config in arb_config()) {
        let mut sut = HashMap::with_config(config).unwrap();
        let mut model: BTreeMap<String, String> = BTreeMap::new();
        let mut capacity = sut.capacity();

        for op in ops {
            match op {
                Op::Set(i, v) => {
                    sut.set(&pool[i], v).unwrap();
                    model.insert(pool[i].clone(), v.to_string());
                }
                Op::Get(i) => {
                    let got = sut.get(&pool[i]).unwrap();
                    prop_assert_eq!(got, model.get(&pool[i]).map(String::as_str));
                }
                Op::Has(s) => {
                    prop_assert_eq!(sut.has(&s).unwrap(), model.contains_key(&s));
                }
                Op::Remove(i) => {
                    let removed = sut.remove(&pool[i]).unwrap();
                    prop_assert_eq!(removed, model.remove(&pool[i]).is_some());
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Keys => {
                    let keys: BTreeSet<String> = sut.keys().into_iter().collect();
                    let expected: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(keys, expected);
                    let entries: BTreeMap<String, String> = sut.entries().into_iter().collect();
                    prop_assert_eq!(&entries, &model);
                }
            }

            // Capacity only ever grows, by powers of two.
            prop_assert!(sut.capacity() >= capacity);
            prop_assert_eq!(sut.capacity() % capacity, 0);
            prop_assert!((sut.capacity() / capacity).is_power_of_two());
            capacity = sut.capacity();

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            check_layout(&sut.table)?;
        }
    }
}

// Property: HashSet agrees with BTreeSet under the same operation mix.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_set_matches_model((pool, ops) in arb_scenario(), config in arb_config()) {
        let mut sut = HashSet::with_config(config).unwrap();
        let mut model: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Set(i, _) => {
                    sut.add(&pool[i]).unwrap();
                    model.insert(pool[i].clone());
                }
                Op::Get(i) => {
                    prop_assert_eq!(sut.has(&pool[i]).unwrap(), model.contains(&pool[i]));
                }
                Op::Has(s) => {
                    prop_assert_eq!(sut.has(&s).unwrap(), model.contains(&s));
                }
                Op::Remove(i) => {
                    prop_assert_eq!(sut.remove(&pool[i]).unwrap(), model.remove(&pool[i]));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Keys => {
                    let keys: BTreeSet<String> = sut.keys().into_iter().collect();
                    prop_assert_eq!(&keys, &model);
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            check_layout(&sut.table)?;
        }
    }
}

// Property: the bucket index is the stepwise-modulo rolling hash.
proptest! {
    #[test]
    fn prop_hash_is_stepwise_modulo(text in "\\PC{0,24}", cap in 1usize..=4096) {
        let mut h: u64 = 0;
        for unit in text.encode_utf16() {
            h = (31 * h + unit as u64) % cap as u64;
        }
        prop_assert_eq!(hash_text(&text, cap) as u64, h);
        let t: Table<()> = Table::with_config(TableConfig::new().with_capacity(cap)).unwrap();
        prop_assert_eq!(t.hash(&text), h as usize);
    }
}
