// Property tests for ChainTable kept inside the crate so they can use the
// test-only invariant checker.

use crate::chain_table::{ChainTable, EntryKey};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Remove(usize),
    Find(usize),
    Mutate(usize, i32),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    let pool = proptest::collection::hash_set("[A-Z][a-z]{0,4}", 1..=40)
        .prop_map(|s| s.into_iter().collect::<Vec<_>>());
    (0usize..=16, pool).prop_flat_map(|(cap, pool)| {
        let n = pool.len();
        let op = prop_oneof![
            3 => (0..n, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            1 => (0..n).prop_map(Op::Remove),
            1 => (0..n).prop_map(Op::Find),
            1 => (0..n, any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// - get_or_insert_with creates once; later calls return the same stable key.
// - Keys handed out survive growth and resolve to the model's value.
// - remove returns the owned pair and the key stops resolving.
// - After every op: each entry sits in the bucket its headword hashes to,
//   len matches the model, load factor <= 3/4, capacity = initial * 2^k.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let mut sut: ChainTable<i32> = ChainTable::with_capacity(cap);
        let initial = sut.capacity();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut keys: HashMap<String, EntryKey> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let hw = &pool[i];
                    let (key, created) = sut.get_or_insert_with(hw, || v);
                    prop_assert_eq!(created, !model.contains_key(hw));
                    if created {
                        model.insert(hw.clone(), v);
                        keys.insert(hw.clone(), key);
                    } else {
                        prop_assert_eq!(Some(&key), keys.get(hw));
                    }
                }
                Op::Remove(i) => {
                    let hw = &pool[i];
                    let got = sut.remove(hw);
                    let want = model.remove(hw).map(|v| (hw.clone(), v));
                    prop_assert_eq!(got, want);
                    if let Some(stale) = keys.remove(hw) {
                        prop_assert!(sut.headword(stale).is_none());
                    }
                }
                Op::Find(i) => {
                    let hw = &pool[i];
                    prop_assert_eq!(sut.find(hw), keys.get(hw).copied());
                    prop_assert_eq!(sut.get(hw), model.get(hw));
                }
                Op::Mutate(i, d) => {
                    let hw = &pool[i];
                    if let Some(v) = sut.get_mut(hw) {
                        *v = v.wrapping_add(d);
                    }
                    if let Some(v) = model.get_mut(hw) {
                        *v = v.wrapping_add(d);
                    }
                }
            }

            sut.assert_invariants();
            prop_assert_eq!(sut.len(), model.len());
            let ratio = sut.capacity() / initial;
            prop_assert_eq!(ratio * initial, sut.capacity());
            prop_assert!(ratio.is_power_of_two());
        }

        for (hw, key) in &keys {
            prop_assert_eq!(sut.headword(*key), Some(hw.as_str()));
            prop_assert_eq!(sut[*key], model[hw]);
        }
    }
}
