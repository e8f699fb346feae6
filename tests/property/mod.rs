//! Properties every strategy must hold, plus the duplicate-key rule specific
//! to each one.

use crate::util::lookup::{records, Record};
use entry_lookup::{
    AnyLookup, EntryLookup, HashLookup, LinearLookup, LookupError, SortedBinaryLookup,
    Strategy as LookupStrategy,
};
use proptest::prelude::*;

/// Small key space so duplicates and misses both show up often.
fn keys_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..64, 0..80)
}

fn sorted_keys_strategy() -> impl Strategy<Value = Vec<u16>> {
    keys_strategy().prop_map(|mut keys| {
        keys.sort_unstable();
        keys
    })
}

proptest! {
    /// Property: a present key is always found, and the hit carries that key.
    #[test]
    fn prop_present_key_found(keys in sorted_keys_strategy()) {
        for strategy in LookupStrategy::ALL {
            let lookup = AnyLookup::build(strategy, records(keys.clone()));

            for key in &keys {
                let found = lookup.find(key);
                prop_assert_eq!(found.map(|r| r.key), Ok(*key), "{}", strategy);
            }
        }
    }

    /// Property: an absent key is always `NotFound`.
    #[test]
    fn prop_absent_key_not_found(keys in sorted_keys_strategy(), probe in 0u16..128) {
        prop_assume!(!keys.contains(&probe));

        for strategy in LookupStrategy::ALL {
            let lookup = AnyLookup::build(strategy, records(keys.clone()));
            prop_assert_eq!(lookup.find(&probe), Err(LookupError::NotFound));
        }
    }

    /// Property: linear lookup returns the earliest entry with the key.
    #[test]
    fn prop_linear_first_match(keys in keys_strategy(), probe in 0u16..64) {
        let lookup = LinearLookup::new(records(keys.clone()));
        let expected = keys.iter().position(|k| *k == probe);

        prop_assert_eq!(lookup.find(&probe).ok().map(|r| r.seq), expected);
    }

    /// Property: hash lookup returns the latest entry with the key.
    #[test]
    fn prop_hash_last_write_wins(keys in keys_strategy(), probe in 0u16..64) {
        let lookup = HashLookup::new(records(keys.clone()));
        let expected = keys.iter().rposition(|k| *k == probe);

        prop_assert_eq!(lookup.find(&probe).ok().map(|r| r.seq), expected);
    }

    /// Property: sorted lookup finds some entry among equal keys.
    #[test]
    fn prop_sorted_hits_equal_run(keys in sorted_keys_strategy(), probe in 0u16..64) {
        let lookup = SortedBinaryLookup::new(records(keys.clone()));

        match lookup.find(&probe) {
            Ok(Record { key, seq }) => {
                prop_assert_eq!(*key, probe);
                prop_assert_eq!(keys[*seq], probe);
            }
            Err(LookupError::NotFound) => prop_assert!(!keys.contains(&probe)),
        }
    }

    /// Property: repeated queries give the same answer.
    #[test]
    fn prop_find_idempotent(keys in sorted_keys_strategy(), probe in 0u16..64) {
        for strategy in LookupStrategy::ALL {
            let lookup = AnyLookup::build(strategy, records(keys.clone()));
            prop_assert_eq!(lookup.find(&probe), lookup.find(&probe));
        }
    }
}
