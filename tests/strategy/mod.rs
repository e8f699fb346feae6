use crate::util::lookup::{find_concurrent, gen_records, records, Record};
use entry_lookup::{AnyLookup, EntryLookup, LookupError, Strategy};
use rand::thread_rng;

#[test]
fn test_build_each_strategy() {
    for strategy in Strategy::ALL {
        let lookup = AnyLookup::build(strategy, records(vec![1, 3, 5, 7, 9]));

        assert_eq!(lookup.strategy(), strategy);
        assert_eq!(lookup.len(), 5);
        assert_eq!(lookup.find(&7), Ok(&Record { key: 7, seq: 3 }));
        assert_eq!(lookup.find(&4), Err(LookupError::NotFound));
        assert_eq!(lookup.entries().len(), 5);
    }
}

#[test]
fn test_duplicates_per_strategy() {
    let linear = AnyLookup::build(Strategy::Linear, records(vec![1, 1]));
    let hash = AnyLookup::build(Strategy::Hash, records(vec![1, 1]));

    assert_eq!(linear.find(&1).map(|r| r.seq), Ok(0));
    assert_eq!(hash.find(&1).map(|r| r.seq), Ok(1));
}

#[test]
fn test_strategy_from_config_string() {
    let strategy: Strategy = "sorted-binary".parse().unwrap();
    let lookup = AnyLookup::build(strategy, records(vec!["a".to_string(), "b".to_string()]));

    assert!(matches!(lookup, AnyLookup::SortedBinary(_)));
    assert!(lookup.contains_key(&"b".to_string()));
    assert!("trie".parse::<Strategy>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_strategy_serde() {
    assert_eq!(
        serde_json::to_string(&Strategy::SortedBinary).unwrap(),
        "\"sorted-binary\""
    );
    assert_eq!(
        serde_json::from_str::<Strategy>("\"hash\"").unwrap(),
        Strategy::Hash
    );
}

#[test]
fn test_concurrent_any() {
    let source = gen_records::<u64>(&mut thread_rng(), 1_000, true);

    for strategy in Strategy::ALL {
        let lookup = AnyLookup::build(strategy, source.iter().cloned());
        find_concurrent(&lookup, &source, num_cpus::get());
    }
}
