//! Property-based tests for the round-trip guarantees of the codec.

use proptest::prelude::*;
use serde_hstore::{parse, to_string, HstoreMap, Pair};

fn pair_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    (any::<String>(), proptest::option::of(any::<String>()))
}

proptest! {
    #[test]
    fn prop_pairs_roundtrip(pairs in prop::collection::vec(pair_strategy(), 0..20)) {
        let hstore = to_string(&pairs).unwrap();
        let back: Vec<(String, Option<String>)> =
            parse(&hstore).unwrap().into_iter().map(Into::into).collect();
        prop_assert_eq!(back, pairs);
    }

    #[test]
    fn prop_quote_and_backslash_heavy(key in "[\"\\\\a]{0,12}", value in "[\"\\\\b]{0,12}") {
        let hstore = to_string(&[(&key, &value)]).unwrap();
        prop_assert_eq!(parse(&hstore).unwrap(), vec![Pair::new(key, Some(value))]);
    }

    #[test]
    fn prop_map_roundtrip(pairs in prop::collection::vec(pair_strategy(), 0..20)) {
        let map: HstoreMap = pairs.into_iter().collect();
        let back: HstoreMap = serde_hstore::from_str(&to_string(&map).unwrap()).unwrap();
        prop_assert_eq!(back, map);
    }

    #[test]
    fn prop_parse_never_panics(input in ".{0,64}") {
        let _ = parse(&input);
    }
}
