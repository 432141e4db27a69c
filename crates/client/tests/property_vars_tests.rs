//! Property tests for the variable merge filter.

use std::collections::BTreeMap;

use fleet_client::reconcile::vars::retain_declared;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn to_map(entries: &BTreeMap<String, i64>) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.clone(), Value::from(*v)))
        .collect()
}

proptest! {
    /// The filtered key set is exactly keys(declared) ∩ keys(observed),
    /// with every value taken from the observed side.
    #[test]
    fn prop_filter_key_set_is_intersection(
        declared in proptest::collection::btree_map("[a-e]{1,3}", -100i64..100, 0..8),
        observed in proptest::collection::btree_map("[a-e]{1,3}", -100i64..100, 0..8),
    ) {
        let declared_map = to_map(&declared);
        let observed_map = to_map(&observed);

        let filtered = retain_declared(&declared_map, &observed_map);

        for (key, value) in &filtered {
            prop_assert!(declared.contains_key(key));
            prop_assert_eq!(observed_map.get(key), Some(value));
        }
        for key in observed.keys() {
            prop_assert_eq!(filtered.contains_key(key), declared.contains_key(key));
        }
    }

    /// Filtering is idempotent: running the filter twice changes nothing.
    #[test]
    fn prop_filter_is_idempotent(
        declared in proptest::collection::btree_map("[a-e]{1,3}", -100i64..100, 0..8),
        observed in proptest::collection::btree_map("[a-e]{1,3}", -100i64..100, 0..8),
    ) {
        let declared_map = to_map(&declared);
        let observed_map = to_map(&observed);

        let once = retain_declared(&declared_map, &observed_map);
        let twice = retain_declared(&declared_map, &once);
        prop_assert_eq!(once, twice);
    }
}
