//! Tests for the enum-keyed table lookup strategies

use super::code::{get_variants, Lookup};
use super::data::{Currency, ENTRIES};

/// Verify every variant returns exactly the table's record for every key,
/// and keeps returning it.
pub fn verify_all() -> Result<(), String> {
    for variant in get_variants() {
        let lookup = variant.function.build(&ENTRIES);

        for (key, expected) in &ENTRIES {
            let actual = lookup
                .at(key)
                .map_err(|e| format!("Variant '{}' failed for {:?}: {}", variant.name, key, e))?;

            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for {:?}: expected {:?}, got {:?}",
                    variant.name, key, expected, actual
                ));
            }

            let again = lookup
                .at(key)
                .map_err(|e| format!("Variant '{}' failed for {:?}: {}", variant.name, key, e))?;
            if again.conversion.to_bits() != actual.conversion.to_bits() || again.label != actual.label
            {
                return Err(format!(
                    "Variant '{}' is not idempotent for {:?}",
                    variant.name, key
                ));
            }
        }
    }

    let labels: Vec<&str> = Currency::ALL.iter().map(|k| k.label()).collect();
    let table_labels: Vec<&str> = ENTRIES.iter().map(|(_, r)| r.label).collect();
    if labels != table_labels {
        return Err("Key labels out of sync with table order".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::enum_table::code::{
        dispatch_raw, ConstMap, HashLookup, Lookup, Strategy, TreeLookup,
    };
    use crate::lookup::enum_table::data::{Record, TABLE};

    fn two_entries() -> [(Currency, Record); 2] {
        [
            (Currency::T1, Record { conversion: 1.0, label: "t1" }),
            (Currency::T2, Record { conversion: 2.0, label: "t2" }),
        ]
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_strategies_agree_on_every_key() {
        let strategies: Vec<_> = get_variants()
            .into_iter()
            .map(|v| (v.name, v.function.build(&ENTRIES)))
            .collect();

        for key in Currency::ALL {
            let reference = strategies[0].1.at(&key).unwrap();
            for (name, lookup) in &strategies {
                assert_eq!(lookup.at(&key).unwrap(), reference, "{}: {:?}", name, key);
            }
        }
    }

    #[test]
    fn test_two_entry_table() {
        let entries = two_entries();
        let linear = ConstMap::new(entries);
        let tree = TreeLookup::from_entries(&entries);
        let hash = HashLookup::from_entries(&entries);
        let maps: [(&str, &dyn Lookup<Currency, Record>); 3] =
            [("linear", &linear), ("tree", &tree), ("hash", &hash)];

        for (name, map) in maps {
            assert_eq!(map.at(&Currency::T1), Ok(&entries[0].1), "{}", name);
            assert_eq!(map.at(&Currency::T2), Ok(&entries[1].1), "{}", name);
            assert!(map.at(&Currency::Eur).unwrap_err().is_not_found(), "{}", name);
        }
    }

    #[test]
    fn test_runtime_structures_for_every_prefix() {
        for n in 0..=ENTRIES.len() {
            let prefix = &TABLE[..n];
            for strategy in [Strategy::OrderedTree, Strategy::HashTable] {
                let lookup = strategy.build(prefix);
                for (i, (key, record)) in ENTRIES.iter().enumerate() {
                    if i < n {
                        assert_eq!(lookup.at(key), Ok(record), "{:?} n={}", strategy, n);
                    } else {
                        assert!(
                            lookup.at(key).unwrap_err().is_not_found(),
                            "{:?} n={} key={:?}",
                            strategy,
                            n,
                            key
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_entry_linear_map() {
        let map = ConstMap::new([ENTRIES[Currency::Jap.index()]]);
        assert_eq!(map.at(&Currency::Jap).map(|r| r.label), Ok("jap"));
        assert!(map.at(&Currency::Eur).is_err());
    }

    #[test]
    fn test_unknown_raw_key_is_error() {
        assert!(dispatch_raw(200).is_err());
    }
}
