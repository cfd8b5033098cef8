//! Hash table lookup (`HashMap` with the default SipHash hasher).

use std::collections::HashMap;
use std::hash::Hash;

use super::Lookup;
use crate::error::{LookupError, Result};

#[derive(Clone, Debug, Default)]
pub struct HashLookup<K, V> {
    map: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V: Clone> HashLookup<K, V> {
    /// Bulk-build from (key, value) pairs.
    pub fn from_entries(entries: &[(K, V)]) -> Self {
        entries.iter().cloned().collect()
    }
}

impl<K, V> HashLookup<K, V> {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for HashLookup<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash + std::fmt::Debug, V> Lookup<K, V> for HashLookup<K, V> {
    #[inline]
    fn at(&self, key: &K) -> Result<&V> {
        self.map.get(key).ok_or_else(|| LookupError::not_found(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::enum_table::data::{Currency, Record, ENTRIES};

    #[test]
    fn test_full_table() {
        let map = HashLookup::from_entries(&ENTRIES);
        assert_eq!(map.len(), ENTRIES.len());
        for (key, record) in &ENTRIES {
            assert_eq!(map.at(key), Ok(record));
        }
    }

    #[test]
    fn test_missing_key() {
        let map = HashLookup::from_entries(&[
            (Currency::T1, Record { conversion: 1.0, label: "t1" }),
            (Currency::T2, Record { conversion: 2.0, label: "t2" }),
        ]);
        assert_eq!(map.at(&Currency::T1).map(|r| r.conversion), Ok(1.0));
        let err = map.at(&Currency::Eur).unwrap_err();
        assert_eq!(
            err,
            LookupError::KeyNotFound {
                key: "Eur".to_string()
            }
        );
    }

    #[test]
    fn test_repeated_lookups_identical() {
        let map = HashLookup::from_entries(&ENTRIES);
        let first = *map.at(&Currency::T25).unwrap();
        for _ in 0..100 {
            let again = *map.at(&Currency::T25).unwrap();
            assert_eq!(first.conversion.to_bits(), again.conversion.to_bits());
            assert_eq!(first.label, again.label);
        }
    }
}
