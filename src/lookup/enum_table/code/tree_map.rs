//! Balanced ordered tree lookup (`BTreeMap`).

use std::collections::BTreeMap;

use super::Lookup;
use crate::error::{LookupError, Result};

#[derive(Clone, Debug, Default)]
pub struct TreeLookup<K, V> {
    map: BTreeMap<K, V>,
}

impl<K: Ord + Clone, V: Clone> TreeLookup<K, V> {
    /// Bulk-build from (key, value) pairs.
    pub fn from_entries(entries: &[(K, V)]) -> Self {
        entries.iter().cloned().collect()
    }
}

impl<K, V> TreeLookup<K, V> {
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeLookup<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + std::fmt::Debug, V> Lookup<K, V> for TreeLookup<K, V> {
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
        let tree = TreeLookup::from_entries(&ENTRIES);
        assert_eq!(tree.len(), ENTRIES.len());
        for (key, record) in &ENTRIES {
            assert_eq!(tree.at(key), Ok(record));
        }
    }

    #[test]
    fn test_missing_key() {
        let tree = TreeLookup::from_entries(&[
            (Currency::T1, Record { conversion: 1.0, label: "t1" }),
            (Currency::T2, Record { conversion: 2.0, label: "t2" }),
        ]);
        assert_eq!(tree.at(&Currency::T2).map(|r| r.label), Ok("t2"));
        assert!(tree.at(&Currency::Eur).unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty() {
        let tree: TreeLookup<Currency, Record> = TreeLookup::from_entries(&[]);
        assert!(tree.is_empty());
        assert!(tree.at(&Currency::Jap).is_err());
    }
}
