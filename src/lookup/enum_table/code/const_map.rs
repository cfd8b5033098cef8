//! Fixed-capacity map with exhaustive linear scan.
//!
//! The whole structure can live in a `const` or `static`: construction is a
//! `const fn`, and for [`Currency`] keys lookups can also run at compile time
//! through [`ConstMap::const_at`].

use super::Lookup;
use crate::error::{LookupError, Result};
use crate::lookup::enum_table::data::Currency;

/// `N` (key, value) pairs searched in order.
#[derive(Clone, Debug)]
pub struct ConstMap<K, V, const N: usize> {
    entries: [(K, V); N],
}

impl<K, V, const N: usize> ConstMap<K, V, N> {
    pub const fn new(entries: [(K, V); N]) -> Self {
        Self { entries }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }
}

impl<K: PartialEq + std::fmt::Debug, V, const N: usize> ConstMap<K, V, N> {
    /// First value whose key equals `key`.
    #[inline]
    pub fn at(&self, key: &K) -> Result<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| LookupError::not_found(key))
    }
}

impl<V, const N: usize> ConstMap<Currency, V, N> {
    /// Compile-time lookup. Same scan as [`ConstMap::at`], written with the
    /// operations allowed in a `const fn`.
    pub const fn const_at(&self, key: Currency) -> Option<&V> {
        let mut i = 0;
        while i < N {
            if self.entries[i].0 as u8 == key as u8 {
                return Some(&self.entries[i].1);
            }
            i += 1;
        }
        None
    }
}

impl<K: PartialEq + std::fmt::Debug, V, const N: usize> Lookup<K, V> for ConstMap<K, V, N> {
    #[inline]
    fn at(&self, key: &K) -> Result<&V> {
        ConstMap::at(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::enum_table::data::{Record, COUNT, ENTRIES};

    static MAP: ConstMap<Currency, Record, COUNT> = ConstMap::new(ENTRIES);

    static TUTU: &Record = match MAP.const_at(Currency::Tutu) {
        Some(record) => record,
        None => panic!("tutu missing"),
    };

    #[test]
    fn test_const_lookup_matches_runtime() {
        assert_eq!(TUTU.label, "tutu");
        assert_eq!(MAP.at(&Currency::Tutu), Ok(TUTU));

        for (key, record) in &ENTRIES {
            assert_eq!(MAP.const_at(*key), Some(record));
            assert_eq!(MAP.at(key), Ok(record));
        }
    }

    #[test]
    fn test_missing_key() {
        let map = ConstMap::new([
            (Currency::T1, Record { conversion: 1.0, label: "t1" }),
            (Currency::T2, Record { conversion: 2.0, label: "t2" }),
        ]);

        assert_eq!(map.at(&Currency::T1).map(|r| r.label), Ok("t1"));
        assert_eq!(map.at(&Currency::T2).map(|r| r.conversion), Ok(2.0));
        assert_eq!(map.const_at(Currency::Eur), None);

        let err = map.at(&Currency::Eur).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "key not found: Eur");
    }

    #[test]
    fn test_first_match_wins() {
        let map = ConstMap::new([(1u32, "first"), (2, "other"), (1, "shadowed")]);
        assert_eq!(map.at(&1), Ok(&"first"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_empty_map() {
        let map: ConstMap<Currency, Record, 0> = ConstMap::new([]);
        assert!(map.is_empty());
        assert!(map.at(&Currency::Eur).is_err());
        assert_eq!(map.const_at(Currency::Eur), None);
    }
}
