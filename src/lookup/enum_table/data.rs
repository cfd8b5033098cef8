//! The static currency table.
//!
//! Keys and entries are generated from one list, so a key's discriminant is
//! always its position in [`ENTRIES`]. Adding a currency means adding one line
//! here; nothing has to be renumbered.

/// Conversion data associated with one [`Currency`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Conversion factor from USD to the currency
    pub conversion: f64,
    /// Human-readable label
    pub label: &'static str,
}

macro_rules! currency_table {
    ($($variant:ident => $label:literal, $conversion:expr;)+) => {
        /// Every key known to the table.
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Currency {
            $($variant,)+
        }

        /// Number of entries in the table.
        pub const COUNT: usize = [$($label),+].len();

        impl Currency {
            /// All keys, in table order.
            pub const ALL: [Currency; COUNT] = [$(Currency::$variant,)+];
        }

        /// Raw (key, record) pairs, evaluated at compile time.
        pub const ENTRIES: [(Currency, Record); COUNT] = [
            $((Currency::$variant, Record { conversion: $conversion, label: $label }),)+
        ];
    };
}

currency_table! {
    Eur    => "eur",    1. / 0.92;
    Jap    => "jap",    1. / 0.0069;
    Pounds => "pounds", 1. / 0.79;
    Titi   => "titi",   1. / 0.79;
    Toto   => "toto",   1. / 0.79;
    Tata   => "tata",   1. / 0.79;
    Tete   => "tete",   1. / 0.79;
    Tutu   => "tutu",   1. / 0.79;
    T1     => "t1",     1.;
    T2     => "t2",     2.;
    T3     => "t3",     3.;
    T4     => "t4",     4.;
    T5     => "t5",     5.;
    T6     => "t6",     6.;
    T7     => "t7",     7.;
    T8     => "t8",     8.;
    T9     => "t9",     9.;
    T10    => "t10",    10.;
    T11    => "t11",    11. / 0.79;
    T12    => "t12",    12. / 0.79;
    T13    => "t13",    13. / 0.79;
    T14    => "t14",    14. / 0.79;
    T15    => "t15",    15. / 0.79;
    T16    => "t16",    16. / 0.79;
    T17    => "t17",    17. / 0.79;
    T18    => "t18",    18. / 0.79;
    T19    => "t19",    19. / 0.79;
    T20    => "t20",    20. / 0.79;
    T21    => "t21",    654. / 0.79;
    T22    => "t22",    54. / 0.79;
    T23    => "t23",    58. / 0.79;
    T24    => "t24",    45. / 0.79;
    T25    => "t25",    5641. / 0.79;
    T26    => "t26",    1684. / 0.79;
    T27    => "t27",    145. / 0.79;
    T28    => "t28",    145. / 0.79;
    T29    => "t29",    154. / 0.79;
    T30    => "t30",    8419. / 0.79;
}

/// The table as a static, for lookups that hand out `'static` references.
pub static TABLE: [(Currency, Record); COUNT] = ENTRIES;

impl Currency {
    /// Number of keys.
    pub const COUNT: usize = COUNT;

    /// Position of this key in the table.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key at `index`, or `None` if the index is past the end of the table.
    pub const fn from_index(index: usize) -> Option<Currency> {
        if index < COUNT {
            Some(Currency::ALL[index])
        } else {
            None
        }
    }

    /// Human-readable label of this key.
    pub const fn label(self) -> &'static str {
        ENTRIES[self.index()].1.label
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_one_entry_per_key() {
        assert_eq!(ENTRIES.len(), 38);
        assert_eq!(Currency::ALL.len(), ENTRIES.len());

        let keys: HashSet<Currency> = ENTRIES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), ENTRIES.len(), "duplicate keys in table");

        for key in Currency::ALL {
            assert!(keys.contains(&key), "{:?} missing from table", key);
        }
    }

    #[test]
    fn test_index_matches_table_position() {
        for (i, (key, _)) in ENTRIES.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(Currency::from_index(i), Some(*key));
        }
        assert_eq!(Currency::from_index(COUNT), None);
        assert_eq!(Currency::from_index(usize::MAX), None);
    }

    #[test]
    fn test_labels_unique() {
        let labels: HashSet<&str> = ENTRIES.iter().map(|(_, r)| r.label).collect();
        assert_eq!(labels.len(), COUNT);
        assert_eq!(Currency::Pounds.to_string(), "pounds");
        assert_eq!(Currency::T30.label(), "t30");
    }

    #[test]
    fn test_eur_conversion() {
        let eur = ENTRIES[Currency::Eur.index()].1;
        assert_eq!(eur.label, "eur");
        assert!((eur.conversion - 1.0 / 0.92).abs() < 1e-9);
        assert!((eur.conversion - 1.086_956_521_739_130_4).abs() < 1e-9);
    }

    #[test]
    fn test_conversions_positive_and_finite() {
        for (key, record) in &ENTRIES {
            assert!(
                record.conversion.is_finite() && record.conversion > 0.0,
                "{:?} has conversion {}",
                key,
                record.conversion
            );
        }
    }

    #[test]
    fn test_synthetic_literals() {
        assert_eq!(TABLE[Currency::T1.index()].1.conversion, 1.0);
        assert_eq!(TABLE[Currency::T10.index()].1.conversion, 10.0);
        assert!((TABLE[Currency::T30.index()].1.conversion - 8419.0 / 0.79).abs() < 1e-9);
    }
}
