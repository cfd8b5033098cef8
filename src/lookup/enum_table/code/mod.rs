//! Lookup strategies for the enum-keyed table

pub mod c_impl;
pub mod const_map;
pub mod dispatch;
pub mod hash_map;
pub mod tree_map;

pub use const_map::ConstMap;
pub use dispatch::{direct_index, dispatch_raw, match_dispatch, DirectIndex, MatchDispatch};
pub use hash_map::HashLookup;
pub use tree_map::TreeLookup;

use super::data::{Currency, Record, COUNT, ENTRIES};
use crate::error::Result;
use crate::utils::VariantInfo;

/// Read-only key lookup shared by every strategy.
pub trait Lookup<K, V> {
    /// Value stored for `key`.
    fn at(&self, key: &K) -> Result<&V>;
}

impl<K, V, T: Lookup<K, V> + ?Sized> Lookup<K, V> for &T {
    #[inline(always)]
    fn at(&self, key: &K) -> Result<&V> {
        (**self).at(key)
    }
}

/// Linear-scan map over the whole table, built at compile time.
pub static LINEAR_MAP: ConstMap<Currency, Record, COUNT> = ConstMap::new(ENTRIES);

/// The lookup strategies under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    LinearScan,
    OrderedTree,
    HashTable,
    MatchDispatch,
    DirectIndex,
    CSwitch,
}

impl Strategy {
    /// Build the strategy's backing structure from `entries`.
    ///
    /// Only the tree and hash strategies honour `entries`; the others are
    /// fixed to the full compiled-in table.
    pub fn build(self, entries: &[(Currency, Record)]) -> Box<dyn Lookup<Currency, Record>> {
        match self {
            Strategy::LinearScan => Box::new(&LINEAR_MAP),
            Strategy::OrderedTree => Box::new(TreeLookup::from_entries(entries)),
            Strategy::HashTable => Box::new(HashLookup::from_entries(entries)),
            Strategy::MatchDispatch => Box::new(MatchDispatch),
            Strategy::DirectIndex => Box::new(DirectIndex),
            Strategy::CSwitch => Box::new(c_impl::CSwitch),
        }
    }
}

/// Name of the reference variant every other one is compared against
pub const BASELINE: &str = "linear-scan";

/// Returns all available variants
pub fn get_variants() -> Vec<VariantInfo<Strategy>> {
    let mut variants = vec![
        VariantInfo {
            name: BASELINE,
            description: "Compile-time array scanned in order",
            function: Strategy::LinearScan,
        },
        VariantInfo {
            name: "btree-map",
            description: "std BTreeMap built once from the table",
            function: Strategy::OrderedTree,
        },
        VariantInfo {
            name: "hash-map",
            description: "std HashMap (SipHash) built once from the table",
            function: Strategy::HashTable,
        },
        VariantInfo {
            name: "match",
            description: "Exhaustive match, one arm per key",
            function: Strategy::MatchDispatch,
        },
        VariantInfo {
            name: "direct-index",
            description: "Key discriminant used as table index",
            function: Strategy::DirectIndex,
        },
    ];

    if c_impl::C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-switch",
            description: "C switch over the key; identity cases fold to a bounds check",
            function: Strategy::CSwitch,
        });
    }

    variants
}
