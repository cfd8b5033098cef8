//! Branch-per-key dispatch and direct indexing.
//!
//! `match_dispatch` is the hand-written switch: one arm per key, each arm
//! indexing the table with a literal. The compiler is free to lower it to a
//! jump table, a lookup table or a compare chain. Since `Currency` is a closed
//! enum the match is exhaustive and needs no default arm.
//!
//! `direct_index` skips the branches and uses the key's discriminant as the
//! table index.

use super::Lookup;
use crate::error::{LookupError, Result};
use crate::lookup::enum_table::data::{Currency, Record, TABLE};

#[inline(never)]
pub fn match_dispatch(key: Currency) -> &'static Record {
    match key {
        Currency::Eur => &TABLE[0].1,
        Currency::Jap => &TABLE[1].1,
        Currency::Pounds => &TABLE[2].1,
        Currency::Titi => &TABLE[3].1,
        Currency::Toto => &TABLE[4].1,
        Currency::Tata => &TABLE[5].1,
        Currency::Tete => &TABLE[6].1,
        Currency::Tutu => &TABLE[7].1,
        Currency::T1 => &TABLE[8].1,
        Currency::T2 => &TABLE[9].1,
        Currency::T3 => &TABLE[10].1,
        Currency::T4 => &TABLE[11].1,
        Currency::T5 => &TABLE[12].1,
        Currency::T6 => &TABLE[13].1,
        Currency::T7 => &TABLE[14].1,
        Currency::T8 => &TABLE[15].1,
        Currency::T9 => &TABLE[16].1,
        Currency::T10 => &TABLE[17].1,
        Currency::T11 => &TABLE[18].1,
        Currency::T12 => &TABLE[19].1,
        Currency::T13 => &TABLE[20].1,
        Currency::T14 => &TABLE[21].1,
        Currency::T15 => &TABLE[22].1,
        Currency::T16 => &TABLE[23].1,
        Currency::T17 => &TABLE[24].1,
        Currency::T18 => &TABLE[25].1,
        Currency::T19 => &TABLE[26].1,
        Currency::T20 => &TABLE[27].1,
        Currency::T21 => &TABLE[28].1,
        Currency::T22 => &TABLE[29].1,
        Currency::T23 => &TABLE[30].1,
        Currency::T24 => &TABLE[31].1,
        Currency::T25 => &TABLE[32].1,
        Currency::T26 => &TABLE[33].1,
        Currency::T27 => &TABLE[34].1,
        Currency::T28 => &TABLE[35].1,
        Currency::T29 => &TABLE[36].1,
        Currency::T30 => &TABLE[37].1,
    }
}

#[inline(never)]
pub fn direct_index(key: Currency) -> &'static Record {
    &TABLE[key.index()].1
}

/// Dispatch on an untyped key value, rejecting values outside the table.
pub fn dispatch_raw(raw: u8) -> Result<&'static Record> {
    Currency::from_index(raw as usize)
        .map(direct_index)
        .ok_or(LookupError::InvalidKey(raw))
}

/// [`match_dispatch`] behind the [`Lookup`] interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchDispatch;

impl Lookup<Currency, Record> for MatchDispatch {
    #[inline(always)]
    fn at(&self, key: &Currency) -> Result<&Record> {
        Ok(match_dispatch(*key))
    }
}

/// [`direct_index`] behind the [`Lookup`] interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectIndex;

impl Lookup<Currency, Record> for DirectIndex {
    #[inline(always)]
    fn at(&self, key: &Currency) -> Result<&Record> {
        Ok(direct_index(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::enum_table::data::{COUNT, ENTRIES};

    #[test]
    fn test_match_covers_table() {
        for (key, record) in &ENTRIES {
            assert_eq!(match_dispatch(*key), record, "{:?}", key);
            assert_eq!(direct_index(*key), record, "{:?}", key);
        }
    }

    #[test]
    fn test_returns_table_entry_by_reference() {
        for key in Currency::ALL {
            assert!(std::ptr::eq(match_dispatch(key), &TABLE[key.index()].1));
        }
    }

    #[test]
    fn test_dispatch_raw() {
        assert_eq!(dispatch_raw(0).map(|r| r.label), Ok("eur"));
        assert_eq!(dispatch_raw(37).map(|r| r.label), Ok("t30"));

        for raw in COUNT as u8..=u8::MAX {
            assert_eq!(dispatch_raw(raw), Err(LookupError::InvalidKey(raw)));
        }
    }
}
