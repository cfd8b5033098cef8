//! FFI bindings for the C switch dispatch.

use super::Lookup;
use crate::error::{LookupError, Result};
use crate::lookup::enum_table::data::{Currency, Record, TABLE};

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    extern "C" {
        pub fn enum_table_c_switch(key: u8) -> size_t;
    }
}

/// C `switch` mapping a raw key to its table position
#[cfg(c_implementation_active)]
#[inline]
pub fn c_switch_index(key: u8) -> Option<usize> {
    // SAFETY: pure function over a byte, no pointers cross the boundary.
    let index = unsafe { ffi::enum_table_c_switch(key) };
    (index < TABLE.len()).then_some(index)
}

#[cfg(not(c_implementation_active))]
pub fn c_switch_index(_key: u8) -> Option<usize> {
    panic!("C implementation not compiled (requires GCC, MSVC, or Apple Clang)")
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// [`c_switch_index`] behind the [`Lookup`] interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct CSwitch;

impl Lookup<Currency, Record> for CSwitch {
    #[inline(always)]
    fn at(&self, key: &Currency) -> Result<&Record> {
        let raw = *key as u8;
        c_switch_index(raw)
            .map(|index| &TABLE[index].1)
            .ok_or(LookupError::InvalidKey(raw))
    }
}

#[cfg(all(test, c_implementation_active))]
mod tests {
    use super::*;

    #[test]
    fn test_c_switch_matches_table() {
        for key in Currency::ALL {
            assert_eq!(c_switch_index(key as u8), Some(key.index()));
            assert_eq!(CSwitch.at(&key), Ok(&TABLE[key.index()].1));
        }
        assert_eq!(c_switch_index(38), None);
        assert_eq!(c_switch_index(u8::MAX), None);
    }

    #[test]
    fn test_c_switch_is_a_range_check() {
        for raw in 0..=u8::MAX {
            let expected = (usize::from(raw) < Currency::COUNT).then_some(usize::from(raw));
            assert_eq!(c_switch_index(raw), expected, "key {}", raw);
        }
    }
}
