//! Lookup-table benchmarks.

pub mod enum_table;
