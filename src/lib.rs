//! Removes duplicate values from a slice of `i32`, in a few different ways.
//!
//! [`remove_duplicates_with`] collects into a set, ordered or not. [`remove_duplicates_keep_order`]
//! keeps first occurrences using a `HashSet` of seen values, and [`remove_duplicates`] does the
//! same with [`SimpleHashSet`], a fixed-size chained table that stores plain `i32` keys.

pub mod dedup;
pub mod simple_hash_set;
pub mod strategy;
pub mod unique_set;

pub use dedup::{remove_duplicates, remove_duplicates_keep_order, remove_duplicates_with};
pub use simple_hash_set::SimpleHashSet;
pub use strategy::Strategy;
pub use unique_set::UniqueSet;
