use std::fmt;

use crate::dedup::{remove_duplicates, remove_duplicates_keep_order, remove_duplicates_with};

/// The ways this crate can deduplicate a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Insertion-ordered set.
    Ordered,
    /// Plain hash set, order unspecified.
    Unordered,
    /// Single pass over the input with a hash set of seen values.
    KeepOrder,
    /// Single pass with the chained-bucket table.
    Custom,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Ordered,
        Strategy::Unordered,
        Strategy::KeepOrder,
        Strategy::Custom,
    ];

    pub fn apply(&self, input: &[i32]) -> Vec<i32> {
        match self {
            Strategy::Ordered => remove_duplicates_with(input, true),
            Strategy::Unordered => remove_duplicates_with(input, false),
            Strategy::KeepOrder => remove_duplicates_keep_order(input),
            Strategy::Custom => remove_duplicates(input),
        }
    }

    /// Whether `apply` returns values in first-occurrence order.
    pub fn keeps_order(&self) -> bool {
        !matches!(self, Strategy::Unordered)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Ordered => "ordered",
            Strategy::Unordered => "unordered",
            Strategy::KeepOrder => "keep-order",
            Strategy::Custom => "custom",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
