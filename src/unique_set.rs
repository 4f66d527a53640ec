use indexmap::IndexSet;
use std::collections::HashSet;

/// Tracks which values have been seen. The `Ordered` variant iterates in first-insertion
/// order; `Unordered` makes no promise about iteration order.
pub enum UniqueSet {
    Ordered(IndexSet<i32>),
    Unordered(HashSet<i32>),
}

impl UniqueSet {
    pub fn new(keep_order: bool) -> UniqueSet {
        if keep_order {
            UniqueSet::Ordered(IndexSet::new())
        } else {
            UniqueSet::Unordered(HashSet::new())
        }
    }

    /// Inserts `value`, returning true if it was not already present.
    pub fn add(&mut self, value: i32) -> bool {
        match self {
            UniqueSet::Ordered(set) => set.insert(value),
            UniqueSet::Unordered(set) => set.insert(value),
        }
    }

    /// Number of distinct values added so far.
    pub fn len(&self) -> usize {
        match self {
            UniqueSet::Ordered(set) => set.len(),
            UniqueSet::Unordered(set) => set.len(),
        }
    }

    /// True when nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the set, yielding its values in the variant's iteration order.
    pub fn into_vec(self) -> Vec<i32> {
        match self {
            UniqueSet::Ordered(set) => set.into_iter().collect(),
            UniqueSet::Unordered(set) => set.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ordered_keeps_insertion_order() {
        let mut set = UniqueSet::new(true);
        for value in [5, 3, 5, 9, 3] {
            set.add(value);
        }
        assert_eq!(set.len(), 3);
        assert_eq!(set.into_vec(), vec![5, 3, 9]);
    }

    #[test]
    fn test_unordered_reports_duplicates() {
        let mut set = UniqueSet::new(false);
        assert!(set.is_empty());
        assert!(set.add(1));
        assert!(!set.add(1));
        assert!(set.add(2));
        let mut values = set.into_vec();
        values.sort();
        assert_eq!(values, vec![1, 2]);
    }
}
