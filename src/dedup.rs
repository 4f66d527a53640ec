use std::collections::HashSet;

use crate::simple_hash_set::SimpleHashSet;
use crate::unique_set::UniqueSet;

/// Removes duplicates by collecting every value into a set. With `keep_order` the result is in
/// first-occurrence order; otherwise the order is whatever the hash set yields.
pub fn remove_duplicates_with(input: &[i32], keep_order: bool) -> Vec<i32> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mut unique = UniqueSet::new(keep_order);
    for &element in input {
        unique.add(element);
    }
    let output = unique.into_vec();
    log::debug!(
        "set dedup (keep_order: {}): {} -> {} values",
        keep_order,
        input.len(),
        output.len()
    );
    output
}

/// Removes duplicates in one pass, keeping the first occurrence of each value.
pub fn remove_duplicates_keep_order(input: &[i32]) -> Vec<i32> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mut seen = HashSet::with_capacity(input.len());
    collect_first_occurrences(input, |value| seen.insert(value))
}

/// Same result as [`remove_duplicates_keep_order`], tracking seen values in a
/// [`SimpleHashSet`] sized to the input so the table never grows.
///
/// Expected linear time. Inputs whose values mostly collide modulo the input length degrade
/// toward quadratic time, since every collision lengthens one chain.
pub fn remove_duplicates(input: &[i32]) -> Vec<i32> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mut seen = SimpleHashSet::with_capacity(input.len());
    collect_first_occurrences(input, |value| seen.add(value))
}

fn collect_first_occurrences<F>(input: &[i32], mut add: F) -> Vec<i32>
where
    F: FnMut(i32) -> bool,
{
    let mut output = vec![0; input.len()];
    let mut cursor = 0;
    for &element in input {
        if add(element) {
            output[cursor] = element;
            cursor += 1;
        }
    }
    output.truncate(cursor);
    log::debug!("first-occurrence dedup: {} -> {} values", input.len(), cursor);
    output
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keep_order() {
        assert_eq!(
            remove_duplicates_keep_order(&[1, 2, 34, 34, 25, 1]),
            vec![1, 2, 34, 25]
        );
    }

    #[test]
    fn test_custom_table() {
        assert_eq!(remove_duplicates(&[1, 2, 34, 34, 25, 1]), vec![1, 2, 34, 25]);
        assert_eq!(remove_duplicates(&[3, 1, 0, 1, 4, 4]), vec![3, 1, 0, 4]);
    }

    #[test]
    fn test_ordered_set() {
        assert_eq!(
            remove_duplicates_with(&[1, 2, 34, 34, 25, 1], true),
            vec![1, 2, 34, 25]
        );
    }

    #[test]
    fn test_unordered_set_is_permutation() {
        let mut output = remove_duplicates_with(&[1, 2, 34, 34, 25, 1], false);
        output.sort();
        assert_eq!(output, vec![1, 2, 25, 34]);
    }

    #[test]
    fn test_short_input_unchanged() {
        let empty: [i32; 0] = [];
        assert_eq!(remove_duplicates_with(&empty, true), Vec::<i32>::new());
        assert_eq!(remove_duplicates_with(&empty, false), Vec::<i32>::new());
        assert_eq!(remove_duplicates_keep_order(&empty), Vec::<i32>::new());
        assert_eq!(remove_duplicates(&empty), Vec::<i32>::new());
        assert_eq!(remove_duplicates_with(&[7], false), vec![7]);
        assert_eq!(remove_duplicates_keep_order(&[7]), vec![7]);
        assert_eq!(remove_duplicates(&[-7]), vec![-7]);
    }

    #[test]
    fn test_all_same() {
        assert_eq!(remove_duplicates(&[4; 10]), vec![4]);
        assert_eq!(remove_duplicates_keep_order(&[4; 10]), vec![4]);
    }

    #[test]
    fn test_colliding_values() {
        // Every value lands in bucket 0 of an 8-bucket table.
        let input = [0, 8, 16, 8, 24, 0, 32, 16];
        assert_eq!(remove_duplicates(&input), vec![0, 8, 16, 24, 32]);
    }

    #[test]
    fn test_negative_values() {
        let input = [-1, 1, i32::MIN, -1, 0, i32::MAX, i32::MIN, 1];
        let expected = vec![-1, 1, i32::MIN, 0, i32::MAX];
        assert_eq!(remove_duplicates(&input), expected);
        assert_eq!(remove_duplicates_keep_order(&input), expected);
    }
}
