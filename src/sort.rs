//! Sorting helpers: heap sort and stable merge sort.
//!
//! Both take an `Option` so callers holding a possibly-absent sequence get
//! an explicit `Error::InvalidInput` instead of silently sorting nothing.

use crate::error::{Error, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Sort `values` in place by pushing everything through a min-heap.
///
/// The heap is a separate allocation. Not stable.
pub fn heap_sort<T: Ord>(values: Option<&mut Vec<T>>) -> Result<()> {
    let values = values.ok_or(Error::InvalidInput("heap_sort needs a sequence"))?;

    let mut heap: BinaryHeap<Reverse<T>> = values.drain(..).map(Reverse).collect();
    while let Some(Reverse(smallest)) = heap.pop() {
        values.push(smallest);
    }
    Ok(())
}

/// Return a sorted copy of `values`.
///
/// Stable: when two equal elements meet during a merge, the one from the
/// left half is emitted first.
pub fn merge_sort<T: Ord + Clone>(values: Option<&[T]>) -> Result<Vec<T>> {
    let values = values.ok_or(Error::InvalidInput("merge_sort needs a sequence"))?;
    Ok(sort_slice(values))
}

fn sort_slice<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let middle = values.len().div_ceil(2);
    let left = sort_slice(&values[..middle]);
    let right = sort_slice(&values[middle..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l > r,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        result.extend(next);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    /// Compares by `key` only, so `tag` exposes the relative order of equals.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: i32,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_heap_sort() {
        let mut values = vec![3, 1, 2, 1];
        heap_sort(Some(&mut values)).unwrap();
        assert_eq!(values, vec![1, 1, 2, 3]);
    }

    #[test]
    fn test_merge_sort_stable() {
        let input: Vec<Tagged> = [3, 1, 2, 1]
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect();

        let sorted = merge_sort(Some(input.as_slice())).unwrap();
        let keys: Vec<i32> = sorted.iter().map(|t| t.key).collect();
        let tags: Vec<usize> = sorted.iter().map(|t| t.tag).collect();
        assert_eq!(keys, vec![1, 1, 2, 3]);
        assert_eq!(tags, vec![1, 3, 2, 0]);
        // Input untouched.
        assert_eq!(input[0].tag, 0);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        heap_sort(Some(&mut empty)).unwrap();
        assert!(empty.is_empty());
        assert!(merge_sort::<i32>(Some(&[][..])).unwrap().is_empty());
        assert_eq!(merge_sort(Some(&[7][..])).unwrap(), vec![7]);
    }

    #[test]
    fn test_absent_input() {
        assert!(matches!(heap_sort::<i32>(None), Err(Error::InvalidInput(_))));
        assert!(matches!(merge_sort::<i32>(None), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_merge_prefers_left_on_ties() {
        let left = vec![Tagged { key: 5, tag: 0 }];
        let right = vec![Tagged { key: 5, tag: 1 }];
        let merged = merge(left, right);
        assert_eq!(merged[0].tag, 0);
        assert_eq!(merged[1].tag, 1);
    }
}
