//! @ai:module:intent Merge sort, descending order
//! @ai:module:layer domain
//! @ai:module:public_api sort
//! @ai:module:stateless true

use crate::sort::SortKey;
use std::time::{Duration, Instant};

/// @ai:intent Sort a copy of the input in descending order
/// @ai:post returned sequence is a stable descending permutation of input
/// @ai:effects pure
///
/// Classic divide-and-conquer, O(N log N) in all cases with O(N)
/// auxiliary space per merge. Ties take the left element first, which
/// makes the sort stable.
pub fn sort<T: SortKey + Clone>(input: &[T]) -> (Vec<T>, Duration) {
    let start = Instant::now();
    let sorted = sort_slice(input);
    (sorted, start.elapsed())
}

fn sort_slice<T: SortKey + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_slice(&items[..mid]);
    let right = sort_slice(&items[mid..]);

    merge(&left, &right)
}

/// Merge two descending runs, left element first on ties.
fn merge<T: SortKey + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i].key() >= right[j].key() {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
