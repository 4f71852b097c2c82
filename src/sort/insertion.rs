//! @ai:module:intent Insertion sort, descending order
//! @ai:module:layer domain
//! @ai:module:public_api sort
//! @ai:module:stateless true

use crate::sort::SortKey;
use std::time::{Duration, Instant};

/// @ai:intent Sort a copy of the input in descending order
/// @ai:post returned sequence is a stable descending permutation of input
/// @ai:effects pure
///
/// Grows a sorted descending prefix; each element shifts left past
/// strictly-smaller prefix elements only, so equal keys keep their
/// original relative order. O(N) on already-descending input.
pub fn sort<T: SortKey + Clone>(input: &[T]) -> (Vec<T>, Duration) {
    let mut items = input.to_vec();
    let start = Instant::now();

    for i in 1..items.len() {
        let current = items[i].clone();
        let mut j = i;

        while j > 0 && items[j - 1].key() < current.key() {
            items[j] = items[j - 1].clone();
            j -= 1;
        }

        items[j] = current;
    }

    (items, start.elapsed())
}
