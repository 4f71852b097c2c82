//! @ai:module:intent Bubble sort, descending order
//! @ai:module:layer domain
//! @ai:module:public_api sort
//! @ai:module:stateless true

use crate::sort::SortKey;
use std::time::{Duration, Instant};

/// @ai:intent Sort a copy of the input in descending order
/// @ai:post returned sequence is a descending permutation of input
/// @ai:effects pure
///
/// Repeated adjacent-swap passes; a pass with zero swaps terminates
/// early, so already-descending input costs a single pass. The strict
/// `<` comparison means equal adjacent elements never swap; tie order
/// is whatever the passes produce, stability is not guaranteed.
/// The returned duration covers the sort only, not the input copy.
pub fn sort<T: SortKey + Clone>(input: &[T]) -> (Vec<T>, Duration) {
    let mut items = input.to_vec();
    let start = Instant::now();
    sort_in_place(&mut items);
    (items, start.elapsed())
}

/// Returns the number of passes performed, for the early-exit check.
fn sort_in_place<T: SortKey>(items: &mut [T]) -> usize {
    let n = items.len();
    let mut passes = 0;

    for i in 0..n {
        let mut swapped = false;
        passes += 1;

        for j in 0..n - i - 1 {
            if items[j].key() < items[j + 1].key() {
                items.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorts_descending() {
        let (sorted, _) = sort(&[5i64, 2, 9, 1, 9, 3]);
        assert_eq!(sorted, vec![9, 9, 5, 3, 2, 1]);
    }

    #[test]
    fn test_ascending_input_is_worst_case_but_correct() {
        let input: Vec<i64> = (0..50).collect();
        let (sorted, _) = sort(&input);

        let expected: Vec<i64> = (0..50).rev().collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_already_descending_input_takes_a_single_pass() {
        let mut items: Vec<i64> = vec![9, 7, 5, 5, 1];
        let passes = sort_in_place(&mut items);

        assert_eq!(passes, 1);
        assert_eq!(items, vec![9, 7, 5, 5, 1]);
    }

    #[test]
    fn test_equal_adjacent_elements_never_swap() {
        // Strict `<` comparison: an all-equal run is already "sorted"
        // after one swap-free pass.
        let input = crate::sort::tests::tagged(&[(5, 'a'), (5, 'b'), (5, 'c')]);
        let (sorted, _) = sort(&input);
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let input = vec![3i64, 1, 2];
        let (sorted, _) = sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(sorted, vec![3, 2, 1]);
    }
}
