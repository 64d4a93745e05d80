//! In-place order-statistic selection (median without a full sort).

use crate::window::Sample;

/// Lomuto partition over `list[left..=right]` around the value at `pivot`.
///
/// Moves the pivot value to the right end, sweeps left-to-right swapping any
/// strictly smaller value into a growing storage prefix, then swaps the pivot
/// into its resting slot and returns that index.
fn partition(list: &mut [Sample], left: usize, right: usize, pivot: usize) -> usize {
    let pivot_value = list[pivot];
    list.swap(pivot, right);
    let mut storage = left;
    for i in left..right {
        if list[i] < pivot_value {
            list.swap(storage, i);
            storage += 1;
        }
    }
    list.swap(storage, right);
    storage
}

/// Return the value of rank `rank` (0-based, ascending) from `scratch`.
///
/// Iterative quickselect over a caller-owned mutable scratch slice; no
/// allocation, no recursion. The pivot is the midpoint of the active range,
/// which is expected O(N) but can degrade to O(N^2) on adversarial
/// orderings; output is a value equal to the true order statistic either way.
/// Ties may resolve to any equal duplicate; index stability is not promised.
///
/// Returns 0 (the fault sentinel) on an empty slice or out-of-range rank.
pub fn select(scratch: &mut [Sample], rank: usize) -> Sample {
    if scratch.is_empty() || rank >= scratch.len() {
        return 0;
    }
    let mut left = 0;
    let mut right = scratch.len() - 1;
    loop {
        if left == right {
            return scratch[left];
        }
        let pivot = (left + right) / 2;
        let p = partition(scratch, left, right, pivot);
        if p == rank {
            return scratch[p];
        }
        if rank < p {
            right = p - 1;
        } else {
            left = p + 1;
        }
    }
}

/// Median of `window` via `select` on a reusable scratch buffer.
///
/// The window itself is never mutated; `scratch` is cleared and refilled so
/// steady-state ticks reuse its capacity instead of allocating.
pub fn median_into(window: &[Sample], scratch: &mut Vec<Sample>) -> Sample {
    scratch.clear();
    scratch.extend_from_slice(window);
    select(scratch, window.len() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot_between_halves() {
        let mut v = [9, 3, 7, 1, 5];
        let last = v.len() - 1;
        let p = partition(&mut v, 0, last, 2);
        let pivot_value = v[p];
        assert_eq!(pivot_value, 7);
        assert!(v[..p].iter().all(|&x| x < pivot_value));
        assert!(v[p + 1..].iter().all(|&x| x >= pivot_value));
    }

    #[test]
    fn select_is_total_over_all_ranks() {
        let orig = [42, 7, 19, 7, 3, 88, 54];
        let mut sorted = orig;
        sorted.sort_unstable();
        for rank in 0..orig.len() {
            let mut scratch = orig;
            assert_eq!(select(&mut scratch, rank), sorted[rank], "rank {rank}");
        }
    }

    #[test]
    fn degenerate_inputs_return_the_fault_sentinel() {
        let mut empty: [Sample; 0] = [];
        assert_eq!(select(&mut empty, 0), 0);
        let mut v = [5, 3, 8];
        assert_eq!(select(&mut v, 3), 0);
    }

    #[test]
    fn already_sorted_input_still_selects() {
        // worst case for the midpoint pivot; correctness must hold regardless
        let mut scratch: Vec<Sample> = (0..101).collect();
        assert_eq!(select(&mut scratch, 50), 50);
    }
}
