//! Quicksort driven by an explicit stack of pending ranges.

use super::partition;
use crate::util::slice::split_pivot_mut;

/// Sorts a slice in place without recursion.
///
/// Pending ranges are kept on a stack.
/// After each partition the larger range is pushed first and the smaller range last, so the smaller range is processed next.
/// The range processed next is at most half as large as its parent, which limits the stack to a logarithmic number of ranges.
///
/// The result is the same as for [`quicksort`](super::quicksort) since both use the same [`partition`].
///
/// # Example
///
/// ```
/// # use lomuto::sort::quicksort_stack;
/// let mut data: Vec<i32> = (0..1_000).rev().collect();
/// quicksort_stack(&mut data);
/// assert!(data.iter().zip(data.iter().skip(1)).all(|(a, b)| a <= b));
/// ```
pub fn quicksort_stack(arr: &mut [i32]) {
    let len = arr.len();
    let peak_depth = sort_with_stack(arr);
    log::debug!("sorted {} items with a peak stack depth of {}", len, peak_depth);
}

/// Sorts a slice in place and returns the largest number of ranges held by the stack at once.
fn sort_with_stack(arr: &mut [i32]) -> usize {
    let mut stack: Vec<&mut [i32]> = vec![arr];
    let mut peak_depth = stack.len();

    while let Some(range) = stack.pop() {
        if range.len() < 2 {
            continue;
        }

        let p = partition(range);
        let (lower, _, upper) = split_pivot_mut(range, p);

        if lower.len() < upper.len() {
            stack.push(upper);
            stack.push(lower);
        } else {
            stack.push(lower);
            stack.push(upper);
        }

        peak_depth = peak_depth.max(stack.len());
    }

    peak_depth
}
