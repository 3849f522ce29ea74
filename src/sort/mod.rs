//! # Quicksort with the Lomuto partition scheme
//!
//! The entry to this module is the [`quicksort`] function.
//! It sorts a slice in place by partitioning it around its last item and sorting the ranges below and above the pivot.
//!
//! ```
//! # use lomuto::sort::quicksort;
//! let mut data = [3, 1, 3, 2, 3];
//! quicksort(&mut data);
//! assert_eq!(data, [1, 2, 3, 3, 3]);
//! ```
//!
//! [`quicksort_stack`] produces the same result using an explicit stack instead of recursion.
//! [`sort`] selects the driver from a [`Context`].
//!
//! The slice-based functions panic on violated preconditions.
//! [`partition_range`] and [`quicksort_range`] instead take an inclusive index range `[low, high]` and report invalid ranges as [`RangeError`].

pub mod stack;

pub use stack::quicksort_stack;

use crate::ctx::{Context, Strategy};
use crate::util::slice::split_pivot_mut;
use std::fmt;

/// Exchanges the items at the indices `i` and `j`.
///
/// The indices may be equal, in which case the array is unchanged.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
pub fn swap(arr: &mut [i32], i: usize, j: usize) {
    arr.swap(i, j);
}

/// Partitions a slice around its last item and returns the final index of that item.
///
/// After the call, all items before the returned index are `<=` the pivot and all items after it are `>=` the pivot.
/// Items equal to the pivot are moved before it.
///
/// # Panics
///
/// Panics if `arr` is empty.
///
/// # Example
///
/// ```
/// # use lomuto::sort::partition;
/// let mut data = [64, 34, 25, 12, 22, 11, 90, 88, 76, 50];
/// let p = partition(&mut data);
/// assert_eq!(p, 5);
/// assert_eq!(data, [34, 25, 12, 22, 11, 50, 90, 88, 76, 64]);
/// ```
pub fn partition(arr: &mut [i32]) -> usize {
    assert!(!arr.is_empty());
    let high = arr.len() - 1;
    let pivot = arr[high];

    // `boundary` is the first index not known to hold an item <= pivot
    let mut boundary = 0;

    for j in 0..high {
        if arr[j] <= pivot {
            swap(arr, boundary, j);
            boundary += 1;
        }
    }

    swap(arr, boundary, high);

    log::trace!(
        "partitioned {} items around pivot {} at index {}",
        arr.len(),
        pivot,
        boundary
    );

    boundary
}

/// Sorts a slice in place.
///
/// Slices with fewer than two items are returned immediately.
/// Otherwise, the slice is [partitioned](partition) and the ranges below and above the pivot are sorted recursively, the lower range first.
///
/// The recursion depth is linear in the worst case, which is reached for sorted and reverse sorted input.
/// Use [`quicksort_stack`] for large inputs.
///
/// # Example
///
/// ```
/// # use lomuto::sort::quicksort;
/// let mut data = [5, 4, 3, 2, 1];
/// quicksort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn quicksort(arr: &mut [i32]) {
    if arr.len() < 2 {
        return;
    }

    let p = partition(arr);
    let (lower, _, upper) = split_pivot_mut(arr, p);
    quicksort(lower);
    quicksort(upper);
}

/// Sorts a slice in place with the driver selected by `ctx`.
pub fn sort(arr: &mut [i32], ctx: &Context) {
    log::debug!("sort {} items using the {} strategy", arr.len(), ctx.strategy);

    match ctx.strategy {
        Strategy::Recursive => quicksort(arr),
        Strategy::WorkStack => quicksort_stack(arr),
    }
}

/// Partitions the items at the indices `low..=high` and returns the final index of the pivot.
///
/// The pivot is the item at `high`.
/// The returned index is relative to the start of `arr`.
/// Items outside of `low..=high` are not touched.
///
/// # Errors
///
/// Returns [`RangeError::Inverted`] if `low > high` and [`RangeError::OutOfBounds`] if `high` is not a valid index.
///
/// # Example
///
/// ```
/// # use lomuto::sort::partition_range;
/// let mut data = [9, 3, 1, 2, 0];
/// assert_eq!(partition_range(&mut data, 1, 3), Ok(2));
/// assert_eq!(data, [9, 1, 2, 3, 0]);
/// ```
pub fn partition_range(arr: &mut [i32], low: usize, high: usize) -> Result<usize, RangeError> {
    if low > high {
        return Err(RangeError::Inverted { low, high });
    }
    if high >= arr.len() {
        return Err(RangeError::OutOfBounds {
            index: high,
            len: arr.len(),
        });
    }

    Ok(low + partition(&mut arr[low..=high]))
}

/// Sorts the items at the indices `low..=high` in place.
///
/// Ranges with `low >= high` hold fewer than two items and are left unchanged.
/// An inverted range is empty and its bounds are not checked, so `(0, 0)` is accepted for an empty array.
///
/// # Errors
///
/// Returns [`RangeError::OutOfBounds`] if `high` is not a valid index of a non-empty array and `low <= high`.
///
/// # Example
///
/// ```
/// # use lomuto::sort::quicksort_range;
/// let mut data = [9, 3, 1, 2, 0];
/// quicksort_range(&mut data, 0, 3).unwrap();
/// assert_eq!(data, [1, 2, 3, 9, 0]);
/// ```
pub fn quicksort_range(arr: &mut [i32], low: usize, high: usize) -> Result<(), RangeError> {
    if low > high || arr.is_empty() {
        return Ok(());
    }
    if high >= arr.len() {
        return Err(RangeError::OutOfBounds {
            index: high,
            len: arr.len(),
        });
    }

    quicksort(&mut arr[low..=high]);
    Ok(())
}

/// An error that may occur when addressing an inclusive index range.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum RangeError {
    /// The lower index is greater than the upper index.
    Inverted {
        /// The lower index of the range.
        low: usize,
        /// The upper index of the range.
        high: usize,
    },
    /// An index is not within the array.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the array.
        len: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { low, high } => {
                write!(f, "The range [{}, {}] is inverted.", low, high)
            }
            Self::OutOfBounds { index, len } => write!(
                f,
                "The index {} is out of bounds for an array of length {}.",
                index, len
            ),
        }
    }
}

impl std::error::Error for RangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
