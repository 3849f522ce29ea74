/// Divides a mutable slice into the range below a pivot, the pivot item, and the range above it.
///
/// - The lower range contains all items with an index < `position`.
/// - The upper range contains all items with an index > `position`.
/// - The pivot item is located at `position`.
///
/// The two ranges are disjoint borrows, so each can be sorted independently.
///
/// # Panics
///
/// Panics if `position >= slice.len()`.
///
/// # Example
///
/// ```ignore
/// let mut data = [12, 11, 22, 25, 34, 50, 90];
/// let (lower, pivot, upper) = split_pivot_mut(&mut data, 5);
/// assert_eq!(lower, [12, 11, 22, 25, 34]);
/// assert_eq!(*pivot, 50);
/// assert_eq!(upper, [90]);
/// ```
pub fn split_pivot_mut<'a, T>(
    slice: &'a mut [T],
    position: usize,
) -> (&'a mut [T], &'a mut T, &'a mut [T]) {
    assert!(position < slice.len());
    let (lower, rest) = slice.split_at_mut(position);
    let (pivot, upper) = rest.split_first_mut().unwrap();
    (lower, pivot, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pivot_mut_every_position() {
        let mut data = vec![3, 1, 2, 5, 4];
        let len = data.len();

        for i in 0..len {
            let (lower, _, upper) = split_pivot_mut(&mut data, i);
            assert_eq!(lower.len(), i);
            assert_eq!(upper.len(), len - i - 1);
        }
    }

    #[test]
    fn test_split_pivot_mut_middle() {
        let mut data = vec![12, 11, 22, 25, 34, 50, 90];
        let (lower, pivot, upper) = split_pivot_mut(&mut data, 5);
        assert_eq!(lower, [12, 11, 22, 25, 34]);
        assert_eq!(*pivot, 50);
        assert_eq!(upper, [90]);
    }

    #[test]
    fn test_split_pivot_mut_start() {
        let mut data = vec![-7, 3, 9];
        let (lower, pivot, upper) = split_pivot_mut(&mut data, 0);
        assert_eq!(lower, []);
        assert_eq!(*pivot, -7);
        assert_eq!(upper, [3, 9]);
    }

    #[test]
    fn test_split_pivot_mut_end() {
        let mut data = vec![1, 2, 3, 90];
        let (lower, pivot, upper) = split_pivot_mut(&mut data, 3);
        assert_eq!(lower, [1, 2, 3]);
        assert_eq!(*pivot, 90);
        assert_eq!(upper, []);
    }

    #[test]
    fn test_split_pivot_mut_ranges_are_writable() {
        let mut data = vec![2, 0, 1];
        {
            let (lower, _, upper) = split_pivot_mut(&mut data, 1);
            lower[0] = -2;
            upper[0] = 5;
        }
        assert_eq!(data, [-2, 0, 5]);
    }

    #[test]
    #[should_panic]
    fn test_split_pivot_mut_empty() {
        let mut data = Vec::<i32>::new();
        split_pivot_mut(&mut data, 0);
    }

    #[test]
    #[should_panic]
    fn test_split_pivot_mut_outside() {
        let mut data = vec![1, 2];
        let _ = split_pivot_mut(&mut data, 2);
    }
}
