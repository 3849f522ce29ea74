//! The input data of the demo.

/// The number of items in [`DEMO_DATA`].
pub const ARRAY_SIZE: usize = 10;

/// The unsorted array sorted by the demo.
pub const DEMO_DATA: [i32; ARRAY_SIZE] = [64, 34, 25, 12, 22, 11, 90, 88, 76, 50];
