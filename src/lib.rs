//! # Lomuto
//!
//! *Lomuto* sorts integer arrays in place using quicksort with the Lomuto partition scheme.
//!
//! The pivot of every range is its last element.
//! Elements equal to the pivot are moved to the lower side, so equal values end up next to each other but their relative order is not preserved.
//!
//! ## Components
//!
//! - The [sorting core](crate::sort): [`swap`](crate::sort::swap), [`partition`](crate::sort::partition), and the [recursive](crate::sort::quicksort) and [work-stack](crate::sort::quicksort_stack) drivers.
//! - The [array printer](crate::print).
//! - The [demo report](crate::demo) printed by the `lomuto` binary.
//!
//! # Example
//!
//! ```
//! use lomuto::sort::quicksort;
//!
//! let mut data = [64, 34, 25, 12, 22, 11, 90, 88, 76, 50];
//! quicksort(&mut data);
//! assert_eq!(data, [11, 12, 22, 25, 34, 50, 64, 76, 88, 90]);
//! ```

#![deny(missing_docs, missing_debug_implementations)]

pub mod ctx;
pub mod data;
pub mod demo;
pub mod print;
pub mod sort;
mod util;
