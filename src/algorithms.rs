//! Slice-level algorithms behind the pipeline operations.
//!
//! Every function here takes its ordering, equality or predicate as a closure; nothing is
//! inferred from `Ord` or `Eq` on the element type. They are usable without a
//! [`Pipeline`](crate::Pipeline):
//!
//! ```
//! use opchain::algorithms::{binary_search_by, quick_sort_by};
//!
//! let mut v = vec![64, 34, 25, 12, 22, 11, 90];
//! quick_sort_by(&mut v, |a, b| a < b);
//! assert_eq!(v, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(binary_search_by(&v, |x| *x >= 25), Some(3));
//! ```
//!
//! - [`quick_sort_by`] / [`quick_sort_with_threshold`]: in place, not stable
//! - [`merge_sort_by`]: stable, O(n) index scratch
//! - [`heap_sort_by`]: in place, not stable
//! - [`linear_search_by`] / [`binary_search_by`] / [`partition_point_by`]
//! - [`dedup_full_scan`] / [`dedup_windowed`]

pub mod dedup;
pub mod heap;
pub mod merge;
pub mod quick;
pub mod search;

pub use dedup::{dedup_full_scan, dedup_windowed};
pub use heap::heap_sort_by;
pub use merge::merge_sort_by;
pub use quick::{insertion_sort_by, quick_sort_by, quick_sort_with_threshold};
pub use search::{binary_search_by, linear_search_by, partition_point_by};
