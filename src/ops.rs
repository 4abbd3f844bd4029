//! Built-in [`Operation`](crate::Operation) implementations.
//!
//! Each struct here is what a [`Pipeline`](crate::Pipeline) builder method registers. They
//! are public so a caller can build one directly, keep a handle to it, and pass it to
//! [`Pipeline::add_operation`](crate::Pipeline::add_operation).
//!
//! | operation | allocates | reorders in place | can fail |
//! |---|---|---|---|
//! | [`Filter`], [`Find`], [`Map`], [`Distinct`] | yes | no | no |
//! | [`Skip`], [`Take`] | no | no | no |
//! | [`QuickSort`], [`MergeSort`], [`HeapSort`] | merge sort: index scratch | yes | no |
//! | [`LinearSearch`], [`BinarySearch`], [`ExactBinarySearch`] | no | no | [`NotFound`](crate::PipelineError::NotFound) |
//! | [`Reduce`] | yes | no | [`EmptyInput`](crate::PipelineError::EmptyInput) |
//! | [`Fold`] | yes | no | no |

pub mod distinct;
pub mod reduce;
pub mod search;
pub mod shaping;
pub mod sort;

pub use distinct::Distinct;
pub use reduce::{Fold, Reduce};
pub use search::{BinarySearch, ExactBinarySearch, FoundIndex, LinearSearch};
pub use shaping::{Filter, Find, Map, Skip, Take};
pub use sort::{HeapSort, MergeSort, QuickSort};
