//! # opchain
//!
//! Chainable, eager data pipelines over in-memory sequences. A [`Pipeline<T>`] holds a
//! `Vec<T>` and an ordered list of operations; [`Pipeline::execute`] threads the sequence
//! through each operation in turn and stops at the first failure.
//!
//! ## Quick Start
//!
//! ```
//! use opchain::*;
//!
//! # fn main() -> Result<()> {
//! let (mut p, found) = Pipeline::from_vec(vec![64, 34, 25, 12, 22, 11, 90])
//!     .quick_sort(|a, b| a < b)
//!     .binary_search_tracked(|x| *x >= 25);
//!
//! let sorted = p.execute()?;
//! assert_eq!(sorted, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(found.get(), Some(3));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! Created empty ([`Pipeline::new`]) or pre-seeded ([`Pipeline::from_vec`]). Every builder
//! method appends one stage and returns the pipeline, so a chain is one expression. Nothing
//! runs until `execute`; appending is free.
//!
//! ### Operations
//!
//! Every stage implements [`Operation<T>`]. The built-in ones live in [`ops`]:
//!
//! #### Shaping (never fail)
//! - [`filter`](Pipeline::filter) / [`find`](Pipeline::find) - keep matching elements
//! - [`map`](Pipeline::map) - one-to-one transform
//! - [`distinct`](Pipeline::distinct) - first occurrence per caller-defined equality
//! - [`skip`](Pipeline::skip) / [`take`](Pipeline::take) / [`page`](Pipeline::page) - positional slicing
//!
//! #### Sorting (never fail, reorder in place)
//! - [`quick_sort`](Pipeline::quick_sort) - median-of-three quicksort, not stable
//! - [`merge_sort`](Pipeline::merge_sort) - stable
//! - [`heap_sort`](Pipeline::heap_sort) - in place, not stable
//!
//! #### Searching (fail with [`PipelineError::NotFound`])
//! - [`linear_search`](Pipeline::linear_search) / [`linear_search_exact`](Pipeline::linear_search_exact)
//! - [`binary_search`](Pipeline::binary_search) / [`binary_search_exact`](Pipeline::binary_search_exact)
//!
//! #### Aggregation
//! - [`reduce`](Pipeline::reduce) - fails with [`PipelineError::EmptyInput`] on empty input
//! - [`fold`](Pipeline::fold) - explicit identity, never fails
//! - [`group_by`] - standalone, returns [`GroupedResult`]s
//!
//! ### Relations are always explicit
//!
//! The element bound is only [`PartialEq`] (see [`Element`]). Sort order, custom equality
//! and keys are closures supplied per operation.
//!
//! ## Architecture
//!
//! - [`pipeline`] - pipeline construction and execution
//! - [`operation`] - the [`Operation`] trait
//! - [`ops`] - built-in operations
//! - [`algorithms`] - slice-level sort, search and dedup algorithms
//! - [`group`] - key grouping
//! - [`config`] - [`PipelineConfig`]
//! - [`error`] - [`PipelineError`]
//! - [`testing`] - assertion helpers, builders and fixtures for tests

pub mod algorithms;
pub mod config;
pub mod error;
pub mod group;
pub mod operation;
pub mod ops;
pub mod pipeline;
pub mod testing;

pub use config::{DistinctMode, PipelineConfig};
pub use error::{ErrorKind, PipelineError, Result};
pub use group::{group_by, group_by_ref, group_by_sorted, GroupedResult};
pub use operation::{Element, Operation};
pub use ops::FoundIndex;
pub use pipeline::Pipeline;
