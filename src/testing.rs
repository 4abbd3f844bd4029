//! Helpers for testing code built on opchain pipelines.
//!
//! - **Assertions**: compare pipeline outputs with expected results, check ordering and
//!   permutation properties, and compare grouped output without depending on group order
//! - **Builders**: assemble input sequences fluently with [`TestDataBuilder`]
//! - **Fixtures**: small ready-made record sets ([`sample_orders`], [`sample_users`], ...)
//!
//! # Quick Start
//!
//! ```
//! use opchain::Pipeline;
//! use opchain::testing::*;
//!
//! let input = TestDataBuilder::new()
//!     .add_range(1..=5)
//!     .add_repeated(3, 2)
//!     .build();
//!
//! let out = Pipeline::from_vec(input.clone())
//!     .merge_sort(|a, b| a < b)
//!     .execute()
//!     .unwrap();
//!
//! assert_sorted_by(&out, |a, b| a < b);
//! assert_permutation_of(out, input);
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
