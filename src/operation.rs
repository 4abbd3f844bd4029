use crate::error::Result;

/// Minimal bound on pipeline element types.
///
/// Value equality is only used by the exact-match search conveniences; ordering and every
/// other relation are passed in as closures.
pub trait Element: 'static + PartialEq {}
impl<T> Element for T where T: 'static + PartialEq {}

/// One stage of a [`Pipeline`](crate::Pipeline).
///
/// `apply` receives the full current sequence by value and returns the sequence handed to
/// the next stage, or an error that aborts the whole run. Implementations keep only the
/// closures they were built with plus per-run state such as a found index; they never hold
/// on to the sequence after `apply` returns.
///
/// ```
/// use opchain::{Operation, Pipeline, Result};
///
/// struct Reverse;
///
/// impl Operation<i32> for Reverse {
///     fn apply(&mut self, mut data: Vec<i32>) -> Result<Vec<i32>> {
///         data.reverse();
///         Ok(data)
///     }
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
///     fn mutates_input(&self) -> bool {
///         true
///     }
/// }
///
/// let out = Pipeline::from_vec(vec![1, 2, 3])
///     .add_operation(Reverse)
///     .execute()
///     .unwrap();
/// assert_eq!(out, vec![3, 2, 1]);
/// ```
pub trait Operation<T> {
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>>;

    /// Stable identifier used in log events and error messages.
    fn name(&self) -> &'static str;

    /// Whether `apply` reorders the buffer it was handed in place and returns that same
    /// allocation (the sorts), rather than building a new sequence.
    fn mutates_input(&self) -> bool {
        false
    }

    /// Index recorded by the most recent run, for searches. `None` otherwise.
    fn found_index(&self) -> Option<usize> {
        None
    }
}
