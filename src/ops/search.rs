//! Search operations. Both pass the sequence through unchanged and signal the outcome
//! through the error channel, recording the matching index on the side.

use crate::algorithms::{binary_search_by, linear_search_by, partition_point_by};
use crate::error::{PipelineError, Result};
use crate::operation::Operation;
use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;
use tracing::trace;

/// Shared view of the index a search recorded on its most recent run.
///
/// Cloning is cheap; every clone observes the same slot. Each run overwrites the slot, so
/// after a failed search it reads `None`.
///
/// ```
/// use opchain::Pipeline;
///
/// let (mut p, found) = Pipeline::from_vec(vec![5, 1, 4])
///     .quick_sort(|a, b| a < b)
///     .binary_search_tracked(|x| *x >= 4);
/// assert_eq!(found.get(), None);
/// p.execute().unwrap();
/// assert_eq!(found.get(), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FoundIndex(Rc<Cell<Option<usize>>>);

impl FoundIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self) -> Option<usize> {
        self.0.get()
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.0.get().is_some()
    }

    fn set(&self, value: Option<usize>) {
        self.0.set(value);
    }
}

/// Succeed if any element satisfies the predicate, scanning from the front.
pub struct LinearSearch<T, P> {
    predicate: P,
    found: FoundIndex,
    _t: PhantomData<fn(&T)>,
}

impl<T, P> LinearSearch<T, P>
where
    P: Fn(&T) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            found: FoundIndex::new(),
            _t: PhantomData,
        }
    }

    /// Handle onto the index of the first match.
    #[must_use]
    pub fn found_handle(&self) -> FoundIndex {
        self.found.clone()
    }
}

impl<T: PartialEq> LinearSearch<T, Box<dyn Fn(&T) -> bool>>
where
    T: 'static,
{
    /// Search for an element equal to `target` under `PartialEq`.
    pub fn exact(target: T) -> Self {
        Self::new(Box::new(move |item: &T| *item == target))
    }
}

impl<T, P> Operation<T> for LinearSearch<T, P>
where
    P: Fn(&T) -> bool,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let hit = linear_search_by(&data, &self.predicate);
        self.found.set(hit);
        trace!(operation = "linear_search", len = data.len(), found = ?hit, "searched");
        match hit {
            Some(_) => Ok(data),
            None => Err(PipelineError::NotFound {
                operation: "linear_search",
            }),
        }
    }

    fn name(&self) -> &'static str {
        "linear_search"
    }

    fn found_index(&self) -> Option<usize> {
        self.found.get()
    }
}

/// Partition-point search for the first element satisfying a monotone predicate.
///
/// The sequence must already be arranged so the predicate is false for a prefix and true
/// for the rest, typically by sorting and searching with `x >= target`. This is not
/// checked.
pub struct BinarySearch<T, P> {
    predicate: P,
    found: FoundIndex,
    _t: PhantomData<fn(&T)>,
}

impl<T, P> BinarySearch<T, P>
where
    P: Fn(&T) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            found: FoundIndex::new(),
            _t: PhantomData,
        }
    }

    #[must_use]
    pub fn found_handle(&self) -> FoundIndex {
        self.found.clone()
    }
}

impl<T, P> Operation<T> for BinarySearch<T, P>
where
    P: Fn(&T) -> bool,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let hit = binary_search_by(&data, &self.predicate);
        self.found.set(hit);
        trace!(operation = "binary_search", len = data.len(), found = ?hit, "searched");
        match hit {
            Some(_) => Ok(data),
            None => Err(PipelineError::NotFound {
                operation: "binary_search",
            }),
        }
    }

    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn found_index(&self) -> Option<usize> {
        self.found.get()
    }
}

/// Binary search for a value equal to `target` in data sorted by `less`.
///
/// Locates the first element that does not sort before `target` and succeeds only if it
/// compares equal under `PartialEq`.
pub struct ExactBinarySearch<T, C> {
    target: T,
    less: C,
    found: FoundIndex,
}

impl<T, C> ExactBinarySearch<T, C>
where
    T: PartialEq,
    C: Fn(&T, &T) -> bool,
{
    pub fn new(target: T, less: C) -> Self {
        Self {
            target,
            less,
            found: FoundIndex::new(),
        }
    }

    #[must_use]
    pub fn found_handle(&self) -> FoundIndex {
        self.found.clone()
    }
}

impl<T, C> Operation<T> for ExactBinarySearch<T, C>
where
    T: PartialEq,
    C: Fn(&T, &T) -> bool,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let idx = partition_point_by(&data, |item| !(self.less)(item, &self.target));
        let hit = (idx < data.len() && data[idx] == self.target).then_some(idx);
        self.found.set(hit);
        trace!(operation = "binary_search_exact", len = data.len(), found = ?hit, "searched");
        match hit {
            Some(_) => Ok(data),
            None => Err(PipelineError::NotFound {
                operation: "binary_search_exact",
            }),
        }
    }

    fn name(&self) -> &'static str {
        "binary_search_exact"
    }

    fn found_index(&self) -> Option<usize> {
        self.found.get()
    }
}
