//! Sorting operations. All three reorder the buffer they receive in place and hand the
//! same allocation to the next stage.

use crate::algorithms::{heap_sort_by, merge_sort_by, quick_sort_with_threshold};
use crate::config::DEFAULT_INSERTION_THRESHOLD;
use crate::error::Result;
use crate::operation::Operation;
use std::marker::PhantomData;
use tracing::trace;

/// Quicksort under a strict less-than comparator. Not stable.
pub struct QuickSort<T, C> {
    less: C,
    threshold: usize,
    _t: PhantomData<fn(&T)>,
}

impl<T, C> QuickSort<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub const fn new(less: C) -> Self {
        Self {
            less,
            threshold: DEFAULT_INSERTION_THRESHOLD,
            _t: PhantomData,
        }
    }

    /// Override the insertion-sort cutoff (floored at 2 when sorting).
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }
}

impl<T, C> Operation<T> for QuickSort<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn apply(&mut self, mut data: Vec<T>) -> Result<Vec<T>> {
        trace!(
            algorithm = "quick_sort",
            len = data.len(),
            threshold = self.threshold,
            "sorting"
        );
        quick_sort_with_threshold(&mut data, self.threshold, &self.less);
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn mutates_input(&self) -> bool {
        true
    }
}

/// Merge sort under a strict less-than comparator. Stable.
pub struct MergeSort<T, C> {
    less: C,
    _t: PhantomData<fn(&T)>,
}

impl<T, C> MergeSort<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub const fn new(less: C) -> Self {
        Self {
            less,
            _t: PhantomData,
        }
    }
}

impl<T, C> Operation<T> for MergeSort<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn apply(&mut self, mut data: Vec<T>) -> Result<Vec<T>> {
        trace!(algorithm = "merge_sort", len = data.len(), "sorting");
        merge_sort_by(&mut data, &self.less);
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn mutates_input(&self) -> bool {
        true
    }
}

/// Heap sort under a strict less-than comparator. Not stable.
pub struct HeapSort<T, C> {
    less: C,
    _t: PhantomData<fn(&T)>,
}

impl<T, C> HeapSort<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    pub const fn new(less: C) -> Self {
        Self {
            less,
            _t: PhantomData,
        }
    }
}

impl<T, C> Operation<T> for HeapSort<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn apply(&mut self, mut data: Vec<T>) -> Result<Vec<T>> {
        trace!(algorithm = "heap_sort", len = data.len(), "sorting");
        heap_sort_by(&mut data, &self.less);
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "heap_sort"
    }

    fn mutates_input(&self) -> bool {
        true
    }
}
