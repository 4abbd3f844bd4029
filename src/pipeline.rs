use crate::config::{DistinctMode, PipelineConfig};
use crate::error::Result;
use crate::operation::{Element, Operation};
use crate::ops::{
    BinarySearch, Distinct, ExactBinarySearch, Filter, Find, Fold, FoundIndex, HeapSort,
    LinearSearch, Map, MergeSort, QuickSort, Reduce, Skip, Take,
};
use std::fmt;
use tracing::{debug, debug_span, trace, warn};

// -------- Pipeline --------

/// An ordered list of operations plus the sequence they will run over.
///
/// Builder methods append a stage and hand the pipeline back, so a whole chain reads as one
/// expression. Nothing runs until [`execute`](Pipeline::execute).
///
/// ```
/// use opchain::Pipeline;
///
/// let out = Pipeline::from_vec(vec![5, -1, 3, 8, 3, 0])
///     .filter(|x| *x > 0)
///     .map(|x| x * 10)
///     .distinct(|a, b| a == b)
///     .quick_sort(|a, b| a < b)
///     .execute()
///     .unwrap();
/// assert_eq!(out, vec![30, 50, 80]);
/// ```
pub struct Pipeline<T> {
    operations: Vec<Box<dyn Operation<T>>>,
    data: Vec<T>,
    config: PipelineConfig,
}

impl<T: Element> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self.operations.iter().map(|op| op.name()).collect();
        f.debug_struct("Pipeline")
            .field("operations", &names)
            .field("len", &self.data.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Element> Pipeline<T> {
    /// An empty pipeline with no data and the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            operations: Vec::new(),
            data: Vec::new(),
            config,
        }
    }

    /// A pipeline pre-seeded with `data`.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new().with_data(data)
    }

    /// Replace the sequence the next [`execute`](Pipeline::execute) will run over.
    #[must_use]
    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }

    /// In-place form of [`with_data`](Pipeline::with_data), for re-running a pipeline that
    /// has already executed.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
    }

    /// Append a caller-defined operation.
    #[must_use]
    pub fn add_operation<O>(mut self, op: O) -> Self
    where
        O: Operation<T> + 'static,
    {
        self.operations.push(Box::new(op));
        self
    }

    /// Run every operation in registration order, feeding each output into the next.
    ///
    /// The current sequence is moved out of the pipeline; afterwards [`data`](Pipeline::data)
    /// is empty until new data is bound. Operations stay registered, so their recorded state
    /// remains queryable and the pipeline can be executed again.
    ///
    /// # Errors
    /// Returns the first error any operation raises. Later operations do not run and no
    /// partially transformed sequence is returned.
    pub fn execute(&mut self) -> Result<Vec<T>> {
        let span = debug_span!("pipeline.execute", operations = self.operations.len());
        let _enter = span.enter();

        let mut data = std::mem::take(&mut self.data);
        for (stage, op) in self.operations.iter_mut().enumerate() {
            let input_len = data.len();
            data = match op.apply(data) {
                Ok(out) => out,
                Err(err) => {
                    warn!(stage, operation = op.name(), error = %err, "operation failed");
                    return Err(err);
                }
            };
            trace!(
                stage,
                operation = op.name(),
                input_len,
                output_len = data.len(),
                "applied"
            );
        }
        debug!(len = data.len(), "pipeline finished");
        Ok(data)
    }

    /// Registered operations, in execution order.
    #[must_use]
    pub fn operations(&self) -> &[Box<dyn Operation<T>>] {
        &self.operations
    }

    /// The operation registered at `index`, if any.
    #[must_use]
    pub fn operation(&self, index: usize) -> Option<&dyn Operation<T>> {
        self.operations.get(index).map(|op| op.as_ref())
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The sequence the next run will start from.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

// ---- stage builders ----
impl<T: Element> Pipeline<T> {
    /// Keep elements for which `predicate` holds.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: 'static + Fn(&T) -> bool,
    {
        self.add_operation(Filter::new(predicate))
    }

    /// Replace each element with `mapper(&element)`.
    #[must_use]
    pub fn map<F>(self, mapper: F) -> Self
    where
        F: 'static + Fn(&T) -> T,
    {
        self.add_operation(Map::new(mapper))
    }

    /// Collect all elements matching `predicate`; no match is an empty result.
    #[must_use]
    pub fn find<P>(self, predicate: P) -> Self
    where
        P: 'static + Fn(&T) -> bool,
    {
        self.add_operation(Find::new(predicate))
    }

    /// Keep the first occurrence per equality class, using the config's
    /// [`DistinctMode`] (full scan unless configured otherwise).
    #[must_use]
    pub fn distinct<E>(self, eq: E) -> Self
    where
        E: 'static + Fn(&T, &T) -> bool,
    {
        let mode = self.config.distinct_mode;
        self.distinct_with_mode(eq, mode)
    }

    /// [`distinct`](Pipeline::distinct) with an explicit mode, regardless of the config.
    #[must_use]
    pub fn distinct_with_mode<E>(self, eq: E, mode: DistinctMode) -> Self
    where
        E: 'static + Fn(&T, &T) -> bool,
    {
        self.add_operation(Distinct::with_mode(eq, mode))
    }

    /// Quicksort in place; `less(a, b)` means `a` sorts before `b`. Not stable.
    #[must_use]
    pub fn quick_sort<C>(self, less: C) -> Self
    where
        C: 'static + Fn(&T, &T) -> bool,
    {
        let threshold = self.config.insertion_threshold;
        self.add_operation(QuickSort::new(less).with_threshold(threshold))
    }

    /// Stable merge sort; `less(a, b)` means `a` sorts before `b`.
    #[must_use]
    pub fn merge_sort<C>(self, less: C) -> Self
    where
        C: 'static + Fn(&T, &T) -> bool,
    {
        self.add_operation(MergeSort::new(less))
    }

    /// Heap sort in place; `less(a, b)` means `a` sorts before `b`. Not stable.
    #[must_use]
    pub fn heap_sort<C>(self, less: C) -> Self
    where
        C: 'static + Fn(&T, &T) -> bool,
    {
        self.add_operation(HeapSort::new(less))
    }

    /// Fail with [`NotFound`](crate::PipelineError::NotFound) unless some element
    /// satisfies `predicate`.
    #[must_use]
    pub fn linear_search<P>(self, predicate: P) -> Self
    where
        P: 'static + Fn(&T) -> bool,
    {
        self.linear_search_tracked(predicate).0
    }

    /// [`linear_search`](Pipeline::linear_search) for an element equal to `target`.
    #[must_use]
    pub fn linear_search_exact(self, target: T) -> Self {
        self.linear_search(move |item| *item == target)
    }

    /// [`linear_search`](Pipeline::linear_search), also returning a handle to the index of
    /// the first match.
    #[must_use]
    pub fn linear_search_tracked<P>(self, predicate: P) -> (Self, FoundIndex)
    where
        P: 'static + Fn(&T) -> bool,
    {
        let op = LinearSearch::new(predicate);
        let found = op.found_handle();
        (self.add_operation(op), found)
    }

    /// Partition-point search: the sequence must already be ordered so `predicate` is
    /// false for a prefix and true for the rest. Fails with
    /// [`NotFound`](crate::PipelineError::NotFound) when no element satisfies it.
    #[must_use]
    pub fn binary_search<P>(self, predicate: P) -> Self
    where
        P: 'static + Fn(&T) -> bool,
    {
        self.binary_search_tracked(predicate).0
    }

    /// Binary search on data sorted by `less` for an element equal to `target`.
    ///
    /// Finds the first element not sorting before `target`, then requires it to be
    /// `== target`. Records the index of the first equal element.
    #[must_use]
    pub fn binary_search_exact<C>(self, target: T, less: C) -> Self
    where
        C: 'static + Fn(&T, &T) -> bool,
    {
        self.binary_search_exact_tracked(target, less).0
    }

    /// [`binary_search_exact`](Pipeline::binary_search_exact) with a [`FoundIndex`] handle.
    #[must_use]
    pub fn binary_search_exact_tracked<C>(self, target: T, less: C) -> (Self, FoundIndex)
    where
        C: 'static + Fn(&T, &T) -> bool,
    {
        let op = ExactBinarySearch::new(target, less);
        let found = op.found_handle();
        (self.add_operation(op), found)
    }

    /// [`binary_search`](Pipeline::binary_search), also returning a handle to the index it
    /// finds.
    #[must_use]
    pub fn binary_search_tracked<P>(self, predicate: P) -> (Self, FoundIndex)
    where
        P: 'static + Fn(&T) -> bool,
    {
        let op = BinarySearch::new(predicate);
        let found = op.found_handle();
        (self.add_operation(op), found)
    }

    /// Fold left seeded with the first element. Fails with
    /// [`EmptyInput`](crate::PipelineError::EmptyInput) on an empty sequence.
    #[must_use]
    pub fn reduce<R>(self, reducer: R) -> Self
    where
        R: 'static + Fn(T, &T) -> T,
    {
        self.add_operation(Reduce::new(reducer))
    }

    /// Fold left from `init`. Never fails; always yields one element.
    #[must_use]
    pub fn fold<R>(self, init: T, reducer: R) -> Self
    where
        T: Clone,
        R: 'static + Fn(T, &T) -> T,
    {
        self.add_operation(Fold::new(init, reducer))
    }

    /// Drop the first `count` elements.
    #[must_use]
    pub fn skip(self, count: usize) -> Self {
        self.add_operation(Skip::new(count))
    }

    /// Keep at most the first `count` elements.
    #[must_use]
    pub fn take(self, count: usize) -> Self {
        self.add_operation(Take::new(count))
    }

    /// Zero-based page of `page_size` elements: `skip(page * page_size).take(page_size)`.
    #[must_use]
    pub fn page(self, page: usize, page_size: usize) -> Self {
        self.skip(page.saturating_mul(page_size)).take(page_size)
    }
}
