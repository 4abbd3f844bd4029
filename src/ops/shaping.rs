//! Element-wise and positional operations: filter, find, map, skip, take.

use crate::error::Result;
use crate::operation::Operation;
use std::marker::PhantomData;

/// Keep the elements satisfying a predicate, in order.
pub struct Filter<T, P> {
    predicate: P,
    _t: PhantomData<fn(&T)>,
}

impl<T, P> Filter<T, P>
where
    P: Fn(&T) -> bool,
{
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _t: PhantomData,
        }
    }
}

impl<T, P> Operation<T> for Filter<T, P>
where
    P: Fn(&T) -> bool,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(data.len());
        out.extend(data.into_iter().filter(|t| (self.predicate)(t)));
        // don't carry a large, mostly empty buffer into the next stage
        if out.capacity() > 2 * out.len() {
            out.shrink_to_fit();
        }
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}

/// Collect every element matching a predicate. An empty result is not an error.
///
/// Same output as [`Filter`]; registered separately so a pipeline reads as "locate
/// matches" where that is the intent.
pub struct Find<T, P> {
    predicate: P,
    _t: PhantomData<fn(&T)>,
}

impl<T, P> Find<T, P>
where
    P: Fn(&T) -> bool,
{
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            _t: PhantomData,
        }
    }
}

impl<T, P> Operation<T> for Find<T, P>
where
    P: Fn(&T) -> bool,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        Ok(data.into_iter().filter(|t| (self.predicate)(t)).collect())
    }

    fn name(&self) -> &'static str {
        "find"
    }
}

/// Replace every element with `mapper(&element)`, one to one, in order.
pub struct Map<T, F> {
    mapper: F,
    _t: PhantomData<fn(&T) -> T>,
}

impl<T, F> Map<T, F>
where
    F: Fn(&T) -> T,
{
    pub const fn new(mapper: F) -> Self {
        Self {
            mapper,
            _t: PhantomData,
        }
    }
}

impl<T, F> Operation<T> for Map<T, F>
where
    F: Fn(&T) -> T,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        Ok(data.iter().map(|t| (self.mapper)(t)).collect())
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

/// Drop the first `count` elements. Skipping past the end yields an empty sequence.
#[derive(Clone, Copy, Debug)]
pub struct Skip {
    count: usize,
}

impl Skip {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<T> Operation<T> for Skip {
    fn apply(&mut self, mut data: Vec<T>) -> Result<Vec<T>> {
        if self.count >= data.len() {
            data.clear();
        } else if self.count > 0 {
            data.drain(..self.count);
        }
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "skip"
    }
}

/// Keep only the first `count` elements, clamped to the sequence length.
#[derive(Clone, Copy, Debug)]
pub struct Take {
    count: usize,
}

impl Take {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<T> Operation<T> for Take {
    fn apply(&mut self, mut data: Vec<T>) -> Result<Vec<T>> {
        data.truncate(self.count);
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "take"
    }
}
