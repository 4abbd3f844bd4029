//! Fluent construction of input sequences.

use std::ops::RangeInclusive;

/// A fluent builder for pipeline input.
///
/// # Example
///
/// ```
/// use opchain::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16);
/// ```
#[derive(Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Append `count` copies of `value`.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Append one element per index, produced by `generator`.
    #[must_use]
    pub fn add_generated(mut self, count: usize, generator: impl Fn(usize) -> T) -> Self {
        self.data.extend((0..count).map(generator));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }
}

impl TestDataBuilder<i32> {
    /// Append every integer in `range`.
    ///
    /// ```
    /// use opchain::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::new().add_range(1..=5).build();
    /// assert_eq!(data, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range);
        self
    }
}
