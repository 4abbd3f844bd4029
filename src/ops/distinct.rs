use crate::algorithms::{dedup_full_scan, dedup_windowed};
use crate::config::DistinctMode;
use crate::error::Result;
use crate::operation::Operation;
use std::marker::PhantomData;

/// Keep the first occurrence of each equality class under a caller-supplied relation.
///
/// The [`DistinctMode`] is fixed at construction; see [`crate::algorithms::dedup`] for how
/// the two modes differ on non-transitive relations.
pub struct Distinct<T, E> {
    eq: E,
    mode: DistinctMode,
    _t: PhantomData<fn(&T)>,
}

impl<T, E> Distinct<T, E>
where
    E: Fn(&T, &T) -> bool,
{
    /// Full-history comparison.
    pub const fn new(eq: E) -> Self {
        Self::with_mode(eq, DistinctMode::FullScan)
    }

    pub const fn with_mode(eq: E, mode: DistinctMode) -> Self {
        Self {
            eq,
            mode,
            _t: PhantomData,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> DistinctMode {
        self.mode
    }
}

impl<T, E> Operation<T> for Distinct<T, E>
where
    E: Fn(&T, &T) -> bool,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let eq = &self.eq;
        Ok(match self.mode {
            DistinctMode::FullScan => dedup_full_scan(data, eq),
            DistinctMode::Window(n) => dedup_windowed(data, n, eq),
        })
    }

    fn name(&self) -> &'static str {
        match self.mode {
            DistinctMode::FullScan => "distinct",
            DistinctMode::Window(_) => "distinct_windowed",
        }
    }
}
