use crate::error::{PipelineError, Result};
use crate::operation::Operation;
use std::marker::PhantomData;

/// Left fold seeded with the first element. Produces a one-element sequence.
///
/// There is no identity element, so an empty sequence fails with
/// [`PipelineError::EmptyInput`]. Use [`Fold`] when an identity exists.
pub struct Reduce<T, R> {
    reducer: R,
    _t: PhantomData<fn(T, &T) -> T>,
}

impl<T, R> Reduce<T, R>
where
    R: Fn(T, &T) -> T,
{
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            _t: PhantomData,
        }
    }
}

impl<T, R> Operation<T> for Reduce<T, R>
where
    R: Fn(T, &T) -> T,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let mut items = data.into_iter();
        let first = items.next().ok_or(PipelineError::EmptyInput {
            operation: "reduce",
        })?;
        let acc = items.fold(first, |acc, item| (self.reducer)(acc, &item));
        Ok(vec![acc])
    }

    fn name(&self) -> &'static str {
        "reduce"
    }
}

/// Left fold from an explicit initial value. Always produces exactly one element.
pub struct Fold<T, R> {
    init: T,
    reducer: R,
}

impl<T, R> Fold<T, R>
where
    T: Clone,
    R: Fn(T, &T) -> T,
{
    pub const fn new(init: T, reducer: R) -> Self {
        Self { init, reducer }
    }
}

impl<T, R> Operation<T> for Fold<T, R>
where
    T: Clone,
    R: Fn(T, &T) -> T,
{
    fn apply(&mut self, data: Vec<T>) -> Result<Vec<T>> {
        let acc = data
            .iter()
            .fold(self.init.clone(), |acc, item| (self.reducer)(acc, item));
        Ok(vec![acc])
    }

    fn name(&self) -> &'static str {
        "fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reduce_sums_left_to_right() {
        let mut op = Reduce::new(|acc: i32, x: &i32| acc + x);
        assert_eq!(op.apply(vec![1, 2, 3, 4]).unwrap(), vec![10]);
    }

    #[test]
    fn reduce_order_is_left_fold() {
        let mut op = Reduce::new(|acc: String, x: &String| format!("({acc}{x})"));
        let out = op
            .apply(vec!["a".into(), "b".into(), "c".into()])
            .unwrap();
        assert_eq!(out, vec!["((ab)c)".to_string()]);
    }

    #[test]
    fn reduce_empty_is_error_and_single_is_identity() {
        let mut op = Reduce::new(|acc: i32, x: &i32| acc * x);
        assert_eq!(op.apply(vec![]).unwrap_err().kind(), ErrorKind::EmptyInput);
        assert_eq!(op.apply(vec![7]).unwrap(), vec![7]);
    }

    #[test]
    fn fold_handles_empty_input() {
        let mut op = Fold::new(0, |acc: i32, x: &i32| acc + x);
        assert_eq!(op.apply(vec![]).unwrap(), vec![0]);
        assert_eq!(op.apply(vec![5, 5]).unwrap(), vec![10]);
    }
}
