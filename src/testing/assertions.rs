//! Assertion functions for pipeline outputs.
//!
//! Every function panics with a message that shows both sides of the comparison, so a
//! failing test points at the offending element rather than just the collection.

use crate::group::GroupedResult;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two sequences are equal, element by element, in order.
///
/// # Panics
///
/// Panics if the lengths differ or any position differs.
///
/// # Example
///
/// ```
/// use opchain::testing::assert_collections_equal;
///
/// assert_collections_equal(vec![1, 2, 3], vec![1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: Vec<T>, expected: Vec<T>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a == e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two sequences hold the same elements with the same multiplicities, in any
/// order.
///
/// Only [`PartialEq`] is required: each expected element is matched against a distinct,
/// not yet matched, actual element.
///
/// # Panics
///
/// Panics if some element has no counterpart on the other side.
///
/// # Example
///
/// ```
/// use opchain::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(vec![3, 1, 2, 1], vec![1, 1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + PartialEq>(actual: Vec<T>, expected: Vec<T>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let mut matched = vec![false; actual.len()];
    for e in &expected {
        let slot = actual
            .iter()
            .enumerate()
            .position(|(i, a)| !matched[i] && a == e);
        match slot {
            Some(i) => matched[i] = true,
            None => panic!(
                "Element missing from actual collection:\n  Looking for: {e:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
            ),
        }
    }
}

/// Assert that `actual` is a rearrangement of `original`.
///
/// Alias of [`assert_collections_unordered_equal`] that reads better after a sort.
///
/// # Panics
///
/// Panics if the multisets differ.
pub fn assert_permutation_of<T: Debug + PartialEq>(actual: Vec<T>, original: Vec<T>) {
    assert_collections_unordered_equal(actual, original);
}

/// Assert that no adjacent pair is out of order under `less`, i.e. `less(s[i+1], s[i])`
/// never holds.
///
/// # Panics
///
/// Panics at the first inverted pair.
///
/// # Example
///
/// ```
/// use opchain::testing::assert_sorted_by;
///
/// assert_sorted_by(&[1, 2, 2, 5], |a, b| a < b);
/// assert_sorted_by(&[9, 4, 4, 0], |a, b| a > b);
/// ```
pub fn assert_sorted_by<T: Debug>(collection: &[T], less: impl Fn(&T, &T) -> bool) {
    for (i, pair) in collection.windows(2).enumerate() {
        assert!(
            !less(&pair[1], &pair[0]),
            "Collection not sorted at index {}:\n  {:?} sorts before {:?}\n  Collection: {collection:?}",
            i + 1,
            pair[1],
            pair[0]
        );
    }
}

/// Assert that all elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use opchain::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
///
/// # Example
///
/// ```
/// use opchain::testing::assert_none;
///
/// assert_none(&[1, 3, 5, 7], |x| x % 2 == 0);
/// ```
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that two group-by outputs are equal, ignoring the order of the groups.
///
/// Members within a group are compared in order, since grouping preserves the input's
/// relative order.
///
/// # Panics
///
/// Panics if a key is missing on either side, appears twice, or its members differ.
///
/// # Example
///
/// ```
/// use opchain::{group_by, GroupedResult};
/// use opchain::testing::assert_groups_unordered_equal;
///
/// let groups = group_by(vec![1, 2, 3, 4], |x| x % 2);
/// assert_groups_unordered_equal(
///     groups,
///     vec![
///         GroupedResult { key: 0, items: vec![2, 4] },
///         GroupedResult { key: 1, items: vec![1, 3] },
///     ],
/// );
/// ```
pub fn assert_groups_unordered_equal<K, T>(
    actual: Vec<GroupedResult<K, T>>,
    expected: Vec<GroupedResult<K, T>>,
) where
    K: Debug + Eq + Hash,
    T: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    let mut by_key: HashMap<&K, &Vec<T>> = HashMap::with_capacity(actual.len());
    for group in &actual {
        let previous = by_key.insert(&group.key, &group.items);
        assert!(
            previous.is_none(),
            "Duplicate group key in actual output: {:?}",
            group.key
        );
    }

    for group in &expected {
        match by_key.get(&group.key) {
            Some(items) if **items == group.items => {}
            Some(items) => panic!(
                "Group members mismatch for key {:?}:\n  Expected: {:?}\n  Actual: {items:?}",
                group.key, group.items
            ),
            None => panic!("Group missing for key: {:?}", group.key),
        }
    }
}
