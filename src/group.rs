//! Key-based grouping outside the operation chain.
//!
//! Grouping changes the element type (from `T` to [`GroupedResult<K, T>`]), so it is a
//! standalone transform applied to the output of [`Pipeline::execute`](crate::Pipeline::execute)
//! rather than a pipeline stage.
//!
//! ```
//! use opchain::{group_by_sorted, Pipeline};
//!
//! let evens_and_odds = Pipeline::from_vec((1..=6).collect::<Vec<i32>>())
//!     .filter(|x| *x > 1)
//!     .execute()
//!     .unwrap();
//! let groups = group_by_sorted(evens_and_odds, |x| x % 2 == 0);
//! assert_eq!(groups[0].key, false);
//! assert_eq!(groups[0].items, vec![3, 5]);
//! assert_eq!(groups[1].items, vec![2, 4, 6]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// A key and every element that produced it, in original relative order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedResult<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> GroupedResult<K, T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition `data` into one [`GroupedResult`] per distinct key.
///
/// Members keep their original relative order. Group order is not part of the contract:
/// this implementation emits groups in order of each key's first appearance, but callers
/// wanting a fixed order should use [`group_by_sorted`].
pub fn group_by<T, K, F>(data: Vec<T>, key_fn: F) -> Vec<GroupedResult<K, T>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<GroupedResult<K, T>> = Vec::new();

    for item in data {
        let key = key_fn(&item);
        match slots.get(&key) {
            Some(&slot) => groups[slot].items.push(item),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(GroupedResult {
                    key,
                    items: vec![item],
                });
            }
        }
    }
    groups
}

/// [`group_by`] with groups ordered by key.
pub fn group_by_sorted<T, K, F>(data: Vec<T>, key_fn: F) -> Vec<GroupedResult<K, T>>
where
    K: Eq + Hash + Ord + Clone,
    F: Fn(&T) -> K,
{
    let mut groups = group_by(data, key_fn);
    groups.sort_by(|a, b| a.key.cmp(&b.key));
    groups
}

/// [`group_by`] over a borrowed slice, cloning each element into its group.
pub fn group_by_ref<T, K, F>(data: &[T], key_fn: F) -> Vec<GroupedResult<K, T>>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    group_by(data.to_vec(), key_fn)
}
