//! Linear and partition-point searches over slices.

/// Index of the first element satisfying `predicate`, scanning from the front.
pub fn linear_search_by<T, P>(data: &[T], predicate: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    data.iter().position(predicate)
}

/// First index at which `predicate` becomes true, assuming `data` is partitioned so that
/// `predicate` is false for a prefix and true for the rest.
///
/// Returns `data.len()` when no element satisfies `predicate`. O(log n) predicate calls.
pub fn partition_point_by<T, P>(data: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    let (mut lo, mut hi) = (0, data.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if predicate(&data[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Binary search for the first element satisfying a monotone `predicate`.
///
/// Finds the [partition point](partition_point_by) and confirms it actually satisfies
/// `predicate`; a predicate that is not monotone over `data` (e.g. `x == target` on sorted
/// data) only matches when the partition point happens to land on a satisfying element.
/// Returns `None` for empty input.
pub fn binary_search_by<T, P>(data: &[T], predicate: P) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    let idx = partition_point_by(data, &predicate);
    (idx < data.len() && predicate(&data[idx])).then_some(idx)
}
