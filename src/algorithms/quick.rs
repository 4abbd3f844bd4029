//! Quicksort with median-of-three pivots and an insertion-sort cutoff.
//!
//! The larger side of every partition is handled by the loop and only the smaller side
//! recurses, so stack depth stays O(log n) even when partitions are badly skewed.

use crate::config::DEFAULT_INSERTION_THRESHOLD;

/// Sort `data` in place so that `less(a, b)` implies `a` is placed before `b`.
///
/// Not stable. Uses [`DEFAULT_INSERTION_THRESHOLD`] as the insertion-sort cutoff.
pub fn quick_sort_by<T, F>(data: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    quick_sort_with_threshold(data, DEFAULT_INSERTION_THRESHOLD, less);
}

/// [`quick_sort_by`] with an explicit insertion-sort cutoff (floored at 2).
pub fn quick_sort_with_threshold<T, F>(data: &mut [T], threshold: usize, less: F)
where
    F: Fn(&T, &T) -> bool,
{
    if data.len() <= 1 {
        return;
    }
    sort_range(data, threshold.max(2), &less);
}

fn sort_range<T, F>(mut v: &mut [T], threshold: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        if v.len() <= threshold {
            insertion_sort_by(v, less);
            return;
        }
        median_of_three(v, less);
        let p = partition(v, less);

        let (left, right) = std::mem::take(&mut v).split_at_mut(p);
        // right[0] is the pivot, already in its final slot
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_range(left, threshold, less);
            v = right;
        } else {
            sort_range(right, threshold, less);
            v = left;
        }
    }
}

/// Order first, middle and last so the median of the three ends up in the last slot,
/// where [`partition`] expects its pivot.
fn median_of_three<T, F>(v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let hi = v.len() - 1;
    let mid = hi / 2;
    if less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }
    if less(&v[hi], &v[0]) {
        v.swap(0, hi);
    }
    // v[0] is now the minimum; keep the smaller of the other two at `hi`
    if less(&v[mid], &v[hi]) {
        v.swap(mid, hi);
    }
}

/// Two-pointer partition around the pivot stored at the last index.
///
/// Returns the pivot's final index `p`: everything in `..p` sorts before the pivot and
/// nothing in `p + 1..` does.
fn partition<T, F>(v: &mut [T], less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let pivot = v.len() - 1;
    let mut left = 0;
    // `right` is exclusive: v[right..pivot] is known not to sort before the pivot
    let mut right = pivot;

    loop {
        while left < right && less(&v[left], &v[pivot]) {
            left += 1;
        }
        while left < right && !less(&v[right - 1], &v[pivot]) {
            right -= 1;
        }
        if left >= right {
            break;
        }
        v.swap(left, right - 1);
        left += 1;
        right -= 1;
    }

    v.swap(left, pivot);
    left
}

/// Stable insertion sort. Used by quicksort for short ranges.
pub fn insertion_sort_by<T, F>(v: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
