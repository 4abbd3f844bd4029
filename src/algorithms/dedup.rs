//! First-occurrence deduplication under a caller-supplied equality relation.
//!
//! `eq` does not have to be an equivalence relation. With a relation that is not
//! transitive the result depends on which accepted elements a candidate is compared
//! against, which is exactly where the two variants differ:
//!
//! ```
//! use opchain::algorithms::{dedup_full_scan, dedup_windowed};
//!
//! // "within 1 of each other" is not transitive
//! let near = |a: &i32, b: &i32| (a - b).abs() <= 1;
//!
//! assert_eq!(dedup_full_scan(vec![1, 3, 0], near), vec![1, 3]);
//! // 0 is only compared against 3, the last accepted element
//! assert_eq!(dedup_windowed(vec![1, 3, 0], 1, near), vec![1, 3, 0]);
//! ```

/// Keep the first element of every equality class, comparing each candidate against all
/// previously accepted elements. O(n · k) comparisons with k accepted elements.
pub fn dedup_full_scan<T, F>(data: Vec<T>, eq: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut out: Vec<T> = Vec::with_capacity(data.len());
    for item in data {
        if !out.iter().any(|kept| eq(&item, kept)) {
            out.push(item);
        }
    }
    out
}

/// Like [`dedup_full_scan`], but a candidate is compared only against the most recent
/// `window` accepted elements (a window of 0 is treated as 1).
///
/// Bounded at O(n · window) comparisons. Duplicates more than `window` accepted elements
/// apart are kept, as are elements that a non-transitive `eq` would reject against an
/// element outside the window.
pub fn dedup_windowed<T, F>(data: Vec<T>, window: usize, eq: F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let window = window.max(1);
    let mut out: Vec<T> = Vec::with_capacity(data.len());
    for item in data {
        let from = out.len().saturating_sub(window);
        if !out[from..].iter().any(|kept| eq(&item, kept)) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scan_keeps_first_occurrences() {
        let out = dedup_full_scan(vec![1, 2, 2, 3, 3, 3], |a, b| a == b);
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn full_scan_is_order_preserving() {
        let out = dedup_full_scan(vec![3, 1, 3, 2, 1], |a, b| a == b);
        assert_eq!(out, vec![3, 1, 2]);
    }

    #[test]
    fn window_large_enough_matches_full_scan() {
        let data: Vec<i32> = (0..300).map(|i| i % 17).collect();
        let full = dedup_full_scan(data.clone(), |a, b| a == b);
        let windowed = dedup_windowed(data, 64, |a, b| a == b);
        assert_eq!(full, windowed);
    }

    #[test]
    fn small_window_readmits_distant_duplicates() {
        let data = vec![1, 2, 3, 1];
        assert_eq!(dedup_windowed(data.clone(), 2, |a, b| a == b), vec![1, 2, 3, 1]);
        assert_eq!(dedup_windowed(data, 3, |a, b| a == b), vec![1, 2, 3]);
    }

    #[test]
    fn zero_window_acts_as_one() {
        let out = dedup_windowed(vec![1, 1, 2, 2, 1], 0, |a, b| a == b);
        assert_eq!(out, vec![1, 2, 1]);
    }

    #[test]
    fn empty_input() {
        assert!(dedup_full_scan(Vec::<u8>::new(), |a, b| a == b).is_empty());
        assert!(dedup_windowed(Vec::<u8>::new(), 8, |a, b| a == b).is_empty());
    }
}
