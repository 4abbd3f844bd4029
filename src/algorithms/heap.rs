//! In-place heap sort.

/// Sort `data` in place so that `less(a, b)` implies `a` is placed before `b`. Not stable.
///
/// Builds a max-heap under `less` bottom-up, then repeatedly swaps the root (the element
/// that sorts last) to the end of the shrinking heap and sifts the new root down.
pub fn heap_sort_by<T, F>(data: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = data.len();
    if n < 2 {
        return;
    }
    for i in (0..n / 2).rev() {
        sift_down(data, i, n, &less);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &less);
    }
}

/// Restore the heap property for the subtree rooted at `i` within `data[..n]`.
fn sift_down<T, F>(data: &mut [T], mut i: usize, n: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let left = 2 * i + 1;
        let right = left + 1;
        let mut largest = i;

        if left < n && less(&data[largest], &data[left]) {
            largest = left;
        }
        if right < n && less(&data[largest], &data[right]) {
            largest = right;
        }
        if largest == i {
            break;
        }
        data.swap(i, largest);
        i = largest;
    }
}
