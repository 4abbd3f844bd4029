//! Stable top-down merge sort.
//!
//! The sort runs over a permutation of indices into `data` with a single scratch buffer
//! sized to the whole input, allocated once per call. The finished permutation is then
//! applied to `data` in place by following its cycles, so elements are only ever swapped
//! and `T` needs neither `Clone` nor `Copy`.

/// Sort `data` in place, stable, so that `less(a, b)` implies `a` is placed before `b`.
///
/// Elements for which neither `less(a, b)` nor `less(b, a)` holds keep their relative order.
pub fn merge_sort_by<T, F>(data: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = data.len();
    if n < 2 {
        return;
    }
    let mut order: Vec<usize> = (0..n).collect();
    let mut scratch = vec![0usize; n];
    sort_indices(&mut order, &mut scratch, data, &less);
    apply_permutation(data, &mut order);
}

fn sort_indices<T, F>(order: &mut [usize], scratch: &mut [usize], data: &[T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = order.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (lo, hi) = order.split_at_mut(mid);
        let (scratch_lo, scratch_hi) = scratch.split_at_mut(mid);
        sort_indices(lo, scratch_lo, data, less);
        sort_indices(hi, scratch_hi, data, less);
    }
    // already in order: the two halves are one sorted run
    if !less(&data[order[mid]], &data[order[mid - 1]]) {
        return;
    }
    merge(order, &mut scratch[..len], mid, data, less);
}

fn merge<T, F>(order: &mut [usize], scratch: &mut [usize], mid: usize, data: &[T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    scratch.copy_from_slice(order);
    let (left, right) = scratch.split_at(mid);
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        // take from the right run only when strictly smaller; ties favour the left run
        if less(&data[right[j]], &data[left[i]]) {
            order[k] = right[j];
            j += 1;
        } else {
            order[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    let rest = if i < left.len() { &left[i..] } else { &right[j..] };
    order[k..].copy_from_slice(rest);
}

/// Rearrange `data` so that `data[k]` becomes the element previously at `order[k]`.
///
/// Consumes `order` (entries are overwritten as cycles are closed).
fn apply_permutation<T>(data: &mut [T], order: &mut [usize]) {
    const DONE: usize = usize::MAX;
    for start in 0..order.len() {
        if order[start] == DONE {
            continue;
        }
        let mut pos = start;
        loop {
            let next = order[pos];
            order[pos] = DONE;
            if next == start {
                break;
            }
            data.swap(pos, next);
            pos = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_integers() {
        let mut v = vec![38, 27, 43, 3, 9, 82, 10];
        merge_sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn keeps_equal_elements_in_input_order() {
        let mut v = vec![(3, "a"), (1, "b"), (3, "c"), (2, "d"), (1, "e"), (3, "f")];
        merge_sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(
            v,
            vec![(1, "b"), (1, "e"), (2, "d"), (3, "a"), (3, "c"), (3, "f")]
        );
    }

    #[test]
    fn works_without_clone() {
        struct Opaque(u8);
        let mut v = vec![Opaque(3), Opaque(1), Opaque(2)];
        merge_sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v.iter().map(|o| o.0).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn permutation_follows_cycles() {
        let mut data = vec!['a', 'b', 'c', 'd', 'e'];
        let mut order = vec![2, 0, 1, 4, 3];
        apply_permutation(&mut data, &mut order);
        assert_eq!(data, vec!['c', 'a', 'b', 'e', 'd']);
    }

    #[test]
    fn trivial_inputs_are_untouched() {
        let mut empty: Vec<u8> = vec![];
        merge_sort_by(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut one = vec!["x"];
        merge_sort_by(&mut one, |a, b| a < b);
        assert_eq!(one, vec!["x"]);
    }
}
