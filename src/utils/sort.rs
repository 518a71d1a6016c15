use core::cmp::Ordering;

/// Below this length runs are sorted by insertion sort.
const INSERTION_THRESHOLD: usize = 32;

/// Stable merge sort driven by `compare`.
///
/// Unlike `slice::sort_by` this never panics when `compare` is not a strict
/// total order (e.g. an epsilon based float comparison); such input just
/// yields some permutation consistent with the pairwise decisions taken.
///
/// Complexity: O(n log n) comparisons, O(n) scratch per level
pub fn merge_sort_by<T, F>(v: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_rec(v, &mut compare);
}

fn merge_sort_rec<T, F>(v: &mut Vec<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= INSERTION_THRESHOLD {
        insertion_sort_by(v, compare);
        return;
    }

    let mut right = v.split_off(v.len() / 2);
    merge_sort_rec(v, compare);
    merge_sort_rec(&mut right, compare);

    let left = core::mem::take(v);
    v.reserve(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // right wins only when strictly less (stability)
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        v.extend(next);
    }
}

/// Tiny insertion sort for small n.
#[inline(always)]
fn insertion_sort_by<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j], &v[j - 1]) == Ordering::Less {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
