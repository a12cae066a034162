//! Top-down merge sort driven by a `less_or_equal` predicate.
//!
//! Taking the left element whenever `less_or_equal(left, right)` holds keeps
//! equal elements in their original order, which is what lets successive
//! level passes compose.

/// Stable sort of `items` using `less_or_equal` as the merge predicate.
pub fn merge_sort_by<T, F>(items: &mut [T], mut less_or_equal: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return;
    }
    let mut scratch = items.to_vec();
    sort_recursive(items, &mut scratch, &mut less_or_equal);
}

fn sort_recursive<T, F>(items: &mut [T], scratch: &mut [T], less_or_equal: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_recursive(left, left_scratch, less_or_equal);
        sort_recursive(right, right_scratch, less_or_equal);
    }

    scratch.copy_from_slice(items);
    let (left, right) = scratch.split_at(mid);
    merge(left, right, items, less_or_equal);
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], less_or_equal: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let (mut li, mut ri) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = ri >= right.len()
            || (li < left.len() && less_or_equal(&left[li], &right[ri]));
        if take_left {
            *slot = left[li];
            li += 1;
        } else {
            *slot = right[ri];
            ri += 1;
        }
    }
}
