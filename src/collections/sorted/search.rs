use std::cmp::Ordering;

use crate::collections::contiguous::Vector;

/// Finds an item in sorted `items` by bisection. `compare` reports how an item compares to the one
/// being searched for.
///
/// Returns `Ok` with the index of a matching item, or `Err` with the index where such an item
/// would have to be inserted to keep `items` sorted, matching [`slice::binary_search_by`].
pub(crate) fn bisect<T, F>(items: &Vector<T>, compare: F) -> Result<usize, usize>
where
    F: Fn(&T) -> Ordering,
{
    bisect_range(items, &compare, 0, items.len())
}

fn bisect_range<T, F>(items: &Vector<T>, compare: &F, low: usize, high: usize) -> Result<usize, usize>
where
    F: Fn(&T) -> Ordering,
{
    if low >= high {
        return Err(low);
    }

    let mid = low + (high - low) / 2;
    match compare(&items[mid]) {
        Ordering::Equal => Ok(mid),
        // The middle item comes after the target, so the target is in the lower half.
        Ordering::Greater => bisect_range(items, compare, low, mid),
        Ordering::Less => bisect_range(items, compare, mid + 1, high),
    }
}
