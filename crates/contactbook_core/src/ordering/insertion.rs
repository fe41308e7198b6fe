//! Stable insertion sort for comparators that are not a total order.
//!
//! `slice::sort_by` may panic when the comparator violates transitivity.
//! Insertion sort only ever compares adjacent elements, so it terminates with
//! a deterministic result for any comparator and moves an element only past
//! neighbours it compares strictly `Less` than.

use std::cmp::Ordering;

/// Sorts `items` in place, keeping equal elements in their prior order.
///
/// Quadratic in the worst case; intended for contact-list sized inputs.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for unsorted in 1..items.len() {
        let mut cursor = unsorted;
        while cursor > 0 && compare(&items[cursor], &items[cursor - 1]) == Ordering::Less {
            items.swap(cursor, cursor - 1);
            cursor -= 1;
        }
    }
}
