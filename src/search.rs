//! Partition point searches biased towards the front of the slice.
//!
//! All searches here take a monotone predicate: true on a prefix, false on
//! the remaining suffix. Instead of bisecting the whole slice like
//! `slice::partition_point` they gallop from the start, so finding a
//! boundary at distance `d` costs O(log d) predicate calls whatever the
//! slice length.
use crate::utils::{middle, powers};

/// Gallop from the start of `slice` towards the first index where `pred`
/// fails.
/// Positions at or past `end` are considered failing and are never read.
fn gallop<T, P>(slice: &[T], end: usize, pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    debug_assert!(end <= slice.len());
    let mut first = 0;
    loop {
        // most runs are short: probe the next positions one by one first
        for _ in 0..3 {
            if first == end || !pred(&slice[first]) {
                return first;
            }
            first += 1;
        }
        for step in powers(1) {
            let test = first + step;
            if test >= end || !pred(&slice[test]) {
                // boundary is in first..=test, restart from there
                break;
            }
            first = test + 1;
        }
    }
}

/// Conservative boundary for a run starting at the front of `slice`.
///
/// The middle of the slice is tested first. If `pred` still holds there, the
/// middle index is returned: everything before it belongs to the run and can
/// be copied in bulk, and the caller is expected to come back for the rest.
/// Each such round halves what is left, so a run of length k is consumed
/// in O(log k) rounds.
///
/// Otherwise the boundary is inside the first half and is found exactly by
/// galloping, without ever reading the middle again or anything past it.
///
/// Returns 0 for an empty slice.
///
/// # Example
///
/// ```
/// use biased_merge::find_boundary;
/// let v = [1, 2, 3, 4, 5, 6, 7, 8];
/// // long run: middle is returned
/// assert_eq!(find_boundary(&v, |&x| x <= 7), 4);
/// // short run: exact boundary
/// assert_eq!(find_boundary(&v, |&x| x <= 2), 2);
/// assert_eq!(find_boundary(&v, |&x| x < 1), 0);
/// ```
pub fn find_boundary<T, P>(slice: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    if slice.is_empty() {
        return 0;
    }
    let mid = middle(slice.len());
    if pred(&slice[mid]) {
        return mid;
    }
    gallop(slice, mid, &mut pred)
}

/// Exact partition point of `slice` under `pred`, searching from the front.
///
/// Same result as `slice.partition_point(pred)` (`slice.len()` if `pred`
/// holds everywhere) but costs O(log d) calls where d is the returned index.
///
/// # Example
///
/// ```
/// use biased_merge::partition_point_biased;
/// let v: Vec<u32> = (0..1000).collect();
/// assert_eq!(partition_point_biased(&v, |&x| x < 17), 17);
/// assert_eq!(partition_point_biased(&v, |_| true), 1000);
/// ```
pub fn partition_point_biased<T, P>(slice: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    gallop(slice, slice.len(), &mut pred)
}

/// First index whose element is not less than `value`.
pub fn lower_bound_biased_by<T, F>(slice: &[T], value: &T, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point_biased(slice, |x| less(x, value))
}

/// First index whose element is greater than `value`.
pub fn upper_bound_biased_by<T, F>(slice: &[T], value: &T, mut less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point_biased(slice, |x| !less(value, x))
}

/// `lower_bound_biased_by` with natural order.
pub fn lower_bound_biased<T: Ord>(slice: &[T], value: &T) -> usize {
    lower_bound_biased_by(slice, value, |a, b| a < b)
}

/// `upper_bound_biased_by` with natural order.
pub fn upper_bound_biased<T: Ord>(slice: &[T], value: &T) -> usize {
    upper_bound_biased_by(slice, value, |a, b| a < b)
}
