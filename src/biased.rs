//! Merge skipping over long runs.
//!
//! Behaves like the linear merge while sides keep alternating. When the same
//! side wins `STREAK_BEFORE_SEARCH` comparisons in a row we stop comparing
//! element by element: `find_boundary` bounds how much of that side still
//! precedes the other side's head, and that part is copied at once.
//! A run of length k costs O(log k) comparisons instead of k.
use crate::input::{Borrowed, Input};
use crate::search::find_boundary;
use crate::sink::{check_output_size, MergeSink, SliceSink};

/// Consecutive wins of one side before switching to a boundary search.
const STREAK_BEFORE_SEARCH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Streak {
    Left(usize),
    Right(usize),
}

/// Merge loop shared by the borrowing and consuming entry points.
fn merge_biased_inputs<T, I, J, O, F>(lhs: &mut I, rhs: &mut J, output: &mut O, mut less: F)
where
    I: Input<T, O>,
    J: Input<T, O>,
    O: ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let mut streak = Streak::Left(0);
    while let (Some(left), Some(right)) = (lhs.remaining().first(), rhs.remaining().first()) {
        if less(right, left) {
            rhs.move_to(1, output);
            let taken = match streak {
                Streak::Right(taken) => taken + 1,
                Streak::Left(_) => 1,
            };
            streak = Streak::Right(taken);
            if taken >= STREAK_BEFORE_SEARCH {
                // strictly smaller elements only, equal ones must wait for lhs
                let head = &lhs.remaining()[0];
                let size = find_boundary(rhs.remaining(), |x| less(x, head));
                rhs.move_to(size, output);
            }
        } else {
            lhs.move_to(1, output);
            let taken = match streak {
                Streak::Left(taken) => taken + 1,
                Streak::Right(_) => 1,
            };
            streak = Streak::Left(taken);
            if taken >= STREAK_BEFORE_SEARCH {
                let head = &rhs.remaining()[0];
                let size = find_boundary(lhs.remaining(), |x| !less(head, x));
                lhs.move_to(size, output);
            }
        }
    }
    let left_size = lhs.remaining().len();
    lhs.move_to(left_size, output);
    let right_size = rhs.remaining().len();
    rhs.move_to(right_size, output);
}

/// Merge sorted `lhs` and `rhs` into `sink`, galloping over long runs.
///
/// Produces exactly the same output as `merge_linear_into`.
pub fn merge_biased_into<T, S, F>(lhs: &[T], rhs: &[T], sink: &mut S, less: F)
where
    S: MergeSink<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    merge_biased_inputs(&mut Borrowed::new(lhs), &mut Borrowed::new(rhs), sink, less)
}

/// Merge sorted `lhs` and `rhs`, consuming them and galloping over long runs.
/// Runs are moved in bulk, nothing is cloned.
///
/// Produces exactly the same output as `merge_linear_vec`.
///
/// # Example
///
/// ```
/// use biased_merge::merge_biased_vec;
/// let lhs: Vec<Box<u32>> = (0..100).map(Box::new).collect();
/// let merged = merge_biased_vec(lhs, vec![Box::new(50)], |a, b| a < b);
/// assert_eq!(merged.len(), 101);
/// assert_eq!(*merged[51], 50);
/// ```
pub fn merge_biased_vec<T, F>(lhs: Vec<T>, rhs: Vec<T>, less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut output = Vec::with_capacity(lhs.len() + rhs.len());
    merge_biased_inputs(&mut lhs.into_iter(), &mut rhs.into_iter(), &mut output, less);
    output
}

/// Merge sorted `lhs` and `rhs` into the beginning of `output`
/// under the strict order `less`, skipping over long runs.
/// Returns the end position, `lhs.len() + rhs.len()`.
///
/// # Panics
///
/// If `output` is too small.
pub fn merge_biased_by<T, F>(lhs: &[T], rhs: &[T], output: &mut [T], less: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    check_output_size(lhs.len(), rhs.len(), output.len());
    let mut sink = SliceSink::new(output);
    merge_biased_into(lhs, rhs, &mut sink, less);
    sink.written()
}

/// Merge sorted `lhs` and `rhs` into `output` using natural order.
///
/// # Example
///
/// ```
/// use biased_merge::merge_biased;
/// let lhs: Vec<u32> = (0..1000).collect();
/// let mut output = vec![0; 1001];
/// let end = merge_biased(&lhs, &[500], &mut output);
/// assert_eq!(end, 1001);
/// assert_eq!(output[500], 500);
/// assert_eq!(output[501], 500);
/// ```
pub fn merge_biased<T: Ord + Clone>(lhs: &[T], rhs: &[T], output: &mut [T]) -> usize {
    merge_biased_by(lhs, rhs, output, |a, b| a < b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_merge(lhs: &[u32], rhs: &[u32]) -> (Vec<u32>, usize) {
        let comparisons = Cell::new(0);
        let mut output = Vec::new();
        merge_biased_into(lhs, rhs, &mut output, |a, b| {
            comparisons.set(comparisons.get() + 1);
            a < b
        });
        (output, comparisons.get())
    }

    #[test]
    fn long_runs_are_skipped() {
        let lhs: Vec<u32> = (0..1_000_000).collect();
        let (output, comparisons) = counting_merge(&lhs, &[2_000_000]);
        assert_eq!(output.len(), 1_000_001);
        assert_eq!(*output.last().unwrap(), 2_000_000);
        assert!(comparisons < 200, "{} comparisons", comparisons);

        let (output, comparisons) = counting_merge(&[2_000_000], &lhs);
        assert_eq!(output[1_000_000], 2_000_000);
        assert!(comparisons < 200, "{} comparisons", comparisons);
    }

    #[test]
    fn alternating_inputs_stay_linear() {
        let lhs: Vec<u32> = (0..1000).map(|x| 2 * x).collect();
        let rhs: Vec<u32> = (0..1000).map(|x| 2 * x + 1).collect();
        let (output, comparisons) = counting_merge(&lhs, &rhs);
        assert_eq!(output, (0..2000).collect::<Vec<u32>>());
        assert_eq!(comparisons, 1999);
    }
}
