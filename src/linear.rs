//! Textbook two-pointers merge.
use crate::input::{Borrowed, Input};
use crate::sink::{check_output_size, MergeSink, SliceSink};

/// Merge loop shared by the borrowing and consuming entry points.
fn merge_linear_inputs<T, I, J, O, F>(lhs: &mut I, rhs: &mut J, output: &mut O, mut less: F)
where
    I: Input<T, O>,
    J: Input<T, O>,
    O: ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    while let (Some(left), Some(right)) = (lhs.remaining().first(), rhs.remaining().first()) {
        if less(right, left) {
            rhs.move_to(1, output);
        } else {
            lhs.move_to(1, output);
        }
    }
    // at most one of these is non-empty
    let left_size = lhs.remaining().len();
    lhs.move_to(left_size, output);
    let right_size = rhs.remaining().len();
    rhs.move_to(right_size, output);
}

/// Merge sorted `lhs` and `rhs` into `sink`, one comparison per element.
///
/// Stable: on ties the element from `lhs` comes first.
/// Once a side is exhausted the rest of the other one is copied in one go.
pub fn merge_linear_into<T, S, F>(lhs: &[T], rhs: &[T], sink: &mut S, less: F)
where
    S: MergeSink<T> + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    merge_linear_inputs(&mut Borrowed::new(lhs), &mut Borrowed::new(rhs), sink, less)
}

/// Merge sorted `lhs` and `rhs`, consuming them.
/// Elements are moved, not cloned: works for any `T`.
///
/// # Example
///
/// ```
/// use biased_merge::merge_linear_vec;
/// let lhs = vec![Box::new(1), Box::new(3)];
/// let rhs = vec![Box::new(2)];
/// let merged = merge_linear_vec(lhs, rhs, |a, b| a < b);
/// assert_eq!(merged, vec![Box::new(1), Box::new(2), Box::new(3)]);
/// ```
pub fn merge_linear_vec<T, F>(lhs: Vec<T>, rhs: Vec<T>, less: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut output = Vec::with_capacity(lhs.len() + rhs.len());
    merge_linear_inputs(&mut lhs.into_iter(), &mut rhs.into_iter(), &mut output, less);
    output
}

/// Merge sorted `lhs` and `rhs` into the beginning of `output`
/// under the strict order `less`.
/// Returns the end position, `lhs.len() + rhs.len()`.
///
/// # Panics
///
/// If `output` is too small.
pub fn merge_linear_by<T, F>(lhs: &[T], rhs: &[T], output: &mut [T], less: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    check_output_size(lhs.len(), rhs.len(), output.len());
    let mut sink = SliceSink::new(output);
    merge_linear_into(lhs, rhs, &mut sink, less);
    sink.written()
}

/// Merge sorted `lhs` and `rhs` into `output` using natural order.
///
/// # Example
///
/// ```
/// use biased_merge::merge_linear;
/// let mut output = vec![0; 5];
/// let end = merge_linear(&[1, 3, 5], &[2, 4], &mut output);
/// assert_eq!(end, 5);
/// assert_eq!(output, vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_linear<T: Ord + Clone>(lhs: &[T], rhs: &[T], output: &mut [T]) -> usize {
    merge_linear_by(lhs, rhs, output, |a, b| a < b)
}
