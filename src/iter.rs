//! Linear merge of forward-only inputs.
//!
//! Without random access we cannot search for run boundaries, so only the
//! linear algorithm is available here. Collect into a `Vec` first to use
//! `merge_biased`.
use std::iter::{FusedIterator, Peekable};

/// Iterator merging two sorted iterators.
/// Obtained from `merge_linear_iter`.
pub struct MergeLinearIter<I: Iterator, J: Iterator, F> {
    left: Peekable<I>,
    right: Peekable<J>,
    less: F,
}

/// Lazily merge two sorted iterators under the strict order `less`.
/// On ties the element from `lhs` comes first.
///
/// # Example
///
/// ```
/// use biased_merge::merge_linear_iter;
/// let lhs = vec![(1, 'l'), (3, 'l')];
/// let rhs = vec![(1, 'r'), (2, 'r')];
/// let v: Vec<_> = merge_linear_iter(lhs, rhs, |a, b| a.0 < b.0).collect();
/// assert_eq!(v, vec![(1, 'l'), (1, 'r'), (2, 'r'), (3, 'l')]);
/// ```
pub fn merge_linear_iter<I, J, F>(
    lhs: I,
    rhs: J,
    less: F,
) -> MergeLinearIter<I::IntoIter, J::IntoIter, F>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    MergeLinearIter {
        left: lhs.into_iter().peekable(),
        right: rhs.into_iter().peekable(),
        less,
    }
}

impl<I, J, F> Iterator for MergeLinearIter<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let less = &mut self.less;
        let go_left = match (self.left.peek(), self.right.peek()) {
            (Some(l), Some(r)) => !less(r, l),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };
        if go_left {
            self.left.next()
        } else {
            self.right.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_min, left_max) = self.left.size_hint();
        let (right_min, right_max) = self.right.size_hint();
        let max = match (left_max, right_max) {
            (Some(l), Some(r)) => l.checked_add(r),
            _ => None,
        };
        (left_min.saturating_add(right_min), max)
    }
}

impl<I, J, F> FusedIterator for MergeLinearIter<I, J, F>
where
    I: FusedIterator,
    J: FusedIterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}
