//! Write-once destinations for merged elements.

/// Forward-only destination of a merge.
/// Elements are received in output order, each exactly once.
pub trait MergeSink<T> {
    /// Append one element.
    fn push(&mut self, item: &T);
    /// Append a whole run at once.
    fn extend_from_slice(&mut self, items: &[T]);
}

impl<T: Clone> MergeSink<T> for Vec<T> {
    fn push(&mut self, item: &T) {
        Vec::push(self, item.clone())
    }
    fn extend_from_slice(&mut self, items: &[T]) {
        Vec::extend_from_slice(self, items)
    }
}

/// Sink writing into a pre-allocated mutable slice, from its start.
///
/// # Panics
///
/// `push` and `extend_from_slice` panic once the slice is full.
/// `merge_linear_by` and `merge_biased_by` check the size up front, but a
/// `SliceSink` handed directly to `merge_linear_into` or `merge_biased_into`
/// only fails when the write past the end happens, after part of the output
/// has already been written.
///
/// ```should_panic
/// use biased_merge::{merge_linear_into, SliceSink};
/// let mut output = [0; 2];
/// let mut sink = SliceSink::new(&mut output);
/// merge_linear_into(&[1, 3], &[2], &mut sink, |a, b| a < b);
/// ```
#[derive(Debug)]
pub struct SliceSink<'a, T: 'a> {
    output: &'a mut [T],
    output_index: usize,
}

impl<'a, T: 'a> SliceSink<'a, T> {
    /// Start writing at the beginning of `output`.
    pub fn new(output: &'a mut [T]) -> Self {
        SliceSink {
            output,
            output_index: 0,
        }
    }
    /// End position: how many elements were written so far.
    pub fn written(&self) -> usize {
        self.output_index
    }
}

impl<'a, T: 'a + Clone> MergeSink<T> for SliceSink<'a, T> {
    fn push(&mut self, item: &T) {
        self.output[self.output_index] = item.clone();
        self.output_index += 1;
    }
    fn extend_from_slice(&mut self, items: &[T]) {
        let end = self.output_index + items.len();
        self.output[self.output_index..end].clone_from_slice(items);
        self.output_index = end;
    }
}

/// Panic unless `output` can hold the whole merge.
pub(crate) fn check_output_size(lhs: usize, rhs: usize, output: usize) {
    assert!(
        output >= lhs + rhs,
        "output too small for merge: {} slots for {} + {} elements",
        output,
        lhs,
        rhs
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_sink_writes_forward() {
        let mut out = [0u8; 5];
        let mut sink = SliceSink::new(&mut out);
        sink.push(&1);
        sink.extend_from_slice(&[2, 3]);
        sink.extend_from_slice(&[]);
        assert_eq!(sink.written(), 3);
        assert_eq!(out, [1, 2, 3, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn slice_sink_refuses_push_past_end() {
        let mut out = [0u8; 1];
        let mut sink = SliceSink::new(&mut out);
        sink.push(&1);
        sink.push(&2);
    }

    #[test]
    #[should_panic]
    fn slice_sink_refuses_overflow() {
        let mut out = [0u8; 1];
        let mut sink = SliceSink::new(&mut out);
        sink.extend_from_slice(&[1, 2]);
    }
}
