//! Merge inputs: what is left to merge on one side, and how to hand it over
//! to the output.
//!
//! Borrowed slices clone their elements into a `MergeSink`, owned vectors
//! move them into a `Vec`. Both merge loops are written once against this
//! trait.
use crate::sink::MergeSink;
use std::vec;

/// One side of a merge, delivering into outputs of type `O`.
pub(crate) trait Input<T, O: ?Sized> {
    /// Elements not merged yet.
    fn remaining(&self) -> &[T];
    /// Hand the next `count` elements over to `output`.
    fn move_to(&mut self, count: usize, output: &mut O);
}

/// Read-only view of a slice, advancing as elements are merged.
pub(crate) struct Borrowed<'a, T: 'a> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T: 'a> Borrowed<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Borrowed { slice, index: 0 }
    }
}

impl<'a, T: 'a, S: MergeSink<T> + ?Sized> Input<T, S> for Borrowed<'a, T> {
    fn remaining(&self) -> &[T] {
        &self.slice[self.index..]
    }
    fn move_to(&mut self, count: usize, output: &mut S) {
        match count {
            0 => (),
            1 => output.push(&self.slice[self.index]),
            _ => output.extend_from_slice(&self.slice[self.index..self.index + count]),
        }
        self.index += count;
    }
}

impl<T> Input<T, Vec<T>> for vec::IntoIter<T> {
    fn remaining(&self) -> &[T] {
        self.as_slice()
    }
    fn move_to(&mut self, count: usize, output: &mut Vec<T>) {
        output.extend(self.by_ref().take(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_input_moves_its_prefix() {
        let mut input = vec![String::from("a"), String::from("b"), String::from("c")].into_iter();
        let mut output: Vec<String> = Vec::new();
        input.move_to(2, &mut output);
        assert_eq!(output, vec!["a", "b"]);
        assert_eq!(input.as_slice(), &[String::from("c")]);
    }

    #[test]
    fn borrowed_input_advances() {
        let data = [1, 2, 3];
        let mut input = Borrowed::new(&data);
        let mut output: Vec<i32> = Vec::new();
        Input::<i32, Vec<i32>>::move_to(&mut input, 1, &mut output);
        Input::<i32, Vec<i32>>::move_to(&mut input, 0, &mut output);
        assert_eq!(Input::<i32, Vec<i32>>::remaining(&input), &[2, 3]);
        assert_eq!(output, vec![1]);
    }
}
