//! Differential checking of every merge implementation.
//!
//! Inputs get tagged with their origin so that stability becomes observable:
//! two elements comparing equal still differ by side and index.
use crate::oracle::naive_merge_by;
use crate::{
    merge_biased_into, merge_biased_vec, merge_linear_into, merge_linear_iter, merge_linear_vec,
};
use std::fmt;
use thiserror::Error;

/// Which input an element comes from.
/// `Lhs < Rhs`, matching the tie break of a stable merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// First input.
    Lhs,
    /// Second input.
    Rhs,
}

/// Value tagged with its origin.
/// Only `value` takes part in the merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tagged<T> {
    /// Merged value.
    pub value: T,
    /// Input it comes from.
    pub side: Side,
    /// Position in its input.
    pub index: usize,
}

impl<T: Ord> Tagged<T> {
    /// Merge order: compare values, ignore tags.
    pub fn value_less(a: &Self, b: &Self) -> bool {
        a.value < b.value
    }
    fn origin(&self) -> (Side, usize) {
        (self.side, self.index)
    }
}

/// Tag all elements of one input.
pub fn tag<T: Clone>(values: &[T], side: Side) -> Vec<Tagged<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Tagged {
            value: value.clone(),
            side,
            index,
        })
        .collect()
}

/// Merge implementations under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// `merge_linear_into`.
    Linear,
    /// `merge_biased_into`.
    Biased,
    /// `merge_linear_iter`.
    LinearIter,
    /// `merge_linear_vec` on owned copies of the inputs.
    LinearVec,
    /// `merge_biased_vec` on owned copies of the inputs.
    BiasedVec,
}

impl Algorithm {
    /// Every implementation.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Linear,
        Algorithm::Biased,
        Algorithm::LinearIter,
        Algorithm::LinearVec,
        Algorithm::BiasedVec,
    ];

    /// Merge `lhs` and `rhs` into a fresh vector.
    pub fn run<T, F>(self, lhs: &[T], rhs: &[T], less: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut output = Vec::with_capacity(lhs.len() + rhs.len());
        match self {
            Algorithm::Linear => merge_linear_into(lhs, rhs, &mut output, less),
            Algorithm::Biased => merge_biased_into(lhs, rhs, &mut output, less),
            Algorithm::LinearIter => {
                let mut less = less;
                output.extend(merge_linear_iter(lhs.iter(), rhs.iter(), |a, b| less(a, b)).cloned())
            }
            Algorithm::LinearVec => output = merge_linear_vec(lhs.to_vec(), rhs.to_vec(), less),
            Algorithm::BiasedVec => output = merge_biased_vec(lhs.to_vec(), rhs.to_vec(), less),
        }
        output
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Linear => "linear merge",
            Algorithm::Biased => "biased merge",
            Algorithm::LinearIter => "linear merge iterator",
            Algorithm::LinearVec => "consuming linear merge",
            Algorithm::BiasedVec => "consuming biased merge",
        };
        f.write_str(name)
    }
}

/// Contract violation found in a merge output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Elements lost or duplicated.
    #[error("{algorithm}: output has {actual} elements instead of {expected}")]
    Length {
        /// Faulty implementation.
        algorithm: Algorithm,
        /// `|lhs| + |rhs|`.
        expected: usize,
        /// Output length.
        actual: usize,
    },
    /// `output[position + 1] < output[position]`.
    #[error("{algorithm}: output is not sorted at position {position}")]
    Unsorted {
        /// Faulty implementation.
        algorithm: Algorithm,
        /// Position of the first inversion.
        position: usize,
    },
    /// Equal elements at `position` and `position + 1` are not in origin order.
    #[error("{algorithm}: equal elements swapped at position {position}")]
    Unstable {
        /// Faulty implementation.
        algorithm: Algorithm,
        /// Position of the first swap.
        position: usize,
    },
    /// Output differs from the reference merge.
    #[error("{algorithm}: output diverges from reference merge at position {position}")]
    Divergence {
        /// Faulty implementation.
        algorithm: Algorithm,
        /// First differing position.
        position: usize,
    },
}

/// Check one merge output of tagged inputs.
///
/// Length, order and stability are checked first since they explain a
/// failure better than a raw divergence does.
pub fn check_output<T>(
    algorithm: Algorithm,
    lhs: &[Tagged<T>],
    rhs: &[Tagged<T>],
    output: &[Tagged<T>],
) -> Result<(), CheckError>
where
    T: Ord + Clone,
{
    let expected = lhs.len() + rhs.len();
    if output.len() != expected {
        return Err(CheckError::Length {
            algorithm,
            expected,
            actual: output.len(),
        });
    }
    for (position, pair) in output.windows(2).enumerate() {
        if pair[1].value < pair[0].value {
            return Err(CheckError::Unsorted {
                algorithm,
                position,
            });
        }
        if pair[1].value == pair[0].value && pair[1].origin() < pair[0].origin() {
            return Err(CheckError::Unstable {
                algorithm,
                position,
            });
        }
    }
    let reference = naive_merge_by(lhs, rhs, Tagged::value_less);
    if let Some(position) = reference.iter().zip(output).position(|(r, o)| r != o) {
        return Err(CheckError::Divergence {
            algorithm,
            position,
        });
    }
    Ok(())
}

/// Run every algorithm on sorted `lhs` and `rhs` and check all outputs.
///
/// # Example
///
/// ```
/// use biased_merge::check::check_all;
/// assert!(check_all(&[1, 3, 3], &[2, 3]).is_ok());
/// ```
pub fn check_all<T: Ord + Clone>(lhs: &[T], rhs: &[T]) -> Result<(), CheckError> {
    let lhs = tag(lhs, Side::Lhs);
    let rhs = tag(rhs, Side::Rhs);
    Algorithm::ALL.iter().try_for_each(|&algorithm| {
        let output = algorithm.run(&lhs, &rhs, Tagged::value_less);
        check_output(algorithm, &lhs, &rhs, &output)
    })
}
