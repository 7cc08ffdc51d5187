//! This crate provides stable merges of two sorted slices.
//!
//! `merge_linear` is the classical two-pointers merge.
//! `merge_biased` produces the same output but detects when one side keeps
//! winning and then searches for the end of its run instead of comparing
//! each element: merging a slice of n elements with a much shorter one costs
//! O(log n) comparisons per run rather than O(n).
//!
//! Both merges are stable: on ties elements from the left input come first.
//!
//! # Example
//!
//! ```
//! use biased_merge::{merge_biased, merge_linear};
//! let lhs: Vec<u32> = (0..1000).collect();
//! let rhs = [500];
//! let mut linear = vec![0; 1001];
//! let mut biased = vec![0; 1001];
//! merge_linear(&lhs, &rhs, &mut linear);
//! merge_biased(&lhs, &rhs, &mut biased);
//! assert_eq!(linear, biased);
//! ```
#![warn(clippy::all)]
#![deny(missing_docs)]

mod biased;
pub use biased::{merge_biased, merge_biased_by, merge_biased_into, merge_biased_vec};
mod linear;
pub use linear::{merge_linear, merge_linear_by, merge_linear_into, merge_linear_vec};
/// Run boundary searches.
pub mod search;
pub use search::{find_boundary, partition_point_biased};
/// Output destinations.
pub mod sink;
pub use sink::{MergeSink, SliceSink};
mod iter;
pub use iter::{merge_linear_iter, MergeLinearIter};

/// Reference implementations.
pub mod oracle;
/// Differential checkers.
pub mod check;
/// Random inputs.
pub mod generate;
/// Fuzzing support.
pub mod fuzz;

mod input;
pub(crate) mod utils;
