//! This module contains the distance computations and the enumerators of
//! longest common subsequences and substrings.

use crate::{
    candidates::CandidateSet,
    cost_model::{Cost, CostModel},
    error::Result,
    sequence::{Seq, Token},
};

pub mod hamming;
pub mod lcs;
pub mod levenshtein;
pub mod substring;

#[cfg(test)]
mod tests;

pub use hamming::Hamming;
pub use lcs::Lcs;
pub use levenshtein::Levenshtein;
pub use substring::LongestCommonSubstring;

/// A distance between two sequences under a cost model.
///
/// Note that insertions are when `b` has more tokens than `a`, and deletions
/// are when `b` has less tokens than `a`.
pub trait DistanceComputer {
    /// Returns the cost model used by the distance.
    fn cost_model(&self) -> &CostModel;

    /// The distance between `a` and `b`.
    /// Fails when the distance is not defined for the given inputs.
    fn distance<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> Result<Cost>;
}

/// Finds the longest sequences common to two inputs.
pub trait CandidateEnumerator {
    /// Length of the longest common sequence. Does not enumerate anything.
    fn length<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> usize;

    /// Length of the longest common sequence, and all distinct common
    /// sequences of that length.
    ///
    /// The number of candidates can be exponential in the input length.
    fn enumerate<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> (usize, CandidateSet<T>);
}
