//! Deduplicated sets of equally optimal sequences.
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::sequence::{Sequence, Token};

/// A set of distinct sequences, in no particular order.
pub type CandidateSet<T> = FxHashSet<Sequence<T>>;

/// Enumerations producing more candidates than this are logged as a warning.
pub const LARGE_CANDIDATE_SET: usize = 10_000;

/// The set containing only the empty sequence.
pub fn empty_candidate<T: Token>() -> CandidateSet<T> {
    std::iter::once(Vec::new()).collect()
}

/// All concatenations `x ++ y` for `x` in `a` and `y` in `b`, deduplicated.
///
/// An empty collection on either side acts as the identity and the other
/// operand is returned as is. Takes `O(|a| |b|)` concatenations.
///
/// NOTE: Repeated products can make the number of candidates exponential in
/// the input length, e.g. for LCS on long runs of a repeated token. This is a
/// property of the output, not of the computation.
pub fn concat_product<T: Token>(a: &CandidateSet<T>, b: &CandidateSet<T>) -> CandidateSet<T> {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    a.iter()
        .cartesian_product(b.iter())
        .map(|(x, y)| x.iter().chain(y).cloned().collect())
        .collect()
}
