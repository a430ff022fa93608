//! Longest common substring, with enumeration of all maximal substrings.
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::CandidateEnumerator;
use crate::{
    candidates::{CandidateSet, LARGE_CANDIDATE_SET},
    matrix::{DpMatrixBuilder, Neighbours},
    sequence::{Seq, Token},
};

/// `d[i][j]` is the length of the longest common suffix of `a[..i]` and
/// `b[..j]`: `d[i-1][j-1] + 1` when `a[i-1] == b[j-1]`, and 0 otherwise.
///
/// The longest common substrings end at the cells holding the maximum. Only
/// the running maximum and the rows where it is reached are kept, so two rows
/// of the matrix suffice.
///
/// When no token is shared, the length is 0 and there are no candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LongestCommonSubstring;

/// Ending rows of the longest common substrings found so far.
type Ends = SmallVec<[usize; 4]>;

impl LongestCommonSubstring {
    /// Returns the maximal length, and when `track` is set, every row `i`
    /// such that `a[i-len..i]` is a longest common substring.
    /// Rows can be repeated.
    fn fill<T: Token>(a: Seq<T>, b: Seq<T>, track: bool) -> (usize, Ends) {
        let mut max_length = 0;
        let mut ends = Ends::new();
        DpMatrixBuilder {
            top: |_: usize| 0,
            left: |_: usize| 0,
            cell: |i: usize, _: usize, nb: Neighbours<usize>, equal: bool| {
                if !equal {
                    return 0;
                }
                let v = nb.diag + 1;
                if v > max_length {
                    max_length = v;
                    ends.clear();
                }
                if track && v == max_length {
                    ends.push(i);
                }
                v
            },
        }
        .last_row(a, b);
        (max_length, ends)
    }
}

impl CandidateEnumerator for LongestCommonSubstring {
    fn length<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> usize {
        let (length, _) = Self::fill(a, b, false);
        debug!(n = a.len(), m = b.len(), length, "longest common substring length");
        length
    }

    fn enumerate<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> (usize, CandidateSet<T>) {
        let (length, ends) = Self::fill(a, b, true);
        let candidates: CandidateSet<T> =
            ends.iter().map(|&i| a[i - length..i].to_vec()).collect();
        if candidates.len() > LARGE_CANDIDATE_SET {
            warn!(
                cnt = candidates.len(),
                length, "large number of longest common substrings"
            );
        }
        debug!(
            n = a.len(),
            m = b.len(),
            length,
            cnt = candidates.len(),
            "longest common substring enumeration"
        );
        (length, candidates)
    }
}
