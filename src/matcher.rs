//! The `SequenceMatcher` entry point, bundling all operations under one cost
//! model.
use serde::Serialize;

use crate::{
    aligners::{
        CandidateEnumerator, DistanceComputer, Hamming, Lcs, Levenshtein, LongestCommonSubstring,
    },
    candidates::CandidateSet,
    cigar::Cigar,
    cost_model::{Cost, CostModel},
    error::Result,
    matrix::DpMatrix,
    sequence::{Seq, Token},
};

/// Length of the longest common subsequences, and optionally all of them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LcsResult<T: Token> {
    pub length: Cost,
    /// `None` unless enumeration was requested. Contains the empty sequence
    /// when nothing is shared.
    pub candidates: Option<CandidateSet<T>>,
}

/// Length of the longest common substrings, and optionally all of them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubstringResult<T: Token> {
    pub length: usize,
    /// `None` unless enumeration was requested. Empty when nothing is shared.
    pub candidates: Option<CandidateSet<T>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SequenceMatcher {
    pub cm: CostModel,
}

impl SequenceMatcher {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }

    /// Weighted edit distance from `a` to `b`.
    ///
    /// NOTE: with a non-zero match weight, equal inputs have a positive
    /// distance. See `CostModel::zero_iff_equal`.
    pub fn levenshtein_distance<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> Cost {
        Levenshtein::new(self.cm).cost(a, b)
    }

    /// The full `(n+1) x (m+1)` table of prefix distances.
    pub fn levenshtein_matrix<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> DpMatrix<Cost> {
        Levenshtein::new(self.cm).matrix(a, b)
    }

    /// The edit distance together with one optimal edit script.
    pub fn levenshtein_alignment<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> (Cost, Cigar) {
        Levenshtein::new(self.cm).align(a, b)
    }

    pub fn hamming_distance<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> Result<Cost> {
        Hamming::new(self.cm).distance(a, b)
    }

    /// The cost model does not influence the result.
    pub fn longest_common_subsequence<T: Token>(
        &self,
        a: Seq<T>,
        b: Seq<T>,
        enumerate: bool,
    ) -> LcsResult<T> {
        if enumerate {
            let (length, candidates) = Lcs.enumerate(a, b);
            LcsResult {
                length: length as Cost,
                candidates: Some(candidates),
            }
        } else {
            LcsResult {
                length: Lcs.length(a, b) as Cost,
                candidates: None,
            }
        }
    }

    pub fn longest_common_substring<T: Token>(
        &self,
        a: Seq<T>,
        b: Seq<T>,
        enumerate: bool,
    ) -> SubstringResult<T> {
        if enumerate {
            let (length, candidates) = LongestCommonSubstring.enumerate(a, b);
            SubstringResult {
                length,
                candidates: Some(candidates),
            }
        } else {
            SubstringResult {
                length: LongestCommonSubstring.length(a, b),
                candidates: None,
            }
        }
    }
}

pub fn levenshtein_distance<T: Token>(a: Seq<T>, b: Seq<T>, cm: &CostModel) -> Cost {
    SequenceMatcher::new(*cm).levenshtein_distance(a, b)
}

pub fn levenshtein_matrix<T: Token>(a: Seq<T>, b: Seq<T>, cm: &CostModel) -> DpMatrix<Cost> {
    SequenceMatcher::new(*cm).levenshtein_matrix(a, b)
}

pub fn levenshtein_alignment<T: Token>(a: Seq<T>, b: Seq<T>, cm: &CostModel) -> (Cost, Cigar) {
    SequenceMatcher::new(*cm).levenshtein_alignment(a, b)
}

pub fn hamming_distance<T: Token>(a: Seq<T>, b: Seq<T>, cm: &CostModel) -> Result<Cost> {
    SequenceMatcher::new(*cm).hamming_distance(a, b)
}

pub fn longest_common_subsequence<T: Token>(
    a: Seq<T>,
    b: Seq<T>,
    cm: &CostModel,
    enumerate: bool,
) -> LcsResult<T> {
    SequenceMatcher::new(*cm).longest_common_subsequence(a, b, enumerate)
}

pub fn longest_common_substring<T: Token>(
    a: Seq<T>,
    b: Seq<T>,
    enumerate: bool,
) -> SubstringResult<T> {
    SequenceMatcher::default().longest_common_substring(a, b, enumerate)
}
