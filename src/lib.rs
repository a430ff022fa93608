//! Weighted edit distances and enumeration of longest common subsequences and
//! substrings, over sequences of arbitrary tokens.
//!
//! ```
//! use sequence_matcher::prelude::*;
//!
//! let cm = CostModel::unit();
//! assert_eq!(levenshtein_distance(&chars("kitten"), &chars("sitting"), &cm), 3.);
//!
//! let r = longest_common_subsequence(&chars("ab"), &chars("xxaaabyy"), &cm, true);
//! assert_eq!(r.length, 2.);
//! assert_eq!(candidates_to_strings(&r.candidates.unwrap()), ["ab"]);
//! ```

pub mod aligners;
pub mod candidates;
pub mod cigar;
pub mod cli;
pub mod cost_model;
pub mod error;
pub mod matcher;
pub mod matrix;
pub mod sequence;

pub use matcher::{
    hamming_distance, levenshtein_alignment, levenshtein_distance, levenshtein_matrix,
    longest_common_subsequence, longest_common_substring, LcsResult, SequenceMatcher, SubstringResult,
};

pub mod prelude {
    pub use crate::aligners::{CandidateEnumerator, DistanceComputer};
    pub use crate::candidates::CandidateSet;
    pub use crate::cigar::{Cigar, CigarOp};
    pub use crate::cli::{CostModelArgs, TokenMode};
    pub use crate::cost_model::{Cost, CostModel};
    pub use crate::error::{Error, Result};
    pub use crate::matcher::*;
    pub use crate::matrix::DpMatrix;
    pub use crate::sequence::{
        candidates_to_strings, chars, seq_to_string, tokenize, Seq, Sequence, Token,
    };
}
