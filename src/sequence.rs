use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{candidates::CandidateSet, cli::TokenMode};

/// An atomic unit of a sequence: a `char`, a byte, or a whole word.
///
/// Only equality is ever used to compare tokens; hashing is needed to
/// deduplicate candidate sequences.
pub trait Token: Eq + Hash + Clone + Debug {}
impl<T: Eq + Hash + Clone + Debug> Token for T {}

/// An owned sequence.
pub type Sequence<T> = Vec<T>;
/// A sequence slice.
pub type Seq<'a, T> = &'a [T];

/// Split a string into character tokens.
pub fn chars(text: &str) -> Sequence<char> {
    text.chars().collect()
}

/// Split a string into owned tokens according to `mode`.
pub fn tokenize(text: &str, mode: TokenMode) -> Sequence<String> {
    match mode {
        TokenMode::Chars => text.chars().map(String::from).collect(),
        TokenMode::Words => text.split_whitespace().map(String::from).collect(),
    }
}

pub fn seq_to_string(seq: Seq<char>) -> String {
    seq.iter().collect()
}

/// Render every candidate as a string, sorted for stable output.
pub fn candidates_to_strings(candidates: &CandidateSet<char>) -> Vec<String> {
    candidates
        .iter()
        .map(|c| seq_to_string(c))
        .sorted()
        .collect()
}

/// Whether `sub` can be obtained from `seq` by deleting tokens.
pub fn is_subsequence<T: Token>(sub: Seq<T>, seq: Seq<T>) -> bool {
    let mut it = seq.iter();
    sub.iter().all(|x| it.any(|y| x == y))
}

/// Whether `sub` occurs as a contiguous run in `seq`.
pub fn is_substring<T: Token>(sub: Seq<T>, seq: Seq<T>) -> bool {
    sub.is_empty() || seq.windows(sub.len()).any(|w| w == sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_modes() {
        assert_eq!(tokenize("ab c", TokenMode::Chars), ["a", "b", " ", "c"]);
        assert_eq!(
            tokenize("  kurt  godel ", TokenMode::Words),
            ["kurt", "godel"]
        );
        assert!(tokenize("", TokenMode::Words).is_empty());
        assert_eq!(chars("héllo").len(), 5);
    }

    #[test]
    fn subsequence_and_substring() {
        let a = chars("xxaaabyy");
        assert!(is_subsequence(&chars("ab"), &a));
        assert!(is_subsequence(&chars(""), &a));
        assert!(!is_subsequence(&chars("ba"), &a));
        assert!(is_substring(&chars("aab"), &a));
        assert!(!is_substring(&chars("xab"), &a));
        assert!(is_substring(&chars(""), &chars("")));
    }
}
