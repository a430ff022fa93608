use itertools::Itertools;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::{
    candidates::CandidateSet,
    sequence::{is_subsequence, is_substring, Sequence},
};

const ALPH: [u8; 4] = *b"ACGT";

/// A random sequence of length `n`, and a copy with `e * n` random edits.
fn setup_sequences(n: usize, e: f32, rng: &mut impl Rng) -> (Sequence<u8>, Sequence<u8>) {
    let a: Sequence<u8> = (0..n).map(|_| *ALPH.choose(rng).unwrap()).collect();
    let mut b = a.clone();
    for _ in 0..(e * n as f32).ceil() as usize {
        let c = *ALPH.choose(rng).unwrap();
        match rng.gen_range(0..3) {
            0 if !b.is_empty() => {
                let i = rng.gen_range(0..b.len());
                b[i] = c;
            }
            1 if !b.is_empty() => {
                b.remove(rng.gen_range(0..b.len()));
            }
            _ => b.insert(rng.gen_range(0..=b.len()), c),
        }
    }
    (a, b)
}

fn test_sequences(
) -> itertools::Product<std::slice::Iter<'static, usize>, std::slice::Iter<'static, f32>> {
    let ns = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 20, 30, 50, 100];
    let es = &[0.0, 0.05, 0.10, 0.20, 0.50, 1.0];
    ns.iter().cartesian_product(es)
}

fn cost_models() -> Vec<CostModel> {
    vec![
        CostModel::unit(),
        CostModel::linear(1., 2.).unwrap(),
        CostModel::new(2., 3., 1., 0.).unwrap(),
        CostModel::new(1., 1., 1.5, 0.25).unwrap(),
        CostModel::new(0.5, 0.5, 0., 0.).unwrap(),
    ]
}

/// Every subsequence of `a`, by brute force.
fn subsequences(a: &[u8]) -> Vec<Sequence<u8>> {
    (0..1usize << a.len())
        .map(|mask| {
            a.iter()
                .enumerate()
                .filter(|(i, _)| mask >> i & 1 == 1)
                .map(|(_, &c)| c)
                .collect()
        })
        .collect()
}

#[test]
fn unit_cost_matches_triple_accel() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(31415);
    let lev = Levenshtein::default();
    for (&n, &e) in test_sequences() {
        let (ref a, ref b) = setup_sequences(n, e, rng);
        let expected = triple_accel::levenshtein_exp(a, b) as Cost;
        assert_eq!(lev.cost(a, b), expected, "n {n} e {e}");
        let (cost, cigar) = lev.align(a, b);
        assert_eq!(cost, expected, "n {n} e {e}");
        assert_eq!(cigar.verify(&lev.cm, a, b), Some(expected));
    }
}

#[test]
fn linear_memory_matches_full_matrix() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(2718);
    for cm in cost_models() {
        let lev = Levenshtein::new(cm);
        for (&n, &e) in test_sequences() {
            let (ref a, ref b) = setup_sequences(n, e, rng);
            let d = lev.matrix(a, b);
            assert_eq!(lev.cost(a, b), *d.last());
            let (cost, cigar) = lev.align(a, b);
            assert_eq!(cost, *d.last());
            let verified = cigar.verify(&cm, a, b).unwrap();
            assert!((verified - cost).abs() < 1e-9, "{cm:?} {cigar}");
        }
    }
}

#[test]
fn symmetric_cost_models_give_symmetric_distances() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(1);
    for cm in cost_models().into_iter().filter(|cm| cm.is_symmetric()) {
        let lev = Levenshtein::new(cm);
        for (&n, &e) in test_sequences() {
            let (ref a, ref b) = setup_sequences(n, e, rng);
            assert_eq!(lev.cost(a, b), lev.cost(b, a), "{cm:?}");
        }
    }
}

#[test]
fn asymmetric_cost_models_swap_weights() {
    // Swapping the arguments turns insertions into deletions.
    let ref mut rng = ChaCha8Rng::seed_from_u64(2);
    let cm = CostModel::new(2., 3., 1., 0.).unwrap();
    let swapped = CostModel::new(3., 2., 1., 0.).unwrap();
    for (&n, &e) in test_sequences() {
        let (ref a, ref b) = setup_sequences(n, e, rng);
        assert_eq!(
            Levenshtein::new(cm).cost(a, b),
            Levenshtein::new(swapped).cost(b, a)
        );
    }
}

#[test]
fn identity_and_empty() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(3);
    for cm in cost_models() {
        let lev = Levenshtein::new(cm);
        for (&n, &e) in test_sequences() {
            let (ref a, _) = setup_sequences(n, e, rng);
            if cm.match_() == 0. {
                assert_eq!(lev.cost(a, a), 0.);
            }
            assert_eq!(lev.cost(&a[..0], a), cm.insert() * n as Cost);
            assert_eq!(lev.cost(a, &a[..0]), cm.delete() * n as Cost);
        }
    }
}

#[test]
fn hamming_bounds_levenshtein() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(4);
    for cm in cost_models() {
        for &n in &[0, 1, 5, 20, 100] {
            let a: Sequence<u8> = (0..n).map(|_| *ALPH.choose(rng).unwrap()).collect();
            let b: Sequence<u8> = (0..n).map(|_| *ALPH.choose(rng).unwrap()).collect();
            let h = Hamming::new(cm).distance(&a, &b).unwrap();
            assert!(Levenshtein::new(cm).cost(&a, &b) <= h + 1e-9);
            assert_eq!(Hamming::new(cm).distance(&a, &a).unwrap(), cm.match_() * n as Cost);
        }
    }
}

#[test]
fn lcs_candidates_are_common_subsequences() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(5);
    for (&n, &e) in test_sequences() {
        let (ref a, ref b) = setup_sequences(n, e, rng);
        let (len, candidates) = Lcs.enumerate(a, b);
        assert!(len <= a.len().min(b.len()));
        assert_eq!(len, Lcs.length(a, b));
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_eq!(c.len(), len);
            assert!(is_subsequence(c, a));
            assert!(is_subsequence(c, b));
        }
    }
}

#[test]
fn lcs_enumeration_is_exhaustive() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..200 {
        let n = rng.gen_range(0..=9);
        let m = rng.gen_range(0..=9);
        // Small alphabets give many ties.
        let a: Sequence<u8> = (0..n).map(|_| *b"AB".choose(rng).unwrap()).collect();
        let b: Sequence<u8> = (0..m).map(|_| *b"ABC".choose(rng).unwrap()).collect();

        let common = subsequences(&a)
            .into_iter()
            .filter(|s| is_subsequence(s, &b))
            .collect_vec();
        let best = common.iter().map(|s| s.len()).max().unwrap_or(0);
        let expected: CandidateSet<u8> = common.into_iter().filter(|s| s.len() == best).collect();

        let (len, candidates) = Lcs.enumerate(&a, &b);
        assert_eq!(len, best);
        assert_eq!(candidates, expected, "a {a:?} b {b:?}");
    }
}

#[test]
fn substring_enumeration_is_exhaustive() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let n = rng.gen_range(0..=12);
        let m = rng.gen_range(0..=12);
        let a: Sequence<u8> = (0..n).map(|_| *b"AB".choose(rng).unwrap()).collect();
        let b: Sequence<u8> = (0..m).map(|_| *b"ABC".choose(rng).unwrap()).collect();

        let common = (0..=a.len())
            .flat_map(|i| (i + 1..=a.len()).map(move |j| (i, j)))
            .map(|(i, j)| a[i..j].to_vec())
            .filter(|s| is_substring(s, &b))
            .collect_vec();
        let best = common.iter().map(|s| s.len()).max().unwrap_or(0);
        let expected: CandidateSet<u8> = common.into_iter().filter(|s| s.len() == best).collect();

        let (len, candidates) = LongestCommonSubstring.enumerate(&a, &b);
        assert_eq!(len, best);
        assert_eq!(candidates, expected, "a {a:?} b {b:?}");
        // Length 0 exactly when no token is shared.
        assert_eq!(len == 0, !a.iter().any(|x| b.contains(x)));
    }
}

#[test]
fn substring_is_bounded_by_subsequence() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(8);
    for (&n, &e) in test_sequences() {
        let (ref a, ref b) = setup_sequences(n, e, rng);
        let (len, candidates) = LongestCommonSubstring.enumerate(a, b);
        assert!(len <= Lcs.length(a, b));
        for c in &candidates {
            assert_eq!(c.len(), len);
            assert!(is_substring(c, a) && is_substring(c, b));
        }
    }
}
