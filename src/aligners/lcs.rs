//! Longest common subsequence, with enumeration of all optimal subsequences.
use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::CandidateEnumerator;
use crate::{
    candidates::{concat_product, empty_candidate, CandidateSet, LARGE_CANDIDATE_SET},
    matrix::{DpMatrix, DpMatrixBuilder, Neighbours},
    sequence::{Seq, Token},
};

/// `d[i][j]` is the length of an LCS of `a[..i]` and `b[..j]`:
/// `d[i-1][j-1] + 1` when `a[i-1] == b[j-1]`, `max(d[i-1][j], d[i][j-1])`
/// otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lcs;

type Row<T> = Vec<Option<Rc<CandidateSet<T>>>>;

impl Lcs {
    fn builder() -> DpMatrixBuilder<
        impl FnMut(usize) -> usize,
        impl FnMut(usize) -> usize,
        impl FnMut(usize, usize, Neighbours<usize>, bool) -> usize,
    > {
        DpMatrixBuilder {
            top: |_: usize| 0,
            left: |_: usize| 0,
            cell: |_: usize, _: usize, nb: Neighbours<usize>, equal: bool| {
                if equal {
                    nb.diag + 1
                } else {
                    nb.up.max(nb.left)
                }
            },
        }
    }

    pub fn matrix<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> DpMatrix<usize> {
        Self::builder().build(a, b)
    }

    /// The cells visited when walking back from `(n, m)` along all optimal
    /// paths.
    ///
    /// A cell with equal tokens only continues diagonally. Otherwise it
    /// continues to `(i, j-1)` when `d[i][j-1] >= d[i-1][j]`, and to
    /// `(i-1, j)` when `d[i-1][j] >= d[i][j-1]`; both on ties.
    fn reachable<T: Token>(d: &DpMatrix<usize>, a: Seq<T>, b: Seq<T>) -> DpMatrix<bool> {
        let mut seen = DpMatrix::new(a.len(), b.len(), false);
        let mut stack = vec![(a.len(), b.len())];
        seen[(a.len(), b.len())] = true;
        let mut cnt = 1usize;
        while let Some((i, j)) = stack.pop() {
            if i == 0 || j == 0 {
                continue;
            }
            let mut visit = |p: (usize, usize)| {
                if !seen[p] {
                    seen[p] = true;
                    cnt += 1;
                    stack.push(p);
                }
            };
            if a[i - 1] == b[j - 1] {
                visit((i - 1, j - 1));
            } else {
                let (up, left) = (d[(i - 1, j)], d[(i, j - 1)]);
                if left >= up {
                    visit((i, j - 1));
                }
                if up >= left {
                    visit((i - 1, j));
                }
            }
        }
        trace!(cnt, "lcs cells on optimal paths");
        seen
    }

    /// Builds the candidate set of every reachable cell, row by row.
    ///
    /// Each cell is computed once from its already computed dependencies, so
    /// a cell shared by many optimal paths is not expanded again for each of
    /// them. Only two rows of sets are kept.
    fn candidates<T: Token>(d: &DpMatrix<usize>, a: Seq<T>, b: Seq<T>) -> CandidateSet<T> {
        let seen = Self::reachable(d, a, b);
        let base = Rc::new(empty_candidate());
        let mut prev: Row<T> = vec![None; b.len() + 1];
        let mut next: Row<T> = vec![None; b.len() + 1];

        for i in 0..=a.len() {
            std::mem::swap(&mut prev, &mut next);
            for j in 0..=b.len() {
                if !seen[(i, j)] {
                    next[j] = None;
                    continue;
                }
                next[j] = Some(if i == 0 || j == 0 {
                    base.clone()
                } else if a[i - 1] == b[j - 1] {
                    let token: CandidateSet<T> = std::iter::once(vec![a[i - 1].clone()]).collect();
                    Rc::new(concat_product(&computed(&prev, j - 1), &token))
                } else {
                    let (up, left) = (d[(i - 1, j)], d[(i, j - 1)]);
                    match (left >= up, up >= left) {
                        (true, true) => {
                            let (x, y) = (computed(&prev, j), computed(&next, j - 1));
                            let (large, small) = if x.len() >= y.len() { (x, y) } else { (y, x) };
                            let mut union = (*large).clone();
                            union.extend(small.iter().cloned());
                            Rc::new(union)
                        }
                        (true, false) => computed(&next, j - 1),
                        _ => computed(&prev, j),
                    }
                });
            }
        }

        let last = next[b.len()].take().unwrap_or_default();
        // Drop the other references so the last set can usually be moved out.
        drop((prev, next, base));
        Rc::try_unwrap(last).unwrap_or_else(|rc| (*rc).clone())
    }
}

/// The set of a cell in `row`. Dependencies of a reachable cell are reachable
/// themselves, and hence already computed.
fn computed<T: Token>(row: &Row<T>, j: usize) -> Rc<CandidateSet<T>> {
    debug_assert!(row[j].is_some());
    row[j].clone().unwrap_or_default()
}

impl CandidateEnumerator for Lcs {
    /// Uses linear memory.
    fn length<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> usize {
        let row = Self::builder().last_row(a, b);
        let length = row[b.len()];
        debug!(n = a.len(), m = b.len(), length, "lcs length");
        length
    }

    fn enumerate<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> (usize, CandidateSet<T>) {
        let d = self.matrix(a, b);
        let length = *d.last();
        let candidates = Self::candidates(&d, a, b);
        debug_assert!(candidates.iter().all(|c| c.len() == length));
        if candidates.len() > LARGE_CANDIDATE_SET {
            warn!(
                cnt = candidates.len(),
                length, "large number of longest common subsequences"
            );
        }
        debug!(
            n = a.len(),
            m = b.len(),
            length,
            cnt = candidates.len(),
            "lcs enumeration"
        );
        (length, candidates)
    }
}
