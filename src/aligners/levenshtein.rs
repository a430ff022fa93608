use tracing::debug;

use super::DistanceComputer;
use crate::{
    cigar::{Cigar, CigarOp},
    cost_model::{Cost, CostModel},
    error::Result,
    matrix::{DpMatrix, DpMatrixBuilder, Neighbours},
    sequence::{Seq, Token},
};

/// Weighted Levenshtein distance, following Wagner-Fischer.
///
/// ```text
/// d[i][0] = del * i ;  d[0][j] = ins * j
/// d[i][j] = min(d[i-1][j-1] + (sub or match),
///               d[i][j-1]   + ins,
///               d[i-1][j]   + del)
/// ```
///
/// The distance is symmetric when `ins == del`. It is 0 exactly for equal
/// inputs only when `CostModel::zero_iff_equal` holds; in particular a
/// non-zero match weight makes equal inputs have positive distance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Levenshtein {
    pub cm: CostModel,
}

impl Levenshtein {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }

    fn builder(
        &self,
    ) -> DpMatrixBuilder<
        impl FnMut(usize) -> Cost,
        impl FnMut(usize) -> Cost,
        impl FnMut(usize, usize, Neighbours<Cost>, bool) -> Cost,
    > {
        let cm = self.cm;
        DpMatrixBuilder {
            top: move |j: usize| cm.insert() * j as Cost,
            left: move |i: usize| cm.delete() * i as Cost,
            cell: move |_: usize, _: usize, nb: Neighbours<Cost>, equal: bool| {
                (nb.diag + cm.sub_or_match(equal))
                    .min(nb.left + cm.insert())
                    .min(nb.up + cm.delete())
            },
        }
    }

    /// The cost-only version uses linear memory.
    pub fn cost<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> Cost {
        let row = self.builder().last_row(a, b);
        let cost = row[b.len()];
        debug!(n = a.len(), m = b.len(), cost, "levenshtein distance");
        cost
    }

    /// The full `(n+1) x (m+1)` distance matrix.
    pub fn matrix<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> DpMatrix<Cost> {
        self.builder().build(a, b)
    }

    /// The distance, and one optimal edit script transforming `a` into `b`.
    ///
    /// On ties, substitutions and matches are preferred over insertions, and
    /// insertions over deletions.
    pub fn align<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> (Cost, Cigar) {
        let d = self.matrix(a, b);
        let cigar = self.track_path(&d, a, b);
        let cost = *d.last();
        debug!(n = a.len(), m = b.len(), cost, %cigar, "levenshtein alignment");
        (cost, cigar)
    }

    fn track_path<T: Token>(&self, d: &DpMatrix<Cost>, a: Seq<T>, b: Seq<T>) -> Cigar {
        let cm = &self.cm;
        let mut cigar = Cigar::default();
        let (mut i, mut j) = (a.len(), b.len());
        while i > 0 && j > 0 {
            // Recompute the three options exactly as they were computed when
            // filling the matrix, so that the minimum equals `d[i][j]`.
            let equal = a[i - 1] == b[j - 1];
            let diag = d[(i - 1, j - 1)] + cm.sub_or_match(equal);
            let ins = d[(i, j - 1)] + cm.insert();
            let del = d[(i - 1, j)] + cm.delete();
            if diag <= ins && diag <= del {
                cigar.push(if equal { CigarOp::Match } else { CigarOp::Sub });
                i -= 1;
                j -= 1;
            } else if ins <= del {
                cigar.push(CigarOp::Ins);
                j -= 1;
            } else {
                cigar.push(CigarOp::Del);
                i -= 1;
            }
        }
        // The boundary is a run of pure deletions or insertions.
        for _ in 0..i {
            cigar.push(CigarOp::Del);
        }
        for _ in 0..j {
            cigar.push(CigarOp::Ins);
        }
        cigar.reverse();
        cigar
    }
}

impl DistanceComputer for Levenshtein {
    fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    fn distance<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> Result<Cost> {
        Ok(self.cost(a, b))
    }
}
