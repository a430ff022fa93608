//! Dense DP tables indexed by prefix lengths of both inputs.
//!
//! Cell `(i, j)` holds the solution for `a[..i]` and `b[..j]`, so a table for
//! sequences of lengths `n` and `m` has `(n+1) x (m+1)` cells. Row 0 and
//! column 0 are the boundary.
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::sequence::{Seq, Token};

/// The three already computed neighbours of cell `(i, j)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbours<V> {
    /// `(i-1, j-1)`
    pub diag: V,
    /// `(i-1, j)`: consumes a token of `a`.
    pub up: V,
    /// `(i, j-1)`: consumes a token of `b`.
    pub left: V,
}

/// Row major `(n+1) x (m+1)` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DpMatrix<V> {
    rows: usize,
    cols: usize,
    data: Vec<V>,
}

impl<V: Clone> DpMatrix<V> {
    /// A matrix for sequences of lengths `n` and `m`, with all cells set to `v`.
    pub fn new(n: usize, m: usize, v: V) -> Self {
        Self {
            rows: n + 1,
            cols: m + 1,
            data: vec![v; (n + 1) * (m + 1)],
        }
    }
}

impl<V: Clone + Zero> DpMatrix<V> {
    pub fn zeros(n: usize, m: usize) -> Self {
        Self::new(n, m, V::zero())
    }
}

impl<V> DpMatrix<V> {
    /// Number of rows, `|a| + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Number of columns, `|b| + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn row(&self, i: usize) -> &[V] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
    /// The bottom right cell, i.e. the solution for the full inputs.
    pub fn last(&self) -> &V {
        &self.data[self.data.len() - 1]
    }
}

impl<V> Index<(usize, usize)> for DpMatrix<V> {
    type Output = V;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &V {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl<V> IndexMut<(usize, usize)> for DpMatrix<V> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut V {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

/// Fills DP tables for one recurrence.
///
/// `top(j)` gives cell `(0, j)`, `left(i)` gives cell `(i, 0)`, and
/// `cell(i, j, neighbours, equal)` gives cell `(i, j)` for `i, j >= 1`, where
/// `equal` is `a[i-1] == b[j-1]`.
pub struct DpMatrixBuilder<Top, Left, Cell> {
    pub top: Top,
    pub left: Left,
    pub cell: Cell,
}

impl<V, Top, Left, Cell> DpMatrixBuilder<Top, Left, Cell>
where
    V: Copy + Zero,
    Top: FnMut(usize) -> V,
    Left: FnMut(usize) -> V,
    Cell: FnMut(usize, usize, Neighbours<V>, bool) -> V,
{
    /// Computes row `i` from row `i-1`.
    /// `ca` is the `i-1`th token of sequence `a`.
    fn next_row<T: Token>(&mut self, i: usize, ca: &T, b: Seq<T>, prev: &[V], next: &mut [V]) {
        next[0] = (self.left)(i);
        for (j0, cb) in b.iter().enumerate() {
            // Change from 0 to 1 based indexing.
            let j = j0 + 1;
            let nb = Neighbours {
                diag: prev[j - 1],
                up: prev[j],
                left: next[j - 1],
            };
            next[j] = (self.cell)(i, j, nb, ca == cb);
        }
    }

    fn first_row(&mut self, row: &mut [V]) {
        for (j, x) in row.iter_mut().enumerate() {
            *x = (self.top)(j);
        }
    }

    /// Fill the full `(n+1) x (m+1)` matrix.
    pub fn build<T: Token>(mut self, a: Seq<T>, b: Seq<T>) -> DpMatrix<V> {
        let mut d = DpMatrix::zeros(a.len(), b.len());
        let cols = d.cols;
        self.first_row(&mut d.data[..cols]);
        for (i0, ca) in a.iter().enumerate() {
            // Change from 0-based to 1-based indexing.
            let i = i0 + 1;
            let (head, tail) = d.data.split_at_mut(i * cols);
            self.next_row(i, ca, b, &head[(i - 1) * cols..], &mut tail[..cols]);
        }
        d
    }

    /// Only keep two rows at a time, and return the last row.
    /// Uses `O(m)` memory, but the result can not be traced back.
    pub fn last_row<T: Token>(mut self, a: Seq<T>, b: Seq<T>) -> Vec<V> {
        let ref mut prev = vec![V::zero(); b.len() + 1];
        let ref mut next = vec![V::zero(); b.len() + 1];
        self.first_row(next);
        for (i0, ca) in a.iter().enumerate() {
            let i = i0 + 1;
            std::mem::swap(prev, next);
            self.next_row(i, ca, b, prev, next);
        }
        std::mem::take(next)
    }
}
