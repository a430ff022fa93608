//! Run length encoded edit scripts.
use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{
    cost_model::{Cost, CostModel},
    sequence::{Seq, Token},
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum CigarOp {
    Match,
    Sub,
    /// Consumes a token of `b`.
    Ins,
    /// Consumes a token of `a`.
    Del,
}

impl CigarOp {
    pub fn to_char(&self) -> char {
        match self {
            CigarOp::Match => '=',
            CigarOp::Sub => 'X',
            CigarOp::Ins => 'I',
            CigarOp::Del => 'D',
        }
    }

    /// How far this operation moves in `a` and `b`.
    pub fn delta(&self) -> (usize, usize) {
        match self {
            CigarOp::Match | CigarOp::Sub => (1, 1),
            CigarOp::Ins => (0, 1),
            CigarOp::Del => (1, 0),
        }
    }

    pub fn cost(&self, cm: &CostModel) -> Cost {
        match self {
            CigarOp::Match => cm.match_(),
            CigarOp::Sub => cm.substitute(),
            CigarOp::Ins => cm.insert(),
            CigarOp::Del => cm.delete(),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct CigarElem {
    pub op: CigarOp,
    pub cnt: usize,
}

#[derive(Default, Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, op: CigarOp) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { op, cnt: 1 });
    }

    /// Reverse the cigar string.
    pub fn reverse(&mut self) {
        self.ops.reverse()
    }

    /// Total number of operations.
    pub fn len(&self) -> usize {
        self.ops.iter().map(|e| e.cnt).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Check that this is a valid alignment of `a` and `b`, and return its
    /// cost under `cm`.
    ///
    /// Returns `None` when the script does not consume both sequences exactly,
    /// or when a `Match` aligns different tokens or a `Sub` equal ones.
    pub fn verify<T: Token>(&self, cm: &CostModel, a: Seq<T>, b: Seq<T>) -> Option<Cost> {
        let (mut i, mut j) = (0, 0);
        let mut cost = 0.;
        for &CigarElem { op, cnt } in &self.ops {
            for _ in 0..cnt {
                match op {
                    CigarOp::Match | CigarOp::Sub => {
                        let equal = a.get(i)? == b.get(j)?;
                        if equal != (op == CigarOp::Match) {
                            return None;
                        }
                    }
                    CigarOp::Ins => {
                        b.get(j)?;
                    }
                    CigarOp::Del => {
                        a.get(i)?;
                    }
                }
                let (di, dj) = op.delta();
                i += di;
                j += dj;
                cost += op.cost(cm);
            }
        }
        (i == a.len() && j == b.len()).then_some(cost)
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.ops {
            write!(f, "{}", elem.cnt)?;
            f.write_char(elem.op.to_char())?;
        }
        Ok(())
    }
}
