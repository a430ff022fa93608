//! This module contains the `CostModel` used by all distances and aligners.
//!
use serde::{Deserialize, Serialize};

use crate::{
    cli::CostModelArgs,
    error::{Error, Result},
};

/// Type for storing costs.
///
/// Weights are real numbers, so costs are too. Lengths of common
/// subsequences/substrings are counted as `usize` in the DP tables and only
/// converted at the boundary.
pub type Cost = f64;

/// A linear cost model: one weight per edit operation.
///
/// Insertions consume a token of `b`, deletions consume a token of `a`.
/// All weights are finite and non-negative. This is checked once in the
/// constructor; the fields are private so the model can not be changed
/// afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostModelArgs", into = "CostModelArgs")]
pub struct CostModel {
    ins: Cost,
    del: Cost,
    sub: Cost,
    mat: Cost,
}

impl CostModel {
    pub fn new(insert: Cost, delete: Cost, substitute: Cost, r#match: Cost) -> Result<CostModel> {
        for (weight, value) in [
            ("insert", insert),
            ("delete", delete),
            ("substitute", substitute),
            ("match", r#match),
        ] {
            // NaN fails this comparison as well.
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::InvalidConfiguration { weight, value });
            }
        }
        Ok(CostModel {
            ins: insert,
            del: delete,
            sub: substitute,
            mat: r#match,
        })
    }

    /// Insertions, deletions and substitutions cost 1, matches are free.
    pub const fn unit() -> CostModel {
        CostModel {
            ins: 1.,
            del: 1.,
            sub: 1.,
            mat: 0.,
        }
    }

    /// Free matches, and the same cost for insertions and deletions.
    pub fn linear(substitute: Cost, indel: Cost) -> Result<CostModel> {
        Self::new(indel, indel, substitute, 0.)
    }

    pub fn insert(&self) -> Cost {
        self.ins
    }
    pub fn delete(&self) -> Cost {
        self.del
    }
    pub fn substitute(&self) -> Cost {
        self.sub
    }
    pub fn match_(&self) -> Cost {
        self.mat
    }

    /// The cost of aligning two tokens to each other.
    #[inline]
    pub fn sub_or_match(&self, equal: bool) -> Cost {
        if equal {
            self.mat
        } else {
            self.sub
        }
    }

    /// Insertions and deletions have the same weight, so that distances do
    /// not depend on the order of the arguments.
    pub fn is_symmetric(&self) -> bool {
        self.ins == self.del
    }

    /// Whether a distance of 0 implies that the two sequences are equal.
    ///
    /// This needs free matches and strictly positive weights for all other
    /// operations. With a non-zero match weight, equal sequences have a
    /// positive distance; with a zero edit weight, different sequences can
    /// have distance 0.
    pub fn zero_iff_equal(&self) -> bool {
        self.mat == 0. && self.ins > 0. && self.del > 0. && self.sub > 0.
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

impl TryFrom<CostModelArgs> for CostModel {
    type Error = Error;

    fn try_from(args: CostModelArgs) -> Result<Self> {
        CostModel::new(args.insert, args.delete, args.substitute, args.r#match)
    }
}

impl From<CostModel> for CostModelArgs {
    fn from(cm: CostModel) -> Self {
        CostModelArgs {
            insert: cm.ins,
            delete: cm.del,
            substitute: cm.sub,
            r#match: cm.mat,
        }
    }
}
