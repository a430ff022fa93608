use tracing::debug;

use super::DistanceComputer;
use crate::{
    cost_model::{Cost, CostModel},
    error::{Error, Result},
    sequence::{Seq, Token},
};

/// Weighted Hamming distance: the match or substitution weight of every
/// position. Only defined for sequences of equal length; nothing is
/// truncated or padded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hamming {
    pub cm: CostModel,
}

impl Hamming {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }
}

impl DistanceComputer for Hamming {
    fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    fn distance<T: Token>(&self, a: Seq<T>, b: Seq<T>) -> Result<Cost> {
        if a.len() != b.len() {
            return Err(Error::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        let cost: Cost = a
            .iter()
            .zip(b)
            .map(|(x, y)| self.cm.sub_or_match(x == y))
            .sum();
        debug!(n = a.len(), cost, "hamming distance");
        Ok(cost)
    }
}
