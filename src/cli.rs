//! Argument structs for embedding the matcher in a command line tool or a
//! serialized configuration.
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::cost_model::Cost;

/// Weights of the edit operations.
///
/// Converted into a validated `CostModel` with `CostModel::try_from`.
#[derive(Parser, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[clap(next_help_heading = "Cost model")]
pub struct CostModelArgs {
    /// Cost of inserting a token of the second sequence.
    #[arg(long, default_value_t = 1., display_order = 10)]
    #[serde(default = "one")]
    pub insert: Cost,

    /// Cost of deleting a token of the first sequence.
    #[arg(long, default_value_t = 1., display_order = 11)]
    #[serde(default = "one")]
    pub delete: Cost,

    /// Cost of substituting a token by a different one.
    #[arg(long, default_value_t = 1., display_order = 12)]
    #[serde(default = "one")]
    pub substitute: Cost,

    /// Cost of aligning two equal tokens.
    #[arg(long = "match", default_value_t = 0., display_order = 13)]
    #[serde(rename = "match", default)]
    pub r#match: Cost,
}

fn one() -> Cost {
    1.
}

impl Default for CostModelArgs {
    fn default() -> Self {
        Self {
            insert: 1.,
            delete: 1.,
            substitute: 1.,
            r#match: 0.,
        }
    }
}

/// How text is split into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TokenMode {
    /// Every character is a token.
    #[default]
    Chars,
    /// Every whitespace separated word is a token.
    Words,
}
