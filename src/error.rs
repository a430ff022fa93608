use crate::cost_model::Cost;

/// Errors returned by the matcher.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A cost model weight is negative or not finite.
    #[error("invalid cost model: {weight} weight must be finite and non-negative, got {value}")]
    InvalidConfiguration { weight: &'static str, value: Cost },
    /// Hamming distance is only defined for sequences of equal length.
    #[error("hamming distance needs equal lengths, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
