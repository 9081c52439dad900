use thiserror::Error;

/// Reasons a joint layout cannot become a [`Chain`](super::Chain).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChainError {
    #[error("chain needs at least 2 joints, got {0}")]
    TooFewJoints(usize),

    #[error("joint {index} has a non-finite position")]
    NonFinite { index: usize },

    #[error("segment {index} has zero length")]
    ZeroLengthSegment { index: usize },

    #[error("iteration count must be at least 1")]
    ZeroIterations,
}
