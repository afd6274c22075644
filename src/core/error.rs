//! Engine error types.

use thiserror::Error;

/// Errors raised by engine construction and configuration.
///
/// Player input never produces an error: ignored reveals are reported
/// through [`RevealOutcome`](crate::engine::RevealOutcome) instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A game needs at least one pair
    #[error("Invalid pair count: {0} (must be at least 1)")]
    InvalidPairCount(usize),

    /// Distinct values requested but the value range is too small
    #[error("Not enough distinct card values: requested {requested}, available {available}")]
    NotEnoughValues { requested: usize, available: usize },

    /// Checkpoint could not be encoded or decoded
    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] bincode::Error),
    /// Checkpoint decoded but describes a state the engine cannot reach
    #[error("Checkpoint state is inconsistent")]
    InvalidCheckpoint,
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::InvalidPairCount(0).to_string(),
            "Invalid pair count: 0 (must be at least 1)"
        );
        assert_eq!(
            EngineError::NotEnoughValues { requested: 120, available: 99 }.to_string(),
            "Not enough distinct card values: requested 120, available 99"
        );
        assert_eq!(
            EngineError::InvalidCheckpoint.to_string(),
            "Checkpoint state is inconsistent"
        );
    }
}
