use thiserror::Error;

/// Faults the engine can signal. All of them are immediate and
/// non-recoverable: the failing call returns before mutating any
/// weight or bias, so prior training state is never corrupted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unsupported activation function: {0:?}")]
    UnsupportedActivation(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
