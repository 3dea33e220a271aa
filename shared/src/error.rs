use thiserror::Error;

/// Errors produced by the wheel core and its collaborators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    /// The wheel has no prizes, so there are no segments to land on.
    #[error("the wheel has no prizes")]
    EmptyWheel,

    /// A spin was requested while another one is still running.
    #[error("a spin is already in progress")]
    SpinInProgress,

    #[error("segment index {index} is out of range for {len} segments")]
    IndexOutOfRange { index: usize, len: usize },

    /// The outcome source failed, timed out or answered with something unusable.
    #[error("spin outcome unavailable: {0}")]
    OutcomeUnavailable(String),

    #[error("invalid prize: {0}")]
    InvalidPrize(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type WheelResult<T> = Result<T, WheelError>;
