//! Error types for the fitment core library.
//!
//! Parsing malformed descriptors is not an error; incompleteness is a
//! regular output state. The only fallible surface is resolving a saved
//! selection against a rebuilt tree.

/// Top-level error enum for the fitment core library.
#[derive(Debug, thiserror::Error)]
pub enum FitmentError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Unknown generation: {0}")]
    UnknownGeneration(String),

    #[error("Unknown modification: {0}")]
    UnknownModification(String),
}

pub type FitmentResult<T> = Result<T, FitmentError>;
