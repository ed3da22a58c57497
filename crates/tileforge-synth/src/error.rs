//! Error type for the synthesis engine.

use thiserror::Error;
use tileforge_spec::{ErrorCoded, SpecError};

use crate::png::PngError;

/// Errors from map synthesis and the surrounding I/O collaborators.
///
/// Synthesis itself is total for valid inputs; `InvalidParameter` marks a
/// precondition violation (zero dimensions, zero octaves, a non-finite or
/// non-positive scale) and is never silently clamped away.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid settings: {0}")]
    Spec(#[from] SpecError),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("synthesis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ErrorCoded for SynthesisError {
    fn code(&self) -> &'static str {
        match self {
            SynthesisError::InvalidParameter(_) => "T001",
            SynthesisError::Png(_) => "T002",
            SynthesisError::Image(_) => "T003",
            SynthesisError::Io(_) => "T004",
            SynthesisError::Spec(_) => "T005",
            SynthesisError::Task(_) => "T006",
        }
    }

    fn category(&self) -> &'static str {
        "synthesis"
    }
}
