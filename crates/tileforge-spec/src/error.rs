//! Error types for request validation and record persistence.

use thiserror::Error;

/// Trait for errors that carry a stable diagnostic code.
///
/// Codes are stable across releases so callers can match on them without
/// parsing messages.
pub trait ErrorCoded {
    /// Returns the stable error code (e.g., "E001").
    fn code(&self) -> &'static str;

    /// Returns the error category (e.g., "spec", "records").
    fn category(&self) -> &'static str;
}

/// Errors from validating a generation request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// E001: Variation percentage outside 0..=100.
    #[error("variation must be between 0 and 100, got {0}")]
    VariationOutOfRange(u32),

    /// E002: Reference image has an unsupported content type.
    #[error("unsupported reference type: {0} (expected PNG, JPG, or WebP)")]
    UnsupportedReferenceType(String),

    /// E003: Reference image exceeds the size limit.
    #[error("reference image is {actual} bytes, exceeding the {limit} byte limit")]
    ReferenceTooLarge { actual: u64, limit: u64 },
}

impl ErrorCoded for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::VariationOutOfRange(_) => "E001",
            SpecError::UnsupportedReferenceType(_) => "E002",
            SpecError::ReferenceTooLarge { .. } => "E003",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}

/// Errors from the creation record store.
///
/// A failed save never affects the caller's in-memory [`GenerationRun`]:
/// the run stays intact and exportable regardless of the outcome here.
///
/// [`GenerationRun`]: crate::run::GenerationRun
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// R001: A record must carry a non-empty title.
    #[error("record title must not be empty")]
    EmptyTitle,

    /// R002: The backing store reported a failure.
    #[error("record store failure: {0}")]
    Backend(String),

    /// R003: The save flow requires the creation to be marked usable.
    #[error("creation must be marked usable before saving")]
    NotUsable,
}

impl ErrorCoded for RecordError {
    fn code(&self) -> &'static str {
        match self {
            RecordError::EmptyTitle => "R001",
            RecordError::Backend(_) => "R002",
            RecordError::NotUsable => "R003",
        }
    }

    fn category(&self) -> &'static str {
        "records"
    }
}
