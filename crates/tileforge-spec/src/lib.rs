//! Tileforge Canonical Types
//!
//! This crate provides the request/result types, validation, and collaborator
//! contracts shared by the Tileforge synthesis engine and its frontends.
//!
//! # Overview
//!
//! - [`GenerationSettings`] is one transient, caller-constructed request:
//!   an opaque category label, a seed, a variation percentage, the
//!   Creative Freedom-B flag, a free-text description, and a list of
//!   reference images (metadata only; synthesis never reads them).
//! - [`GenerationRun`] is the immutable result of one request: echoed
//!   inputs plus exactly one [`PBRMapSet`] of five encoded 3840×2160 maps.
//! - [`settings_summary`] formats the canonical one-line summary persisted
//!   with saved creations.
//! - [`RecordStore`] and [`Identity`] are the contracts for the external
//!   persistence and identity collaborators; [`MemoryRecordStore`] is the
//!   in-process implementation used by tests and the CLI.
//!
//! # Example
//!
//! ```
//! use tileforge_spec::{validate_settings, GenerationSettings};
//!
//! let settings = GenerationSettings::new("metal", 42, 50)
//!     .with_description("brushed panel");
//! assert!(validate_settings(&settings).is_ok());
//! ```

pub mod error;
pub mod identity;
pub mod records;
pub mod run;
pub mod settings;
pub mod summary;

// Re-export commonly used types at the crate root
pub use error::{ErrorCoded, RecordError, SpecError};
pub use identity::{Identity, LocalIdentity};
pub use records::{submit_creation, CreationRecord, MemoryRecordStore, NewRecord, RecordStore};
pub use run::{GenerationRun, MapChannel, MapImage, PBRMapSet, MAP_HEIGHT, MAP_WIDTH};
pub use settings::{
    validate_reference, validate_settings, GenerationSettings, ReferenceImage,
    ACCEPTED_REFERENCE_TYPES, MAX_REFERENCE_BYTES, MAX_VARIATION,
};
pub use summary::{
    settings_summary, CREATIVE_FREEDOM_DISABLED_LABEL, CREATIVE_FREEDOM_ENABLED_LABEL,
};
