//! Generation request types and validation.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Maximum variation percentage.
pub const MAX_VARIATION: u32 = 100;

/// Maximum accepted reference image size in bytes (10 MiB).
pub const MAX_REFERENCE_BYTES: u64 = 10 * 1024 * 1024;

/// Content types accepted for reference images.
pub const ACCEPTED_REFERENCE_TYPES: &[&str] =
    &["image/png", "image/jpeg", "image/jpg", "image/webp"];

/// A caller-supplied reference image.
///
/// References are request metadata only: synthesis accepts them and echoes
/// their count into the settings summary, but never reads their content.
/// This mirrors the documented product behavior and is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    /// Caller-chosen identifier.
    pub id: String,
    /// Display name (typically the source file name).
    pub name: String,
    /// Declared content type (e.g., "image/png").
    pub mime_type: String,
    /// Byte length of the image payload.
    pub len: u64,
}

/// One texture generation request.
///
/// Transient and caller-constructed; the engine never stores requests.
/// `category` is an opaque label and is accepted without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Material category label. Free-form; never interpreted.
    pub category: String,
    /// Base RNG seed.
    pub seed: u32,
    /// Variation percentage, 0..=100.
    pub variation: u32,
    /// Whether the Creative Freedom-B transform is enabled.
    pub creative_freedom: bool,
    /// Free-text description. Metadata only.
    #[serde(default)]
    pub description: String,
    /// Reference images. Metadata only; synthesis never reads them.
    #[serde(default)]
    pub references: Vec<ReferenceImage>,
}

impl GenerationSettings {
    /// Create settings with no description or references.
    pub fn new(category: impl Into<String>, seed: u32, variation: u32) -> Self {
        Self {
            category: category.into(),
            seed,
            variation,
            creative_freedom: false,
            description: String::new(),
            references: Vec::new(),
        }
    }

    /// Enable or disable Creative Freedom-B.
    pub fn with_creative_freedom(mut self, enabled: bool) -> Self {
        self.creative_freedom = enabled;
        self
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a reference image.
    pub fn with_reference(mut self, reference: ReferenceImage) -> Self {
        self.references.push(reference);
        self
    }
}

/// Validate a generation request.
///
/// Category and description are opaque and never checked. References are
/// validated individually via [`validate_reference`].
pub fn validate_settings(settings: &GenerationSettings) -> Result<(), SpecError> {
    if settings.variation > MAX_VARIATION {
        return Err(SpecError::VariationOutOfRange(settings.variation));
    }
    for reference in &settings.references {
        validate_reference(reference)?;
    }
    Ok(())
}

/// Validate a single reference image against the accepted content types
/// and the size limit.
pub fn validate_reference(reference: &ReferenceImage) -> Result<(), SpecError> {
    if !ACCEPTED_REFERENCE_TYPES.contains(&reference.mime_type.as_str()) {
        return Err(SpecError::UnsupportedReferenceType(
            reference.mime_type.clone(),
        ));
    }
    if reference.len > MAX_REFERENCE_BYTES {
        return Err(SpecError::ReferenceTooLarge {
            actual: reference.len,
            limit: MAX_REFERENCE_BYTES,
        });
    }
    Ok(())
}
