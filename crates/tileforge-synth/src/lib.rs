//! Tileforge Synthesis Engine
//!
//! Deterministic, seamlessly tileable PBR map synthesis: one request
//! (category, seed, variation, Creative Freedom-B flag, description) yields
//! five encoded 3840×2160 raster maps: albedo, normal, roughness, fluid,
//! and metallic.
//!
//! # Pipeline
//!
//! - [`rng::LcgSource`]: request-scoped seeded source of `[0, 1)` values.
//! - [`creative::derive_seed`]: the Creative Freedom-B seed transform.
//! - [`noise::synthesize_field`]: multi-octave trigonometric noise over the
//!   full image extent.
//! - [`channels`]: one recipe per channel (seed offset, scale formula,
//!   octaves, post-process) executed by a single generic compositor.
//! - [`generate::Orchestrator`]: sequences the five channels for one
//!   request under a configurable minimum-latency floor and assembles the
//!   immutable [`GenerationRun`].
//!
//! # Example
//!
//! ```no_run
//! use tileforge_spec::GenerationSettings;
//! use tileforge_synth::Orchestrator;
//!
//! # async fn demo() -> Result<(), tileforge_synth::SynthesisError> {
//! let settings = GenerationSettings::new("metal", 42, 50);
//! let run = Orchestrator::new().generate(settings).await?;
//! assert_eq!(run.maps.albedo.width, 3840);
//! # Ok(())
//! # }
//! ```
//!
//! # Determinism
//!
//! With creative freedom disabled, identical settings produce byte-identical
//! maps: the noise traversal order is fixed, every channel synthesizes from
//! its own freshly constructed source, and PNG encoding uses fixed
//! compression settings. With creative freedom enabled the seed transform
//! consults fresh entropy and outputs intentionally differ across runs.
//!
//! [`GenerationRun`]: tileforge_spec::GenerationRun

pub mod channels;
pub mod color;
pub mod creative;
pub mod error;
pub mod export;
pub mod generate;
pub mod noise;
pub mod png;
pub mod raster;
pub mod rng;
pub mod thumbnail;

// Re-export main types for convenience
pub use channels::{compose_channel, recipe_for, ChannelRecipe, PostProcess, CHANNEL_RECIPES};
pub use color::{BlendMode, Color};
pub use creative::{derive_seed, TEMPERATURE, TOP_P};
pub use error::SynthesisError;
pub use export::{export_map, export_map_set, ExportFormat, EXPORT_JPEG_QUALITY};
pub use generate::{generate_map_set, Orchestrator, DEFAULT_MIN_LATENCY};
pub use noise::synthesize_field;
pub use png::{PngConfig, PngError};
pub use raster::{IntensityField, TextureBuffer};
pub use rng::LcgSource;
pub use thumbnail::{albedo_thumbnail, THUMBNAIL_JPEG_QUALITY, THUMBNAIL_MAX_DIM};
