//! Run orchestration.
//!
//! One request flows Idle → Generating → Complete: the orchestrator
//! validates the settings, runs the five channel compositors, and assembles
//! the immutable [`GenerationRun`] as the terminal step. There is no failed
//! terminal state to expose for valid inputs, and no partial map set is
//! ever observable.
//!
//! The minimum-latency floor reserves room for a heavier synthesis backend;
//! it is a configurable parameter of the orchestrator, and because synthesis
//! runs concurrently with the floor the observed latency is
//! `max(floor, compute)`, not their sum.

use std::time::Duration;

use chrono::Utc;
use tileforge_spec::{
    validate_settings, GenerationRun, GenerationSettings, MapChannel, PBRMapSet, MAP_HEIGHT,
    MAP_WIDTH,
};

use crate::channels::{compose_channel, recipe_for};
use crate::error::SynthesisError;

/// Default minimum latency imposed on every generation.
pub const DEFAULT_MIN_LATENCY: Duration = Duration::from_millis(1500);

/// Sequences channel generation for one request.
///
/// Stateless per call: it holds no queue and no history, and concurrent
/// `generate` calls are independent. Callers that want to serialize
/// requests do so themselves.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    min_latency: Duration,
    resolution: (u32, u32),
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// An orchestrator with the default latency floor and the fixed
    /// 3840×2160 output resolution.
    pub fn new() -> Self {
        Self {
            min_latency: DEFAULT_MIN_LATENCY,
            resolution: (MAP_WIDTH, MAP_HEIGHT),
        }
    }

    /// Override the minimum-latency floor. Tests set this to zero.
    pub fn with_min_latency(mut self, min_latency: Duration) -> Self {
        self.min_latency = min_latency;
        self
    }

    /// Generate one run.
    ///
    /// Synthesis is CPU-bound and runs on the blocking pool, concurrently
    /// with the latency floor. Returns the assembled run with a freshly
    /// minted identifier and timestamp; on error nothing of the request is
    /// retained.
    pub async fn generate(
        &self,
        settings: GenerationSettings,
    ) -> Result<GenerationRun, SynthesisError> {
        validate_settings(&settings)?;

        let (width, height) = self.resolution;
        let request = settings.clone();
        let work = tokio::task::spawn_blocking(move || map_set_at(&request, width, height));
        let floor = tokio::time::sleep(self.min_latency);

        let (maps, ()) = tokio::join!(work, floor);
        let maps = maps??;

        Ok(GenerationRun::assemble(
            &settings,
            maps,
            Utc::now().timestamp_millis(),
        ))
    }
}

/// Generate the five maps for one request at the fixed output resolution.
///
/// Synchronous entry point behind [`Orchestrator::generate`]; channels are
/// composed sequentially (they are independent, so order is irrelevant to
/// the result) and either all five succeed or the whole call fails.
pub fn generate_map_set(settings: &GenerationSettings) -> Result<PBRMapSet, SynthesisError> {
    map_set_at(settings, MAP_WIDTH, MAP_HEIGHT)
}

fn map_set_at(
    settings: &GenerationSettings,
    width: u32,
    height: u32,
) -> Result<PBRMapSet, SynthesisError> {
    validate_settings(settings)?;

    let compose =
        |channel: MapChannel| compose_channel(recipe_for(channel), settings, width, height);

    Ok(PBRMapSet {
        albedo: compose(MapChannel::Albedo)?,
        normal: compose(MapChannel::Normal)?,
        roughness: compose(MapChannel::Roughness)?,
        fluid: compose(MapChannel::Fluid)?,
        metallic: compose(MapChannel::Metallic)?,
    })
}
