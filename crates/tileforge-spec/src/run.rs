//! Generation result types.
//!
//! A [`GenerationRun`] is the immutable terminal value of one request: the
//! echoed inputs plus exactly one [`PBRMapSet`]. The engine keeps no backing
//! store of past runs; persistence of selected runs belongs to the record
//! store collaborator.

use serde::{Deserialize, Serialize};

use crate::settings::GenerationSettings;

/// Fixed output width for every generated map.
pub const MAP_WIDTH: u32 = 3840;

/// Fixed output height for every generated map.
pub const MAP_HEIGHT: u32 = 2160;

/// The five PBR channels produced for every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapChannel {
    /// Base color.
    Albedo,
    /// Tangent-space surface detail.
    Normal,
    /// Micro-surface roughness.
    Roughness,
    /// Wetness/flow mask.
    Fluid,
    /// Metalness.
    Metallic,
}

impl MapChannel {
    /// Returns the channel name as used in file names and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapChannel::Albedo => "albedo",
            MapChannel::Normal => "normal",
            MapChannel::Roughness => "roughness",
            MapChannel::Fluid => "fluid",
            MapChannel::Metallic => "metallic",
        }
    }

    /// Returns all channels in generation order.
    pub fn all() -> &'static [MapChannel] {
        &[
            MapChannel::Albedo,
            MapChannel::Normal,
            MapChannel::Roughness,
            MapChannel::Fluid,
            MapChannel::Metallic,
        ]
    }
}

impl std::fmt::Display for MapChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MapChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "albedo" => Ok(MapChannel::Albedo),
            "normal" => Ok(MapChannel::Normal),
            "roughness" => Ok(MapChannel::Roughness),
            "fluid" => Ok(MapChannel::Fluid),
            "metallic" => Ok(MapChannel::Metallic),
            _ => Err(format!("unknown map channel: {}", s)),
        }
    }
}

/// One encoded raster map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapImage {
    /// The channel this map belongs to.
    pub channel: MapChannel,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
    /// BLAKE3 hash of the PNG bytes, hex-encoded.
    pub hash: String,
}

/// The complete set of five PBR maps for one run.
///
/// All five channels are always present and share one resolution; a partial
/// set is not constructible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PBRMapSet {
    pub albedo: MapImage,
    pub normal: MapImage,
    pub roughness: MapImage,
    pub fluid: MapImage,
    pub metallic: MapImage,
}

impl PBRMapSet {
    /// Get the map for a channel.
    pub fn get(&self, channel: MapChannel) -> &MapImage {
        match channel {
            MapChannel::Albedo => &self.albedo,
            MapChannel::Normal => &self.normal,
            MapChannel::Roughness => &self.roughness,
            MapChannel::Fluid => &self.fluid,
            MapChannel::Metallic => &self.metallic,
        }
    }

    /// Iterate over all five maps in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &MapImage> {
        MapChannel::all().iter().map(move |&c| self.get(c))
    }
}

/// One completed generation: echoed inputs plus the produced map set.
///
/// Constructed atomically by the orchestrator as the terminal step of a
/// request and never mutated afterwards. The run identifier is derived from
/// creation time and seed; uniqueness is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRun {
    /// Best-effort unique identifier, `"{unix_millis}-{seed}"`.
    pub run_id: String,
    /// Creation time as unix milliseconds.
    pub timestamp: i64,
    /// Echoed request category.
    pub category: String,
    /// Echoed request seed.
    pub seed: u32,
    /// Echoed variation percentage.
    pub variation: u32,
    /// Echoed Creative Freedom-B flag.
    pub creative_freedom: bool,
    /// Echoed description.
    pub description: String,
    /// The produced map set (1:1, owned by this run).
    pub maps: PBRMapSet,
}

impl GenerationRun {
    /// Assemble a run from its request and produced maps, minting the run
    /// identifier from the given creation time.
    pub fn assemble(settings: &GenerationSettings, maps: PBRMapSet, timestamp: i64) -> Self {
        Self {
            run_id: format!("{}-{}", timestamp, settings.seed),
            timestamp,
            category: settings.category.clone(),
            seed: settings.seed,
            variation: settings.variation,
            creative_freedom: settings.creative_freedom,
            description: settings.description.clone(),
            maps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_map(channel: MapChannel) -> MapImage {
        MapImage {
            channel,
            width: 8,
            height: 8,
            png: vec![1, 2, 3],
            hash: "00".to_string(),
        }
    }

    fn stub_set() -> PBRMapSet {
        PBRMapSet {
            albedo: stub_map(MapChannel::Albedo),
            normal: stub_map(MapChannel::Normal),
            roughness: stub_map(MapChannel::Roughness),
            fluid: stub_map(MapChannel::Fluid),
            metallic: stub_map(MapChannel::Metallic),
        }
    }

    #[test]
    fn channel_round_trips_through_str() {
        for &channel in MapChannel::all() {
            let parsed: MapChannel = channel.as_str().parse().unwrap();
            assert_eq!(parsed, channel);
        }
        assert!("specular".parse::<MapChannel>().is_err());
    }

    #[test]
    fn map_set_exposes_all_five_channels() {
        let set = stub_set();
        assert_eq!(set.iter().count(), 5);
        for &channel in MapChannel::all() {
            assert_eq!(set.get(channel).channel, channel);
        }
    }

    #[test]
    fn run_id_combines_timestamp_and_seed() {
        let settings = crate::settings::GenerationSettings::new("metal", 7, 10);
        let run = GenerationRun::assemble(&settings, stub_set(), 1700000000123);
        assert_eq!(run.run_id, "1700000000123-7");
        assert_eq!(run.timestamp, 1700000000123);
        assert_eq!(run.category, "metal");
        assert_eq!(run.seed, 7);
        assert_eq!(run.variation, 10);
    }
}
