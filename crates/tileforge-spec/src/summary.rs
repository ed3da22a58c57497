//! Human-readable settings summary.
//!
//! The summary string is the canonical one-line description of a run that
//! the record store persists alongside each saved creation. Its format is
//! stable; tooling parses it, so the segment order and wording must not
//! change.

use crate::run::GenerationRun;
use crate::settings::ReferenceImage;

/// Label stored for runs generated with Creative Freedom-B on.
pub const CREATIVE_FREEDOM_ENABLED_LABEL: &str = "Enabled (T=1.5, P=0.90)";

/// Label stored for runs generated with Creative Freedom-B off.
pub const CREATIVE_FREEDOM_DISABLED_LABEL: &str = "Disabled";

/// Format the canonical settings summary for a run.
///
/// Segments are joined with `" | "`; the description segment is appended
/// only when the description is non-empty.
pub fn settings_summary(run: &GenerationRun, references: &[ReferenceImage]) -> String {
    let creative = if run.creative_freedom {
        CREATIVE_FREEDOM_ENABLED_LABEL
    } else {
        CREATIVE_FREEDOM_DISABLED_LABEL
    };

    let mut parts = vec![
        format!("Category: {}", run.category),
        format!("Seed: {}", run.seed),
        format!("Variation: {}%", run.variation),
        format!("Creative Freedom-B: {}", creative),
        format!("References: {} image(s)", references.len()),
        "Resolution: 3840×2160 (4K)".to_string(),
    ];

    if !run.description.is_empty() {
        parts.push(format!("Description: {}", run.description));
    }

    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::{GenerationRun, MapChannel, MapImage, PBRMapSet};
    use crate::settings::GenerationSettings;
    use pretty_assertions::assert_eq;

    fn stub_map(channel: MapChannel) -> MapImage {
        MapImage {
            channel,
            width: 8,
            height: 8,
            png: Vec::new(),
            hash: String::new(),
        }
    }

    fn run_for(settings: &GenerationSettings) -> GenerationRun {
        let maps = PBRMapSet {
            albedo: stub_map(MapChannel::Albedo),
            normal: stub_map(MapChannel::Normal),
            roughness: stub_map(MapChannel::Roughness),
            fluid: stub_map(MapChannel::Fluid),
            metallic: stub_map(MapChannel::Metallic),
        };
        GenerationRun::assemble(settings, maps, 0)
    }

    fn reference(n: u32) -> ReferenceImage {
        ReferenceImage {
            id: format!("ref-{}", n),
            name: format!("ref-{}.png", n),
            mime_type: "image/png".to_string(),
            len: 1024,
        }
    }

    #[test]
    fn summary_with_description_matches_expected_bytes() {
        let settings = GenerationSettings::new("metal", 7, 10)
            .with_creative_freedom(true)
            .with_description("rusted plate");
        let run = run_for(&settings);
        let references = [reference(1), reference(2)];

        assert_eq!(
            settings_summary(&run, &references),
            "Category: metal | Seed: 7 | Variation: 10% | \
             Creative Freedom-B: Enabled (T=1.5, P=0.90) | \
             References: 2 image(s) | Resolution: 3840×2160 (4K) | \
             Description: rusted plate"
        );
    }

    #[test]
    fn summary_omits_empty_description() {
        let settings = GenerationSettings::new("stone", 99, 0);
        let run = run_for(&settings);

        assert_eq!(
            settings_summary(&run, &[]),
            "Category: stone | Seed: 99 | Variation: 0% | \
             Creative Freedom-B: Disabled | References: 0 image(s) | \
             Resolution: 3840×2160 (4K)"
        );
    }
}
