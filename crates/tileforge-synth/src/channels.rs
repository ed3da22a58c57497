//! Channel recipes and the generic compositor.
//!
//! Each of the five PBR channels is one fixed recipe over the seed transform
//! and the noise field generator: a per-channel seed offset, a scale formula
//! in the variation percentage, an octave count, and a post-process. One
//! compositor executes any recipe; the channels differ only in data.

use tileforge_spec::{GenerationSettings, MapChannel, MapImage};

use crate::color::{BlendMode, Color};
use crate::creative::derive_seed;
use crate::error::SynthesisError;
use crate::noise::synthesize_field;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig};
use crate::raster::TextureBuffer;

/// Post-process applied to a channel's noise field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostProcess {
    /// Raw grayscale, no compositing.
    Raw,
    /// A flat translucent tint, overlay-composited.
    FlatOverlay { color: Color, alpha: f64 },
    /// A seed-hued diagonal gradient, overlay-composited.
    GradientOverlay { alpha: f64 },
}

/// The fixed generation recipe for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRecipe {
    /// The channel this recipe produces.
    pub channel: MapChannel,
    /// Offset added to the request seed before the creative transform, so
    /// channels never share a noise field even for coinciding inputs.
    pub seed_offset: u64,
    /// Base spatial frequency at variation 0.
    pub scale_base: f64,
    /// Divisor applied to the variation percentage.
    pub scale_divisor: f64,
    /// Octave count.
    pub octaves: u32,
    /// Channel-specific post-process.
    pub post: PostProcess,
}

impl ChannelRecipe {
    /// Effective base scale for a variation percentage:
    /// `scale_base + variation / scale_divisor`. Strictly increasing in
    /// variation for every channel.
    pub fn base_scale(&self, variation: u32) -> f64 {
        self.scale_base + f64::from(variation) / self.scale_divisor
    }

    /// The derived seed this recipe feeds into noise synthesis.
    ///
    /// With creative freedom enabled this consults fresh entropy, so each
    /// call may differ; see [`derive_seed`].
    pub fn derived_seed(&self, settings: &GenerationSettings) -> u64 {
        derive_seed(
            u64::from(settings.seed) + self.seed_offset,
            settings.variation,
            settings.creative_freedom,
        )
    }
}

/// Neutral tangent-space bias tint for the normal channel.
const NORMAL_TINT: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 255.0 / 255.0);

/// Wetness tint for the fluid channel.
const FLUID_TINT: Color = Color::rgb(0.0, 100.0 / 255.0, 200.0 / 255.0);

/// The five channel recipes, in generation order.
pub static CHANNEL_RECIPES: [ChannelRecipe; 5] = [
    ChannelRecipe {
        channel: MapChannel::Albedo,
        seed_offset: 0,
        scale_base: 4.0,
        scale_divisor: 20.0,
        octaves: 6,
        post: PostProcess::GradientOverlay { alpha: 0.3 },
    },
    ChannelRecipe {
        channel: MapChannel::Normal,
        seed_offset: 1000,
        scale_base: 8.0,
        scale_divisor: 15.0,
        octaves: 5,
        post: PostProcess::FlatOverlay {
            color: NORMAL_TINT,
            alpha: 0.5,
        },
    },
    ChannelRecipe {
        channel: MapChannel::Roughness,
        seed_offset: 2000,
        scale_base: 6.0,
        scale_divisor: 25.0,
        octaves: 4,
        post: PostProcess::Raw,
    },
    ChannelRecipe {
        channel: MapChannel::Fluid,
        seed_offset: 3000,
        scale_base: 10.0,
        scale_divisor: 10.0,
        octaves: 3,
        post: PostProcess::FlatOverlay {
            color: FLUID_TINT,
            alpha: 0.2,
        },
    },
    ChannelRecipe {
        channel: MapChannel::Metallic,
        seed_offset: 4000,
        scale_base: 5.0,
        scale_divisor: 30.0,
        octaves: 3,
        post: PostProcess::Raw,
    },
];

/// Look up the recipe for a channel.
pub fn recipe_for(channel: MapChannel) -> &'static ChannelRecipe {
    CHANNEL_RECIPES
        .iter()
        .find(|r| r.channel == channel)
        .expect("every channel has a recipe")
}

/// Execute one recipe at the given resolution.
///
/// Derives the channel seed, synthesizes the noise field from a fresh
/// request-local source, applies the post-process, and encodes the result
/// as a hashed PNG. The orchestrator calls this at the fixed 3840×2160
/// output resolution; the resolution parameters exist for previews and
/// tests.
pub fn compose_channel(
    recipe: &ChannelRecipe,
    settings: &GenerationSettings,
    width: u32,
    height: u32,
) -> Result<MapImage, SynthesisError> {
    let derived = recipe.derived_seed(settings);
    let field = synthesize_field(
        width,
        height,
        derived,
        recipe.base_scale(settings.variation),
        recipe.octaves,
    )?;

    let mut buffer = field.to_texture_buffer();
    match recipe.post {
        PostProcess::Raw => {}
        PostProcess::FlatOverlay { color, alpha } => apply_flat_overlay(&mut buffer, color, alpha),
        PostProcess::GradientOverlay { alpha } => apply_gradient_overlay(&mut buffer, derived, alpha),
    }

    let (png, hash) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default())?;
    Ok(MapImage {
        channel: recipe.channel,
        width,
        height,
        png,
        hash,
    })
}

/// Overlay-composite a flat tint across the whole buffer.
fn apply_flat_overlay(buffer: &mut TextureBuffer, color: Color, alpha: f64) {
    for pixel in &mut buffer.data {
        *pixel = BlendMode::Overlay.blend(pixel, &color, alpha);
    }
}

/// Overlay-composite the albedo gradient: a linear ramp along the image
/// diagonal between two hues picked from the derived seed.
fn apply_gradient_overlay(buffer: &mut TextureBuffer, derived_seed: u64, alpha: f64) {
    let hue = (derived_seed % 360) as f64;
    let start = Color::from_hsl(hue, 0.40, 0.45);
    let end = Color::from_hsl((hue + 30.0) % 360.0, 0.50, 0.55);

    let w = buffer.width as f64;
    let h = buffer.height as f64;
    let inv_diag_sq = 1.0 / (w * w + h * h);

    for y in 0..buffer.height {
        for x in 0..buffer.width {
            // Projection of (x, y) onto the (w, h) diagonal, in [0, 1].
            let t = (x as f64 * w + y as f64 * h) * inv_diag_sq;
            let tint = start.lerp(&end, t);
            let base = buffer.get(x, y);
            buffer.set(x, y, BlendMode::Overlay.blend(&base, &tint, alpha));
        }
    }
}
