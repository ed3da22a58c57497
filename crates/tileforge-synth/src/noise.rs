//! Fractal noise field synthesis.
//!
//! Fields are built from summed trigonometric octaves with randomized
//! phases: per octave the pixel coordinate is normalized into `[0, 1)` over
//! the full image extent, scaled by the octave frequency, and sampled as
//! `sin(2π·sx + rx·10) · cos(2π·sy + ry·10)`, where `rx` and `ry` are the
//! next two values drawn from one seeded source. Amplitude halves and
//! frequency doubles per octave, and the accumulated value is normalized
//! back to 8-bit intensity.
//!
//! Traversal order is part of the determinism contract: rows outer
//! (y, then x), octaves innermost, two source draws per octave. Any change
//! to that order changes every output byte.
//!
//! Because sampling is periodic in coordinates normalized over the full
//! extent, fields wrap exactly only when the base scale is a whole number;
//! fractional scales give near-seamless edges. Callers that need hard
//! seamlessness at arbitrary repeat counts must pick integer scales.

use std::f64::consts::TAU;

use crate::error::SynthesisError;
use crate::raster::IntensityField;
use crate::rng::LcgSource;

/// Synthesize a single-channel fractal noise field.
///
/// The source is constructed once from `derived_seed` and advanced across
/// the whole traversal. Every output intensity is in `[0, 255]` and finite
/// for any valid input.
///
/// Preconditions (violations fail fast, nothing is clamped): `width` and
/// `height` at least 1, `octaves` at least 1, `base_scale` finite and
/// positive.
pub fn synthesize_field(
    width: u32,
    height: u32,
    derived_seed: u64,
    base_scale: f64,
    octaves: u32,
) -> Result<IntensityField, SynthesisError> {
    if width < 1 || height < 1 {
        return Err(SynthesisError::InvalidParameter(format!(
            "field dimensions must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    if octaves < 1 {
        return Err(SynthesisError::InvalidParameter(
            "octave count must be at least 1".to_string(),
        ));
    }
    if !base_scale.is_finite() || base_scale <= 0.0 {
        return Err(SynthesisError::InvalidParameter(format!(
            "base scale must be finite and positive, got {}",
            base_scale
        )));
    }

    let mut source = LcgSource::new(derived_seed);
    let mut field = IntensityField::new(width, height, 0);

    let inv_width = 1.0 / width as f64;
    let inv_height = 1.0 / height as f64;

    for y in 0..height {
        for x in 0..width {
            let mut value = 0.0;
            let mut amplitude = 1.0;
            let mut frequency = base_scale;
            let mut max_value = 0.0;

            for _ in 0..octaves {
                let sample_x = x as f64 * inv_width * frequency;
                let sample_y = y as f64 * inv_height * frequency;

                let phase_x = source.next_f64() * 10.0;
                let phase_y = source.next_f64() * 10.0;
                let noise = (TAU * sample_x + phase_x).sin() * (TAU * sample_y + phase_y).cos();

                value += noise * amplitude;
                max_value += amplitude;
                amplitude *= 0.5;
                frequency *= 2.0;
            }

            let normalized = ((value / max_value + 1.0) * 0.5).clamp(0.0, 1.0);
            field.set(x, y, (normalized * 255.0).floor() as u8);
        }
    }

    Ok(field)
}
