//! Thumbnail generation for saved creations.
//!
//! The record store persists a small lossy preview of the albedo channel;
//! the full map set is never stored.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tileforge_spec::MapImage;

use crate::error::SynthesisError;

/// Maximum thumbnail dimension in pixels.
pub const THUMBNAIL_MAX_DIM: u32 = 400;

/// JPEG quality for thumbnails.
pub const THUMBNAIL_JPEG_QUALITY: u8 = 70;

/// Downscale a map (conventionally the albedo channel) so its longest side
/// is [`THUMBNAIL_MAX_DIM`], preserving aspect ratio, and encode it as a
/// lossy JPEG preview.
pub fn albedo_thumbnail(map: &MapImage) -> Result<Vec<u8>, SynthesisError> {
    let decoded = image::load_from_memory(&map.png)?;
    let preview = decoded
        .resize(THUMBNAIL_MAX_DIM, THUMBNAIL_MAX_DIM, FilterType::Triangle)
        .to_rgb8();

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, THUMBNAIL_JPEG_QUALITY);
    preview.write_with_encoder(encoder)?;
    Ok(bytes)
}
