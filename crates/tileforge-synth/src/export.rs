//! Per-channel map export.
//!
//! Export writes one file per channel, sequentially. There is deliberately
//! no archive/bundle output: multi-map export is individual files, not a
//! container.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use tileforge_spec::{MapImage, PBRMapSet};

use crate::error::SynthesisError;

/// JPEG quality used for lossy export.
pub const EXPORT_JPEG_QUALITY: u8 = 95;

/// Selectable raster format for exported maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless PNG, the maps' native encoding.
    Png,
    /// Lossy JPEG (quality 95, alpha discarded).
    Jpeg,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            _ => Err(format!("unknown export format: {} (expected png or jpg)", s)),
        }
    }
}

/// Write one map as `{base_name}-{channel}.{ext}` under `dir`.
pub fn export_map(
    map: &MapImage,
    dir: &Path,
    base_name: &str,
    format: ExportFormat,
) -> Result<PathBuf, SynthesisError> {
    let path = dir.join(format!(
        "{}-{}.{}",
        base_name,
        map.channel,
        format.extension()
    ));

    match format {
        ExportFormat::Png => {
            // Maps are already PNG-encoded; write the bytes through.
            let mut writer = BufWriter::new(File::create(&path)?);
            writer.write_all(&map.png)?;
            writer.flush()?;
        }
        ExportFormat::Jpeg => {
            let decoded = image::load_from_memory(&map.png)?.to_rgb8();
            let writer = BufWriter::new(File::create(&path)?);
            let encoder = JpegEncoder::new_with_quality(writer, EXPORT_JPEG_QUALITY);
            decoded.write_with_encoder(encoder)?;
        }
    }

    Ok(path)
}

/// Export all five maps of a set, one file per channel, in generation
/// order. Returns the written paths.
pub fn export_map_set(
    maps: &PBRMapSet,
    dir: &Path,
    base_name: &str,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, SynthesisError> {
    let mut paths = Vec::with_capacity(5);
    for map in maps.iter() {
        paths.push(export_map(map, dir, base_name, format)?);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
        assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
        assert!("webp".parse::<ExportFormat>().is_err());
    }
}
