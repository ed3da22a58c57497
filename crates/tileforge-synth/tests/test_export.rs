//! Export and thumbnail collaborator tests.

use tileforge_spec::{GenerationSettings, MapChannel, PBRMapSet};
use tileforge_synth::{
    albedo_thumbnail, compose_channel, export_map_set, recipe_for, ExportFormat,
};

fn small_map_set(width: u32, height: u32) -> PBRMapSet {
    let settings = GenerationSettings::new("stone", 11, 40);
    let compose = |channel: MapChannel| {
        compose_channel(recipe_for(channel), &settings, width, height).unwrap()
    };
    PBRMapSet {
        albedo: compose(MapChannel::Albedo),
        normal: compose(MapChannel::Normal),
        roughness: compose(MapChannel::Roughness),
        fluid: compose(MapChannel::Fluid),
        metallic: compose(MapChannel::Metallic),
    }
}

#[test]
fn test_png_export_writes_one_file_per_channel() {
    let dir = tempfile::tempdir().unwrap();
    let maps = small_map_set(24, 12);

    let paths = export_map_set(&maps, dir.path(), "granite", ExportFormat::Png).unwrap();

    assert_eq!(paths.len(), 5);
    for (path, &channel) in paths.iter().zip(MapChannel::all()) {
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("granite-{}.png", channel)
        );
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(bytes, maps.get(channel).png, "PNG export is pass-through");
    }
}

#[test]
fn test_jpeg_export_is_decodable_at_source_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let maps = small_map_set(24, 12);

    let paths = export_map_set(&maps, dir.path(), "granite", ExportFormat::Jpeg).unwrap();

    for path in &paths {
        assert_eq!(path.extension().unwrap(), "jpg");
        let decoded = image::load_from_memory(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (24, 12));
    }
}

#[test]
fn test_thumbnail_fits_max_dimension_preserving_aspect() {
    // 16:9 source scales to 400x225.
    let maps = small_map_set(64, 36);
    let jpeg = albedo_thumbnail(&maps.albedo).unwrap();

    let decoded = image::load_from_memory(&jpeg).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (400, 225));
}
