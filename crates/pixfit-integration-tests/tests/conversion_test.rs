use image::{DynamicImage, Rgb, RgbImage};
use pixfit_common::MediaFormat;
use pixfit_core::{ConversionConfig, Converter, OutputDir, QualityPreset, SizeConstraint};
use std::path::PathBuf;
use tempfile::TempDir;

/// Detailed enough that JPEG quality levels produce different sizes
fn textured_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            ((x * 37 + y * 11) % 256) as u8,
            ((x * 5 + y * 73) % 256) as u8,
            ((x * x + y) % 256) as u8,
        ])
    }))
}

fn write_fixture(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join(name);
    textured_image(width, height).save(&path).unwrap();
    path
}

#[test]
fn batch_produces_one_result_per_file_in_input_order() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_fixture(&dir, "a.png", 120, 60),
        write_fixture(&dir, "b.png", 240, 120),
        write_fixture(&dir, "c.png", 360, 180),
    ];

    let converter = Converter::new(ConversionConfig::new(MediaFormat::Webp));
    let constraint = SizeConstraint::new(Some(100), None);

    let results: Vec<_> = inputs
        .iter()
        .map(|p| converter.convert(p, &constraint, QualityPreset::Medium).unwrap())
        .collect();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].source_name, "a.png");
    assert_eq!(results[1].source_name, "b.png");
    assert_eq!(results[2].source_name, "c.png");

    for result in &results {
        assert_eq!(result.target_width, 100);
        assert_eq!(result.target_height, 50);
        assert_eq!(result.download_name, format!(
            "{}-resized.webp",
            result.source_name.trim_end_matches(".png")
        ));
    }
}

#[test]
fn decode_failure_is_isolated_to_the_broken_file() {
    let dir = TempDir::new().unwrap();
    let good_before = write_fixture(&dir, "before.png", 50, 50);
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"definitely not a png").unwrap();
    let good_after = write_fixture(&dir, "after.png", 50, 50);

    let converter = Converter::new(ConversionConfig::new(MediaFormat::Jpeg));
    let constraint = SizeConstraint::default();

    let outcomes: Vec<_> = [&good_before, &broken, &good_after]
        .iter()
        .map(|p| converter.convert(p, &constraint, QualityPreset::Medium))
        .collect();

    assert!(outcomes[0].is_ok());
    assert!(outcomes[1].is_err());
    assert!(outcomes[2].is_ok());
}

#[test]
fn non_image_paths_are_filtered_before_the_pipeline() {
    let paths = [
        PathBuf::from("photo.jpg"),
        PathBuf::from("notes.txt"),
        PathBuf::from("archive.zip"),
        PathBuf::from("scan.tiff"),
    ];

    let images: Vec<_> = paths
        .iter()
        .filter(|p| MediaFormat::from_path(p).is_some())
        .collect();

    assert_eq!(images.len(), 2);
    assert_eq!(images[0], &PathBuf::from("photo.jpg"));
    assert_eq!(images[1], &PathBuf::from("scan.tiff"));
}

#[test]
fn encoded_output_redecodes_to_target_dimensions() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "large.png", 4000 / 4, 2000 / 4); // 1000x500

    let converter = Converter::new(ConversionConfig::new(MediaFormat::Webp));
    let constraint = SizeConstraint::new(Some(250), None);
    let conversion = converter
        .convert(&input, &constraint, QualityPreset::High)
        .unwrap();

    assert_eq!((conversion.target_width, conversion.target_height), (250, 125));

    let decoded = image::load_from_memory(&conversion.encoded).unwrap();
    assert_eq!(decoded.width(), 250);
    assert_eq!(decoded.height(), 125);
}

#[test]
fn lower_presets_do_not_produce_larger_jpeg_output() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "detail.png", 256, 256);

    let converter = Converter::new(ConversionConfig::new(MediaFormat::Jpeg));
    let constraint = SizeConstraint::default();

    let high = converter
        .convert(&input, &constraint, QualityPreset::High)
        .unwrap();
    let low = converter
        .convert(&input, &constraint, QualityPreset::Low)
        .unwrap();

    assert!(low.encoded_bytes() <= high.encoded_bytes());
}

#[test]
fn results_save_under_their_download_names() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "trip photo.png", 80, 80);

    let converter = Converter::new(ConversionConfig::new(MediaFormat::Png));
    let conversion = converter
        .convert(&input, &SizeConstraint::default(), QualityPreset::Medium)
        .unwrap();

    let out = OutputDir::custom(dir.path().join("saved"));
    let first = out.save(&conversion).unwrap();
    assert_eq!(first.file_name().unwrap(), "trip photo-resized.png");

    // Saving again overwrites rather than erroring
    let second = out.save(&conversion).unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read(&second).unwrap(), conversion.encoded);
}

#[test]
fn quality_factor_is_independent_of_size_constraints() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "any.png", 100, 100);

    let converter = Converter::new(ConversionConfig::new(MediaFormat::Webp));
    let constrained = converter
        .convert(&input, &SizeConstraint::new(Some(40), Some(40)), QualityPreset::Low)
        .unwrap();

    assert_eq!(constrained.preset, QualityPreset::Low);
    assert_eq!(constrained.preset.factor(), 0.6);
}
