use crate::decoder::ImageDecoder;
use crate::encoder::ImageEncoder;
use crate::fit::{fit_within, SizeConstraint};
use crate::quality::QualityPreset;
use image::imageops::FilterType;
use image::RgbaImage;
use pixfit_common::{MediaFormat, Result};
use std::path::Path;

/// Longest edge of the on-screen preview
const PREVIEW_EDGE: u32 = 320;

/// Suffix appended to output filenames, before the new extension
const OUTPUT_SUFFIX: &str = "-resized";

/// Immutable output-format configuration, supplied once per converter
#[derive(Debug, Clone, Copy)]
pub struct ConversionConfig {
    pub mime_type: &'static str,
    pub extension: &'static str,
    pub format_name: &'static str,
    format: MediaFormat,
}

impl ConversionConfig {
    pub fn new(format: MediaFormat) -> Self {
        Self {
            mime_type: format.mime_type(),
            extension: format.extension(),
            format_name: format.name(),
            format,
        }
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }
}

/// One completed conversion, ready for display and saving
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source_name: String,
    pub original_width: u32,
    pub original_height: u32,
    pub target_width: u32,
    pub target_height: u32,
    pub original_bytes: u64,
    pub preset: QualityPreset,
    /// `<original stem>-resized.<configured extension>`
    pub download_name: String,
    /// Encoded output in the configured format
    pub encoded: Vec<u8>,
    /// Display-only thumbnail of the resized pixels
    pub preview: RgbaImage,
}

impl Conversion {
    pub fn encoded_bytes(&self) -> u64 {
        self.encoded.len() as u64
    }
}

/// Per-file conversion pipeline: decode, fit, resize, encode
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Run the whole pipeline for one file.
    ///
    /// Each call owns its own buffers, so separate files can never read
    /// each other's partially drawn pixels.
    pub fn convert(
        &self,
        input: &Path,
        constraint: &SizeConstraint,
        preset: QualityPreset,
    ) -> Result<Conversion> {
        let (img, metadata) = ImageDecoder::decode(input)?;

        let (target_width, target_height) =
            fit_within(metadata.width, metadata.height, constraint);

        tracing::info!(
            "Converting {}x{} {} → {}x{} {} (quality {})",
            metadata.width,
            metadata.height,
            metadata.format,
            target_width,
            target_height,
            self.config.format_name,
            preset.factor()
        );

        let resized = if (target_width, target_height) == (metadata.width, metadata.height) {
            img
        } else {
            img.resize_exact(target_width, target_height, FilterType::Lanczos3)
        };

        let preview = resized.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE).to_rgba8();

        let encoded = ImageEncoder::encode_to_vec(&resized, self.config.format(), preset)?;

        let source_name = input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let download_name = download_name(&source_name, self.config.extension);

        Ok(Conversion {
            source_name,
            original_width: metadata.width,
            original_height: metadata.height,
            target_width,
            target_height,
            original_bytes: metadata.size_bytes,
            preset,
            download_name,
            encoded,
            preview,
        })
    }
}

/// Strip the original extension and append the output suffix + extension
fn download_name(source_name: &str, extension: &str) -> String {
    let stem = match source_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => source_name,
    };
    format!("{stem}{OUTPUT_SUFFIX}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn converter(format: MediaFormat) -> Converter {
        Converter::new(ConversionConfig::new(format))
    }

    #[test]
    fn test_convert_resizes_and_names() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("photo.png");
        DynamicImage::new_rgb8(400, 200).save(&input).unwrap();

        let constraint = SizeConstraint::new(Some(100), None);
        let conversion = converter(MediaFormat::Webp)
            .convert(&input, &constraint, QualityPreset::Low)
            .unwrap();

        assert_eq!(conversion.source_name, "photo.png");
        assert_eq!(conversion.download_name, "photo-resized.webp");
        assert_eq!((conversion.original_width, conversion.original_height), (400, 200));
        assert_eq!((conversion.target_width, conversion.target_height), (100, 50));
        assert!(conversion.encoded_bytes() > 0);
        assert_eq!(conversion.preset, QualityPreset::Low);
    }

    #[test]
    fn test_unconstrained_keeps_dimensions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("small.png");
        DynamicImage::new_rgb8(30, 40).save(&input).unwrap();

        let conversion = converter(MediaFormat::Jpeg)
            .convert(&input, &SizeConstraint::default(), QualityPreset::Medium)
            .unwrap();

        assert_eq!((conversion.target_width, conversion.target_height), (30, 40));
        let decoded = image::load_from_memory(&conversion.encoded).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (30, 40));
    }

    #[test]
    fn test_preview_is_bounded() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("wide.png");
        DynamicImage::new_rgb8(1600, 400).save(&input).unwrap();

        let conversion = converter(MediaFormat::Png)
            .convert(&input, &SizeConstraint::default(), QualityPreset::High)
            .unwrap();

        assert!(conversion.preview.width() <= 320);
        assert!(conversion.preview.height() <= 320);
    }

    #[test]
    fn test_config_exposes_format_strings() {
        let config = ConversionConfig::new(MediaFormat::Webp);
        assert_eq!(config.mime_type, "image/webp");
        assert_eq!(config.extension, "webp");
        assert_eq!(config.format_name, "WebP");
    }

    #[test]
    fn test_download_name_edge_cases() {
        assert_eq!(download_name("photo.jpeg", "webp"), "photo-resized.webp");
        assert_eq!(download_name("a.b.c.png", "jpg"), "a.b.c-resized.jpg");
        assert_eq!(download_name("noext", "webp"), "noext-resized.webp");
        assert_eq!(download_name(".hidden", "png"), ".hidden-resized.png");
    }
}
