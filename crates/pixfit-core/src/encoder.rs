use crate::quality::QualityPreset;
use image::{DynamicImage, ImageEncoder as _, ImageFormat};
use pixfit_common::{Error, MediaFormat, Result};
use std::io::Cursor;

/// In-memory image encoder with per-format quality handling
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode an image into `format` at the preset's quality factor.
    ///
    /// Results are kept in memory until the user saves them, so this
    /// writes to a Vec rather than a file.
    pub fn encode_to_vec(
        img: &DynamicImage,
        format: MediaFormat,
        preset: QualityPreset,
    ) -> Result<Vec<u8>> {
        tracing::debug!("Encoding {}x{} to {format:?}", img.width(), img.height());

        let mut buf = Vec::new();

        match format.to_image_format() {
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel
                let rgb = img.to_rgb8();
                let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    Cursor::new(&mut buf),
                    preset.jpeg_quality(),
                );
                encoder.write_image(
                    rgb.as_raw(),
                    rgb.width(),
                    rgb.height(),
                    image::ExtendedColorType::Rgb8,
                )?;
            }
            ImageFormat::WebP => {
                // The image crate only writes lossless WebP; the webp
                // crate takes a quality factor
                let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
                let encoder = webp::Encoder::from_image(&rgba)
                    .map_err(|e| Error::Encode(format!("WebP encoder rejected image: {e}")))?;
                // encode() unwraps internally; encode_simple surfaces
                // libwebp errors (e.g. any axis above 16383 px) as Err
                buf = encoder
                    .encode_simple(false, preset.webp_quality())
                    .map_err(|e| Error::Encode(format!("WebP encoding failed: {e:?}")))?
                    .to_vec();
            }
            ImageFormat::Png => {
                // PNG is lossless; the quality preset does not apply
                let encoder = image::codecs::png::PngEncoder::new(Cursor::new(&mut buf));
                encoder.write_image(
                    img.as_bytes(),
                    img.width(),
                    img.height(),
                    img.color().into(),
                )?;
            }
            other => {
                img.write_to(&mut Cursor::new(&mut buf), other)?;
            }
        }

        if buf.is_empty() {
            return Err(Error::Encode(format!("{} encoder produced no data", format)));
        }

        Ok(buf)
    }
}
