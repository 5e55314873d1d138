use image::{DynamicImage, ImageReader};
use memmap2::Mmap;
use pixfit_common::{Error, MediaFormat, Result};
use std::fs::File;
use std::path::Path;

const TEN_MB_IN_BYTES: u64 = 10 * 1024 * 1024;

/// Image metadata extracted during decoding
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: MediaFormat,
    /// Source file size on disk, in bytes
    pub size_bytes: u64,
}

/// Image decoder with memory-mapped I/O for large files
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode image from path
    pub fn decode(path: &Path) -> Result<(DynamicImage, ImageMetadata)> {
        let format = MediaFormat::from_path(path).ok_or_else(|| {
            Error::UnsupportedFormat(
                path.extension()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            )
        })?;

        tracing::debug!("Decoding {format:?} from {path:?}");

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let file_metadata = file.metadata()?;
        let size_bytes = file_metadata.len();

        let img = if size_bytes > TEN_MB_IN_BYTES {
            // Memory-mapped decoding for large files: pages load only as
            // the decoder touches them
            tracing::debug!("Using memory-mapped I/O for large file");
            let mmap = unsafe { Mmap::map(&file)? };
            ImageReader::new(std::io::Cursor::new(&mmap[..]))
                .with_guessed_format()?
                .decode()?
        } else {
            image::open(path)?
        };

        let img_metadata = ImageMetadata {
            width: img.width(),
            height: img.height(),
            format,
            size_bytes,
        };

        tracing::info!(
            "Decoded {}x{} {} image ({})",
            img_metadata.width,
            img_metadata.height,
            img_metadata.format,
            pixfit_common::format_bytes(size_bytes)
        );

        Ok((img, img_metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png() {
        let temp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let img = image::DynamicImage::new_rgb8(4, 2);
        img.save_with_format(temp.path(), image::ImageFormat::Png)
            .unwrap();

        let (_, metadata) = ImageDecoder::decode(temp.path()).unwrap();
        assert_eq!(metadata.width, 4);
        assert_eq!(metadata.height, 2);
        assert_eq!(metadata.format, MediaFormat::Png);
        assert!(metadata.size_bytes > 0);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let temp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        std::fs::write(temp.path(), b"not an image at all").unwrap();

        assert!(ImageDecoder::decode(temp.path()).is_err());
    }

    #[test]
    fn test_decode_unknown_extension_fails() {
        let temp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = ImageDecoder::decode(temp.path()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
