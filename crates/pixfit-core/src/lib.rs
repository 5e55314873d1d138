pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod fit;
pub mod quality;
pub mod save;

pub use convert::{Conversion, ConversionConfig, Converter};
pub use decoder::{ImageDecoder, ImageMetadata};
pub use encoder::ImageEncoder;
pub use fit::{fit_within, SizeConstraint};
pub use quality::QualityPreset;
pub use save::OutputDir;
