pub mod bytes;
pub mod error;
pub mod format;

pub use bytes::format_bytes;
pub use error::{Error, Result};
pub use format::MediaFormat;
