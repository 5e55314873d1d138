use crate::convert::Conversion;
use pixfit_common::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves and creates the directory conversion results are saved into
#[derive(Debug, Clone)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    /// Use the platform default (`~/Downloads/pixfit`)
    pub fn default_location() -> Result<Self> {
        let home = directories::UserDirs::new().ok_or_else(|| {
            Error::InvalidPath(PathBuf::from("could not determine home directory"))
        })?;

        Ok(Self {
            dir: home.home_dir().join("Downloads").join("pixfit"),
        })
    }

    /// Use a caller-chosen directory
    pub fn custom(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Write a conversion's encoded bytes under its download name.
    ///
    /// Creates the directory on first use. An existing file with the same
    /// name is overwritten, matching a repeated download of the same
    /// source.
    pub fn save(&self, conversion: &Conversion) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(&conversion.download_name);
        std::fs::write(&path, &conversion.encoded)?;

        tracing::info!(
            "Saved {} ({})",
            path.display(),
            pixfit_common::format_bytes(conversion.encoded_bytes())
        );

        Ok(path)
    }
}
