use anyhow::{Context, Result};
use pixfit_common::MediaFormat;
use pixfit_core::QualityPreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output directory; None means the platform default
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Default output format (extension string)
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Default quality preset (high/medium/low)
    #[serde(default = "default_quality")]
    pub default_quality: String,
}

fn default_format() -> String {
    "webp".to_string()
}

fn default_quality() -> String {
    "medium".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            default_format: default_format(),
            default_quality: default_quality(),
        }
    }
}

impl Config {
    /// Get config file path (XDG-compliant)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = directories::ProjectDirs::from("", "", "pixfit")
            .context("Failed to determine config directory")?
            .config_dir()
            .to_path_buf();

        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

            tracing::debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            tracing::info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;

        tracing::debug!("Saved config to {:?}", config_path);
        Ok(())
    }

    pub fn quality(&self) -> QualityPreset {
        QualityPreset::parse(&self.default_quality)
    }

    pub fn format(&self) -> MediaFormat {
        MediaFormat::from_extension(&self.default_format).unwrap_or(MediaFormat::Webp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format(), MediaFormat::Webp);
        assert_eq!(config.quality(), QualityPreset::Medium);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config: Config = toml::from_str(
            "default_format = \"doc\"\ndefault_quality = \"ultra\"\n",
        )
        .unwrap();
        assert_eq!(config.format(), MediaFormat::Webp);
        assert_eq!(config.quality(), QualityPreset::Medium);
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.default_format = "jpg".to_string();
        config.output_dir = Some(PathBuf::from("/tmp/out"));

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.format(), MediaFormat::Jpeg);
        assert_eq!(parsed.output_dir, Some(PathBuf::from("/tmp/out")));
    }
}
