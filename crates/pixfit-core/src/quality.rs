/// Encode quality presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPreset {
    /// Favor fidelity (factor 0.9)
    High,

    /// Balanced (factor 0.8)
    Medium,

    /// Favor file size (factor 0.6)
    Low,
}

impl QualityPreset {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Parse a preset name; anything unrecognized falls back to Medium
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Encoder quality factor in the 0.0-1.0 range
    pub fn factor(&self) -> f32 {
        match self {
            Self::High => 0.9,
            Self::Medium => 0.8,
            Self::Low => 0.6,
        }
    }

    /// JPEG quality value (1-100)
    pub fn jpeg_quality(&self) -> u8 {
        (self.factor() * 100.0).round() as u8
    }

    /// WebP quality value (0.0-100.0)
    pub fn webp_quality(&self) -> f32 {
        self.factor() * 100.0
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Config-file key, also the value `parse` round-trips
    pub fn key(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Default for QualityPreset {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
