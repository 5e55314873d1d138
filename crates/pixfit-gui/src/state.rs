use egui::TextureHandle;
use pixfit_common::MediaFormat;
use pixfit_core::{Conversion, QualityPreset};
use std::path::PathBuf;
use std::sync::Arc;

/// One row of the result list
pub struct ResultEntry {
    pub conversion: Arc<Conversion>,
    pub texture: TextureHandle,
    /// Where the per-row save action last wrote this result
    pub saved_to: Option<PathBuf>,
}

/// UI state. Results are append-only for the lifetime of the session.
pub struct AppState {
    /// Target output format
    pub target_format: MediaFormat,

    /// Quality preset applied at encode time
    pub preset: QualityPreset,

    /// Raw max-width input text; empty or invalid means unconstrained
    pub max_width_input: String,

    /// Raw max-height input text
    pub max_height_input: String,

    /// Output directory override; None means the platform default
    pub output_dir: Option<PathBuf>,

    results: Vec<ResultEntry>,
}

impl AppState {
    pub fn new(target_format: MediaFormat, preset: QualityPreset, output_dir: Option<PathBuf>) -> Self {
        Self {
            target_format,
            preset,
            max_width_input: String::new(),
            max_height_input: String::new(),
            output_dir,
            results: Vec::new(),
        }
    }

    pub fn push_result(&mut self, entry: ResultEntry) {
        self.results.push(entry);
    }

    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut [ResultEntry] {
        &mut self.results
    }

    /// Bulk save is available once at least one result exists
    pub fn can_save_all(&self) -> bool {
        !self.results.is_empty()
    }
}
