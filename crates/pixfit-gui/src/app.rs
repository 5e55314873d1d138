use crate::config::Config;
use crate::state::{AppState, ResultEntry};
use crate::theme::Theme;
use crate::widgets;
use crate::worker::{ConversionEvent, ConversionRequest, ConversionWorker};
use egui::{CentralPanel, ScrollArea, SidePanel, TopBottomPanel};
use pixfit_common::{format_bytes, MediaFormat};
use pixfit_core::{Conversion, ConversionConfig, OutputDir, SizeConstraint};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Spacing between writes during a bulk save
const SAVE_ALL_STAGGER: Duration = Duration::from_millis(150);

/// Scroll offset past which the back-to-top button appears
const BACK_TO_TOP_THRESHOLD: f32 = 200.0;

pub struct PixFitApp {
    state: AppState,
    config: Config,
    worker: ConversionWorker,
    scroll_offset: f32,
    /// Animated offset while returning to the top; None when idle
    scroll_return: Option<f32>,
}

impl PixFitApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::configure(&cc.egui_ctx);

        let config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {e:#}");
            Config::default()
        });

        let state = AppState::new(config.format(), config.quality(), config.output_dir.clone());

        Self {
            state,
            config,
            worker: ConversionWorker::new(),
            scroll_offset: 0.0,
            scroll_return: None,
        }
    }

    fn alert(title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .show();
    }

    /// Common entry point for dropped and picked files: filter to images,
    /// notice when nothing is left, queue the rest in input order.
    fn handle_files(&mut self, paths: Vec<PathBuf>) {
        let images: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| MediaFormat::from_path(p).is_some())
            .collect();

        if images.is_empty() {
            Self::alert("No images", "Please select image files.");
            return;
        }

        let config = ConversionConfig::new(self.state.target_format);
        let constraint =
            SizeConstraint::from_inputs(&self.state.max_width_input, &self.state.max_height_input);
        let preset = self.state.preset;

        for path in images {
            self.worker.submit(ConversionRequest {
                path,
                config,
                constraint,
                preset,
            });
        }
    }

    fn poll_worker(&mut self, ctx: &egui::Context) {
        for event in self.worker.poll_events() {
            match event {
                ConversionEvent::Finished(conversion) => {
                    let preview = &conversion.preview;
                    let size = [preview.width() as usize, preview.height() as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, preview.as_raw());
                    let texture = ctx.load_texture(
                        format!("preview-{}", self.state.results().len()),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );

                    self.state.push_result(ResultEntry {
                        conversion: Arc::new(*conversion),
                        texture,
                        saved_to: None,
                    });
                }
                ConversionEvent::Failed { name, message } => {
                    Self::alert("Conversion failed", &format!("{name}: {message}"));
                }
            }
        }
    }

    fn output_dir(&self) -> Option<OutputDir> {
        match &self.state.output_dir {
            Some(dir) => Some(OutputDir::custom(dir.clone())),
            None => match OutputDir::default_location() {
                Ok(dir) => Some(dir),
                Err(e) => {
                    Self::alert("No output directory", &e.to_string());
                    None
                }
            },
        }
    }

    fn save_result(&mut self, index: usize) {
        let Some(out) = self.output_dir() else {
            return;
        };

        let entry = &mut self.state.results_mut()[index];
        match out.save(&entry.conversion) {
            Ok(path) => entry.saved_to = Some(path),
            Err(e) => Self::alert(
                "Save failed",
                &format!("{}: {e}", entry.conversion.download_name),
            ),
        }
    }

    /// Save every result in list order on a detached thread, spacing the
    /// writes out. Best effort: one failed write never blocks the rest.
    fn save_all(&mut self) {
        let Some(out) = self.output_dir() else {
            return;
        };

        let conversions: Vec<Arc<Conversion>> = self
            .state
            .results()
            .iter()
            .map(|entry| Arc::clone(&entry.conversion))
            .collect();

        std::thread::spawn(move || {
            for (index, conversion) in conversions.iter().enumerate() {
                if index > 0 {
                    std::thread::sleep(SAVE_ALL_STAGGER);
                }
                if let Err(e) = out.save(conversion) {
                    tracing::warn!("Bulk save of {} failed: {e}", conversion.download_name);
                }
            }
        });
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Output").size(15.0).color(Theme::TEXT_PRIMARY));
        ui.add_space(8.0);

        let mut format = self.state.target_format;
        if widgets::format_selector(ui, &mut format) {
            self.state.target_format = format;
            self.config.default_format = format.extension().to_string();
            self.persist_config();
        }

        ui.add_space(12.0);

        let mut preset = self.state.preset;
        if widgets::quality_selector(ui, &mut preset) {
            self.state.preset = preset;
            self.config.default_quality = preset.key().to_string();
            self.persist_config();
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(12.0);

        ui.label(egui::RichText::new("Fit within").size(15.0).color(Theme::TEXT_PRIMARY));
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Leave empty for no limit; images are never upscaled")
                .size(11.0)
                .color(Theme::TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Max width");
            ui.add(
                egui::TextEdit::singleline(&mut self.state.max_width_input)
                    .hint_text("px")
                    .desired_width(70.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Max height");
            ui.add(
                egui::TextEdit::singleline(&mut self.state.max_height_input)
                    .hint_text("px")
                    .desired_width(70.0),
            );
        });

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(12.0);

        self.render_output_dir(ui);
    }

    fn render_output_dir(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Save to").size(15.0).color(Theme::TEXT_PRIMARY));
        ui.add_space(6.0);

        let display = self
            .state
            .output_dir
            .as_ref()
            .and_then(|p| p.to_str())
            .unwrap_or("Default: ~/Downloads/pixfit")
            .to_string();

        ui.label(egui::RichText::new(display).size(12.0).color(Theme::TEXT_SECONDARY));
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("Browse").clicked() {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    self.state.output_dir = Some(dir.clone());
                    self.config.output_dir = Some(dir);
                    self.persist_config();
                }
            }

            if self.state.output_dir.is_some() && ui.button("Reset to Default").clicked() {
                self.state.output_dir = None;
                self.config.output_dir = None;
                self.persist_config();
            }
        });
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not persist config: {e:#}");
        }
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let drag_hover = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let response = widgets::drop_zone(ui, drag_hover);

        if response.clicked() {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "webp", "tif", "tiff", "bmp", "gif"])
                .pick_files()
            {
                self.handle_files(paths);
            }
        }

        let dropped: Vec<PathBuf> = ui.ctx().input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.handle_files(dropped);
        }
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        if self.state.results().is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Converted images appear here")
                        .size(14.0)
                        .color(Theme::TEXT_SECONDARY),
                );
            });
            return;
        }

        let mut save_clicked = None;

        for (idx, entry) in self.state.results().iter().enumerate() {
            let conversion = &entry.conversion;

            egui::Frame::none()
                .fill(Theme::BG_PANEL)
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let preview_size = scaled_preview_size(
                            entry.texture.size_vec2(),
                            egui::Vec2::new(150.0, 110.0),
                        );
                        ui.add(egui::Image::new(egui::load::SizedTexture::new(
                            entry.texture.id(),
                            preview_size,
                        )));

                        ui.add_space(10.0);

                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(&conversion.source_name)
                                    .size(14.0)
                                    .strong(),
                            );
                            ui.label(format!(
                                "Dimensions: {} x {} px → {} x {} px",
                                conversion.original_width,
                                conversion.original_height,
                                conversion.target_width,
                                conversion.target_height,
                            ));
                            ui.label(format!(
                                "File size: {} → {}",
                                format_bytes(conversion.original_bytes),
                                format_bytes(conversion.encoded_bytes()),
                            ));
                            ui.label(format!(
                                "Quality preset: {} ({})",
                                conversion.preset.label(),
                                conversion.preset.factor(),
                            ));

                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                if ui.button("Save this image").clicked() {
                                    save_clicked = Some(idx);
                                }

                                if let Some(path) = &entry.saved_to {
                                    ui.colored_label(
                                        Theme::SUCCESS,
                                        egui::RichText::new(format!("Saved: {}", path.display()))
                                            .size(12.0),
                                    );
                                }
                            });
                        });
                    });
                });

            ui.add_space(6.0);
        }

        if let Some(idx) = save_clicked {
            self.save_result(idx);
        }
    }

    fn render_bottom_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let save_all_button = egui::Button::new(egui::RichText::new("Save all").size(14.0))
                .fill(if self.state.can_save_all() {
                    Theme::PRIMARY
                } else {
                    Theme::BG_HOVER
                })
                .min_size(egui::Vec2::new(120.0, 32.0));

            if ui.add_enabled(self.state.can_save_all(), save_all_button).clicked() {
                self.save_all();
            }

            ui.add_space(12.0);

            if self.worker.in_flight() > 0 {
                ui.add(egui::Spinner::new());
                ui.label(
                    egui::RichText::new(format!("Converting {} file(s)…", self.worker.in_flight()))
                        .size(13.0)
                        .color(Theme::TEXT_SECONDARY),
                );
            } else if !self.state.results().is_empty() {
                ui.label(
                    egui::RichText::new(format!("{} result(s)", self.state.results().len()))
                        .size(13.0)
                        .color(Theme::TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_back_to_top(&mut self, ctx: &egui::Context) {
        if self.scroll_offset <= BACK_TO_TOP_THRESHOLD {
            return;
        }

        egui::Area::new(egui::Id::new("back_to_top"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-24.0, -72.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(egui::RichText::new("⬆ Top").size(13.0))
                    .fill(Theme::PRIMARY)
                    .min_size(egui::Vec2::new(64.0, 30.0));
                if ui.add(button).clicked() {
                    self.scroll_return = Some(self.scroll_offset);
                }
            });
    }
}

/// Fit a texture into `bounds` preserving its aspect ratio
fn scaled_preview_size(texture: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if texture.x <= 0.0 || texture.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / texture.x).min(bounds.y / texture.y).min(1.0);
    texture * scale
}

impl eframe::App for PixFitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker(ctx);

        TopBottomPanel::top("top_panel")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(egui::RichText::new("PixFit").size(20.0));
                    ui.label(
                        egui::RichText::new("batch image resizer")
                            .size(12.0)
                            .color(Theme::TEXT_SECONDARY),
                    );
                });
            });

        SidePanel::left("settings_panel")
            .default_width(260.0)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                self.render_settings(ui);
            });

        TopBottomPanel::bottom("bottom_panel")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_DARK)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                self.render_bottom_bar(ui);
            });

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_DARK)
                    .inner_margin(egui::Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                self.render_drop_zone(ui);
                ui.add_space(16.0);

                let mut scroll = ScrollArea::vertical().auto_shrink([false; 2]);
                if let Some(offset) = self.scroll_return {
                    // Ease the offset back toward zero over a few frames
                    let next = offset * 0.7;
                    if next < 1.0 {
                        self.scroll_return = None;
                        scroll = scroll.vertical_scroll_offset(0.0);
                    } else {
                        self.scroll_return = Some(next);
                        scroll = scroll.vertical_scroll_offset(next);
                    }
                    ctx.request_repaint();
                }

                let output = scroll.show(ui, |ui| {
                    self.render_results(ui);
                });
                self.scroll_offset = output.state.offset.y;
            });

        self.render_back_to_top(ctx);

        if self.worker.in_flight() > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
