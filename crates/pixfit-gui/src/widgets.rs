use crate::theme::Theme;
use egui::{Response, Sense, Ui, Vec2};
use pixfit_common::MediaFormat;
use pixfit_core::QualityPreset;

/// File drop zone widget with a dashed border
pub fn drop_zone(ui: &mut Ui, hovered: bool) -> Response {
    let desired_size = Vec2::new(ui.available_width(), 130.0);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

    if ui.is_rect_visible(rect) {
        let active = hovered || response.hovered();

        let bg_color = if active {
            Theme::PRIMARY.linear_multiply(0.15)
        } else {
            Theme::BG_PANEL
        };

        let stroke_color = if active { Theme::PRIMARY } else { Theme::BG_HOVER };
        let stroke_width = if active { 2.5 } else { 2.0 };

        ui.painter().rect_filled(rect, 8.0, bg_color);

        // Dashed border for drop zone feel
        let dashes = 12;
        let dash_length = rect.width() / (dashes as f32 * 2.0);
        for i in 0..dashes {
            let start = rect.left_top() + Vec2::new(i as f32 * dash_length * 2.0, 0.0);
            ui.painter().line_segment(
                [start, start + Vec2::new(dash_length, 0.0)],
                egui::Stroke::new(stroke_width, stroke_color),
            );

            let start = rect.left_bottom() + Vec2::new(i as f32 * dash_length * 2.0, 0.0);
            ui.painter().line_segment(
                [start, start + Vec2::new(dash_length, 0.0)],
                egui::Stroke::new(stroke_width, stroke_color),
            );
        }

        let v_dashes = 8;
        let v_dash_length = rect.height() / (v_dashes as f32 * 2.0);
        for i in 0..v_dashes {
            let start = rect.left_top() + Vec2::new(0.0, i as f32 * v_dash_length * 2.0);
            ui.painter().line_segment(
                [start, start + Vec2::new(0.0, v_dash_length)],
                egui::Stroke::new(stroke_width, stroke_color),
            );

            let start = rect.right_top() + Vec2::new(0.0, i as f32 * v_dash_length * 2.0);
            ui.painter().line_segment(
                [start, start + Vec2::new(0.0, v_dash_length)],
                egui::Stroke::new(stroke_width, stroke_color),
            );
        }

        let text = if active {
            "Drop images here"
        } else {
            "Drag & drop images or click to browse"
        };

        let text_color = if active { Theme::PRIMARY } else { Theme::TEXT_SECONDARY };

        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(15.0),
            text_color,
        );

        if !active {
            let hint = "Supported: PNG, JPEG, WebP, TIFF, BMP, GIF";
            ui.painter().text(
                rect.center() + Vec2::new(0.0, 25.0),
                egui::Align2::CENTER_CENTER,
                hint,
                egui::FontId::proportional(11.0),
                Theme::TEXT_SECONDARY.linear_multiply(0.7),
            );
        }
    }

    response
}

/// Output format combo box
pub fn format_selector(ui: &mut Ui, selected: &mut MediaFormat) -> bool {
    let formats = [MediaFormat::Webp, MediaFormat::Jpeg, MediaFormat::Png];

    let mut changed = false;

    egui::ComboBox::from_label("Format")
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for format in formats {
                if ui
                    .selectable_value(selected, format, format.to_string())
                    .clicked()
                {
                    changed = true;
                }
            }
        });

    changed
}

/// Quality preset selector
pub fn quality_selector(ui: &mut Ui, preset: &mut QualityPreset) -> bool {
    let mut changed = false;

    ui.label("Quality");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        for candidate in QualityPreset::ALL {
            let label = format!("{} ({})", candidate.label(), candidate.factor());
            if ui.selectable_label(*preset == candidate, label).clicked() {
                *preset = candidate;
                changed = true;
            }
        }
    });

    changed
}
