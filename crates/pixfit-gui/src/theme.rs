use egui::{Color32, Rounding, Style, Vec2};

/// Application theme colors
pub struct Theme;

impl Theme {
    // Primary colors
    pub const PRIMARY: Color32 = Color32::from_rgb(45, 212, 191); // Teal
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94); // Green

    // Backgrounds
    pub const BG_DARK: Color32 = Color32::from_rgb(15, 23, 42); // Slate-900
    pub const BG_PANEL: Color32 = Color32::from_rgb(30, 41, 59); // Slate-800
    pub const BG_HOVER: Color32 = Color32::from_rgb(51, 65, 85); // Slate-700

    // Text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249); // Slate-100
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184); // Slate-400

    /// Configure egui style
    pub fn configure(ctx: &egui::Context) {
        let mut style = Style::default();

        style.spacing.item_spacing = Vec2::new(8.0, 8.0);
        style.spacing.button_padding = Vec2::new(14.0, 7.0);
        style.spacing.window_margin = egui::Margin::same(16.0);
        style.spacing.indent = 16.0;
        style.spacing.combo_width = 130.0;

        let rounding = Rounding::same(6.0);
        style.visuals.widgets.noninteractive.rounding = rounding;
        style.visuals.widgets.inactive.rounding = rounding;
        style.visuals.widgets.hovered.rounding = rounding;
        style.visuals.widgets.active.rounding = rounding;
        style.visuals.window_rounding = Rounding::same(8.0);

        style.visuals.dark_mode = true;
        style.visuals.override_text_color = Some(Self::TEXT_PRIMARY);

        style.visuals.panel_fill = Self::BG_PANEL;
        style.visuals.extreme_bg_color = Self::BG_DARK;

        style.visuals.widgets.noninteractive.bg_fill = Self::BG_PANEL;
        style.visuals.widgets.noninteractive.weak_bg_fill = Self::BG_PANEL;

        style.visuals.widgets.inactive.bg_fill = Self::BG_PANEL;
        style.visuals.widgets.inactive.weak_bg_fill = Self::BG_PANEL;

        style.visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        style.visuals.widgets.hovered.weak_bg_fill = Self::BG_HOVER;

        style.visuals.widgets.active.bg_fill = Self::PRIMARY;
        style.visuals.widgets.active.weak_bg_fill = Self::PRIMARY;

        style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BG_HOVER);
        style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, Self::BG_HOVER);
        style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, Self::PRIMARY);
        style.visuals.widgets.active.bg_stroke = egui::Stroke::new(2.0, Self::PRIMARY);

        style.visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.3);
        style.visuals.selection.stroke = egui::Stroke::new(1.0, Self::PRIMARY);

        style.visuals.window_fill = Self::BG_PANEL;
        style.visuals.window_stroke = egui::Stroke::new(1.0, Self::BG_HOVER);

        ctx.set_style(style);
    }
}
