//! Theme Styling Functions
//!
//! Helpers that keep the panels and cards looking consistent.

use eframe::egui::{self, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.extreme_bg_color = colors::INPUT_BG;

    ctx.set_style(style);
}

/// Frame around the form and each user card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for the success/error banner
pub fn banner_frame(color: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(color)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(12, 8))
}
