//! Success and error banners.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};

pub fn success(ui: &mut egui::Ui, text: &str) {
    render(ui, colors::SUCCESS, text);
}

pub fn error(ui: &mut egui::Ui, text: &str) {
    render(ui, colors::ERROR, text);
}

fn render(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    styles::banner_frame(color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(text).strong());
    });
}
