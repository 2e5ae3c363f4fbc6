//! Modal windows: delete confirmation and the form alert.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if let Some(user) = state.pending_delete.clone() {
        egui::Window::new("Delete user")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.colored_label(
                    colors::TEXT_DARK,
                    format!(
                        "The user with id: \"{}\" and name: \"{}\", will be deleted",
                        user.id, user.name
                    ),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        state.cancel_delete();
                    }
                    if ui
                        .add(egui::Button::new(egui::RichText::new("Delete").color(colors::TEXT_LIGHT)).fill(colors::ERROR))
                        .clicked()
                    {
                        state.confirm_delete();
                    }
                });
            });
    }

    if let Some(message) = state.alert.clone() {
        egui::Window::new("Alert")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.colored_label(colors::TEXT_DARK, message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    state.alert = None;
                }
            });
    }
}
