//! User cards, filtered by the current search term.

use eframe::egui;

use crate::egui_app::state::{AppState, UsersState};
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, users: &UsersState) {
    let visible: Vec<_> = state.search.apply(&users.users).into_iter().cloned().collect();

    for user in visible {
        styles::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&user.name).size(18.0).strong().color(colors::TEXT_DARK));
            ui.colored_label(colors::TEXT_SECONDARY, format!("ID: {}", user.id));
            ui.colored_label(colors::TEXT_SECONDARY, &user.username);
            ui.colored_label(colors::TEXT_SECONDARY, &user.email);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("Update Put").clicked() {
                    state.begin_replace(user.clone());
                }
                if ui.button("Update Patch").clicked() {
                    state.begin_merge(user.clone());
                }
                if ui
                    .add(egui::Button::new(egui::RichText::new("Delete").color(colors::TEXT_LIGHT)).fill(colors::ERROR))
                    .clicked()
                {
                    state.request_delete(user.clone());
                }
            });
        });
        ui.add_space(8.0);
    }
}
