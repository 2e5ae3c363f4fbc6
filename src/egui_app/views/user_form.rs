//! Create/Edit form.

use eframe::egui;

use crate::egui_app::state::{AppState, UsersState};
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, users: &UsersState) {
    let title = match (&users.user_to_edit, users.is_update_put) {
        (None, _) => "Create User",
        (Some(_), true) => "Edit User (replace)",
        (Some(_), false) => "Edit User (merge)",
    };

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).size(20.0).strong().color(colors::TEXT_DARK));
        ui.add_space(8.0);

        let width = ui.available_width();
        let draft = &mut state.draft;
        ui.add(egui::TextEdit::singleline(&mut draft.name).hint_text("name").desired_width(width));
        ui.add(egui::TextEdit::singleline(&mut draft.username).hint_text("username").desired_width(width));
        ui.add(egui::TextEdit::singleline(&mut draft.email).hint_text("email").desired_width(width));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(egui::RichText::new("CLEAR").color(colors::TEXT_DARK)).fill(colors::WARNING))
                .clicked()
            {
                state.clear_form();
            }
            if ui
                .add(egui::Button::new(egui::RichText::new("SEND").color(colors::TEXT_LIGHT)).fill(colors::ACCENT))
                .clicked()
            {
                state.submit_form();
            }
        });
    });
}
