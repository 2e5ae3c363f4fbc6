//! Search Bar Component
//!
//! Filters the user list by id, name, username or email.

use eframe::egui;

use crate::egui_app::state::AppState;

/// Render the search bar
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("🔍");

        ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text("search user...")
                .desired_width(ui.available_width() - 40.0),
        );

        if !state.search_input.is_empty() && ui.button("✕").clicked() {
            state.search_input.clear();
        }
    });

    state.sync_search();
}
