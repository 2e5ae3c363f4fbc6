use eframe::egui;

use crate::egui_app::state::{AppState, UsersState};
use crate::egui_app::theme::colors;

pub mod banner;
pub mod dialogs;
pub mod search_bar;
pub mod user_form;
pub mod users_list;

pub fn render_top_bar(ctx: &egui::Context, state: &AppState, users: &UsersState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("👥 Users Desk").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    ui.colored_label(colors::TEXT_SECONDARY, state.config.server_url());
                    if users.is_loading {
                        ui.add_space(8.0);
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState, users: &UsersState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(640.0);

                user_form::render(ui, state, users);
                ui.add_space(12.0);
                search_bar::render(ui, state);
                ui.add_space(12.0);

                if users.is_loading {
                    ui.spinner();
                    return;
                }

                if !users.error_message.is_empty() {
                    banner::error(ui, &users.error_message);
                    return;
                }

                if !users.success_message.is_empty() {
                    banner::success(ui, &users.success_message);
                    ui.add_space(8.0);
                }

                if !users.users.is_empty() {
                    users_list::render(ui, state, users);
                } else if users.success_message.is_empty() {
                    banner::error(ui, "No users yet...");
                }
            });
        });
    });
}
