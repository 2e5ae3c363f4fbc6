//! Theme Module
//!
//! Color constants and frame builders for the users desk.
//!
//! ```rust,no_run
//! use userdesk::egui_app::theme::{colors, styles};
//!
//! # fn example(ctx: &eframe::egui::Context, ui: &mut eframe::egui::Ui) {
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, "Ann");
//! });
//! # }
//! ```

pub mod colors;
pub mod styles;
