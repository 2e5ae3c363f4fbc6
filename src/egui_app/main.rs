/**
 * Users Desk - Main Entry Point
 *
 * Native desktop client for the users service. It implements eframe::App,
 * loads the collection at startup and renders it every frame from a
 * snapshot of the store.
 */
use std::time::Instant;

use eframe::egui;
use tracing_subscriber::EnvFilter;
use userdesk::egui_app::{theme::styles, views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Users Desk",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(UsersApp::new(state, cc.egui_ctx.clone())))
        }),
    )?;

    Ok(())
}

struct UsersApp {
    state: AppState,
}

impl UsersApp {
    fn new(mut state: AppState, ctx: egui::Context) -> Self {
        state.set_repaint_context(ctx);
        state.load_users();
        Self { state }
    }
}

impl eframe::App for UsersApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let users = self.state.store.state();

        self.state.sync_form(&users);
        if let Some(wait) = self.state.expire_success(&users, Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        views::render_top_bar(ctx, &self.state, &users);
        views::render_main_panel(ctx, &mut self.state, &users);
        views::dialogs::render(ctx, &mut self.state);
    }
}
