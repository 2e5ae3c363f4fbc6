/**
 * Server Initialization
 *
 * Builds the axum application: shared state, seed data and routes.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_seed, ServerConfig};
use crate::backend::server::state::AppState;
use crate::shared::User;

/// Create the application around an initial set of users
pub fn create_app(seed: Vec<User>) -> Router<()> {
    tracing::info!(users = seed.len(), "initializing users service");
    create_router(AppState::new(seed))
}

/// Create the application, loading the seed file named by `config`
pub async fn create_app_with_config(config: &ServerConfig) -> Router<()> {
    let seed = match &config.seed_path {
        Some(path) => load_seed(path).await,
        None => Vec::new(),
    };
    create_app(seed)
}
