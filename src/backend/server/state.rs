/**
 * Application State
 *
 * Shared state handed to every handler through axum's `State` extractor.
 * The users table sits behind `Arc<RwLock<>>` so reads run concurrently and
 * each write is applied as a whole.
 *
 * # Example
 *
 * ```rust
 * use userdesk::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) -> usize {
 *     state.users.read().await.len()
 * }
 * ```
 */

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::users::UserTable;
use crate::shared::User;

/// Central server state
#[derive(Clone, Default)]
pub struct AppState {
    /// The users collection
    pub users: Arc<RwLock<UserTable>>,
}

impl AppState {
    pub fn new(seed: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(UserTable::with_users(seed))),
        }
    }
}
