//! Application State
//!
//! - **`users`** - the user collection, its flags and the reducer
//! - **`store`** - runs the remote operations and reconciles their outcome
//! - **`draft`** - the create/edit form and how a submit is routed
//!
//! [`AppState`] ties them to the desktop UI: it owns the tokio runtime the
//! remote calls run on, the search term and the form being edited.

pub mod draft;
pub mod store;
pub mod users;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::search::SearchFilter;
use crate::egui_app::users_api::{HttpUserService, RemoteError};
use crate::shared::{ConfigError, User};

pub use draft::{Submission, UserDraft};
pub use store::UsersStore;
pub use users::{UsersAction, UsersOperation, UsersState};

/// How long a success banner stays up
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

/// Alert shown when the form is submitted with a blank field
pub const INCOMPLETE_DATA_ALERT: &str = "incomplete data...";

/// Reasons the desktop app cannot start
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to create users client: {0}")]
    Client(#[from] RemoteError),
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub store: Arc<UsersStore<HttpUserService>>,
    pub search: SearchFilter,
    /// Text bound to the search box
    pub search_input: String,
    /// Text bound to the create/edit form
    pub draft: UserDraft,
    /// User awaiting delete confirmation
    pub pending_delete: Option<User>,
    /// Blocking alert for a rejected form
    pub alert: Option<String>,
    runtime: tokio::runtime::Runtime,
    repaint: Option<egui::Context>,
    last_edit_target: Option<User>,
    success_shown: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let service = HttpUserService::new(config.clone())?;
        tracing::info!(url = config.server_url(), "users service configured");

        Ok(Self {
            config,
            store: Arc::new(UsersStore::new(service)),
            search: SearchFilter::new(),
            search_input: String::new(),
            draft: UserDraft::default(),
            pending_delete: None,
            alert: None,
            runtime,
            repaint: None,
            last_edit_target: None,
            success_shown: None,
        })
    }

    /// Repaint `ctx` whenever a remote operation settles.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    fn spawn<F, Fut>(&self, operation: F)
    where
        F: FnOnce(Arc<UsersStore<HttpUserService>>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let work = operation(Arc::clone(&self.store));
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            work.await;
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    pub fn load_users(&self) {
        self.spawn(|store| async move { store.list().await });
    }

    pub fn submit_form(&mut self) {
        match self.store.submit(self.draft.clone()) {
            Ok(submission) => {
                self.draft.clear();
                self.spawn(|store| async move { store.perform(submission).await });
            }
            Err(_) => self.alert = Some(INCOMPLETE_DATA_ALERT.to_string()),
        }
    }

    pub fn clear_form(&mut self) {
        self.draft.clear();
        self.store.set_user_to_edit(None);
    }

    pub fn begin_replace(&self, user: User) {
        self.store.edit_with_replace(user);
    }

    pub fn begin_merge(&self, user: User) {
        self.store.edit_with_merge(user);
    }

    pub fn request_delete(&mut self, user: User) {
        self.pending_delete = Some(user);
    }

    pub fn confirm_delete(&mut self) {
        if let Some(user) = self.pending_delete.take() {
            self.spawn(|store| async move { store.delete(user).await });
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Push the search box text into the filter.
    pub fn sync_search(&mut self) {
        if self.search.term() != self.search_input {
            self.search.set_term(self.search_input.clone());
        }
    }

    /// Load the form from the edit target whenever the target changes.
    pub fn sync_form(&mut self, state: &UsersState) {
        if state.user_to_edit == self.last_edit_target {
            return;
        }
        match &state.user_to_edit {
            Some(user) => self.draft = UserDraft::from_user(user),
            None => self.draft.clear(),
        }
        self.last_edit_target = state.user_to_edit.clone();
    }

    /// Dismiss the success banner once it has been visible long enough.
    ///
    /// Returns how long until the banner should be checked again.
    pub fn expire_success(&mut self, state: &UsersState, now: Instant) -> Option<Duration> {
        if state.success_message.is_empty() {
            self.success_shown = None;
            return None;
        }
        match &self.success_shown {
            Some((message, since)) if *message == state.success_message => {
                let elapsed = now.saturating_duration_since(*since);
                if elapsed >= SUCCESS_BANNER_TTL {
                    self.store.set_success_message(String::new());
                    self.success_shown = None;
                    None
                } else {
                    Some(SUCCESS_BANNER_TTL - elapsed)
                }
            }
            _ => {
                self.success_shown = Some((state.success_message.clone(), now));
                Some(SUCCESS_BANNER_TTL)
            }
        }
    }
}
