//! Users State
//!
//! The canonical in-memory copy of the user collection and the flags the UI
//! renders from. Every change goes through [`UsersState::reduce`], one
//! [`UsersAction`] at a time.

use crate::egui_app::users_api::RemoteError;
use crate::shared::User;

/// The remote operations the store can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsersOperation {
    List,
    Create,
    ReplaceUpdate,
    MergeUpdate,
    Delete,
}

impl UsersOperation {
    /// Error text used when the remote failure carries no message
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::List => "Get Users: Something went wrong",
            Self::Create => "Create Users: Something went wrong",
            Self::ReplaceUpdate | Self::MergeUpdate => "Update Users: Something went wrong",
            Self::Delete => "Delete User: Something went wrong",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "users/list",
            Self::Create => "users/create",
            Self::ReplaceUpdate => "users/replace",
            Self::MergeUpdate => "users/merge",
            Self::Delete => "users/delete",
        }
    }
}

/// Every state transition the store knows about.
#[derive(Debug, Clone)]
pub enum UsersAction {
    /// A remote call has been dispatched
    Pending(UsersOperation),
    /// The service returned the whole collection
    Listed(Vec<User>),
    /// The service created a record and assigned its id
    Created(User),
    /// The service replaced a record
    Replaced(User),
    /// The service merged attributes into a record
    Merged(User),
    /// The service removed the record; carries the caller's copy
    Deleted(User),
    /// A remote call failed
    Rejected {
        operation: UsersOperation,
        error: RemoteError,
    },
    SetUserToEdit(Option<User>),
    SetIsUpdatePut(bool),
    SetSuccessMessage(String),
    SetErrorMessage(String),
}

/// Snapshot of the user collection and its UI flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersState {
    /// True while at least one remote call is in flight
    pub is_loading: bool,
    /// Server order; ids are unique
    pub users: Vec<User>,
    /// Record being edited; `None` means the form creates
    pub user_to_edit: Option<User>,
    /// Whether submitting an edit replaces (PUT) rather than merges (PATCH)
    pub is_update_put: bool,
    pub success_message: String,
    pub error_message: String,
    in_flight: usize,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dispatched remote calls that have not settled yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply one action.
    pub fn reduce(&mut self, action: UsersAction) {
        match action {
            UsersAction::Pending(_) => {
                self.in_flight += 1;
                self.is_loading = true;
            }
            UsersAction::Listed(users) => {
                self.settle();
                self.users = dedup_by_id(users);
            }
            UsersAction::Created(user) => {
                self.settle();
                self.succeed(format!("The user {}, has been created", user.name));
                match self.position(&user.id) {
                    Some(index) => {
                        tracing::warn!(id = %user.id, "created user already present, replacing it");
                        self.users[index] = user;
                    }
                    None => self.users.push(user),
                }
            }
            UsersAction::Replaced(user) | UsersAction::Merged(user) => {
                self.settle();
                self.succeed(format!("The user {}, has been updated", user.name));
                if let Some(index) = self.position(&user.id) {
                    self.users[index] = user;
                }
            }
            UsersAction::Deleted(user) => {
                self.settle();
                self.succeed(format!("The user {}, has been deleted", user.name));
                self.users.retain(|existing| existing.id != user.id);
                if self
                    .user_to_edit
                    .as_ref()
                    .is_some_and(|selected| selected.id == user.id)
                {
                    self.user_to_edit = None;
                }
            }
            UsersAction::Rejected { operation, error } => {
                self.settle();
                let message = error.message().unwrap_or(operation.fallback_message());
                self.fail(message.to_string());
            }
            UsersAction::SetUserToEdit(user) => self.user_to_edit = user,
            UsersAction::SetIsUpdatePut(is_update_put) => self.is_update_put = is_update_put,
            UsersAction::SetSuccessMessage(message) => {
                if message.is_empty() {
                    self.success_message.clear();
                } else {
                    self.succeed(message);
                }
            }
            UsersAction::SetErrorMessage(message) => {
                if message.is_empty() {
                    self.error_message.clear();
                } else {
                    self.fail(message);
                }
            }
        }
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_loading = self.in_flight > 0;
    }

    fn succeed(&mut self, message: String) {
        self.success_message = message;
        self.error_message.clear();
    }

    fn fail(&mut self, message: String) {
        self.error_message = message;
        self.success_message.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}

/// Keeps the first occurrence of each id.
fn dedup_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen = std::collections::HashSet::new();
    let total = users.len();
    let unique: Vec<User> = users
        .into_iter()
        .filter(|user| seen.insert(user.id.clone()))
        .collect();
    if unique.len() != total {
        tracing::warn!(dropped = total - unique.len(), "service returned duplicate user ids");
    }
    unique
}
