//! Users Store
//!
//! Owns the [`UsersState`] and the [`UserService`] it synchronises with.
//!
//! Each remote operation runs in three steps:
//!
//! 1. **dispatch** - mark the call in flight (`is_loading`)
//! 2. **remote call** - await the service; the state lock is not held here
//! 3. **reconcile** - apply the outcome to the collection and messages
//!
//! Steps 1 and 3 each take the state lock once, so a reconciliation is
//! never observed half-applied. Operations may overlap; whichever settles
//! last wins. Operations never return an error: failures end up in
//! `error_message`.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::egui_app::state::draft::{Submission, UserDraft};
use crate::egui_app::state::users::{UsersAction, UsersOperation, UsersState};
use crate::egui_app::users_api::{RemoteError, UserService};
use crate::shared::{SharedError, User, UserPartial};

pub struct UsersStore<S> {
    state: Mutex<UsersState>,
    service: S,
}

impl<S: UserService> UsersStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            state: Mutex::new(UsersState::new()),
            service,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Copy of the current state
    pub fn state(&self) -> UsersState {
        self.lock().clone()
    }

    /// Read the current state without cloning it
    pub fn with_state<R>(&self, read: impl FnOnce(&UsersState) -> R) -> R {
        read(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, UsersState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, action: UsersAction) {
        self.lock().reduce(action);
    }

    async fn run<T, F, Fut>(
        &self,
        operation: UsersOperation,
        call: F,
        fulfilled: impl FnOnce(T) -> UsersAction,
    ) where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, RemoteError>>,
    {
        tracing::debug!(operation = operation.label(), "dispatch");
        self.dispatch(UsersAction::Pending(operation));

        let action = match call().await {
            Ok(value) => {
                tracing::info!(operation = operation.label(), "fulfilled");
                fulfilled(value)
            }
            Err(error) => {
                tracing::warn!(operation = operation.label(), %error, "rejected");
                UsersAction::Rejected { operation, error }
            }
        };
        self.dispatch(action);
    }

    /// Replace the collection with the service's current one.
    pub async fn list(&self) {
        self.run(UsersOperation::List, || self.service.list(), UsersAction::Listed)
            .await;
    }

    /// Create `user` (its id is ignored) and append the stored record.
    ///
    /// Callers validate the attributes beforehand.
    pub async fn create(&self, user: User) {
        let new_user = user.attributes();
        self.run(
            UsersOperation::Create,
            || self.service.create(new_user),
            UsersAction::Created,
        )
        .await;
    }

    /// Overwrite all three attributes of the record with `user.id`.
    pub async fn replace_update(&self, user: User) {
        let attributes = user.attributes();
        self.run(
            UsersOperation::ReplaceUpdate,
            || self.service.replace(&user.id, attributes),
            UsersAction::Replaced,
        )
        .await;
    }

    /// Overwrite only the attributes set (and non-empty) in `partial`.
    pub async fn merge_update(&self, partial: UserPartial) {
        let patch = partial.patch();
        self.run(
            UsersOperation::MergeUpdate,
            || self.service.merge(&partial.id, patch),
            UsersAction::Merged,
        )
        .await;
    }

    /// Remove the record with `user.id`. The success message names `user`.
    pub async fn delete(&self, user: User) {
        let id = user.id.clone();
        self.run(
            UsersOperation::Delete,
            || self.service.remove(&id),
            move |()| UsersAction::Deleted(user),
        )
        .await;
    }

    pub fn set_user_to_edit(&self, user: Option<User>) {
        self.dispatch(UsersAction::SetUserToEdit(user));
    }

    pub fn set_is_update_put(&self, is_update_put: bool) {
        self.dispatch(UsersAction::SetIsUpdatePut(is_update_put));
    }

    pub fn set_success_message(&self, message: impl Into<String>) {
        self.dispatch(UsersAction::SetSuccessMessage(message.into()));
    }

    pub fn set_error_message(&self, message: impl Into<String>) {
        self.dispatch(UsersAction::SetErrorMessage(message.into()));
    }

    /// Select `user` for a full-replace edit.
    pub fn edit_with_replace(&self, user: User) {
        self.set_is_update_put(true);
        self.set_user_to_edit(Some(user));
    }

    /// Select `user` for a partial-merge edit.
    pub fn edit_with_merge(&self, user: User) {
        self.set_is_update_put(false);
        self.set_user_to_edit(Some(user));
    }

    /// Turn a submitted form into an operation, leaving edit mode.
    ///
    /// Validation failures are returned here, before any remote call, and
    /// leave the state untouched.
    pub fn submit(&self, draft: UserDraft) -> Result<Submission, SharedError> {
        let (edit_target, is_update_put) =
            self.with_state(|state| (state.user_to_edit.clone(), state.is_update_put));

        let submission = draft
            .into_submission(edit_target.as_ref(), is_update_put)
            .inspect_err(|error| tracing::warn!(%error, "form rejected"))?;

        self.set_user_to_edit(None);
        Ok(submission)
    }

    /// Run the operation chosen by [`UsersStore::submit`].
    pub async fn perform(&self, submission: Submission) {
        match submission {
            Submission::Create(user) => self.create(user).await,
            Submission::Replace(user) => self.replace_update(user).await,
            Submission::Merge(partial) => self.merge_update(partial).await,
        }
    }
}

impl<S> std::fmt::Debug for UsersStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
