//! Scripted users service for store tests
//!
//! Behaves like a small in-memory users backend, records every call, can be
//! told to fail the next call, and can hold calls open until released so
//! tests can look at the store while a call is in flight.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::oneshot;
use userdesk::egui_app::{RemoteError, UserService};
use userdesk::shared::{NewUser, User, UserAttributes, UserPatch};

/// A recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewUser),
    Replace(String, UserAttributes),
    Merge(String, UserPatch),
    Remove(String),
}

#[derive(Default)]
struct Script {
    users: Vec<User>,
    failures: VecDeque<RemoteError>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct ScriptedService {
    script: Mutex<Script>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
}

impl ScriptedService {
    pub fn with_users(users: Vec<User>) -> Self {
        let service = Self::default();
        service.script().users = users;
        service
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: RemoteError) {
        self.script().failures.push_back(error);
    }

    /// Hold the next call open until the returned sender fires
    pub fn hold(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Replace what the backend holds without going through the store
    pub fn set_users(&self, users: Vec<User>) {
        self.script().users = users;
    }

    pub fn users(&self) -> Vec<User> {
        self.script().users.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script().calls.clone()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    async fn enter(&self, call: Call) -> Result<(), RemoteError> {
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let mut script = self.script();
        script.calls.push(call);
        match script.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn not_found() -> RemoteError {
    RemoteError::status(404)
}

impl UserService for ScriptedService {
    async fn list(&self) -> Result<Vec<User>, RemoteError> {
        self.enter(Call::List).await?;
        Ok(self.users())
    }

    async fn create(&self, user: NewUser) -> Result<User, RemoteError> {
        self.enter(Call::Create(user.clone())).await?;
        let mut script = self.script();
        let next = script
            .users
            .iter()
            .filter_map(|u| u.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let created = User::new(next.to_string(), user.name, user.username, user.email);
        script.users.push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: &str, attributes: UserAttributes) -> Result<User, RemoteError> {
        self.enter(Call::Replace(id.to_string(), attributes.clone())).await?;
        let mut script = self.script();
        let user = script.users.iter_mut().find(|u| u.id == id).ok_or_else(not_found)?;
        *user = User::new(id, attributes.name, attributes.username, attributes.email);
        Ok(user.clone())
    }

    async fn merge(&self, id: &str, patch: UserPatch) -> Result<User, RemoteError> {
        self.enter(Call::Merge(id.to_string(), patch.clone())).await?;
        let mut script = self.script();
        let user = script.users.iter_mut().find(|u| u.id == id).ok_or_else(not_found)?;
        user.apply_patch(&patch);
        Ok(user.clone())
    }

    async fn remove(&self, id: &str) -> Result<(), RemoteError> {
        self.enter(Call::Remove(id.to_string())).await?;
        let mut script = self.script();
        let before = script.users.len();
        script.users.retain(|u| u.id != id);
        if script.users.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
