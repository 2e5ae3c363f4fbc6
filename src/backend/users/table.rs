//! In-memory users table.
//!
//! Records keep insertion order. Ids are decimal strings handed out as one
//! more than the largest numeric id seen so far.

use crate::backend::error::BackendError;
use crate::shared::{SharedError, User, UserAttributes, UserPatch};

#[derive(Debug, Clone, Default)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records; later duplicates of an id are dropped.
    pub fn with_users(seed: Vec<User>) -> Self {
        let mut table = Self::new();
        for user in seed {
            if table.get(&user.id).is_none() && user.is_persisted() {
                table.users.push(user);
            }
        }
        table
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }

    pub fn insert(&mut self, attributes: UserAttributes) -> Result<User, BackendError> {
        let user = User {
            id: self.next_id()?,
            name: attributes.name,
            username: attributes.username,
            email: attributes.email,
        };
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn replace(&mut self, id: &str, attributes: UserAttributes) -> Option<User> {
        let user = self.get_mut(id)?;
        user.name = attributes.name;
        user.username = attributes.username;
        user.email = attributes.email;
        Some(user.clone())
    }

    pub fn merge(&mut self, id: &str, patch: &UserPatch) -> Option<User> {
        let user = self.get_mut(id)?;
        user.apply_patch(patch);
        Some(user.clone())
    }

    pub fn remove(&mut self, id: &str) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some(self.users.remove(index))
    }

    fn next_id(&self) -> Result<String, BackendError> {
        let max = self
            .users
            .iter()
            .filter_map(|user| user.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(|id| id.to_string())
            .ok_or(BackendError::IdsExhausted)
    }
}

/// Create and replace bodies must carry all three attributes.
pub fn require_attributes(body: UserPatch) -> Result<UserAttributes, SharedError> {
    let field = |value: Option<String>, name: &str| {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SharedError::validation(name, format!("{} is required", name)))
    };
    Ok(UserAttributes {
        name: field(body.name, "name")?,
        username: field(body.username, "username")?,
        email: field(body.email, "email")?,
    })
}
