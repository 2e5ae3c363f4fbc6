//! User Form Draft
//!
//! The values typed into the create/edit form, and how a submitted form maps
//! onto a store operation.

use crate::shared::{SharedError, User, UserAttributes, UserPartial, UserPatch};

/// Contents of the create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Empty while creating
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// The operation a submitted form turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(User),
    Replace(User),
    Merge(UserPartial),
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// All three attributes must be filled in.
    pub fn validate(&self) -> Result<(), SharedError> {
        for (field, value) in [
            ("name", &self.name),
            ("username", &self.username),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(SharedError::validation(field, format!("{} is required", field)));
            }
        }
        Ok(())
    }

    pub fn attributes(&self) -> UserAttributes {
        UserAttributes {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    fn to_user(&self) -> User {
        User::new(&self.id, &self.name, &self.username, &self.email)
    }

    /// Validate and pick the operation.
    ///
    /// A new record is created; an existing one is replaced when
    /// `is_update_put` is set and merged otherwise. A merge sends only the
    /// attributes that differ from `edit_target` when it is the same record.
    pub fn into_submission(
        self,
        edit_target: Option<&User>,
        is_update_put: bool,
    ) -> Result<Submission, SharedError> {
        self.validate()?;

        if self.is_new() {
            return Ok(Submission::Create(self.to_user()));
        }
        if is_update_put {
            return Ok(Submission::Replace(self.to_user()));
        }

        let patch = match edit_target.filter(|target| target.id == self.id) {
            Some(target) => UserPatch::diff(target, &self.attributes()),
            None => UserPartial::from(self.to_user()).patch(),
        };
        Ok(Submission::Merge(UserPartial {
            id: self.id,
            name: patch.name,
            username: patch.username,
            email: patch.email,
        }))
    }
}
