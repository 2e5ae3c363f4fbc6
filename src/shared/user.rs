//! User Records
//!
//! The `users` resource as it travels between the client and the service.
//!
//! # Shapes
//!
//! - [`User`] - a full record `{id, name, username, email}`
//! - [`UserAttributes`] - the three mutable attributes, sent by create and replace
//! - [`UserPartial`] - an id plus whichever attributes the caller wants to merge
//! - [`UserPatch`] - the merge request body, absent attributes omitted on the wire

use serde::{Deserialize, Deserializer, Serialize};

/// A user record as stored by the remote service.
///
/// An empty `id` denotes a record that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Whether the service has assigned this record an id
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Copy of the three mutable attributes
    pub fn attributes(&self) -> UserAttributes {
        UserAttributes {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    /// Overwrite the attributes present in `patch`, keeping the rest.
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
    }
}

/// The mutable attributes of a user, all required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserAttributes {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Body of a create request. The service assigns the id.
pub type NewUser = UserAttributes;

/// Merge-update input: the target id and any subset of attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPartial {
    pub id: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserPartial {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The request body for this partial. Empty attributes are dropped.
    pub fn patch(&self) -> UserPatch {
        UserPatch {
            name: non_empty(self.name.as_deref()),
            username: non_empty(self.username.as_deref()),
            email: non_empty(self.email.as_deref()),
        }
    }
}

impl From<User> for UserPartial {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: Some(user.name),
            username: Some(user.username),
            email: Some(user.email),
        }
    }
}

/// Merge request body. `None` attributes are not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    /// Attributes of `after` that differ from `before`; empty values never count.
    pub fn diff(before: &User, after: &UserAttributes) -> Self {
        let changed = |old: &str, new: &str| non_empty((old != new).then_some(new));
        Self {
            name: changed(&before.name, &after.name),
            username: changed(&before.username, &after.username),
            email: changed(&before.email, &after.email),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Some REST mocks hand out numeric ids; the client keeps them as strings.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
