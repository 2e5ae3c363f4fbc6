//! Search Filter
//!
//! A single search term matched case-insensitively against a user's id,
//! name, username and email. Filtering never touches the canonical
//! collection; it only selects which records to show.

use crate::shared::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    needle: String,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replace the term. Last writer wins.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.needle = self.term.to_lowercase();
    }

    pub fn clear(&mut self) {
        self.set_term(String::new());
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Whether `user` contains the term in any of its four fields.
    pub fn matches(&self, user: &User) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&user.id, &user.name, &user.username, &user.email]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// The matching users, in collection order
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}
