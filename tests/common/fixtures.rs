//! Sample users shared by the tests

use userdesk::shared::User;

pub fn ann() -> User {
    User::new("1", "Ann", "a", "a@x.com")
}

pub fn bob() -> User {
    User::new("2", "Bob", "b", "b@x.com")
}

/// Not yet created: empty id
pub fn cal() -> User {
    User::new("", "Cal", "cal", "c@x.com")
}
