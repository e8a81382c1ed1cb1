use std::fmt;

use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered member of the directory. Email is the login key;
/// it is neither unique nor format-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub role_id: i64,
}

/// User unique identifier type, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a base-10 integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Directory listing row: a user joined with the name of its department.
///
/// `department` is `None` when the referenced department does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListing {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

/// Command to register a new user.
///
/// Constructed only from input that passed presence checks at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub department_id: i64,
    pub role_id: i64,
}

impl RegisterUserCommand {
    pub fn new(name: String, email: String, department_id: i64, role_id: i64) -> Self {
        Self {
            name,
            email,
            department_id,
            role_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_string() {
        assert_eq!(UserId::from_string("42"), Ok(UserId(42)));
        assert_eq!(UserId::from_string("-1"), Ok(UserId(-1)));
    }

    #[test]
    fn test_user_id_rejects_non_integers() {
        for input in ["", "abc", "12abc", "1.5", " 7"] {
            assert!(
                matches!(UserId::from_string(input), Err(UserIdError::InvalidFormat(_))),
                "expected failure for {:?}",
                input
            );
        }
    }
}
