use serde::{Deserialize, Serialize};

/// User record stored in redb
/// Uses Unix timestamp (milliseconds) for compact storage with bincode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    /// When the user was created, used to keep listings in creation order
    pub created_at: i64,
}

/// Form fields accepted when creating a user
#[derive(Debug, Default, Deserialize)]
pub struct NewUser {
    pub username: Option<String>,
}

/// User model for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Opaque user ID generated at creation
    pub id: String,
}

impl User {
    /// A username must contain something other than whitespace
    pub fn validate_username(username: &str) -> bool {
        !username.trim().is_empty()
    }

    pub fn from_record(id: impl Into<String>, record: UserRecord) -> Self {
        Self {
            username: record.username,
            id: id.into(),
        }
    }
}
