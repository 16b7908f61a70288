//! User Model

use serde::{Deserialize, Serialize};

/// User row as stored (includes the plaintext credential column)
///
/// Never serialized to the wire directly — handlers convert to [`UserPublic`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// student | admin | driver
    pub role: String,
    pub password: String,
}

/// User as served to clients (no credential)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserPublic {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
        }
    }
}

/// Register payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
