//! Repository Module
//!
//! Parameterized SQL access to the booking store. One file per entity,
//! free functions over `&SqlitePool`. No query ever concatenates user input.

pub mod booking;
pub mod route;
pub mod schedule;
pub mod stats;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
