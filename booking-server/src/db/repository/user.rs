//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate};
use sqlx::SqlitePool;

/// Plaintext credential lookup (auth security is out of scope here;
/// identity verification belongs to an external collaborator).
pub async fn find_by_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, role, password FROM users WHERE email = ? AND password = ?",
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ? LIMIT 1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(id.is_some())
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, email, role, password) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.role)
    .bind(&data.password)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, role, password FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}
