//! Auth API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, validate_required_text, validate_role,
};
use crate::utils::{AppError, AppResult};
use shared::models::{LoginRequest, UserCreate, UserPublic};

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserPublic,
    pub message: String,
}

/// POST /api/auth/login - 登录 (明文凭据查询)
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_NAME_LEN)?;

    let user = user::find_by_credentials(&state.pool, &payload.email, &payload.password)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(AuthResponse {
        user: user.into(),
        message: "Login successful".to_string(),
    }))
}

/// POST /api/auth/register - 注册
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_NAME_LEN)?;
    validate_role(&payload.role)?;

    if user::email_exists(&state.pool, &payload.email).await? {
        return Err(AppError::conflict("User already exists"));
    }

    let created = user::create(&state.pool, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: created.into(),
            message: "Registration successful".to_string(),
        }),
    ))
}
