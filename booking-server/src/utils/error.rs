//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Schedule 42"))
//!
//! // 返回成功响应
//! Ok(Json(data))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// API 统一错误响应结构
///
/// ```json
/// {
///   "code": "E0004",
///   "message": "Bus full. Enable autoBook to soft-overbook."
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse {
    /// 错误码 (E0000 表示成功)
    pub code: String,
    /// 消息
    pub message: String,
}

/// 应用错误枚举
///
/// # 错误分类
///
/// | 分类 | 说明 |
/// |------|------|
/// | 认证错误 | 无效凭据 (401) |
/// | 业务逻辑错误 | 资源不存在、验证失败、容量冲突 |
/// | 系统错误 | 数据库错误、内部错误 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed")]
    /// 无效凭据 (401)
    Unauthorized,

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// 资源冲突 / 容量拒绝 (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "E3001",
                "Invalid credentials".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),

            // 记录内部错误但不暴露详细信息
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
