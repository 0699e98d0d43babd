use crate::db::models::api::{ApiResponse, error_codes};
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Please answer all questions before submitting")]
    IncompleteSubmission,

    #[error("Skill is locked. Complete the previous skill first.")]
    SkillLocked,

    #[error("This skill has a quiz. Pass the quiz to mark it complete.")]
    QuizRequired,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add more credits.")]
    QuotaExhausted,

    #[error("Invalid roadmap format")]
    GenerationParse,

    #[error("Invalid roadmap structure")]
    GenerationSchema,

    #[error("Roadmap generation failed: {message}")]
    GenerationFailed { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, response) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Database error"),
                )
            }
            AppError::Pool(ref e) => {
                tracing::error!("Connection pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Connection error"),
                )
            }
            AppError::Redis(ref e) => {
                tracing::error!("Redis error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Cache error"),
                )
            }
            AppError::Auth { ref message } => (
                StatusCode::UNAUTHORIZED,
                ApiResponse::<()>::unauthorized(message),
            ),
            AppError::Validation { ref message } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::bad_request(message),
            ),
            AppError::NotFound { ref resource } => (
                StatusCode::NOT_FOUND,
                ApiResponse::<()>::not_found(&format!("{} not found", resource)),
            ),
            AppError::IncompleteSubmission => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error_with_code(
                    400,
                    &self.to_string(),
                    error_codes::QUIZ_INCOMPLETE_SUBMISSION,
                ),
            ),
            AppError::SkillLocked => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error_with_code(
                    400,
                    &self.to_string(),
                    error_codes::PROGRESS_SKILL_LOCKED,
                ),
            ),
            AppError::QuizRequired => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error_with_code(
                    400,
                    &self.to_string(),
                    error_codes::PROGRESS_QUIZ_REQUIRED,
                ),
            ),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiResponse::<()>::error_with_code(
                    429,
                    &self.to_string(),
                    error_codes::GENERATION_RATE_LIMITED,
                ),
            ),
            AppError::QuotaExhausted => (
                StatusCode::PAYMENT_REQUIRED,
                ApiResponse::<()>::error_with_code(
                    402,
                    &self.to_string(),
                    error_codes::GENERATION_QUOTA_EXHAUSTED,
                ),
            ),
            AppError::GenerationParse => (
                StatusCode::BAD_GATEWAY,
                ApiResponse::<()>::error_with_code(
                    502,
                    &self.to_string(),
                    error_codes::GENERATION_PARSE_ERROR,
                ),
            ),
            AppError::GenerationSchema => (
                StatusCode::BAD_GATEWAY,
                ApiResponse::<()>::error_with_code(
                    502,
                    &self.to_string(),
                    error_codes::GENERATION_SCHEMA_ERROR,
                ),
            ),
            AppError::GenerationFailed { ref message } => {
                tracing::error!("Generation service failure: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    ApiResponse::<()>::error_with_code(
                        502,
                        "Roadmap generation failed",
                        error_codes::GENERATION_FAILED,
                    ),
                )
            }
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Configuration error"),
                )
            }
            AppError::Jwt(ref e) => {
                tracing::error!("JWT error: {}", e);
                (
                    StatusCode::UNAUTHORIZED,
                    ApiResponse::<()>::unauthorized("Invalid token"),
                )
            }
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error(message),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// 便捷的错误创建函数
impl AppError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error maps to, for error paths that bypass the
    /// standard response envelope (the generation endpoint speaks the raw
    /// `{ "error": ... }` shape its frontend consumers expect).
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth { .. } | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. }
            | AppError::IncompleteSubmission
            | AppError::SkillLocked
            | AppError::QuizRequired => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            AppError::GenerationParse
            | AppError::GenerationSchema
            | AppError::GenerationFailed { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to an end user. Infrastructure errors are
    /// collapsed so connection strings and SQL never leak.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Pool(_) => "Failed to save roadmap".to_string(),
            AppError::Redis(_) => "Cache error".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "Internal server error".to_string(),
            AppError::GenerationFailed { .. } => "Roadmap generation failed".to_string(),
            other => other.to_string(),
        }
    }
}
