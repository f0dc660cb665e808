//! Core types (requests, errors).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request Types =============

/// Request body shared by the repetition endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EchoRequest {
    /// Text to repeat.
    pub text: String,
    /// Repetition count. The validated routes reject negative values; the
    /// plain body route clamps them to zero.
    pub amount: i32,
}

/// Multipart request body for the file upload endpoint.
///
/// Schema-only: the handler reads the raw multipart stream and never
/// deserializes into this type.
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// The uploaded file.
    #[schema(value_type = String, format = Binary)]
    pub file: String,
}

// ============= Error Types =============

/// Application error, mapped onto HTTP responses by `IntoResponse`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request was well-formed HTTP but carried unacceptable input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
