//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::validation::FieldErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload embedded in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more form fields failed their constraints. Nothing was persisted.
    #[error("{message}")]
    Validation {
        message: String,
        fields: FieldErrors,
    },
    #[error("{message}")]
    BadRequest { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// The storage backend could not serve the request (pool timeout, I/O, closed pool).
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(fields: FieldErrors) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            fields,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation { fields, .. } => Some(fields),
            _ => None,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, fields } => (
                "validation_error",
                message.clone(),
                json!({ "fields": fields }),
            ),
            AppError::BadRequest { message, details } => {
                ("bad_request", message.clone(), details.clone())
            }
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
            AppError::Conflict { message, details } => {
                ("conflict", message.clone(), details.clone())
            }
            AppError::StoreUnavailable { message, details } => {
                ("store_unavailable", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<FieldErrors> for AppError {
    fn from(fields: FieldErrors) -> Self {
        AppError::validation(fields)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::validation(FieldErrors::from(errors))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_foreign_key_violation() {
            return AppError::not_found(
                "Referenced record not found",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::store_unavailable("Database unavailable", json!({ "reason": e.to_string() }))
        }
        sqlx::Error::Tls(_) => {
            AppError::store_unavailable("Database unavailable", json!({ "reason": "tls" }))
        }
        other => {
            tracing::error!(error = %other, "Database error");
            AppError::internal("Database error", json!({}))
        }
    }
}
