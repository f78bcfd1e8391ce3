//! HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Template for error pages.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// An [`AppError`] rendered as an HTML page instead of JSON.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl WebError {
    pub fn not_found(what: &str) -> Self {
        WebError(AppError::not_found(
            format!("{what} not found"),
            serde_json::Value::Null,
        ))
    }
}

impl From<AppError> for WebError {
    fn from(e: AppError) -> Self {
        WebError(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = %status, "Page failed");
        }

        // Store failures are not described to the browser.
        let message = if status.is_server_error() {
            "The service is temporarily unable to handle this request.".to_string()
        } else {
            self.0.to_string()
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };

        (status, page).into_response()
    }
}

/// Parses an id path segment; anything that isn't an integer is a missing page.
pub fn parse_id(raw: &str, what: &str) -> Result<i64, WebError> {
    raw.parse::<i64>().map_err(|_| WebError::not_found(what))
}
