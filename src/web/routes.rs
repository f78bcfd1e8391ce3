//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    detail_handler, edit_form_handler, edit_handler, register_form_handler, register_handler,
    search_handler,
};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`              - Registration form
/// - `POST /`              - Register, then redirect to the detail page
/// - `GET  /document/{id}` - Document detail
/// - `GET  /edit/{id}`     - Edit form
/// - `POST /edit/{id}`     - Save edits, then redirect to the detail page
/// - `GET  /search`        - Search and list documents
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(register_form_handler).post(register_handler))
        .route("/document/{id}", get(detail_handler))
        .route("/edit/{id}", get(edit_form_handler).post(edit_handler))
        .route("/search", get(search_handler))
}
