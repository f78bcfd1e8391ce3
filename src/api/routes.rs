//! API route configuration.

use crate::api::handlers::{
    create_document_handler, create_document_type_handler, document_type_list_handler,
    get_document_handler, get_document_type_handler, list_documents_handler,
    update_document_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /documents`            - List or search documents (paginated)
/// - `POST /documents`            - Register a document
/// - `GET  /documents/{id}`       - Read a document
/// - `PUT  /documents/{id}`       - Replace a document's fields
/// - `GET  /document-types`       - List document types
/// - `POST /document-types`       - Create a document type
/// - `GET  /document-types/{id}`  - Read a document type
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents",
            get(list_documents_handler).post(create_document_handler),
        )
        .route(
            "/documents/{id}",
            get(get_document_handler).put(update_document_handler),
        )
        .route(
            "/document-types",
            get(document_type_list_handler).post(create_document_type_handler),
        )
        .route("/document-types/{id}", get(get_document_type_handler))
}
