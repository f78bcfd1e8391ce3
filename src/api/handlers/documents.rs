//! Handlers for document endpoints (register, read, edit, search).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::document::{DocumentForm, DocumentResponse};
use crate::api::dto::pagination::{PaginationMeta, SearchParams};
use crate::api::dto::search::DocumentListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists documents, optionally ranked by a full-text query.
///
/// # Endpoint
///
/// `GET /api/documents?q=<text>&page=<n>`
///
/// # Query Parameters
///
/// - `q` (optional): search text; absent or blank lists every document by id
/// - `page` (optional): 1-based page number (default: 1), 25 documents per page
///
/// A page past the end returns an empty `items` array.
///
/// # Errors
///
/// Returns 400 Bad Request for page 0.
pub async fn list_documents_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<DocumentListResponse>, AppError> {
    let page_request = params.page_request()?;
    let query = params.query();

    let page = state
        .document_service
        .search(&query, page_request)
        .await?;

    let pagination = PaginationMeta::from(&page);
    Ok(Json(DocumentListResponse {
        query: query.text().map(str::to_string),
        pagination,
        items: page.items.into_iter().map(DocumentResponse::from).collect(),
    }))
}

/// Registers a new document.
///
/// # Endpoint
///
/// `POST /api/documents`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "test",
///   "document_type": 1,
///   "description": "test",
///   "author_name": "Mr QA",
///   "author_email": "qa@example.com",
///   "link": "https://www.example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with a field map under `error.details.fields` if any field is
/// invalid. Nothing is stored in that case.
pub async fn create_document_handler(
    State(state): State<AppState>,
    Json(form): Json<DocumentForm>,
) -> Result<(StatusCode, Json<DocumentResponse>), AppError> {
    let document_types = state.document_type_service.list().await?;
    let input = form.into_input(&document_types)?;

    let document = state.document_service.register(input).await?;

    Ok((StatusCode::CREATED, Json(document.into())))
}

/// Returns a single document.
///
/// # Endpoint
///
/// `GET /api/documents/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the document doesn't exist.
pub async fn get_document_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = state.document_service.get(id).await?;
    Ok(Json(document.into()))
}

/// Replaces every editable field of a document.
///
/// # Endpoint
///
/// `PUT /api/documents/{id}`
///
/// The request body has the same shape as registration. The tag is unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the document doesn't exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_document_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(form): Json<DocumentForm>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document_types = state.document_type_service.list().await?;
    let input = form.into_input(&document_types)?;

    let document = state.document_service.update(id, input).await?;

    Ok(Json(document.into()))
}
