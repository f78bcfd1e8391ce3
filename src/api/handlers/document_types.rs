//! Handlers for document type endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::document_type::{
    CreateDocumentTypeRequest, DocumentTypeItem, DocumentTypeListResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all document types ordered by short code.
///
/// # Endpoint
///
/// `GET /api/document-types`
pub async fn document_type_list_handler(
    State(state): State<AppState>,
) -> Result<Json<DocumentTypeListResponse>, AppError> {
    let types = state.document_type_service.list().await?;

    Ok(Json(DocumentTypeListResponse {
        items: types.into_iter().map(DocumentTypeItem::from).collect(),
    }))
}

/// Creates a new document type.
///
/// # Endpoint
///
/// `POST /api/document-types`
///
/// # Errors
///
/// Returns 400 if a field is invalid.
/// Returns 409 if the short code already exists.
pub async fn create_document_type_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDocumentTypeRequest>,
) -> Result<(StatusCode, Json<DocumentTypeItem>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let document_type = state.document_type_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(document_type.into())))
}

/// Returns a single document type.
///
/// # Endpoint
///
/// `GET /api/document-types/{id}`
pub async fn get_document_type_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DocumentTypeItem>, AppError> {
    let document_type = state.document_type_service.get(id).await?;
    Ok(Json(document_type.into()))
}
