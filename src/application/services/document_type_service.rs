//! Document type registry management.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{DocumentType, NewDocumentType};
use crate::domain::repositories::DocumentTypeRepository;
use crate::error::AppError;

/// Service for the document type registry.
pub struct DocumentTypeService {
    repository: Arc<dyn DocumentTypeRepository>,
}

impl DocumentTypeService {
    /// Creates a new document type service.
    pub fn new(repository: Arc<dyn DocumentTypeRepository>) -> Self {
        Self { repository }
    }

    /// Registers a document type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already registered.
    pub async fn create(&self, new_type: NewDocumentType) -> Result<DocumentType, AppError> {
        if self
            .repository
            .find_by_short_code(&new_type.short_code)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "Document type short code already exists",
                json!({ "short_code": new_type.short_code }),
            ));
        }

        let document_type = self.repository.create(new_type).await?;
        tracing::info!(id = document_type.id, short_code = %document_type.short_code, "Document type created");

        Ok(document_type)
    }

    /// Retrieves a document type by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no type has this id.
    pub async fn get(&self, id: i64) -> Result<DocumentType, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document type not found", json!({ "id": id })))
    }

    /// All document types ordered by short code.
    pub async fn list(&self) -> Result<Vec<DocumentType>, AppError> {
        self.repository.list().await
    }

    /// Checks that the backing store answers.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
