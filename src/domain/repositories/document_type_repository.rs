//! Repository trait for the document type registry.

use crate::domain::entities::{DocumentType, NewDocumentType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for document types.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentTypeRepository: Send + Sync {
    /// Registers a new document type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    async fn create(&self, new_type: NewDocumentType) -> Result<DocumentType, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<DocumentType>, AppError>;

    async fn find_by_short_code(&self, short_code: &str)
    -> Result<Option<DocumentType>, AppError>;

    /// All document types ordered by short code.
    async fn list(&self) -> Result<Vec<DocumentType>, AppError>;

    /// Round-trips to the backing store. Used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}
